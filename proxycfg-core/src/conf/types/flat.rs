use crate::conf::error::ValidationError;
use crate::conf::types::{CheckerKind, ProtocolKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Primitive edit value held by a single flat field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlatValue {
    Number(i64),
    Text(String),
}

impl FlatValue {
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Numeric reading. Text is accepted when it spells an integer.
    pub fn as_integer(&self) -> Result<i64, ValidationError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ValidationError::NotAnInteger { found: s.clone() }),
        }
    }
}

impl From<&str> for FlatValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FlatValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FlatValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FlatValue {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

/// Mapping of dotted field paths to primitive edit values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatConfig(BTreeMap<String, FlatValue>);

impl FlatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&FlatValue> {
        self.0.get(path)
    }

    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<FlatValue>) {
        self.0.insert(path.into(), value.into());
    }

    pub fn remove(&mut self, path: &str) -> Option<FlatValue> {
        self.0.remove(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|path, _| keep(path));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlatValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FlatValue>> FromIterator<(K, V)> for FlatConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The two independent variant selections of an edit session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discriminators {
    pub checker: CheckerKind,
    pub protocol: ProtocolKind,
}
