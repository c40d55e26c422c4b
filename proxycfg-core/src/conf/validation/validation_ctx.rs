use crate::conf::error::{ConfigError, ParseError, ValidationError};
use thiserror::Error;

/// Collects field errors across a whole validation pass.
///
/// One error per field path: the first one recorded wins.
#[derive(Debug, Default)]
pub struct ValidationCtx {
    errors: Vec<ConfigError>,
}

impl ValidationCtx {
    pub fn push(&mut self, err: ConfigError) {
        if self.has_error_at(err.path()) {
            return;
        }
        self.errors.push(err);
    }

    pub fn parse_error(&mut self, path: &str, err: ParseError) {
        self.push(ConfigError::parse(path, err));
    }

    pub fn invalid(&mut self, path: &str, err: ValidationError) {
        self.push(ConfigError::validation(path, err));
    }

    pub fn has_error_at(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path() == path)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Non-empty, ordered list of field errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("configuration validation failed ({} errors)", .0.len())]
pub struct ValidationErrors(pub Vec<ConfigError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        self.0.iter()
    }

    pub fn paths(&self) -> Vec<&str> {
        self.0.iter().map(ConfigError::path).collect()
    }

    pub fn get(&self, path: &str) -> Option<&ConfigError> {
        self.0.iter().find(|e| e.path() == path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ConfigError> for ValidationErrors {
    fn from(err: ConfigError) -> Self {
        Self(vec![err])
    }
}
