use crate::conf::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LbPolicy {
    RoundRobin,
    #[default]
    LeastConnection,
    Random,
}

impl LbPolicy {
    pub const ALL: [LbPolicy; 3] = [Self::RoundRobin, Self::LeastConnection, Self::Random];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "ROUND_ROBIN",
            Self::LeastConnection => "LEAST_CONNECTION",
            Self::Random => "RANDOM",
        }
    }
}

impl fmt::Display for LbPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LbPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "load balance policy",
                text: s.to_owned(),
            })
    }
}
