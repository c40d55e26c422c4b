use crate::conf::error::ParseError;
use crate::conf::paths;
use crate::conf::variant::Tagged;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminator of the health checker union.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CheckerKind {
    #[default]
    #[serde(rename = "TCP")]
    Tcp,
    #[serde(rename = "ATCP")]
    Atcp,
    #[serde(rename = "MySQL")]
    MySql,
    #[serde(rename = "Redis")]
    Redis,
}

impl CheckerKind {
    pub const ALL: [CheckerKind; 4] = [Self::Tcp, Self::Atcp, Self::MySql, Self::Redis];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "TCP",
            Self::Atcp => "ATCP",
            Self::MySql => "MySQL",
            Self::Redis => "Redis",
        }
    }

    /// Path of the variant's checker object. TCP has none and uses the checker itself.
    pub fn object_path(&self) -> &'static str {
        match self {
            Self::Tcp => paths::HEALTH_CHECK_CHECKER,
            Self::Atcp => paths::ATCP_CHECKER,
            Self::MySql => paths::MYSQL_CHECKER,
            Self::Redis => paths::REDIS_CHECKER,
        }
    }

    /// Flat path of the variant's payload field, if the variant carries one.
    pub fn payload_path(&self) -> Option<&'static str> {
        match self {
            Self::Tcp | Self::Atcp => None,
            Self::MySql => Some(paths::MYSQL_CHECKER_USERNAME),
            Self::Redis => Some(paths::REDIS_CHECKER_PASSWORD),
        }
    }
}

impl fmt::Display for CheckerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckerKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "checker",
                text: s.to_owned(),
            })
    }
}

/// Health checker with its payload. Exactly one is active per health check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckerVariant {
    #[default]
    Tcp,
    Atcp,
    MySql {
        username: String,
    },
    Redis {
        password: String,
    },
}

impl CheckerVariant {
    /// Build the variant for `kind`, storing `text` as its payload if it has one.
    pub fn with_payload_text(kind: CheckerKind, text: String) -> Self {
        match kind {
            CheckerKind::Tcp => Self::Tcp,
            CheckerKind::Atcp => Self::Atcp,
            CheckerKind::MySql => Self::MySql { username: text },
            CheckerKind::Redis => Self::Redis { password: text },
        }
    }

    /// The payload value stored under [`CheckerKind::payload_path`].
    pub fn payload_text(&self) -> Option<&str> {
        match self {
            Self::Tcp | Self::Atcp => None,
            Self::MySql { username } => Some(username),
            Self::Redis { password } => Some(password),
        }
    }
}

impl Tagged for CheckerVariant {
    type Tag = CheckerKind;

    fn tag(&self) -> CheckerKind {
        match self {
            Self::Tcp => CheckerKind::Tcp,
            Self::Atcp => CheckerKind::Atcp,
            Self::MySql { .. } => CheckerKind::MySql,
            Self::Redis { .. } => CheckerKind::Redis,
        }
    }

    fn empty(tag: CheckerKind) -> Self {
        match tag {
            CheckerKind::Tcp => Self::Tcp,
            CheckerKind::Atcp => Self::Atcp,
            CheckerKind::MySql => Self::MySql {
                username: String::new(),
            },
            CheckerKind::Redis => Self::Redis {
                password: String::new(),
            },
        }
    }
}
