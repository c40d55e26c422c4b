use crate::conf::codec::options;
use crate::conf::error::ParseError;
use crate::conf::variant::Tagged;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtocolKind {
    #[default]
    Tcp,
    Redis,
    Mysql,
}

impl ProtocolKind {
    pub const ALL: [ProtocolKind; 3] = [Self::Tcp, Self::Redis, Self::Mysql];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "TCP",
            Self::Redis => "REDIS",
            Self::Mysql => "MYSQL",
        }
    }

    /// Name of the wire field holding this protocol's options.
    pub fn option_field(&self) -> &'static str {
        match self {
            Self::Tcp => "tcpOption",
            Self::Redis => "redisOption",
            Self::Mysql => "mysqlOption",
        }
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownVariant {
                kind: "protocol",
                text: s.to_owned(),
            })
    }
}

/// Protocol selection with its opaque option payload.
///
/// The payload schema belongs to the protocol; this crate stores it without
/// looking inside. `None` means no options were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtocolOptions {
    pub protocol: ProtocolKind,
    pub payload: Option<Value>,
}

impl ProtocolOptions {
    pub fn new(protocol: ProtocolKind, payload: Option<Value>) -> Self {
        Self { protocol, payload }
    }

    /// Serialized form of the payload, empty when there is none.
    pub fn text(&self) -> String {
        options::encode_optional(self.payload.as_ref())
    }
}

impl Tagged for ProtocolOptions {
    type Tag = ProtocolKind;

    fn tag(&self) -> ProtocolKind {
        self.protocol
    }

    fn empty(tag: ProtocolKind) -> Self {
        Self::new(tag, None)
    }
}
