//! Wire shape of a proxy profile as exchanged with the configuration store.
//!
//! Field names are part of the contract. The checker and the protocol options
//! are unions discriminated by presence here; lowering turns them into
//! explicit variants.

use crate::conf::types::{LbPolicy, ProtocolKind};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfigSpec {
    #[serde(alias = "service_name")]
    pub service_name: String,
    pub config: ProxyInstanceSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyInstanceSpec {
    pub listener: ListenerSpec,
    #[serde(default)]
    pub load_balance: LbPolicy,
    #[serde(default)]
    pub health_check: HealthCheckSpec,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub connect_timeout: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub idle_timeout: String,
    #[serde(default)]
    pub protocol: ProtocolKind,
    #[serde(
        default,
        deserialize_with = "present_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub tcp_option: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub redis_option: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub mysql_option: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerSpec {
    pub address: AddressSpec,
    #[serde(default)]
    pub connection_limit: i64,
}

/// Signed port so out-of-range values reach validation instead of failing decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddressSpec {
    pub ip: String,
    pub port: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub interval: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timeout: String,
    #[serde(default)]
    pub fall_threshold: i64,
    #[serde(default)]
    pub rise_threshold: i64,
    #[serde(default)]
    pub checker: CheckerSpec,
}

/// Absence of all three sub-objects selects the plain TCP checker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atcp_checker: Option<AtcpCheckerSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mysql_checker: Option<MysqlCheckerSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_checker: Option<RedisCheckerSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AtcpCheckerSpec {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MysqlCheckerSpec {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedisCheckerSpec {
    #[serde(default)]
    pub password: String,
}

/// A present option field is a payload, even when it is `null`.
fn present_option<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ProxyInstanceSpec {
    /// Option payloads present on the wire, by protocol.
    pub fn options(&self) -> impl Iterator<Item = (ProtocolKind, &Value)> {
        [
            (ProtocolKind::Tcp, self.tcp_option.as_ref()),
            (ProtocolKind::Redis, self.redis_option.as_ref()),
            (ProtocolKind::Mysql, self.mysql_option.as_ref()),
        ]
        .into_iter()
        .filter_map(|(protocol, value)| value.map(|v| (protocol, v)))
    }

    pub fn set_option(&mut self, protocol: ProtocolKind, value: Option<Value>) {
        match protocol {
            ProtocolKind::Tcp => self.tcp_option = value,
            ProtocolKind::Redis => self.redis_option = value,
            ProtocolKind::Mysql => self.mysql_option = value,
        }
    }
}
