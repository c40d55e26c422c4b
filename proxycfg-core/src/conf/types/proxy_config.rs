use crate::conf::types::{
    Address, CheckerKind, CheckerVariant, LbPolicy, ProtocolKind, ProtocolOptions,
};
use crate::conf::variant::Tagged;

/// A validated proxy profile, keyed by its immutable service name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyConfig {
    pub service_name: String,
    pub instance: ProxyInstanceConfig,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProxyInstanceConfig {
    pub listener: ListenerConfig,
    pub load_balance: LbPolicy,
    pub health_check: HealthCheckConfig,
    /// Duration string, empty when unset.
    pub connect_timeout: String,
    /// Duration string, empty when unset.
    pub idle_timeout: String,
    pub protocol_options: ProtocolOptions,
}

impl ProxyInstanceConfig {
    pub fn protocol(&self) -> ProtocolKind {
        self.protocol_options.protocol
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerConfig {
    pub address: Address,
    pub connection_limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthCheckConfig {
    pub interval: String,
    pub timeout: String,
    pub fall_threshold: u32,
    pub rise_threshold: u32,
    pub checker: CheckerVariant,
}

impl HealthCheckConfig {
    pub fn checker_kind(&self) -> CheckerKind {
        self.checker.tag()
    }
}
