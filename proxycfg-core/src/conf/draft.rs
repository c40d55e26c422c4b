//! The reconstructed candidate configuration handed to validation.
//!
//! A draft keeps raw field values (address text, signed integers, option text)
//! so that every malformed value can be reported against its own field path.
//! Drafts come from the flat edit map, from the wire shape, or from an
//! already typed [`ProxyConfig`].

use crate::conf::codec::options;
use crate::conf::types::{CheckerKind, CheckerVariant, Discriminators, ProtocolKind, ProxyConfig};
use crate::conf::variant::{Tagged, VariantSlot};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfigDraft {
    pub service_name: String,
    pub listener_address: String,
    pub connection_limit: i64,
    pub load_balance: String,
    pub health_check: HealthCheckDraft,
    pub connect_timeout: String,
    pub idle_timeout: String,
    pub options: VariantSlot<OptionsDraft>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthCheckDraft {
    pub interval: String,
    pub timeout: String,
    pub fall_threshold: i64,
    pub rise_threshold: i64,
    pub checker: VariantSlot<CheckerVariant>,
}

/// Option payload as it arrived: text from an edit, or a value from the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOptions {
    Text(String),
    Structured(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionsDraft {
    pub protocol: ProtocolKind,
    pub raw: Option<RawOptions>,
}

impl OptionsDraft {
    pub fn new(protocol: ProtocolKind, raw: Option<RawOptions>) -> Self {
        Self { protocol, raw }
    }

    pub fn text(&self) -> String {
        match &self.raw {
            None => String::new(),
            Some(RawOptions::Text(text)) => text.clone(),
            Some(RawOptions::Structured(value)) => options::encode(value),
        }
    }
}

impl Tagged for OptionsDraft {
    type Tag = ProtocolKind;

    fn tag(&self) -> ProtocolKind {
        self.protocol
    }

    fn empty(tag: ProtocolKind) -> Self {
        Self::new(tag, None)
    }
}

impl ProxyConfigDraft {
    pub fn discriminators(&self) -> Discriminators {
        Discriminators {
            checker: self.health_check.checker.active(),
            protocol: self.options.active(),
        }
    }
}

impl Default for HealthCheckDraft {
    fn default() -> Self {
        Self {
            interval: String::new(),
            timeout: String::new(),
            fall_threshold: 0,
            rise_threshold: 0,
            checker: VariantSlot::new(CheckerKind::default()),
        }
    }
}

impl From<&ProxyConfig> for ProxyConfigDraft {
    fn from(config: &ProxyConfig) -> Self {
        let instance = &config.instance;
        let health_check = &instance.health_check;
        let options = &instance.protocol_options;

        Self {
            service_name: config.service_name.clone(),
            listener_address: instance.listener.address.to_string(),
            connection_limit: instance.listener.connection_limit.into(),
            load_balance: instance.load_balance.to_string(),
            health_check: HealthCheckDraft {
                interval: health_check.interval.clone(),
                timeout: health_check.timeout.clone(),
                fall_threshold: health_check.fall_threshold.into(),
                rise_threshold: health_check.rise_threshold.into(),
                checker: VariantSlot::with_candidates(
                    health_check.checker.tag(),
                    [health_check.checker.clone()],
                ),
            },
            connect_timeout: instance.connect_timeout.clone(),
            idle_timeout: instance.idle_timeout.clone(),
            options: VariantSlot::with_candidates(
                options.protocol,
                [OptionsDraft::new(
                    options.protocol,
                    options.payload.clone().map(RawOptions::Structured),
                )],
            ),
        }
    }
}
