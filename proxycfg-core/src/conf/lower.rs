//! Conversion between the wire shape and the validated model.
//!
//! Lowering reads presence-discriminated unions into explicit variant slots
//! and runs the same validation as an edit session. Raising writes exactly one
//! checker sub-object (none for TCP) and at most one options object.

use crate::conf::draft::{HealthCheckDraft, OptionsDraft, ProxyConfigDraft, RawOptions};
use crate::conf::types::{
    AddressSpec, AtcpCheckerSpec, CheckerKind, CheckerSpec, CheckerVariant, HealthCheckSpec,
    ListenerSpec, MysqlCheckerSpec, ProxyConfig, ProxyConfigSpec, ProxyInstanceSpec,
    RedisCheckerSpec,
};
use crate::conf::validation::{ValidationErrors, validate};
use crate::conf::variant::{Tagged, VariantSlot};
use tracing::debug;

/// Lower and validate a wire document.
pub fn lower_profile(spec: &ProxyConfigSpec) -> Result<ProxyConfig, ValidationErrors> {
    let draft = draft_from_spec(spec);
    debug!(
        service = %draft.service_name,
        checker = %draft.health_check.checker.active(),
        protocol = %draft.options.active(),
        "lowering proxy profile"
    );
    validate(&draft)
}

pub fn draft_from_spec(spec: &ProxyConfigSpec) -> ProxyConfigDraft {
    let instance = &spec.config;
    let hc = &instance.health_check;
    let address = &instance.listener.address;

    ProxyConfigDraft {
        service_name: spec.service_name.clone(),
        listener_address: format!("{}:{}", address.ip, address.port),
        connection_limit: instance.listener.connection_limit,
        load_balance: instance.load_balance.to_string(),
        health_check: HealthCheckDraft {
            interval: hc.interval.clone(),
            timeout: hc.timeout.clone(),
            fall_threshold: hc.fall_threshold,
            rise_threshold: hc.rise_threshold,
            checker: checker_slot(&hc.checker),
        },
        connect_timeout: instance.connect_timeout.clone(),
        idle_timeout: instance.idle_timeout.clone(),
        options: options_slot(instance),
    }
}

/// Infer the checker from the sub-objects present, Redis first, then ATCP,
/// then MySQL. Any further sub-object stays as an orphan candidate.
fn checker_slot(spec: &CheckerSpec) -> VariantSlot<CheckerVariant> {
    let mut candidates = Vec::new();
    if let Some(redis) = &spec.redis_checker {
        candidates.push(CheckerVariant::Redis {
            password: redis.password.clone(),
        });
    }
    if spec.atcp_checker.is_some() {
        candidates.push(CheckerVariant::Atcp);
    }
    if let Some(mysql) = &spec.mysql_checker {
        candidates.push(CheckerVariant::MySql {
            username: mysql.username.clone(),
        });
    }

    let active = candidates
        .first()
        .map(Tagged::tag)
        .unwrap_or(CheckerKind::Tcp);
    if candidates.is_empty() {
        candidates.push(CheckerVariant::Tcp);
    }
    VariantSlot::with_candidates(active, candidates)
}

fn options_slot(instance: &ProxyInstanceSpec) -> VariantSlot<OptionsDraft> {
    let mut slot = VariantSlot::with_candidates(
        instance.protocol,
        instance.options().map(|(protocol, value)| {
            OptionsDraft::new(protocol, Some(RawOptions::Structured(value.clone())))
        }),
    );
    if !slot.contains(instance.protocol) {
        slot.insert(OptionsDraft::empty(instance.protocol));
    }
    slot
}

impl From<&ProxyConfig> for ProxyConfigSpec {
    fn from(config: &ProxyConfig) -> Self {
        let instance = &config.instance;
        let hc = &instance.health_check;

        let checker = match &hc.checker {
            CheckerVariant::Tcp => CheckerSpec::default(),
            CheckerVariant::Atcp => CheckerSpec {
                atcp_checker: Some(AtcpCheckerSpec {}),
                ..Default::default()
            },
            CheckerVariant::MySql { username } => CheckerSpec {
                mysql_checker: Some(MysqlCheckerSpec {
                    username: username.clone(),
                }),
                ..Default::default()
            },
            CheckerVariant::Redis { password } => CheckerSpec {
                redis_checker: Some(RedisCheckerSpec {
                    password: password.clone(),
                }),
                ..Default::default()
            },
        };

        let mut spec = ProxyInstanceSpec {
            listener: ListenerSpec {
                address: AddressSpec {
                    ip: instance.listener.address.host.clone(),
                    port: instance.listener.address.port.into(),
                },
                connection_limit: instance.listener.connection_limit.into(),
            },
            load_balance: instance.load_balance,
            health_check: HealthCheckSpec {
                interval: hc.interval.clone(),
                timeout: hc.timeout.clone(),
                fall_threshold: hc.fall_threshold.into(),
                rise_threshold: hc.rise_threshold.into(),
                checker,
            },
            connect_timeout: instance.connect_timeout.clone(),
            idle_timeout: instance.idle_timeout.clone(),
            protocol: instance.protocol(),
            ..Default::default()
        };
        spec.set_option(
            instance.protocol(),
            instance.protocol_options.payload.clone(),
        );

        ProxyConfigSpec {
            service_name: config.service_name.clone(),
            config: spec,
        }
    }
}
