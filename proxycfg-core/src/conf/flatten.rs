//! Conversion between a nested [`ProxyConfig`] and the flat edit map.
//!
//! ```text
//! ProxyConfig ──flatten──▶ FlatConfig + Discriminators ──(edits)──▶ unflatten
//!                                                                      │
//!                                 read_draft ─▶ ProxyConfigDraft ─▶ validate
//! ```
//!
//! Checker payload paths are written only for the active checker. The options
//! payload is carried as text under `protoOption`.

use crate::conf::codec::address;
use crate::conf::draft::{HealthCheckDraft, OptionsDraft, ProxyConfigDraft, RawOptions};
use crate::conf::error::ValidationError;
use crate::conf::paths;
use crate::conf::types::{
    CheckerKind, CheckerVariant, Discriminators, FlatConfig, FlatValue, LbPolicy, ProtocolKind,
    ProxyConfig,
};
use crate::conf::validation::{ValidationCtx, ValidationErrors, validate_into};
use crate::conf::variant::{Tagged, VariantSlot};
use serde::Serialize;

/// Flat edit values together with the variant selections they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatProfile {
    pub values: FlatConfig,
    pub discriminators: Discriminators,
}

impl FlatProfile {
    pub fn unflatten(&self) -> Result<ProxyConfig, ValidationErrors> {
        unflatten(&self.values, &self.discriminators)
    }
}

/// Flatten `config`, or produce the defaults of a new configuration.
pub fn flatten(config: Option<&ProxyConfig>) -> FlatProfile {
    let Some(config) = config else {
        return defaults();
    };
    let instance = &config.instance;
    let hc = &instance.health_check;

    let mut values = FlatConfig::new();
    values.insert(paths::SERVICE_NAME, config.service_name.as_str());
    values.insert(
        paths::LISTENER_ADDRESS,
        address::format(&instance.listener.address),
    );
    values.insert(
        paths::LISTENER_CONNECTION_LIMIT,
        instance.listener.connection_limit,
    );
    values.insert(paths::LOAD_BALANCE, instance.load_balance.as_str());
    values.insert(paths::HEALTH_CHECK_INTERVAL, hc.interval.as_str());
    values.insert(paths::HEALTH_CHECK_TIMEOUT, hc.timeout.as_str());
    values.insert(paths::HEALTH_CHECK_FALL_THRESHOLD, hc.fall_threshold);
    values.insert(paths::HEALTH_CHECK_RISE_THRESHOLD, hc.rise_threshold);
    values.insert(paths::CONNECT_TIMEOUT, instance.connect_timeout.as_str());
    values.insert(paths::IDLE_TIMEOUT, instance.idle_timeout.as_str());

    let checker = VariantSlot::with_candidates(hc.checker.tag(), [hc.checker.clone()]);
    write_checker(&checker, &mut values);

    let options = &instance.protocol_options;
    values.insert(paths::PROTO_OPTION, options.text());

    FlatProfile {
        values,
        discriminators: Discriminators {
            checker: checker.active(),
            protocol: options.protocol,
        },
    }
}

fn defaults() -> FlatProfile {
    let values = FlatConfig::from_iter([
        (paths::SERVICE_NAME, FlatValue::from("")),
        (paths::LISTENER_ADDRESS, FlatValue::from("")),
        (paths::LISTENER_CONNECTION_LIMIT, FlatValue::Number(0)),
        (paths::LOAD_BALANCE, FlatValue::from(LbPolicy::default().as_str())),
        (paths::HEALTH_CHECK_INTERVAL, FlatValue::from("")),
        (paths::HEALTH_CHECK_TIMEOUT, FlatValue::from("")),
        (paths::HEALTH_CHECK_FALL_THRESHOLD, FlatValue::Number(0)),
        (paths::HEALTH_CHECK_RISE_THRESHOLD, FlatValue::Number(0)),
        (paths::CONNECT_TIMEOUT, FlatValue::from("")),
        (paths::IDLE_TIMEOUT, FlatValue::from("")),
        (paths::PROTO_OPTION, FlatValue::from("")),
    ]);

    FlatProfile {
        values,
        discriminators: Discriminators::default(),
    }
}

/// Rebuild and validate a configuration from flat values.
///
/// Missing or malformed paths are reported with every other violation; no
/// partially built configuration is ever returned.
pub fn unflatten(
    values: &FlatConfig,
    discriminators: &Discriminators,
) -> Result<ProxyConfig, ValidationErrors> {
    unflatten_checked(values, discriminators, None)
}

/// [`unflatten`] for an edit of an existing configuration whose name must not change.
pub(crate) fn unflatten_checked(
    values: &FlatConfig,
    discriminators: &Discriminators,
    original_name: Option<&str>,
) -> Result<ProxyConfig, ValidationErrors> {
    let mut ctx = ValidationCtx::default();
    let draft = read_draft(values, discriminators, &mut ctx);

    if let Some(original) = original_name
        && draft.service_name != original
    {
        ctx.invalid(
            paths::SERVICE_NAME,
            ValidationError::Immutable {
                original: original.to_owned(),
            },
        );
    }

    let config = validate_into(&draft, &mut ctx);
    ctx.into_result().map(|()| config)
}

/// Read a draft from flat values, reporting missing, unknown and non-numeric paths.
pub fn read_draft(
    values: &FlatConfig,
    discriminators: &Discriminators,
    ctx: &mut ValidationCtx,
) -> ProxyConfigDraft {
    for path in paths::REQUIRED {
        if !values.contains(path) {
            ctx.invalid(path, ValidationError::Required);
        }
    }
    for (path, _) in values.iter() {
        if !paths::is_known(path) {
            ctx.invalid(path, ValidationError::UnknownField);
        }
    }

    ProxyConfigDraft {
        service_name: text(values, paths::SERVICE_NAME),
        listener_address: text(values, paths::LISTENER_ADDRESS),
        connection_limit: integer(values, paths::LISTENER_CONNECTION_LIMIT, ctx),
        load_balance: text(values, paths::LOAD_BALANCE),
        health_check: HealthCheckDraft {
            interval: text(values, paths::HEALTH_CHECK_INTERVAL),
            timeout: text(values, paths::HEALTH_CHECK_TIMEOUT),
            fall_threshold: integer(values, paths::HEALTH_CHECK_FALL_THRESHOLD, ctx),
            rise_threshold: integer(values, paths::HEALTH_CHECK_RISE_THRESHOLD, ctx),
            checker: read_checker(values, discriminators.checker),
        },
        connect_timeout: text(values, paths::CONNECT_TIMEOUT),
        idle_timeout: text(values, paths::IDLE_TIMEOUT),
        options: read_options(values, discriminators.protocol),
    }
}

/// Collect every checker payload present in `values` as a candidate.
pub(crate) fn read_checker(values: &FlatConfig, active: CheckerKind) -> VariantSlot<CheckerVariant> {
    let mut slot = VariantSlot::with_candidates(active, std::iter::empty());

    for kind in CheckerKind::ALL {
        match kind.payload_path() {
            Some(path) => {
                if let Some(value) = values.get(path) {
                    slot.insert(CheckerVariant::with_payload_text(kind, value.to_text()));
                }
            }
            None if kind == active => slot.insert(CheckerVariant::empty(kind)),
            None => {}
        }
    }
    slot
}

/// Replace all checker payload paths with the candidates of `slot`.
pub(crate) fn write_checker(slot: &VariantSlot<CheckerVariant>, values: &mut FlatConfig) {
    values.retain(|path| !paths::is_checker_payload(path));

    for checker in slot.candidates() {
        if let (Some(path), Some(text)) = (checker.tag().payload_path(), checker.payload_text()) {
            values.insert(path, text);
        }
    }
}

pub(crate) fn read_options(values: &FlatConfig, active: ProtocolKind) -> VariantSlot<OptionsDraft> {
    let raw = values
        .get(paths::PROTO_OPTION)
        .map(|v| RawOptions::Text(v.to_text()));
    VariantSlot::with_candidates(active, [OptionsDraft::new(active, raw)])
}

pub(crate) fn write_options(slot: &VariantSlot<OptionsDraft>, values: &mut FlatConfig) {
    let (_, active) = slot.resolve(slot.active());
    values.insert(paths::PROTO_OPTION, active.text());
}

fn text(values: &FlatConfig, path: &str) -> String {
    values.get(path).map(FlatValue::to_text).unwrap_or_default()
}

fn integer(values: &FlatConfig, path: &str, ctx: &mut ValidationCtx) -> i64 {
    match values.get(path).map(FlatValue::as_integer) {
        None => 0,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            ctx.invalid(path, e);
            0
        }
    }
}
