use crate::conf::codec::{address, duration};
use crate::conf::draft::ProxyConfigDraft;
use crate::conf::error::ValidationError;
use crate::conf::paths;
use crate::conf::types::{
    Address, HealthCheckConfig, LbPolicy, ListenerConfig, ProxyConfig, ProxyInstanceConfig,
};
use crate::conf::validation::validator::range::{
    CONNECTION_LIMIT, FALL_THRESHOLD, RISE_THRESHOLD, validate_u32,
};
use crate::conf::validation::validator::variant::{validate_checker, validate_options};
use crate::conf::validation::{ValidationCtx, ValidationErrors};
use tracing::debug;

/// Validate a draft and build the accepted configuration.
///
/// Every check runs; all violations are reported, in field order.
pub fn validate(draft: &ProxyConfigDraft) -> Result<ProxyConfig, ValidationErrors> {
    let mut ctx = ValidationCtx::default();
    let config = validate_into(draft, &mut ctx);
    ctx.into_result().map(|()| config)
}

/// Re-check an already typed configuration, e.g. one assembled in code.
pub fn validate_config(config: &ProxyConfig) -> Result<(), ValidationErrors> {
    validate(&ProxyConfigDraft::from(config)).map(|_| ())
}

/// Run all checks against `ctx`.
///
/// The returned value carries placeholders for rejected fields and must be
/// discarded when `ctx` holds errors.
pub(crate) fn validate_into(draft: &ProxyConfigDraft, ctx: &mut ValidationCtx) -> ProxyConfig {
    if draft.service_name.trim().is_empty() {
        ctx.invalid(paths::SERVICE_NAME, ValidationError::Required);
    }

    let address = address::parse(&draft.listener_address).unwrap_or_else(|e| {
        ctx.parse_error(paths::LISTENER_ADDRESS, e);
        Address::default()
    });
    let connection_limit = validate_u32(draft.connection_limit, &CONNECTION_LIMIT, ctx);

    let load_balance = draft.load_balance.parse::<LbPolicy>().unwrap_or_else(|e| {
        ctx.parse_error(paths::LOAD_BALANCE, e);
        LbPolicy::default()
    });

    let hc = &draft.health_check;
    let interval = checked_duration(paths::HEALTH_CHECK_INTERVAL, &hc.interval, ctx);
    let timeout = checked_duration(paths::HEALTH_CHECK_TIMEOUT, &hc.timeout, ctx);
    let fall_threshold = validate_u32(hc.fall_threshold, &FALL_THRESHOLD, ctx);
    let rise_threshold = validate_u32(hc.rise_threshold, &RISE_THRESHOLD, ctx);
    let checker = validate_checker(&hc.checker, ctx);

    let connect_timeout = checked_duration(paths::CONNECT_TIMEOUT, &draft.connect_timeout, ctx);
    let idle_timeout = checked_duration(paths::IDLE_TIMEOUT, &draft.idle_timeout, ctx);
    let protocol_options = validate_options(&draft.options, ctx);

    if !ctx.is_empty() {
        debug!(service = %draft.service_name, "draft rejected by validation");
    }

    ProxyConfig {
        service_name: draft.service_name.clone(),
        instance: ProxyInstanceConfig {
            listener: ListenerConfig {
                address,
                connection_limit,
            },
            load_balance,
            health_check: HealthCheckConfig {
                interval,
                timeout,
                fall_threshold,
                rise_threshold,
                checker,
            },
            connect_timeout,
            idle_timeout,
            protocol_options,
        },
    }
}

fn checked_duration(path: &str, text: &str, ctx: &mut ValidationCtx) -> String {
    if let Err(e) = duration::check(text) {
        ctx.parse_error(path, e);
    }
    text.to_owned()
}
