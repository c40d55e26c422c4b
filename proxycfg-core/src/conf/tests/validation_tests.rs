use crate::conf::draft::{OptionsDraft, ProxyConfigDraft, RawOptions};
use crate::conf::paths;
use crate::conf::tests::test_helpers::{minimal_profile, redis_profile};
use crate::conf::types::{CheckerKind, CheckerVariant, ProtocolKind};
use crate::conf::variant::VariantSlot;
use crate::conf::{
    ConfigError, EditSession, ParseError, ValidationError, validate, validate_config,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn validation_reports_every_violation_in_one_pass() {
    // Arrange
    let mut session = EditSession::create();
    session.set(paths::SERVICE_NAME, "").unwrap();
    session.set(paths::LISTENER_CONNECTION_LIMIT, -1_i64).unwrap();
    session.set(paths::LISTENER_ADDRESS, "bad").unwrap();

    // Act
    let errors = session.submit().unwrap_err();

    // Assert
    assert_eq!(
        errors.0,
        vec![
            ConfigError::validation(paths::SERVICE_NAME, ValidationError::Required),
            ConfigError::parse(
                paths::LISTENER_ADDRESS,
                ParseError::MissingPortSeparator {
                    text: "bad".to_string()
                }
            ),
            ConfigError::validation(
                paths::LISTENER_CONNECTION_LIMIT,
                ValidationError::BelowMinimum { value: -1, min: 0 }
            ),
        ]
    );
}

#[test]
fn whitespace_service_name_is_required() {
    // Arrange
    let mut draft = ProxyConfigDraft::from(&minimal_profile("edge"));
    draft.service_name = "   ".to_string();

    // Act
    let errors = validate(&draft).unwrap_err();

    // Assert
    assert_eq!(errors.paths(), vec![paths::SERVICE_NAME]);
}

#[test]
fn thresholds_must_fit_u32() {
    // Arrange
    let mut draft = ProxyConfigDraft::from(&minimal_profile("edge"));
    draft.health_check.rise_threshold = i64::from(u32::MAX) + 1;

    // Act
    let errors = validate(&draft).unwrap_err();

    // Assert
    assert_eq!(
        errors.0,
        vec![ConfigError::validation(
            paths::HEALTH_CHECK_RISE_THRESHOLD,
            ValidationError::AboveMaximum {
                value: 4_294_967_296,
                max: 4_294_967_295
            }
        )]
    );
}

#[test]
fn malformed_durations_are_reported_per_field() {
    // Arrange
    let mut draft = ProxyConfigDraft::from(&minimal_profile("edge"));
    draft.health_check.interval = "5 seconds".to_string();
    draft.idle_timeout = "1m".to_string();

    // Act
    let errors = validate(&draft).unwrap_err();

    // Assert
    assert_eq!(
        errors.paths(),
        vec![paths::HEALTH_CHECK_INTERVAL, paths::IDLE_TIMEOUT]
    );
}

#[test]
fn orphaned_checker_payload_is_rejected() {
    // Arrange
    let mut draft = ProxyConfigDraft::from(&minimal_profile("edge"));
    draft.health_check.checker = VariantSlot::with_candidates(
        CheckerKind::Atcp,
        [
            CheckerVariant::Atcp,
            CheckerVariant::Redis {
                password: "pw".to_string(),
            },
        ],
    );

    // Act
    let errors = validate(&draft).unwrap_err();

    // Assert
    assert_eq!(
        errors.0,
        vec![ConfigError::validation(
            paths::REDIS_CHECKER,
            ValidationError::OrphanedVariant {
                orphan: "Redis".to_string(),
                active: "ATCP".to_string()
            }
        )]
    );
}

#[test]
fn orphaned_options_payload_is_rejected() {
    // Arrange
    let mut draft = ProxyConfigDraft::from(&minimal_profile("edge"));
    draft.options = VariantSlot::with_candidates(
        ProtocolKind::Tcp,
        [OptionsDraft::new(
            ProtocolKind::Mysql,
            Some(RawOptions::Structured(json!({"charset": "utf8mb4"}))),
        )],
    );

    // Act
    let errors = validate(&draft).unwrap_err();

    // Assert
    assert_eq!(
        errors.0,
        vec![ConfigError::validation(
            "mysqlOption",
            ValidationError::OrphanedVariant {
                orphan: "mysqlOption".to_string(),
                active: "TCP".to_string()
            }
        )]
    );
}

#[test]
fn typed_configs_pass_validation() {
    assert_eq!(validate_config(&redis_profile()), Ok(()));
    assert_eq!(validate_config(&minimal_profile("edge")), Ok(()));
}

#[test]
fn typed_config_with_blank_name_fails_validation() {
    // Arrange
    let config = minimal_profile("");

    // Act
    let errors = validate_config(&config).unwrap_err();

    // Assert
    assert_eq!(errors.paths(), vec![paths::SERVICE_NAME]);
}

#[test]
fn validated_draft_builds_the_typed_config() {
    // Arrange
    let draft = ProxyConfigDraft::from(&redis_profile());

    // Act
    let config = validate(&draft).unwrap();

    // Assert
    assert_eq!(config, redis_profile());
}
