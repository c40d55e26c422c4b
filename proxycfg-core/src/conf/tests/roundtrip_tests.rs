use crate::conf::codec::address;
use crate::conf::tests::test_helpers::minimal_profile;
use crate::conf::types::{
    Address, CheckerVariant, ProtocolKind, ProtocolOptions, ProxyConfig, ProxyConfigSpec,
};
use crate::conf::{flatten, lower_profile};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn checkers() -> Vec<CheckerVariant> {
    vec![
        CheckerVariant::Tcp,
        CheckerVariant::Atcp,
        CheckerVariant::MySql {
            username: "monitor".to_string(),
        },
        CheckerVariant::MySql {
            username: String::new(),
        },
        CheckerVariant::Redis {
            password: "p@ss:w0rd".to_string(),
        },
    ]
}

fn payloads() -> Vec<Option<Value>> {
    vec![
        None,
        Some(json!({"pool": {"max": 16, "hosts": ["a", "b"]}, "tls": null})),
        Some(json!([1, "two", [3.5, {"four": false}], null])),
        Some(json!(42)),
        Some(json!(u64::MAX)),
        Some(json!(1e300)),
        Some(json!(-0.125)),
        Some(json!(true)),
        Some(json!("")),
        Some(json!("text with \"quotes\"")),
        Some(Value::Null),
    ]
}

fn every_profile() -> Vec<ProxyConfig> {
    let mut configs = Vec::new();
    for checker in checkers() {
        for protocol in ProtocolKind::ALL {
            for payload in payloads() {
                let mut config = minimal_profile("edge");
                config.instance.health_check.checker = checker.clone();
                config.instance.protocol_options = ProtocolOptions::new(protocol, payload);
                configs.push(config);
            }
        }
    }
    configs
}

#[test]
fn flatten_round_trips_every_variant_and_payload() {
    for config in every_profile() {
        // Act
        let rebuilt = flatten(Some(&config)).unflatten();

        // Assert
        assert_eq!(rebuilt, Ok(config));
    }
}

#[test]
fn wire_round_trips_every_variant_and_payload() {
    for config in every_profile() {
        // Arrange
        let text = serde_json::to_string(&ProxyConfigSpec::from(&config)).unwrap();

        // Act
        let wire: ProxyConfigSpec = serde_json::from_str(&text).unwrap();
        let lowered = lower_profile(&wire);

        // Assert
        assert_eq!(lowered, Ok(config));
    }
}

#[test]
fn yaml_wire_keeps_a_null_payload() {
    // Arrange
    let mut config = minimal_profile("edge");
    config.instance.protocol_options = ProtocolOptions::new(ProtocolKind::Redis, Some(Value::Null));
    let text = serde_yaml::to_string(&ProxyConfigSpec::from(&config)).unwrap();

    // Act
    let wire: ProxyConfigSpec = serde_yaml::from_str(&text).unwrap();

    // Assert
    assert_eq!(wire.config.redis_option, Some(Value::Null));
    assert_eq!(lower_profile(&wire), Ok(config));
}

#[test]
fn structured_address_survives_its_text_form() {
    for address in [
        Address::new("a:b", 80),
        Address::new("", 0),
        Address::new("::1", 65535),
        Address::new("db.internal", 3306),
    ] {
        // Act
        let parsed = address::parse(&address::format(&address));

        // Assert
        assert_eq!(parsed, Ok(address));
    }
}
