use crate::conf::ParseError;
use crate::conf::codec::{address, duration, options};
use crate::conf::types::Address;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn parse_address_splits_host_and_port() {
    // Arrange
    let text = "10.0.0.1:8080";

    // Act
    let parsed = address::parse(text).unwrap();

    // Assert
    assert_eq!(parsed, Address::new("10.0.0.1", 8080));
    assert_eq!(address::format(&parsed), "10.0.0.1:8080");
}

#[test]
fn parse_address_splits_on_last_colon() {
    // Act
    let parsed = address::parse("::1:6379").unwrap();

    // Assert
    assert_eq!(parsed, Address::new("::1", 6379));
}

#[test]
fn parse_address_without_separator_fails() {
    // Act
    let err = address::parse("localhost").unwrap_err();

    // Assert
    assert_eq!(
        err,
        ParseError::MissingPortSeparator {
            text: "localhost".to_string()
        }
    );
}

#[test]
fn parse_address_rejects_non_numeric_port() {
    // Act
    let err = address::parse("db.internal:mysql").unwrap_err();

    // Assert
    assert_eq!(
        err,
        ParseError::InvalidPort {
            port: "mysql".to_string()
        }
    );
}

#[test]
fn parse_address_rejects_non_canonical_ports() {
    for text in ["host:", "host:+80", "host:080", "host:-1"] {
        let err = address::parse(text).unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidPort { .. }),
            "{text} gave {err:?}"
        );
    }
}

#[test]
fn parse_address_rejects_out_of_range_port() {
    // Act
    let err = address::parse("host:70000").unwrap_err();

    // Assert
    assert_eq!(
        err,
        ParseError::PortOutOfRange {
            port: "70000".to_string()
        }
    );
}

#[test]
fn formatted_address_text_is_preserved() {
    for text in ["127.0.0.1:0", "example.com:65535", ":80", "[::1]:443"] {
        let parsed = address::parse(text).unwrap();
        assert_eq!(address::format(&parsed), text);
    }
}

#[test]
fn address_from_str_uses_the_codec() {
    // Act
    let parsed: Address = "0.0.0.0:6379".parse().unwrap();

    // Assert
    assert_eq!(parsed.to_string(), "0.0.0.0:6379");
}

#[test]
fn options_payload_is_kept_opaque() {
    // Arrange
    let text = r#"{"pool":{"max":[1,2,{"deep":null}]},"name":"x","ratio":0.1}"#;

    // Act
    let decoded = options::decode(text).unwrap();

    // Assert
    assert_eq!(
        decoded,
        json!({"pool": {"max": [1, 2, {"deep": null}]}, "name": "x", "ratio": 0.1})
    );
    assert_eq!(options::decode(&options::encode(&decoded)).unwrap(), decoded);
}

#[test]
fn options_encoding_sorts_object_keys() {
    // Arrange
    let payload = json!({"b": 1, "a": {"z": true, "y": "v"}});

    // Act
    let text = options::encode(&payload);

    // Assert
    assert_eq!(text, r#"{"a":{"y":"v","z":true},"b":1}"#);
}

#[test]
fn malformed_options_text_fails() {
    // Act
    let err = options::decode("{").unwrap_err();

    // Assert
    assert!(matches!(err, ParseError::MalformedOptions { .. }));
}

#[test]
fn blank_options_text_means_no_payload() {
    assert_eq!(options::decode_optional("").unwrap(), None);
    assert_eq!(options::decode_optional("   ").unwrap(), None);
    assert_eq!(options::encode_optional(None), "");
}

#[test]
fn durations_accept_protobuf_json_seconds() {
    for text in ["", "0s", "10s", "1.5s", "-0.25s", "3.000000001s"] {
        assert_eq!(duration::check(text), Ok(()), "{text}");
    }
}

#[test]
fn durations_reject_other_forms() {
    for text in ["10", "s", "1.s", ".5s", "1.0000000001s", "5m", "ten s", " 1s"] {
        assert_eq!(
            duration::check(text),
            Err(ParseError::InvalidDuration {
                text: text.to_string()
            }),
            "{text}"
        );
    }
}
