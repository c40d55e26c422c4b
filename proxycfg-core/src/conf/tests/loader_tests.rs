use crate::conf::paths;
use crate::conf::tests::test_helpers::{minimal_profile, redis_profile};
use crate::conf::types::ProxyConfigSpec;
use crate::conf::{DocumentFormat, LoadError, load_profile, load_spec};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn load_json_profile() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("redis-cache.json");
    let text = serde_json::to_string_pretty(&ProxyConfigSpec::from(&redis_profile())).unwrap();
    fs::write(&path, text).unwrap();

    // Act
    let config = load_profile(&path).unwrap();

    // Assert
    assert_eq!(config, redis_profile());
}

#[test]
fn load_yaml_profile() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("edge.yaml");
    fs::write(
        &path,
        r#"
serviceName: edge
config:
  listener:
    address:
      ip: "127.0.0.1"
      port: 8080
"#,
    )
    .unwrap();

    // Act
    let config = load_profile(&path).unwrap();

    // Assert
    assert_eq!(config, minimal_profile("edge"));
}

#[test]
fn load_spec_does_not_validate() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.json");
    fs::write(
        &path,
        r#"{"serviceName":"","config":{"listener":{"address":{"ip":"","port":0}}}}"#,
    )
    .unwrap();

    // Act
    let spec = load_spec(&path).unwrap();
    let err = load_profile(&path).unwrap_err();

    // Assert
    assert_eq!(spec.service_name, "");
    match err {
        LoadError::Validation { source, .. } => {
            assert_eq!(source.paths(), vec![paths::SERVICE_NAME]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn load_reports_malformed_documents() {
    // Arrange
    let dir = tempdir().unwrap();
    let json = dir.path().join("broken.json");
    let yaml = dir.path().join("broken.yml");
    fs::write(&json, "{").unwrap();
    fs::write(&yaml, "serviceName: [").unwrap();

    // Act
    let json_err = load_profile(&json).unwrap_err();
    let yaml_err = load_profile(&yaml).unwrap_err();

    // Assert
    assert!(matches!(json_err, LoadError::Json { .. }));
    assert!(matches!(yaml_err, LoadError::Yaml { .. }));
}

#[test]
fn load_reports_missing_files() {
    // Arrange
    let dir = tempdir().unwrap();

    // Act
    let err = load_profile(&dir.path().join("missing.json")).unwrap_err();

    // Assert
    assert!(matches!(err, LoadError::ReadFile { .. }));
}

#[test]
fn document_format_follows_the_extension() {
    assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path(Path::new("a.yml")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path(Path::new("a.json")), DocumentFormat::Json);
    assert_eq!(DocumentFormat::from_path(Path::new("a")), DocumentFormat::Json);
}
