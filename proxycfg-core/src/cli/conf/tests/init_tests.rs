use crate::cli::conf::{init, render_new_profile};
use crate::conf::load_profile;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn new_profile_passes_check() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("edge.json");

    // Act
    init("edge", "127.0.0.1:9000", Some(path.clone())).unwrap();

    // Assert
    let config = load_profile(&path).unwrap();
    assert_eq!(config.service_name, "edge");
    assert_eq!(config.instance.listener.address.to_string(), "127.0.0.1:9000");
}

#[test]
fn init_refuses_to_overwrite() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("edge.json");
    fs::write(&path, "keep").unwrap();

    // Act
    let result = init("edge", "127.0.0.1:9000", Some(path.clone()));

    // Assert
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
}

#[test]
fn new_profile_rejects_a_bad_address() {
    // Act
    let result = render_new_profile("edge", "nowhere");

    // Assert
    assert!(result.is_err());
}
