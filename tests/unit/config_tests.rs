// Configuration loading tests

use std::io::Write;

use tempfile::NamedTempFile;
use wixmedia::{MediaConfig, MediaError};

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "credentials:\n  access_key: my_key\n  secret_key: my_secret\nimages:\n  default_quality: 85"
    )
    .unwrap();

    let config = MediaConfig::from_file(file.path()).unwrap();
    assert_eq!(config.images.default_quality, Some(85));

    let mut image = config.image("d/dog.png");
    image.fill(10, 10, None).unwrap();
    assert_eq!(image.rest_url(), "d/fill/w_10,h_10,q_85/dog.png");

    let header = config
        .authorization_header("GET", "/files", [("x-wix-a", "1")])
        .unwrap();
    assert!(header.starts_with("WIX my_key:"));
}

#[test]
fn test_missing_file() {
    let err = MediaConfig::from_file("/nonexistent/wixmedia.yaml").unwrap_err();
    assert!(matches!(err, MediaError::Config(_)));
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_invalid_yaml() {
    let err = MediaConfig::from_yaml_with_env("images: [1, 2").unwrap_err();
    assert!(matches!(err, MediaError::Config(_)));
}

#[test]
fn test_empty_credentials_rejected() {
    let yaml = "credentials:\n  access_key: \"\"\n  secret_key: s\n";
    assert!(MediaConfig::from_yaml_with_env(yaml).is_err());
}

#[test]
fn test_strict_names_from_config() {
    let config = MediaConfig::from_yaml_with_env("images:\n  strict_names: true\n").unwrap();
    let mut image = config.image("d/dog.png");
    image.adjust([("gamma", 2)]);

    let err = image.checked_rest_url().unwrap_err();
    assert!(err.to_string().contains("gamma"));
}
