//! Loading `ClientConfig` from a TOML file

use std::io::Write;
use std::time::Duration;
use storageos_client::{ClientConfig, Error};
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = toml_file(
        r#"
endpoint = "http://10.1.5.249:5705"
username = "storageos"
password = "storageos"
timeout = "5s"
"#,
    );

    let config = ClientConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.endpoint, "http://10.1.5.249:5705");
    assert_eq!(config.username.as_deref(), Some("storageos"));
    assert_eq!(config.api_version, "v1");
    assert_eq!(config.timeout_duration().unwrap(), Duration::from_secs(5));
    assert_eq!(config.base_url(), "http://10.1.5.249:5705/v1");
}

#[test]
fn test_load_rejects_invalid_file_values() {
    let file = toml_file(r#"endpoint = "10.1.5.249:5705""#);
    assert!(matches!(
        ClientConfig::load(Some(file.path())),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        ClientConfig::load(Some(&missing)),
        Err(Error::Config(_))
    ));
}
