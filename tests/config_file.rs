use std::io::Write;

use smart_dashboard::config::{Config, ConfigError};
use smart_dashboard::fields::SortKey;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_explicit_file() {
    let file = write_config(
        r#"
page_size = 2
default_sort = "priority"
log_file = "sd.log"

[login]
email = "lead@example.com"
password = "hunter2"
"#,
    );
    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.page_size, 2);
    assert_eq!(config.default_sort, SortKey::Priority);
    assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("sd.log")));
    assert_eq!(config.login.email, "lead@example.com");
    assert_eq!(config.login.password, "hunter2");
}

#[test]
fn load_validates() {
    let file = write_config("page_size = 0\n");
    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { field: "page_size", .. }));
    assert!(err.to_string().contains("page_size"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("page_size = \"three\"\n");
    assert!(matches!(
        Config::load(Some(file.path())),
        Err(ConfigError::Parse(_))
    ));
}
