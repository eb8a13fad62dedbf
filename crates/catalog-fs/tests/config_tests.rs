use catalog_fs::{ConfigFormat, ConfigStore, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    count: i32,
}

#[rstest]
#[case("config.toml", "name = \"test\"\ncount = 42")]
#[case("config.json", r#"{"name": "test", "count": 42}"#)]
#[case("config.yaml", "name: test\ncount: 42")]
#[case("config.yml", "name: test\ncount: 42")]
fn test_load_each_format(#[case] file: &str, #[case] body: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(file);
    fs::write(&path, body).unwrap();

    let config: TestConfig = ConfigStore::new().load(&path).unwrap();
    assert_eq!(
        config,
        TestConfig {
            name: "test".into(),
            count: 42
        }
    );
}

#[test]
fn test_save_then_load_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out/index.json");
    let value = TestConfig {
        name: "saved".into(),
        count: 7,
    };

    let store = ConfigStore::new();
    store.save(&path, &value).unwrap();
    let loaded: TestConfig = store.load(&path).unwrap();
    assert_eq!(loaded, value);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\n  \"name\": \"saved\""), "expected pretty JSON: {raw}");
}

#[test]
fn test_unsupported_extension() {
    let result = ConfigFormat::from_path(Path::new("settings.ini"));
    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
}

#[test]
fn test_parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "name = ").unwrap();

    let err = ConfigStore::new().load::<TestConfig>(&path).unwrap_err();
    assert!(err.to_string().contains("TOML"), "got: {err}");
}

#[test]
fn test_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let err = ConfigStore::new()
        .load::<TestConfig>(&temp.path().join("absent.toml"))
        .unwrap_err();
    assert!(err.is_not_found());
}
