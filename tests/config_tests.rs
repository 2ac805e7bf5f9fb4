use pathquill::config::{Config, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert_eq!(config.indent_size, 2);
    assert!(!config.create_backup);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("output_format = \"yaml\""));
    assert!(toml_str.contains("indent_size = 2"));
    assert!(toml_str.contains("create_backup = false"));
    assert!(toml_str.contains("log_level = \"warn\""));
}

#[test]
fn test_deserialize_partial_config() {
    // Only specify some fields; others should use defaults
    let toml_str = r#"
        output_format = "json"
        indent_size = 4
    "#;

    let config: Config = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.indent_size, 4);
    assert!(!config.create_backup);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_deserialize_empty_config() {
    let config: Config = toml::from_str("").expect("Failed to deserialize config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_unknown_format_is_rejected() {
    let result: Result<Config, _> = toml::from_str("output_format = \"xml\"");
    assert!(result.is_err());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let original = Config {
        output_format: OutputFormat::Json,
        indent_size: 8,
        create_backup: true,
        log_level: "debug".to_string(),
    };
    original.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), original);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(dir.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_invalid_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "indent_size = \"wide\"").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_try_load_reports_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "indent_size = \"wide\"").unwrap();

    let err = Config::try_load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Ignoring invalid config"));
}

#[test]
fn test_try_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::try_load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_try_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "log_level = \"debug\"\n").unwrap();

    let config = Config::try_load_from(&path).unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.output_format, OutputFormat::Yaml);
}
