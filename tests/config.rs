use log::LevelFilter;
use todolist::config::Config;
use todolist::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.title, "TODOs list");
    assert_eq!(config.ui.placeholder, "What needs to be done?");
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert!(config.display.show_counts);
    assert!(config.display.dim_completed);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Info);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Blank title should fail
    config.ui.title = "   ".to_string();
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.ui.title = "Groceries".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("title = \"TODOs list\""));
    assert!(toml_str.contains("icon_theme = \"ascii\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
icon_theme = "emoji"

[logging]
enabled = true
level = "debug"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.icon_theme, IconTheme::Emoji);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);

    assert_eq!(config.ui.title, "TODOs list"); // default value
    assert!(config.display.show_counts); // default value
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.title, default_config.ui.title);
    assert_eq!(config.ui.placeholder, default_config.ui.placeholder);
    assert_eq!(config.display.dim_completed, default_config.display.dim_completed);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todolist.toml");
    std::fs::write(&path, "[ui]\ntitle = \"Chores\"\n\n[display]\nshow_counts = false\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.ui.title, "Chores");
    assert!(!config.display.show_counts);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todolist.toml");
    std::fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("chatty"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_generate_config_creates_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");
    assert!(!config_path.parent().unwrap().exists());

    Config::generate_default_config(&config_path).unwrap();

    assert!(config_path.exists());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.starts_with("# todolist Configuration File"));
    assert!(content.contains("placeholder = \"What needs to be done?\""));

    // The generated file loads back cleanly
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.title, Config::default().ui.title);
}
