use reflow_lib::config::{Config, ConfigError, create_default_config, find_config_file};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_config_file() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("reflow.toml");
    fs::write(&config_path, "[global]\nwrap-width = 72\nrestore-cursor = false\n").expect("Failed to write config");

    let config = Config::load(Some(config_path.as_path())).expect("Config should load");
    assert_eq!(config.global.wrap_width.get(), 72);
    assert!(!config.global.restore_cursor);

    let options = config.reflow_options();
    assert_eq!(options.wrap_width.get(), 72);
    assert!(!options.restore_cursor);
}

#[test]
fn test_load_without_path_is_default() {
    let config = Config::load(None).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.global.wrap_width.get(), 80);
    assert!(config.global.restore_cursor);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    let err = Config::load(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::IoError { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_load_invalid_toml() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("reflow.toml");
    fs::write(&config_path, "[global\nwrap-width = ").unwrap();
    let err = Config::load(Some(config_path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_discover_walks_up_to_parent() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".reflow.toml"), "[global]\nwrap-width = 100\n").unwrap();
    let nested = root.join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_config_file(&nested), Some(root.join(".reflow.toml")));
    let config = Config::discover(&nested).unwrap();
    assert_eq!(config.global.wrap_width.get(), 100);
}

#[test]
fn test_discover_prefers_dotfile() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".reflow.toml"), "[global]\nwrap-width = 60\n").unwrap();
    fs::write(root.join("reflow.toml"), "[global]\nwrap-width = 90\n").unwrap();

    assert_eq!(Config::discover(root).unwrap().global.wrap_width.get(), 60);
}

#[test]
fn test_discover_stops_at_git_root() {
    let temp_dir = tempdir().unwrap();
    let outer = temp_dir.path();
    fs::write(outer.join("reflow.toml"), "[global]\nwrap-width = 40\n").unwrap();
    let repo = outer.join("repo");
    fs::create_dir_all(repo.join(".git")).unwrap();

    assert_eq!(find_config_file(&repo), None);
    assert_eq!(Config::discover(&repo).unwrap(), Config::default());
}

#[test]
fn test_create_default_config() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join(".reflow.toml");

    create_default_config(&path).unwrap();
    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config, Config::default());

    let err = create_default_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::FileExists { .. }));
}
