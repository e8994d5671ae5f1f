//! Integration tests for Settings config loading with layered merge semantics.
//!
//! Merge Semantics:
//! - Defaults → Global: REPLACE
//! - Global → explicit file: symbols APPEND, scalars replace
//!
//! These tests pass explicit paths and never touch the real global config,
//! except the environment override test, which goes through `Settings::load`.

use std::fs;

use tempfile::TempDir;

use morsetree::application::{ApplicationError, CodecService};
use morsetree::config::Settings;

#[test]
fn given_no_files_when_load_then_returns_defaults() {
    let settings = Settings::load_from(None, None).expect("load settings");
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_global_file_when_load_then_skips_it() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load_from(Some(&dir.path().join("absent.toml")), None).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_missing_explicit_file_when_load_then_errors() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load_from(None, Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_global_and_local_symbols_when_load_then_local_appends() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let local = dir.path().join("local.toml");
    fs::write(
        &global,
        r#"
preload_alphabet = false

[[symbols]]
symbol = "?"
code = "..--.."
"#,
    )
    .unwrap();
    fs::write(
        &local,
        r#"
[[symbols]]
symbol = "!"
code = "-.-.--"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(&global), Some(&local)).unwrap();

    assert!(!settings.preload_alphabet);
    let symbols: Vec<char> = settings.symbols.iter().map(|s| s.symbol).collect();
    assert_eq!(symbols, vec!['?', '!']);
}

#[test]
fn given_malformed_toml_when_load_then_reports_path() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("broken.toml");
    fs::write(&local, "preload_alphabet = maybe").unwrap();

    let err = Settings::load_from(None, Some(&local)).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn given_config_with_symbols_when_building_service_then_symbols_are_usable() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("morsetree.toml");
    fs::write(
        &local,
        r#"
[[symbols]]
symbol = "?"
code = "..--.."
"#,
    )
    .unwrap();

    let settings = Settings::load_from(None, Some(&local)).unwrap();
    let service = CodecService::from_settings(&settings).unwrap();

    assert_eq!(service.encode("OK?").unwrap(), "--- -.- ..--..");
    assert_eq!(service.decode("--- -.- ..--..").unwrap(), "OK?");
}

#[test]
fn given_no_preload_when_building_service_then_tree_is_empty() {
    let settings = Settings {
        preload_alphabet: false,
        symbols: vec![],
    };
    let service = CodecService::from_settings(&settings).unwrap();
    assert!(service.tree().is_empty());
    assert!(matches!(service.encode("SOS"), Err(ApplicationError::EmptyTree)));
}

// Environment variables are process-wide, so every env case lives in this one test
#[test]
fn given_preload_env_var_when_load_then_overrides_or_rejects() {
    std::env::set_var("MORSETREE_PRELOAD_ALPHABET", "false");
    let settings = Settings::load(None);

    std::env::set_var("MORSETREE_PRELOAD_ALPHABET", "nope");
    let rejected = Settings::load(None);

    std::env::remove_var("MORSETREE_PRELOAD_ALPHABET");

    assert!(!settings.expect("load settings").preload_alphabet);
    assert!(matches!(rejected, Err(ApplicationError::Config { .. })));
}
