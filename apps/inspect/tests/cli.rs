use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
[logging]
level = "warn"

[[metadata.channels]]
uid = "intesisbox:wmp:livingroom:setpoint"
limits = { min = 16, max = 30 }

[[metadata.channels]]
uid = "intesisbox:wmp:livingroom:mode"
options = [
    { value = "AUTO", label = "Auto" },
    { value = "HEAT", label = "Heat" },
    { value = "COOL" },
]
"#;

fn workspace(config: &str) -> Result<TempDir, Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("shub.toml"), config)?;
    Ok(dir)
}

#[test]
fn channels_are_listed_sorted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace(CONFIG)?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .arg("channels")
        .assert()
        .success()
        .stdout("intesisbox:wmp:livingroom:mode\nintesisbox:wmp:livingroom:setpoint\n");

    Ok(())
}

#[test]
fn describe_prints_stored_limits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace(CONFIG)?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .args(["describe", "intesisbox:wmp:livingroom:setpoint"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""minimum": "16""#))
        .stdout(predicate::str::contains(r#""maximum": "30""#))
        .stdout(predicate::str::contains(r#""options": []"#));

    Ok(())
}

#[test]
fn describe_merges_into_base() -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace(CONFIG)?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .args([
            "describe",
            "intesisbox:wmp:livingroom:mode",
            "--base",
            r#"{"step": "0.5", "minimum": "1", "options": [{"value": "DRY"}]}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""step": "0.5""#))
        .stdout(predicate::str::contains(r#""minimum": "1""#))
        .stdout(predicate::str::contains(r#""label": "Heat""#))
        .stdout(predicate::str::contains("DRY").not());

    Ok(())
}

#[test]
fn explicit_config_path_is_used() -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace("")?;
    let config = dir.path().join("custom.toml");
    fs::write(&config, CONFIG)?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("channels")
        .assert()
        .success()
        .stdout(predicate::str::contains("intesisbox:wmp:livingroom:setpoint"));

    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "channels"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));

    Ok(())
}

#[test]
fn unknown_channel_without_config_is_empty_description() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .args(["describe", "hub:unknown"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""readOnly": false"#))
        .stdout(predicate::str::contains("minimum").not());

    Ok(())
}

#[test]
fn malformed_uid_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .args(["describe", "hub::mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid channel uid 'hub::mode'"));

    Ok(())
}

#[test]
fn invalid_seed_uid_fails_startup() -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace("[[metadata.channels]]\nuid = \"hub:bad uid\"\n")?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .arg("channels")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to seed the metadata store"));

    Ok(())
}

#[test]
fn numeric_env_override_is_typed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace(CONFIG)?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .env("SHUB__METADATA__INITIAL_CAPACITY", "8")
        .arg("channels")
        .assert()
        .success()
        .stdout(predicate::str::contains("intesisbox:wmp:livingroom:mode"));

    Ok(())
}

#[test]
fn string_env_override_reaches_logging() -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace(CONFIG)?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .env("SHUB__LOGGING__LEVEL", "bogus")
        .arg("channels")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level 'bogus'"));

    Ok(())
}

#[test]
fn configuration_load_is_logged_after_logger_init() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("SHUB__LOGGING__LEVEL", "info")
        .arg("channels")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration loaded"));

    cargo_bin_cmd!("shub")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("SHUB__LOGGING__LEVEL", "warn")
        .arg("channels")
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration loaded").not());

    Ok(())
}
