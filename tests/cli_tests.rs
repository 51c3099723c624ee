use assert_cmd::Command;
use predicates::prelude::*;

fn coincourier() -> Command {
    let mut cmd = Command::cargo_bin("coincourier").expect("binary builds");
    cmd.env_remove("TELEGRAM_BOT_TOKEN").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    coincourier()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("broadcast"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_validates_config_and_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("cli.db");
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!("database = {:?}\n\n[logging]\nlevel = \"warn\"\n", db.to_string_lossy()),
    )
    .unwrap();

    coincourier()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(valid)"))
        .stdout(predicate::str::contains("4 known coins"))
        .stdout(predicate::str::contains("TELEGRAM_BOT_TOKEN is not set"));

    assert!(db.exists());
}

#[test]
fn missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    coincourier()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[coingecko]\napi_url = \"not a url\"\n").unwrap();

    coincourier()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("api_url"));
}

#[test]
fn run_without_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "database = \":memory:\"\n").unwrap();

    coincourier()
        .arg("--config")
        .arg(&config)
        .arg("run")
        .current_dir(dir.path())
        .assert()
        .failure();
}
