use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated application directory with colour output turned off.
pub fn app_home() -> TempDir {
    let temp = TempDir::new().expect("create temp dir");
    fs::write(
        temp.path().join("config.json"),
        r#"{ "color": false }"#,
    )
    .expect("write test config");
    temp
}

/// Runs the CLI in script mode against `home`, feeding `script` on stdin.
pub fn script(home: &TempDir, script: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("budget_tracker_cli")
        .expect("binary built")
        .env("BUDGET_TRACKER_HOME", home.path())
        .env("BUDGET_TRACKER_CLI_SCRIPT", "1")
        .env("NO_COLOR", "1")
        .write_stdin(script.to_string())
        .assert()
}
