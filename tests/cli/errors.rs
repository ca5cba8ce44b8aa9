//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("osv") || out.contains("Usage"));
    assert!(out.contains("rename"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_subcommand_fails() {
    let t = Test::new();

    let output = t.cmd().arg("config").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_not_set_shows_hint() {
    let t = Test::new();

    let output = t.config_get("service");
    assert_failure(&output);
    assert_stderr_contains(&output, "✗");
    assert_stderr_contains(&output, "osv config set");
}

#[test]
fn test_unreadable_config_reports_path() {
    let t = Test::new();
    // A directory where the file should be cannot be read as text
    std::fs::create_dir(t.config_path()).unwrap();

    let output = t.config_get("service");
    assert_failure(&output);
    assert_stderr_contains(&output, "osv.kvc");
}
