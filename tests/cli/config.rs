//! Tests for `osv config` commands.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_set_creates_config_file() {
    let t = Test::new();
    assert!(!t.config_path().exists());

    let output = t.config_set("service", "my-service");
    assert_success(&output);
    assert_stdout_contains(&output, "updated");

    assert_eq!(t.config_contents(), "service=my-service\n");
}

#[test]
fn test_set_get_roundtrip() {
    let t = Test::new();
    assert_roundtrip(&t, "service", "my-service");
    assert_roundtrip(&t, "libsecret.collection", "dev");
}

#[test]
fn test_get_prints_plain_value() {
    let t = Test::with_config(SAMPLE_CONFIG);

    t.cmd()
        .args(["config", "get", "service"])
        .assert()
        .success()
        .stdout("work\n");
}

#[test]
fn test_get_multi_line_value() {
    let t = Test::with_config(SAMPLE_CONFIG);

    t.cmd()
        .args(["config", "get", "banner"])
        .assert()
        .success()
        .stdout("line1\nline2\n");
}

#[test]
fn test_get_missing_key_fails() {
    let t = Test::new();

    t.cmd()
        .args(["config", "get", "service"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("service not set"));

    // get pre-creates an empty config file
    assert_eq!(t.config_contents(), "");
}

#[test]
fn test_set_preserves_layout() {
    let t = Test::with_config(SAMPLE_CONFIG);

    assert_success(&t.config_set("service", "personal"));

    assert_eq!(
        t.config_contents(),
        "# osv settings\nservice=personal\n\nbanner=EOF\nline1\nline2\nEOF\nkeychain.name=login\n"
    );
}

#[test]
fn test_set_new_key_appends() {
    let t = Test::with_config(SAMPLE_CONFIG);

    assert_success(&t.config_set("libsecret.collection", "dev"));

    assert!(t
        .config_contents()
        .ends_with("keychain.name=login\nlibsecret.collection=dev\n"));
}

#[test]
fn test_rm_removes_only_that_key() {
    let t = Test::with_config(SAMPLE_CONFIG);

    let output = t.config_rm("banner");
    assert_success(&output);
    assert_stdout_contains(&output, "removed");

    assert_eq!(
        t.config_contents(),
        "# osv settings\nservice=work\n\nkeychain.name=login\n"
    );
    assert_failure(&t.config_get("banner"));
    assert_roundtrip(&t, "extra", "1");
}

#[test]
fn test_rm_missing_key_succeeds() {
    let t = Test::with_config("service=work\n");

    assert_success(&t.config_rm("nope"));
    assert_eq!(t.config_contents(), "service=work\n");
}

#[test]
fn test_remove_alias() {
    let t = Test::with_config("service=work\n");

    t.cmd()
        .args(["config", "remove", "service"])
        .assert()
        .success();
    assert_eq!(t.config_contents(), "");
}

#[test]
fn test_empty_key_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["config", "set", "", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("key must not be empty"));
    assert!(!t.config_path().exists());
}

#[test]
fn test_ls_lists_in_file_order() {
    let t = Test::with_config("zeta=1\n# c\nalpha=2\n");

    let output = t.config_ls();
    assert_success(&output);
    let out = stdout(&output);

    let zeta = out.find("zeta").expect("zeta listed");
    let alpha = out.find("alpha").expect("alpha listed");
    assert!(zeta < alpha, "expected file order, got: {}", out);
}

#[test]
fn test_ls_empty() {
    let t = Test::new();

    let output = t.config_ls();
    assert_success(&output);
    assert_stdout_contains(&output, "no config values set");
    // ls never creates the file
    assert!(!t.config_path().exists());
}

#[test]
fn test_ls_json() {
    let t = Test::with_config(SAMPLE_CONFIG);

    let output = t.config_ls_json();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["values"][0]["key"], "service");
    assert_eq!(json["values"][0]["value"], "work");
    assert_eq!(json["values"][1]["value"], "line1\nline2");
    assert_eq!(json["values"][2]["key"], "keychain.name");
}

#[test]
fn test_path_uses_config_dir_env() {
    let t = Test::new();

    let output = t.cmd().args(["config", "path"]).output().unwrap();
    assert_success(&output);
    assert_eq!(
        stdout(&output).trim(),
        t.config_path().display().to_string()
    );
}

#[test]
fn test_keyring_settings_roundtrip() {
    let t = Test::new();

    for (key, value) in KEYRING_SETTINGS {
        assert_success(&t.config_set(key, value));
    }

    let doc = osv::core::config::load_from(t.config_path()).unwrap();
    let settings = osv::core::config::KeyringSettings::from_document(&doc, None);
    assert_eq!(settings.service, "my-service");
    assert_eq!(settings.libsecret_collection, "dev");
    assert_eq!(settings.keychain_name, "ci");
}

#[test]
fn test_set_lossy_value_warns() {
    let t = Test::new();

    t.cmd()
        .args(["config", "set", "banner", "x=EOF"])
        .assert()
        .success()
        .stderr(predicate::str::contains("will not read back unchanged"));

    t.cmd()
        .args(["config", "get", "banner"])
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn test_set_plain_value_does_not_warn() {
    let t = Test::new();

    t.cmd()
        .args(["config", "set", "service", "work"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
