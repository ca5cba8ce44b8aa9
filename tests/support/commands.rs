//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an osv command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - OSV_CONFIG_DIR set to the temporary directory
    /// - NO_COLOR set so output is plain text
    /// - OSV_LOG, OSV_SERVICE and OSV_STORE cleared so the caller's
    ///   environment cannot leak in
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("osv").expect("failed to find osv binary");
        cmd.env("OSV_CONFIG_DIR", self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("OSV_LOG");
        cmd.env_remove("OSV_SERVICE");
        cmd.env_remove("OSV_STORE");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `osv config get` command.
    pub fn config_get(&self, key: &str) -> Output {
        self.cmd()
            .args(["config", "get", key])
            .output()
            .expect("failed to run osv config get")
    }

    /// Shortcut for `osv config set` command.
    pub fn config_set(&self, key: &str, value: &str) -> Output {
        self.cmd()
            .args(["config", "set", key, value])
            .output()
            .expect("failed to run osv config set")
    }

    /// Shortcut for `osv config rm` command.
    pub fn config_rm(&self, key: &str) -> Output {
        self.cmd()
            .args(["config", "rm", key])
            .output()
            .expect("failed to run osv config rm")
    }

    /// Shortcut for `osv config ls` command.
    pub fn config_ls(&self) -> Output {
        self.cmd()
            .args(["config", "ls"])
            .output()
            .expect("failed to run osv config ls")
    }

    /// Shortcut for `osv config ls --json` command.
    pub fn config_ls_json(&self) -> Output {
        self.cmd()
            .args(["config", "ls", "--json"])
            .output()
            .expect("failed to run osv config ls --json")
    }

    /// Shortcut for `osv set` command.
    pub fn set(&self, key: &str, value: &str) -> Output {
        self.cmd()
            .args(["set", key, value])
            .output()
            .expect("failed to run osv set")
    }

    /// Shortcut for `osv get` command.
    pub fn get(&self, key: &str) -> Output {
        self.cmd()
            .args(["get", key])
            .output()
            .expect("failed to run osv get")
    }

    /// Shortcut for `osv rm` command.
    pub fn rm(&self, keys: &[&str]) -> Output {
        self.cmd()
            .arg("rm")
            .args(keys)
            .output()
            .expect("failed to run osv rm")
    }

    /// Shortcut for `osv ls` command.
    pub fn ls(&self) -> Output {
        self.cmd()
            .arg("ls")
            .output()
            .expect("failed to run osv ls")
    }
}
