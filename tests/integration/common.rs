//! Common utilities for integration tests

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home/config directories for one test
pub struct TestContext {
    pub temp: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("config")).unwrap();
        Self { temp }
    }

    /// Directory `dirs::config_dir()` resolves to inside the child process
    pub fn config_dir(&self) -> PathBuf {
        if cfg!(target_os = "macos") {
            self.temp
                .path()
                .join("Library")
                .join("Application Support")
        } else {
            self.temp.path().join("config")
        }
    }

    pub fn codesync_home(&self) -> PathBuf {
        self.config_dir().join("codesync")
    }

    pub fn state_file(&self) -> PathBuf {
        self.codesync_home().join("state.yaml")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir()
            .join("Code")
            .join("User")
            .join("settings.json")
    }

    pub fn write_config(&self, yaml: &str) {
        write_file(&self.codesync_home().join("config.yaml"), yaml);
    }

    pub fn write_state(&self, gist_id: &str) {
        write_file(&self.state_file(), &format!("gist_id: {}\n", gist_id));
    }

    /// Command for running codesync with the environment pointed at the temp dir
    pub fn codesync(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("codesync").unwrap();
        cmd.current_dir(self.temp.path());
        cmd.env_remove("GITHUB_TOKEN");
        cmd.env_remove("CODESYNC_GITHUB_API_URL");
        cmd.env_remove("RUST_LOG");

        let config_dir = self.temp.path().join("config");
        if cfg!(target_os = "windows") {
            cmd.env("APPDATA", &config_dir);
            cmd.env("USERPROFILE", self.temp.path());
        } else if cfg!(target_os = "linux") {
            cmd.env("XDG_CONFIG_HOME", &config_dir);
            cmd.env("HOME", self.temp.path());
        } else {
            cmd.env("HOME", self.temp.path());
        }

        cmd
    }
}

pub fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
