//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
    work_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.toml");
        let work_dir = temp_dir.path().join("work");

        fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            _temp_dir: temp_dir,
            config_path,
            work_dir,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    /// Write a page input file into the fixture's work directory
    pub fn write_input(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write input");
        path
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.config_path.parent().unwrap()).expect("Failed to create dir");
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// Run datapage with this fixture's config path
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("datapage").expect("Failed to find datapage binary");
        cmd.arg("--config").arg(&self.config_path);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn render_json(&self, extra_args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .arg("--format")
            .arg("json")
            .arg("render")
            .arg("--input")
            .arg(Self::fixture_path("census_age.json"))
            .args(extra_args)
            .output()
            .expect("Failed to run datapage");

        assert!(
            output.status.success(),
            "render failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("Failed to parse JSON output")
    }
}
