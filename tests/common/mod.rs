//! Shared helpers for astrodb CLI tests.
//!
//! `TestEnv` copies the bundled dataset into a temp project directory and runs
//! the binary there with an isolated home, so user config and CI variables from
//! the host never leak into a test. Runs against the copy pass
//! `--data-dir data`; without a flag the binary reads the shipped dataset.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running the astrodb binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    env: Vec<(String, String)>,
    data_dir_flag: bool,
}

impl TestEnv {
    /// Project directory holding a pristine copy of `data/`, which every run
    /// validates through `--data-dir data`.
    pub fn with_dataset() -> Self {
        let mut env = Self::empty();
        env.data_dir_flag = true;
        let data = env.data_dir();
        fs::create_dir_all(&data).unwrap();
        for entry in fs::read_dir(bundled_data_dir()).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), data.join(entry.file_name())).unwrap();
        }
        env
    }

    /// Project directory with nothing in it
    pub fn empty() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            env: Vec::new(),
            data_dir_flag: false,
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.project_root.path().join("data")
    }

    pub fn table_file(&self, table: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", table))
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let path = self.project_root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Rewrite one record of a table in place.
    pub fn edit_record(&self, table: &str, id: &str, edit: impl FnOnce(&mut Value)) {
        let path = self.table_file(table);
        let mut rows: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let record = rows
            .as_array_mut()
            .unwrap()
            .iter_mut()
            .find(|row| row["id"] == id)
            .unwrap_or_else(|| panic!("no record {} in {}", id, table));
        edit(record);
        fs::write(&path, serde_json::to_string_pretty(&rows).unwrap()).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_astrodb"));
        cmd.current_dir(self.project_root.path());
        if self.data_dir_flag {
            cmd.args(["--data-dir", "data"]);
        }
        cmd.args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("ASTRODB_DATA_DIR")
            .env_remove("ASTRODB_EXTENDED")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("CI")
            .env("NO_COLOR", "1");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub fn bundled_data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

/// Parse NDJSON stdout into events
pub fn events(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
