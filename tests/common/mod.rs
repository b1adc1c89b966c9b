//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const REFERENCE_RETREAT_YAML: &str = r#"
title: Lakeside Reset
price_per_person: 1000
max_attendees: 20
start_date: "2026-05-01"
end_date: "2026-05-06"
team_members:
  - role: venue
    fee_type: flat
    fee_amount: 500
    description: Lodge buyout
  - role: chef
    fee_type: per_person
    fee_amount: 50
    description: Catering
  - role: cohost
    fee_type: percentage
    fee_amount: 10
    description: Facilitation
"#;

/// Isolated working directory with retreat files and an optional project config
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the working directory
    pub fn with_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `.retreat-econ/config.toml`
    pub fn with_project_config(&self, content: &str) -> Result<PathBuf> {
        self.with_file(".retreat-econ/config.toml", content)
    }

    /// The binary, run inside this directory with a clean `RETREAT_*` environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("retreat-econ").unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("RETREAT_PLATFORM_FEE_RATE")
            .env_remove("RETREAT_UNKNOWN_FEE_TYPE")
            .env_remove("RETREAT_CURRENCY_SYMBOL")
            .env_remove("RETREAT_LOG_LEVEL")
            .env_remove("RUST_LOG");
        cmd
    }
}
