//! Shared test utilities for learnavia crates.
//!
//! This crate provides common test fixtures and utilities used across
//! multiple crates in the learnavia workspace. Fixtures are plain JSON/TOML
//! so the crate stays independent of the types under test.

use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = learnavia_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// A three-entry catalog with deliberately tied scores.
///
/// Tie-break offsets: `Delta Lab` 0.3 (code point sum 793), `Beta Lab` 0.3
/// (683), `Gamma Project` 0.2 (1242). The two labs share the `rust` tag, so
/// a rust-skilled profile scores them equally and catalog order decides.
pub const SYNTHETIC_CATALOG_TOML: &str = r#"
[[activity]]
type = "workshop"
title = "Delta Lab"
tags = ["rust", "systems"]
description = "Systems programming lab"

[[activity]]
type = "workshop"
title = "Beta Lab"
tags = ["rust", "web"]
description = "Web services lab"

[[activity]]
type = "project"
title = "Gamma Project"
tags = ["compilers"]
description = "Build a toy compiler"
"#;

/// Final-year profile with python skills and an nlp interest.
pub fn scenario_profile() -> Value {
    json!({
        "name": "Jane Smith",
        "email": "jane@example.com",
        "college": "Tech University",
        "department": "Computer Science",
        "year": 4,
        "skills": ["python"],
        "interests": ["nlp"]
    })
}

/// A recommendation request body as the portfolio frontend sends it.
pub fn recommendation_request(num_recs: Option<i64>) -> Value {
    let mut body = json!({
        "profile": scenario_profile(),
        "activities": [
            {
                "type": "project",
                "title": "AI Chatbot",
                "date": "2024-03-15",
                "description": "Built an AI chatbot using Python and NLP",
                "tags": ["Python", "NLP", "AI"],
                "status": "approved"
            }
        ]
    });
    if let Some(n) = num_recs {
        body["num_recs"] = json!(n);
    }
    body
}

/// Standard test fixture with a temporary HOME layout.
///
/// Holds the tempdir and provides access to common paths.
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Path to ~/.learnavia in the temp environment
    pub config_dir: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with `$HOME/.learnavia/` created.
    ///
    /// Does NOT set HOME env var - use `home_guard()` for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let config_dir = tempdir.path().join(".learnavia");
        std::fs::create_dir_all(&config_dir)?;
        Ok(Self {
            tempdir,
            config_dir,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &std::path::Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(self.home_path().to_str().unwrap()))
    }

    /// Write `~/.learnavia/config.toml` and return its path.
    pub fn write_config(&self, content: &str) -> std::io::Result<PathBuf> {
        let path = self.config_dir.join("config.toml");
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a catalog file named `file_name` into the temp dir.
    pub fn write_catalog(&self, file_name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(file_name);
        std::fs::write(&path, content)?;
        Ok(path)
    }
}
