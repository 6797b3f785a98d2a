//! Configuration file support for learnavia.
//!
//! Loads settings from `~/.learnavia/config.toml` with the following precedence:
//! CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.learnavia/config.toml
//!
//! [serve]
//! # Bind address for the HTTP service
//! http = "0.0.0.0:8000"
//!
//! # CORS allowed origins (comma-separated, "*" for any)
//! cors_origins = "http://localhost:5173,https://app.example.com"
//!
//! # Candidate catalog (.toml or .json); the built-in pool is used when unset
//! catalog = "/etc/learnavia/catalog.toml"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable for the HTTP bind address.
pub const ENV_HTTP: &str = "LEARNAVIA_HTTP";
/// Environment variable for the comma-separated CORS origins.
pub const ENV_CORS_ORIGINS: &str = "LEARNAVIA_CORS_ORIGINS";
/// Environment variable for the catalog file path.
pub const ENV_CATALOG: &str = "LEARNAVIA_CATALOG";

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Serve command configuration.
    #[serde(default)]
    pub serve: ServeConfig,
}

/// Configuration for the serve command.
#[derive(Debug, Default, Deserialize)]
pub struct ServeConfig {
    /// Bind address for the HTTP service.
    pub http: Option<String>,
    /// Comma-separated list of allowed CORS origins.
    pub cors_origins: Option<String>,
    /// Path to the candidate catalog file.
    pub catalog: Option<String>,
}

/// Returns the path to the config file (~/.learnavia/config.toml).
fn config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".learnavia").join("config.toml"))
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    dirs::home_dir()
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Ok(Some(config))` if the file exists and parses successfully.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))?;

    tracing::debug!(
        target: "learnavia::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file.
///
/// This should be called early in the application startup, before
/// parsing CLI arguments. A config file that fails to parse is logged and
/// otherwise ignored.
pub fn apply_config_to_env() {
    match load_config() {
        Ok(Some(config)) => apply_serve_config_to_env(&config.serve),
        Ok(None) => {}
        Err(e) => tracing::warn!(
            target: "learnavia::config",
            error = %e,
            "Ignoring unreadable configuration file"
        ),
    }
}

/// Applies serve configuration to environment variables.
fn apply_serve_config_to_env(serve: &ServeConfig) {
    fn set_if_absent(key: &str, value: &str) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "learnavia::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    if let Some(ref http) = serve.http {
        set_if_absent(ENV_HTTP, http);
    }

    if let Some(ref origins) = serve.cors_origins {
        set_if_absent(ENV_CORS_ORIGINS, origins);
    }

    if let Some(ref catalog) = serve.catalog {
        set_if_absent(ENV_CATALOG, catalog);
    }
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnavia_test_utils::{env_guard, set_env_var, TestFixture};
    use serial_test::serial;

    #[test]
    #[serial]
    fn config_path_returns_expected_location() {
        let _guard = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();

        let path = config_path().unwrap();
        assert!(path.ends_with(".learnavia/config.toml"));
        assert!(path.starts_with(fixture.home_path()));
    }

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [serve]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.serve.http.is_none());
        assert!(config.serve.catalog.is_none());
    }

    #[test]
    fn parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.serve.cors_origins.is_none());
    }

    #[test]
    fn parse_full_serve_config() {
        let toml = r#"
            [serve]
            http = "0.0.0.0:8080"
            cors_origins = "http://localhost:5173,https://example.com"
            catalog = "/etc/learnavia/catalog.toml"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.serve.http.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(
            config.serve.cors_origins.as_deref(),
            Some("http://localhost:5173,https://example.com")
        );
        assert_eq!(
            config.serve.catalog.as_deref(),
            Some("/etc/learnavia/catalog.toml")
        );
    }

    #[test]
    #[serial]
    fn load_config_missing_file_returns_none() {
        let _guard = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();

        assert!(load_config().unwrap().is_none());
    }

    #[test]
    #[serial]
    fn load_config_reads_home_file() {
        let _guard = env_guard();
        let fixture = TestFixture::new().unwrap();
        let _home = fixture.home_guard();
        fixture
            .write_config("[serve]\nhttp = \"127.0.0.1:9000\"\n")
            .unwrap();

        let config = load_config().unwrap().expect("config present");
        assert_eq!(config.serve.http.as_deref(), Some("127.0.0.1:9000"));
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let fixture = TestFixture::new().unwrap();
        let path = fixture.write_config("[serve\nhttp = ").unwrap();
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    #[serial]
    fn apply_config_respects_existing_env_vars() {
        let _guard = env_guard();
        let _http = set_env_var(ENV_HTTP, Some("127.0.0.1:1111"));
        let _catalog = set_env_var(ENV_CATALOG, None);

        let serve = ServeConfig {
            http: Some("0.0.0.0:2222".to_string()),
            catalog: Some("/tmp/catalog.toml".to_string()),
            ..Default::default()
        };
        apply_serve_config_to_env(&serve);

        assert_eq!(
            std::env::var(ENV_HTTP).unwrap(),
            "127.0.0.1:1111",
            "Config should not override existing env var"
        );
        assert_eq!(std::env::var(ENV_CATALOG).unwrap(), "/tmp/catalog.toml");
    }

    #[test]
    fn parse_origins_trims_and_drops_blanks() {
        assert_eq!(
            parse_origins(" http://a.test , ,https://b.test,"),
            vec!["http://a.test", "https://b.test"]
        );
        assert!(parse_origins("").is_empty());
        assert_eq!(parse_origins("*"), vec!["*"]);
    }
}
