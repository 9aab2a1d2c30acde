//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `SERVDESK_DB_PATH` is set
//! 2. Otherwise the first config file found by [`find_config_file`]
//!    (JSON or TOML, by extension)
//!
//! [`load_or_default`] additionally falls back to [`Config::default`] when
//! neither source exists. A config source that exists but is malformed is
//! always an error.
//!
//! ## Environment Variables
//! - `SERVDESK_DB_PATH`: Database file path (required for env loading)
//! - `SERVDESK_DB_POOL_SIZE`: Connection pool size
//! - `SERVDESK_DB_ENCRYPTION_KEY`: SQLCipher key
//! - `SERVDESK_BIND_ADDR`: Server listen address
//! - `SERVDESK_API_BASE_URL`: Base URL used by remote editor sessions
//! - `SERVDESK_API_TIMEOUT_SECS`: Client request timeout
//! - `SERVDESK_API_MAX_ATTEMPTS`: Client attempts for retryable calls
//!
//! Optional variables that are unset keep their defaults; set but malformed
//! values are an error.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use servdesk_domain::{Config, Result, ServdeskError};

const DB_PATH_VAR: &str = "SERVDESK_DB_PATH";

/// Load configuration, preferring the environment over files.
///
/// Files are only consulted when `SERVDESK_DB_PATH` is unset, so a malformed
/// environment is reported instead of being masked by a file lookup.
pub fn load() -> Result<Config> {
    if std::env::var_os(DB_PATH_VAR).is_none() {
        tracing::debug!("{} is unset, loading configuration from file", DB_PATH_VAR);
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Like [`load`], but uses defaults when no configuration source exists.
pub fn load_or_default() -> Result<Config> {
    if std::env::var_os(DB_PATH_VAR).is_none() && find_config_file().is_none() {
        tracing::warn!("No configuration found, using defaults");
        return Ok(Config::default());
    }
    load()
}

/// Load configuration from `SERVDESK_*` environment variables.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.database.path = env_var(DB_PATH_VAR)?;
    if let Some(size) = env_parse::<u32>("SERVDESK_DB_POOL_SIZE")? {
        config.database.pool_size = size;
    }
    config.database.encryption_key =
        std::env::var("SERVDESK_DB_ENCRYPTION_KEY").ok().filter(|k| !k.is_empty());

    if let Ok(addr) = std::env::var("SERVDESK_BIND_ADDR") {
        config.server.bind_address = addr;
    }

    if let Ok(url) = std::env::var("SERVDESK_API_BASE_URL") {
        config.client.base_url = url;
    }
    if let Some(secs) = env_parse::<u64>("SERVDESK_API_TIMEOUT_SECS")? {
        config.client.timeout_secs = secs;
    }
    if let Some(attempts) = env_parse::<u32>("SERVDESK_API_MAX_ATTEMPTS")? {
        config.client.max_attempts = attempts;
    }

    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, searches the standard locations.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if !p.exists() => {
            return Err(ServdeskError::Config(format!("Config file not found: {}", p.display())));
        }
        Some(p) => p,
        None => find_config_file().ok_or_else(|| {
            ServdeskError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ServdeskError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ServdeskError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ServdeskError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ServdeskError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file among the standard locations.
///
/// Checks `config.{json,toml}` and `servdesk.{json,toml}` in the working
/// directory and its parent, then next to the executable.
pub fn find_config_file() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.json", "config.toml", "servdesk.json", "servdesk.toml"];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| ServdeskError::Config(format!("Missing required environment variable: {}", key)))
}

/// Parse an optional variable. Unset is `Ok(None)`; malformed is an error.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ServdeskError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 7] = [
        "SERVDESK_DB_PATH",
        "SERVDESK_DB_POOL_SIZE",
        "SERVDESK_DB_ENCRYPTION_KEY",
        "SERVDESK_BIND_ADDR",
        "SERVDESK_API_BASE_URL",
        "SERVDESK_API_TIMEOUT_SECS",
        "SERVDESK_API_MAX_ATTEMPTS",
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    fn temp_config(contents: &str, extension: &str) -> (NamedTempFile, PathBuf) {
        let mut file = tempfile::Builder::new().suffix(&format!(".{}", extension)).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("SERVDESK_DB_PATH", "/tmp/servdesk.db");
        std::env::set_var("SERVDESK_DB_POOL_SIZE", "4");
        std::env::set_var("SERVDESK_DB_ENCRYPTION_KEY", "test-key");
        std::env::set_var("SERVDESK_BIND_ADDR", "0.0.0.0:9000");
        std::env::set_var("SERVDESK_API_BASE_URL", "http://sla.internal");
        std::env::set_var("SERVDESK_API_TIMEOUT_SECS", "3");
        std::env::set_var("SERVDESK_API_MAX_ATTEMPTS", "5");

        let config = load_from_env().unwrap();
        clear_env();

        assert_eq!(config.database.path, "/tmp/servdesk.db");
        assert_eq!(config.database.pool_size, 4);
        assert_eq!(config.database.encryption_key.as_deref(), Some("test-key"));
        assert_eq!(config.server.bind_address, "0.0.0.0:9000");
        assert_eq!(config.client.base_url, "http://sla.internal");
        assert_eq!(config.client.timeout_secs, 3);
        assert_eq!(config.client.max_attempts, 5);
    }

    #[test]
    fn test_optional_vars_keep_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("SERVDESK_DB_PATH", "/tmp/servdesk.db");
        std::env::set_var("SERVDESK_DB_ENCRYPTION_KEY", "");

        let config = load_from_env().unwrap();
        clear_env();

        assert_eq!(config.database.pool_size, 8);
        assert!(config.database.encryption_key.is_none());
        assert_eq!(config.server, Config::default().server);
    }

    #[test]
    fn test_load_from_env_missing_path() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ServdeskError::Config(_)));
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("SERVDESK_DB_PATH", "/tmp/servdesk.db");
        std::env::set_var("SERVDESK_DB_POOL_SIZE", "lots");

        let result = load_from_env();
        clear_env();

        match result {
            Err(ServdeskError::Config(msg)) => assert!(msg.contains("SERVDESK_DB_POOL_SIZE")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_reports_invalid_env_instead_of_reading_files() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("SERVDESK_DB_PATH", "/srv/prod/servdesk.db");
        std::env::set_var("SERVDESK_DB_POOL_SIZE", "ten");

        let result = load();
        let fallback = load_or_default();
        clear_env();

        match result {
            Err(ServdeskError::Config(msg)) => assert!(msg.contains("SERVDESK_DB_POOL_SIZE"), "{msg}"),
            other => panic!("expected config error, got {other:?}"),
        }
        assert!(matches!(fallback, Err(ServdeskError::Config(_))));
    }

    #[test]
    fn test_load_uses_env_when_db_path_is_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("SERVDESK_DB_PATH", "/tmp/servdesk.db");
        std::env::set_var("SERVDESK_API_MAX_ATTEMPTS", "2");

        let config = load_or_default();
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.database.path, "/tmp/servdesk.db");
        assert_eq!(config.client.max_attempts, 2);
    }

    #[test]
    fn test_load_from_file_json() {
        let (_file, path) = temp_config(
            r#"{ "database": { "path": "sla.db", "pool_size": 2 }, "server": { "bind_address": "127.0.0.1:9100" } }"#,
            "json",
        );

        let config = load_from_file(Some(path)).unwrap();
        assert_eq!(config.database.path, "sla.db");
        assert_eq!(config.database.pool_size, 2);
        assert_eq!(config.server.bind_address, "127.0.0.1:9100");
        assert_eq!(config.client.max_attempts, 3);
    }

    #[test]
    fn test_load_from_file_toml() {
        let (_file, path) = temp_config(
            r#"
[database]
path = "sla.db"

[client]
base_url = "http://sla.internal:8080"
timeout_secs = 20
"#,
            "toml",
        );

        let config = load_from_file(Some(path)).unwrap();
        assert_eq!(config.database.pool_size, 8);
        assert_eq!(config.client.base_url, "http://sla.internal:8080");
        assert_eq!(config.client.timeout_secs, 20);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/servdesk.toml"))).unwrap_err();
        assert!(matches!(err, ServdeskError::Config(_)));
    }

    #[test]
    fn test_invalid_and_unsupported_files_are_rejected() {
        let (_file, path) = temp_config(r#"{ "database": "#, "json");
        assert!(load_from_file(Some(path)).is_err());

        assert!(parse_config("a: b", Path::new("servdesk.yaml")).is_err());
    }
}
