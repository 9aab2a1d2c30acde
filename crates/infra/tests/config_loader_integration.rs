//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! wiring the result into the database and client layers.

use std::io::Write;

use servdesk_infra::api::ApiClientConfig;
use servdesk_infra::config;
use servdesk_infra::database::DbManager;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("config file should be created");
    file.write_all(contents.as_bytes()).expect("config file should be written");
    path
}

#[test]
fn test_json_config_drives_database_and_client() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("from-config.db");
    let json_content = format!(
        r#"{{
            "database": {{ "path": "{}", "pool_size": 2 }},
            "client": {{ "base_url": "http://sla.internal:8080/", "timeout_secs": 7 }}
        }}"#,
        db_path.display()
    );
    let path = write_config(&dir, "servdesk.json", &json_content);

    let config = config::load_from_file(Some(path)).expect("config should load");

    let db = DbManager::from_config(&config.database).expect("database should open");
    db.run_migrations().expect("migrations should apply");
    db.health_check().expect("database should be healthy");
    assert!(db_path.exists());

    let client = ApiClientConfig::from(&config.client);
    assert_eq!(client.base_url, "http://sla.internal:8080");
    assert_eq!(client.timeout.as_secs(), 7);
    assert_eq!(client.max_attempts, 3);
}

#[test]
fn test_toml_config_with_encryption_key() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.toml",
        r#"
[database]
path = "encrypted.db"
pool_size = 3
encryption_key = "integration-key"

[server]
bind_address = "0.0.0.0:8443"
"#,
    );

    let config = config::load_from_file(Some(path)).expect("config should load");
    assert_eq!(config.database.path, "encrypted.db");
    assert_eq!(config.database.pool_size, 3);
    assert_eq!(config.database.encryption_key.as_deref(), Some("integration-key"));
    assert_eq!(config.server.bind_address, "0.0.0.0:8443");
}

#[test]
fn test_empty_document_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "servdesk.toml", "");

    let config = config::load_from_file(Some(path)).expect("empty TOML is a valid config");
    assert_eq!(config, servdesk_domain::Config::default());
}

#[test]
fn test_malformed_toml_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "servdesk.toml", "[database\npath = ");

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(matches!(err, servdesk_domain::ServdeskError::Config(_)));
}
