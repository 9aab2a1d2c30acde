//! SQLCipher key handling

use rusqlite::Connection;
use tracing::{debug, error};

use super::error::{StorageError, StorageResult};

/// Apply the SQLCipher key and compatibility pragmas.
///
/// Must run before any other statement on the connection.
pub fn configure_cipher(conn: &Connection, key: &str) -> StorageResult<()> {
    conn.pragma_update(None, "key", key).map_err(|e| {
        error!(error = %e, "SQLCipher key setup failed");
        StorageError::Encryption(format!("Failed to set encryption key: {}", e))
    })?;

    conn.pragma_update(None, "cipher_compatibility", 4).map_err(|e| {
        StorageError::Encryption(format!("Failed to set cipher_compatibility: {}", e))
    })?;

    debug!("SQLCipher key applied");
    Ok(())
}

/// Read the schema table to force page decryption.
///
/// Returns `WrongKeyOrNotEncrypted` when the file cannot be read with the
/// configured key (or was encrypted and no key was given).
pub fn verify_readable(conn: &Connection) -> StorageResult<()> {
    conn.query_row("SELECT count(*) FROM sqlite_master", [], |_| Ok(()))
        .map_err(|e| StorageError::from_open_failure(e.to_string()))
}
