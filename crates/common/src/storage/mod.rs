//! SQLite storage primitives
//!
//! An r2d2 connection pool with per-connection pragmas and an optional
//! SQLCipher key. Schema management belongs to the application layer.

pub mod cipher;
pub mod config;
pub mod connection;
pub mod error;
pub mod pool;
pub mod pragmas;

pub use cipher::{configure_cipher, verify_readable};
pub use config::SqlitePoolConfig;
pub use connection::PooledSqlite;
pub use error::{StorageError, StorageResult};
pub use pool::SqlitePool;
pub use pragmas::apply_connection_pragmas;
