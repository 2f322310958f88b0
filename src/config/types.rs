//! Runtime configuration values.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://my_database.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// SQLite URL; the file is created if missing.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Request bodies above this size are refused before deserialization.
    pub max_body_bytes: usize,
}
