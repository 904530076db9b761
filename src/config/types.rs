//! Server configuration values.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "recipes.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// JSON file holding the recipe array.
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Upper bound on request body size.
    pub max_body_bytes: usize,
    /// Start with an empty collection (and write `[]`) when the data file does not exist.
    pub create_if_missing: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            create_if_missing: false,
        }
    }
}

impl ServerConfig {
    /// Bind address string, e.g. `127.0.0.1:3000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.bind_addr().parse().ok()
    }
}
