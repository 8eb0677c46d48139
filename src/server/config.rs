//! Server configuration.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use log::warn;
use tokio::sync::Semaphore;

/// Environment variable overriding [`ServerConfig::addr`].
pub const ADDR_ENV: &str = "MICROROUTE_ADDR";
/// Environment variable overriding [`ServerConfig::max_connections`].
pub const MAX_CONNECTIONS_ENV: &str = "MICROROUTE_MAX_CONNECTIONS";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// Size of each read from the socket.
    pub read_buffer_size: usize,
    /// Largest accepted request body, in bytes.
    pub max_content_length: usize,
    /// How long in-flight connections may run on after shutdown begins.
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            max_connections: 1024,
            read_buffer_size: 8192,
            max_content_length: 10 * 1024 * 1024,
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// Defaults, overridden by `MICROROUTE_ADDR` and `MICROROUTE_MAX_CONNECTIONS`.
    ///
    /// Unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_ENV) {
            match value.parse() {
                Ok(addr) => config.addr = addr,
                Err(e) => warn!("Ignoring {ADDR_ENV}={value}: {e}"),
            }
        }

        if let Some(value) = lookup(MAX_CONNECTIONS_ENV) {
            match value.parse() {
                Ok(max) if (1..=Semaphore::MAX_PERMITS).contains(&max) => config.max_connections = max,
                Ok(_) => warn!(
                    "Ignoring {MAX_CONNECTIONS_ENV}={value}: must be between 1 and {max}",
                    max = Semaphore::MAX_PERMITS
                ),
                Err(e) => warn!("Ignoring {MAX_CONNECTIONS_ENV}={value}: {e}"),
            }
        }

        config
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }

    /// Clamped to what the connection semaphore can hold.
    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections.clamp(1, Semaphore::MAX_PERMITS);
        self
    }

    pub fn with_max_content_length(mut self, max_content_length: usize) -> Self {
        self.max_content_length = max_content_length;
        self
    }

    pub fn with_shutdown_timeout(mut self, shutdown_timeout: Duration) -> Self {
        self.shutdown_timeout = shutdown_timeout;
        self
    }
}
