//! Listen address of the HTTP server.

use std::net::SocketAddr;

use deckhand_error::{ServerError, ServerErrorKind};
use serde::{Deserialize, Serialize};

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Where the server listens.
///
/// # Examples
///
/// ```
/// use deckhand_server::ServerConfig;
///
/// let config = ServerConfig::new("0.0.0.0", 8080);
/// assert_eq!(config.socket_addr().unwrap().port(), 8080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Resolve host and port to a socket address.
    ///
    /// `localhost` is accepted alongside literal IP addresses.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let host = if self.host == "localhost" {
            DEFAULT_HOST
        } else {
            self.host.as_str()
        };
        let ip = host.parse().map_err(|_| {
            ServerError::new(ServerErrorKind::Address(format!(
                "'{}' is not an IP address",
                self.host
            )))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_loopback_5000() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn hostname_other_than_localhost_is_rejected() {
        assert!(ServerConfig::new("example.com", 80).socket_addr().is_err());
        assert!(ServerConfig::new("localhost", 80).socket_addr().is_ok());
    }
}
