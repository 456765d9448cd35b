use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::constants::*;

/// Main configuration container for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration settings
    pub server: ServerConfig,
    /// Key-value store configuration settings
    pub store: StoreConfig,
    /// User-directory seed configuration
    pub directory: DirectoryConfig,
    /// Contact intake configuration
    pub contact: ContactConfig,
    /// Logging configuration settings
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            directory: DirectoryConfig::default(),
            contact: ContactConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables or use defaults
    pub fn load() -> Self {
        Self {
            server: ServerConfig::load(),
            store: StoreConfig::load(),
            directory: DirectoryConfig::load(),
            contact: ContactConfig::load(),
            logging: LoggingConfig::load(),
        }
    }
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to listen on
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Session token expiration time in hours
    pub token_expiry_hours: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            token_expiry_hours: DEFAULT_TOKEN_EXPIRY_HOURS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables or use defaults
    pub fn load() -> Self {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HTTP_HOST.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);
        let token_expiry_hours = env::var("TOKEN_EXPIRY_HOURS")
            .ok()
            .and_then(|h| h.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_HOURS);

        Self {
            host,
            port,
            token_expiry_hours,
        }
    }

    /// Get socket address from host and port
    pub fn address(&self) -> Result<SocketAddr, std::io::Error> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
    }
}

/// Key-value store configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON-backed store file
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl StoreConfig {
    /// Load store configuration from environment variables or use defaults
    pub fn load() -> Self {
        let path = env::var("STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));
        Self { path }
    }
}

/// User-directory seed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL of the demo user API consumed once on first use
    pub seed_url: String,
    /// Seed request timeout in seconds
    pub seed_timeout_secs: u64,
    /// First id assigned when the directory collection is empty
    pub fallback_start_id: i64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            seed_timeout_secs: DEFAULT_SEED_TIMEOUT_SECS,
            fallback_start_id: DIRECTORY_FALLBACK_START_ID,
        }
    }
}

impl DirectoryConfig {
    /// Load directory configuration from environment variables or use defaults
    pub fn load() -> Self {
        let seed_url = env::var("SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.to_string());
        let seed_timeout_secs = env::var("SEED_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_SEED_TIMEOUT_SECS);
        let fallback_start_id = env::var("DIRECTORY_START_ID")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(DIRECTORY_FALLBACK_START_ID);

        Self {
            seed_url,
            seed_timeout_secs,
            fallback_start_id,
        }
    }
}

/// Contact intake configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Recipient surfaced by the notifier
    pub recipient: String,
    /// Default size of the recent-messages listing
    pub recent_limit: usize,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_CONTACT_RECIPIENT.to_string(),
            recent_limit: DEFAULT_CONTACT_RECENT_LIMIT,
        }
    }
}

impl ContactConfig {
    /// Load contact configuration from environment variables or use defaults
    pub fn load() -> Self {
        let recipient =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_CONTACT_RECIPIENT.to_string());
        let recent_limit = env::var("CONTACT_RECENT_LIMIT")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_CONTACT_RECENT_LIMIT);

        Self {
            recipient,
            recent_limit,
        }
    }
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter applied when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load logging configuration from environment variables or use defaults
    pub fn load() -> Self {
        let level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        Self { level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent_with_constants() {
        let config = Config::default();
        assert_eq!(config.server.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.server.token_expiry_hours, 24);
        assert_eq!(config.directory.fallback_start_id, 30);
        assert_eq!(config.contact.recent_limit, 50);
    }

    #[test]
    fn server_address_parses() {
        let mut server = ServerConfig::default();
        server.host = "127.0.0.1".to_string();
        let addr = server.address().expect("address should parse");
        assert_eq!(addr.port(), DEFAULT_HTTP_PORT);
    }
}
