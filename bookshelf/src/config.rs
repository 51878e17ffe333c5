//! Server configuration module.
//!
//! This module provides configuration loading for the Bookshelf server from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `BOOKSHELF_LISTEN_ADDRESS`: IP address to bind (default: `127.0.0.1`)
//! - `BOOKSHELF_LISTEN_PORT`: Port to listen on (default: `5000`)
//! - `BOOKSHELF_SEED_DATA`: Load the sample authors and books (default: `true`)
//! - `BOOKSHELF_GRAPHIQL`: Serve the GraphiQL page on `GET /graphql` (default: `true`)
//!
//! Booleans accept `true`, `false`, `1` and `0`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Server configuration.
///
/// # Post-conditions
///
/// When constructed via `from_env()`, every field holds either a value parsed
/// from its variable or the documented default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub listen_address: IpAddr,
    /// Port to listen on for HTTP requests.
    pub listen_port: u16,
    /// Start with the sample library instead of empty collections.
    pub seed_data: bool,
    /// Serve the interactive GraphiQL page.
    pub graphiql: bool,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: Self::DEFAULT_ADDRESS,
            listen_port: Self::DEFAULT_PORT,
            seed_data: true,
            graphiql: true,
        }
    }
}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 5000;
    /// Default bind address.
    pub const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// `from_env` uses the process environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let listen_address = match lookup("BOOKSHELF_LISTEN_ADDRESS") {
            Some(value) => value.parse::<IpAddr>().map_err(|_| {
                invalid(
                    "BOOKSHELF_LISTEN_ADDRESS",
                    format!("'{value}' is not an IP address"),
                )
            })?,
            None => defaults.listen_address,
        };

        let listen_port = match lookup("BOOKSHELF_LISTEN_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| {
                invalid(
                    "BOOKSHELF_LISTEN_PORT",
                    format!("'{value}' is not a valid port number (must be 0-65535)"),
                )
            })?,
            None => defaults.listen_port,
        };

        let seed_data = load_bool(&lookup, "BOOKSHELF_SEED_DATA", defaults.seed_data)?;
        let graphiql = load_bool(&lookup, "BOOKSHELF_GRAPHIQL", defaults.graphiql)?;

        Ok(Self {
            listen_address,
            listen_port,
            seed_data,
            graphiql,
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_address, self.listen_port)
    }
}

fn invalid(name: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        message,
    }
}

/// Parse a boolean variable, falling back to `default` when unset.
fn load_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(invalid(name, format!("'{value}' is not a boolean"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.listen_port, 5000);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert!(config.seed_data);
        assert!(config.graphiql);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BOOKSHELF_LISTEN_ADDRESS", "0.0.0.0"),
            ("BOOKSHELF_LISTEN_PORT", "8080"),
            ("BOOKSHELF_SEED_DATA", "false"),
            ("BOOKSHELF_GRAPHIQL", "0"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(!config.seed_data);
        assert!(!config.graphiql);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("BOOKSHELF_LISTEN_PORT", "70000")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for BOOKSHELF_LISTEN_PORT: '70000' is not a valid port number (must be 0-65535)"
        );
    }

    #[test]
    fn test_invalid_address() {
        let err = config_from(&[("BOOKSHELF_LISTEN_ADDRESS", "localhost")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref name, .. } if name == "BOOKSHELF_LISTEN_ADDRESS"
        ));
    }

    #[test]
    fn test_invalid_bool() {
        let err = config_from(&[("BOOKSHELF_SEED_DATA", "yes")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for BOOKSHELF_SEED_DATA: 'yes' is not a boolean"
        );
    }

    #[test]
    fn test_config_error_display_invalid() {
        let error = ConfigError::InvalidValue {
            name: "TEST_VAR".to_string(),
            message: "bad value".to_string(),
        };
        assert_eq!(error.to_string(), "invalid value for TEST_VAR: bad value");
    }
}
