use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Server configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `BROADSIDE_ADDR`, falling back to `0.0.0.0:3000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var("BROADSIDE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidAddr { addr, source })?;
        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_addr_parses() {
        let bind_addr: SocketAddr = DEFAULT_ADDR.parse().unwrap();
        assert_eq!(bind_addr.port(), 3000);
    }
}
