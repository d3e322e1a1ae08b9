use crate::{ConfigError, FromEnv, env_parse_or};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Where the HTTP listener binds. `HOST` must be an IP literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    /// All interfaces, port 8080
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: env_parse_or("HOST", defaults.host)?,
            port: env_parse_or("PORT", defaults.port)?,
        })
    }
}
