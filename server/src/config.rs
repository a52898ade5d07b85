use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Defaults, with the port overridable through `PORT`.
    pub fn from_env() -> Self {
        Self::with_port(std::env::var("PORT").ok().as_deref())
    }

    fn with_port(port: Option<&str>) -> Self {
        let mut config = Self::default();
        match port.map(str::parse::<u16>) {
            Some(Ok(port)) => config.addr.set_port(port),
            Some(Err(err)) => {
                tracing::warn!(%err, "ignoring invalid PORT, using {DEFAULT_PORT}");
            }
            None => {}
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_localhost_3001() {
        assert_eq!(ServerConfig::default().addr.to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn port_override_applies() {
        assert_eq!(ServerConfig::with_port(Some("8080")).addr.port(), 8080);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        assert_eq!(ServerConfig::with_port(Some("http")).addr.port(), DEFAULT_PORT);
        assert_eq!(ServerConfig::with_port(None).addr.port(), DEFAULT_PORT);
    }
}
