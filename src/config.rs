use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8888;

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the registry listens on
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment. `PORT` falls back to 8888
    /// when unset; a set-but-unparseable value is a startup failure rather
    /// than a silent fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_port_var(std::env::var("PORT").ok())
    }

    fn from_port_var(port: Option<String>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_when_unset() {
        let config = Config::from_port_var(None).unwrap();
        assert_eq!(config.port, 8888);
    }

    #[test]
    fn test_explicit_port() {
        let config = Config::from_port_var(Some("9000".to_string())).unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_unparseable_port_is_fatal() {
        let err = Config::from_port_var(Some("not-a-port".to_string())).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value"));
    }
}
