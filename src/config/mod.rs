use serde::{Deserialize, Serialize};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Resolved server configuration.
///
/// Built once at startup from CLI flags and environment variables
/// (`TASKD_PORT`, `TASKD_BIND`, `TASKD_LOG`); immutable afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// REST API port.
    pub port: u16,
    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access).
    pub bind_address: String,
    /// Log filter directive (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: default_bind_address(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Merge optional overrides over the defaults.
    pub fn new(port: Option<u16>, bind_address: Option<String>, log_level: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: port.unwrap_or(defaults.port),
            bind_address: bind_address.unwrap_or(defaults.bind_address),
            log_level: log_level.unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_no_overrides() {
        let config = ServerConfig::new(None, None, None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn overrides_win_over_defaults() {
        let config = ServerConfig::new(Some(8080), Some("0.0.0.0".to_string()), None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.log_level, "info");
    }
}
