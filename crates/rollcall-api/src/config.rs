//! Configuration for the rollcall HTTP server.

use serde::Deserialize;

/// Top-level server configuration.
///
/// Loaded from `rollcall.toml` `[server]` section or
/// `ROLLCALL__SERVER__` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (default: "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Which store backs the API.
    #[serde(default)]
    pub backend: StoreBackend,

    /// Start the in-memory store with the welcome event.
    #[serde(default = "default_true")]
    pub preload_sample: bool,
}

/// Available store back ends.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Neo4j over bolt.
    #[default]
    Graph,
    /// Process-local, lost on restart.
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "graph" => Ok(Self::Graph),
            "memory" => Ok(Self::Memory),
            _ => Err(format!("Invalid backend: {s}. Choose: graph, memory")),
        }
    }
}

impl ServerConfig {
    /// Read the `[server]` section, falling back to defaults.
    ///
    /// An absent section is silent; a section that fails to deserialize is
    /// logged before falling back.
    pub fn from_config(cfg: &config::Config) -> Self {
        match cfg.get::<ServerConfig>("server") {
            Ok(c) => c,
            Err(config::ConfigError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Invalid [server] config, using defaults");
                Self::default()
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            backend: StoreBackend::default(),
            preload_sample: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.backend, StoreBackend::Graph);
        assert!(config.preload_sample);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{"backend":"memory"}"#).unwrap();
        assert_eq!(config.backend, StoreBackend::Memory);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let cfg = config::Config::builder().build().unwrap();
        let config = ServerConfig::from_config(&cfg);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_section_overrides_are_read() {
        let cfg = config::Config::builder()
            .set_override("server.backend", "memory")
            .unwrap()
            .set_override("server.port", 9090)
            .unwrap()
            .build()
            .unwrap();
        let config = ServerConfig::from_config(&cfg);
        assert_eq!(config.backend, StoreBackend::Memory);
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_section_falls_back_to_defaults() {
        let cfg = config::Config::builder()
            .set_override("server.backend", "redis")
            .unwrap()
            .set_override("server.port", 9090)
            .unwrap()
            .build()
            .unwrap();
        let config = ServerConfig::from_config(&cfg);
        assert_eq!(config.backend, StoreBackend::Graph);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("Memory".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!("graph".parse::<StoreBackend>(), Ok(StoreBackend::Graph));
        assert!("redis".parse::<StoreBackend>().is_err());
    }
}
