//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths::PathAlgorithm;
use crate::ranking::RankConfig;

/// Environment variable naming the network file.
pub const NETWORK_PATH_VAR: &str = "COMMUTE_NETWORK_PATH";
/// Environment variable for the listen address.
pub const BIND_ADDR_VAR: &str = "COMMUTE_BIND_ADDR";
/// Environment variable for the per-query timeout in milliseconds.
pub const QUERY_TIMEOUT_VAR: &str = "COMMUTE_QUERY_TIMEOUT_MS";
/// Environment variable selecting `dense` or `heap` Dijkstra.
pub const PATH_ALGORITHM_VAR: &str = "COMMUTE_PATH_ALGORITHM";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the JSON network file.
    pub network_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// How long one ranking query may run before it is cancelled.
    pub query_timeout: Duration,

    /// Dijkstra variant.
    pub algorithm: PathAlgorithm,

    /// Scoring constants.
    pub rank: RankConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from("data/sample_network.json"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            query_timeout: Duration::from_millis(2000),
            algorithm: PathAlgorithm::Dense,
            rank: RankConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults; set but malformed variables
    /// are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(NETWORK_PATH_VAR) {
            config.network_path = PathBuf::from(path);
        }

        if let Some(addr) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = addr.parse().map_err(|e: std::net::AddrParseError| ConfigError {
                key: BIND_ADDR_VAR,
                value: addr.clone(),
                reason: e.to_string(),
            })?;
        }

        if let Some(ms) = lookup(QUERY_TIMEOUT_VAR) {
            let millis: u64 = ms.parse().map_err(|e: std::num::ParseIntError| ConfigError {
                key: QUERY_TIMEOUT_VAR,
                value: ms.clone(),
                reason: e.to_string(),
            })?;
            if millis == 0 {
                return Err(ConfigError {
                    key: QUERY_TIMEOUT_VAR,
                    value: ms,
                    reason: "must be positive".to_string(),
                });
            }
            config.query_timeout = Duration::from_millis(millis);
        }

        if let Some(name) = lookup(PATH_ALGORITHM_VAR) {
            config.algorithm = name.parse().map_err(|e: crate::paths::InvalidPathAlgorithm| {
                ConfigError {
                    key: PATH_ALGORITHM_VAR,
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.network_path, PathBuf::from("data/sample_network.json"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.query_timeout, Duration::from_secs(2));
        assert_eq!(config.algorithm, PathAlgorithm::Dense);
        assert_eq!(config.rank, RankConfig::default());
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (NETWORK_PATH_VAR, "/srv/city.json"),
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (QUERY_TIMEOUT_VAR, "250"),
            (PATH_ALGORITHM_VAR, "heap"),
        ]))
        .unwrap();

        assert_eq!(config.network_path, PathBuf::from("/srv/city.json"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.query_timeout, Duration::from_millis(250));
        assert_eq!(config.algorithm, PathAlgorithm::Heap);
    }

    #[test]
    fn malformed_values() {
        let err = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));

        assert!(ServerConfig::from_lookup(lookup(&[(QUERY_TIMEOUT_VAR, "soon")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(QUERY_TIMEOUT_VAR, "0")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(PATH_ALGORITHM_VAR, "bfs")])).is_err());
    }
}
