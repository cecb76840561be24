//! Environment-driven server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use civdraft_draft::domain::roster::PlayerLimits;

use crate::error::AppError;

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind address (`HOST`).
    pub host: String,
    /// Bind port (`PORT`).
    pub port: u16,
    /// YAML catalog to load instead of the built-in one (`CIVDRAFT_CATALOG_PATH`).
    pub catalog_path: Option<PathBuf>,
    /// Fewest players a roll accepts (`CIVDRAFT_MIN_PLAYERS`).
    pub min_players: usize,
    /// Most players a roll accepts (`CIVDRAFT_MAX_PLAYERS`).
    pub max_players: usize,
    /// Fixed RNG seed (`CIVDRAFT_RNG_SEED`); OS-seeded when absent.
    pub rng_seed: Option<u64>,
    /// OTLP collector endpoint (`OTEL_EXPORTER_OTLP_ENDPOINT`).
    pub otlp_endpoint: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
            port: parse(&get, "PORT")?.unwrap_or(3000),
            catalog_path: get("CIVDRAFT_CATALOG_PATH").map(PathBuf::from),
            min_players: parse(&get, "CIVDRAFT_MIN_PLAYERS")?.unwrap_or(2),
            max_players: parse(&get, "CIVDRAFT_MAX_PLAYERS")?.unwrap_or(8),
            rng_seed: parse(&get, "CIVDRAFT_RNG_SEED")?,
            otlp_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// Player-count limits for the roll command.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the limits are inconsistent.
    pub fn player_limits(&self) -> Result<PlayerLimits, AppError> {
        PlayerLimits::new(self.min_players, self.max_players)
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse<T, G>(get: &G, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| AppError::Config(format!("{key} is invalid: {e}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.player_limits().unwrap(), PlayerLimits::default());
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.otlp_endpoint, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CIVDRAFT_CATALOG_PATH", "/etc/civdraft/catalog.yaml"),
            ("CIVDRAFT_MIN_PLAYERS", "1"),
            ("CIVDRAFT_MAX_PLAYERS", "4"),
            ("CIVDRAFT_RNG_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/etc/civdraft/catalog.yaml"))
        );
        assert_eq!(config.player_limits().unwrap(), PlayerLimits::new(1, 4).unwrap());
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("PORT", "  "), ("CIVDRAFT_RNG_SEED", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        let result = config_from(&[("PORT", "70000")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_inverted_limits_are_a_config_error() {
        let config = config_from(&[("CIVDRAFT_MIN_PLAYERS", "6"), ("CIVDRAFT_MAX_PLAYERS", "3")])
            .unwrap();
        assert!(matches!(config.player_limits(), Err(AppError::Config(_))));
    }
}
