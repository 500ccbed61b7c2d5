use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Catalog contents at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSeed {
    #[default]
    Empty,
    /// Nine brands across every category.
    Demo,
}

impl core::fmt::Display for CatalogSeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            CatalogSeed::Empty => "empty",
            CatalogSeed::Demo => "demo",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// | Env Var        | Default   |
/// |----------------|-----------|
/// | `HOST`         | `0.0.0.0` |
/// | `PORT`         | `8080`    |
/// | `CATALOG_SEED` | empty     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub seed: CatalogSeed,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup (tests pass a closure).
    pub fn from_lookup<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = get_env("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get_env("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let seed = match get_env("CATALOG_SEED") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" | "empty" | "none" => CatalogSeed::Empty,
                "demo" => CatalogSeed::Demo,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "CATALOG_SEED",
                        expected: "one of: empty, demo",
                        value: raw,
                    });
                }
            },
            None => CatalogSeed::Empty,
        };

        Ok(Self { host, port, seed })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.seed, CatalogSeed::Empty);
    }

    #[test]
    fn reads_host_port_and_seed() {
        let config =
            ApiConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "9000"), ("CATALOG_SEED", "Demo")]))
                .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.seed, CatalogSeed::Demo);
    }

    #[test]
    fn rejects_bad_port() {
        let err = ApiConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn rejects_unknown_seed() {
        let err = ApiConfig::from_lookup(lookup(&[("CATALOG_SEED", "prod")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CATALOG_SEED", .. }));
    }
}
