//! Load config from process environment (optionally seeded from `.env`).

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

impl AppConfig {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS`, `MAX_BODY_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable lookup. Unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr: SocketAddr = parse(
            "BIND_ADDR",
            get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
        )?;
        let max_connections: u32 = match get("DB_MAX_CONNECTIONS") {
            Some(v) => parse("DB_MAX_CONNECTIONS", v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let max_body_bytes: usize = match get("MAX_BODY_BYTES") {
            Some(v) => parse("MAX_BODY_BYTES", v)?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            max_body_bytes,
        })
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn reads_overrides() {
        let cfg = load(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("MAX_BODY_BYTES", " 4096 "),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.max_connections, 2);
        assert_eq!(cfg.max_body_bytes, 4096);
    }

    #[test]
    fn blank_values_take_defaults() {
        let cfg = load(&[("BIND_ADDR", "  ")]).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn rejects_bad_numbers_and_addresses() {
        assert!(matches!(
            load(&[("DB_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            load(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            load(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::Invalid { key: "BIND_ADDR", .. })
        ));
    }
}
