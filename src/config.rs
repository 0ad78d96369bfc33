//! Runtime settings from environment variables.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub pool_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseSettings {
                host: "localhost".into(),
                port: 5432,
                user: "postgres".into(),
                password: String::new(),
                name: "groups".into(),
                pool_size: 10,
            },
            port: 3000,
        }
    }
}

impl Settings {
    /// Read `DATABASE_*` and `PORT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an arbitrary source. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Settings::default();
        let db = defaults.database;

        let pool_size = parse_or("DATABASE_POOL_SIZE", get("DATABASE_POOL_SIZE"), db.pool_size)?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_POOL_SIZE",
                value: "0".into(),
            });
        }

        Ok(Self {
            database: DatabaseSettings {
                host: get("DATABASE_HOST").unwrap_or(db.host),
                port: parse_or("DATABASE_PORT", get("DATABASE_PORT"), db.port)?,
                user: get("DATABASE_USER").unwrap_or(db.user),
                // Passwords may legitimately contain surrounding spaces.
                password: lookup("DATABASE_PASSWORD").unwrap_or(db.password),
                name: get("DATABASE_NAME").unwrap_or(db.name),
                pool_size,
            },
            port: parse_or("PORT", get("PORT"), defaults.port)?,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> PgConnectOptions {
        self.connect_options_for(&self.name)
    }

    /// Options for another database on the same server (e.g. `postgres` for admin work).
    pub fn connect_options_for(&self, database: &str) -> PgConnectOptions {
        let opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(database);
        if self.password.is_empty() {
            opts
        } else {
            opts.password(&self.password)
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(settings(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn reads_all_keys() {
        let s = settings(&[
            ("DATABASE_HOST", "db.internal"),
            ("DATABASE_PORT", "6543"),
            ("DATABASE_USER", "app"),
            ("DATABASE_PASSWORD", "secret"),
            ("DATABASE_NAME", "stays"),
            ("DATABASE_POOL_SIZE", "4"),
            ("PORT", "4000"),
        ])
        .unwrap();
        assert_eq!(s.database.host, "db.internal");
        assert_eq!(s.database.port, 6543);
        assert_eq!(s.database.user, "app");
        assert_eq!(s.database.password, "secret");
        assert_eq!(s.database.name, "stays");
        assert_eq!(s.database.pool_size, 4);
        assert_eq!(s.listen_addr().port(), 4000);
    }

    #[test]
    fn blank_values_fall_back() {
        let s = settings(&[("PORT", "  "), ("DATABASE_HOST", "")]).unwrap();
        assert_eq!(s.port, 3000);
        assert_eq!(s.database.host, "localhost");
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = settings(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
        let err = settings(&[("DATABASE_POOL_SIZE", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_POOL_SIZE", .. }));
    }
}
