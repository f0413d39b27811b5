//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use bloglist_infra::{DatabaseConfig, JwtConfig, PasswordConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());
        config.jwt.warn_if_default_secret();
        config
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let database = get("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parse(get("DB_MAX_CONNECTIONS")).unwrap_or(20),
            min_connections: parse(get("DB_MIN_CONNECTIONS")).unwrap_or(2),
        });

        let defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: get("JWT_SECRET").unwrap_or(defaults.secret),
            expiration_hours: parse(get("JWT_EXPIRATION_HOURS")).unwrap_or(defaults.expiration_hours),
            issuer: get("JWT_ISSUER").unwrap_or(defaults.issuer),
        };

        let hashing = PasswordConfig::default();
        let password = PasswordConfig {
            memory_kib: parse(get("ARGON2_MEMORY_KIB")).unwrap_or(hashing.memory_kib),
            iterations: parse(get("ARGON2_ITERATIONS")).unwrap_or(hashing.iterations),
        };

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(get("PORT")).unwrap_or(3003),
            database,
            jwt,
            password,
        }
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}
