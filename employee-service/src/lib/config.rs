use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

const MIN_JWT_SECRET_BYTES: usize = 32;
const MAX_EXPIRATION_HOURS: i64 = 24 * 365;
const IN_MEMORY_URL: &str = "memory://";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// `memory://` selects the in-memory store instead of PostgreSQL.
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with(IN_MEMORY_URL)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub fn token_validity(&self) -> Result<chrono::Duration, ConfigError> {
        chrono::Duration::try_hours(self.expiration_hours).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.expiration_hours is out of range: {}",
                self.expiration_hours
            ))
        })
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// EnvFilter directive; `RUST_LOG` takes precedence when set.
    pub filter: Option<String>,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes",
                MIN_JWT_SECRET_BYTES
            )));
        }
        if !(1..=MAX_EXPIRATION_HOURS).contains(&self.jwt.expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {}",
                MAX_EXPIRATION_HOURS
            )));
        }
        self.jwt.token_validity()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, expiration_hours: i64) -> Config {
        Config {
            database: DatabaseConfig {
                url: "memory://".to_string(),
                max_connections: 5,
            },
            server: ServerConfig { http_port: 8080 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_hours,
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validate_accepts_long_secret() {
        let config = config("0123456789abcdef0123456789abcdef", 24);
        assert!(config.validate().is_ok());
        assert!(config.database.is_in_memory());
        assert_eq!(config.jwt.token_validity().unwrap(), chrono::Duration::hours(24));
    }

    #[test]
    fn test_validate_rejects_short_secret() {
        assert!(config("short", 24).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_validity() {
        assert!(config("0123456789abcdef0123456789abcdef", 0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_excessive_validity() {
        let config = config("0123456789abcdef0123456789abcdef", i64::MAX);
        assert!(config.validate().is_err());
        assert!(config.jwt.token_validity().is_err());
    }

    #[test]
    fn test_load_prefers_environment_over_files() {
        let secret = "a-secret-from-the-environment-of-40-bytes";
        env::set_var("DATABASE__URL", "memory://");
        env::set_var("JWT__SECRET", secret);

        let loaded = Config::load();

        env::remove_var("DATABASE__URL");
        env::remove_var("JWT__SECRET");

        let config = loaded.expect("Failed to load configuration");
        assert_eq!(config.database.url, "memory://");
        assert_eq!(config.jwt.secret, secret);
        assert_eq!(config.server.http_port, 8080);
    }

    #[test]
    fn test_postgres_url_is_not_in_memory() {
        let database = DatabaseConfig {
            url: "postgres://localhost/employees".to_string(),
            max_connections: 5,
        };
        assert!(!database.is_in_memory());
    }
}
