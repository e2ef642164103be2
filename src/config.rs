use std::collections::HashMap;
use thiserror::Error;

/// Runtime configuration, sourced from environment variables.
///
/// Every variable has a hardcoded default so the service starts with no
/// environment at all. With the embedded SQLite backend only `db_name`
/// selects storage (it is the database file path); host, user and password
/// are carried so a server-backed deployment keeps the same surface.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("3000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let db_host = env_map
            .get("DB_HOST")
            .cloned()
            .unwrap_or_else(|| "localhost".to_string());

        let db_user = env_map
            .get("DB_USER")
            .cloned()
            .unwrap_or_else(|| "app".to_string());

        let db_password = env_map.get("DB_PASSWORD").cloned().unwrap_or_default();

        let db_name = env_map
            .get("DB_NAME")
            .cloned()
            .unwrap_or_else(|| "data/postboard.db".to_string());

        Ok(Config {
            port,
            db_host,
            db_user,
            db_password,
            db_name,
        })
    }
}
