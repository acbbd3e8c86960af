use crate::error::ErrorReporting;
use anyhow::Context;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fs};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl From<String> for Environment {
    fn from(name: String) -> Self {
        if name == "development" {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct DatabaseConfig {
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_db_host")]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    pub name: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub environment: Environment,
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        let config: Config =
            toml::from_str(config.as_str()).with_context(|| "Unable to parse config")?;
        Ok(config)
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `DB_*`, `PORT` and `NODE_ENV` values provided by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Config, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key).with_context(|| format!("Unable to read env var: {}", key))
        };

        let database = DatabaseConfig {
            user: read("DB_USER")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            host: lookup("DB_HOST").unwrap_or_else(default_db_host),
            port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            name: read("DB_NAME")?,
            max_connections: parse_or(&lookup, "DB_POOL_SIZE", DEFAULT_MAX_CONNECTIONS)?,
        };

        let config = Config {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            environment: lookup("NODE_ENV").map(Environment::from).unwrap_or_default(),
            database,
        };
        Ok(config)
    }

    pub fn error_reporting(&self) -> ErrorReporting {
        match self.environment {
            Environment::Development => ErrorReporting::Verbose,
            Environment::Production => ErrorReporting::Generic,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Unable to parse {} value", key)),
        None => Ok(default),
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_db_host() -> String {
    DEFAULT_DB_HOST.to_owned()
}

fn default_db_port() -> u16 {
    DEFAULT_DB_PORT
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}
