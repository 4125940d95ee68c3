use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fs};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite:expense_tracker.db";
pub const DEFAULT_MAX_POOL_SIZE: u32 = 5;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_owned()
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            database_url: default_database_url(),
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
        }
    }
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        let config: Config =
            toml::from_str(config.as_str()).with_context(|| "Unable to parse config")?;
        Ok(config)
    }

    /// Reads `PORT`, `DATABASE_URL` and `MAX_POOL_SIZE`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Config, anyhow::Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(port) = parse_var(&lookup, "PORT")? {
            config.port = port;
        }
        if let Some(database_url) = lookup("DATABASE_URL") {
            config.database_url = database_url;
        }
        if let Some(max_pool_size) = parse_var(&lookup, "MAX_POOL_SIZE")? {
            config.max_pool_size = max_pool_size;
        }
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|value| value.parse::<T>())
        .transpose()
        .with_context(|| format!("Unable to parse {} value", key))
}
