//! Server configuration read from the environment.
//!
//! | variable | fallback | default |
//! |---|---|---|
//! | `PLANDASH_HOST` | `IP` | `127.0.0.1` |
//! | `PLANDASH_PORT` | `PORT` | `8080` |
//! | `PLANDASH_START` | | `2024-07-01` |
//! | `PLANDASH_END` | | `2024-11-30` |
//!
//! `IP` and `PORT` are what `dx serve` exports for fullstack builds.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;
use time::{macros::format_description, Date};

use crate::dataset::{DatasetSpec, DEFAULT_END, DEFAULT_START};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid host `{value}` in {variable}")]
    InvalidHost { variable: &'static str, value: String },

    #[error("invalid port `{value}` in {variable}")]
    InvalidPort { variable: &'static str, value: String },

    #[error("invalid date `{value}` in {variable}, expected YYYY-MM-DD")]
    InvalidDate { variable: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub start: Date,
    pub end: Date,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some((variable, value)) = first_set(&lookup, &["PLANDASH_HOST", "IP"]) {
            config.host = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { variable, value })?;
        }

        if let Some((variable, value)) = first_set(&lookup, &["PLANDASH_PORT", "PORT"]) {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { variable, value })?;
        }

        if let Some((variable, value)) = first_set(&lookup, &["PLANDASH_START"]) {
            config.start = parse_date(variable, value)?;
        }
        if let Some((variable, value)) = first_set(&lookup, &["PLANDASH_END"]) {
            config.end = parse_date(variable, value)?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn dataset_spec(&self) -> DatasetSpec {
        DatasetSpec::default().with_span(self.start, self.end)
    }
}

fn first_set<F>(lookup: &F, keys: &[&'static str]) -> Option<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter().find_map(|key| {
        lookup(key)
            .filter(|value| !value.trim().is_empty())
            .map(|value| (*key, value))
    })
}

fn parse_date(variable: &'static str, value: String) -> Result<Date, ConfigError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ConfigError::InvalidDate { variable, value })
}
