//! Runtime configuration, read from the environment (and `.env`).
//!
//! | Variable           | Default     |
//! |--------------------|-------------|
//! | `APP_PORT`         | `8080`      |
//! | `ALLOWED_ORIGINS`  | *(empty)*   |
//! | `LEG_DURATION_MS`  | `60000`     |
//! | `TICK_INTERVAL_MS` | `100`       |
//! | `FEED_MODE`        | `simulated` |

use std::env;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use strum::EnumString;

use crate::sim::LegDuration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Invalid { key: String, value: String },
    ZeroLegDuration,
    ZeroTickInterval,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {key}: {value:?}"),
            ConfigError::ZeroLegDuration => write!(f, "leg duration must be greater than zero"),
            ConfigError::ZeroTickInterval => write!(f, "tick interval must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the live marker's positions come from. One per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FeedMode {
    /// Positions are resolved locally by the simulation driver.
    #[default]
    Simulated,
    /// Positions are pushed by an external telemetry source.
    External,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub allowed_origins: String,
    pub leg_duration: LegDuration,
    pub tick_interval: Duration,
    pub feed_mode: FeedMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            allowed_origins: String::new(),
            leg_duration: LegDuration::DEFAULT,
            tick_interval: DEFAULT_TICK_INTERVAL,
            feed_mode: FeedMode::default(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenv::dotenv() {
            log::debug!("No .env loaded: {err}");
        }

        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Reads every variable through `lookup`, unset keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let port = parse(&lookup, "APP_PORT")?.unwrap_or(defaults.port);
        let allowed_origins = lookup("ALLOWED_ORIGINS").unwrap_or(defaults.allowed_origins);
        let feed_mode = parse(&lookup, "FEED_MODE")?.unwrap_or(defaults.feed_mode);

        let leg_duration = match parse::<u64>(&lookup, "LEG_DURATION_MS")? {
            Some(millis) => LegDuration::from_millis(millis)?,
            None => defaults.leg_duration,
        };

        let tick_interval = match parse::<u64>(&lookup, "TICK_INTERVAL_MS")? {
            Some(0) => return Err(ConfigError::ZeroTickInterval),
            Some(millis) => Duration::from_millis(millis),
            None => defaults.tick_interval,
        };

        Ok(Config {
            port,
            allowed_origins,
            leg_duration,
            tick_interval,
            feed_mode,
        })
    }

    /// Origins permitted by CORS, parsed from the comma-separated list.
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| {
            value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                value,
            })
        })
        .transpose()
}
