use chrono_tz::Tz;

use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Fixed named time zone all job triggers run on.
    pub scheduler_timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let timezone =
            std::env::var("SCHEDULER_TIMEZONE").unwrap_or_else(|_| "Europe/Berlin".to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            scheduler_timezone: timezone
                .parse()
                .map_err(|_| ConfigError::InvalidTimezone(timezone))?,
        })
    }
}
