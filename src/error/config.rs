use thiserror::Error;

/// Errors raised while loading application configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// SCHEDULER_TIMEZONE is not a valid IANA time zone name.
    #[error("Invalid time zone name: {0}")]
    InvalidTimezone(String),
}
