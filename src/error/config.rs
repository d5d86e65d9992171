use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot requires this environment variable to be defined. Check the
    /// `.env` file or the process environment for the missing value.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
