use thiserror::Error;

/// Command-line application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    DateError(#[from] calday_core::DateError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
