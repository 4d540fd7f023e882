use thiserror::Error;

use crate::metrics::Category;

/// Why a single input field was rejected by strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidReason {
    #[error("negative count {0}")]
    Negative(f64),

    #[error("not a finite number")]
    NotFinite,

    #[error("not a number")]
    NotNumeric,
}

/// Strict-mode rejection naming the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid value for `{field}`: {reason}")]
pub struct ValidationError {
    pub field: Category,
    pub reason: InvalidReason,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
