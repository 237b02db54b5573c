use crate::models::SoilParameter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoilSenseError {
    #[error("missing parameter(s): {0}")]
    MissingParameter(String),

    #[error("value out of domain for {parameter}: {value} ({reason})")]
    OutOfDomain {
        parameter: SoilParameter,
        value: f64,
        reason: &'static str,
    },

    #[error("classifier model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SoilSenseError>;
