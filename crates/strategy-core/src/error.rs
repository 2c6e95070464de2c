use thiserror::Error;

/// Errors raised at the edges of the engine (configuration and input decoding).
///
/// The scoring functions themselves never fail: missing data resolves to an
/// absent value or an `insufficient` quality tier instead.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
