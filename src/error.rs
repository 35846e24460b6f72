use thiserror::Error;

/// Errors raised at the crate boundary (configuration and ingestion)
///
/// Scoring, ranking, generation and review never fail; their edge cases are
/// explicit result states instead.
#[derive(Debug, Error)]
pub enum BrydjeError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
