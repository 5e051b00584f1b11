use thiserror::Error;

/// All errors produced by oris-core.
///
/// Timeline synthesis itself is total — any text and any duration produce a
/// valid `Timeline`. Errors only arise at the edges: serializing a timeline
/// and validating an explicitly supplied timing configuration.
#[derive(Debug, Error)]
pub enum OrisError {
    #[error("invalid timing config: {0}")]
    InvalidConfig(String),

    #[error("timeline serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrisError>;
