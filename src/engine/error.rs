use thiserror::Error;

/// Why a generation call produced nothing.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("no API key configured; enter one in Settings or set ANTHROPIC_API_KEY")]
    MissingCredential,

    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned no usable text")]
    EmptyResponse,
}
