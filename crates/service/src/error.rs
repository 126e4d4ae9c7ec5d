use diskhead_core::InvalidRequest;
use thiserror::Error;

/// Reasons the service rejects a request.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Invalid(#[from] InvalidRequest),

    #[error("malformed request: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no algorithm given; name one or set `compare`")]
    NoAlgorithm,
}
