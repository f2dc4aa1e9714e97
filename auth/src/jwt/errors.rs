use thiserror::Error;

/// Error type for JWT operations.
///
/// Expired and otherwise-invalid tokens are distinct variants so the API
/// boundary can report them differently.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
