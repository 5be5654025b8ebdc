use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input (or the decoded payload) does not have the length the decode path requires.
    #[error("incorrect size: expected {expected} bytes, got {received}")]
    IncorrectSize { expected: usize, received: usize },
    #[error("malformed hex digest: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("malformed base64 digest: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("structured digest is not a quoted string literal")]
    NotQuoted,
    #[error("failed to encode digest as json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn incorrect_size(expected: usize, received: usize) -> Self {
        Error::IncorrectSize { expected, received }
    }
}
