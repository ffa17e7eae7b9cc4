use std::result::Result as StdResult;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Invalid private key length (expected 64 hex characters)")]
    InvalidLength { got: usize },
    #[error("Failed to decode hex string: {0}")]
    DecodeHex(faster_hex::Error),
    #[error("Unknown prefix policy: \"{0}\". Expected \"all\" or \"leading\"")]
    UnknownPrefixPolicy(String),
}

pub type Result<T> = StdResult<T, Error>;
