use std::io;

/// Unrecoverable bulletin loading errors
///
/// The message decoders themselves never fail; these errors only come from
/// reading and parsing the upstream weather bulletin.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid weather bulletin JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
