#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PakError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid bundle: {0}")]
    Invalid(String),

    #[error("stream reported a negative remaining length")]
    NegativeSize,

    #[error("input is {0} bytes, too large for the 32-bit size field")]
    SizeOverflow(u64),
}

pub type PakResult<T> = Result<T, PakError>;
