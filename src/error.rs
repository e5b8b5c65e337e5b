//! Error type shared by the sort/select engine and the input adapters.

use thiserror::Error;

use crate::element::DataType;

#[derive(Debug, Error)]
pub enum Error {
    /// Select was asked for a rank outside `[0, len - 1]`.
    #[error("rank {k} is out of range for a sequence of length {len}")]
    OutOfRange { k: usize, len: usize },

    /// Partition was handed bounds that do not describe a non-empty range of the sequence.
    #[error("invalid range [{lo}, {hi}] for a sequence of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    #[error("unsupported data type `{0}`, expected one of: int, double, char, string")]
    UnsupportedDataType(String),

    /// A token of the input text could not be read as the requested element type.
    #[error("token {index} (`{token}`) is not a valid {data_type}")]
    Parse {
        index: usize,
        token: String,
        data_type: DataType,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
