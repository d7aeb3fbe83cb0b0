use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("DNA sequence length must be divisible by 3 for proper translation (got {length})")]
    InvalidLength { length: usize },

    #[error("Invalid nucleotide '{symbol}' at position {position}")]
    InvalidSymbol { position: usize, symbol: char },

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for Result with SeqError
pub type Result<T> = std::result::Result<T, SeqError>;

impl SeqError {
    /// Create a new InvalidSymbol error
    pub fn invalid_symbol(position: usize, symbol: char) -> Self {
        SeqError::InvalidSymbol { position, symbol }
    }

    /// Create a new MissingColumn error
    pub fn missing_column(name: impl Into<String>) -> Self {
        SeqError::MissingColumn(name.into())
    }
}
