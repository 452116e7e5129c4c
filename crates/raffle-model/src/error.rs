use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RaffleError {
    #[error("not enough unique numbers for prizes: requested {requested}, available {available}")]
    NotEnoughNumbers { requested: usize, available: u64 },
    #[error("no prizes to draw")]
    NoPrizes,
    #[error("prize name cannot be empty")]
    EmptyPrizeName,
    #[error("prize name too long ({length} characters, max {max})")]
    PrizeNameTooLong { length: usize, max: usize },
    #[error("invalid submission '{line}': expected 'name, number'")]
    InvalidSubmission { line: String },
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RaffleError>;
