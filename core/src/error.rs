use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board columns do not all have the same number of clues")]
    InvalidBoardShape,
    #[error("Requested {requested} categories but the pool only holds {available}")]
    SampleExceedsPool { requested: usize, available: usize },
    #[error("Category {title:?} has {actual} clues, expected {expected}")]
    TooFewClues {
        title: String,
        expected: usize,
        actual: usize,
    },
    #[error("Network request failed: {0}")]
    Network(String),
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
