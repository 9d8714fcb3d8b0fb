//! Error types for maze search

use thiserror::Error;

/// Failures that the search and retry loop can report
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("Search start ({x}, {y}) is outside the grid")]
    StartOutOfBounds { x: i32, y: i32 },

    #[error("Predecessor chain is broken at ({x}, {y})")]
    BrokenPredecessorChain { x: i32, y: i32 },

    #[error("No solvable maze generated in {0} attempts")]
    AttemptsExhausted(usize),
}

pub type Result<T> = std::result::Result<T, MazeError>;
