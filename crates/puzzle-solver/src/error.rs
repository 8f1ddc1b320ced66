//! Errors raised while building puzzles.
//!
//! The solver itself never fails; these cover reading puzzle files,
//! validating puzzle input and manual moves made from the console.

/// Result type for puzzle construction and parsing
pub type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("puzzle file is empty, expected a `rows cols` header")]
    MissingHeader,

    #[error("line {line}: expected two positive dimensions, found {found:?}")]
    BadDimensions { line: usize, found: String },

    #[error("expected {expected} board rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("line {line}: expected {expected} tiles, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid tile {token:?}")]
    InvalidTile { line: usize, token: String },

    #[error("board has no empty cell")]
    NoEmptyCell,

    #[error("board has more than one empty cell")]
    DuplicateEmptyCell,

    #[error("can't move from ({from_row}, {from_col}) to ({to_row}, {to_col})")]
    IllegalMove {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },

    #[error("invalid string puzzle: {0}")]
    InvalidString(String),

    #[error("invalid alphabet {first:?}..={last:?}")]
    InvalidAlphabet { first: char, last: char },
}
