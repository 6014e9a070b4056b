use thiserror::Error;

use crate::engine::tictactoe::Mark;

/// A rejected move. Rejection never changes the board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("cell {index} is out of bounds (expected 0..=8)")]
    OutOfBounds { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("cannot place an empty mark on cell {index}")]
    EmptyMark { index: usize },

    #[error("game is already over")]
    GameOver,

    #[error("not your turn, {expected} is to move")]
    NotYourTurn { expected: Mark },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("config cache lock poisoned")]
    Lock,
}
