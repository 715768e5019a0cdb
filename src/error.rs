use std::path::PathBuf;

use crate::game::Player;

/// Errors raised by the game state machine when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0} is out of range, only cells 0-8 exist")]
    OutOfRange(usize),

    #[error("it is not player {0}'s turn")]
    WrongTurn(Player),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by the state encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("perspective string has length {0}, expected 9")]
    InvalidLength(usize),
}

/// Errors that can occur when persisting or loading a Q-table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read table from {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write table to {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse table from {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize table: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
