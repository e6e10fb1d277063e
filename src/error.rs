use std::io;

/// Malformed level text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("level has no lines")]
    Empty,
    #[error("invalid character '{symbol}' at position ({x}, {y})")]
    InvalidSymbol { symbol: char, x: usize, y: usize },
    #[error("level must contain exactly one player, found {found}")]
    PlayerCount { found: usize },
}

/// Failure to load a level, or a collection of levels, from disk.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid level: {0}")]
    InvalidLevel(#[from] ParseError),
}
