//! Error types shared across the crate

use thiserror::Error;

/// Everything that can go wrong while setting up or running the game
#[derive(Debug, Error)]
pub enum GameError {
    /// No 2D drawing context could be obtained for the target canvas
    #[error("no drawing surface available: {0}")]
    SurfaceUnavailable(String),

    /// A sprite name that has no entry in the sprite sheet
    #[error("sprite `{0}` is not in the sprite sheet")]
    MissingSprite(String),

    /// A level schedule references an enemy blueprint that doesn't exist
    #[error("unknown enemy blueprint `{0}`")]
    UnknownBlueprint(String),

    /// Malformed configuration or sprite table JSON
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
