//! Error types for the play engine.

use delve_core::CoreError;
use thiserror::Error;

/// Result type for play operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur while playing.
#[derive(Debug, Error)]
pub enum PlayError {
    /// The named starting location does not exist.
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// The dungeon has no locations at all.
    #[error("dungeon has no locations")]
    EmptyDungeon,

    /// The target is not an NPC or item at the player's location.
    #[error("{0} is not here.")]
    NotHere(String),

    /// Input that matched no command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The session already ended.
    #[error("the game is over")]
    Finished,

    /// Dungeon error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
