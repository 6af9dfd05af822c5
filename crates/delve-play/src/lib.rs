//! Interactive exploration engine for delve.
//!
//! Turns player input into moves through a [`Dungeon`](delve_core::Dungeon):
//! a small command parser, the player's position and move count, a session that
//! marks rooms visited as the player walks in, and the built-in starter
//! dungeon.

/// Command parsing for player input.
pub mod command;
/// Session configuration.
pub mod config;
/// Error types for the play engine.
pub mod error;
/// Player state management.
pub mod player;
/// Game session management.
pub mod session;
/// The built-in starter dungeon.
pub mod starter;

pub use command::{Command, expand_direction, parse_command};
pub use config::PlayConfig;
pub use error::{PlayError, PlayResult};
pub use player::PlayerState;
pub use session::GameSession;
pub use starter::starter_dungeon;
