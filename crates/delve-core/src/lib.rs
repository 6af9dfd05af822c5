//! Core types for delve: locations, NPCs, items, and the dungeon graph.
//!
//! A [`Location`] holds its neighbors by value, so linking one location to
//! another stores a snapshot. When live, shared state is needed (the player
//! marking rooms visited while exploring), build a [`Dungeon`] instead: it
//! owns every location once and wires exits through [`LocationId`]s.

/// Arena of locations connected by directional exits.
pub mod dungeon;
/// Error types used throughout the crate.
pub mod error;
/// The value-semantics map node.
pub mod location;
/// NPCs and items found at a location.
pub mod thing;

/// Re-export dungeon types.
pub use dungeon::{Dungeon, LocationId};
/// Re-export error types.
pub use error::{CoreError, CoreResult, ErrorKind};
/// Re-export the location entity.
pub use location::Location;
/// Re-export NPC and item types.
pub use thing::{Item, Npc};
