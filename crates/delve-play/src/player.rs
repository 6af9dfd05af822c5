//! Player state management.

use delve_core::LocationId;

/// Where the player is and how far they have walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Current location.
    pub location: LocationId,
    /// Number of successful moves.
    pub moves: u32,
}

impl PlayerState {
    /// Create a player standing at `location`.
    pub fn new(location: LocationId) -> Self {
        Self { location, moves: 0 }
    }

    /// Move the player to `location`.
    pub fn travel_to(&mut self, location: LocationId) {
        self.location = location;
        self.moves = self.moves.saturating_add(1);
    }
}
