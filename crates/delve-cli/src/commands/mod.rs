pub mod map;
pub mod play;
pub mod show;

use delve_core::Dungeon;

/// Build the starter dungeon, converting errors for the CLI.
fn load_dungeon() -> Result<Dungeon, String> {
    delve_play::starter_dungeon().map_err(|e| format!("failed to build dungeon: {e}"))
}
