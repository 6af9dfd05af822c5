//! The built-in starter dungeon.

use delve_core::{CoreResult, Dungeon, Item, Location, Npc};

/// Build the small dungeon the `delve` binary plays by default.
///
/// The cave is added first, so a session without a configured start begins
/// there.
pub fn starter_dungeon() -> CoreResult<Dungeon> {
    let mut dungeon = Dungeon::new("The Hollow Hills");

    let mut cave = Location::new("Cave", "A dark cave");
    cave.add_npc(Npc::new("Goblin").with_description("A wiry goblin gnawing on a bone."));
    cave.add_item(Item::new("Torch").with_description("Pitch-soaked rags on a stick."));

    let mut forest = Location::new("Forest", "A green forest");
    forest.add_npc(Npc::new("Old Hermit").with_description("Mutters about the river and its key."));
    forest.add_item(Item::new("Walking Stick"));

    let mut river = Location::new("River", "A fast, cold river");
    river.add_item(Item::new("Rusty Key").with_description("It might still turn a lock."));

    let mut crypt = Location::new("Crypt", "A low crypt lined with bones");
    crypt.add_npc(Npc::new("Skeleton").with_description("It rattles when you breathe."));
    crypt.add_item(Item::new("Silver Ring"));

    let cave = dungeon.add_location(cave)?;
    let forest = dungeon.add_location(forest)?;
    let river = dungeon.add_location(river)?;
    let crypt = dungeon.add_location(crypt)?;

    dungeon.link_both(cave, "north", forest, "south")?;
    dungeon.link_both(forest, "east", river, "west")?;
    dungeon.link_both(cave, "down", crypt, "up")?;

    dungeon.log_summary();
    Ok(dungeon)
}
