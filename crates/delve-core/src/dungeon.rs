use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::location::{Location, write_listing};
use crate::thing::{Item, Npc};

/// Stable identifier for a location owned by a [`Dungeon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(pub Uuid);

impl LocationId {
    /// Generate a new random location ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Owns every location once and connects them with directional exits.
///
/// Unlike [`Location::add_location`], exits here point at the shared
/// location, so marking a room visited is seen from every room leading to it.
/// Locations stored in the dungeon carry no neighbors of their own; all edges
/// live in the dungeon's exit table.
#[derive(Debug, Clone)]
pub struct Dungeon {
    /// Display name of the dungeon.
    pub name: String,
    locations: HashMap<LocationId, Location>,
    order: Vec<LocationId>,

    // Indexes
    by_name_lower: HashMap<String, LocationId>,
    exits: HashMap<LocationId, BTreeMap<String, LocationId>>,
}

impl Dungeon {
    /// Create an empty dungeon.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locations: HashMap::new(),
            order: Vec::new(),
            by_name_lower: HashMap::new(),
            exits: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    /// Add a location. Returns its ID.
    ///
    /// Any neighbors already stored inside `location` are dropped; use
    /// [`Dungeon::link`] to connect locations.
    pub fn add_location(&mut self, location: Location) -> CoreResult<LocationId> {
        let name_lower = location.name().to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateName(location.name().to_string()));
        }

        let id = LocationId::new();
        let mut stored = Location::new(location.name(), location.description());
        for npc in location.npcs() {
            stored.add_npc(npc);
        }
        for item in location.items() {
            stored.add_item(item);
        }
        if location.visited() {
            stored.set_visited();
        }

        debug!(%id, name = stored.name(), "added location");
        self.by_name_lower.insert(name_lower, id);
        self.order.push(id);
        self.locations.insert(id, stored);
        Ok(id)
    }

    /// Get a location by ID.
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Place an NPC at a location.
    pub fn add_npc_to(&mut self, id: LocationId, npc: Npc) -> CoreResult<()> {
        self.stored_mut(id)?.add_npc(npc);
        Ok(())
    }

    /// Place an item at a location.
    pub fn add_item_to(&mut self, id: LocationId, item: Item) -> CoreResult<()> {
        self.stored_mut(id)?.add_item(item);
        Ok(())
    }

    // Stays private: a stored location must never gain neighbors of its own.
    fn stored_mut(&mut self, id: LocationId) -> CoreResult<&mut Location> {
        self.locations
            .get_mut(&id)
            .ok_or(CoreError::LocationNotFound(id))
    }

    /// Find a location by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        self.find_id_by_name(name).and_then(|id| self.locations.get(&id))
    }

    /// Find a location ID by name (case-insensitive).
    pub fn find_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// All locations in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.order
            .iter()
            .filter_map(|id| self.locations.get(id).map(|loc| (*id, loc)))
    }

    /// Mark a location as visited.
    pub fn visit(&mut self, id: LocationId) -> CoreResult<()> {
        self.stored_mut(id)?.set_visited();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Exits
    // -----------------------------------------------------------------------

    /// Add a one-way exit from `from` to `to` labelled `direction`.
    pub fn link(
        &mut self,
        from: LocationId,
        direction: impl Into<String>,
        to: LocationId,
    ) -> CoreResult<()> {
        let direction = direction.into();
        if !self.locations.contains_key(&from) {
            return Err(CoreError::LocationNotFound(from));
        }
        if !self.locations.contains_key(&to) {
            return Err(CoreError::LocationNotFound(to));
        }
        if direction.is_empty() {
            return Err(CoreError::EmptyDirection);
        }

        let exits = self.exits.entry(from).or_default();
        if exits.contains_key(&direction) {
            return Err(CoreError::DuplicateDirection(direction));
        }
        debug!(%from, %to, %direction, "linked exit");
        exits.insert(direction, to);
        Ok(())
    }

    /// Connect `a` and `b` both ways: `a --there--> b` and `b --back--> a`.
    ///
    /// Either both exits are added or neither is.
    pub fn link_both(
        &mut self,
        a: LocationId,
        there: impl Into<String>,
        b: LocationId,
        back: impl Into<String>,
    ) -> CoreResult<()> {
        let there = there.into();
        self.link(a, there.clone(), b)?;
        if let Err(e) = self.link(b, back, a) {
            if let Some(exits) = self.exits.get_mut(&a) {
                exits.remove(&there);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Exits of a location as `(direction, destination)`, sorted by direction.
    pub fn exits(&self, id: LocationId) -> Vec<(&str, LocationId)> {
        self.exits
            .get(&id)
            .map(|exits| exits.iter().map(|(d, to)| (d.as_str(), *to)).collect())
            .unwrap_or_default()
    }

    /// The destination of the exit labelled `direction`, if any.
    pub fn exit(&self, id: LocationId, direction: &str) -> Option<LocationId> {
        self.exits.get(&id).and_then(|exits| exits.get(direction)).copied()
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Print a location the same way as [`Location`]'s `Display`, with the
    /// "(Visited)" marker taken from the neighbors' current state.
    pub fn render(&self, id: LocationId) -> CoreResult<String> {
        let location = self.get(id).ok_or(CoreError::LocationNotFound(id))?;
        let exits = self.exits(id).into_iter().filter_map(|(direction, to)| {
            self.get(to)
                .map(|neighbor| (direction, neighbor.name(), neighbor.visited()))
        });

        let mut out = String::new();
        // Writing into a String never fails
        let _ = write_listing(&mut out, location, exits);
        Ok(out)
    }

    /// Build a value-copy [`Location`] whose neighbors are snapshots of the
    /// current neighbors. The snapshots carry no exits of their own.
    pub fn snapshot(&self, id: LocationId) -> CoreResult<Location> {
        let mut location = self
            .get(id)
            .cloned()
            .ok_or(CoreError::LocationNotFound(id))?;
        for (direction, to) in self.exits(id) {
            let neighbor = self.get(to).ok_or(CoreError::LocationNotFound(to))?;
            location.add_location(direction, neighbor)?;
        }
        Ok(location)
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of locations the player has visited.
    pub fn visited_count(&self) -> usize {
        self.locations.values().filter(|l| l.visited()).count()
    }

    /// Log a one-line summary of the dungeon's size.
    pub fn log_summary(&self) {
        let exit_count: usize = self.exits.values().map(BTreeMap::len).sum();
        info!(
            name = %self.name,
            locations = self.location_count(),
            exits = exit_count,
            "dungeon ready"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn test_dungeon() -> (Dungeon, LocationId, LocationId) {
        let mut dungeon = Dungeon::new("Test Dungeon");
        let mut cave = Location::new("Cave", "A dark cave");
        cave.add_npc(Npc::new("Goblin"));
        cave.add_item(Item::new("Torch"));
        let cave = dungeon.add_location(cave).unwrap();
        let forest = dungeon
            .add_location(Location::new("Forest", "A green forest"))
            .unwrap();
        dungeon.link_both(cave, "north", forest, "south").unwrap();
        (dungeon, cave, forest)
    }

    #[test]
    fn location_id_display_shows_short_form() {
        let id = LocationId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
    }

    #[test]
    fn add_and_find_location() {
        let (dungeon, cave, _) = test_dungeon();
        assert_eq!(dungeon.location_count(), 2);
        assert_eq!(dungeon.get(cave).unwrap().name(), "Cave");
        assert_eq!(dungeon.find_id_by_name("cave"), Some(cave));
        assert_eq!(dungeon.find_by_name("FOREST").unwrap().name(), "Forest");
        assert!(dungeon.find_by_name("Lake").is_none());
    }

    #[test]
    fn duplicate_name_rejected() {
        let (mut dungeon, _, _) = test_dungeon();
        let err = dungeon
            .add_location(Location::new("cave", "Another cave"))
            .unwrap_err();
        assert_eq!(err, CoreError::DuplicateName("cave".to_string()));
        assert_eq!(dungeon.location_count(), 2);
    }

    #[test]
    fn locations_keep_insertion_order() {
        let (dungeon, cave, forest) = test_dungeon();
        let ids: Vec<LocationId> = dungeon.locations().map(|(id, _)| id).collect();
        assert_eq!(ids, [cave, forest]);
    }

    #[test]
    fn link_both_adds_reciprocal_exits() {
        let (dungeon, cave, forest) = test_dungeon();
        assert_eq!(dungeon.exit(cave, "north"), Some(forest));
        assert_eq!(dungeon.exit(forest, "south"), Some(cave));
        assert_eq!(dungeon.exit(cave, "south"), None);
    }

    #[test]
    fn link_rejects_bad_directions() {
        let (mut dungeon, cave, forest) = test_dungeon();
        assert_eq!(
            dungeon.link(cave, "", forest).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            dungeon.link(cave, "north", forest).unwrap_err(),
            CoreError::DuplicateDirection("north".to_string())
        );
    }

    #[test]
    fn link_rejects_unknown_location() {
        let (mut dungeon, cave, _) = test_dungeon();
        let ghost = LocationId::new();
        assert_eq!(
            dungeon.link(cave, "east", ghost).unwrap_err(),
            CoreError::LocationNotFound(ghost)
        );
        assert_eq!(
            dungeon.link(ghost, "east", cave).unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn link_both_rolls_back_on_failure() {
        let (mut dungeon, cave, forest) = test_dungeon();
        // "south" is already taken on the forest side
        let err = dungeon.link_both(cave, "up", forest, "south").unwrap_err();
        assert_eq!(err, CoreError::DuplicateDirection("south".to_string()));
        assert_eq!(dungeon.exit(cave, "up"), None);
    }

    #[test]
    fn exits_are_sorted_by_direction() {
        let (mut dungeon, cave, _) = test_dungeon();
        let pit = dungeon.add_location(Location::new("Pit", "Deep")).unwrap();
        dungeon.link(cave, "down", pit).unwrap();
        let dirs: Vec<&str> = dungeon.exits(cave).into_iter().map(|(d, _)| d).collect();
        assert_eq!(dirs, ["down", "north"]);
    }

    #[test]
    fn add_location_drops_embedded_neighbors() {
        let mut dungeon = Dungeon::new("Test");
        let mut hall = Location::new("Hall", "Long");
        hall.add_location("east", &Location::new("Kitchen", "Warm")).unwrap();
        let hall = dungeon.add_location(hall).unwrap();
        assert!(dungeon.get(hall).unwrap().locations().is_empty());
        assert!(dungeon.exits(hall).is_empty());
    }

    #[test]
    fn render_sees_live_visited_state() {
        let (mut dungeon, cave, forest) = test_dungeon();
        let before = dungeon.render(cave).unwrap();
        assert!(before.contains("    - north - Forest\n"));

        dungeon.visit(forest).unwrap();
        let after = dungeon.render(cave).unwrap();
        assert!(after.contains("    - north - Forest (Visited)\n"));
        assert_eq!(dungeon.visited_count(), 1);
    }

    #[test]
    fn render_matches_location_layout() {
        let (dungeon, cave, _) = test_dungeon();
        insta::assert_snapshot!(dungeon.render(cave).unwrap().trim_end(), @r"
        Cave - A dark cave
        You see the following NPCs:
            - Goblin
        You see the following Items:
            - Torch
        You can go in the following Directions:
            - north - Forest
        ");
    }

    #[test]
    fn snapshot_freezes_neighbor_state() {
        let (mut dungeon, cave, forest) = test_dungeon();
        let live_before = dungeon.render(cave).unwrap();
        let frozen = dungeon.snapshot(cave).unwrap();
        dungeon.visit(forest).unwrap();

        assert!(!frozen.locations()["north"].visited());
        assert_eq!(frozen.to_string(), live_before);
        assert_ne!(frozen.to_string(), dungeon.render(cave).unwrap());
    }

    #[test]
    fn unknown_id_errors() {
        let (mut dungeon, _, _) = test_dungeon();
        let ghost = LocationId::new();
        assert!(dungeon.render(ghost).is_err());
        assert!(dungeon.snapshot(ghost).is_err());
        assert_eq!(
            dungeon.visit(ghost).unwrap_err(),
            CoreError::LocationNotFound(ghost)
        );
        assert_eq!(
            dungeon.add_npc_to(ghost, Npc::new("Wraith")).unwrap_err(),
            CoreError::LocationNotFound(ghost)
        );
        assert_eq!(
            dungeon.add_item_to(ghost, Item::new("Lamp")).unwrap_err(),
            CoreError::LocationNotFound(ghost)
        );
    }

    #[test]
    fn added_things_show_up_live_and_in_snapshots() {
        let (mut dungeon, cave, forest) = test_dungeon();
        dungeon.add_npc_to(forest, Npc::new("Owl")).unwrap();
        dungeon.add_item_to(forest, Item::new("Acorn")).unwrap();

        let forest_text = dungeon.render(forest).unwrap();
        assert!(forest_text.contains("You see the following NPCs:\n    - Owl\n"));
        assert!(forest_text.contains("You see the following Items:\n    - Acorn\n"));

        let neighbors = dungeon.snapshot(cave).unwrap().locations();
        let north = &neighbors["north"];
        assert_eq!(north.npcs(), [Npc::new("Owl")]);
        assert_eq!(north.items(), [Item::new("Acorn")]);
        assert!(north.locations().is_empty());
    }
}
