use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::thing::{Item, Npc};

/// A node of the map: a named place with exits, NPCs and items.
///
/// Neighbors are held by value. [`Location::add_location`] stores a clone of
/// the linked location, so later changes to the original (marking it visited,
/// adding an NPC) are not seen through this location's exits. Use
/// [`Dungeon`](crate::Dungeon) when exits must observe live state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    name: String,
    description: String,
    visited: bool,
    neighbors: BTreeMap<String, Location>,
    npcs: Vec<Npc>,
    items: Vec<Item>,
}

impl Location {
    /// Create an unvisited location with no exits, NPCs or items.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            visited: false,
            neighbors: BTreeMap::new(),
            npcs: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Display name of the location.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text shown when the location is printed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// A copy of the neighbor map, keyed by direction.
    pub fn locations(&self) -> BTreeMap<String, Location> {
        self.neighbors.clone()
    }

    /// The neighbor stored under `direction`, if any.
    pub fn neighbor(&self, direction: &str) -> Option<&Location> {
        self.neighbors.get(direction)
    }

    /// Direction labels in key order.
    pub fn directions(&self) -> impl Iterator<Item = &str> {
        self.neighbors.keys().map(String::as_str)
    }

    /// Store a snapshot of `location` as the neighbor in `direction`.
    ///
    /// Fails with [`CoreError::EmptyDirection`] for an empty label and with
    /// [`CoreError::DuplicateDirection`] if the label is already in use.
    pub fn add_location(
        &mut self,
        direction: impl Into<String>,
        location: &Location,
    ) -> CoreResult<()> {
        let direction = direction.into();
        if direction.is_empty() {
            return Err(CoreError::EmptyDirection);
        }
        if self.neighbors.contains_key(&direction) {
            return Err(CoreError::DuplicateDirection(direction));
        }

        debug!(from = %self.name, to = %location.name, %direction, "linked location");
        self.neighbors.insert(direction, location.clone());
        Ok(())
    }

    /// Append an NPC. Duplicates are allowed.
    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }

    /// A copy of the NPCs here, in the order they were added.
    pub fn npcs(&self) -> Vec<Npc> {
        self.npcs.clone()
    }

    /// Append an item. Duplicates are allowed.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// A copy of the items here, in the order they were added.
    pub fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Mark the location as visited. Repeated calls have no further effect.
    pub fn set_visited(&mut self) {
        self.visited = true;
    }

    /// Whether the player has been here.
    pub fn visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn npc_slice(&self) -> &[Npc] {
        &self.npcs
    }

    pub(crate) fn item_slice(&self) -> &[Item] {
        &self.items
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exits = self.neighbors.iter().map(|(direction, neighbor)| {
            (direction.as_str(), neighbor.name(), neighbor.visited())
        });
        write_listing(f, self, exits)
    }
}

/// Write the printable listing of `location`.
///
/// Each exit is `(direction, neighbor name, neighbor visited)`.
pub(crate) fn write_listing<'a, W: fmt::Write>(
    out: &mut W,
    location: &Location,
    exits: impl Iterator<Item = (&'a str, &'a str, bool)>,
) -> fmt::Result {
    writeln!(out, "{} - {}", location.name(), location.description())?;

    writeln!(out, "You see the following NPCs:")?;
    for npc in location.npc_slice() {
        writeln!(out, "    - {npc}")?;
    }

    writeln!(out, "You see the following Items:")?;
    for item in location.item_slice() {
        writeln!(out, "    - {item}")?;
    }

    writeln!(out, "You can go in the following Directions:")?;
    for (direction, name, visited) in exits {
        let marker = if visited { " (Visited)" } else { "" };
        writeln!(out, "    - {direction} - {name}{marker}")?;
    }
    Ok(())
}
