use std::fmt;

/// A non-player character standing at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    /// Display name of the character.
    pub name: String,
    /// Free-text description shown when the player looks at it.
    pub description: String,
}

impl Npc {
    /// Create an NPC with an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for Npc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An object lying at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name of the item.
    pub name: String,
    /// Free-text description shown when the player looks at it.
    pub description: String,
}

impl Item {
    /// Create an item with an empty description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
