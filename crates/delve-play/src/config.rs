//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    /// Name of the starting location. `None` starts at the first location.
    pub start: Option<String>,
    /// Prompt printed before each command is read.
    pub prompt: String,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            start: None,
            prompt: "> ".to_string(),
        }
    }
}

impl PlayConfig {
    /// Set the starting location.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}
