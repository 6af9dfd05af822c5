//! Game session management.

use delve_core::{CoreError, Dungeon, LocationId};
use tracing::{debug, info};

use crate::command::{Command, parse_command};
use crate::config::PlayConfig;
use crate::error::{PlayError, PlayResult};
use crate::player::PlayerState;

/// A single-player walk through a dungeon.
pub struct GameSession {
    /// The dungeon being explored.
    dungeon: Dungeon,
    /// The player's current state.
    player: PlayerState,
    finished: bool,
}

impl GameSession {
    /// Start at the first location added to the dungeon.
    pub fn new(dungeon: Dungeon) -> PlayResult<Self> {
        let start = dungeon
            .locations()
            .next()
            .map(|(id, _)| id)
            .ok_or(PlayError::EmptyDungeon)?;
        Self::start_at(dungeon, start)
    }

    /// Start at the named location (case-insensitive).
    pub fn at_location(dungeon: Dungeon, location_name: &str) -> PlayResult<Self> {
        let start = dungeon
            .find_id_by_name(location_name)
            .ok_or_else(|| PlayError::LocationNotFound(location_name.to_string()))?;
        Self::start_at(dungeon, start)
    }

    /// Start where `config` says.
    pub fn from_config(dungeon: Dungeon, config: &PlayConfig) -> PlayResult<Self> {
        match &config.start {
            Some(name) => Self::at_location(dungeon, name),
            None => Self::new(dungeon),
        }
    }

    fn start_at(mut dungeon: Dungeon, start: LocationId) -> PlayResult<Self> {
        dungeon.visit(start)?;
        info!(dungeon = %dungeon.name, %start, "session started");
        Ok(Self {
            dungeon,
            player: PlayerState::new(start),
            finished: false,
        })
    }

    /// Get the dungeon.
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Whether the player has quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Describe the player's current location.
    pub fn describe_here(&self) -> PlayResult<String> {
        Ok(self.dungeon.render(self.player.location)?)
    }

    /// Process a line of player input and return the response.
    pub fn process(&mut self, input: &str) -> PlayResult<String> {
        let command = parse_command(input);
        debug!(?command, "parsed input");
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> PlayResult<String> {
        if self.finished {
            return Err(PlayError::Finished);
        }
        match command {
            Command::Move { direction } => self.do_move(&direction),
            Command::Look { target } => self.do_look(target.as_deref()),
            Command::Map => Ok(self.do_map()),
            Command::Help => Ok(help_text()),
            Command::Quit => {
                self.finished = true;
                info!(moves = self.player.moves, "session finished");
                Ok("Goodbye!".to_string())
            }
            Command::Unknown { input } => Err(PlayError::UnknownCommand(input)),
        }
    }

    fn do_move(&mut self, direction: &str) -> PlayResult<String> {
        let here = self.player.location;
        let destination = self.dungeon.exit(here, direction).or_else(|| {
            let wanted = direction.to_lowercase();
            self.dungeon
                .exits(here)
                .into_iter()
                .find(|(label, _)| label.to_lowercase() == wanted)
                .map(|(_, to)| to)
        });

        let Some(destination) = destination else {
            return Ok(format!("You can't go {direction} from here."));
        };

        self.dungeon.visit(destination)?;
        self.player.travel_to(destination);
        debug!(from = %here, to = %destination, %direction, "player moved");
        self.describe_here()
    }

    fn do_look(&self, target: Option<&str>) -> PlayResult<String> {
        let Some(target) = target else {
            return self.describe_here();
        };

        let here = self
            .dungeon
            .get(self.player.location)
            .ok_or(CoreError::LocationNotFound(self.player.location))?;

        let found = here
            .npcs()
            .into_iter()
            .find(|n| n.name.eq_ignore_ascii_case(target))
            .map(|n| (n.name, n.description))
            .or_else(|| {
                here.items()
                    .into_iter()
                    .find(|i| i.name.eq_ignore_ascii_case(target))
                    .map(|i| (i.name, i.description))
            });

        match found {
            Some((name, description)) if description.is_empty() => {
                Ok(format!("{name}\nYou see nothing special."))
            }
            Some((name, description)) => Ok(format!("{name}\n{description}")),
            None => Err(PlayError::NotHere(target.to_string())),
        }
    }

    fn do_map(&self) -> String {
        let mut output = format!(
            "Visited {} of {} locations:\n",
            self.dungeon.visited_count(),
            self.dungeon.location_count()
        );
        for (id, location) in self.dungeon.locations().filter(|(_, l)| l.visited()) {
            let marker = if id == self.player.location {
                " (you are here)"
            } else {
                ""
            };
            output.push_str(&format!("    - {}{marker}\n", location.name()));
        }
        output
    }
}

fn help_text() -> String {
    "Commands:\n\
     north, south, east, west, up, down (or n, s, e, w, u, d) - move\n\
     go <direction> - leave through any exit, e.g. 'go trapdoor'\n\
     exits named like a command (exit, x, m, ...) need 'go', e.g. 'go exit'\n\
     look [target] - describe this place, or an NPC or item here\n\
     map - list the places you have visited\n\
     help - show this help\n\
     quit - leave the dungeon"
        .to_string()
}
