//! Command parsing for player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave through the exit with this direction label.
    Move {
        /// The direction label, lowercased with abbreviations expanded.
        direction: String,
    },
    /// Look at the current location or at an NPC or item in it.
    Look {
        /// Optional target to examine.
        target: Option<String>,
    },
    /// List the locations visited so far.
    Map,
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "walk", "head", "travel"];
const LOOK_VERBS: &[&str] = &["look", "l", "examine", "ex", "x", "inspect"];
const MAP_VERBS: &[&str] = &["map", "m", "visited"];
const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit", "bye"];

/// Expand a direction abbreviation (`n`, `sw`, ...) and lowercase the label.
///
/// Labels that are not abbreviations are returned lowercased, so custom
/// directions such as `"upstairs"` pass through.
pub fn expand_direction(s: &str) -> String {
    let lower = s.trim().to_lowercase();
    let full = match lower.as_str() {
        "n" => "north",
        "s" => "south",
        "e" => "east",
        "w" => "west",
        "u" => "up",
        "d" => "down",
        "ne" => "northeast",
        "nw" => "northwest",
        "se" => "southeast",
        "sw" => "southwest",
        _ => return lower,
    };
    full.to_string()
}

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((first, rest)) = words.split_first() else {
        return Command::Look { target: None };
    };
    let verb = first.to_lowercase();

    if MOVE_VERBS.contains(&verb.as_str()) {
        // The label is everything after the verb, inner spacing kept
        return parse_move(input[first.len()..].trim_start());
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return parse_look(rest);
    }
    if MAP_VERBS.contains(&verb.as_str()) {
        return Command::Map;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    // A lone word is taken as a direction label
    if rest.is_empty() {
        return Command::Move {
            direction: expand_direction(&verb),
        };
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn parse_move(label: &str) -> Command {
    if label.is_empty() {
        return Command::Unknown {
            input: "go where?".to_string(),
        };
    }

    Command::Move {
        direction: expand_direction(label),
    }
}

fn parse_look(rest: &[&str]) -> Command {
    // Skip "at" if present
    let target_words = match rest.split_first() {
        Some((first, tail)) if first.eq_ignore_ascii_case("at") => tail,
        _ => rest,
    };

    if target_words.is_empty() {
        Command::Look { target: None }
    } else {
        Command::Look {
            target: Some(target_words.join(" ")),
        }
    }
}
