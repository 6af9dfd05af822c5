use std::io::{self, BufRead, Write};

use colored::Colorize;
use delve_play::{GameSession, PlayConfig};
use tracing::warn;

/// Play the starter dungeon on stdin/stdout.
pub fn run(config: &PlayConfig) -> Result<(), String> {
    let dungeon = super::load_dungeon()?;
    let session = GameSession::from_config(dungeon, config).map_err(|e| e.to_string())?;

    println!("  {} {}", "Entering".bold(), session.dungeon().name);
    println!();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(session, config, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Read commands until `quit` or end of input, writing every response.
///
/// Command errors are reported to the player and the loop continues.
fn run_loop<R: BufRead, W: Write>(
    mut session: GameSession,
    config: &PlayConfig,
    input: R,
    mut out: W,
) -> io::Result<()> {
    match session.describe_here() {
        Ok(text) => write!(out, "{text}")?,
        Err(e) => writeln!(out, "{e}")?,
    }

    let mut lines = input.lines();
    while !session.is_finished() {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        match session.process(&line) {
            Ok(response) => {
                write!(out, "{response}")?;
                if !response.ends_with('\n') {
                    writeln!(out)?;
                }
            }
            Err(e) => {
                warn!(input = %line, error = %e, "command failed");
                writeln!(out, "{e}")?;
            }
        }
    }
    Ok(())
}
