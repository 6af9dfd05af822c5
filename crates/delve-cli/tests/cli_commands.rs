//! Integration tests for the `delve` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn delve() -> Command {
    let mut cmd = Command::cargo_bin("delve").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DELVE_LOG")
        .env_remove("DELVE_START")
        .env_remove("DELVE_PROMPT");
    cmd
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_renders_location() {
    delve()
        .args(["show", "Cave"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cave - A dark cave\n")
                .and(predicate::str::contains("You see the following NPCs:\n    - Goblin\n"))
                .and(predicate::str::contains("You see the following Items:\n    - Torch\n"))
                .and(predicate::str::contains("    - north - Forest\n"))
                .and(predicate::str::contains("(Visited)").not()),
        );
}

#[test]
fn show_is_case_insensitive() {
    delve()
        .args(["show", "rIVER"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("River - A fast, cold river"));
}

#[test]
fn show_all_locations() {
    delve()
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cave - ")
                .and(predicate::str::contains("Forest - "))
                .and(predicate::str::contains("River - "))
                .and(predicate::str::contains("Crypt - ")),
        );
}

#[test]
fn show_unknown_location_fails() {
    delve()
        .args(["show", "Moon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("location not found: \"Moon\""));
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[test]
fn map_lists_exits() {
    delve()
        .arg("map")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Hollow Hills")
                .and(predicate::str::contains("north -> Forest"))
                .and(predicate::str::contains("up -> Cave")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_walks_through_dungeon() {
    delve()
        .arg("play")
        .write_stdin("north\neast\nmap\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Entering The Hollow Hills")
                .and(predicate::str::contains("Forest - A green forest"))
                .and(predicate::str::contains("River - A fast, cold river"))
                .and(predicate::str::contains("    - west - Forest (Visited)"))
                .and(predicate::str::contains("Visited 3 of 4 locations:"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_from_start_flag() {
    delve()
        .args(["play", "--start", "crypt", "--prompt", "$ "])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Crypt - A low crypt lined with bones")
                .and(predicate::str::contains("$ Goodbye!")),
        );
}

#[test]
fn play_start_from_env() {
    delve()
        .arg("play")
        .env("DELVE_START", "Forest")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Forest - A green forest"));
}

#[test]
fn play_unknown_start_fails() {
    delve()
        .args(["play", "--start", "Moon"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("location not found: Moon"));
}

#[test]
fn play_reports_bad_commands_and_continues() {
    delve()
        .arg("play")
        .write_stdin("dance wildly\nlook dragon\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command: dance wildly")
                .and(predicate::str::contains("dragon is not here."))
                .and(predicate::str::contains("Goodbye!")),
        );
}
