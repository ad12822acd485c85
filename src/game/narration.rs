//! Player-facing wording shared by the console and the TUI

use super::constants::{KEY_LEFT, KEY_QUIT, KEY_RIGHT};
use super::controller::Discovery;
use crate::evidence::Verdict;
use crate::mansion::Exit;

pub const TITLE: &str = "=== DETECTIVE QUEST: FINAL JUDGEMENT ===";
pub const INTRO: &str = "Explore the mansion, collect clues and accuse whoever you think is guilty.";
pub const NO_CLUES_COLLECTED: &str = "No clues were collected.";
pub const NO_ACCUSATION: &str = "No suspect named. Closing the case.";
pub const INVALID_COMMAND: &str = "Invalid option. Try again.";
pub const EXPLORATION_ENDED: &str = "Exploration ended by the player.";
pub const FAREWELL: &str = "Thank you for playing Detective Quest.";

/// Menu line listing the movement keys
pub fn command_menu() -> String {
    format!(
        "Choices: ({}) left   ({}) right   ({}) stop exploring",
        KEY_LEFT, KEY_RIGHT, KEY_QUIT
    )
}

pub fn entered_room(name: &str) -> String {
    format!("You are in: {}", name)
}

/// Lines describing what was found on entering a room
pub fn describe_discovery(discovery: &Discovery) -> Vec<String> {
    match discovery {
        Discovery::NoClue => vec![" -> Nothing of interest in this room.".to_string()],
        Discovery::NewClue { clue, suspect } => vec![
            format!(" -> Clue found: \"{}\"", clue),
            match suspect {
                Some(name) => format!("    (the clue points to: {})", name),
                None => "    (the clue is not linked to any suspect)".to_string(),
            },
        ],
        Discovery::AlreadyCollected { clue } => vec![
            format!(" -> Clue found: \"{}\"", clue),
            "    (already collected)".to_string(),
        ],
    }
}

pub fn no_exit(exit: Exit) -> String {
    format!("There is no room to the {}.", exit)
}

/// Prompt for the accused's name, hinting at the known suspects
pub fn accusation_prompt(suspects: &[&str]) -> String {
    if suspects.is_empty() {
        "Name the suspect you want to accuse:".to_string()
    } else {
        format!(
            "Name the suspect you want to accuse (e.g. {}):",
            suspects.join(", ")
        )
    }
}

/// Lines reporting a verdict
pub fn describe_verdict(verdict: &Verdict) -> Vec<String> {
    let outcome = if verdict.guilty {
        format!(
            "Verdict: the evidence is sufficient. {} is GUILTY!",
            verdict.suspect
        )
    } else {
        format!(
            "Verdict: insufficient evidence. {} cannot be convicted on the clues found.",
            verdict.suspect
        )
    };
    vec![
        format!("Checking the accusation against: {}", verdict.suspect),
        format!(
            "Clues pointing to {}: {}",
            verdict.suspect, verdict.evidence_count
        ),
        outcome,
    ]
}
