//! # Introduction
//!
//! Detective Quest is a single-player, turn-based exploration puzzle. The
//! player walks a fixed mansion laid out as a binary tree of rooms, picks up
//! the clue in each room on entry, and finally accuses a suspect. The accused
//! is found guilty when at least two distinct clues point to them.
//!
//! ## Data flow
//!
//! ```text
//! Mansion → ExplorationController → ClueLedger → SuspectIndex → AccusationTally → Verdict
//! ```
//!
//! 1. [`mansion`] — immutable room tree and the fixed layout with its case file.
//! 2. [`game`] — the [`game::Session`] that owns all state, and the
//!    [`game::ExplorationController`] that moves the player and triggers discovery.
//! 3. [`evidence`] — the deduplicating clue ledger, the static clue → suspect
//!    index, the per-suspect tally and the conviction rule.
//! 4. [`console`] — line-oriented front end over any reader/writer pair.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Commands
//!
//! `e`: go left, `d`: go right, `s`: stop exploring (case-insensitive). Any
//! other input is rejected and the player is asked again.

pub mod console;
pub mod evidence;
pub mod game;
pub mod mansion;
pub mod ui;
