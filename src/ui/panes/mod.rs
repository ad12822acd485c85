//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over borrowed session data; scroll
//! offsets live in [`App`](crate::ui::App) and are clamped here.
//!
//! # Pane Modules
//!
//! - [`room`]: Current room, route from the entry, clue and exits
//! - [`clues`]: Ledger contents in alphabetical order
//! - [`log`]: Investigation log of discoveries and rejected moves
//! - [`accuse`]: Accusation prompt and verdict
//! - [`status`]: Status bar with keybindings and phase badge

pub mod accuse;
pub mod clues;
pub mod log;
pub mod room;
pub mod status;

// Re-export render functions for convenience
pub use accuse::{render_accusation_pane, AccusationView};
pub use clues::render_clues_pane;
pub use log::render_log_pane;
pub use room::render_room_pane;
pub use status::render_status_bar;
