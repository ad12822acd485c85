//! Game flow
//!
//! - [`session`]: [`Session`], sole owner of the mansion, evidence tables and position
//! - [`controller`]: [`ExplorationController`], the turn-by-turn state machine
//! - [`command`]: [`Command`], parsed player input
//! - [`narration`]: wording shared by every front end
//! - [`constants`]: thresholds and key bindings
//! - [`errors`]: [`GameError`]
//!
//! # Turn Model
//!
//! Play is synchronous request/response: read a command, apply one transition,
//! render its outcome. There is exactly one session and nothing runs in the
//! background.

pub mod command;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod narration;
pub mod session;

pub use command::Command;
pub use controller::{Discovery, ExplorationController, StepOutcome};
pub use errors::GameError;
pub use session::{accusation_name, Session, SessionSummary};
