//! Error types for the game
//!
//! Only conditions the session cannot recover from are errors. Bad commands,
//! blocked exits, repeated clues and unknown suspects are ordinary outcomes
//! (see [`StepOutcome`](super::controller::StepOutcome) and
//! [`Discovery`](super::controller::Discovery)).

use crate::mansion::{LayoutError, RoomId};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Reading commands or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The session points at a room the mansion does not contain
    #[error("room {0} is not part of the mansion")]
    UnknownRoom(RoomId),

    /// The mansion could not be assembled
    #[error("invalid mansion layout: {0}")]
    Layout(#[from] LayoutError),
}
