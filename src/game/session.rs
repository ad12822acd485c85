//! The single game session and everything it owns

use super::errors::GameError;
use crate::evidence::{accuse, AccusationTally, ClueLedger, SuspectIndex, Verdict};
use crate::mansion::layout::{standard_mansion, CASE_FILE};
use crate::mansion::{Mansion, Room, RoomId};

/// All mutable and static state of one playthrough
#[derive(Debug)]
pub struct Session {
    pub(super) mansion: Mansion,
    pub(super) index: SuspectIndex,
    pub(super) ledger: ClueLedger,
    pub(super) tally: AccusationTally,
    pub(super) position: RoomId,
    pub(super) finished: bool,
}

impl Session {
    /// Start a session at the mansion's entry room with an empty ledger and tally
    pub fn new(mansion: Mansion, index: SuspectIndex) -> Self {
        let position = mansion.root();
        Session {
            mansion,
            index,
            ledger: ClueLedger::new(),
            tally: AccusationTally::new(),
            position,
            finished: false,
        }
    }

    /// The standard mansion with its case file
    pub fn standard() -> Result<Self, GameError> {
        Ok(Session::new(
            standard_mansion()?,
            SuspectIndex::from_pairs(CASE_FILE),
        ))
    }

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    pub fn index(&self) -> &SuspectIndex {
        &self.index
    }

    pub fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    pub fn tally(&self) -> &AccusationTally {
        &self.tally
    }

    pub fn position(&self) -> RoomId {
        self.position
    }

    /// The room the player is standing in
    pub fn current_room(&self) -> Result<&Room, GameError> {
        self.mansion
            .room(self.position)
            .ok_or(GameError::UnknownRoom(self.position))
    }

    /// Whether exploration has ended
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Collected clues, alphabetically
    pub fn collected_clues(&self) -> Vec<String> {
        self.ledger.in_order().map(str::to_string).collect()
    }

    /// Judge `suspect` against the evidence gathered so far
    pub fn accuse(&self, suspect: &str) -> Verdict {
        accuse(&self.tally, suspect)
    }
}

/// What a finished session produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Collected clues, alphabetically
    pub clues: Vec<String>,
    /// Name the player accused, if any
    pub accused: Option<String>,
    pub verdict: Option<Verdict>,
}

/// Clean up a typed accusation: drop the line terminator and surrounding blanks.
///
/// `None` means no accusation was made.
pub fn accusation_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
