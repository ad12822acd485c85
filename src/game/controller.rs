//! Exploration state machine
//!
//! The controller borrows the [`Session`] and applies one transition at a time:
//!
//! ```text
//! begin()            discovery in the entry room
//! step(Move(exit))   Moved { to, discovery } | NoExit(exit)
//! step(Invalid)      Invalid
//! step(Quit)         Quit  (terminal; later steps keep returning Quit)
//! ```
//!
//! Discovery runs exactly once per room entered. A rejected command leaves the
//! position untouched and does not re-run discovery.

use super::command::Command;
use super::errors::GameError;
use super::session::Session;
use crate::mansion::{Exit, Room, RoomId};
use tracing::{debug, info};

/// What the player found on entering a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// The room holds no clue
    NoClue,
    /// First time this clue was seen; `suspect` is who it points to, if anyone
    NewClue {
        clue: String,
        suspect: Option<String>,
    },
    /// Seen before; contributes nothing new
    AlreadyCollected { clue: String },
}

/// Result of applying one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { to: RoomId, discovery: Discovery },
    /// No room in that direction; nothing changed
    NoExit(Exit),
    /// Unrecognised command; nothing changed
    Invalid,
    /// Exploration is over
    Quit,
}

pub struct ExplorationController<'s> {
    session: &'s mut Session,
}

impl<'s> ExplorationController<'s> {
    pub fn new(session: &'s mut Session) -> Self {
        ExplorationController { session }
    }

    pub fn session(&self) -> &Session {
        &*self.session
    }

    pub fn current_room(&self) -> Result<&Room, GameError> {
        self.session.current_room()
    }

    /// Run discovery for the room the player starts in
    pub fn begin(&mut self) -> Result<Discovery, GameError> {
        self.discover()
    }

    /// Apply one command
    pub fn step(&mut self, command: Command) -> Result<StepOutcome, GameError> {
        if self.session.finished {
            return Ok(StepOutcome::Quit);
        }

        match command {
            Command::Move(exit) => {
                let from = self.session.position;
                let room = self.current_room()?;
                match room.exit(exit) {
                    Some(to) => {
                        self.session.position = to;
                        debug!(from = %from, to = %to, %exit, "moved");
                        let discovery = self.discover()?;
                        Ok(StepOutcome::Moved { to, discovery })
                    }
                    None => {
                        debug!(room = %from, %exit, "no exit");
                        Ok(StepOutcome::NoExit(exit))
                    }
                }
            }
            Command::Quit => {
                self.session.finished = true;
                info!(clues = self.session.ledger.len(), "exploration ended");
                Ok(StepOutcome::Quit)
            }
            Command::Invalid => {
                debug!("invalid command");
                Ok(StepOutcome::Invalid)
            }
        }
    }

    fn discover(&mut self) -> Result<Discovery, GameError> {
        let position = self.session.position;
        let clue = match self
            .session
            .mansion
            .room(position)
            .ok_or(GameError::UnknownRoom(position))?
            .clue()
        {
            Some(clue) => clue.to_string(),
            None => return Ok(Discovery::NoClue),
        };

        if !self.session.ledger.try_insert(&clue) {
            debug!(clue = %clue, "clue already collected");
            return Ok(Discovery::AlreadyCollected { clue });
        }

        let suspect = self.session.index.lookup(&clue).map(str::to_string);
        match &suspect {
            Some(name) => {
                let count = self.session.tally.increment(name, 1);
                info!(clue = %clue, suspect = %name, count, "new clue");
            }
            None => info!(clue = %clue, "new clue with no suspect"),
        }

        Ok(Discovery::NewClue { clue, suspect })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::SuspectIndex;
    use crate::mansion::{Mansion, RoomPlan};

    fn session() -> Session {
        let mansion = Mansion::from_plan(
            RoomPlan::new("Hall", "A")
                .with_left(RoomPlan::new("Den", "B"))
                .with_right(RoomPlan::new("Shed", "Orphan").with_left(RoomPlan::new("Loft", ""))),
        )
        .unwrap();
        Session::new(mansion, SuspectIndex::from_pairs(&[("A", "Pedro"), ("B", "Pedro")]))
    }

    #[test]
    fn test_two_clues_against_one_suspect() {
        let mut session = session();
        let mut controller = ExplorationController::new(&mut session);

        assert_eq!(
            controller.begin().unwrap(),
            Discovery::NewClue {
                clue: "A".to_string(),
                suspect: Some("Pedro".to_string()),
            }
        );
        let outcome = controller.step(Command::Move(Exit::Left)).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                to: RoomId(1),
                discovery: Discovery::NewClue {
                    clue: "B".to_string(),
                    suspect: Some("Pedro".to_string()),
                },
            }
        );

        let verdict = session.accuse("Pedro");
        assert!(verdict.guilty);
        assert_eq!(verdict.evidence_count, 2);
    }

    #[test]
    fn test_repeated_discovery_counts_once() {
        let mut session = session();
        let mut controller = ExplorationController::new(&mut session);
        controller.begin().unwrap();
        assert_eq!(
            controller.begin().unwrap(),
            Discovery::AlreadyCollected {
                clue: "A".to_string()
            }
        );

        let verdict = session.accuse("Pedro");
        assert!(!verdict.guilty);
        assert_eq!(verdict.evidence_count, 1);
    }

    #[test]
    fn test_clue_without_suspect_leaves_tally_empty() {
        let mut session = session();
        let mut controller = ExplorationController::new(&mut session);
        let outcome = controller.step(Command::Move(Exit::Right)).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                to: RoomId(2),
                discovery: Discovery::NewClue {
                    clue: "Orphan".to_string(),
                    suspect: None,
                },
            }
        );
        assert!(session.tally().is_empty());
        assert_eq!(session.accuse("AnyName").evidence_count, 0);
    }

    #[test]
    fn test_missing_exit_keeps_position() {
        let mut session = session();
        let mut controller = ExplorationController::new(&mut session);
        controller.step(Command::Move(Exit::Left)).unwrap();

        assert_eq!(
            controller.step(Command::Move(Exit::Left)).unwrap(),
            StepOutcome::NoExit(Exit::Left)
        );
        assert_eq!(controller.step(Command::Invalid).unwrap(), StepOutcome::Invalid);
        assert_eq!(controller.session().position(), RoomId(1));
        assert_eq!(controller.session().ledger().len(), 1);
    }

    #[test]
    fn test_room_without_clue() {
        let mut session = session();
        let mut controller = ExplorationController::new(&mut session);
        controller.step(Command::Move(Exit::Right)).unwrap();
        let outcome = controller.step(Command::Move(Exit::Left)).unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                to: RoomId(3),
                discovery: Discovery::NoClue,
            }
        );
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut session = session();
        let mut controller = ExplorationController::new(&mut session);
        assert_eq!(controller.step(Command::Quit).unwrap(), StepOutcome::Quit);
        assert_eq!(
            controller.step(Command::Move(Exit::Left)).unwrap(),
            StepOutcome::Quit
        );
        assert!(session.is_finished());
        assert_eq!(session.position(), RoomId(0));
    }
}
