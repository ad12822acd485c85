//! Line-oriented front end
//!
//! Plays a whole session over any `BufRead` / `Write` pair: one command per
//! line during exploration, then one line naming the accused. Used when stdin
//! is not a terminal (pipes, scripted play) or when `--plain` is given.
//!
//! # Input Handling
//!
//! - Blank lines are skipped; only the first non-blank character of a line counts
//! - A line that is not valid UTF-8 is rejected like any other invalid command
//! - End of input during exploration ends exploration, as if `s` had been typed
//! - End of input at the accusation prompt means no accusation

use crate::game::narration;
use crate::game::{
    accusation_name, Command, ExplorationController, GameError, Session, SessionSummary,
    StepOutcome,
};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Next command from `input`; `None` at end of input
fn read_command<R: BufRead>(input: &mut R) -> Result<Option<Command>, GameError> {
    let mut line = String::new();
    loop {
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(None),
            Ok(_) => {
                if let Some(command) = Command::from_line(&line) {
                    return Ok(Some(command));
                }
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("unreadable command line: {}", e);
                return Ok(Some(Command::Invalid));
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Read the accused's name; `None` for a blank line or end of input
fn read_accusation<R: BufRead>(input: &mut R) -> Result<Option<String>, GameError> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(accusation_name(&line).map(str::to_string)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            warn!("unreadable accusation: {}", e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

/// Explore until the player stops, listing each room entered
pub fn explore<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<(), GameError> {
    let mut controller = ExplorationController::new(session);
    let mut arrival = Some(controller.begin()?);

    loop {
        if let Some(discovery) = arrival.take() {
            writeln!(output)?;
            writeln!(output, "{}", narration::entered_room(controller.current_room()?.name()))?;
            write_lines(output, &narration::describe_discovery(&discovery))?;
        }

        writeln!(output)?;
        writeln!(output, "{}", narration::command_menu())?;
        write!(output, "Option: ")?;
        output.flush()?;

        let command = match read_command(input)? {
            Some(command) => command,
            None => {
                writeln!(output)?;
                Command::Quit
            }
        };

        match controller.step(command)? {
            StepOutcome::Moved { discovery, .. } => arrival = Some(discovery),
            StepOutcome::NoExit(exit) => writeln!(output, "{}", narration::no_exit(exit))?,
            StepOutcome::Invalid => writeln!(output, "{}", narration::INVALID_COMMAND)?,
            StepOutcome::Quit => {
                writeln!(output, "{}", narration::EXPLORATION_ENDED)?;
                return Ok(());
            }
        }
    }
}

/// List the clues, take the accusation and report the verdict
pub fn judge<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    output: &mut W,
) -> Result<SessionSummary, GameError> {
    let clues = session.collected_clues();

    writeln!(output)?;
    writeln!(output, "===== COLLECTED CLUES (SORTED) =====")?;
    if clues.is_empty() {
        writeln!(output, "{}", narration::NO_CLUES_COLLECTED)?;
    } else {
        for clue in &clues {
            writeln!(output, " - {}", clue)?;
        }
    }

    writeln!(output)?;
    writeln!(output, "{}", narration::accusation_prompt(&session.index().suspects()))?;
    write!(output, "> ")?;
    output.flush()?;

    let accused = read_accusation(input)?;
    let verdict = match &accused {
        Some(name) => {
            let verdict = session.accuse(name);
            writeln!(output)?;
            write_lines(output, &narration::describe_verdict(&verdict))?;
            Some(verdict)
        }
        None => {
            writeln!(output)?;
            writeln!(output, "{}", narration::NO_ACCUSATION)?;
            None
        }
    };

    Ok(SessionSummary {
        clues,
        accused,
        verdict,
    })
}

/// Play a full session: title, exploration, clue listing, accusation, verdict
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<SessionSummary, GameError> {
    writeln!(output, "{}", narration::TITLE)?;
    writeln!(output, "{}", narration::INTRO)?;

    explore(session, input, output)?;
    let summary = judge(session, input, output)?;

    writeln!(output)?;
    writeln!(output, "{}", narration::FAREWELL)?;
    output.flush()?;
    Ok(summary)
}
