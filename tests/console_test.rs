// Console transcript tests: scripted input in, printed session out

use detective_quest::console;
use detective_quest::game::{GameError, Session, SessionSummary};
use std::io::Cursor;

fn run_script(script: &[u8]) -> (SessionSummary, String) {
    let mut session = Session::standard().expect("standard session");
    let mut input = Cursor::new(script.to_vec());
    let mut output = Vec::new();
    let summary = console::run(&mut session, &mut input, &mut output).expect("session failed");
    (summary, String::from_utf8(output).expect("output is UTF-8"))
}

#[test]
fn test_guilty_verdict_transcript() {
    let (summary, output) = run_script(b"e\ne\ns\nPedro\n");
    println!("Transcript:\n{}", output);

    assert!(output.contains("You are in: Entrance Hall"));
    assert!(output.contains("You are in: Library"));
    assert!(output.contains("(the clue points to: Pedro)"));
    assert!(output.contains("Exploration ended by the player."));
    assert!(output.contains(" - Broken wine glass\n - Muddy footprints on the rug\n"));
    assert!(output.contains("Clues pointing to Pedro: 2"));
    assert!(output.contains("Pedro is GUILTY!"));

    let verdict = summary.verdict.expect("verdict rendered");
    assert!(verdict.guilty);
    assert_eq!(summary.accused.as_deref(), Some("Pedro"));
    assert_eq!(summary.clues.len(), 3);
}

#[test]
fn test_uppercase_commands_and_not_guilty() {
    let (summary, output) = run_script(b"D\nE\nS\nCarlos\n");
    assert!(output.contains("You are in: Wine Cellar"));
    assert!(output.contains("Clues pointing to Carlos: 1"));
    assert!(output.contains("Carlos cannot be convicted"));
    assert!(!summary.verdict.unwrap().guilty);
}

#[test]
fn test_rejected_commands_reprompt_without_moving() {
    let (_, output) = run_script(b"x\n\n   \nd\nd\nd\ne\ns\n\n");
    assert_eq!(output.matches("Invalid option. Try again.").count(), 1);
    assert!(output.contains("There is no room to the right."));
    assert!(output.contains("There is no room to the left."));
    // Rejections do not re-announce the room
    assert_eq!(output.matches("You are in: Study").count(), 1);
    assert_eq!(output.matches("You are in: Entrance Hall").count(), 1);
}

#[test]
fn test_end_of_input_is_implicit_quit() {
    let (summary, output) = run_script(b"e\n");
    assert!(output.contains("Exploration ended by the player."));
    assert!(output.contains("No suspect named. Closing the case."));
    assert!(summary.accused.is_none());
    assert!(summary.verdict.is_none());
    assert_eq!(summary.clues.len(), 2);
}

#[test]
fn test_blank_accusation_skips_verdict() {
    let (summary, output) = run_script(b"s\n  \n");
    assert!(output.contains("No suspect named. Closing the case."));
    assert!(!output.contains("Checking the accusation"));
    assert!(summary.verdict.is_none());
}

#[test]
fn test_accusation_is_case_sensitive() {
    let (summary, _) = run_script(b"e\ne\ns\npedro\n");
    let verdict = summary.verdict.unwrap();
    assert_eq!(verdict.suspect, "pedro");
    assert_eq!(verdict.evidence_count, 0);
    assert!(!verdict.guilty);
}

#[test]
fn test_invalid_utf8_command_is_rejected() {
    let (_, output) = run_script(b"\xff\xfe\ns\n\n");
    assert!(output.contains("Invalid option. Try again."));
}

#[test]
fn test_prompt_lists_suspects() {
    let (_, output) = run_script(b"s\n\n");
    assert!(output.contains("(e.g. Ana, Carlos, Pedro, Sofia)"));
}

#[test]
fn test_write_failure_is_an_error() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut session = Session::standard().unwrap();
    let mut input = Cursor::new(b"s\n".to_vec());
    let result = console::run(&mut session, &mut input, &mut Broken);
    assert!(matches!(result, Err(GameError::Io(_))));
}
