//! Main TUI application state and logic

use crate::evidence::Verdict;
use crate::game::constants::{EVENT_LOG_CAPACITY, MAX_SUSPECT_NAME_LEN, POLL_INTERVAL_MS};
use crate::game::narration;
use crate::game::{
    accusation_name, Command, Discovery, ExplorationController, GameError, Session,
    SessionSummary, StepOutcome,
};
use crate::mansion::Exit;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::error;

/// Stage of the game the UI is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    Accusing,
    Verdict,
}

/// Which scrollable pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Log,
    Clues,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Log => FocusedPane::Clues,
            FocusedPane::Clues => FocusedPane::Log,
        }
    }
}

/// Styling category of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Room,
    Clue,
    Suspect,
    Notice,
    Verdict,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub text: String,
    pub kind: LogKind,
}

/// Bounded log of what happened during the session
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        EventLog {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, kind: LogKind) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            text: text.into(),
            kind,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The main application state
pub struct App {
    /// The game being played
    session: Session,

    pub phase: Phase,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub log: EventLog,

    /// Per-pane scroll offsets
    pub log_scroll: usize,
    pub clue_scroll: usize,

    /// Name typed so far in the accusation phase
    pub accusation_input: String,

    accused: Option<String>,
    verdict: Option<Verdict>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Fatal error that stopped the event loop
    failure: Option<GameError>,
}

impl App {
    /// Create the app and run discovery in the entry room
    pub fn new(mut session: Session) -> Result<Self, GameError> {
        let discovery = ExplorationController::new(&mut session).begin()?;

        let mut app = App {
            session,
            phase: Phase::Exploring,
            focused_pane: FocusedPane::Log,
            log: EventLog::new(EVENT_LOG_CAPACITY),
            log_scroll: usize::MAX,
            clue_scroll: 0,
            accusation_input: String::new(),
            accused: None,
            verdict: None,
            should_quit: false,
            status_message: String::from("Find the evidence."),
            failure: None,
        };
        app.log.push(narration::INTRO, LogKind::Notice);
        app.log_arrival(&discovery)?;
        Ok(app)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Outcome of the session so far
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            clues: self.session.collected_clues(),
            accused: self.accused.clone(),
            verdict: self.verdict.clone(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), GameError> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main area plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Room or Accusation (top) | Log (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[0]);

        match self.phase {
            Phase::Exploring => {
                super::panes::render_room_pane(frame, left_rows[0], &self.session);
            }
            Phase::Accusing => {
                let suspects = self.session.index().suspects();
                super::panes::render_accusation_pane(
                    frame,
                    left_rows[0],
                    super::panes::AccusationView::Typing {
                        input: &self.accusation_input,
                        suspects: &suspects,
                    },
                );
            }
            Phase::Verdict => {
                let view = match &self.verdict {
                    Some(verdict) => super::panes::AccusationView::Judged(verdict),
                    None => super::panes::AccusationView::Dismissed,
                };
                super::panes::render_accusation_pane(frame, left_rows[0], view);
            }
        }

        super::panes::render_log_pane(
            frame,
            left_rows[1],
            &self.log,
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_clues_pane(
            frame,
            columns[1],
            self.session.ledger(),
            self.focused_pane == FocusedPane::Clues,
            &mut self.clue_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.phase,
            self.session.ledger().len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.phase {
            Phase::Exploring => self.handle_exploring_key(key),
            Phase::Accusing => self.handle_accusing_key(key),
            Phase::Verdict => self.should_quit = true,
        }
    }

    fn handle_exploring_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.apply(Command::from_key(c)),
            KeyCode::Left => self.apply(Command::Move(Exit::Left)),
            KeyCode::Right => self.apply(Command::Move(Exit::Right)),
            KeyCode::Esc => self.apply(Command::Quit),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Log => self.log_scroll = self.log_scroll.saturating_sub(1),
                FocusedPane::Clues => self.clue_scroll = self.clue_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Log => self.log_scroll = self.log_scroll.saturating_add(1),
                FocusedPane::Clues => self.clue_scroll = self.clue_scroll.saturating_add(1),
            },
            _ => {}
        }
    }

    fn handle_accusing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                if self.accusation_input.chars().count() < MAX_SUSPECT_NAME_LEN {
                    self.accusation_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.accusation_input.pop();
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.accusation_input);
                self.submit_accusation(&input);
            }
            KeyCode::Esc => {
                self.accusation_input.clear();
                self.submit_accusation("");
            }
            _ => {}
        }
    }

    /// Apply one exploration command and report its outcome
    fn apply(&mut self, command: Command) {
        let outcome = ExplorationController::new(&mut self.session).step(command);
        let reported = outcome.and_then(|outcome| self.report(outcome));
        if let Err(err) = reported {
            self.fail(err);
        }
    }

    fn report(&mut self, outcome: StepOutcome) -> Result<(), GameError> {
        match outcome {
            StepOutcome::Moved { discovery, .. } => {
                self.log_arrival(&discovery)?;
                self.status_message = format!("Entered {}", self.session.current_room()?.name());
            }
            StepOutcome::NoExit(exit) => {
                let message = narration::no_exit(exit);
                self.log.push(message.clone(), LogKind::Notice);
                self.status_message = message;
            }
            StepOutcome::Invalid => {
                self.status_message = narration::INVALID_COMMAND.to_string();
            }
            StepOutcome::Quit => {
                self.log.push(narration::EXPLORATION_ENDED, LogKind::Notice);
                if self.session.ledger().is_empty() {
                    self.log.push(narration::NO_CLUES_COLLECTED, LogKind::Notice);
                }
                self.phase = Phase::Accusing;
                self.status_message = "Who is guilty?".to_string();
            }
        }
        self.log_scroll = usize::MAX;
        Ok(())
    }

    fn log_arrival(&mut self, discovery: &Discovery) -> Result<(), GameError> {
        let name = self.session.current_room()?.name().to_string();
        self.log.push(narration::entered_room(&name), LogKind::Room);

        let kinds = match discovery {
            Discovery::NoClue => [LogKind::Notice, LogKind::Notice],
            Discovery::NewClue { .. } => [LogKind::Clue, LogKind::Suspect],
            Discovery::AlreadyCollected { .. } => [LogKind::Clue, LogKind::Notice],
        };
        for (line, kind) in narration::describe_discovery(discovery)
            .into_iter()
            .zip(kinds)
        {
            self.log.push(line, kind);
        }
        Ok(())
    }

    fn submit_accusation(&mut self, raw: &str) {
        match accusation_name(raw) {
            Some(name) => {
                let verdict = self.session.accuse(name);
                for line in narration::describe_verdict(&verdict) {
                    self.log.push(line, LogKind::Verdict);
                }
                self.status_message = if verdict.guilty {
                    format!("{} is guilty", verdict.suspect)
                } else {
                    format!("{} walks free", verdict.suspect)
                };
                self.accused = Some(name.to_string());
                self.verdict = Some(verdict);
            }
            None => {
                self.log.push(narration::NO_ACCUSATION, LogKind::Notice);
                self.status_message = "Case closed without an accusation".to_string();
            }
        }
        self.phase = Phase::Verdict;
        self.log_scroll = usize::MAX;
    }

    fn fail(&mut self, err: GameError) {
        error!("{}", err);
        self.status_message = format!("Error: {}", err);
        self.failure = Some(err);
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        App::new(Session::standard().unwrap()).unwrap()
    }

    #[test]
    fn test_entry_clue_collected_on_start() {
        let app = app();
        assert_eq!(app.session().ledger().len(), 1);
        assert_eq!(app.session().tally().count_for("Pedro"), 1);
        assert_eq!(app.phase, Phase::Exploring);
    }

    #[test]
    fn test_keys_and_arrows_move() {
        let mut app = app();
        press(&mut app, KeyCode::Char('E'));
        assert_eq!(
            app.session().current_room().unwrap().name(),
            "Living Room"
        );
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session().current_room().unwrap().name(), "Garden");
        assert_eq!(app.status_message, "Entered Garden");
    }

    #[test]
    fn test_blocked_and_invalid_keys_keep_position() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        let position = app.session().position();

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.status_message, narration::no_exit(Exit::Right));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.status_message, narration::INVALID_COMMAND);
        assert_eq!(app.session().position(), position);
        assert_eq!(app.phase, Phase::Exploring);
    }

    #[test]
    fn test_full_game_through_verdict() {
        let mut app = app();
        // Entrance Hall (Pedro) then Living Room, Library (Pedro)
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.phase, Phase::Accusing);

        type_text(&mut app, "Pedrox");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.phase, Phase::Verdict);

        let verdict = app.verdict().unwrap();
        assert_eq!(verdict.suspect, "Pedro");
        assert_eq!(verdict.evidence_count, 2);
        assert!(verdict.guilty);

        let summary = app.summary();
        assert_eq!(summary.accused.as_deref(), Some("Pedro"));
        assert_eq!(summary.clues.len(), 3);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_accuses_nobody() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.phase, Phase::Verdict);
        assert!(app.verdict().is_none());
        assert!(app.summary().accused.is_none());
    }

    #[test]
    fn test_blank_accusation_is_no_accusation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.verdict().is_none());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.phase, Phase::Exploring);
    }

    #[test]
    fn test_event_log_is_bounded() {
        let mut log = EventLog::new(2);
        log.push("a", LogKind::Notice);
        log.push("b", LogKind::Notice);
        log.push("c", LogKind::Notice);
        let texts: Vec<&str> = log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }
}
