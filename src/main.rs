// Detective Quest: explore the mansion, collect clues, accuse a suspect

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use detective_quest::console;
use detective_quest::game::{narration, Session, SessionSummary};
use detective_quest::ui::App;

#[derive(Parser, Debug)]
#[command(name = "detective-quest")]
#[command(about = "Explore the mansion, collect clues and accuse the culprit")]
#[command(version)]
struct Args {
    /// Play line by line on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

/// Install the tracing subscriber. The full-screen UI owns the terminal, so
/// without a log file it gets no subscriber at all.
fn init_tracing(args: &Args, plain: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| e.to_string())?;
        }
        None if plain => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init()
                .map_err(|e| e.to_string())?;
        }
        None => {}
    }
    Ok(())
}

fn run_tui(session: Session) -> Result<SessionSummary, Box<dyn std::error::Error>> {
    let mut app = App::new(session)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(app.summary())
}

/// Leave the outcome on the normal screen once the UI is gone
fn print_summary(summary: &SessionSummary) {
    println!("{}", narration::TITLE);
    println!();
    println!("===== COLLECTED CLUES (SORTED) =====");
    if summary.clues.is_empty() {
        println!("{}", narration::NO_CLUES_COLLECTED);
    }
    for clue in &summary.clues {
        println!(" - {}", clue);
    }
    println!();
    match &summary.verdict {
        Some(verdict) => {
            for line in narration::describe_verdict(verdict) {
                println!("{}", line);
            }
        }
        None => println!("{}", narration::NO_ACCUSATION),
    }
    println!();
    println!("{}", narration::FAREWELL);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let plain = args.plain || !io::stdin().is_terminal();
    init_tracing(&args, plain)?;

    let mut session = Session::standard()?;
    tracing::debug!(rooms = session.mansion().len(), plain, "session ready");

    if plain {
        let stdin = io::stdin();
        let stdout = io::stdout();
        console::run(&mut session, &mut stdin.lock(), &mut stdout.lock())?;
    } else {
        let summary = run_tui(session)?;
        print_summary(&summary);
    }

    Ok(())
}
