//! Hanzi - Chinese vocabulary flashcard TUI
//!
//! Pick lessons, pick which fields to show, flip through the shuffled
//! deck and mark each card correct or incorrect.

mod catalog;
mod config;
mod deck;
mod models;
mod session;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use catalog::Catalog;
use session::Session;
use ui::App;

// ══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "hanzi")]
#[command(author, version, about = "Chinese vocabulary flashcard TUI", long_about = None)]
struct Args {
    /// Directory containing lesson files (lesson1.csv, lesson2.csv, ...)
    #[arg(short, long)]
    lessons_dir: Option<PathBuf>,
}

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = config::Config::load().unwrap_or_default();

    // CLI flag wins over config, which wins over the platform default.
    let lessons_dir = args
        .lessons_dir
        .or_else(|| config.lessons_dir.clone())
        .unwrap_or_else(Catalog::default_path);

    catalog::install_starter_lessons(&lessons_dir)?;
    let catalog = Catalog::load(&lessons_dir)?;
    log::info!(
        "loaded {} lessons from {:?}",
        catalog.len(),
        lessons_dir
    );

    run_tui(Session::new(catalog), config)
}

fn run_tui(session: Session, config: config::Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(session, config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        return Err(err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }
    Ok(())
}
