//! lanecard - An editable Kanban card widget for the terminal.
//!
//! This is the main binary that launches the demo board.

use std::{fs::File, sync::Mutex};

use lanecard_config::{Config, LoggingConfig};
use lanecard_protocol::dummy::{DUMMY_LANE_ID, DUMMY_LANE_TITLE, dummy_cards};
use lanecard_tui::{App, AppState, terminal};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Sends tracing output to the configured log file.
///
/// The TUI owns stdout, so nothing is logged without a file.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let Some(path) = &logging.file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let level = logging.level.to_ascii_lowercase();
    let filter = EnvFilter::try_new(format!("lanecard={level},warn"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config.logging)?;
    info!(editable = config.card.editable, "starting lanecard");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let state = AppState::new(DUMMY_LANE_ID, DUMMY_LANE_TITLE, dummy_cards());
    let mut app = App::with_config(state, &config);

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
