//! Terminal setup and teardown.
//!
//! The card widget needs mouse reporting for click dispatch, so setup
//! enables mouse capture along with raw mode and the alternate screen, and
//! every exit path (normal return or panic) undoes all three.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enters raw mode and the alternate screen with mouse capture, and
/// creates the terminal.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use lanecard_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// // Draw cards...
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Leaves raw mode, mouse capture and the alternate screen, and shows the
/// cursor again.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Installs a panic hook that restores the terminal, then chains to the
/// hook that was installed before.
///
/// Call once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best effort; the original hook still prints the panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
