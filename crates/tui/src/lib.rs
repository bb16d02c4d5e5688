//! Terminal UI for the lanecard application.
//!
//! This crate provides a Ratatui-based editable Kanban card widget and a
//! small single-lane board that hosts it.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`card`]: The card widget, its click dispatch and hit regions
//! - [`edit`]: The edit session state machine
//! - [`handlers`]: Host callbacks for remove, delete and update
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Board state of the host
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Lane, tag, input and status bar rendering
//!
//! # Example
//!
//! ```no_run
//! use lanecard_protocol::dummy::{DUMMY_LANE_ID, DUMMY_LANE_TITLE, dummy_cards};
//! use lanecard_tui::{App, AppState, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let state = AppState::new(DUMMY_LANE_ID, DUMMY_LANE_TITLE, dummy_cards());
//!     let mut app = App::new(state);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod card;
pub mod edit;
pub mod event;
pub mod handlers;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use card::{CardLayout, CardOptions, CardView, ClickEvent, ClickOutcome};
pub use edit::EditSession;
pub use handlers::CardHandlers;
pub use state::{AppState, BoardAction};
