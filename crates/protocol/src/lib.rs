//! Shared protocol types for the lanecard application.
//!
//! This crate defines the core types used across all lanecard components,
//! including card records, field names, the time-remaining calculation,
//! messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`card`]: Card identifiers, tags, the `Card` record and `CardUpdate`
//! - [`field`]: Field names and editable regions
//! - [`duration`]: Time-remaining calculation from free-form durations
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Building a card and reading its time summary:
//!
//! ```
//! use lanecard_protocol::{Card, CardField, Tag};
//!
//! let card = Card::new("card-1", "planned")
//!     .with_title("Write specs")
//!     .with_time("60min", "25min")
//!     .with_tags([Tag::new("docs")]);
//!
//! assert_eq!(card.time_summary().as_deref(), Some("Left: 35 min"));
//!
//! // Commit-style update of a single field
//! let mut update = card.to_update();
//! update.set_field(CardField::Title, "Write the design doc".to_string());
//! assert_eq!(update.title.as_deref(), Some("Write the design doc"));
//! ```

pub mod card;
pub mod dummy;
pub mod duration;
pub mod error;
pub mod field;
pub mod message;

// Re-export primary types at crate root for convenience
pub use card::{Card, CardId, CardUpdate, LaneId, Tag};
pub use error::{ProtocolError, Result};
pub use field::{CardField, EditTarget};
pub use message::Message;
