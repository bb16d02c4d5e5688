//! Rendering helpers for the card widget and its demo host.
//!
//! Each helper is a function drawing into a [`Buffer`](ratatui::buffer::Buffer),
//! which keeps them easy to test and compose. The interactive card itself
//! lives in [`crate::card`] and draws through these.
//!
//! # Modules
//!
//! - [`editable_label`]: Inline single-line text input
//! - [`tag`]: Tag chips and tag color parsing
//! - [`delete_button`]: The `[x]` delete affordance
//! - [`lane`]: Lane frame and card slots
//! - [`status_bar`]: Footer with key hints and the last board event
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use lanecard_protocol::Tag;
//! use lanecard_tui::widgets;
//!
//! let area = Rect::new(0, 0, 30, 1);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_tags(&[Tag::new("docs"), Tag::new("urgent")], None, area, &mut buf);
//! ```

pub mod delete_button;
pub mod editable_label;
pub mod lane;
pub mod status_bar;
pub mod tag;

// Re-export primary rendering functions for convenience
pub use delete_button::{DELETE_LABEL, delete_button_area, render_delete_button};
pub use editable_label::EditableLabel;
pub use lane::{card_slots, render_lane};
pub use status_bar::render_status_bar;
pub use tag::{parse_color, render_tag, render_tags, tag_style, tag_width};
