//! Centralized layout measurements for the TUI.
//!
//! Shared dimensions used by the card widget, the lane and the app view.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each card in rows.
///
/// Two border rows around the header row (title and time), the description
/// row and the footer row (tags and edit buttons).
pub const CARD_HEIGHT: u16 = 5;

/// Width of the right side of a card's header row, holding the time
/// summary or, while editing it, the allotted and spent inputs.
pub const RIGHT_CONTENT_WIDTH: u16 = 17;

/// Widest the lane is allowed to grow.
pub const LANE_MAX_WIDTH: u16 = 64;

/// Minimum terminal height for useful rendering.
///
/// One card inside the lane borders, plus the status bar.
pub const MIN_HEIGHT: u16 = CARD_HEIGHT + 2 + STATUS_BAR_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// Between `MIN_HEIGHT` and this, the header is hidden to reclaim space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;
