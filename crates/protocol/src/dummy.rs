//! Dummy data generation for testing and demonstration.
//!
//! This module provides a sample lane of cards covering the interesting
//! cases of the card widget: time left, overspent, malformed durations,
//! missing fields and tags.
//!
//! # Examples
//!
//! ```
//! use lanecard_protocol::dummy::{DUMMY_LANE_ID, dummy_cards};
//!
//! let cards = dummy_cards();
//! assert_eq!(cards.len(), 6);
//! assert!(cards.iter().all(|c| c.lane_id.as_str() == DUMMY_LANE_ID));
//! ```

use crate::card::{Card, CardId, Tag};

/// Identifier of the lane holding the dummy cards.
pub const DUMMY_LANE_ID: &str = "planned";

/// Display title of the dummy lane.
pub const DUMMY_LANE_TITLE: &str = "Planned Tasks";

/// A builder for creating cards with optional time tracking.
///
/// This is an internal helper to reduce boilerplate when creating
/// several cards for the same lane.
struct CardBuilder {
    card: Card,
}

impl CardBuilder {
    /// Creates a new card builder with the given title and description.
    fn new(title: &str, description: &str) -> Self {
        Self {
            card: Card::new(CardId::generate(), DUMMY_LANE_ID)
                .with_title(title)
                .with_description(description)
                .with_editable(true),
        }
    }

    /// Sets the allotted and spent times.
    fn time(mut self, allotted: &str, spent: &str) -> Self {
        self.card = self.card.with_time(allotted, spent);
        self
    }

    /// Adds a tag.
    fn tag(mut self, tag: Tag) -> Self {
        self.card.tags.push(tag);
        self
    }

    /// Builds the card.
    fn build(self) -> Card {
        self.card
    }
}

/// Returns a lane's worth of editable sample cards.
#[must_use]
pub fn dummy_cards() -> Vec<Card> {
    vec![
        CardBuilder::new("Write specs", "Document the card editing flow")
            .time("60min", "25min")
            .tag(Tag::new("docs"))
            .build(),
        CardBuilder::new("Pay rent", "Transfer via netbanking")
            .time("15min", "")
            .tag(Tag::new("chore").with_colors("black", "yellow"))
            .build(),
        CardBuilder::new("Fix login bug", "Users can't log in on mobile")
            .time("30min", "45min")
            .tag(Tag::new("bug").with_colors("white", "red"))
            .tag(Tag::new("urgent"))
            .build(),
        CardBuilder::new("Plan offsite", "Pick a venue")
            .time("soon", "10min")
            .build(),
        CardBuilder::new("Review PR", "Check the time tracking change")
            .time("20min", "20min")
            .build(),
        Card::new(CardId::generate(), DUMMY_LANE_ID)
            .with_title("Untitled follow-up")
            .with_editable(true),
    ]
}
