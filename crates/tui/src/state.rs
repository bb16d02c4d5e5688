//! Board state of the demo host.
//!
//! The host owns the card records of a single lane, tracks which card is
//! selected and remembers the last board event for the status bar. Card
//! widgets never touch this state directly; their callbacks are turned into
//! [`BoardAction`]s that the app applies here.

use lanecard_protocol::{Card, CardId, CardUpdate, LaneId};

/// A change requested by a card widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Remove a card from a lane.
    Remove {
        /// Lane holding the card.
        lane_id: LaneId,
        /// Card to remove.
        card_id: CardId,
    },
    /// A card finished deleting itself.
    Deleted {
        /// The deleted card.
        card_id: CardId,
        /// Lane that held it.
        lane_id: LaneId,
    },
    /// Replace a card record.
    Update(CardUpdate),
}

/// The application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Identifier of the lane.
    pub lane_id: LaneId,
    /// Title shown in the lane header.
    pub lane_title: String,
    /// Cards of the lane, top to bottom.
    pub cards: Vec<Card>,
    /// Index of the selected card, if any.
    pub selected: Option<usize>,
    /// Description of the last board event.
    pub last_event: Option<String>,
}

impl AppState {
    /// Creates a state for one lane with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanecard_protocol::dummy::dummy_cards;
    /// use lanecard_tui::AppState;
    ///
    /// let state = AppState::new("planned", "Planned Tasks", dummy_cards());
    /// assert!(state.selected.is_none());
    /// ```
    #[must_use]
    pub fn new(lane_id: impl Into<LaneId>, lane_title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            lane_id: lane_id.into(),
            lane_title: lane_title.into(),
            cards,
            selected: None,
            last_event: None,
        }
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.and_then(|idx| self.cards.get(idx))
    }

    /// Returns the index of a card.
    #[must_use]
    pub fn position(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == card_id)
    }

    /// Selects the card at `idx`, if it exists.
    pub fn select(&mut self, idx: usize) {
        if idx < self.cards.len() {
            self.selected = Some(idx);
        }
    }

    /// Moves the selection up, selecting the first card if nothing is
    /// selected.
    pub fn navigate_up(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Moves the selection down, selecting the first card if nothing is
    /// selected.
    pub fn navigate_down(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let last = self.cards.len() - 1;
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(last),
            None => 0,
        });
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Removes a card, keeping the selection on a neighbour.
    ///
    /// Returns the index the card had, or `None` if the lane or card is
    /// unknown.
    pub fn remove_card(&mut self, lane_id: &LaneId, card_id: &CardId) -> Option<usize> {
        if lane_id != &self.lane_id {
            return None;
        }
        let idx = self.position(card_id)?;
        self.cards.remove(idx);

        self.selected = match self.selected {
            _ if self.cards.is_empty() => None,
            Some(selected) if selected > idx => Some(selected - 1),
            Some(selected) => Some(selected.min(self.cards.len() - 1)),
            None => None,
        };
        Some(idx)
    }

    /// Merges an update into its card.
    ///
    /// Returns the index of the updated card, or `None` if unknown.
    pub fn apply_update(&mut self, update: CardUpdate) -> Option<usize> {
        let idx = self.position(&update.id)?;
        self.cards[idx].apply(update);
        Some(idx)
    }

    /// Records a board event for the status bar.
    pub fn set_event(&mut self, event: impl Into<String>) {
        self.last_event = Some(event.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(n: usize) -> AppState {
        let cards = (0..n)
            .map(|i| Card::new(format!("c{i}").as_str(), "lane").with_title(format!("Card {i}")))
            .collect();
        AppState::new("lane", "Lane", cards)
    }

    #[test]
    fn navigation_clamps() {
        let mut state = state_with(3);
        state.navigate_up();
        assert_eq!(state.selected, Some(0));
        state.navigate_up();
        assert_eq!(state.selected, Some(0));

        state.navigate_down();
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn navigation_on_empty_lane() {
        let mut state = state_with(0);
        state.navigate_down();
        assert!(state.selected.is_none());
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut state = state_with(2);
        state.select(5);
        assert!(state.selected.is_none());
        state.select(1);
        assert_eq!(state.selected_card().unwrap().id, CardId::new("c1"));
    }

    #[test]
    fn remove_keeps_selection_on_neighbour() {
        let mut state = state_with(3);
        state.select(2);

        assert_eq!(state.remove_card(&LaneId::new("lane"), &CardId::new("c2")), Some(2));
        assert_eq!(state.selected, Some(1));

        assert_eq!(state.remove_card(&LaneId::new("lane"), &CardId::new("c0")), Some(0));
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.selected_card().unwrap().id, CardId::new("c1"));

        state.remove_card(&LaneId::new("lane"), &CardId::new("c1"));
        assert!(state.selected.is_none());
    }

    #[test]
    fn remove_from_other_lane_is_ignored() {
        let mut state = state_with(1);
        assert_eq!(state.remove_card(&LaneId::new("other"), &CardId::new("c0")), None);
        assert_eq!(state.cards.len(), 1);
    }

    #[test]
    fn apply_update_merges_record() {
        let mut state = state_with(2);
        let mut update = state.cards[1].to_update();
        update.title = Some("Renamed".to_string());

        assert_eq!(state.apply_update(update), Some(1));
        assert_eq!(state.cards[1].title.as_deref(), Some("Renamed"));
    }

    #[test]
    fn apply_update_for_unknown_card() {
        let mut state = state_with(1);
        let update = Card::new("missing", "lane").to_update();
        assert_eq!(state.apply_update(update), None);
    }
}
