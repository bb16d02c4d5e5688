//! Callbacks a card widget reports to its owning board.

use std::fmt;

use lanecard_protocol::{CardId, CardUpdate, LaneId};

/// Removes a card from a lane: `(lane_id, card_id)`.
pub type RemoveCardFn = Box<dyn FnMut(&LaneId, &CardId)>;

/// Notifies that a card was deleted: `(card_id, lane_id)`.
pub type DeleteFn = Box<dyn FnMut(&CardId, &LaneId)>;

/// Receives the full record built by a commit.
pub type UpdateFn = Box<dyn FnMut(CardUpdate)>;

/// The callbacks injected into a [`CardView`](crate::card::CardView).
///
/// Every callback defaults to a no-op.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use lanecard_protocol::{Card, CardUpdate};
/// use lanecard_tui::CardHandlers;
///
/// let updates: Rc<RefCell<Vec<CardUpdate>>> = Rc::default();
/// let sink = Rc::clone(&updates);
///
/// let mut handlers = CardHandlers::new().on_update(move |update| sink.borrow_mut().push(update));
/// handlers.update(Card::new("c1", "lane").to_update());
///
/// assert_eq!(updates.borrow().len(), 1);
/// ```
pub struct CardHandlers {
    remove_card: RemoveCardFn,
    on_delete: DeleteFn,
    on_update: UpdateFn,
}

impl CardHandlers {
    /// Creates handlers that ignore every event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            remove_card: Box::new(|_, _| {}),
            on_delete: Box::new(|_, _| {}),
            on_update: Box::new(|_| {}),
        }
    }

    /// Sets the callback removing the card from its lane.
    #[must_use]
    pub fn on_remove(mut self, f: impl FnMut(&LaneId, &CardId) + 'static) -> Self {
        self.remove_card = Box::new(f);
        self
    }

    /// Sets the callback notified after a card was removed.
    #[must_use]
    pub fn on_delete(mut self, f: impl FnMut(&CardId, &LaneId) + 'static) -> Self {
        self.on_delete = Box::new(f);
        self
    }

    /// Sets the callback receiving committed records.
    #[must_use]
    pub fn on_update(mut self, f: impl FnMut(CardUpdate) + 'static) -> Self {
        self.on_update = Box::new(f);
        self
    }

    /// Invokes the removal callback.
    pub fn remove(&mut self, lane_id: &LaneId, card_id: &CardId) {
        (self.remove_card)(lane_id, card_id);
    }

    /// Invokes the deletion notification.
    pub fn deleted(&mut self, card_id: &CardId, lane_id: &LaneId) {
        (self.on_delete)(card_id, lane_id);
    }

    /// Invokes the update callback.
    pub fn update(&mut self, update: CardUpdate) {
        (self.on_update)(update);
    }
}

impl Default for CardHandlers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CardHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardHandlers").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn defaults_are_no_ops() {
        let mut handlers = CardHandlers::default();
        let lane = LaneId::new("lane");
        let card = CardId::new("card");
        handlers.remove(&lane, &card);
        handlers.deleted(&card, &lane);
    }

    #[test]
    fn callbacks_receive_arguments_in_their_order() {
        let calls: Rc<RefCell<Vec<String>>> = Rc::default();
        let removed = Rc::clone(&calls);
        let deleted = Rc::clone(&calls);

        let mut handlers = CardHandlers::new()
            .on_remove(move |lane, card| removed.borrow_mut().push(format!("remove {lane} {card}")))
            .on_delete(move |card, lane| deleted.borrow_mut().push(format!("delete {card} {lane}")));

        let lane = LaneId::new("l1");
        let card = CardId::new("c1");
        handlers.remove(&lane, &card);
        handlers.deleted(&card, &lane);

        assert_eq!(*calls.borrow(), vec!["remove l1 c1", "delete c1 l1"]);
    }
}
