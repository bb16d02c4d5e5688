//! Edit session state for a single card.
//!
//! The session records which region of the card is being edited and the
//! values staged for it. Each variant only carries the slots its region can
//! stage, so editing the time region always carries `spent` along with
//! `allotted`.
//!
//! A slot is `None` until the user changes the corresponding input. On
//! commit, unstaged slots keep the card's current value.

use lanecard_protocol::{Card, CardField, CardUpdate, EditTarget};

/// The edit state of one card widget.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::{Card, CardField, EditTarget};
/// use lanecard_tui::edit::EditSession;
///
/// let card = Card::new("c1", "lane").with_time("60min", "10min");
///
/// let mut session = EditSession::begin(EditTarget::Allotted);
/// assert!(session.stage(CardField::Allotted, "90min".to_string()));
/// assert!(session.stage(CardField::Spent, "20min".to_string()));
/// assert!(!session.stage(CardField::Title, "ignored".to_string()));
///
/// let update = session.build_update(&card).unwrap();
/// assert_eq!(update.allotted.as_deref(), Some("90min"));
/// assert_eq!(update.spent.as_deref(), Some("20min"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    /// No field is being edited.
    #[default]
    Idle,
    /// Editing the title.
    Title {
        /// Staged title.
        title: Option<String>,
    },
    /// Editing the description.
    Description {
        /// Staged description.
        description: Option<String>,
    },
    /// Editing the time region, which stages both times.
    Allotted {
        /// Staged allotted time.
        allotted: Option<String>,
        /// Staged spent time.
        spent: Option<String>,
    },
}

impl EditSession {
    /// Starts a session for `target` with nothing staged.
    #[must_use]
    pub const fn begin(target: EditTarget) -> Self {
        match target {
            EditTarget::Title => Self::Title { title: None },
            EditTarget::Description => Self::Description { description: None },
            EditTarget::Allotted => Self::Allotted {
                allotted: None,
                spent: None,
            },
        }
    }

    /// Returns the region under edit, if any.
    #[must_use]
    pub const fn target(&self) -> Option<EditTarget> {
        match self {
            Self::Idle => None,
            Self::Title { .. } => Some(EditTarget::Title),
            Self::Description { .. } => Some(EditTarget::Description),
            Self::Allotted { .. } => Some(EditTarget::Allotted),
        }
    }

    /// Returns `true` if no field is being edited.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    fn slot_mut(&mut self, field: CardField) -> Option<&mut Option<String>> {
        match (self, field) {
            (Self::Title { title }, CardField::Title) => Some(title),
            (Self::Description { description }, CardField::Description) => Some(description),
            (Self::Allotted { allotted, .. }, CardField::Allotted) => Some(allotted),
            (Self::Allotted { spent, .. }, CardField::Spent) => Some(spent),
            _ => None,
        }
    }

    /// Stages `value` for `field`.
    ///
    /// Returns `false`, leaving the session unchanged, if the current
    /// session has no slot for `field`.
    pub fn stage(&mut self, field: CardField, value: String) -> bool {
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    /// Returns the staged value of `field`, if any.
    #[must_use]
    pub fn staged(&self, field: CardField) -> Option<&str> {
        match (self, field) {
            (Self::Title { title }, CardField::Title) => title.as_deref(),
            (Self::Description { description }, CardField::Description) => description.as_deref(),
            (Self::Allotted { allotted, .. }, CardField::Allotted) => allotted.as_deref(),
            (Self::Allotted { spent, .. }, CardField::Spent) => spent.as_deref(),
            _ => None,
        }
    }

    /// Builds the record to commit from `card` and the staged values.
    ///
    /// Returns `None` for an idle session.
    #[must_use]
    pub fn build_update(&self, card: &Card) -> Option<CardUpdate> {
        let target = self.target()?;
        let mut update = card.to_update();
        for &field in target.fields() {
            if let Some(value) = self.staged(field) {
                update.set_field(field, value.to_string());
            }
        }
        Some(update)
    }
}
