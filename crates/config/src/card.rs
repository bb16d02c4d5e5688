//! Default presentation settings for cards.

use serde::{Deserialize, Serialize};

/// Settings applied to every card the application displays.
///
/// # Examples
///
/// ```
/// use lanecard_config::CardDefaults;
///
/// let defaults = CardDefaults::default();
/// assert!(defaults.editable);
/// assert!(!defaults.hide_delete_icon);
///
/// let read_only = CardDefaults::read_only();
/// assert!(!read_only.editable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefaults {
    /// Whether cards can enter inline edit mode and be deleted.
    #[serde(default = "default_editable")]
    pub editable: bool,

    /// Hides the delete affordance even on editable cards.
    #[serde(default)]
    pub hide_delete_icon: bool,
}

fn default_editable() -> bool {
    true
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self {
            editable: default_editable(),
            hide_delete_icon: false,
        }
    }
}

impl CardDefaults {
    /// Returns settings for a board where cards cannot be changed.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            editable: false,
            hide_delete_icon: false,
        }
    }

    /// Returns whether the delete affordance is shown.
    #[must_use]
    pub fn shows_delete_icon(&self) -> bool {
        self.editable && !self.hide_delete_icon
    }
}
