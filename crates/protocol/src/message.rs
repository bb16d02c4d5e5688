//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

use crate::field::EditTarget;

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::Message;
///
/// let msg = Message::NavigateDown;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Select the previous card, or nothing while editing.
    NavigateUp,
    /// Select the next card, or nothing while editing.
    NavigateDown,
    /// Move the input cursor left while editing.
    NavigateLeft,
    /// Move the input cursor right while editing.
    NavigateRight,
    /// Commit the current edit, or start editing the selected card's title.
    Select,
    /// Cancel the current edit, or clear the selection.
    Escape,
    /// Quit the application.
    Quit,
    /// Start editing a region of the selected card.
    BeginEdit {
        /// The region to edit.
        target: EditTarget,
    },
    /// Delete the selected card.
    DeleteCard,
    /// Move focus to the next input of the current edit.
    NextInput,
    /// Type a character into the focused input.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the character before the cursor.
    Backspace,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanecard_protocol::Message;
    ///
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateUp | Self::NavigateDown | Self::NavigateLeft | Self::NavigateRight
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanecard_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message only makes sense inside an edit session.
    #[must_use]
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Backspace | Self::NextInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serialization_roundtrip() {
        let messages = vec![
            Message::NavigateUp,
            Message::Select,
            Message::BeginEdit {
                target: EditTarget::Allotted,
            },
            Message::Input { ch: 'x' },
            Message::ClickAt { column: 3, row: 7 },
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).unwrap();
            let parsed: Message = serde_json::from_str(&json).unwrap();
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn text_input_messages() {
        assert!(Message::Input { ch: 'a' }.is_text_input());
        assert!(Message::Backspace.is_text_input());
        assert!(!Message::DeleteCard.is_text_input());
    }
}
