//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keys map differently while a card is being
//! edited, when typed characters belong to the focused input.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use lanecard_protocol::{EditTarget, Message};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event to an application message.
///
/// `editing` selects the key bindings used while a card is in edit mode.
#[must_use]
pub fn event_to_message(event: &Event, editing: bool) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) if editing => key_to_edit_message(*key),
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click presses are handled.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a key event to a message while browsing the lane.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Clear selection |
/// | `Up` / `Down` | Select previous / next card |
/// | `Enter` | Edit the selected card's title |
/// | `e` | Edit title |
/// | `i` | Edit description |
/// | `a` | Edit allotted and spent time |
/// | `d` | Delete the selected card |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_quit(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Enter => Some(Message::Select),
        KeyCode::Char('e') => Some(Message::BeginEdit {
            target: EditTarget::Title,
        }),
        KeyCode::Char('i') => Some(Message::BeginEdit {
            target: EditTarget::Description,
        }),
        KeyCode::Char('a') => Some(Message::BeginEdit {
            target: EditTarget::Allotted,
        }),
        KeyCode::Char('d') => Some(Message::DeleteCard),
        _ => None,
    }
}

/// Converts a key event to a message while a card is being edited.
///
/// # Key Bindings (Edit Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` | Commit |
/// | `Esc` | Cancel |
/// | `Tab` | Next input |
/// | `Left` / `Right` | Move cursor |
/// | `Backspace` | Delete before cursor |
/// | Any char | Input |
#[must_use]
pub fn key_to_edit_message(key: KeyEvent) -> Option<Message> {
    if is_quit(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::Select),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab | KeyCode::BackTab => Some(Message::NextInput),
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(ch) => Some(Message::Input { ch }),
        _ => None,
    }
}
