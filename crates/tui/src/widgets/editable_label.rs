//! Single-line inline text input.
//!
//! An [`EditableLabel`] belongs to one card field. Every insertion or
//! deletion reports the new value so the owner can stage it right away.

use lanecard_protocol::CardField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

/// An inline text input bound to a card field.
///
/// The cursor is a byte offset into the value and always sits on a
/// character boundary.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::CardField;
/// use lanecard_tui::widgets::EditableLabel;
///
/// let mut label = EditableLabel::new(CardField::Spent, "5", "Spent");
/// assert_eq!(label.insert_char('0'), "50");
/// assert_eq!(label.backspace(), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableLabel {
    field: CardField,
    placeholder: String,
    value: String,
    cursor: usize,
}

impl EditableLabel {
    /// Creates an input holding `value`, with the cursor at the end.
    #[must_use]
    pub fn new(field: CardField, value: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            field,
            placeholder: placeholder.into(),
            cursor: value.len(),
            value,
        }
    }

    /// Returns the field this input edits.
    #[must_use]
    pub const fn field(&self) -> CardField {
        self.field
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the placeholder shown while the value is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns the cursor position as a byte offset.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Inserts a character at the cursor and returns the new value.
    pub fn insert_char(&mut self, ch: char) -> &str {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        &self.value
    }

    /// Deletes the character before the cursor.
    ///
    /// Returns the new value, or `None` if the cursor was at the start.
    pub fn backspace(&mut self) -> Option<&str> {
        let prev = self.value[..self.cursor].char_indices().last()?.0;
        self.value.remove(prev);
        self.cursor = prev;
        Some(&self.value)
    }

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) {
        if let Some((prev, _)) = self.value[..self.cursor].char_indices().last() {
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Renders the input on the first row of `area`.
    ///
    /// When focused, the text is underlined and the cell under the cursor
    /// is reversed. The text scrolls horizontally to keep the cursor in view.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        let text_style = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };

        // Blank the whole input so it reads as a field
        buf.set_stringn(area.x, area.y, " ".repeat(width), width, text_style);

        let cursor_col = self.value[..self.cursor].chars().count();
        let offset = (cursor_col + 1).saturating_sub(width);

        if self.value.is_empty() {
            let placeholder_style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC);
            buf.set_stringn(area.x, area.y, &self.placeholder, width, placeholder_style);
        } else {
            let visible: String = self.value.chars().skip(offset).take(width).collect();
            buf.set_stringn(area.x, area.y, visible, width, text_style);
        }

        if focused {
            let x = area.x + u16::try_from(cursor_col - offset).unwrap_or(0);
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_style(text_style.add_modifier(Modifier::REVERSED));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn label(value: &str) -> EditableLabel {
        EditableLabel::new(CardField::Title, value, "Title")
    }

    #[test]
    fn cursor_starts_at_end() {
        let label = label("héllo");
        assert_eq!(label.cursor(), "héllo".len());
    }

    #[test]
    fn insert_reports_new_value() {
        let mut label = label("ab");
        assert_eq!(label.insert_char('c'), "abc");
        label.move_left();
        label.move_left();
        assert_eq!(label.insert_char('X'), "aXbc");
    }

    #[test]
    fn backspace_at_start_reports_nothing() {
        let mut label = label("a");
        assert_eq!(label.backspace(), Some(""));
        assert_eq!(label.backspace(), None);
    }

    #[test]
    fn multibyte_editing() {
        let mut label = label("");
        label.insert_char('日');
        label.insert_char('本');
        assert_eq!(label.value(), "日本");
        assert_eq!(label.cursor(), 6);

        assert_eq!(label.backspace(), Some("日"));
        assert_eq!(label.cursor(), 3);
    }

    #[test]
    fn cursor_moves_stop_at_bounds() {
        let mut label = label("é");
        label.move_right();
        assert_eq!(label.cursor(), 2);
        label.move_left();
        label.move_left();
        assert_eq!(label.cursor(), 0);
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut label = label("x");
        label.set_value("longer");
        assert_eq!(label.cursor(), 6);
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        label("").render(area, &mut buf, false);
        assert_eq!(buffer_to_string(&buf), "Title\n");
    }

    #[test]
    fn long_value_scrolls_to_cursor() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        label("abcdefgh").render(area, &mut buf, true);
        // Four trailing characters plus the cursor cell
        assert_eq!(buffer_to_string(&buf), "efgh\n");

        let cursor = buf.cell((4, 0)).unwrap();
        assert!(cursor.modifier.contains(Modifier::REVERSED));
    }
}
