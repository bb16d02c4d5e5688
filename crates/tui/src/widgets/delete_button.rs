//! Delete affordance drawn on a card's top border.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

/// Label of the delete button.
pub const DELETE_LABEL: &str = "[x]";

/// Narrowest card that still gets a delete button.
const MIN_CARD_WIDTH: u16 = 8;

/// Returns the clickable area of the delete button for a card drawn in
/// `card_area`, or `None` if the card is too narrow.
///
/// The button sits on the top border, one column in from the right corner.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use lanecard_tui::widgets::delete_button_area;
///
/// let area = delete_button_area(Rect::new(0, 0, 20, 5)).unwrap();
/// assert_eq!(area, Rect::new(16, 0, 3, 1));
/// assert!(delete_button_area(Rect::new(0, 0, 5, 5)).is_none());
/// ```
#[must_use]
pub fn delete_button_area(card_area: Rect) -> Option<Rect> {
    if card_area.width < MIN_CARD_WIDTH || card_area.height == 0 {
        return None;
    }
    let width = DELETE_LABEL.len() as u16;
    Some(Rect::new(
        card_area.right() - width - 1,
        card_area.y,
        width,
        1,
    ))
}

/// Renders the delete button into `area`.
pub fn render_delete_button(area: Rect, buf: &mut Buffer) {
    let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    buf.set_stringn(area.x, area.y, DELETE_LABEL, area.width as usize, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn area_hugs_right_corner() {
        let area = delete_button_area(Rect::new(10, 4, 30, 5)).unwrap();
        assert_eq!(area, Rect::new(36, 4, 3, 1));
    }

    #[test]
    fn narrow_cards_have_no_button() {
        assert!(delete_button_area(Rect::new(0, 0, 7, 5)).is_none());
        assert!(delete_button_area(Rect::new(0, 0, 30, 0)).is_none());
    }

    #[test]
    fn renders_label() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        render_delete_button(area, &mut buf);
        assert_eq!(buffer_to_string(&buf), "[x]\n");
    }
}
