//! Lane rendering widget.
//!
//! A lane is a bordered column with a header (title and card count) and a
//! vertical stack of card slots. The cards themselves are drawn by their
//! [`CardView`](crate::card::CardView)s into the slots computed here.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::layout::CARD_HEIGHT;

/// Renders the lane frame and returns the inner area for card slots.
///
/// Empty lanes show a "No cards" placeholder.
///
/// # Layout
///
/// ```text
/// ╭Planned Tasks (2)──────────╮
/// │╭─────────────────────[x]╮│
/// ││Title         Left: 5 min││
/// ││description              ││
/// ││ tag                     ││
/// │╰────────────────────────╯│
/// ╰──────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use lanecard_tui::widgets::render_lane;
///
/// let area = Rect::new(0, 0, 30, 12);
/// let mut buf = Buffer::empty(area);
///
/// let inner = render_lane("Planned Tasks", 0, true, area, &mut buf);
/// assert_eq!(inner, Rect::new(1, 1, 28, 10));
/// ```
pub fn render_lane(
    title: &str,
    card_count: usize,
    is_focused: bool,
    area: Rect,
    buf: &mut Buffer,
) -> Rect {
    let (border_style, title_style) = if is_focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let block = Block::default()
        .title(Span::styled(format!("{title} ({card_count})"), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner = block.inner(area);
    block.render(area, buf);

    if card_count == 0 {
        render_empty_placeholder(inner, buf);
    }

    inner
}

/// Computes the slots of the visible cards, keeping the selected card in
/// view.
///
/// Returns `(card index, slot)` pairs from top to bottom.
#[must_use]
pub fn card_slots(inner: Rect, card_count: usize, selected: Option<usize>) -> Vec<(usize, Rect)> {
    if card_count == 0 || inner.height < CARD_HEIGHT {
        return Vec::new();
    }

    let visible = (inner.height / CARD_HEIGHT) as usize;
    let offset = calculate_scroll_offset(selected, card_count, visible);
    let shown = card_count.saturating_sub(offset).min(visible);

    let slots = Layout::vertical(
        std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), shown)
            .chain(std::iter::once(Constraint::Min(0))),
    )
    .split(inner);

    slots
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, slot)| (offset + i, *slot))
        .collect()
}

/// Renders a placeholder message for empty lanes.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No cards",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected card visible.
fn calculate_scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);
    selected.saturating_sub(visible / 2).min(max_offset)
}
