//! Status bar rendering widget.
//!
//! The footer shows the key hints for the current mode and, when present,
//! the last thing that happened on the board.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("Ctrl+C", "Quit"),
    ("↑↓", "Select"),
    ("e/i/a", "Edit"),
    ("d", "Delete"),
];

const EDIT_HINTS: &[(&str, &str)] = &[
    ("Enter", "Update"),
    ("Esc", "Cancel"),
    ("Tab", "Next input"),
];

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// ╭────────────────────────────────────────────────────────╮
/// │Updated "Write specs"  |  Enter Update  Esc Cancel      │
/// ╰────────────────────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use lanecard_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(false, Some("Deleted card"), area, &mut buf);
/// ```
pub fn render_status_bar(editing: bool, message: Option<&str>, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    if let Some(message) = message {
        spans.push(Span::styled(message, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled("  |  ", text_style));
    }

    let hints = if editing { EDIT_HINTS } else { BROWSE_HINTS };
    for (key, action) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }

    Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .render(area, buf);
}
