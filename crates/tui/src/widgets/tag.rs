//! Tag chip rendering.
//!
//! Tags render as padded chips (` title `) on a single row. A tag's own
//! colors are applied over the default chip style, and a caller supplied
//! style is applied over both.

use std::str::FromStr;

use lanecard_protocol::Tag;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

/// Columns left between two chips.
const TAG_GAP: u16 = 1;

/// Parses a tag color (`"red"`, `"light-blue"`, `"#ff8800"`, `"42"`).
///
/// Returns `None` for values ratatui does not understand.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use lanecard_tui::widgets::parse_color;
///
/// assert_eq!(parse_color("red"), Some(Color::Red));
/// assert_eq!(parse_color("#ff8800"), Some(Color::Rgb(255, 136, 0)));
/// assert_eq!(parse_color("not a color"), None);
/// ```
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

/// Returns the style a tag is rendered with.
#[must_use]
pub fn tag_style(tag: &Tag, style_override: Option<Style>) -> Style {
    let mut style = Style::default().fg(Color::White).bg(Color::DarkGray);
    if let Some(color) = tag.color.as_deref().and_then(parse_color) {
        style = style.fg(color);
    }
    if let Some(color) = tag.bg_color.as_deref().and_then(parse_color) {
        style = style.bg(color);
    }
    match style_override {
        Some(patch) => style.patch(patch),
        None => style,
    }
}

/// Returns the number of columns a tag chip occupies.
#[must_use]
pub fn tag_width(tag: &Tag) -> u16 {
    u16::try_from(tag.title.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Renders a single tag chip, clipped to `area`.
///
/// Returns the number of columns written.
pub fn render_tag(tag: &Tag, style_override: Option<Style>, area: Rect, buf: &mut Buffer) -> u16 {
    if area.width == 0 || area.height == 0 {
        return 0;
    }
    let chip = format!(" {} ", tag.title);
    let (x, _) = buf.set_stringn(
        area.x,
        area.y,
        chip,
        area.width as usize,
        tag_style(tag, style_override),
    );
    x - area.x
}

/// Renders tags left to right, dropping those that do not fit.
pub fn render_tags(tags: &[Tag], style_override: Option<Style>, area: Rect, buf: &mut Buffer) {
    let mut x = area.x;
    for tag in tags {
        let remaining = area.right().saturating_sub(x);
        if remaining < tag_width(tag) {
            break;
        }
        let chip_area = Rect::new(x, area.y, remaining, area.height.min(1));
        let written = render_tag(tag, style_override, chip_area, buf);
        x = x.saturating_add(written).saturating_add(TAG_GAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::style::Modifier;

    #[test]
    fn default_style() {
        let style = tag_style(&Tag::new("docs"), None);
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn tag_colors_override_defaults() {
        let tag = Tag::new("bug").with_colors("white", "#aa0000");
        let style = tag_style(&tag, None);
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::Rgb(0xaa, 0, 0)));
    }

    #[test]
    fn unknown_colors_fall_back() {
        let tag = Tag::new("odd").with_colors("chartreuse-ish", "");
        let style = tag_style(&tag, None);
        assert_eq!(style.fg, Some(Color::White));
        assert_eq!(style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn caller_style_wins() {
        let tag = Tag::new("bug").with_colors("red", "black");
        let style = tag_style(
            &tag,
            Some(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        );
        assert_eq!(style.fg, Some(Color::Yellow));
        assert_eq!(style.bg, Some(Color::Black));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn width_includes_padding() {
        assert_eq!(tag_width(&Tag::new("abc")), 5);
        assert_eq!(tag_width(&Tag::new("")), 2);
    }

    #[test]
    fn tags_that_do_not_fit_are_dropped() {
        let tags = [Tag::new("one"), Tag::new("two"), Tag::new("three")];
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        render_tags(&tags, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("one"));
        assert!(content.contains("two"));
        assert!(!content.contains("three"));
    }

    #[test]
    fn render_into_empty_area() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 1));
        assert_eq!(render_tag(&Tag::new("x"), None, area, &mut buf), 0);
    }
}
