//! Test helpers shared by the TUI test modules.

use ratatui::buffer::Buffer;

/// Converts a [`Buffer`] to text, one line per row.
///
/// Trailing spaces are trimmed from every row so snapshots stay stable
/// regardless of the buffer width.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        for x in buf.area.left()..buf.area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Returns the text of row `y`, trailing spaces trimmed.
#[must_use]
pub(crate) fn row_text(buf: &Buffer, y: u16) -> String {
    let row: String = (buf.area.left()..buf.area.right())
        .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
        .collect();
    row.trim_end().to_string()
}
