//! The interactive card widget.
//!
//! A [`CardView`] renders one [`Card`] and owns its edit session. Clicks are
//! resolved against the regions of the last render: a field region enters
//! edit mode for that field, the `[Update]`/`[Cancel]` buttons resolve the
//! session, and `[x]` deletes the card. Keyboard input goes to the focused
//! inline input, and every change is staged immediately.
//!
//! Results leave the widget only through its [`CardHandlers`]. A commit
//! hands the owner a complete [`CardUpdate`]; a delete asks the owner to
//! remove the card and then notifies it.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use lanecard_protocol::{Card, CardField, CardUpdate, EditTarget};
//! use lanecard_tui::{CardHandlers, CardOptions, CardView};
//!
//! let committed: Rc<RefCell<Option<CardUpdate>>> = Rc::default();
//! let sink = Rc::clone(&committed);
//! let handlers = CardHandlers::new().on_update(move |update| *sink.borrow_mut() = Some(update));
//!
//! let card = Card::new("c1", "planned")
//!     .with_title("Write specs")
//!     .with_editable(true);
//! let mut view = CardView::new(card, CardOptions::default(), handlers);
//!
//! assert!(view.begin_edit(EditTarget::Title));
//! view.stage_value(CardField::Title, "Write the design doc");
//! view.commit_edit();
//!
//! assert!(!view.is_editing(EditTarget::Title));
//! let update = committed.borrow_mut().take().unwrap();
//! assert_eq!(update.title.as_deref(), Some("Write the design doc"));
//! ```

use std::fmt;

use lanecard_protocol::{Card, CardField, EditTarget, duration};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tracing::{debug, info};

use crate::{
    edit::EditSession,
    handlers::CardHandlers,
    layout::RIGHT_CONTENT_WIDTH,
    widgets::{EditableLabel, delete_button_area, render_delete_button, render_tags},
};

const UPDATE_LABEL: &str = "[Update]";
const CANCEL_LABEL: &str = "[Cancel]";
const SHORT_UPDATE_LABEL: &str = "[✓]";
const SHORT_CANCEL_LABEL: &str = "[✗]";

/// Renders a card body in place of the built-in layout, and owns its
/// editing.
///
/// While a custom layout is set, the built-in field regions are not
/// clickable and [`CardView::begin_edit`] is refused. Clicks on the body
/// (everything but the delete button) go to [`CardLayout::handle_click`]
/// instead, which commits changes through the card's handlers.
pub trait CardLayout {
    /// Renders `card` into `area`, which excludes the card border.
    ///
    /// `options` carries the remaining presentation options, such as the
    /// tag style.
    fn render(&self, card: &Card, options: &CardOptions, area: Rect, buf: &mut Buffer);

    /// Handles a click at `position` inside `area`, the body rendered by
    /// [`CardLayout::render`].
    ///
    /// The default ignores the click.
    fn handle_click(
        &mut self,
        card: &Card,
        position: Position,
        area: Rect,
        handlers: &mut CardHandlers,
    ) -> ClickOutcome {
        let _ = (card, position, area, handlers);
        ClickOutcome::Ignored
    }
}

/// Presentation options of a card.
#[derive(Default)]
pub struct CardOptions {
    /// Hides the delete button even on editable cards.
    pub hide_delete_icon: bool,
    /// Style applied over every tag's own colors.
    pub tag_style: Option<Style>,
    /// Replaces the built-in body layout.
    pub custom_layout: Option<Box<dyn CardLayout>>,
}

impl CardOptions {
    /// Sets whether the delete button is hidden.
    #[must_use]
    pub fn with_hide_delete_icon(mut self, hide: bool) -> Self {
        self.hide_delete_icon = hide;
        self
    }

    /// Sets the style applied over every tag.
    #[must_use]
    pub fn with_tag_style(mut self, style: Style) -> Self {
        self.tag_style = Some(style);
        self
    }

    /// Replaces the built-in body layout.
    #[must_use]
    pub fn with_custom_layout(mut self, layout: impl CardLayout + 'static) -> Self {
        self.custom_layout = Some(Box::new(layout));
        self
    }
}

impl fmt::Debug for CardOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardOptions")
            .field("hide_delete_icon", &self.hide_delete_icon)
            .field("tag_style", &self.tag_style)
            .field("custom_layout", &self.custom_layout.is_some())
            .finish()
    }
}

/// A mouse click travelling from a card up to the board.
///
/// The board handles the click after the card unless the card stopped its
/// propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    column: u16,
    row: u16,
    propagation_stopped: bool,
}

impl ClickEvent {
    /// Creates a click at the given terminal cell.
    #[must_use]
    pub const fn new(column: u16, row: u16) -> Self {
        Self {
            column,
            row,
            propagation_stopped: false,
        }
    }

    /// Returns the clicked cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }

    /// Keeps the click from reaching the board.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Returns `true` if a handler stopped the click.
    #[must_use]
    pub const fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// What a click on a card resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened.
    Ignored,
    /// Edit mode was entered (or kept) for the target.
    EditStarted(EditTarget),
    /// An input of the current session received focus.
    InputFocused(CardField),
    /// The session was committed.
    Committed,
    /// The session was cancelled.
    Cancelled,
    /// The card was deleted.
    Deleted,
}

/// A region of a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    /// A field region.
    Field(EditTarget),
    /// The `[Update]` button.
    Update,
    /// The `[Cancel]` button.
    Cancel,
    /// The delete button.
    Delete,
    /// Anywhere else on the card.
    Body,
    /// Outside the card.
    Outside,
}

/// Hit regions of a rendered card.
///
/// Field regions are empty when field editing is unavailable; button
/// regions are `None` when the buttons are not drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardRegions {
    /// The whole card, border included.
    pub area: Rect,
    /// The title, left of the header row.
    pub title: Rect,
    /// The time summary, right of the header row.
    pub time: Rect,
    /// The description row.
    pub description: Rect,
    /// The tag row, left of the buttons.
    pub tags: Rect,
    /// The `[Update]` button.
    pub update: Option<Rect>,
    /// The `[Cancel]` button.
    pub cancel: Option<Rect>,
    /// The delete button.
    pub delete: Option<Rect>,
}

impl CardRegions {
    /// Lays out a card drawn in `area`.
    #[must_use]
    pub fn compute(area: Rect, show_buttons: bool, show_delete: bool) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [header, description, footer] =
            Layout::vertical([Constraint::Length(1); 3]).areas(inner);

        let right = RIGHT_CONTENT_WIDTH.min(header.width / 2);
        let [title, time] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right)]).areas(header);

        let labels = show_buttons
            .then(|| button_labels(footer.width))
            .flatten();
        let (tags, update, cancel) = if let Some((update_label, cancel_label)) = labels {
            let [tags, update, _, cancel] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(label_width(update_label)),
                Constraint::Length(1),
                Constraint::Length(label_width(cancel_label)),
            ])
            .areas(footer);
            (tags, Some(update), Some(cancel))
        } else {
            (footer, None, None)
        };

        let delete = if show_delete {
            delete_button_area(area)
        } else {
            None
        };

        Self {
            area,
            title,
            time,
            description,
            tags,
            update,
            cancel,
            delete,
        }
    }

    /// Splits the time region into the allotted and spent inputs.
    #[must_use]
    pub fn time_inputs(&self) -> [Rect; 2] {
        let [allotted, _, spent] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(self.time);
        [allotted, spent]
    }

    /// Resolves the region under a cell.
    #[must_use]
    pub fn hit(&self, position: Position) -> CardHit {
        let within = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(position));

        if !self.area.contains(position) {
            CardHit::Outside
        } else if within(self.delete) {
            CardHit::Delete
        } else if within(self.update) {
            CardHit::Update
        } else if within(self.cancel) {
            CardHit::Cancel
        } else if self.title.contains(position) {
            CardHit::Field(EditTarget::Title)
        } else if self.time.contains(position) {
            CardHit::Field(EditTarget::Allotted)
        } else if self.description.contains(position) {
            CardHit::Field(EditTarget::Description)
        } else {
            CardHit::Body
        }
    }
}

/// The interactive card widget.
pub struct CardView {
    card: Card,
    options: CardOptions,
    handlers: CardHandlers,
    session: EditSession,
    inputs: Vec<EditableLabel>,
    focused_input: usize,
    regions: CardRegions,
}

impl CardView {
    /// Creates a widget for `card`.
    #[must_use]
    pub fn new(card: Card, options: CardOptions, handlers: CardHandlers) -> Self {
        Self {
            card,
            options,
            handlers,
            session: EditSession::Idle,
            inputs: Vec::new(),
            focused_input: 0,
            regions: CardRegions::default(),
        }
    }

    /// Returns the card record.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Returns the presentation options.
    #[must_use]
    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// Returns the edit session.
    #[must_use]
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Returns the regions of the last render.
    #[must_use]
    pub fn regions(&self) -> &CardRegions {
        &self.regions
    }

    /// Returns the inline inputs of the current session.
    #[must_use]
    pub fn inputs(&self) -> &[EditableLabel] {
        &self.inputs
    }

    /// Returns the field of the focused input, if editing.
    #[must_use]
    pub fn focused_field(&self) -> Option<CardField> {
        self.inputs.get(self.focused_input).map(EditableLabel::field)
    }

    /// Returns `true` if field editing is available.
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.card.editable && self.options.custom_layout.is_none()
    }

    /// Returns `true` if the delete button is shown.
    #[must_use]
    pub fn shows_delete(&self) -> bool {
        self.card.editable && !self.options.hide_delete_icon
    }

    /// Returns `true` if any field is being edited.
    #[must_use]
    pub fn is_any_editing(&self) -> bool {
        self.card.editable && !self.session.is_idle()
    }

    /// Returns `true` if `target` is being edited.
    #[must_use]
    pub fn is_editing(&self, target: EditTarget) -> bool {
        self.card.editable && self.session.target() == Some(target)
    }

    /// Enters edit mode for `target`.
    ///
    /// Beginning the region already under edit keeps its staged values.
    /// Returns `false` if editing is unavailable.
    pub fn begin_edit(&mut self, target: EditTarget) -> bool {
        if !self.can_edit() {
            debug!(card = %self.card.id, %target, "edit denied");
            return false;
        }
        if self.session.target() == Some(target) {
            return true;
        }

        self.session = EditSession::begin(target);
        self.inputs = target
            .fields()
            .iter()
            .map(|&field| self.input_for(field))
            .collect();
        self.focused_input = 0;

        debug!(card = %self.card.id, %target, "edit started");
        true
    }

    /// Builds the input for `field`.
    ///
    /// Only the title starts with the current value. The other inputs start
    /// empty and show the current value as their placeholder, so typing
    /// replaces it.
    fn input_for(&self, field: CardField) -> EditableLabel {
        let current = self.card.field(field).filter(|value| !value.is_empty());
        let placeholder = current.unwrap_or(placeholder(field));
        match field {
            CardField::Title => EditableLabel::new(field, current.unwrap_or_default(), placeholder),
            _ => EditableLabel::new(field, "", placeholder),
        }
    }

    /// Enters edit mode for the region named `name` (`"title"`,
    /// `"description"` or `"allotted"`).
    ///
    /// Unknown names are ignored.
    pub fn begin_edit_named(&mut self, name: &str) -> bool {
        match name.parse::<EditTarget>() {
            Ok(target) => self.begin_edit(target),
            Err(err) => {
                debug!(card = %self.card.id, %err, "edit request ignored");
                false
            }
        }
    }

    /// Stages `value` for `field` without committing it.
    ///
    /// Ignored unless the current session edits `field`.
    pub fn stage_value(&mut self, field: CardField, value: impl Into<String>) -> bool {
        let value = value.into();
        if !self.session.stage(field, value.clone()) {
            debug!(card = %self.card.id, %field, "stage ignored outside its session");
            return false;
        }
        if let Some(input) = self.inputs.iter_mut().find(|input| input.field() == field) {
            input.set_value(value);
        }
        true
    }

    /// Leaves edit mode, dropping staged values.
    pub fn cancel_edit(&mut self) {
        if let Some(target) = self.session.target() {
            debug!(card = %self.card.id, %target, "edit cancelled");
        }
        self.reset_session();
    }

    /// Commits the session through the update callback.
    ///
    /// The session is already idle when the callback runs. Returns `false`
    /// if there was nothing to commit.
    pub fn commit_edit(&mut self) -> bool {
        let session = std::mem::take(&mut self.session);
        self.inputs.clear();
        self.focused_input = 0;

        let Some(update) = session.build_update(&self.card) else {
            return false;
        };
        info!(card = %update.id, lane = %update.lane_id, "card updated");
        self.handlers.update(update);
        true
    }

    /// Deletes the card: removal first, then the deletion notification.
    pub fn delete(&mut self) {
        info!(card = %self.card.id, lane = %self.card.lane_id, "card deleted");
        self.handlers.remove(&self.card.lane_id, &self.card.id);
        self.handlers.deleted(&self.card.id, &self.card.lane_id);
    }

    /// Deletes the card in response to `event`, which then stops before
    /// reaching the board.
    pub fn remove_card(&mut self, event: &mut ClickEvent) {
        self.delete();
        event.stop_propagation();
    }

    /// Handles a click using the regions of the last render.
    pub fn handle_click(&mut self, event: &mut ClickEvent) -> ClickOutcome {
        let position = event.position();
        match self.regions.hit(position) {
            CardHit::Delete if self.shows_delete() => {
                self.remove_card(event);
                ClickOutcome::Deleted
            }
            CardHit::Body if self.options.custom_layout.is_some() => {
                self.custom_layout_click(position)
            }
            CardHit::Update if !self.session.is_idle() => {
                self.commit_edit();
                ClickOutcome::Committed
            }
            CardHit::Cancel if !self.session.is_idle() => {
                self.cancel_edit();
                ClickOutcome::Cancelled
            }
            CardHit::Field(EditTarget::Allotted) if self.is_editing(EditTarget::Allotted) => {
                let [allotted, _] = self.regions.time_inputs();
                let field = if allotted.contains(position) {
                    CardField::Allotted
                } else {
                    CardField::Spent
                };
                self.focus_field(field);
                ClickOutcome::InputFocused(field)
            }
            CardHit::Field(target) => {
                if self.begin_edit(target) {
                    ClickOutcome::EditStarted(target)
                } else {
                    ClickOutcome::Ignored
                }
            }
            _ => ClickOutcome::Ignored,
        }
    }

    fn custom_layout_click(&mut self, position: Position) -> ClickOutcome {
        let body = Block::default().borders(Borders::ALL).inner(self.regions.area);
        match self.options.custom_layout.as_mut() {
            Some(layout) => {
                let outcome = layout.handle_click(&self.card, position, body, &mut self.handlers);
                debug!(card = %self.card.id, ?outcome, "custom layout click");
                outcome
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Types `ch` into the focused input and stages the result.
    pub fn input_char(&mut self, ch: char) -> bool {
        let Some(input) = self.inputs.get_mut(self.focused_input) else {
            return false;
        };
        let value = input.insert_char(ch).to_string();
        self.session.stage(input.field(), value)
    }

    /// Deletes before the cursor of the focused input and stages the result.
    pub fn backspace(&mut self) -> bool {
        let Some(input) = self.inputs.get_mut(self.focused_input) else {
            return false;
        };
        let field = input.field();
        match input.backspace() {
            Some(value) => {
                let value = value.to_string();
                self.session.stage(field, value)
            }
            None => false,
        }
    }

    /// Moves the cursor of the focused input left.
    pub fn move_cursor_left(&mut self) {
        if let Some(input) = self.inputs.get_mut(self.focused_input) {
            input.move_left();
        }
    }

    /// Moves the cursor of the focused input right.
    pub fn move_cursor_right(&mut self) {
        if let Some(input) = self.inputs.get_mut(self.focused_input) {
            input.move_right();
        }
    }

    /// Moves focus to the next input of the session, wrapping around.
    pub fn focus_next_input(&mut self) {
        if !self.inputs.is_empty() {
            self.focused_input = (self.focused_input + 1) % self.inputs.len();
        }
    }

    fn focus_field(&mut self, field: CardField) {
        if let Some(index) = self.inputs.iter().position(|input| input.field() == field) {
            self.focused_input = index;
        }
    }

    /// Replaces the card record.
    ///
    /// The session survives unless the new record is read-only; a later
    /// commit reads this record.
    pub fn set_card(&mut self, card: Card) {
        if !card.editable {
            self.reset_session();
        }
        self.card = card;
    }

    fn reset_session(&mut self) {
        self.session = EditSession::Idle;
        self.inputs.clear();
        self.focused_input = 0;
    }

    /// Renders the card and records its hit regions.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, selected: bool) {
        if area.width < 4 || area.height < 3 {
            self.regions = CardRegions::default();
            return;
        }

        let editing = self.is_any_editing();
        let mut regions = CardRegions::compute(area, editing, self.shows_delete());

        let border_color = match (editing, selected) {
            (true, _) => Color::Yellow,
            (false, true) => Color::Cyan,
            (false, false) => Color::DarkGray,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(layout) = &self.options.custom_layout {
            layout.render(&self.card, &self.options, inner, buf);
            regions.title = Rect::default();
            regions.time = Rect::default();
            regions.description = Rect::default();
        } else {
            self.render_header(&regions, buf, selected);
            self.render_description(&regions, buf);
            render_tags(&self.card.tags, self.options.tag_style, regions.tags, buf);
            render_buttons(&regions, buf);
        }

        if let Some(delete) = regions.delete {
            render_delete_button(delete, buf);
        }
        self.regions = regions;
    }

    fn render_header(&self, regions: &CardRegions, buf: &mut Buffer, selected: bool) {
        if self.is_editing(EditTarget::Title) {
            self.render_input(CardField::Title, regions.title, buf);
        } else {
            let style = if selected {
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };
            let title = self.card.title.as_deref().unwrap_or_default();
            let width = regions.title.width.saturating_sub(1) as usize;
            Span::styled(truncate_string(title, width), style).render(regions.title, buf);
        }

        if self.is_editing(EditTarget::Allotted) {
            let [allotted, spent] = regions.time_inputs();
            self.render_input(CardField::Allotted, allotted, buf);
            buf.set_string(
                allotted.right(),
                allotted.y,
                "/",
                Style::default().fg(Color::DarkGray),
            );
            self.render_input(CardField::Spent, spent, buf);
        } else if let Some(summary) = self.card.time_summary() {
            let summary = truncate_string(&summary, regions.time.width as usize);
            Paragraph::new(Span::styled(summary, self.time_style()))
                .alignment(Alignment::Right)
                .render(regions.time, buf);
        }
    }

    fn time_style(&self) -> Style {
        let left = duration::time_left(self.card.allotted.as_deref(), self.card.spent.as_deref());
        match left {
            Some(Ok(minutes)) if minutes < 0 => Style::default().fg(Color::Red),
            Some(Ok(minutes)) if minutes > 0 => Style::default().fg(Color::Green),
            _ => Style::default().fg(Color::Gray),
        }
    }

    fn render_description(&self, regions: &CardRegions, buf: &mut Buffer) {
        if self.is_editing(EditTarget::Description) {
            self.render_input(CardField::Description, regions.description, buf);
        } else if let Some(description) = self.card.description.as_deref() {
            let text = truncate_string(description, regions.description.width as usize);
            Span::styled(text, Style::default().fg(Color::DarkGray))
                .render(regions.description, buf);
        }
    }

    fn render_input(&self, field: CardField, area: Rect, buf: &mut Buffer) {
        if let Some(index) = self.inputs.iter().position(|input| input.field() == field) {
            self.inputs[index].render(area, buf, index == self.focused_input);
        }
    }
}

impl fmt::Debug for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardView")
            .field("card", &self.card)
            .field("options", &self.options)
            .field("session", &self.session)
            .field("focused_input", &self.focused_input)
            .finish_non_exhaustive()
    }
}

/// Picks the widest button labels that fit in a footer of `width` columns.
fn button_labels(width: u16) -> Option<(&'static str, &'static str)> {
    [
        (UPDATE_LABEL, CANCEL_LABEL),
        (SHORT_UPDATE_LABEL, SHORT_CANCEL_LABEL),
    ]
    .into_iter()
    .find(|&(update, cancel)| label_width(update) + 1 + label_width(cancel) <= width)
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.chars().count()).unwrap_or(u16::MAX)
}

fn render_buttons(regions: &CardRegions, buf: &mut Buffer) {
    let label = |area: Rect, full: &'static str, short: &'static str| {
        if area.width >= label_width(full) { full } else { short }
    };

    if let Some(update) = regions.update {
        let style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let text = label(update, UPDATE_LABEL, SHORT_UPDATE_LABEL);
        buf.set_stringn(update.x, update.y, text, update.width as usize, style);
    }
    if let Some(cancel) = regions.cancel {
        let style = Style::default().fg(Color::Gray);
        let text = label(cancel, CANCEL_LABEL, SHORT_CANCEL_LABEL);
        buf.set_stringn(cancel.x, cancel.y, text, cancel.width as usize, style);
    }
}

const fn placeholder(field: CardField) -> &'static str {
    match field {
        CardField::Title => "Title",
        CardField::Description => "Description",
        CardField::Allotted => "Time allotted",
        CardField::Spent => "Time spent",
    }
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use lanecard_protocol::{CardId, CardUpdate, LaneId, Tag};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Remove(LaneId, CardId),
        Deleted(CardId, LaneId),
        Update(CardUpdate),
    }

    type Calls = Rc<RefCell<Vec<Call>>>;

    fn recording_handlers(calls: &Calls) -> CardHandlers {
        let removed = Rc::clone(calls);
        let deleted = Rc::clone(calls);
        let updated = Rc::clone(calls);
        CardHandlers::new()
            .on_remove(move |lane, card| {
                removed
                    .borrow_mut()
                    .push(Call::Remove(lane.clone(), card.clone()));
            })
            .on_delete(move |card, lane| {
                deleted
                    .borrow_mut()
                    .push(Call::Deleted(card.clone(), lane.clone()));
            })
            .on_update(move |update| updated.borrow_mut().push(Call::Update(update)))
    }

    fn sample_card(editable: bool) -> Card {
        Card::new("c1", "lane-1")
            .with_title("Write specs")
            .with_description("Document requirements")
            .with_time("60min", "25min")
            .with_tags([Tag::new("docs")])
            .with_editable(editable)
    }

    fn view(editable: bool) -> (CardView, Calls) {
        let calls = Calls::default();
        let view = CardView::new(
            sample_card(editable),
            CardOptions::default(),
            recording_handlers(&calls),
        );
        (view, calls)
    }

    fn rendered(mut view: CardView) -> CardView {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, false);
        view
    }

    fn click(view: &mut CardView, column: u16, row: u16) -> (ClickOutcome, ClickEvent) {
        let mut event = ClickEvent::new(column, row);
        let outcome = view.handle_click(&mut event);
        (outcome, event)
    }

    struct Plain;

    impl CardLayout for Plain {
        fn render(&self, card: &Card, _options: &CardOptions, area: Rect, buf: &mut Buffer) {
            buf.set_string(area.x, area.y, card.id.as_str(), Style::default());
        }
    }

    /// Marks the card done when its first body row is clicked.
    struct Checklist;

    impl CardLayout for Checklist {
        fn render(&self, card: &Card, options: &CardOptions, area: Rect, buf: &mut Buffer) {
            let title = card.title.as_deref().unwrap_or_default();
            buf.set_string(area.x, area.y, format!("[ ] {title}"), Style::default());
            let tags = Rect { y: area.y + 1, height: 1, ..area };
            render_tags(&card.tags, options.tag_style, tags, buf);
        }

        fn handle_click(
            &mut self,
            card: &Card,
            position: Position,
            area: Rect,
            handlers: &mut CardHandlers,
        ) -> ClickOutcome {
            if !card.editable || position.y != area.y {
                return ClickOutcome::Ignored;
            }
            let mut update = card.to_update();
            update.title = Some(format!("done: {}", card.title.as_deref().unwrap_or_default()));
            handlers.update(update);
            ClickOutcome::Committed
        }
    }

    fn checklist_view(editable: bool) -> (CardView, Calls) {
        let calls = Calls::default();
        let view = CardView::new(
            sample_card(editable),
            CardOptions::default()
                .with_tag_style(Style::default().fg(Color::Red))
                .with_custom_layout(Checklist),
            recording_handlers(&calls),
        );
        (rendered(view), calls)
    }

    #[test]
    fn begin_edit_requires_editable() {
        let (mut view, _) = view(false);
        for target in EditTarget::all() {
            assert!(!view.begin_edit(target));
            assert!(!view.is_editing(target));
        }
        assert!(view.session().is_idle());
    }

    #[test]
    fn only_one_target_is_edited() {
        let (mut view, _) = view(true);
        for target in EditTarget::all() {
            assert!(view.begin_edit(target));
            for other in EditTarget::all() {
                assert_eq!(view.is_editing(other), other == target);
            }
        }
    }

    #[test]
    fn begin_edit_named() {
        let (mut view, _) = view(true);
        assert!(!view.begin_edit_named(""));
        assert!(!view.begin_edit_named("spent"));
        assert!(view.session().is_idle());

        assert!(view.begin_edit_named("description"));
        assert!(view.is_editing(EditTarget::Description));
    }

    #[test]
    fn rebeginning_same_target_keeps_staged_values() {
        let (mut view, _) = view(true);
        view.begin_edit(EditTarget::Title);
        view.stage_value(CardField::Title, "Draft");

        view.begin_edit(EditTarget::Title);
        assert_eq!(view.session().staged(CardField::Title), Some("Draft"));

        view.begin_edit(EditTarget::Description);
        view.begin_edit(EditTarget::Title);
        assert_eq!(view.session().staged(CardField::Title), None);
    }

    #[test]
    fn stage_outside_session_is_ignored() {
        let (mut view, _) = view(true);
        assert!(!view.stage_value(CardField::Title, "x"));

        view.begin_edit(EditTarget::Title);
        assert!(!view.stage_value(CardField::Spent, "5min"));
        assert_eq!(view.session(), &EditSession::Title { title: None });
    }

    #[test]
    fn cancel_drops_staged_values_without_callback() {
        let (mut view, calls) = view(true);
        view.begin_edit(EditTarget::Allotted);
        view.stage_value(CardField::Allotted, "90min");

        view.cancel_edit();

        assert!(view.session().is_idle());
        assert!(view.inputs().is_empty());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn commit_allotted_carries_spent() {
        let (mut view, calls) = view(true);
        view.begin_edit(EditTarget::Allotted);
        view.stage_value(CardField::Allotted, "90min");
        view.stage_value(CardField::Spent, "30min");

        assert!(view.commit_edit());
        assert!(view.session().is_idle());

        let card = sample_card(true);
        let mut expected = card.to_update();
        expected.allotted = Some("90min".to_string());
        expected.spent = Some("30min".to_string());
        assert_eq!(*calls.borrow(), vec![Call::Update(expected)]);
    }

    #[test]
    fn commit_title_changes_only_title() {
        let (mut view, calls) = view(true);
        view.begin_edit(EditTarget::Title);
        view.stage_value(CardField::Title, "Renamed");
        view.commit_edit();

        let mut expected = sample_card(true).to_update();
        expected.title = Some("Renamed".to_string());
        assert_eq!(*calls.borrow(), vec![Call::Update(expected)]);
    }

    #[test]
    fn commit_when_idle_does_nothing() {
        let (mut view, calls) = view(true);
        assert!(!view.commit_edit());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn commit_drops_inputs() {
        let (mut view, calls) = view(true);
        view.begin_edit(EditTarget::Description);
        assert_eq!(view.focused_field(), Some(CardField::Description));

        view.commit_edit();

        assert!(view.session().is_idle());
        assert!(view.focused_field().is_none());
        // Nothing staged, so the record goes back unchanged
        assert_eq!(
            *calls.borrow(),
            vec![Call::Update(sample_card(true).to_update())]
        );
    }

    #[test]
    fn delete_calls_remove_then_on_delete_and_stops_propagation() {
        let (mut view, calls) = view(true);
        let mut event = ClickEvent::new(0, 0);

        view.remove_card(&mut event);

        assert!(event.is_propagation_stopped());
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::Remove(LaneId::new("lane-1"), CardId::new("c1")),
                Call::Deleted(CardId::new("c1"), LaneId::new("lane-1")),
            ]
        );
    }

    #[test]
    fn typing_stages_every_change() {
        let (mut view, _) = view(true);
        view.begin_edit(EditTarget::Title);

        view.input_char('!');
        assert_eq!(view.session().staged(CardField::Title), Some("Write specs!"));

        view.backspace();
        view.backspace();
        assert_eq!(view.session().staged(CardField::Title), Some("Write spec"));
    }

    #[test]
    fn typing_while_idle_is_ignored() {
        let (mut view, _) = view(true);
        assert!(!view.input_char('x'));
        assert!(!view.backspace());
    }

    #[test]
    fn tab_cycles_allotted_inputs() {
        let (mut view, _) = view(true);
        view.begin_edit(EditTarget::Allotted);
        assert_eq!(view.focused_field(), Some(CardField::Allotted));

        view.focus_next_input();
        assert_eq!(view.focused_field(), Some(CardField::Spent));
        view.input_char('0');
        assert_eq!(view.session().staged(CardField::Spent), Some("0"));
        assert_eq!(view.session().staged(CardField::Allotted), None);

        view.focus_next_input();
        assert_eq!(view.focused_field(), Some(CardField::Allotted));
    }

    #[test]
    fn only_title_input_starts_with_current_value() {
        let (mut view, _) = view(true);

        view.begin_edit(EditTarget::Title);
        assert_eq!(view.inputs()[0].value(), "Write specs");

        view.begin_edit(EditTarget::Description);
        assert_eq!(view.inputs()[0].value(), "");
        assert_eq!(view.inputs()[0].placeholder(), "Document requirements");

        view.begin_edit(EditTarget::Allotted);
        let values: Vec<_> = view.inputs().iter().map(EditableLabel::value).collect();
        let placeholders: Vec<_> = view.inputs().iter().map(EditableLabel::placeholder).collect();
        assert_eq!(values, ["", ""]);
        assert_eq!(placeholders, ["60min", "25min"]);
    }

    #[test]
    fn empty_fields_use_label_placeholders() {
        let calls = Calls::default();
        let card = Card::new("c2", "lane-1").with_editable(true);
        let mut view = CardView::new(card, CardOptions::default(), recording_handlers(&calls));

        view.begin_edit(EditTarget::Title);
        assert_eq!(view.inputs()[0].placeholder(), "Title");
        view.begin_edit(EditTarget::Allotted);
        let placeholders: Vec<_> = view.inputs().iter().map(EditableLabel::placeholder).collect();
        assert_eq!(placeholders, ["Time allotted", "Time spent"]);
    }

    #[test]
    fn typing_replaces_time_values() {
        let (mut view, calls) = view(true);
        view.begin_edit(EditTarget::Allotted);
        for ch in "90min".chars() {
            view.input_char(ch);
        }
        view.focus_next_input();
        for ch in "30min".chars() {
            view.input_char(ch);
        }
        assert!(view.commit_edit());

        let mut expected = sample_card(true).to_update();
        expected.allotted = Some("90min".to_string());
        expected.spent = Some("30min".to_string());
        assert_eq!(*calls.borrow(), vec![Call::Update(expected)]);
    }

    #[test]
    fn untouched_time_input_keeps_current_value() {
        let (mut view, calls) = view(true);
        view.begin_edit(EditTarget::Allotted);
        view.focus_next_input();
        for ch in "45min".chars() {
            view.input_char(ch);
        }
        view.commit_edit();

        let calls = calls.borrow();
        let Call::Update(update) = &calls[0] else {
            panic!("expected an update, got {calls:?}");
        };
        assert_eq!(update.allotted.as_deref(), Some("60min"));
        assert_eq!(update.spent.as_deref(), Some("45min"));
    }

    #[test]
    fn set_card_keeps_session_and_commit_reads_new_record() {
        let (mut view, calls) = view(true);
        view.begin_edit(EditTarget::Title);
        view.stage_value(CardField::Title, "Renamed");

        let newer = sample_card(true).with_description("Changed elsewhere");
        view.set_card(newer.clone());
        assert!(view.is_editing(EditTarget::Title));

        view.commit_edit();
        let mut expected = newer.to_update();
        expected.title = Some("Renamed".to_string());
        assert_eq!(*calls.borrow(), vec![Call::Update(expected)]);
    }

    #[test]
    fn set_card_read_only_resets_session() {
        let (mut view, _) = view(true);
        view.begin_edit(EditTarget::Title);
        view.set_card(sample_card(false));
        assert!(view.session().is_idle());
    }

    #[test]
    fn regions_layout() {
        let regions = CardRegions::compute(Rect::new(0, 0, 40, 5), true, true);
        assert_eq!(regions.title, Rect::new(1, 1, 21, 1));
        assert_eq!(regions.time, Rect::new(22, 1, 17, 1));
        assert_eq!(regions.description, Rect::new(1, 2, 38, 1));
        assert_eq!(regions.update, Some(Rect::new(22, 3, 8, 1)));
        assert_eq!(regions.cancel, Some(Rect::new(31, 3, 8, 1)));
        assert_eq!(regions.delete, Some(Rect::new(36, 0, 3, 1)));
    }

    #[test]
    fn hit_resolution() {
        let regions = CardRegions::compute(Rect::new(0, 0, 40, 5), false, true);
        assert_eq!(regions.hit(Position::new(2, 1)), CardHit::Field(EditTarget::Title));
        assert_eq!(regions.hit(Position::new(30, 1)), CardHit::Field(EditTarget::Allotted));
        assert_eq!(regions.hit(Position::new(5, 2)), CardHit::Field(EditTarget::Description));
        assert_eq!(regions.hit(Position::new(37, 0)), CardHit::Delete);
        assert_eq!(regions.hit(Position::new(5, 3)), CardHit::Body);
        assert_eq!(regions.hit(Position::new(0, 0)), CardHit::Body);
        assert_eq!(regions.hit(Position::new(40, 0)), CardHit::Outside);
        assert_eq!(regions.update, None);
    }

    #[test]
    fn click_on_field_starts_editing() {
        let (view, _) = view(true);
        let mut view = rendered(view);

        let (outcome, event) = click(&mut view, 2, 1);
        assert_eq!(outcome, ClickOutcome::EditStarted(EditTarget::Title));
        assert!(view.is_editing(EditTarget::Title));
        assert!(!event.is_propagation_stopped());
    }

    #[test]
    fn clicks_never_edit_read_only_cards() {
        let (view, calls) = view(false);
        let mut view = rendered(view);

        for row in 0..5 {
            for column in 0..40 {
                click(&mut view, column, row);
                assert!(view.session().is_idle());
            }
        }
        assert!(calls.borrow().is_empty());
        assert_eq!(view.regions().delete, None);
    }

    #[test]
    fn click_update_and_cancel_buttons() {
        let (view, calls) = view(true);
        let mut view = rendered(view);
        click(&mut view, 2, 1);
        view.input_char('?');

        // Buttons appear on the next render
        let mut view = rendered(view);
        let (outcome, _) = click(&mut view, 24, 3);
        assert_eq!(outcome, ClickOutcome::Committed);
        assert_eq!(calls.borrow().len(), 1);

        click(&mut view, 5, 2);
        let mut view = rendered(view);
        let (outcome, _) = click(&mut view, 33, 3);
        assert_eq!(outcome, ClickOutcome::Cancelled);
        assert!(view.session().is_idle());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn click_on_time_inputs_moves_focus() {
        let (view, _) = view(true);
        let mut view = rendered(view);
        click(&mut view, 30, 1);
        assert!(view.is_editing(EditTarget::Allotted));

        let mut view = rendered(view);
        let [allotted, spent] = view.regions().time_inputs();
        let (outcome, _) = click(&mut view, spent.x, spent.y);
        assert_eq!(outcome, ClickOutcome::InputFocused(CardField::Spent));
        assert_eq!(view.focused_field(), Some(CardField::Spent));

        click(&mut view, allotted.x, allotted.y);
        assert_eq!(view.focused_field(), Some(CardField::Allotted));
    }

    #[test]
    fn click_delete_stops_propagation() {
        let (view, calls) = view(true);
        let mut view = rendered(view);

        let (outcome, event) = click(&mut view, 37, 0);
        assert_eq!(outcome, ClickOutcome::Deleted);
        assert!(event.is_propagation_stopped());
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn hidden_delete_icon_is_not_clickable() {
        let calls = Calls::default();
        let view = CardView::new(
            sample_card(true),
            CardOptions::default().with_hide_delete_icon(true),
            recording_handlers(&calls),
        );
        let mut view = rendered(view);

        let (outcome, event) = click(&mut view, 37, 0);
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(!event.is_propagation_stopped());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn custom_layout_disables_field_editing() {
        let view = CardView::new(
            sample_card(true),
            CardOptions::default().with_custom_layout(Plain),
            CardHandlers::new(),
        );
        let mut view = rendered(view);

        let (outcome, _) = click(&mut view, 2, 1);
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(!view.begin_edit(EditTarget::Title));
        assert!(view.regions().delete.is_some());
    }

    #[test]
    fn custom_layout_commits_through_handlers() {
        let (mut view, calls) = checklist_view(true);

        let (outcome, event) = click(&mut view, 3, 1);
        assert_eq!(outcome, ClickOutcome::Committed);
        assert!(!event.is_propagation_stopped());
        assert!(view.session().is_idle());

        let mut expected = sample_card(true).to_update();
        expected.title = Some("done: Write specs".to_string());
        assert_eq!(*calls.borrow(), vec![Call::Update(expected)]);
    }

    #[test]
    fn custom_layout_decides_which_clicks_matter() {
        let (mut view, calls) = checklist_view(true);
        let (outcome, _) = click(&mut view, 3, 2);
        assert_eq!(outcome, ClickOutcome::Ignored);

        let (mut read_only, read_only_calls) = checklist_view(false);
        let (outcome, _) = click(&mut read_only, 3, 1);
        assert_eq!(outcome, ClickOutcome::Ignored);

        assert!(calls.borrow().is_empty());
        assert!(read_only_calls.borrow().is_empty());
    }

    #[test]
    fn custom_layout_keeps_delete_button() {
        let (mut view, calls) = checklist_view(true);
        let (outcome, event) = click(&mut view, 37, 0);
        assert_eq!(outcome, ClickOutcome::Deleted);
        assert!(event.is_propagation_stopped());
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn custom_layout_receives_options() {
        let (mut view, _) = checklist_view(true);
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, false);

        assert!(buffer_to_string(&buf).contains("[ ] Write specs"));
        // The tag chip on the second body row picks up the tag style
        assert_eq!(buf[(2, 2)].fg, Color::Red);
    }

    #[test]
    fn narrow_card_uses_short_buttons() {
        let regions = CardRegions::compute(Rect::new(0, 0, 12, 5), true, false);
        assert_eq!(regions.update, Some(Rect::new(4, 3, 3, 1)));
        assert_eq!(regions.cancel, Some(Rect::new(8, 3, 3, 1)));

        let regions = CardRegions::compute(Rect::new(0, 0, 8, 5), true, false);
        assert_eq!(regions.update, None);
    }

    #[test]
    fn narrow_card_buttons_resolve_the_edit() {
        let (mut view, calls) = view(true);
        let area = Rect::new(0, 0, 12, 5);
        let mut buf = Buffer::empty(area);
        view.begin_edit(EditTarget::Description);
        view.render(area, &mut buf, false);

        assert!(crate::test_utils::row_text(&buf, 3).contains("[✓] [✗]"));

        let (outcome, _) = click(&mut view, 5, 3);
        assert_eq!(outcome, ClickOutcome::Committed);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn render_shows_fields() {
        let (mut view, _) = view(true);
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, true);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Write specs"));
        assert!(content.contains("Left: 35 min"));
        assert!(content.contains("Document requirements"));
        assert!(content.contains(" docs "));
        assert!(content.contains("[x]"));
        assert!(!content.contains("[Update]"));
    }

    #[test]
    fn render_custom_layout() {
        let mut view = CardView::new(
            sample_card(false),
            CardOptions::default().with_custom_layout(Plain),
            CardHandlers::new(),
        );
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, false);

        let content = buffer_to_string(&buf);
        assert!(content.contains("c1"));
        assert!(!content.contains("Write specs"));
    }

    #[test]
    fn render_tiny_area_clears_regions() {
        let (view, _) = view(true);
        let mut view = rendered(view);
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf, false);
        assert_eq!(view.regions(), &CardRegions::default());
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("Hello, World!", 10), "Hello, ...");
        assert_eq!(truncate_string("Hello", 5), "Hello");
        assert_eq!(truncate_string("Hello", 3), "Hel");
    }
}
