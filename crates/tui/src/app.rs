//! Main application struct and run loop.
//!
//! The app hosts a single lane of [`CardView`]s. Card callbacks send
//! [`BoardAction`]s over an unbounded channel, which the app drains after
//! every message and applies to its [`AppState`]. Clicks reach the card
//! under the cursor first; unless the card stops the click, the board then
//! handles it by selecting (opening) that card.

use lanecard_config::{CardDefaults, Config};
use lanecard_protocol::{Card, EditTarget, Message};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, warn};

use crate::{
    AppState,
    card::{CardOptions, CardView, ClickEvent, ClickOutcome},
    event::{event_to_message, poll_event},
    handlers::CardHandlers,
    layout::{
        HEADER_HEIGHT, LANE_MAX_WIDTH, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH,
        STATUS_BAR_HEIGHT,
    },
    state::BoardAction,
    terminal::AppTerminal,
    widgets::{card_slots, render_lane, render_status_bar},
};

/// The main application struct.
#[derive(Debug)]
pub struct App {
    state: AppState,
    views: Vec<CardView>,
    card_defaults: CardDefaults,
    actions_tx: UnboundedSender<BoardAction>,
    actions_rx: UnboundedReceiver<BoardAction>,
    should_quit: bool,
    /// Card slots of the last render, for click hit-testing.
    slots: Vec<(usize, Rect)>,
    /// Whether the header was shown in the last render.
    header_visible: bool,
}

impl App {
    /// Creates an application with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanecard_protocol::dummy::dummy_cards;
    /// use lanecard_tui::{App, AppState};
    ///
    /// let app = App::new(AppState::new("planned", "Planned Tasks", dummy_cards()));
    /// assert_eq!(app.views().len(), 6);
    /// ```
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self::with_config(state, &Config::default())
    }

    /// Creates an application whose cards follow `config`.
    ///
    /// Cards stay editable only if the configuration allows editing.
    #[must_use]
    pub fn with_config(mut state: AppState, config: &Config) -> Self {
        let (actions_tx, actions_rx) = unbounded_channel();
        let card_defaults = config.card.clone();

        for card in &mut state.cards {
            card.editable &= card_defaults.editable;
        }
        let views = state
            .cards
            .iter()
            .map(|card| card_view(card.clone(), &card_defaults, &actions_tx))
            .collect();

        Self {
            state,
            views,
            card_defaults,
            actions_tx,
            actions_rx,
            should_quit: false,
            slots: Vec::new(),
            header_visible: true,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the card widgets, in lane order.
    #[must_use]
    pub fn views(&self) -> &[CardView] {
        &self.views
    }

    /// Returns `true` if the selected card is being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.selected_view().is_some_and(CardView::is_any_editing)
    }

    /// Adds a card at the bottom of the lane.
    pub fn add_card(&mut self, mut card: Card) {
        card.editable &= self.card_defaults.editable;
        self.views
            .push(card_view(card.clone(), &self.card_defaults, &self.actions_tx));
        self.state.cards.push(card);
    }

    fn selected_view(&self) -> Option<&CardView> {
        self.state.selected.and_then(|idx| self.views.get(idx))
    }

    fn selected_view_mut(&mut self) -> Option<&mut CardView> {
        self.state.selected.and_then(|idx| self.views.get_mut(idx))
    }

    /// Updates the application based on a message.
    ///
    /// Board actions raised by card callbacks are applied before returning.
    pub fn update(&mut self, msg: Message) {
        let editing = self.is_editing();

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::NavigateUp if !editing => self.state.navigate_up(),
            Message::NavigateDown if !editing => self.state.navigate_down(),
            Message::NavigateUp | Message::NavigateDown => {}
            Message::NavigateLeft => {
                if let Some(view) = self.selected_view_mut() {
                    view.move_cursor_left();
                }
            }
            Message::NavigateRight => {
                if let Some(view) = self.selected_view_mut() {
                    view.move_cursor_right();
                }
            }
            Message::Select if editing => {
                if let Some(view) = self.selected_view_mut() {
                    view.commit_edit();
                }
            }
            Message::Select => self.begin_edit(EditTarget::Title),
            Message::Escape if editing => {
                if let Some(view) = self.selected_view_mut() {
                    view.cancel_edit();
                }
            }
            Message::Escape => self.state.clear_selection(),
            Message::BeginEdit { target } => self.begin_edit(target),
            Message::DeleteCard => {
                if let Some(view) = self.selected_view_mut()
                    && view.shows_delete()
                {
                    view.delete();
                }
            }
            Message::NextInput => {
                if let Some(view) = self.selected_view_mut() {
                    view.focus_next_input();
                }
            }
            Message::Input { ch } => {
                if let Some(view) = self.selected_view_mut() {
                    view.input_char(ch);
                }
            }
            Message::Backspace => {
                if let Some(view) = self.selected_view_mut() {
                    view.backspace();
                }
            }
            Message::ClickAt { column, row } => self.handle_click(column, row),
        }

        self.drain_actions();
    }

    fn begin_edit(&mut self, target: EditTarget) {
        let Some(view) = self.selected_view_mut() else {
            return;
        };
        if !view.begin_edit(target) {
            self.state.set_event("Card is read-only");
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// The card under the click handles it first; unless it stops the
    /// click, the board selects the card.
    fn handle_click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);
        let Some(&(idx, _)) = self.slots.iter().find(|(_, slot)| slot.contains(position)) else {
            return;
        };
        let Some(view) = self.views.get_mut(idx) else {
            return;
        };

        let mut event = ClickEvent::new(column, row);
        let outcome = view.handle_click(&mut event);
        debug!(?outcome, card = idx, "card click");

        if event.is_propagation_stopped() {
            return;
        }

        self.state.select(idx);
        if outcome == ClickOutcome::Ignored
            && let Some(card) = self.state.selected_card()
        {
            let event = format!("Opened {}", describe(card));
            self.state.set_event(event);
        }
    }

    /// Applies every pending board action.
    fn drain_actions(&mut self) {
        while let Ok(action) = self.actions_rx.try_recv() {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: BoardAction) {
        match action {
            BoardAction::Remove { lane_id, card_id } => {
                if let Some(idx) = self.state.remove_card(&lane_id, &card_id) {
                    self.views.remove(idx);
                } else {
                    warn!(card = %card_id, lane = %lane_id, "remove for unknown card");
                }
            }
            BoardAction::Deleted { card_id, .. } => {
                self.state.set_event(format!("Deleted card {card_id}"));
            }
            BoardAction::Update(update) => {
                let Some(idx) = self.state.apply_update(update) else {
                    warn!("update for unknown card");
                    return;
                };
                let card = self.state.cards[idx].clone();
                let event = format!("Updated {}", describe(&card));
                self.views[idx].set_card(card);
                self.state.set_event(event);
            }
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below the minimum size a "terminal too small" message is shown; when
    /// the height is tight the header is hidden.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.slots.clear();
            render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let header_height = if show_header { HEADER_HEIGHT } else { 0 };
        let [header_area, body, status_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        if show_header {
            render_header(frame, header_area);
        }

        let editing = self.is_editing();
        let buf = frame.buffer_mut();
        let lane_area = Rect {
            width: body.width.min(LANE_MAX_WIDTH),
            ..body
        };
        let inner = render_lane(
            &self.state.lane_title,
            self.state.cards.len(),
            true,
            lane_area,
            buf,
        );

        self.slots = card_slots(inner, self.views.len(), self.state.selected);
        for &(idx, slot) in &self.slots {
            let selected = self.state.selected == Some(idx);
            self.views[idx].render(slot, buf, selected);
        }

        render_status_bar(editing, self.state.last_event.as_deref(), status_area, buf);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lanecard_protocol::dummy::dummy_cards;
    /// use lanecard_tui::{App, AppState, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(AppState::new("planned", "Planned Tasks", dummy_cards()));
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.is_editing())
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Builds a card widget whose callbacks feed the board action channel.
fn card_view(card: Card, defaults: &CardDefaults, tx: &UnboundedSender<BoardAction>) -> CardView {
    let remove_tx = tx.clone();
    let delete_tx = tx.clone();
    let update_tx = tx.clone();

    let handlers = CardHandlers::new()
        .on_remove(move |lane_id, card_id| {
            send(
                &remove_tx,
                BoardAction::Remove {
                    lane_id: lane_id.clone(),
                    card_id: card_id.clone(),
                },
            );
        })
        .on_delete(move |card_id, lane_id| {
            send(
                &delete_tx,
                BoardAction::Deleted {
                    card_id: card_id.clone(),
                    lane_id: lane_id.clone(),
                },
            );
        })
        .on_update(move |update| send(&update_tx, BoardAction::Update(update)));

    let options = CardOptions::default().with_hide_delete_icon(defaults.hide_delete_icon);
    CardView::new(card, options, handlers)
}

fn send(tx: &UnboundedSender<BoardAction>, action: BoardAction) {
    if tx.send(action).is_err() {
        warn!("board action dropped, receiver closed");
    }
}

fn describe(card: &Card) -> String {
    match card.title.as_deref() {
        Some(title) if !title.is_empty() => format!("\"{title}\""),
        _ => format!("card {}", card.id),
    }
}

/// Renders the header bar with title and edit hint.
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "lanecard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled("Kanban Cards", Style::default().fg(Color::White)),
    ]));
    frame.render_widget(title, title_area);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Click", Style::default().fg(Color::Yellow)),
        Span::styled(" a field to edit it", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(hint, hint_area);
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        y: area.y + vertical_offset,
        height: area.height.saturating_sub(vertical_offset),
        ..area
    };

    frame.render_widget(paragraph, centered_area);
}
