//! # Dialog Component
//!
//! Modal overlay for everything that needs the user's say-so before it
//! reaches the core: new item, rename, delete confirmation, quit
//! confirmation.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DialogState` lives in `TuiState` while the dialog is open
//! - `Dialog` is created each frame with borrowed state
//!
//! The dialog never touches the board. It returns a `DialogEvent` and the
//! event loop turns a confirmation into an `Action`.

mod text_field;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub use text_field::TextField;

/// What the dialog is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    NewItem,
    RenameItem,
    ConfirmDelete { title: String },
    ConfirmQuit { unsaved: bool },
}

impl DialogKind {
    fn wants_text(&self) -> bool {
        matches!(self, DialogKind::NewItem | DialogKind::RenameItem)
    }

    fn title(&self) -> &'static str {
        match self {
            DialogKind::NewItem => " New item ",
            DialogKind::RenameItem => " Rename item ",
            DialogKind::ConfirmDelete { .. } => " Delete ",
            DialogKind::ConfirmQuit { .. } => " Quit ",
        }
    }
}

/// Events emitted by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// OK pressed. Carries the entered text (empty for yes/no dialogs).
    Confirmed(String),
    Cancelled,
}

/// Persistent state for an open dialog.
pub struct DialogState {
    pub kind: DialogKind,
    pub field: TextField,
}

impl DialogState {
    pub fn new(kind: DialogKind) -> Self {
        Self::with_text(kind, "")
    }

    /// Open a text dialog pre-filled with `initial`.
    pub fn with_text(kind: DialogKind, initial: &str) -> Self {
        Self {
            kind,
            field: TextField::new(initial),
        }
    }
}

impl EventHandler for DialogState {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent> {
        match event {
            TuiEvent::Escape => Some(DialogEvent::Cancelled),
            TuiEvent::Submit => {
                if self.kind.wants_text() {
                    // Blank titles are not worth an item; keep the dialog open.
                    (!self.field.buffer.trim().is_empty())
                        .then(|| DialogEvent::Confirmed(self.field.buffer.clone()))
                } else {
                    Some(DialogEvent::Confirmed(String::new()))
                }
            }
            _ if self.kind.wants_text() => {
                self.field.handle_event(event);
                None
            }
            TuiEvent::InputChar('y' | 'Y') => Some(DialogEvent::Confirmed(String::new())),
            TuiEvent::InputChar('n' | 'N') => Some(DialogEvent::Cancelled),
            _ => None,
        }
    }
}

/// Transient render wrapper for the dialog overlay.
pub struct Dialog<'a> {
    state: &'a DialogState,
}

impl<'a> Dialog<'a> {
    pub fn new(state: &'a DialogState) -> Self {
        Self { state }
    }

    fn prompt(&self) -> String {
        match &self.state.kind {
            DialogKind::ConfirmDelete { title } => format!("Delete \"{title}\"?"),
            DialogKind::ConfirmQuit { unsaved: true } => {
                "Quit TouKan? The board has unsaved changes.".to_string()
            }
            DialogKind::ConfirmQuit { unsaved: false } => "Quit TouKan?".to_string(),
            DialogKind::NewItem | DialogKind::RenameItem => String::new(),
        }
    }
}

impl Component for Dialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(area, 54, 5);
        frame.render_widget(Clear, overlay);

        let help_text = if self.state.kind.wants_text() {
            " Enter OK  Esc Cancel "
        } else {
            " y/Enter Yes  n/Esc No "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(self.state.kind.title())
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        if self.state.kind.wants_text() {
            let [field_area] = Layout::vertical([Constraint::Length(1)])
                .flex(ratatui::layout::Flex::Center)
                .areas(inner);
            let (visible, cursor_col) = self.state.field.visible(field_area.width as usize);
            let input = Paragraph::new(visible).style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::UNDERLINED),
            );
            frame.render_widget(input, field_area);
            frame.set_cursor_position((field_area.x + cursor_col, field_area.y));
        } else {
            let prompt = Paragraph::new(self.prompt())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(prompt, inner);
        }
    }
}

/// A rect of fixed size centered in `outer`, shrunk to fit.
fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}
