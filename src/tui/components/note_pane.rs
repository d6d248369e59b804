//! # Note Pane
//!
//! Read-only preview of the cursor item's note under the lanes. Editing
//! happens in the external editor (`n`).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::board::Item;
use crate::tui::component::Component;

pub struct NotePane<'a> {
    pub item: Option<&'a Item>,
}

impl<'a> NotePane<'a> {
    pub fn new(item: Option<&'a Item>) -> Self {
        Self { item }
    }
}

impl Component for NotePane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let (title, body, style) = match self.item {
            None => (" Note ".to_string(), "No item here.".to_string(), dim),
            Some(item) if item.note.trim().is_empty() => (
                format!(" Note: {} ", item.title),
                "No note yet. Press n to write one.".to_string(),
                dim.add_modifier(Modifier::ITALIC),
            ),
            Some(item) => (
                format!(" Note: {} ", item.title),
                item.note.trim_end().to_string(),
                Style::default(),
            ),
        };

        let paragraph = Paragraph::new(body)
            .block(Block::bordered().title(title).border_style(dim))
            .style(style)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
