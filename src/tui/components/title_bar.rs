//! # TitleBar Component
//!
//! Top status bar showing which board is open and what the app is doing.
//!
//! ## Conditional Formatting
//!
//! The title text changes based on state:
//!
//! 1. **Moving an item**: `"TouKan (board: .toukan.json) [+] | MOVING | Saved at 10:02:11"`
//! 2. **Status message**: `"TouKan (board: .toukan.json) | Welcome to TouKan!"`
//! 3. **Default**: `"TouKan (board: .toukan.json)"`
//!
//! `[+]` marks unsaved changes, vim style.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `board_name`: file name of the open board
/// - `status_message`: transient status from the core (e.g. "Saved at 10:02:11")
/// - `dirty`: the board has unsaved changes
/// - `moving`: an item is picked up
pub struct TitleBar {
    pub board_name: String,
    pub status_message: String,
    pub dirty: bool,
    pub moving: bool,
}

impl TitleBar {
    pub fn new(board_name: String, status_message: String, dirty: bool, moving: bool) -> Self {
        Self {
            board_name,
            status_message,
            dirty,
            moving,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!("TouKan (board: {})", self.board_name),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.dirty {
            spans.push(Span::styled(" [+]", Style::default().fg(Color::Yellow)));
        }
        if self.moving {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "MOVING",
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_new() {
        let title_bar = TitleBar::new("b.json".to_string(), "Hi".to_string(), true, false);
        assert_eq!(title_bar.board_name, "b.json");
        assert_eq!(title_bar.status_message, "Hi");
        assert!(title_bar.dirty);
        assert!(!title_bar.moving);
    }

    #[test]
    fn test_title_bar_moving_and_dirty() {
        let mut title_bar = TitleBar::new(
            ".toukan.json".to_string(),
            "Saved at 10:02:11".to_string(),
            true,
            true,
        );
        let text = render_text(&mut title_bar);
        assert!(text.contains("TouKan (board: .toukan.json) [+] | MOVING | Saved at 10:02:11"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("b.json".to_string(), String::new(), false, false);
        let text = render_text(&mut title_bar);
        assert!(text.contains("TouKan (board: b.json)"));
        assert!(!text.contains('|'));
        assert!(!text.contains("[+]"));
    }
}
