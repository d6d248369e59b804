//! # Lane Component
//!
//! One bordered column of the board. Stateless: the cursor and the
//! selection come in as props from `App`, so nothing about navigation is
//! ever stored in a widget.
//!
//! ```text
//! ┌ Doing (2) ──────────┐
//! │  Write report       │   cursor row: reversed (active lane only)
//! │» Buy milk           │   selected item: yellow + marker
//! └─────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::board::Lane;
use crate::tui::component::Component;

const SELECTED_MARKER: &str = "» ";
const PLAIN_MARKER: &str = "  ";
const NOTE_MARKER: &str = " ✎";

pub struct LaneView<'a> {
    pub lane: &'a Lane,
    /// The keyboard is on this lane.
    pub active: bool,
    pub cursor: Option<usize>,
    /// Index of the picked-up item, if it is in this lane.
    pub selected: Option<usize>,
}

impl<'a> LaneView<'a> {
    pub fn new(lane: &'a Lane, active: bool, cursor: Option<usize>, selected: Option<usize>) -> Self {
        Self {
            lane,
            active,
            cursor,
            selected,
        }
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title_style = if self.active {
            border_style.add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Block::bordered()
            .border_type(if self.active {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ({}) ", self.lane.title(), self.lane.len()),
                title_style,
            ))
    }

    fn row(&self, index: usize, width: usize) -> ListItem<'a> {
        let Some(item) = self.lane.items().get(index) else {
            return ListItem::new("");
        };
        let is_selected = self.selected == Some(index);
        let marker = if is_selected { SELECTED_MARKER } else { PLAIN_MARKER };
        let suffix = if item.note.trim().is_empty() { "" } else { NOTE_MARKER };
        let room = width.saturating_sub(marker.width() + suffix.width());
        let title = truncate_to_width(&item.title, room);

        let style = if is_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        ListItem::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(title, style),
            Span::styled(suffix, Style::default().fg(Color::DarkGray)),
        ]))
    }
}

impl Component for LaneView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = (0..self.lane.len())
            .map(|i| self.row(i, inner_width))
            .collect();

        let highlight = if self.active {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };

        let list = List::new(items)
            .block(self.block())
            .highlight_style(highlight);

        let mut list_state = ListState::default();
        list_state.select(self.cursor);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

/// Cut `text` to at most `max_width` display columns, ending in "…" when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Item;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn lane() -> Lane {
        let mut noted = Item::new("Write report");
        noted.note = "outline first".to_string();
        Lane::new("Doing", vec![Item::new("Buy milk"), noted])
    }

    fn render(view: &mut LaneView) -> Terminal<TestBackend> {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_render_title_and_items() {
        let lane = lane();
        let mut view = LaneView::new(&lane, false, Some(0), None);
        let terminal = render(&mut view);
        assert!(row_text(&terminal, 0).contains("Doing (2)"));
        assert!(row_text(&terminal, 1).contains("Buy milk"));
        assert!(row_text(&terminal, 2).contains("Write report ✎"));
    }

    #[test]
    fn test_render_selected_marker() {
        let lane = lane();
        let mut view = LaneView::new(&lane, true, Some(1), Some(1));
        let terminal = render(&mut view);
        assert!(row_text(&terminal, 2).contains("» Write report"));
        assert!(!row_text(&terminal, 1).contains('»'));
    }

    #[test]
    fn test_active_cursor_row_is_reversed() {
        let lane = lane();
        let mut view = LaneView::new(&lane, true, Some(0), None);
        let terminal = render(&mut view);
        let cell = &terminal.backend().buffer()[(3, 1)];
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a long title", 6), "a lon…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
