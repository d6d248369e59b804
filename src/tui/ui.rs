use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Dialog, LaneView, NotePane, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const NOTE_PANE_HEIGHT: u16 = 6;

const BROWSE_HELP: &str =
    "←/→ lane  ↑/↓ item  Space pick up  a add  e rename  n note  d delete  s save  q quit";
const MOVE_HELP: &str = "←/→ carry to lane  ↑/↓ reorder  Space/Esc drop";

/// Draw the whole screen. Reads `App`, never mutates it.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(3), Length(NOTE_PANE_HEIGHT), Length(1)]);
    let [title_area, lanes_area, note_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        tui.board_name.clone(),
        app.status_message.clone(),
        app.dirty,
        app.is_selecting(),
    )
    .render(frame, title_area);

    draw_lanes(frame, lanes_area, app);

    let cursor_item = app
        .active_cursor()
        .and_then(|index| app.board.item(app.active_lane, index).ok());
    NotePane::new(cursor_item).render(frame, note_area);

    let help = if app.is_selecting() { MOVE_HELP } else { BROWSE_HELP };
    frame.render_widget(
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
        help_area,
    );

    if let Some(ref dialog) = tui.dialog {
        Dialog::new(dialog).render(frame, frame.area());
    }
}

fn draw_lanes(frame: &mut Frame, area: Rect, app: &App) {
    let lane_count = app.lane_count() as u32;
    let constraints = (0..lane_count).map(|_| Constraint::Ratio(1, lane_count));
    let areas = Layout::horizontal(constraints).split(area);
    let selected = app.selected();

    for (i, (lane, lane_area)) in app.board.lanes().iter().zip(areas.iter()).enumerate() {
        let selected_here = selected
            .filter(|(selected_lane, _)| *selected_lane == i)
            .map(|(_, index)| index);
        LaneView::new(lane, i == app.active_lane, app.cursor(i), selected_here)
            .render(frame, *lane_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::board::Board;
    use crate::test_support::app_from;
    use crate::tui::components::{DialogKind, DialogState};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_default_board() {
        let app = App::new(Board::default());
        let mut tui = TuiState::new("board.json".to_string());
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("TouKan (board: board.json)"));
        assert!(text.contains("To Do (0)"));
        assert!(text.contains("Doing (0)"));
        assert!(text.contains("Done (0)"));
        assert!(text.contains("No item here."));
        assert!(text.contains("Space pick up"));
    }

    #[test]
    fn test_draw_ui_selecting_shows_move_help() {
        let mut app = app_from(&[&["Buy milk"], &[]]);
        update(&mut app, Action::ToggleSelect);
        let mut tui = TuiState::new("b.json".to_string());
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("MOVING"));
        assert!(text.contains("» Buy milk"));
        assert!(text.contains("carry to lane"));
    }

    #[test]
    fn test_draw_ui_with_dialog() {
        let app = App::new(Board::default());
        let mut tui = TuiState::new("b.json".to_string());
        tui.dialog = Some(DialogState::new(DialogKind::ConfirmQuit { unsaved: false }));
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Quit TouKan?"));
    }
}
