//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! shows dialogs and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm key ─▶ TuiEvent ─▶ dispatch() ─▶ Action ─▶ update() ─▶ Effect
//!                                 │                                  │
//!                          opens/feeds a dialog        redraw / editor / save / quit
//! ```
//!
//! Delete, add, rename and quit go through a dialog first; the core only
//! ever sees confirmed commands.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after an event. Idle polls
//! block for up to 250ms.

mod component;
mod components;
pub mod editor;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::Path;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::editor::run_note_edit;
use crate::core::snapshot;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{DialogEvent, DialogKind, DialogState};
use crate::tui::editor::ExternalEditor;
use crate::tui::event::{TuiEvent, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// File name of the open board, for the title bar.
    pub board_name: String,
    /// Open dialog overlay (None = hidden)
    pub dialog: Option<DialogState>,
    /// Whether quitting writes the board, so the quit prompt can skip the
    /// unsaved-changes warning.
    pub save_on_quit: bool,
}

impl TuiState {
    pub fn new(board_name: String) -> Self {
        Self {
            board_name,
            dialog: None,
            save_on_quit: true,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let board = snapshot::load_or_default(&config.board_path, &config.default_lanes);
    let mut app = App::new(board);
    let board_name = config
        .board_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.board_path.display().to_string());
    let mut tui = TuiState::new(board_name);
    tui.save_on_quit = config.save_on_quit;
    let mut editor = ExternalEditor::new(config.editor.clone());

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let event = match poll_event_timeout(IDLE_POLL) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => break Err(e),
        };
        needs_redraw = true;

        let Some(action) = dispatch(&app, &mut tui, event) else {
            continue;
        };

        let mut effect = update(&mut app, action);
        // An editor round-trip feeds its result back through update().
        if let Effect::EditNote {
            lane,
            index,
            ref initial,
        } = effect
        {
            let initial = initial.clone();
            effect = run_note_edit(&mut app, &mut editor, lane, index, &initial);
            if let Err(e) = terminal.clear() {
                break Err(e);
            }
        }

        match effect {
            Effect::Quit => break Ok(()),
            // Failures land in the status line; the loop keeps running.
            Effect::Save => {
                let _ = save_board(&mut app, &config.board_path);
            }
            Effect::Redraw(lanes) => debug!("Lanes changed: {:?}", lanes),
            Effect::None | Effect::EditNote { .. } => {}
        }
    };

    drop(terminal_mode_guard);
    ratatui::restore();

    let saved = save_on_exit(&mut app, &config);
    info!("TouKan shutting down");
    result.and(saved)
}

/// Final save once the terminal is restored. The error is returned so the
/// process exits non-zero instead of dropping the user's edits silently.
fn save_on_exit(app: &mut App, config: &ResolvedConfig) -> std::io::Result<()> {
    if !config.save_on_quit {
        return Ok(());
    }
    save_board(app, &config.board_path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to save board to {}: {}", config.board_path.display(), e),
        )
    })
}

/// Write the board and report the outcome through update().
fn save_board(app: &mut App, path: &Path) -> std::io::Result<()> {
    let result = snapshot::save_to_path(path, &app.board);
    let action = match &result {
        Ok(()) => {
            info!("Board saved to {}", path.display());
            Action::Saved { at: Local::now() }
        }
        Err(e) => {
            warn!("Failed to save board to {}: {}", path.display(), e);
            Action::SaveFailed(e.to_string())
        }
    };
    update(app, action);
    result
}

/// Turn one input event into at most one confirmed core action.
/// Events that only open, edit or close a dialog return `None`.
fn dispatch(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    // Ctrl+C always quits regardless of dialogs
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }

    // When a dialog is open, route all events to it
    if let Some(ref mut dialog) = tui.dialog {
        let dialog_event = dialog.handle_event(&event)?;
        let kind = dialog.kind.clone();
        tui.dialog = None;
        return match dialog_event {
            DialogEvent::Cancelled => None,
            DialogEvent::Confirmed(text) => Some(match kind {
                DialogKind::NewItem => Action::Add(text),
                DialogKind::RenameItem => Action::Edit(text),
                DialogKind::ConfirmDelete { .. } => Action::Delete,
                DialogKind::ConfirmQuit { .. } => Action::Quit,
            }),
        };
    }

    let cursor_title = app
        .active_cursor()
        .and_then(|index| app.board.item(app.active_lane, index).ok())
        .map(|item| item.title.clone());

    match event {
        TuiEvent::Left | TuiEvent::InputChar('h') => Some(Action::Left),
        TuiEvent::Right | TuiEvent::InputChar('l') => Some(Action::Right),
        TuiEvent::Up | TuiEvent::InputChar('k') => Some(Action::Up),
        TuiEvent::Down | TuiEvent::InputChar('j') => Some(Action::Down),
        TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(Action::ToggleSelect),
        // Esc drops a picked-up item before it means quit
        TuiEvent::Escape if app.is_selecting() => Some(Action::ToggleSelect),
        TuiEvent::InputChar('a') => {
            tui.dialog = Some(DialogState::new(DialogKind::NewItem));
            None
        }
        TuiEvent::InputChar('e') => {
            if let Some(title) = cursor_title {
                tui.dialog = Some(DialogState::with_text(DialogKind::RenameItem, &title));
            }
            None
        }
        TuiEvent::InputChar('d') | TuiEvent::Delete => {
            if let Some(title) = cursor_title {
                tui.dialog = Some(DialogState::new(DialogKind::ConfirmDelete { title }));
            }
            None
        }
        TuiEvent::InputChar('n') => Some(Action::EditNote),
        TuiEvent::InputChar('s') => Some(Action::Save),
        TuiEvent::InputChar('q') | TuiEvent::Escape => {
            tui.dialog = Some(DialogState::new(DialogKind::ConfirmQuit {
                unsaved: app.dirty && !tui.save_on_quit,
            }));
            None
        }
        _ => None,
    }
}
