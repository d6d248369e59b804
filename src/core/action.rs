//! # Actions
//!
//! Everything that can happen on the board becomes an `Action`.
//! User presses → while browsing? That's `Action::Right`.
//! User confirms the "New item" dialog? That's `Action::Add(text)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what to do next.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Modes
//!
//! ```text
//!              ToggleSelect (lane not empty)
//!   Browsing  ───────────────────────────────▶  Selecting
//!      ▲                                            │
//!      └──────── ToggleSelect / Delete / Add ───────┘
//!
//!   Browsing:  ←/→ change lane, ↑/↓ move the item cursor
//!   Selecting: ←/→ carry the item to the next lane, ↑/↓ reorder it
//! ```
//!
//! All index arithmetic wraps (see `moves::wrap_index`).

use chrono::{DateTime, Local};
use log::{debug, error, info};

use crate::core::board::BoardError;
use crate::core::editor::EditorFailure;
use crate::core::moves::wrap_index;
use crate::core::state::{App, Mode};

#[derive(Debug)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    ToggleSelect,
    /// Delete the cursor item (already confirmed by the user).
    Delete,
    /// Insert a new item at the cursor.
    Add(String),
    /// Rename the cursor item.
    Edit(String),
    /// Ask for the cursor item's note to be edited externally.
    EditNote,
    /// Result of the external note editor.
    NoteEdited {
        lane: usize,
        index: usize,
        outcome: Result<String, EditorFailure>,
    },
    Save,
    Saved { at: DateTime<Local> },
    SaveFailed(String),
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// These lanes changed items or cursor. An empty list means only the
    /// status line changed.
    Redraw(Vec<usize>),
    /// Run the note editor for `(lane, index)` seeded with `initial`.
    EditNote {
        lane: usize,
        index: usize,
        initial: String,
    },
    /// Persist the board.
    Save,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (mode {:?}, lane {})", action, app.mode, app.active_lane);
    match action {
        Action::Left => horizontal(app, -1),
        Action::Right => horizontal(app, 1),
        Action::Up => vertical(app, -1),
        Action::Down => vertical(app, 1),
        Action::ToggleSelect => toggle_select(app),
        Action::Delete => delete(app),
        Action::Add(text) => add(app, &text),
        Action::Edit(text) => edit(app, &text),
        Action::EditNote => {
            let lane = app.active_lane;
            let Some(index) = app.active_cursor() else {
                return Effect::None;
            };
            match app.board.item(lane, index) {
                Ok(item) => Effect::EditNote {
                    lane,
                    index,
                    initial: item.note.clone(),
                },
                Err(e) => contract_violation(e),
            }
        }
        Action::NoteEdited {
            lane,
            index,
            outcome,
        } => match outcome {
            Ok(text) => {
                if let Err(e) = app.board.set_note(lane, index, text) {
                    return contract_violation(e);
                }
                app.dirty = true;
                app.status_message = String::from("Note updated");
                Effect::Redraw(vec![lane])
            }
            Err(e) => {
                app.status_message = format!("Note unchanged: {e}");
                Effect::Redraw(Vec::new())
            }
        },
        Action::Save => Effect::Save,
        Action::Saved { at } => {
            app.dirty = false;
            app.status_message = format!("Saved at {}", at.format("%H:%M:%S"));
            Effect::Redraw(Vec::new())
        }
        Action::SaveFailed(reason) => {
            app.status_message = format!("Save failed: {reason}");
            Effect::Redraw(Vec::new())
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

fn horizontal(app: &mut App, delta: isize) -> Effect {
    let from_lane = app.active_lane;
    let Some(to_lane) = wrap_index(from_lane, delta, app.lane_count()) else {
        return Effect::None;
    };

    match app.mode {
        Mode::Browsing => {
            app.active_lane = to_lane;
            lanes_changed(from_lane, to_lane)
        }
        Mode::Selecting => {
            let Some(from_index) = app.active_cursor() else {
                app.mode = Mode::Browsing;
                return Effect::Redraw(vec![from_lane]);
            };
            if to_lane == from_lane {
                return Effect::None;
            }
            let to_index = app.cursor(to_lane).unwrap_or(0);
            if let Err(e) = app.board.move_item(from_lane, from_index, to_lane, to_index) {
                return contract_violation(e);
            }
            app.rewrap_cursor(from_lane, from_index);
            app.set_cursor(to_lane, Some(to_index));
            app.active_lane = to_lane;
            app.dirty = true;
            lanes_changed(from_lane, to_lane)
        }
    }
}

fn vertical(app: &mut App, delta: isize) -> Effect {
    let lane = app.active_lane;
    let Some(from) = app.active_cursor() else {
        return Effect::None;
    };
    let len = app.board.lane_len(lane).unwrap_or(0);
    let Some(to) = wrap_index(from, delta, len) else {
        return Effect::None;
    };

    if app.mode == Mode::Selecting {
        if to == from {
            return Effect::None;
        }
        if let Err(e) = app.board.move_item(lane, from, lane, to) {
            return contract_violation(e);
        }
        app.dirty = true;
    }
    app.set_cursor(lane, Some(to));
    Effect::Redraw(vec![lane])
}

fn toggle_select(app: &mut App) -> Effect {
    if app.active_cursor().is_none() {
        return Effect::None;
    }
    app.mode = match app.mode {
        Mode::Browsing => Mode::Selecting,
        Mode::Selecting => Mode::Browsing,
    };
    Effect::Redraw(vec![app.active_lane])
}

fn delete(app: &mut App) -> Effect {
    let lane = app.active_lane;
    let Some(index) = app.active_cursor() else {
        return Effect::None;
    };
    let removed = match app.board.delete_item(lane, index) {
        Ok(item) => item,
        Err(e) => return contract_violation(e),
    };
    app.mode = Mode::Browsing;
    app.rewrap_cursor(lane, index);
    app.dirty = true;
    app.status_message = format!("Deleted \"{}\"", removed.title);
    Effect::Redraw(vec![lane])
}

fn add(app: &mut App, text: &str) -> Effect {
    let title = text.trim();
    if title.is_empty() {
        return Effect::None;
    }
    let lane = app.active_lane;
    let index = app.active_cursor().unwrap_or(0);
    if let Err(e) = app.board.add_item(lane, index, title) {
        return contract_violation(e);
    }
    app.mode = Mode::Browsing;
    app.rewrap_cursor(lane, index);
    app.dirty = true;
    Effect::Redraw(vec![lane])
}

fn edit(app: &mut App, text: &str) -> Effect {
    let title = text.trim();
    if title.is_empty() {
        return Effect::None;
    }
    let lane = app.active_lane;
    let Some(index) = app.active_cursor() else {
        return Effect::None;
    };
    if let Err(e) = app.board.rename_item(lane, index, title) {
        return contract_violation(e);
    }
    app.dirty = true;
    Effect::Redraw(vec![lane])
}

fn lanes_changed(a: usize, b: usize) -> Effect {
    if a == b {
        Effect::Redraw(vec![a])
    } else {
        Effect::Redraw(vec![a, b])
    }
}

/// The reducer only passes indices derived from its own cursors, so a
/// failure here is a bug: fatal in debug builds, logged and skipped otherwise.
fn contract_violation(err: BoardError) -> Effect {
    error!("Board contract violation: {err}");
    if cfg!(debug_assertions) {
        panic!("board contract violation: {err}");
    }
    Effect::None
}
