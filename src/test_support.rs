//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::board::{Board, Item, Lane};
use crate::core::editor::{EditorFailure, NoteEditor};
use crate::core::state::App;

/// Builds a board with lanes titled "Lane 0", "Lane 1", ... holding the given item titles.
pub fn board_from(lanes: &[&[&str]]) -> Board {
    Board::new(
        lanes
            .iter()
            .enumerate()
            .map(|(i, items)| {
                Lane::new(
                    format!("Lane {i}"),
                    items.iter().map(|title| Item::new(*title)).collect(),
                )
            })
            .collect(),
    )
}

/// Creates a test App over `board_from(lanes)`.
pub fn app_from(lanes: &[&[&str]]) -> App {
    App::new(board_from(lanes))
}

/// Item titles of one lane, for compact assertions.
pub fn titles(board: &Board, lane: usize) -> Vec<String> {
    board
        .lane_items(lane)
        .unwrap()
        .iter()
        .map(|item| item.title.clone())
        .collect()
}

/// A `NoteEditor` that records what it was given and replies with a canned result.
pub struct ScriptedEditor {
    reply: Option<Result<String, EditorFailure>>,
    pub seen: Vec<String>,
}

impl ScriptedEditor {
    pub fn returning(text: &str) -> Self {
        Self {
            reply: Some(Ok(text.to_string())),
            seen: Vec::new(),
        }
    }

    pub fn failing(failure: EditorFailure) -> Self {
        Self {
            reply: Some(Err(failure)),
            seen: Vec::new(),
        }
    }
}

impl NoteEditor for ScriptedEditor {
    fn edit_text(&mut self, initial: &str) -> Result<String, EditorFailure> {
        self.seen.push(initial.to_string());
        self.reply.take().unwrap_or(Err(EditorFailure::Exit(None)))
    }
}
