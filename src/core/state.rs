//! # Application State
//!
//! Everything the navigation state machine owns. No terminal types here;
//! the TUI reads this to draw and never stores its own copy.
//!
//! ```text
//! App
//! ├── board: Board                 // lanes + items
//! ├── active_lane: usize           // always < board.lane_count()
//! ├── cursors: Vec<Option<usize>>  // per-lane item cursor, None = empty lane
//! ├── mode: Mode                   // Browsing | Selecting
//! ├── status_message: String       // status bar text
//! └── dirty: bool                  // unsaved changes
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::warn;

use crate::core::board::Board;
use crate::core::moves;

/// Whether directional commands move the cursor or the picked-up item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    /// The cursor item of the active lane is picked up.
    Selecting,
}

pub struct App {
    pub board: Board,
    pub active_lane: usize,
    pub mode: Mode,
    pub status_message: String,
    /// True when the board changed since the last save.
    pub dirty: bool,
    cursors: Vec<Option<usize>>,
}

impl App {
    /// Wrap a board. A board without lanes is replaced by the default one,
    /// since the lane cursor needs somewhere to point.
    pub fn new(board: Board) -> Self {
        let board = if board.lane_count() == 0 {
            warn!("Board has no lanes, using the default board");
            Board::default()
        } else {
            board
        };
        let cursors = board
            .lanes()
            .iter()
            .map(|lane| moves::rewrap(0, lane.len()))
            .collect();
        Self {
            board,
            active_lane: 0,
            mode: Mode::Browsing,
            status_message: String::from("Welcome to TouKan!"),
            dirty: false,
            cursors,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.board.lane_count()
    }

    /// Item cursor of `lane`, `None` when the lane is empty or out of range.
    pub fn cursor(&self, lane: usize) -> Option<usize> {
        self.cursors.get(lane).copied().flatten()
    }

    /// Cursor of the active lane.
    pub fn active_cursor(&self) -> Option<usize> {
        self.cursor(self.active_lane)
    }

    pub fn is_selecting(&self) -> bool {
        self.mode == Mode::Selecting
    }

    /// The picked-up item as `(lane, index)`, if any.
    pub fn selected(&self) -> Option<(usize, usize)> {
        if self.is_selecting() {
            self.active_cursor().map(|index| (self.active_lane, index))
        } else {
            None
        }
    }

    pub(crate) fn set_cursor(&mut self, lane: usize, cursor: Option<usize>) {
        if let Some(slot) = self.cursors.get_mut(lane) {
            *slot = cursor;
        }
    }

    /// Re-derive `lane`'s cursor from `index` after the lane changed length.
    pub(crate) fn rewrap_cursor(&mut self, lane: usize, index: usize) {
        let len = self.board.lane_len(lane).unwrap_or(0);
        self.set_cursor(lane, moves::rewrap(index, len));
    }
}
