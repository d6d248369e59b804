//! # Board Store
//!
//! Owns the lanes and their items. Lane count is fixed at construction;
//! items move between lanes by value, so an item always lives in exactly
//! one `Vec`.
//!
//! ```text
//! Board
//! └── lanes: Vec<Lane>
//!     ├── title: String        // immutable after load
//!     └── items: Vec<Item>
//!         ├── title: String
//!         └── note: String     // may be empty
//! ```
//!
//! Every operation validates its indices before touching anything, so a
//! failed call leaves the board exactly as it was.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::moves;

/// Lane titles used when no snapshot exists.
pub const DEFAULT_LANE_TITLES: [&str; 3] = ["To Do", "Doing", "Done"];

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub note: String,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: String::new(),
        }
    }
}

/// A column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    title: String,
    items: Vec<Item>,
}

impl Lane {
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Invalid lane or item index. Always a caller bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Lane index outside `0..count`.
    Lane { lane: usize, count: usize },
    /// Item index outside the lane's valid range (`len` is the lane length).
    Index { lane: usize, index: usize, len: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Lane { lane, count } => {
                write!(f, "lane {lane} out of range (board has {count} lanes)")
            }
            BoardError::Index { lane, index, len } => {
                write!(f, "item {index} out of range for lane {lane} (length {len})")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    lanes: Vec<Lane>,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_titles(DEFAULT_LANE_TITLES)
    }
}

impl Board {
    /// Build a board from fully populated lanes.
    pub fn new(lanes: Vec<Lane>) -> Self {
        Self { lanes }
    }

    /// Build a board of empty lanes.
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lanes: titles
                .into_iter()
                .map(|title| Lane::new(title, Vec::new()))
                .collect(),
        }
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn lane_title(&self, lane: usize) -> Result<&str, BoardError> {
        self.lane(lane).map(Lane::title)
    }

    /// Borrowed view of a lane's items. Do not hold it across mutations.
    pub fn lane_items(&self, lane: usize) -> Result<&[Item], BoardError> {
        self.lane(lane).map(Lane::items)
    }

    pub fn lane_len(&self, lane: usize) -> Result<usize, BoardError> {
        self.lane(lane).map(Lane::len)
    }

    pub fn item(&self, lane: usize, index: usize) -> Result<&Item, BoardError> {
        let items = &self.lane(lane)?.items;
        items.get(index).ok_or(BoardError::Index {
            lane,
            index,
            len: items.len(),
        })
    }

    pub fn item_mut(&mut self, lane: usize, index: usize) -> Result<&mut Item, BoardError> {
        let items = &mut self.lane_mut(lane)?.items;
        let len = items.len();
        items
            .get_mut(index)
            .ok_or(BoardError::Index { lane, index, len })
    }

    /// Remove the item at `(from_lane, from_index)` and insert it at
    /// `(to_lane, to_index)`.
    ///
    /// Within one lane `to_index` counts positions after the removal, so
    /// `from - 1` and `from + 1` are exact inverses. Across lanes it counts
    /// positions in the destination as it is now (`0..=len`).
    pub fn move_item(
        &mut self,
        from_lane: usize,
        from_index: usize,
        to_lane: usize,
        to_index: usize,
    ) -> Result<(), BoardError> {
        let from_len = self.lane_len(from_lane)?;
        let to_len = self.lane_len(to_lane)?;
        if from_index >= from_len {
            return Err(BoardError::Index {
                lane: from_lane,
                index: from_index,
                len: from_len,
            });
        }

        if from_lane == to_lane {
            // Post-removal length is from_len - 1, so the insertion point must be < from_len.
            if to_index >= from_len {
                return Err(BoardError::Index {
                    lane: to_lane,
                    index: to_index,
                    len: from_len,
                });
            }
            moves::reorder(&mut self.lanes[from_lane].items, from_index, to_index);
            return Ok(());
        }

        if to_index > to_len {
            return Err(BoardError::Index {
                lane: to_lane,
                index: to_index,
                len: to_len,
            });
        }

        let (source, dest) = two_lanes_mut(&mut self.lanes, from_lane, to_lane);
        moves::transfer(&mut source.items, from_index, &mut dest.items, to_index);
        Ok(())
    }

    /// Remove and return the item at `(lane, index)`.
    pub fn delete_item(&mut self, lane: usize, index: usize) -> Result<Item, BoardError> {
        let items = &mut self.lane_mut(lane)?.items;
        if index >= items.len() {
            return Err(BoardError::Index {
                lane,
                index,
                len: items.len(),
            });
        }
        Ok(items.remove(index))
    }

    /// Insert a new item with an empty note at `index` (`0..=len`).
    pub fn add_item(
        &mut self,
        lane: usize,
        index: usize,
        title: impl Into<String>,
    ) -> Result<(), BoardError> {
        let items = &mut self.lane_mut(lane)?.items;
        if index > items.len() {
            return Err(BoardError::Index {
                lane,
                index,
                len: items.len(),
            });
        }
        items.insert(index, Item::new(title));
        Ok(())
    }

    pub fn rename_item(
        &mut self,
        lane: usize,
        index: usize,
        title: impl Into<String>,
    ) -> Result<(), BoardError> {
        self.item_mut(lane, index)?.title = title.into();
        Ok(())
    }

    pub fn set_note(
        &mut self,
        lane: usize,
        index: usize,
        note: impl Into<String>,
    ) -> Result<(), BoardError> {
        self.item_mut(lane, index)?.note = note.into();
        Ok(())
    }

    fn lane(&self, lane: usize) -> Result<&Lane, BoardError> {
        self.lanes.get(lane).ok_or(BoardError::Lane {
            lane,
            count: self.lanes.len(),
        })
    }

    fn lane_mut(&mut self, lane: usize) -> Result<&mut Lane, BoardError> {
        let count = self.lanes.len();
        self.lanes
            .get_mut(lane)
            .ok_or(BoardError::Lane { lane, count })
    }
}

/// Borrow two distinct lanes mutably at once. Callers guarantee `a != b`
/// and that both are in range.
fn two_lanes_mut(lanes: &mut [Lane], a: usize, b: usize) -> (&mut Lane, &mut Lane) {
    if a < b {
        let (left, right) = lanes.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = lanes.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board_from, titles};

    #[test]
    fn test_default_board_has_three_empty_lanes() {
        let board = Board::default();
        assert_eq!(board.lane_count(), 3);
        assert_eq!(board.lane_title(0).unwrap(), "To Do");
        assert_eq!(board.lane_title(1).unwrap(), "Doing");
        assert_eq!(board.lane_title(2).unwrap(), "Done");
        assert!(board.lanes().iter().all(Lane::is_empty));
    }

    #[test]
    fn test_lane_title_out_of_range() {
        let board = Board::default();
        assert_eq!(
            board.lane_title(3),
            Err(BoardError::Lane { lane: 3, count: 3 })
        );
    }

    #[test]
    fn test_add_item_at_end_and_front() {
        let mut board = Board::default();
        board.add_item(0, 0, "B").unwrap();
        board.add_item(0, 1, "C").unwrap();
        board.add_item(0, 0, "A").unwrap();
        assert_eq!(titles(&board, 0), ["A", "B", "C"]);
        assert_eq!(board.item(0, 0).unwrap().note, "");
    }

    #[test]
    fn test_add_item_past_end_fails() {
        let mut board = board_from(&[&["A"]]);
        assert_eq!(
            board.add_item(0, 2, "X"),
            Err(BoardError::Index { lane: 0, index: 2, len: 1 })
        );
        assert_eq!(titles(&board, 0), ["A"]);
    }

    #[test]
    fn test_delete_item_returns_item() {
        let mut board = board_from(&[&["A", "B"]]);
        let removed = board.delete_item(0, 0).unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(titles(&board, 0), ["B"]);
        assert!(board.delete_item(0, 1).is_err());
    }

    #[test]
    fn test_add_then_delete_is_noop_for_every_position() {
        let original = board_from(&[&["A", "B", "C"], &[], &["D"]]);
        for lane in 0..original.lane_count() {
            for index in 0..=original.lane_len(lane).unwrap() {
                let mut board = original.clone();
                board.add_item(lane, index, "new").unwrap();
                board.delete_item(lane, index).unwrap();
                assert_eq!(board, original, "lane {lane} index {index}");
            }
        }
    }

    #[test]
    fn test_same_lane_move_uses_post_removal_index() {
        let mut board = board_from(&[&["A", "B", "C"]]);
        board.move_item(0, 0, 0, 1).unwrap();
        assert_eq!(titles(&board, 0), ["B", "A", "C"]);
        board.move_item(0, 1, 0, 2).unwrap();
        assert_eq!(titles(&board, 0), ["B", "C", "A"]);
    }

    #[test]
    fn test_same_lane_up_then_down_restores_order() {
        let original = board_from(&[&["A", "B", "C", "D"]]);
        for from in 1..4 {
            let mut board = original.clone();
            board.move_item(0, from, 0, from - 1).unwrap();
            board.move_item(0, from - 1, 0, from).unwrap();
            assert_eq!(board, original, "from {from}");
        }
    }

    #[test]
    fn test_same_lane_move_rejects_index_past_post_removal_end() {
        let mut board = board_from(&[&["A", "B"]]);
        assert!(board.move_item(0, 0, 0, 2).is_err());
        assert_eq!(titles(&board, 0), ["A", "B"]);
    }

    #[test]
    fn test_cross_lane_move_into_empty_lane() {
        let mut board = board_from(&[&["A", "B"], &[]]);
        board.move_item(0, 1, 1, 0).unwrap();
        assert_eq!(titles(&board, 0), ["A"]);
        assert_eq!(titles(&board, 1), ["B"]);
    }

    #[test]
    fn test_cross_lane_move_uses_destination_indexing() {
        let mut board = board_from(&[&["A", "B"], &["X", "Y"]]);
        board.move_item(0, 0, 1, 2).unwrap();
        assert_eq!(titles(&board, 0), ["B"]);
        assert_eq!(titles(&board, 1), ["X", "Y", "A"]);
    }

    #[test]
    fn test_cross_lane_move_and_back_restores_board() {
        let original = board_from(&[&["A", "B", "C"], &["X", "Y"]]);
        for from in 0..3 {
            for to in 0..=2 {
                let mut board = original.clone();
                board.move_item(0, from, 1, to).unwrap();
                board.move_item(1, to, 0, from).unwrap();
                assert_eq!(board, original, "from {from} to {to}");
            }
        }
    }

    #[test]
    fn test_cross_lane_move_keeps_note() {
        let mut board = board_from(&[&["A"], &[]]);
        board.set_note(0, 0, "details").unwrap();
        board.move_item(0, 0, 1, 0).unwrap();
        assert_eq!(board.item(1, 0).unwrap().note, "details");
    }

    #[test]
    fn test_invalid_move_leaves_board_untouched() {
        let original = board_from(&[&["A"], &["X"]]);
        let mut board = original.clone();
        assert!(board.move_item(0, 1, 1, 0).is_err());
        assert!(board.move_item(0, 0, 1, 2).is_err());
        assert!(board.move_item(0, 0, 5, 0).is_err());
        assert_eq!(board, original);
    }

    #[test]
    fn test_rename_and_note() {
        let mut board = board_from(&[&["A"]]);
        board.rename_item(0, 0, "Renamed").unwrap();
        board.set_note(0, 0, "line 1\nline 2").unwrap();
        let item = board.item(0, 0).unwrap();
        assert_eq!(item.title, "Renamed");
        assert_eq!(item.note, "line 1\nline 2");
        assert!(board.rename_item(0, 1, "nope").is_err());
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::Index { lane: 1, index: 4, len: 2 };
        assert_eq!(err.to_string(), "item 4 out of range for lane 1 (length 2)");
    }
}
