//! # Board Snapshots
//!
//! The board is persisted as one pretty-printed JSON file:
//!
//! ```text
//! {
//!   "titles": ["To Do", "Doing", "Done"],
//!   "items": [
//!     [{ "title": "Buy milk", "note": "" }],
//!     [],
//!     []
//!   ]
//! }
//! ```
//!
//! Older files written by the Go version of the tool use `Titles`/`Items`
//! keys, plain strings for items and `null` for empty lanes. All of that
//! still loads; saving always writes the form above.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::board::{Board, Item, Lane};

#[derive(Debug)]
pub enum DecodeError {
    /// Not valid JSON, or not the expected shape.
    Json(serde_json::Error),
    /// `titles` and `items` describe a different number of lanes.
    LaneCountMismatch { titles: usize, lanes: usize },
    /// A board needs at least one lane.
    NoLanes,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Json(e) => write!(f, "malformed snapshot: {e}"),
            DecodeError::LaneCountMismatch { titles, lanes } => {
                write!(f, "snapshot has {titles} lane titles but {lanes} item lists")
            }
            DecodeError::NoLanes => write!(f, "snapshot has no lanes"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json(e)
    }
}

/// Serialized form. Field order here is the key order on disk.
#[derive(Serialize)]
struct SnapshotOut<'a> {
    titles: Vec<&'a str>,
    items: Vec<&'a [Item]>,
}

#[derive(Deserialize)]
struct SnapshotIn {
    #[serde(alias = "Titles")]
    titles: Vec<String>,
    #[serde(alias = "Items", default)]
    items: Vec<Option<Vec<StoredItem>>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredItem {
    Full(Item),
    TitleOnly(String),
}

impl From<StoredItem> for Item {
    fn from(stored: StoredItem) -> Self {
        match stored {
            StoredItem::Full(item) => item,
            StoredItem::TitleOnly(title) => Item::new(title),
        }
    }
}

/// Decode a snapshot. Falling back to a default board is the caller's call.
pub fn load(bytes: &[u8]) -> Result<Board, DecodeError> {
    let snapshot: SnapshotIn = serde_json::from_slice(bytes)?;
    if snapshot.titles.len() != snapshot.items.len() {
        return Err(DecodeError::LaneCountMismatch {
            titles: snapshot.titles.len(),
            lanes: snapshot.items.len(),
        });
    }
    if snapshot.titles.is_empty() {
        return Err(DecodeError::NoLanes);
    }

    let lanes = snapshot
        .titles
        .into_iter()
        .zip(snapshot.items)
        .map(|(title, items)| {
            let items = items
                .unwrap_or_default()
                .into_iter()
                .map(Item::from)
                .collect();
            Lane::new(title, items)
        })
        .collect();
    Ok(Board::new(lanes))
}

/// Encode the board as deterministic pretty JSON with a trailing newline.
pub fn save(board: &Board) -> Result<Vec<u8>, serde_json::Error> {
    let snapshot = SnapshotOut {
        titles: board.lanes().iter().map(Lane::title).collect(),
        items: board.lanes().iter().map(Lane::items).collect(),
    };
    let mut bytes = serde_json::to_vec_pretty(&snapshot)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Load the board at `path`, or a board of `default_titles` if the file is
/// missing or cannot be decoded.
pub fn load_or_default(path: &Path, default_titles: &[String]) -> Board {
    let default_board = || {
        if default_titles.is_empty() {
            Board::default()
        } else {
            Board::with_titles(default_titles.iter().cloned())
        }
    };

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No board at {}, starting with the default board", path.display());
            return default_board();
        }
        Err(e) => {
            warn!("Failed to read board {}: {}", path.display(), e);
            return default_board();
        }
    };

    match load(&bytes) {
        Ok(board) => {
            info!(
                "Loaded board from {} ({} lanes)",
                path.display(),
                board.lane_count()
            );
            board
        }
        Err(e) => {
            warn!("Ignoring board {}: {}", path.display(), e);
            default_board()
        }
    }
}

/// Atomically write the board to `path` (via `.tmp` + rename).
pub fn save_to_path(path: &Path, board: &Board) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    // Encode before touching the disk so a failure never replaces the board.
    let bytes = save(board).map_err(io::Error::other)?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)?;
    debug!("Board saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board_from, titles};

    #[test]
    fn test_load_plain_string_items() {
        let board = load(br#"{"titles":["X"],"items":[["a","b"]]}"#).unwrap();
        assert_eq!(board.lane_count(), 1);
        assert_eq!(board.lane_title(0).unwrap(), "X");
        assert_eq!(titles(&board, 0), ["a", "b"]);
        assert_eq!(board.item(0, 1).unwrap().note, "");
    }

    #[test]
    fn test_load_lane_count_mismatch() {
        let err = load(br#"{"titles":["X"],"items":[["a"],["b"]]}"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::LaneCountMismatch { titles: 1, lanes: 2 }
        ));
    }

    #[test]
    fn test_load_missing_items_is_mismatch() {
        let err = load(br#"{"titles":["X","Y"]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::LaneCountMismatch { .. }));
    }

    #[test]
    fn test_load_no_lanes() {
        let err = load(br#"{"titles":[],"items":[]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::NoLanes));
    }

    #[test]
    fn test_load_malformed() {
        assert!(matches!(load(b"not json"), Err(DecodeError::Json(_))));
        assert!(matches!(
            load(br#"{"titles":"X","items":[]}"#),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_load_go_style_keys_and_null_lanes() {
        let json = r#"{
  "Titles": ["To Do", "Doing", "Done"],
  "Items": [["Buy milk"], null, null]
}"#;
        let board = load(json.as_bytes()).unwrap();
        assert_eq!(board.lane_count(), 3);
        assert_eq!(titles(&board, 0), ["Buy milk"]);
        assert!(titles(&board, 1).is_empty());
    }

    #[test]
    fn test_load_items_with_notes() {
        let json = r#"{"titles":["A"],"items":[[{"title":"t","note":"n"},{"title":"u"}]]}"#;
        let board = load(json.as_bytes()).unwrap();
        assert_eq!(board.item(0, 0).unwrap().note, "n");
        assert_eq!(board.item(0, 1).unwrap().note, "");
    }

    #[test]
    fn test_save_is_pretty_and_ordered() {
        let mut board = board_from(&[&["a"], &[]]);
        board.set_note(0, 0, "n").unwrap();
        let text = String::from_utf8(save(&board).unwrap()).unwrap();
        let expected = r#"{
  "titles": [
    "Lane 0",
    "Lane 1"
  ],
  "items": [
    [
      {
        "title": "a",
        "note": "n"
      }
    ],
    []
  ]
}
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_save_then_load_restores_board() {
        let mut board = board_from(&[&["a", "b"], &[], &["c"]]);
        board.set_note(2, 0, "multi\nline").unwrap();
        let restored = load(&save(&board).unwrap()).unwrap();
        assert_eq!(restored, board);
        assert_eq!(save(&restored).unwrap(), save(&board).unwrap());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let board = load_or_default(&dir.path().join("board.json"), &[]);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_load_or_default_uses_configured_titles() {
        let dir = tempfile::tempdir().unwrap();
        let titles = vec!["Backlog".to_string(), "Shipped".to_string()];
        let board = load_or_default(&dir.path().join("board.json"), &titles);
        assert_eq!(board.lane_count(), 2);
        assert_eq!(board.lane_title(1).unwrap(), "Shipped");
    }

    #[test]
    fn test_load_or_default_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, "{ broken").unwrap();
        assert_eq!(load_or_default(&path, &[]), Board::default());
    }

    #[test]
    fn test_save_to_path_creates_parent_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("board.json");
        let board = board_from(&[&["a"], &["b"]]);
        save_to_path(&path, &board).unwrap();
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(load_or_default(&path, &[]), board);
    }

    #[test]
    fn test_failed_save_keeps_existing_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        let board = board_from(&[&["keep me"]]);
        save_to_path(&path, &board).unwrap();

        // A directory in place of the temp file makes the write fail.
        let tmp_path = path.with_extension("tmp");
        fs::create_dir(&tmp_path).unwrap();
        fs::write(tmp_path.join("block"), "x").unwrap();

        assert!(save_to_path(&path, &board_from(&[&[]])).is_err());
        assert_eq!(load_or_default(&path, &[]), board);
    }
}
