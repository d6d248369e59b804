//! # Note Editing
//!
//! Long-form notes are edited outside the app. The core only knows the
//! `NoteEditor` seam; the terminal adapter provides an implementation that
//! runs `$EDITOR` on a temp file.
//!
//! ```text
//! update(EditNote) → Effect::EditNote { lane, index, initial }
//!        │
//!        ▼
//! NoteEditor::edit_text(initial) → Ok(text) | Err(EditorFailure)
//!        │
//!        ▼
//! update(NoteEdited { lane, index, outcome })
//! ```

use std::fmt;
use std::io;

use log::{debug, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;

/// Why a note edit produced no text. The note is left unchanged.
#[derive(Debug)]
pub enum EditorFailure {
    /// Could not seed the temp file.
    Write(io::Error),
    /// The editor process could not be started.
    Spawn(io::Error),
    /// The editor exited unsuccessfully (`None` when killed by a signal).
    Exit(Option<i32>),
    /// The temp file could not be read back.
    Read(io::Error),
}

impl fmt::Display for EditorFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorFailure::Write(e) => write!(f, "could not write note file: {e}"),
            EditorFailure::Spawn(e) => write!(f, "could not start editor: {e}"),
            EditorFailure::Exit(Some(code)) => write!(f, "editor exited with status {code}"),
            EditorFailure::Exit(None) => write!(f, "editor was terminated"),
            EditorFailure::Read(e) => write!(f, "could not read note file: {e}"),
        }
    }
}

impl std::error::Error for EditorFailure {}

/// Something that can hand text to the user for editing and return the result.
pub trait NoteEditor {
    fn edit_text(&mut self, initial: &str) -> Result<String, EditorFailure>;
}

/// Run one editor round-trip for the item at `(lane, index)` and feed the
/// outcome back through the reducer.
pub fn run_note_edit(
    app: &mut App,
    editor: &mut dyn NoteEditor,
    lane: usize,
    index: usize,
    initial: &str,
) -> Effect {
    debug!("Editing note for lane {lane} item {index}");
    let outcome = editor.edit_text(initial);
    if let Err(ref e) = outcome {
        warn!("Note edit failed: {e}");
    }
    update(app, Action::NoteEdited {
        lane,
        index,
        outcome,
    })
}
