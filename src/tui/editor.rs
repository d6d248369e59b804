//! # External Note Editor
//!
//! `NoteEditor` backed by a real editor process. The note is written to a
//! uniquely named temp file, the terminal is handed over to the editor
//! (raw mode off, main screen), and the file is read back once the editor
//! exits. Any failure leaves the note alone.

use std::fs;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::process::Command;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, info, warn};

use crate::core::editor::{EditorFailure, NoteEditor};

pub struct ExternalEditor {
    /// Editor command line, e.g. `vim` or `emacs -nw`.
    command: String,
}

impl ExternalEditor {
    pub fn new(command: String) -> Self {
        Self { command }
    }

    fn build_command(&self, file: &Path) -> Command {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().unwrap_or(crate::core::config::DEFAULT_EDITOR);
        let mut command = Command::new(program);
        command.args(parts).arg(file);
        command
    }

    /// Run the editor on `file` and wait for it.
    fn run(&self, file: &Path) -> Result<(), EditorFailure> {
        info!("Launching editor `{}` on {}", self.command, file.display());
        let status = self
            .build_command(file)
            .status()
            .map_err(EditorFailure::Spawn)?;
        if status.success() {
            Ok(())
        } else {
            Err(EditorFailure::Exit(status.code()))
        }
    }
}

impl NoteEditor for ExternalEditor {
    fn edit_text(&mut self, initial: &str) -> Result<String, EditorFailure> {
        let file = NoteFile::create(initial)?;

        let result = {
            let _suspended = TerminalSuspendGuard::new();
            self.run(file.path())
        };
        result?;

        let text = fs::read_to_string(file.path()).map_err(EditorFailure::Read)?;
        debug!("Editor returned {} bytes", text.len());
        Ok(text)
    }
}

/// Temp file holding the note while the editor owns it. Removed on drop.
struct NoteFile {
    path: PathBuf,
}

impl NoteFile {
    fn create(initial: &str) -> Result<Self, EditorFailure> {
        let path = std::env::temp_dir().join(format!("toukan-note-{}.md", uuid::Uuid::new_v4()));
        fs::write(&path, initial).map_err(EditorFailure::Write)?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for NoteFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("Failed to remove note file {}: {}", self.path.display(), e);
        }
    }
}

/// Hands the terminal back to a child process and takes it back on drop.
struct TerminalSuspendGuard;

impl TerminalSuspendGuard {
    fn new() -> Self {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
        if let Err(e) = execute!(stdout(), LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {}", e);
        }
        Self
    }
}

impl Drop for TerminalSuspendGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), EnterAlternateScreen);
        let _ = enable_raw_mode();
    }
}
