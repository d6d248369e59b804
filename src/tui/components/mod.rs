//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing board name and status
//! - `LaneView`: One column of the board, with cursor and selection
//! - `NotePane`: Preview of the cursor item's note
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `DialogState`: Text entry and yes/no confirmation overlay
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (function parameters), not by
//! reading `App` themselves. Navigation state (active lane, cursors,
//! selection) lives in `App` only; the widgets are rebuilt every frame.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! LaneView::new(lane, active, app.cursor(i), selected).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! lane_view.render(frame, area); // reads cursor from somewhere
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── lane.rs          (Single lane renderer)
//! ├── note_pane.rs     (Note preview)
//! └── dialog/          (Modal overlay with text field)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod dialog;
pub mod lane;
pub mod note_pane;
pub use dialog::{Dialog, DialogEvent, DialogKind, DialogState};
pub use lane::LaneView;
pub use note_pane::NotePane;
