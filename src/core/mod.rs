//! # Core Application Logic
//!
//! This module contains TouKan's board model and navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board (lanes/items)  │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │  • snapshot (JSON)      │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: `Board`, `Lane`, `Item` and checked mutations
//! - [`moves`]: ordered relocation and the index wrap rule
//! - [`state`]: The `App` struct (board + cursors + mode)
//! - [`action`]: The `Action` enum and `update()`
//! - [`snapshot`]: JSON load/save
//! - [`editor`]: the `NoteEditor` seam
//! - [`config`]: settings resolution

pub mod action;
pub mod board;
pub mod config;
pub mod editor;
pub mod moves;
pub mod snapshot;
pub mod state;
