//! # UI Module
//!
//! Terminal presentation of the HENU PS site: static pages plus the mock IDE.
//!
//! ## Components
//!
//! - [`App`] - Route, focus and explorer state around an [`IdeController`](crate::ide::IdeController)
//! - [`mod@input`] - crossterm events to app actions
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`theme`] / [`config`] - Colors and persisted settings
//!
//! ## Layout (IDE route)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ HENU PS  1 HENU PS  2 WORKFLOW  3 BLOG  4 RESOURCES  5 IDE│
//! ├─────────────────────────────────────────────────────────┤
//! │ HENU PS  File  Edit  View  Run                          │
//! ├──────────┬──────────────────────────────┬───────────────┤
//! │          │        Editor                │               │
//! │ Explorer │                              │  Assistant    │
//! │          ├──────────────────────────────┤               │
//! │          │ Terminal | Console | Problems│               │
//! ├──────────┴──────────────────────────────┴───────────────┤
//! │                    Footer                               │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
