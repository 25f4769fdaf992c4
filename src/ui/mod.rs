//! # UI Module
//!
//! This module provides the terminal user interface components.
//!
//! ## Components
//!
//! - [`App`] - Application state management (input, loading, result, focus)
//! - [`mod@render`] - Rendering functions for drawing the TUI
//! - [`editor::Editor`] - Multi-line input editor for the source text
//! - [`theme::Theme`] - Semantic color palette
//! - [`config::Config`] - Persisted user configuration
//! - [`mod@clipboard`] - OSC 52 copy support for the result panels
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├─────────────────────────────────────────────────┤
//! │                Input editor                      │
//! ├─────────────────────────────────────────────────┤
//! │              Status / error line                 │
//! ├────────────────┬───────────────┬────────────────┤
//! │   Corrected    │   Improved    │    Literary    │
//! │     panel      │     panel     │      panel     │
//! ├────────────────┴───────────────┴────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//!
//! - Multi-line Arabic text input with cursor tracking
//! - Skeleton placeholders while a request is in flight
//! - Per-panel copy-to-clipboard with a transient confirmation
//! - Focus switching between the editor and panels with Tab

pub mod app;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
