//! Tahseen - an Arabic prose enhancer for the terminal
//!
//! This library provides the core functionality for submitting Arabic prose
//! to the Gemini API and presenting three rewritten variants (corrected,
//! improved, literary) side by side in a terminal user interface.

pub mod enhance;
pub mod ui;
