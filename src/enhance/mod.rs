//! # Enhancement Client
//!
//! Everything that talks to the Gemini API lives here:
//!
//! - [`EnhanceClient`] - the configured HTTP client, constructed once at
//!   startup and passed into the submission handler
//! - [`EnhancementResult`] - the three-variant output of one submission
//! - [`EnhanceError`] - normalized failure for transport, parse, and shape
//!   problems
//! - [`mod@prompt`] - the fixed instruction prompt and response schema
//!
//! The contract is a single best-effort call per submission: no retries, no
//! caching, no rate limiting.

pub mod client;
pub mod error;
pub mod prompt;
pub mod result;

pub use client::{EnhanceClient, API_KEY_ENV, DEFAULT_MODEL};
pub use error::EnhanceError;
pub use result::EnhancementResult;
