//! Adapter implementations
//!
//! Concrete implementations of the core port traits.
//!
//! - [`terminal`] - In-memory input field and line-based terminal feedback

pub mod terminal;

pub use terminal::{BufferInput, TerminalFeedback};
