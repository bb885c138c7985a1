//! Port definitions for UI collaborators
//!
//! The validator itself needs nothing from its environment. These traits
//! describe the two elements the field controller drives, so any UI can
//! plug in behind them.
//!
//! - [`InputField`] - Text input holding the candidate
//! - [`FeedbackSink`] - Element showing the valid/invalid message

mod feedback;
mod input_field;

pub use feedback::FeedbackSink;
pub use input_field::InputField;
