//! Feedback port
//!
//! The message element shown beside the input field.

use crate::core::models::Verdict;

/// Destination for validation feedback
pub trait FeedbackSink {
    /// Show a verdict with its human-readable message
    fn show(&mut self, verdict: Verdict, message: &str);

    /// Remove any feedback currently shown
    fn clear(&mut self);
}
