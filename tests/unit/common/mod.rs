//! Shared test fixtures and helpers
//!
//! Known identifiers and recording implementations of the field ports.

use cpfcheck::config::FeedbackConfig;
use cpfcheck::core::models::Verdict;
use cpfcheck::core::ports::{FeedbackSink, InputField};
use cpfcheck::field::FieldController;

/// Identifiers with correct check digits
pub const VALID_CPFS: &[&str] = &[
    "52998224725",
    "12345678909",
    "11144477735",
    "39053344705",
    "98765432100",
    "00000000191",
    "24681357928",
];

/// Something the feedback element was told to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    Shown(Verdict, String),
    Cleared,
}

/// Input field that counts writes
#[derive(Debug, Default)]
pub struct RecordingInput {
    pub value: String,
    pub writes: usize,
}

impl RecordingInput {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            writes: 0,
        }
    }
}

impl InputField for RecordingInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        self.writes += 1;
    }
}

/// Feedback element that records every call
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub events: Vec<FeedbackEvent>,
}

impl RecordingFeedback {
    /// The last verdict shown, unless cleared since
    pub fn visible(&self) -> Option<&FeedbackEvent> {
        match self.events.last() {
            Some(FeedbackEvent::Cleared) | None => None,
            last => last,
        }
    }
}

impl FeedbackSink for RecordingFeedback {
    fn show(&mut self, verdict: Verdict, message: &str) {
        self.events.push(FeedbackEvent::Shown(verdict, message.to_string()));
    }

    fn clear(&mut self) {
        self.events.push(FeedbackEvent::Cleared);
    }
}

/// A controller over recording collaborators with default messages
pub fn recording_field(value: &str) -> FieldController<RecordingInput, RecordingFeedback> {
    FieldController::new(
        RecordingInput::with_value(value),
        RecordingFeedback::default(),
        FeedbackConfig::default(),
    )
}
