//! Terminal implementations of the field ports
//!
//! [`BufferInput`] holds the field text in memory and [`TerminalFeedback`]
//! prints a line whenever the displayed feedback changes, colored with
//! `colored`. Repeating the message already on screen prints nothing.

use std::io::Write;

use colored::{Color, Colorize};

use crate::config::FeedbackConfig;
use crate::core::models::Verdict;
use crate::core::ports::{FeedbackSink, InputField};

/// An input field backed by an owned string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferInput {
    value: String,
}

impl BufferInput {
    /// Create a field with initial text
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Empty the field
    pub fn reset(&mut self) {
        self.value.clear();
    }
}

impl InputField for BufferInput {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn append(&mut self, text: &str) {
        self.value.push_str(text);
    }
}

/// Feedback written as lines to a terminal or any other writer
#[derive(Debug)]
pub struct TerminalFeedback<W> {
    out: W,
    colors: Option<(Color, Color)>,
    current: Option<(Verdict, String)>,
}

impl<W: Write> TerminalFeedback<W> {
    /// Plain, uncolored feedback
    pub const fn plain(out: W) -> Self {
        Self {
            out,
            colors: None,
            current: None,
        }
    }

    /// Feedback colored according to `config`
    pub fn colored(out: W, config: &FeedbackConfig) -> anyhow::Result<Self> {
        Ok(Self {
            out,
            colors: Some(config.colors()?),
            current: None,
        })
    }

    /// The verdict currently displayed, if any
    pub fn current(&self) -> Option<Verdict> {
        self.current.as_ref().map(|(verdict, _)| *verdict)
    }

    /// Release the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("failed to write feedback: {e}");
        }
    }
}

impl<W: Write> FeedbackSink for TerminalFeedback<W> {
    fn show(&mut self, verdict: Verdict, message: &str) {
        if self.current.as_ref().is_some_and(|(v, m)| *v == verdict && m == message) {
            return;
        }

        let line = match (self.colors, verdict) {
            (Some((valid, _)), Verdict::Valid) => message.color(valid).to_string(),
            (Some((_, invalid)), Verdict::Invalid) => message.color(invalid).to_string(),
            (None, _) => message.to_string(),
        };
        self.write_line(&line);
        self.current = Some((verdict, message.to_string()));
    }

    fn clear(&mut self) {
        if self.current.take().is_some() {
            self.write_line("");
        }
    }
}
