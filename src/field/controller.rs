//! Field controller
//!
//! Binds the validator to an input field and a feedback element. The
//! controller owns both collaborators, so there is no ambient lookup of
//! elements: whoever builds it decides what it drives.

use super::keys::{Key, KeyDecision, KeyEvent, PasteDecision};
use crate::config::FeedbackConfig;
use crate::core::models::Verdict;
use crate::core::ports::{FeedbackSink, InputField};

/// Live validation for a single CPF input
#[derive(Debug)]
pub struct FieldController<I, F> {
    input: I,
    feedback: F,
    messages: FeedbackConfig,
}

impl<I: InputField, F: FeedbackSink> FieldController<I, F> {
    /// Create a controller for `input`, reporting through `feedback`
    pub const fn new(input: I, feedback: F, messages: FeedbackConfig) -> Self {
        Self {
            input,
            feedback,
            messages,
        }
    }

    /// The controlled input field
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the input field, e.g. to reset it
    pub const fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The feedback element
    pub const fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Mutable access to the feedback element
    pub const fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Release the collaborators
    pub fn into_parts(self) -> (I, F) {
        (self.input, self.feedback)
    }

    /// React to a change of the field's value
    ///
    /// A blank field clears the feedback. Anything else is validated and the
    /// matching message is shown. Returns the verdict displayed, if any.
    pub fn on_input(&mut self) -> Option<Verdict> {
        let value = self.input.value();
        if value.trim().is_empty() {
            self.feedback.clear();
            return None;
        }

        let verdict = Verdict::of(&value);
        let message = match verdict {
            Verdict::Valid => &self.messages.valid_message,
            Verdict::Invalid => &self.messages.invalid_message,
        };
        self.feedback.show(verdict, message);
        Some(verdict)
    }

    /// Decide whether a keystroke may reach the field
    ///
    /// Printable non-digits are blocked unless they are part of a Ctrl or
    /// Meta shortcut. Editing and navigation keys always pass.
    pub fn on_keypress(&self, event: KeyEvent) -> KeyDecision {
        match event.key {
            Key::Char(c) if !c.is_ascii_digit() && !event.is_shortcut() => {
                log::debug!("blocked keystroke {c:?}");
                KeyDecision::Block
            },
            _ => KeyDecision::Allow,
        }
    }

    /// Filter a keystroke and, if allowed, apply it to the field
    ///
    /// Digits are appended and Backspace removes the last character; both
    /// trigger [`on_input`](Self::on_input). Shortcuts and navigation keys
    /// pass the filter but do not edit the value.
    pub fn type_key(&mut self, event: KeyEvent) -> KeyDecision {
        let decision = self.on_keypress(event);
        if decision == KeyDecision::Block || event.is_shortcut() {
            return decision;
        }

        match event.key {
            Key::Char(c) => {
                let mut buf = [0u8; 4];
                self.input.append(c.encode_utf8(&mut buf));
                self.on_input();
            },
            Key::Backspace => {
                self.input.backspace();
                self.on_input();
            },
            _ => {},
        }
        decision
    }

    /// React to text pasted into the field
    ///
    /// Only digit-only text (including empty text) is inserted. Accepted
    /// text re-runs validation.
    pub fn on_paste(&mut self, text: &str) -> PasteDecision {
        if !text.chars().all(|c| c.is_ascii_digit()) {
            log::debug!("rejected paste {text:?}");
            return PasteDecision::Reject;
        }

        self.input.append(text);
        self.on_input();
        PasteDecision::Allow
    }
}
