//! Input field adapter
//!
//! Wires the validator to a text input: value-change, keystroke and paste
//! events go through [`FieldController`], which filters input and keeps the
//! feedback element in sync.

mod controller;
mod keys;

pub use controller::FieldController;
pub use keys::{Key, KeyDecision, KeyEvent, PasteDecision};
