//! Input field port
//!
//! The text box a user types a CPF into.

/// A text input whose value the controller can read and replace
pub trait InputField {
    /// Current text in the field
    fn value(&self) -> String;

    /// Replace the text in the field
    fn set_value(&mut self, value: String);

    /// Append text at the end of the field
    fn append(&mut self, text: &str) {
        let mut value = self.value();
        value.push_str(text);
        self.set_value(value);
    }

    /// Remove the last character, if any
    fn backspace(&mut self) {
        let mut value = self.value();
        if value.pop().is_some() {
            self.set_value(value);
        }
    }
}
