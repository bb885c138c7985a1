//! Keyboard and clipboard events seen by the field

/// A key pressed while the field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character after the cursor
    Delete,
    /// Submit
    Enter,
    /// Move focus
    Tab,
    /// Cursor movement (arrows, Home, End)
    Navigation,
    /// Any other non-printing key
    Other,
}

/// A keystroke with its modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key itself
    pub key: Key,
    /// Whether Ctrl was held
    pub ctrl: bool,
    /// Whether Meta (Cmd/Super) was held
    pub meta: bool,
}

impl KeyEvent {
    /// A key pressed without modifiers
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    /// A printable character pressed without modifiers
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }

    /// The same key with Ctrl held
    #[must_use]
    pub const fn with_ctrl(self) -> Self {
        Self { ctrl: true, ..self }
    }

    /// The same key with Meta held
    #[must_use]
    pub const fn with_meta(self) -> Self {
        Self { meta: true, ..self }
    }

    /// Whether Ctrl or Meta is held, making this a shortcut rather than text
    #[must_use]
    pub const fn is_shortcut(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Whether a keystroke reaches the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDecision {
    /// Let the key through
    Allow,
    /// Swallow the key
    Block,
}

/// Whether pasted text reaches the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteDecision {
    /// Text was inserted
    Allow,
    /// Text contained non-digits and was dropped
    Reject,
}
