//! Feedback verdicts
//!
//! What a non-empty field shows after validation.

use serde::{Deserialize, Serialize};

use crate::core::services::is_valid;

/// Validation outcome displayed next to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The field holds a valid CPF
    Valid,
    /// The field holds something that is not a valid CPF
    Invalid,
}

impl Verdict {
    /// Verdict for a candidate string
    #[must_use]
    pub fn of(raw: &str) -> Self {
        if is_valid(raw) { Self::Valid } else { Self::Invalid }
    }

    /// Whether this is [`Verdict::Valid`]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}
