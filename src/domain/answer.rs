// ============================================================
// Layer 3 — Answer and Outcome
// ============================================================
// An Answer is the tiled fragment plus an optional prefix that
// rephrases the question as the start of a statement:
//
//   "When was Bill Clinton born?"
//   prefix   = "Bill Clinton was born "
//   fragment = "August 19, 1946"
//   display  = "Bill Clinton was born August 19, 1946"
//
// Outcome is what one line of user input resolves to.
//
// Reference: Rust Book §6 (Enums), std::fmt::Display

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub prefix:   Option<String>,
    pub fragment: String,
}

impl Answer {
    /// An answer that is just the tiled fragment.
    pub fn fragment(fragment: impl Into<String>) -> Self {
        Self { prefix: None, fragment: fragment.into() }
    }

    /// An answer led by a rephrased subject, e.g. "X was born ".
    pub fn prefixed(prefix: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            prefix:   Some(prefix.into()),
            fragment: fragment.into(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            f.write_str(prefix)?;
        }
        f.write_str(&self.fragment)
    }
}

/// Result of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answered(Answer),
    /// Recognised question, nothing found
    NoAnswer,
    /// First token is not a known question word
    Unrecognized,
    /// The user asked to leave
    Exit,
}
