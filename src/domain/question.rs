// ============================================================
// Layer 3 — Question Domain Type
// ============================================================
// A question is kept in three forms:
//   - the raw line the user typed (echoed into the trace log)
//   - the punctuation-stripped token sequence
//   - the classified QuestionType, read from the first token
//
// Token positions matter to every reformulation routine:
//   token[0] → the question word ("when", "where", ...)
//   token[1] → the auxiliary ("is", "was", "did") or a verb
//   token[2..] → the subject of the question
//
// Example:
//   "Where is The Liberty Bell?"
//   tokens  = ["Where", "is", "The", "Liberty", "Bell"]
//   kind    = QuestionType::Where
//   subject = "The Liberty Bell"
//
// Reference: Rust Book §8 (Strings in Rust)

use std::fmt;

/// The question word that decides which reformulation routine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    When,
    Where,
    What,
    Who,
    /// "exit" typed alone; ends the interactive session
    Exit,
    /// Anything else, including an empty line
    Unknown,
}

impl QuestionType {
    /// Classify a token sequence by its first token (case-insensitive).
    /// "exit" only counts when it is the sole token.
    pub fn classify(tokens: &[String]) -> Self {
        let Some(first) = tokens.first() else {
            return QuestionType::Unknown;
        };

        match first.to_lowercase().as_str() {
            "when"  => QuestionType::When,
            "where" => QuestionType::Where,
            "what"  => QuestionType::What,
            "who"   => QuestionType::Who,
            "exit" if tokens.len() == 1 => QuestionType::Exit,
            _ => QuestionType::Unknown,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            QuestionType::When    => "when",
            QuestionType::Where   => "where",
            QuestionType::What    => "what",
            QuestionType::Who     => "who",
            QuestionType::Exit    => "exit",
            QuestionType::Unknown => "unknown",
        };
        f.write_str(word)
    }
}

/// Punctuation removed from a question before it is tokenised.
const QUESTION_PUNCTUATION: [char; 4] = ['.', '?', '!', ','];

/// One parsed user question.
#[derive(Debug, Clone)]
pub struct Question {
    /// Exactly what the user typed
    pub raw: String,

    /// Whitespace-delimited tokens with sentence punctuation stripped
    pub tokens: Vec<String>,

    /// Type decided by the first token
    pub kind: QuestionType,
}

impl Question {
    /// Strip punctuation, tokenise, and classify a raw question line.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();

        let stripped: String = raw
            .chars()
            .filter(|c| !QUESTION_PUNCTUATION.contains(c))
            .collect();

        let tokens: Vec<String> = stripped
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let kind = QuestionType::classify(&tokens);
        Self { raw, tokens, kind }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The auxiliary/verb slot (token[1]), lowercased.
    pub fn auxiliary(&self) -> Option<String> {
        self.tokens.get(1).map(|t| t.to_lowercase())
    }

    /// True when token[1] is one of `words` (case-insensitive).
    pub fn auxiliary_is(&self, words: &[&str]) -> bool {
        self.auxiliary()
            .map(|aux| words.contains(&aux.as_str()))
            .unwrap_or(false)
    }

    /// The final token, as typed.
    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    /// Tokens `[from..]` joined with single spaces.
    /// Returns an empty string when `from` is past the end.
    pub fn suffix(&self, from: usize) -> String {
        self.tokens.get(from..).map(|t| t.join(" ")).unwrap_or_default()
    }

    /// Tokens `[from..len-1]` joined with single spaces (the suffix
    /// without its final token).
    pub fn suffix_without_last(&self, from: usize) -> String {
        let end = self.tokens.len().saturating_sub(1);
        if from >= end {
            return String::new();
        }
        self.tokens[from..end].join(" ")
    }
}
