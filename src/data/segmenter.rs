// ============================================================
// Layer 4 — Sentence Segmenter
// ============================================================
// Splits cleaned page text into an ordered list of sentences.
//
// A break happens at a single whitespace character that directly
// follows a terminator ('.' or '?'), unless one of the configured
// exceptions says the terminator belongs to an abbreviation:
//
//   DottedAbbreviation  "U.S. Army"      word . word . <space>
//   TitleAbbreviation   "Dr. Smith"      Upper lower . <space>
//   SingleInitial       "John F. Kennedy"  lone Upper . <space>
//   Listed              "approx. 40"     a literal abbreviation
//
// Exceptions are data, not hard-coded patterns, so a caller can
// tune the rule set and each rule can be tested on its own.
//
// Reference: Rust Book §8 (Vectors), §13 (Iterators)

/// A reason not to break after a terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryException {
    /// `\w.\w.` immediately before the whitespace ("U.S.", "e.g.")
    DottedAbbreviation,
    /// `[A-Z][a-z].` immediately before the whitespace ("Dr.", "St.")
    TitleAbbreviation,
    /// A single capital letter and a dot, standing alone ("F.")
    SingleInitial,
    /// Words that always end in a dot but never end a sentence.
    /// Compared case-insensitively, dot included ("approx.").
    Listed(Vec<String>),
}

impl BoundaryException {
    /// `before` holds the characters preceding the whitespace,
    /// the terminator being the last one.
    fn applies(&self, before: &[char]) -> bool {
        let n = before.len();
        match self {
            BoundaryException::DottedAbbreviation => {
                n >= 4
                    && is_word_char(before[n - 4])
                    && before[n - 3] == '.'
                    && is_word_char(before[n - 2])
            }
            BoundaryException::TitleAbbreviation => {
                n >= 3
                    && before[n - 3].is_ascii_uppercase()
                    && before[n - 2].is_ascii_lowercase()
                    && before[n - 1] == '.'
            }
            BoundaryException::SingleInitial => {
                n >= 2
                    && before[n - 1] == '.'
                    && before[n - 2].is_uppercase()
                    && (n == 2 || !is_word_char(before[n - 3]))
            }
            BoundaryException::Listed(words) => {
                let start = before
                    .iter()
                    .rposition(|c| c.is_whitespace())
                    .map(|i| i + 1)
                    .unwrap_or(0);
                let last_word: String = before[start..].iter().collect();
                words.iter().any(|w| w.eq_ignore_ascii_case(&last_word))
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Terminators and exceptions used by the segmenter.
#[derive(Debug, Clone)]
pub struct SegmenterRules {
    pub terminators: Vec<char>,
    pub exceptions:  Vec<BoundaryException>,
}

impl Default for SegmenterRules {
    fn default() -> Self {
        Self {
            terminators: vec!['.', '?'],
            exceptions:  vec![
                BoundaryException::DottedAbbreviation,
                BoundaryException::TitleAbbreviation,
                BoundaryException::SingleInitial,
            ],
        }
    }
}

pub struct SentenceSegmenter {
    rules: SegmenterRules,
}

impl SentenceSegmenter {
    pub fn new(rules: SegmenterRules) -> Self {
        Self { rules }
    }

    /// Split `text` into trimmed, non-empty sentences in document order.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let plain: Vec<char> = chars.iter().map(|&(_, c)| c).collect();

        let mut sentences = Vec::new();
        let mut start = 0usize;

        for k in 1..chars.len() {
            let (byte_idx, c) = chars[k];
            if !c.is_whitespace() || !self.rules.terminators.contains(&plain[k - 1]) {
                continue;
            }

            let before = &plain[..k];
            if self.rules.exceptions.iter().any(|e| e.applies(before)) {
                continue;
            }

            push_trimmed(&mut sentences, &text[start..byte_idx]);
            start = byte_idx + c.len_utf8();
        }

        push_trimmed(&mut sentences, &text[start..]);

        tracing::debug!("Segmented {} chars into {} sentences", text.len(), sentences.len());
        sentences
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new(SegmenterRules::default())
    }
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_period_and_question_mark() {
        let s = SentenceSegmenter::default();
        assert_eq!(
            s.split("The bell cracked. Why? Nobody knows."),
            vec!["The bell cracked.", "Why?", "Nobody knows."]
        );
    }

    #[test]
    fn test_exclamation_is_not_a_terminator_by_default() {
        let s = SentenceSegmenter::default();
        assert_eq!(s.split("Ring it! Then stop."), vec!["Ring it! Then stop."]);
    }

    #[test]
    fn test_abbreviations_do_not_break() {
        let s = SentenceSegmenter::default();
        assert_eq!(
            s.split("Dr. Smith served in the U.S. Army today. He is happy? Yes."),
            vec!["Dr. Smith served in the U.S. Army today.", "He is happy?", "Yes."]
        );
    }

    #[test]
    fn test_single_initial_is_configurable() {
        let text = "John F. Kennedy was president. He died in 1963.";

        let with_initials = SentenceSegmenter::default();
        assert_eq!(
            with_initials.split(text),
            vec!["John F. Kennedy was president.", "He died in 1963."]
        );

        let without = SentenceSegmenter::new(SegmenterRules {
            terminators: vec!['.', '?'],
            exceptions:  vec![BoundaryException::DottedAbbreviation],
        });
        assert_eq!(
            without.split(text),
            vec!["John F.", "Kennedy was president.", "He died in 1963."]
        );
    }

    #[test]
    fn test_listed_abbreviations() {
        let mut rules = SegmenterRules::default();
        rules.exceptions.push(BoundaryException::Listed(vec!["approx.".to_string()]));
        let s = SentenceSegmenter::new(rules);
        assert_eq!(
            s.split("It weighs approx. 2080 pounds. It is cracked."),
            vec!["It weighs approx. 2080 pounds.", "It is cracked."]
        );
    }

    #[test]
    fn test_newlines_break_and_blank_pieces_dropped() {
        let s = SentenceSegmenter::default();
        assert_eq!(
            s.split("First.\n\n== History ==\nSecond."),
            vec!["First.", "== History ==\nSecond."]
        );
        assert!(s.split("   ").is_empty());
    }
}
