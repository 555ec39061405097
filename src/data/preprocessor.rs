// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Cleans raw page text before it is split into sentences.
//
// Extracted article text often contains:
//   - Non-breaking spaces (U+00A0) and zero-width spaces (U+200B)
//   - Byte order marks (U+FEFF)
//   - Carriage returns (\r) from Windows line endings
//   - Tabs and runs of spaces from layout
//   - Stray control characters
//
// The segmenter breaks on a single whitespace character after a
// terminator, and the tiler compares fragments word by word, so
// every whitespace variant must become a plain space or newline.
//
// Cleaning steps (applied in order):
//   1. Map whitespace variants to ' ', '\r' to '\n'
//   2. Replace remaining control characters with ' '
//   3. Collapse runs of spaces and trim each line
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Normalise raw page text. Newlines are kept so section breaks
    /// still separate sentences.
    pub fn clean(&self, text: &str) -> String {
        // ── Step 1 + 2: character-level normalisation ─────────────────────────
        let mapped: String = text
            .chars()
            .map(|c| match c {
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                '\r' => '\n',
                c if c.is_control() && c != '\n' => ' ',
                c => c,
            })
            .collect();

        // ── Step 3: collapse spaces per line ──────────────────────────────────
        mapped
            .lines()
            .map(|line| line.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
