// ============================================================
// Layer 4 — Text Mining Pipeline
// ============================================================
// Everything between a fetched page and a final answer string.
//
//   raw page text
//       │
//       ▼
//   Preprocessor       → normalises whitespace and control chars
//       │
//       ▼
//   SentenceSegmenter  → ordered sentences (abbreviation-aware)
//       │
//       ▼
//   PhraseMatcher      → sentences matching the pattern rules
//       │
//       ▼
//   DateExtractor      → (WHEN only) date substrings
//       │
//       ▼
//   AnswerTiler        → one answer from overlapping n-grams
//
// Each step is a separate module so it can be tested alone.
//
// Reference: Jurafsky & Martin, Speech and Language Processing §14 (Question Answering)

/// Cleans raw page text
pub mod preprocessor;

/// Splits text into sentences with abbreviation exceptions
pub mod segmenter;

/// Pattern rules and declarative rule templates
pub mod rules;

/// Collects sentences matching pattern rules
pub mod matcher;

/// Extracts dates from candidate sentences
pub mod dates;

/// Ranks and tiles candidate n-grams into one answer
pub mod tiler;
