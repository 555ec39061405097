// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A reference document fetched for one question.
// By the time a Document exists, its text has already been
// cleaned and split into sentences by the data layer.
//
// A Document lives only as long as the question that fetched
// it; nothing is cached between questions.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §10 (Derive Macros)

/// Which part of a page the retriever should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentView {
    /// The lead section only. Less noise for WHERE and WHO-is questions.
    Summary,
    /// The full article text.
    Content,
}

impl DocumentView {
    /// True for the lead-section view; retrievers map this onto
    /// their own "intro only" switch.
    pub fn wants_summary(self) -> bool {
        matches!(self, DocumentView::Summary)
    }
}

/// A fetched page, kept as an ordered list of sentences.
#[derive(Debug, Clone)]
pub struct Document {
    /// Page title, as returned by the retriever.
    /// Kept for traceability so the log shows which page
    /// a matched sentence came from
    pub title: String,

    /// Sentences in document order, already cleaned and split.
    /// The matcher walks them in this order, so discovery order
    /// of matches follows the page
    pub sentences: Vec<String>,
}

impl Document {
    /// Create a Document from a title and its sentences.
    /// Uses impl Into<String> so callers can pass &str or String.
    ///
    /// Example:
    ///   let doc = Document::new("Liberty Bell", vec!["The Liberty Bell is ...".into()]);
    pub fn new(title: impl Into<String>, sentences: Vec<String>) -> Self {
        Self {
            title: title.into(),
            sentences,
        }
    }
}
