// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The question-answering core depends on three seams:
//
//   DocumentRetriever → search a knowledge source, fetch a page
//                       (WikipediaRetriever, CorpusRetriever)
//   LogSink           → the per-session trace log
//                       (TraceLog, MemoryTrace in tests)
//   QuestionAnswerer  → turns one input line into an Outcome
//                       (AskUseCase, stubs in session tests)
//
// Components receive these as `&dyn Trait` so the pipeline
// never reaches for global state.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            thiserror crate documentation

use anyhow::Result;
use thiserror::Error;

use crate::domain::answer::Outcome;
use crate::domain::document::DocumentView;

// ─── RetrievalError ───────────────────────────────────────────────────────────
/// Failures a retriever can report for a single page or search.
///
/// `Ambiguous` is the one the pipeline singles out: the title names a
/// disambiguation page, so the page is skipped and logged.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("'{title}' is ambiguous and may refer to several pages")]
    Ambiguous { title: String },

    #[error("no page titled '{title}'")]
    PageMissing { title: String },

    #[error("knowledge source unreachable: {0}")]
    Transport(String),

    #[error("unexpected response from knowledge source: {0}")]
    Malformed(String),
}

// ─── DocumentRetriever ────────────────────────────────────────────────────────
/// An external knowledge source.
pub trait DocumentRetriever {
    /// Ranked page titles for a search term, best first, at most `limit`.
    fn search(&self, term: &str, limit: usize) -> Result<Vec<String>, RetrievalError>;

    /// Raw text of the page with this title.
    fn fetch(&self, title: &str, view: DocumentView) -> Result<String, RetrievalError>;
}

// ─── LogSink ──────────────────────────────────────────────────────────────────
/// Line-oriented trace of everything the pipeline did for a question.
///
/// Recording never fails from the caller's point of view; a sink that
/// cannot write reports it through `tracing` and carries on.
pub trait LogSink {
    fn record(&self, message: &str);
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// Anything that can resolve one line of user input.
pub trait QuestionAnswerer {
    fn ask(&self, line: &str) -> Result<Outcome>;
}
