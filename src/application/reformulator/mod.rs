// ============================================================
// Layer 2 — Query Reformulator
// ============================================================
// Rewrites a classified question into a search term and an
// ordered list of pattern rules, then mines the fetched page.
//
// Shared shape for every question type:
//   1. Search term = tokens after the question word(s)
//   2. Fetch ONE page for that term (summary or full content)
//   3. Relaxation loop, starting at the subject (token 2):
//        a. instantiate the rule table for tokens[i..] and
//           append to the rule list
//        b. run the PhraseMatcher with the whole list
//        c. stop at the first step with any match, or when the
//           tokens run out
//   4. (WHEN) extract dates, then tile into one answer
//
// The per-type routines live in their own files:
//   when_query.rs, where_query.rs, what_query.rs, who_query.rs
//
// Reference: Rust Book §10.3 (Lifetimes)

pub mod rule_tables;

mod when_query;
mod where_query;
mod what_query;
mod who_query;

use anyhow::Result;

use crate::data::{
    dates::DateExtractor,
    matcher::PhraseMatcher,
    preprocessor::Preprocessor,
    rules::{Bindings, RuleTemplate},
    segmenter::{SegmenterRules, SentenceSegmenter},
    tiler::AnswerTiler,
};
use crate::domain::document::{Document, DocumentView};
use crate::domain::question::Question;
use crate::domain::traits::{DocumentRetriever, LogSink, RetrievalError};

/// Token index where the subject of a question starts
/// ("When was | Bill Clinton born").
pub const SUBJECT_START: usize = 2;

/// Only the top search result is fetched; more pages add noise.
pub const SEARCH_RESULTS: usize = 1;

/// Behaviour switches for the reformulation routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReformulationPolicy {
    /// WHEN-was: when neither pass yields a date, throw away the
    /// undated sentence matches instead of answering with them.
    pub discard_undated_was: bool,
}

impl Default for ReformulationPolicy {
    fn default() -> Self {
        Self { discard_undated_was: true }
    }
}

/// The text-mining components, built once per session.
pub struct Toolkit {
    /// Whitespace/control-character cleanup of fetched text
    pub preprocessor: Preprocessor,

    /// Fetched text → sentences, with the abbreviation table
    pub segmenter:    SentenceSegmenter,

    pub matcher:      PhraseMatcher,

    /// Six date rules, compiled once instead of per question
    pub dates:        DateExtractor,

    pub tiler:        AnswerTiler,
}

impl Toolkit {
    pub fn new(segmenter_rules: SegmenterRules) -> Result<Self> {
        Ok(Self {
            preprocessor: Preprocessor::new(),
            segmenter:    SentenceSegmenter::new(segmenter_rules),
            matcher:      PhraseMatcher::new(),
            dates:        DateExtractor::new()?,
            tiler:        AnswerTiler::new()?,
        })
    }
}

/// Everything one question's reformulation needs, borrowed.
pub struct Reformulator<'a> {
    /// Live Wikipedia or the offline corpus; never known here
    retriever: &'a dyn DocumentRetriever,

    /// The session trace; every phase writes to it
    log:       &'a dyn LogSink,

    tools:     &'a Toolkit,
    policy:    ReformulationPolicy,
}

impl<'a> Reformulator<'a> {
    pub fn new(
        retriever: &'a dyn DocumentRetriever,
        log:       &'a dyn LogSink,
        tools:     &'a Toolkit,
        policy:    ReformulationPolicy,
    ) -> Self {
        Self { retriever, log, tools, policy }
    }

    /// True when the question has a subject after its question word
    /// and auxiliary; logs when it does not.
    fn has_subject(&self, question: &Question) -> bool {
        let ok = question.len() > SUBJECT_START;
        if !ok {
            self.log.record("Question has no subject to search for.");
        }
        ok
    }

    /// Search for `term`, fetch the top page and split it into sentences.
    ///
    /// Every retrieval failure is logged and degrades to fewer (or no)
    /// documents; an ambiguous title is logged as a disambiguation error.
    fn gather(&self, term: &str, view: DocumentView) -> Vec<Document> {
        if term.trim().is_empty() {
            self.log.record("Empty search term, nothing to search for.");
            return Vec::new();
        }

        self.log.record(&format!("Search results of: '{term}'"));
        let titles = match self.retriever.search(term, SEARCH_RESULTS) {
            Ok(titles) => titles,
            Err(e) => {
                tracing::warn!("Search for '{}' failed: {}", term, e);
                self.log.record(&format!("Search failed for '{term}': {e}"));
                return Vec::new();
            }
        };
        self.log.record(&titles.join(","));

        let mut docs = Vec::new();
        for title in titles {
            match self.retriever.fetch(&title, view) {
                Ok(raw) => {
                    let text      = self.tools.preprocessor.clean(&raw);
                    let sentences = self.tools.segmenter.split(&text);
                    tracing::debug!("Loaded '{}' ({} sentences)", title, sentences.len());
                    docs.push(Document::new(title, sentences));
                }
                Err(RetrievalError::Ambiguous { .. }) => {
                    self.log.record(&format!("Disambiguation error in search for '{title}'"));
                }
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", title, e);
                    self.log.record(&format!("Could not load '{title}': {e}"));
                }
            }
        }
        docs
    }

    /// The relaxation loop: widen the rule list one token at a time
    /// from `start` until something matches or the tokens run out.
    fn relax(
        &self,
        question: &Question,
        docs:     &[Document],
        table:    &[RuleTemplate],
        start:    usize,
    ) -> Result<Vec<String>> {
        let mut rules   = Vec::new();
        let mut matches = Vec::new();
        let mut from    = start;

        while from < question.len() && matches.is_empty() {
            let bindings = Bindings::at(question, from);
            for template in table {
                rules.push(template.instantiate(&bindings)?);
            }
            matches = self.tools.matcher.find_all(&rules, docs, self.log);
            from += 1;
        }

        Ok(matches)
    }

    fn extract_dates(&self, candidates: &[String]) -> Vec<String> {
        self.tools.dates.extract(candidates, self.log)
    }

    fn tile(&self, candidates: &[String]) -> Option<String> {
        self.tools.tiler.tile(candidates, self.log)
    }
}

/// "<parts joined by spaces> ": the lead-in of a rephrased answer.
/// Empty parts are skipped so a missing subject leaves no stray space.
fn statement(parts: &[&str]) -> String {
    let words: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
    format!("{} ", words.join(" "))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::infra::corpus::{CorpusPage, CorpusRetriever};
    use crate::infra::trace_log::MemoryTrace;

    pub(crate) fn toolkit() -> Toolkit {
        Toolkit::new(SegmenterRules::default()).unwrap()
    }

    fn sentences(lines: &[&str]) -> Vec<Document> {
        vec![Document::new("Fixture", lines.iter().map(|s| s.to_string()).collect())]
    }

    #[test]
    fn test_relaxation_uses_first_shorter_suffix_that_matches() {
        let corpus = CorpusRetriever::from_pages(Vec::new());
        let log    = MemoryTrace::new();
        let tools  = toolkit();
        let r      = Reformulator::new(&corpus, &log, &tools, ReformulationPolicy::default());

        let q    = Question::parse("Who is Old Liberty Bell?");
        let docs = sentences(&[
            "The Liberty Bell today is a symbol of freedom.",
            "The Bell tower is tall.",
        ]);

        let matches = r.relax(&q, &docs, rule_tables::WHO_IDENTITY, SUBJECT_START).unwrap();

        // "Old Liberty Bell" finds nothing, "Liberty Bell" does; the loop
        // stops there, so the "Bell"-only sentence is never collected.
        assert_eq!(matches, vec!["The Liberty Bell today is a symbol of freedom."]);
        assert!(log.contains(r"Searching documents for 'Old Liberty Bell.+\s(is|was)\s.+'..."));
        assert!(log.contains(r"Searching documents for 'Liberty Bell.+\s(is|was)\s.+'..."));
        assert!(!log.contains(r"Searching documents for 'Bell.+"));
    }

    #[test]
    fn test_relaxation_exhausts_tokens_without_match() {
        let corpus = CorpusRetriever::from_pages(Vec::new());
        let log    = MemoryTrace::new();
        let tools  = toolkit();
        let r      = Reformulator::new(&corpus, &log, &tools, ReformulationPolicy::default());

        let q = Question::parse("Who is Nobody Here?");
        let matches = r.relax(&q, &sentences(&["Nothing relevant."]), rule_tables::WHO_IDENTITY, SUBJECT_START).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_gather_skips_ambiguous_pages() {
        let mut page = CorpusPage::new("Mercury", "Mercury may refer to:", "");
        page.disambiguation = true;
        let corpus = CorpusRetriever::from_pages(vec![page]);
        let log    = MemoryTrace::new();
        let tools  = toolkit();
        let r      = Reformulator::new(&corpus, &log, &tools, ReformulationPolicy::default());

        let docs = r.gather("Mercury", DocumentView::Summary);
        assert!(docs.is_empty());
        assert_eq!(log.lines(), vec![
            "Search results of: 'Mercury'",
            "Mercury",
            "Disambiguation error in search for 'Mercury'",
        ]);
    }

    #[test]
    fn test_gather_segments_fetched_text() {
        let corpus = CorpusRetriever::from_pages(vec![CorpusPage::new(
            "Liberty Bell",
            "The Liberty Bell is a symbol.  It cracked.",
            "",
        )]);
        let log   = MemoryTrace::new();
        let tools = toolkit();
        let r     = Reformulator::new(&corpus, &log, &tools, ReformulationPolicy::default());

        let docs = r.gather("Liberty Bell", DocumentView::Summary);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "Liberty Bell");
        assert_eq!(docs[0].sentences, vec!["The Liberty Bell is a symbol.", "It cracked."]);
    }

    #[test]
    fn test_statement_skips_empty_parts() {
        assert_eq!(statement(&["Bill Clinton", "was", "born"]), "Bill Clinton was born ");
        assert_eq!(statement(&["", "land"]), "land ");
    }
}
