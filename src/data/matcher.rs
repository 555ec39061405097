// ============================================================
// Layer 4 — Phrase Matcher
// ============================================================
// Scans documents for sentences that fit any of a list of
// pattern rules.
//
// Evaluation order:
//   for each rule (in list order)
//     for each document
//       for each sentence
//         case-insensitive search → keep the WHOLE sentence
//
// Every rule is evaluated; matches from all rules are unioned
// into one flat list in discovery order. A sentence matched by
// two rules appears twice, which later counts double in tiling.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::data::rules::PatternRule;
use crate::domain::document::Document;
use crate::domain::traits::LogSink;

pub struct PhraseMatcher;

impl PhraseMatcher {
    pub fn new() -> Self {
        Self
    }

    /// All sentences matching one rule.
    pub fn find(&self, rule: &PatternRule, docs: &[Document], log: &dyn LogSink) -> Vec<String> {
        log.record(&format!("Searching documents for '{}'...", rule.source()));

        let mut matches = Vec::new();
        for doc in docs {
            for sentence in &doc.sentences {
                if rule.is_match(sentence) {
                    log.record(&format!("Found match: {sentence}"));
                    matches.push(sentence.clone());
                }
            }
        }
        matches
    }

    /// All sentences matching any rule, rule by rule.
    pub fn find_all(&self, rules: &[PatternRule], docs: &[Document], log: &dyn LogSink) -> Vec<String> {
        let matches: Vec<String> = rules
            .iter()
            .flat_map(|rule| self.find(rule, docs, log))
            .collect();

        tracing::debug!("{} rules over {} documents → {} matches", rules.len(), docs.len(), matches.len());
        matches
    }
}

impl Default for PhraseMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::trace_log::MemoryTrace;

    fn docs() -> Vec<Document> {
        vec![
            Document::new("Liberty Bell", vec![
                "The Liberty Bell is located in Philadelphia.".to_string(),
                "It was cast in 1752.".to_string(),
            ]),
            Document::new("Bell", vec![
                "A bell is a percussion instrument.".to_string(),
            ]),
        ]
    }

    #[test]
    fn test_keeps_whole_sentence_not_span() {
        let log  = MemoryTrace::new();
        let rule = PatternRule::new(r"located in").unwrap();
        let out  = PhraseMatcher::new().find(&rule, &docs(), &log);
        assert_eq!(out, vec!["The Liberty Bell is located in Philadelphia."]);
    }

    #[test]
    fn test_unions_all_rules_in_rule_order() {
        let log   = MemoryTrace::new();
        let rules = vec![
            PatternRule::new(r"\bbell\s(is|was)\s").unwrap(),
            PatternRule::new(r"\s(is|was)\s").unwrap(),
        ];
        let out = PhraseMatcher::new().find_all(&rules, &docs(), &log);
        assert_eq!(out, vec![
            "The Liberty Bell is located in Philadelphia.",
            "A bell is a percussion instrument.",
            "The Liberty Bell is located in Philadelphia.",
            "It was cast in 1752.",
            "A bell is a percussion instrument.",
        ]);
    }

    #[test]
    fn test_no_match_is_empty_and_logged() {
        let log  = MemoryTrace::new();
        let rule = PatternRule::new("quasar").unwrap();
        assert!(PhraseMatcher::new().find(&rule, &docs(), &log).is_empty());
        assert_eq!(log.lines(), vec!["Searching documents for 'quasar'..."]);
    }
}
