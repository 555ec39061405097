// ============================================================
// Layer 2 — WHO Reformulation
// ============================================================
// Two shapes, picked by the auxiliary (token 1):
//
//   is / was   "Who is Abraham Lincoln?"
//              search the page SUMMARY, rules WHO_IDENTITY
//
//   <verb>     "Who invented the telephone?"
//              search the page CONTENT for the object,
//              rules WHO_AGENT (a short name before the verb)
//
// Reference: Rust Book §18 (Patterns and Matching)

use anyhow::Result;

use super::{rule_tables, Reformulator, SUBJECT_START};
use crate::domain::answer::Answer;
use crate::domain::document::DocumentView;
use crate::domain::question::Question;

impl Reformulator<'_> {
    pub fn answer_who(&self, question: &Question) -> Result<Option<Answer>> {
        if !self.has_subject(question) {
            return Ok(None);
        }

        let subject = question.suffix(SUBJECT_START);
        let (view, table) = if question.auxiliary_is(&["is", "was"]) {
            (DocumentView::Summary, rule_tables::WHO_IDENTITY)
        } else {
            (DocumentView::Content, rule_tables::WHO_AGENT)
        };

        let docs    = self.gather(&subject, view);
        let matches = self.relax(question, &docs, table, SUBJECT_START)?;

        Ok(self.tile(&matches).map(Answer::fragment))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::super::tests::toolkit;
    use super::super::ReformulationPolicy;
    use super::*;
    use crate::infra::corpus::{CorpusPage, CorpusRetriever};
    use crate::infra::trace_log::MemoryTrace;

    fn ask(pages: Vec<CorpusPage>, question: &str) -> (Option<String>, MemoryTrace) {
        let corpus = CorpusRetriever::from_pages(pages);
        let log    = MemoryTrace::new();
        let tools  = toolkit();
        let answer = Reformulator::new(&corpus, &log, &tools, ReformulationPolicy::default())
            .answer_who(&Question::parse(question))
            .unwrap()
            .map(|a| a.to_string());
        (answer, log)
    }

    #[test]
    fn test_identity_from_summary_drops_parenthetical() {
        let lincoln = CorpusPage::new(
            "Abraham Lincoln",
            "Abraham Lincoln (February 12, 1809 – April 15, 1865) was the 16th president of the United States.",
            "Lincoln was born in a log cabin.",
        );
        let (answer, log) = ask(vec![lincoln], "Who is Abraham Lincoln?");
        assert_eq!(
            answer.as_deref(),
            Some("Abraham Lincoln was the 16th president of the United States.")
        );
        assert!(!log.contains("log cabin"));
    }

    #[test]
    fn test_agent_before_verb_from_content() {
        let telephone = CorpusPage::new(
            "Telephone",
            "A telephone is a device.",
            "Early telephones used carbon microphones. \
             Alexander Graham Bell invented the telephone in 1876.",
        );
        let (answer, _) = ask(vec![telephone], "Who invented the telephone?");
        assert_eq!(
            answer.as_deref(),
            Some("Alexander Graham Bell invented the telephone in 1876.")
        );
    }

    #[test]
    fn test_unknown_subject_has_no_answer() {
        let (answer, log) = ask(Vec::new(), "Who is Nobody Special?");
        assert_eq!(answer, None);
        assert!(log.contains("Search results of: 'Nobody Special'"));
    }
}
