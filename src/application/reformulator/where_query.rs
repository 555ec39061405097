// ============================================================
// Layer 2 — WHERE Reformulation
// ============================================================
// "Where is The Liberty Bell?"
//
//   search   "The Liberty Bell" (page SUMMARY only)
//   rules    WHERE_LOCATION, relaxed over the subject
//   trim     within the span the WHERE rule matched (subject
//            onward), keep the first " in|located|at|near ..."
//            phrase, behind "The Liberty Bell is "
//   tile     the trimmed candidates
//
// Reference: regex crate documentation (Regex::find)

use anyhow::Result;

use super::{rule_tables, statement, Reformulator, SUBJECT_START};
use crate::data::rules::{Bindings, PatternRule};
use crate::domain::answer::Answer;
use crate::domain::document::DocumentView;
use crate::domain::question::Question;

impl Reformulator<'_> {
    pub fn answer_where(&self, question: &Question) -> Result<Option<Answer>> {
        if !question.auxiliary_is(&["is", "was"]) || !self.has_subject(question) {
            return Ok(None);
        }

        let subject = question.suffix(SUBJECT_START);
        let prefix  = statement(&[subject.as_str(), question.tokens[1].as_str()]);

        let docs    = self.gather(&subject, DocumentView::Summary);
        let matches = self.relax(question, &docs, rule_tables::WHERE_LOCATION, SUBJECT_START)?;

        let location = PatternRule::new(rule_tables::LOCATION_PHRASE)?;
        let spans    = subject_rules(question)?;

        let mut candidates = Vec::with_capacity(matches.len());
        for sentence in &matches {
            self.log.record(&format!("Trimming answer {sentence}"));
            let span = spans
                .iter()
                .find_map(|rule| rule.find(sentence))
                .unwrap_or(sentence.as_str());
            match location.find(span) {
                Some(phrase) => {
                    let candidate = format!("{prefix}{phrase}");
                    self.log.record(&format!("New answer: {candidate}"));
                    candidates.push(candidate);
                }
                None => self.log.record("No location phrase, dropping match."),
            }
        }

        Ok(self.tile(&candidates).map(Answer::fragment))
    }
}

/// WHERE_LOCATION for every relaxation step, longest subject first.
/// Used to locate the "<subject> ... is ... in ..." span inside a
/// matched sentence, so prepositions ahead of the subject are skipped.
fn subject_rules(question: &Question) -> Result<Vec<PatternRule>> {
    let mut rules = Vec::new();
    for from in SUBJECT_START..question.len() {
        let bindings = Bindings::at(question, from);
        for template in rule_tables::WHERE_LOCATION {
            rules.push(template.instantiate(&bindings)?);
        }
    }
    Ok(rules)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::super::tests::toolkit;
    use super::super::ReformulationPolicy;
    use super::*;
    use crate::infra::corpus::{CorpusPage, CorpusRetriever};
    use crate::infra::trace_log::MemoryTrace;

    fn corpus() -> CorpusRetriever {
        CorpusRetriever::from_pages(vec![CorpusPage::new(
            "Eiffel Tower",
            "The Eiffel Tower is a wrought-iron lattice tower on the Champ de Mars in Paris, France. \
             Locally nicknamed La dame de fer, it was named after the engineer Gustave Eiffel.",
            "This full article text is never searched for where questions.",
        )])
    }

    #[test]
    fn test_keeps_trailing_location_phrase_behind_prefix() {
        let corpus = corpus();
        let log    = MemoryTrace::new();
        let tools  = toolkit();
        let r      = Reformulator::new(&corpus, &log, &tools, ReformulationPolicy::default());

        let answer = r.answer_where(&Question::parse("Where is the Eiffel Tower?")).unwrap();
        assert_eq!(
            answer.map(|a| a.to_string()).as_deref(),
            Some("the Eiffel Tower is in Paris, France.")
        );
        assert!(log.contains("Trimming answer The Eiffel Tower is a wrought-iron lattice tower"));
        assert!(log.contains("New answer: the Eiffel Tower is  in Paris, France."));
    }

    #[test]
    fn test_location_phrase_ahead_of_subject_is_skipped() {
        let corpus = CorpusRetriever::from_pages(vec![CorpusPage::new(
            "Liberty Bell",
            "Located in Philadelphia, the Liberty Bell is housed at the Liberty Bell Center.",
            "",
        )]);
        let log   = MemoryTrace::new();
        let tools = toolkit();
        let r     = Reformulator::new(&corpus, &log, &tools, ReformulationPolicy::default());

        let answer = r.answer_where(&Question::parse("Where is the Liberty Bell?")).unwrap();
        assert_eq!(
            answer.map(|a| a.to_string()).as_deref(),
            Some("the Liberty Bell is at the Liberty Bell Center.")
        );
    }

    #[test]
    fn test_requires_is_or_was() {
        let corpus = corpus();
        let log    = MemoryTrace::new();
        let tools  = toolkit();
        let r      = Reformulator::new(&corpus, &log, &tools, ReformulationPolicy::default());

        assert!(r.answer_where(&Question::parse("Where did Eiffel work?")).unwrap().is_none());
        assert!(log.lines().is_empty());
    }
}
