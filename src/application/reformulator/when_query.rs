// ============================================================
// Layer 2 — WHEN Reformulation
// ============================================================
// Dates are the preferred answer; a tiled sentence is only the
// fallback. Sub-cases by the auxiliary (token 1):
//
//   is / was   "When is Thanksgiving?"
//              prefix "Thanksgiving is ", rules WHEN_STATE
//
//   was (also) "When was Bill Clinton born?"
//              second pass over "<subject> was <verb> ..."
//              prefix "Bill Clinton was born ", rules WHEN_EVENT
//              dates from both passes are pooled; if the tiled
//              date came from this pass, its prefix is used
//
//   did        "When did Apollo 11 land?"
//              prefix "Apollo 11 land ", rules WHEN_DID
//
// Reference: Rust Book §6 (Option)

use anyhow::Result;

use super::{rule_tables, statement, Reformulator, SUBJECT_START};
use crate::domain::answer::Answer;
use crate::domain::document::DocumentView;
use crate::domain::question::Question;

impl Reformulator<'_> {
    pub fn answer_when(&self, question: &Question) -> Result<Option<Answer>> {
        if !self.has_subject(question) {
            return Ok(None);
        }

        let aux  = question.tokens[1].as_str();
        let last = question.last().unwrap_or_default();

        let mut prefix  = String::new();
        let mut matches = Vec::new();
        let mut dates   = Vec::new();
        let mut tiled   = None;

        if question.auxiliary_is(&["is", "was"]) {
            let subject = question.suffix(SUBJECT_START);
            prefix = statement(&[subject.as_str(), aux]);

            let docs = self.gather(&subject, DocumentView::Content);
            matches  = self.relax(question, &docs, rule_tables::WHEN_STATE, SUBJECT_START)?;
            dates    = self.extract_dates(&matches);
        }

        if question.auxiliary_is(&["was"]) {
            let subject      = question.suffix_without_last(SUBJECT_START);
            let event_prefix = statement(&[subject.as_str(), "was", last]);

            let docs          = self.gather(&subject, DocumentView::Content);
            let event_matches = self.relax(question, &docs, rule_tables::WHEN_EVENT, SUBJECT_START)?;
            let event_dates   = self.extract_dates(&event_matches);

            dates.extend(event_dates.iter().cloned());
            tiled = self.tile(&dates);
            if tiled.as_ref().is_some_and(|d| event_dates.contains(d)) {
                prefix = event_prefix;
            }

            if dates.is_empty() && self.policy.discard_undated_was {
                self.log.record("No dates found, discarding undated matches.");
                matches.clear();
            }
        } else if question.auxiliary_is(&["did"]) {
            prefix = statement(&[question.suffix_without_last(SUBJECT_START).as_str(), last]);

            let docs = self.gather(&question.suffix(SUBJECT_START), DocumentView::Content);
            matches  = self.relax(question, &docs, rule_tables::WHEN_DID, SUBJECT_START)?;
            dates    = self.extract_dates(&matches);
        }

        if !dates.is_empty() {
            let date = tiled.or_else(|| self.tile(&dates));
            return Ok(date.map(|d| Answer::prefixed(prefix, d)));
        }
        Ok(self.tile(&matches).map(Answer::fragment))
    }
}
