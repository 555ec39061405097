// ============================================================
// Layer 2 — WHAT Reformulation
// ============================================================
// "What is a quasar?"
//
//   search   "a quasar" (full page CONTENT)
//   rule     WHAT_DEFINITION for the whole subject, one pass,
//            no relaxation
//   tile     the matching sentences

use anyhow::Result;

use super::{rule_tables, Reformulator, SUBJECT_START};
use crate::data::rules::Bindings;
use crate::domain::answer::Answer;
use crate::domain::document::DocumentView;
use crate::domain::question::Question;

impl Reformulator<'_> {
    pub fn answer_what(&self, question: &Question) -> Result<Option<Answer>> {
        if !question.auxiliary_is(&["is", "was"]) || !self.has_subject(question) {
            return Ok(None);
        }

        let subject = question.suffix(SUBJECT_START);
        let docs    = self.gather(&subject, DocumentView::Content);

        let rule    = rule_tables::WHAT_DEFINITION.instantiate(&Bindings::at(question, SUBJECT_START))?;
        let matches = self.tools.matcher.find(&rule, &docs, self.log);

        Ok(self.tile(&matches).map(Answer::fragment))
    }
}
