// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// One question in, one Outcome out:
//   1. Tokenize and classify the line
//   2. EXIT / UNKNOWN short-circuit, nothing is searched
//   3. Hand the question to the matching reformulation routine
//   4. Wrap whatever tiled answer comes back
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use anyhow::Result;
use std::path::PathBuf;

use crate::application::reformulator::{ReformulationPolicy, Reformulator, Toolkit};
use crate::data::segmenter::SegmenterRules;
use crate::domain::answer::Outcome;
use crate::domain::question::{Question, QuestionType};
use crate::domain::traits::{DocumentRetriever, LogSink, QuestionAnswerer};

/// Where pages come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Live MediaWiki API
    Wikipedia { endpoint: String, user_agent: String },
    /// Local JSON corpus file
    Corpus(PathBuf),
}

/// Everything a session needs, free of clap types.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Trace log file, created or truncated at startup
    pub log_file: PathBuf,

    /// Which DocumentRetriever the CLI builds
    pub source:   SourceConfig,

    /// Switches for the reformulation routines
    pub policy:   ReformulationPolicy,
}

pub struct AskUseCase<'a> {
    retriever: &'a dyn DocumentRetriever,
    log:       &'a dyn LogSink,
    tools:     Toolkit,
    policy:    ReformulationPolicy,
}

impl<'a> AskUseCase<'a> {
    pub fn new(
        retriever: &'a dyn DocumentRetriever,
        log:       &'a dyn LogSink,
        policy:    ReformulationPolicy,
    ) -> Result<Self> {
        let tools = Toolkit::new(SegmenterRules::default())?;
        Ok(Self { retriever, log, tools, policy })
    }
}

impl QuestionAnswerer for AskUseCase<'_> {
    fn ask(&self, line: &str) -> Result<Outcome> {
        let question = Question::parse(line);
        tracing::debug!("Classified {:?} as {}", question.tokens, question.kind);

        let reformulator = Reformulator::new(self.retriever, self.log, &self.tools, self.policy);
        let answer = match question.kind {
            QuestionType::Exit    => return Ok(Outcome::Exit),
            QuestionType::Unknown => {
                if question.is_empty() {
                    tracing::debug!("Blank input line");
                }
                return Ok(Outcome::Unrecognized);
            }
            kind => {
                self.log.record(&format!("User asked a '{kind}' question."));
                match kind {
                    QuestionType::When  => reformulator.answer_when(&question)?,
                    QuestionType::Where => reformulator.answer_where(&question)?,
                    QuestionType::What  => reformulator.answer_what(&question)?,
                    _                   => reformulator.answer_who(&question)?,
                }
            }
        };

        Ok(answer.map_or(Outcome::NoAnswer, Outcome::Answered))
    }
}
