// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. clap parses the
// arguments; this layer wires the concrete trace log and
// retriever together and runs the interactive session.
// All question answering is delegated to Layer 2.
//
//   args.rs    — clap arguments → SessionConfig
//   session.rs — read / ask / present loop
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod args;
pub mod session;

use anyhow::Result;
use clap::Parser;
use std::io;

use crate::application::ask_use_case::{AskUseCase, SessionConfig, SourceConfig};
use crate::domain::traits::DocumentRetriever;
use crate::infra::{corpus::CorpusRetriever, trace_log::TraceLog, wikipedia::WikipediaRetriever};
use args::SessionArgs;

#[derive(Parser, Debug)]
#[command(
    name = "wiki-qa",
    version,
    about = "Answer When/Where/What/Who questions from Wikipedia, one line at a time."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: SessionArgs,
}

impl Cli {
    /// Open the trace log, pick the retriever and run the session
    /// over stdin/stdout. Startup failures end the program.
    pub fn run(self) -> Result<()> {
        let config: SessionConfig = self.args.into();

        let log = TraceLog::create(&config.log_file)?;
        let retriever = open_retriever(&config.source)?;
        tracing::info!("Session trace: {}", log.path().display());

        {
            let use_case = AskUseCase::new(retriever.as_ref(), &log, config.policy)?;
            let stdin  = io::stdin();
            let stdout = io::stdout();
            session::run_session(stdin.lock(), stdout.lock(), &use_case, &log)?;
        }

        log.close()
    }
}

fn open_retriever(source: &SourceConfig) -> Result<Box<dyn DocumentRetriever>> {
    Ok(match source {
        SourceConfig::Corpus(path) => Box::new(CorpusRetriever::load(path)?),
        SourceConfig::Wikipedia { endpoint, user_agent } => {
            Box::new(WikipediaRetriever::new(endpoint.as_str(), user_agent)?)
        }
    })
}
