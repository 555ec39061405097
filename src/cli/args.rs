// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The one positional argument is the trace log file; the flags
// pick the knowledge source and the WHEN/"was" policy.
//
// clap's derive macros generate --help, the usage error for a
// missing LOG_FILE, and the PathBuf conversions.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use std::path::PathBuf;

use crate::application::ask_use_case::{SessionConfig, SourceConfig};
use crate::application::reformulator::ReformulationPolicy;
use crate::infra::wikipedia::DEFAULT_ENDPOINT;

/// All arguments of an interactive session.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// File the session trace is written to (created or truncated)
    pub log_file: PathBuf,

    /// Answer from a local JSON corpus instead of live Wikipedia
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// MediaWiki api.php endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// User-Agent header sent to the MediaWiki API
    #[arg(long, default_value = concat!("wiki-qa/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Answer WHEN-was questions with undated sentence matches
    /// instead of discarding them
    #[arg(long)]
    pub keep_undated_was_matches: bool,
}

/// The boundary between Layer 1 and Layer 2:
/// the application layer never sees clap types.
impl From<SessionArgs> for SessionConfig {
    fn from(a: SessionArgs) -> Self {
        let source = match a.corpus {
            Some(path) => SourceConfig::Corpus(path),
            None => SourceConfig::Wikipedia {
                endpoint:   a.endpoint,
                user_agent: a.user_agent,
            },
        };
        SessionConfig {
            log_file: a.log_file,
            source,
            policy: ReformulationPolicy {
                discard_undated_was: !a.keep_undated_was_matches,
            },
        }
    }
}
