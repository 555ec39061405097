// ============================================================
// Layer 1 — Interactive Session
// ============================================================
// The read → ask → present loop. Owns every byte written to
// stdout: exactly one line per question, either the answer or
// a fixed message. The prompt goes to stderr.
//
// Reference: Rust Book §12 (Reading input), std::io::BufRead

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::domain::answer::Outcome;
use crate::domain::traits::{LogSink, QuestionAnswerer};

pub const PROMPT:       &str = "Ask a question or type 'exit'";
pub const APOLOGY:      &str = "I'm sorry, I don't know the answer to that.";
pub const UNRECOGNIZED: &str = "Error, question not found.";

/// Run until `exit` or end of input.
///
/// A failing question is logged and answered with the apology;
/// only I/O errors on `output` end the session early.
pub fn run_session<R: BufRead, W: Write>(
    input:      R,
    mut output: W,
    answerer:   &dyn QuestionAnswerer,
    log:        &dyn LogSink,
) -> Result<()> {
    eprintln!("{PROMPT}");

    for line in input.lines() {
        let line = line?;
        log.record(&line);

        let outcome = answerer.ask(&line).unwrap_or_else(|e| {
            tracing::warn!("Question '{}' failed: {:#}", line, e);
            log.record(&format!("Error while answering: {e:#}"));
            Outcome::NoAnswer
        });

        if outcome == Outcome::Exit {
            log.record("Exiting program.");
            break;
        }

        present(&outcome, &mut output, log)?;
        output.flush()?;
    }
    Ok(())
}

/// Print one outcome as one line and trace what was printed.
fn present<W: Write>(outcome: &Outcome, output: &mut W, log: &dyn LogSink) -> Result<()> {
    match outcome {
        Outcome::Answered(answer) => {
            log.record(&format!("Answering question with:\n{answer}"));
            writeln!(output, "{answer}")?;
        }
        Outcome::NoAnswer => {
            log.record("No answer found.");
            writeln!(output, "{APOLOGY}")?;
        }
        Outcome::Unrecognized => {
            log.record(UNRECOGNIZED);
            writeln!(output, "{UNRECOGNIZED}")?;
        }
        Outcome::Exit => {}
    }
    Ok(())
}
