//! Interactive session for `powmod session`.
//!
//! Each non-blank input line is one change notification of the form
//! `<name>=<raw text>`. A notification replaces that parameter's raw text and
//! triggers one full pipeline pass; the resulting snapshot is written before
//! the next line is read. Lines starting with `#` are ignored; malformed or
//! non-UTF-8 lines are logged and skipped.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use crate::core::modexp::ModPow;
use crate::core::types::{Inputs, ParameterKind};
use crate::io::render::{OutputFormat, render};
use crate::pipeline::UpdatePipeline;

/// One parsed change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: ParameterKind,
    /// Raw text after `=`, untrimmed; the lexer owns whitespace handling.
    pub text: String,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Passes run, including the initial one.
    pub passes: u32,
    /// Notification lines that could not be parsed.
    pub rejected_lines: u32,
}

/// Parse one notification line. Blank and comment lines yield `None`.
pub fn parse_change(line: &str) -> Result<Option<Change>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let visible = line.trim_start();
    if visible.is_empty() || visible.starts_with('#') {
        return Ok(None);
    }
    let (name, text) = line
        .split_once('=')
        .ok_or_else(|| anyhow!("expected <name>=<text>, got {line:?}"))?;
    let name = name.trim();
    let kind =
        ParameterKind::from_name(name).ok_or_else(|| anyhow!("unknown parameter {name:?}"))?;
    Ok(Some(Change {
        kind,
        text: text.to_string(),
    }))
}

/// Run the initial pass over `initial`, then one pass per notification read
/// from `reader`, writing a snapshot to `out` after every pass.
pub fn run_session<E, R, W>(
    pipeline: &mut UpdatePipeline<E>,
    initial: Inputs,
    mut reader: R,
    mut out: W,
    format: OutputFormat,
) -> Result<SessionOutcome>
where
    E: ModPow,
    R: BufRead,
    W: Write,
{
    info!(?format, "session started");
    let mut inputs = initial;
    let mut outcome = SessionOutcome {
        passes: 0,
        rejected_lines: 0,
    };

    pipeline.recompute(&inputs);
    emit(pipeline, &mut out, format)?;
    outcome.passes += 1;

    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        // Only a failed read ends the session; undecodable lines are rejected below.
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("read notification")?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let parsed = std::str::from_utf8(&buf)
            .context("notification is not valid UTF-8")
            .and_then(parse_change);
        let change = match parsed {
            Ok(Some(change)) => change,
            Ok(None) => continue,
            Err(err) => {
                warn!(line = line_no, error = %err, "ignoring notification");
                outcome.rejected_lines += 1;
                continue;
            }
        };
        inputs.set(change.kind, change.text);
        pipeline.recompute(&inputs);
        emit(pipeline, &mut out, format)?;
        outcome.passes += 1;
    }

    info!(
        passes = outcome.passes,
        rejected_lines = outcome.rejected_lines,
        "session finished"
    );
    Ok(outcome)
}

fn emit<E: ModPow, W: Write>(
    pipeline: &UpdatePipeline<E>,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(&pipeline.snapshot(), format)?;
    writeln!(out, "{rendered}").context("write snapshot")?;
    out.flush().context("flush snapshot")?;
    Ok(())
}
