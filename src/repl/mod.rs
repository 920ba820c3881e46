//! Interactive read loop
//!
//! Reads one line at a time, normalizes it into words and dispatches the
//! first word as a command. Command failures are printed and the loop keeps
//! going; only `exit` or end of input stop it.

mod commands;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::Result;

pub use commands::Command;
pub use session::{attempt_catch, Flow, Session};

pub const PROMPT: &str = "Pokedex > ";

/// Trims, lowercases and splits `text` on any Unicode whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the REPL until `exit` or end of input.
///
/// Only I/O failures on `input` or `out` end the loop with an error.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            return Ok(());
        };

        let words = clean_input(&line);
        let Some((word, args)) = words.split_first() else {
            continue;
        };

        let outcome = match word.parse::<Command>() {
            Ok(command) => session.execute(command, args, out).await,
            Err(err) => Err(err),
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(err) => {
                debug!("Command '{}' failed: {}", word, err);
                writeln!(out, "{}", err)?;
            }
        }
    }
}
