//! Printing an error code's message the way the command-line tool does.

use crate::resolver::Resolve;
use crate::Error;
use std::io::{self, Write};

/// The code reported by the command-line tool: an illegal byte sequence.
pub const SAMPLE_CODE: i32 = libc::EILSEQ;

/// What [`report`] printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The message was written to the output stream.
    Described(String),
    /// A diagnostic was written to the error stream.
    Failed(Error),
}

/// Resolve `code` once and print the result.
///
/// On success a single `Error <code>: <message>` line goes to `out`. On failure a single
/// diagnostic line goes to `err` and nothing is written to `out`.
pub fn report<R, O, E>(resolver: &R, code: i32, out: &mut O, err: &mut E) -> io::Result<Outcome>
where
    R: Resolve + ?Sized,
    O: Write,
    E: Write,
{
    match resolver.resolve(code) {
        Ok(message) => {
            writeln!(out, "Error {}: {}", code, message)?;
            out.flush()?;
            Ok(Outcome::Described(message))
        }
        Err(e) => {
            tracing::debug!(code, error = %e, "could not resolve error code");
            writeln!(err, "{} failed: {}", resolver.mechanism(), e)?;
            err.flush()?;
            Ok(Outcome::Failed(e))
        }
    }
}
