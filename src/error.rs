//! Errors surfaced while interpreting Brainfuck code.

use std::fmt;

/// Errors that can occur while interpreting Brainfuck code.
///
/// Either error aborts the run and propagates to the caller; any output
/// accumulated before the failure is discarded. The `ip` carried by each
/// variant is the byte offset of the offending instruction in the top-level
/// program string.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `,` instruction executed after the input buffer was exhausted.
    #[error("Out of input at instruction {ip} (consumed all {consumed} input bytes)")]
    OutOfInput { ip: usize, consumed: usize },

    /// Loops were not balanced; a matching `[` or `]` was not found.
    #[error("Unmatched bracket {kind} at instruction {ip}")]
    UnmatchedBracket { ip: usize, kind: BracketKind },
}

/// Which side of the loop was unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    Close,
}

impl fmt::Display for BracketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketKind::Open => write!(f, "'['"),
            BracketKind::Close => write!(f, "']'"),
        }
    }
}
