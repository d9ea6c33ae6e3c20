//! A tiny string-in, string-out Brainfuck interpreter library.
//!
//! This crate provides a minimal Brainfuck interpreter: a program string is
//! executed against a growable memory tape, an optional input string feeds
//! the `,` instruction, and everything `.` prints comes back as the output
//! string. There is no other I/O; the engine never touches stdin or stdout.
//!
//! Features and behaviors:
//! - Memory tape starts as a single zeroed cell and grows one cell at a time
//!   as the pointer advances past the end; it never shrinks.
//! - Cell arithmetic wraps modulo 256.
//! - Moving left from cell 0 is a no-op; the pointer is clamped, never
//!   negative and never an error.
//! - Input `,` consumes the next byte of the input string; running out of
//!   input is a distinct [`Error::OutOfInput`] failure.
//! - Output `.` appends the current cell's code point to the output string.
//! - Properly handles nested loops `[]`; unmatched brackets are reported as
//!   errors when execution reaches them (there is no validation pre-pass).
//! - Any non-Brainfuck character is a comment and is silently skipped.
//!
//! Quick start:
//!
//! ```
//! use bf_interp::interpret;
//!
//! // Classic "Hello World!" in Brainfuck
//! let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";
//! let output = interpret(code, "").expect("program should run");
//! assert_eq!(output, "Hello World!\n");
//! ```

pub mod error;
pub mod interpreter;
pub mod tape;

#[doc(inline)]
pub use error::*;

#[doc(inline)]
pub use interpreter::*;

#[doc(inline)]
pub use tape::*;
