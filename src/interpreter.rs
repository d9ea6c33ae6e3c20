//! The execution engine: instruction dispatch and loop handling.
//!
//! There is no separate parsing phase. The dispatcher walks the program bytes
//! with a cursor and applies each command as it is reached; a `[` hands
//! control to the loop resolver, which locates the matching `]` right there
//! and re-dispatches the enclosed sub-slice while the loop's entry cell is
//! non-zero. Brainfuck commands are all ASCII, so dispatching bytes is exact:
//! every byte of a multi-byte character lands in the comment arm.

use std::mem;

use crate::error::{BracketKind, Error};
use crate::tape::Tape;

/// A reusable Brainfuck interpreter.
///
/// The interpreter owns the state of one run:
/// - the memory [`Tape`],
/// - the input buffer and a cursor over its next unread byte,
/// - the output string accumulated by `.` instructions.
///
/// All of it is reset at the start of every [`interpret`](Self::interpret)
/// call, so a reused value behaves exactly like a fresh one and nothing leaks
/// between runs.
#[derive(Debug, Default)]
pub struct Interpreter {
    tape: Tape,
    input: Vec<u8>,
    input_cursor: usize,
    output: String,
}

impl Interpreter {
    /// Create an interpreter with no run state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `code` against `input`, returning everything `.` produced.
    ///
    /// `input` is consumed as bytes, one byte per `,`, left to right. The run
    /// ends when the top-level program is exhausted; a `,` past the end of
    /// `input` or an unbalanced bracket aborts it with an [`Error`] instead.
    pub fn interpret(&mut self, code: &str, input: &str) -> Result<String, Error> {
        self.tape = Tape::new();
        self.input = input.as_bytes().to_vec();
        self.input_cursor = 0;
        self.output = String::new();

        self.run_block(code.as_bytes(), 0)?;
        Ok(mem::take(&mut self.output))
    }

    /// The tape as the previous run left it.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Dispatch every command in `block`, front to back. `base` is the offset
    /// of `block` within the top-level program, so errors can report absolute
    /// instruction positions.
    ///
    /// A `]` can never be a valid dispatch target here: loop bodies are cut
    /// off strictly before their closing bracket, so any `]` this loop meets
    /// closes nothing.
    fn run_block(&mut self, block: &[u8], base: usize) -> Result<(), Error> {
        let mut pc = 0;
        while pc < block.len() {
            match block[pc] {
                b'+' => self.tape.increment_cell(),
                b'-' => self.tape.decrement_cell(),
                b'>' => self.tape.advance_pointer(),
                b'<' => self.tape.retreat_pointer(),
                b'.' => self.write_output(),
                b',' => self.read_input(base + pc)?,
                b'[' => pc = self.run_loop(block, pc, base)?,
                b']' => {
                    return Err(Error::UnmatchedBracket {
                        ip: base + pc,
                        kind: BracketKind::Close,
                    });
                }
                _ => {} // any other byte is a comment
            }
            pc += 1;
        }
        Ok(())
    }

    /// Execute the loop whose `[` sits at `block[open]`. Returns the position
    /// of the matching `]`, where the caller resumes.
    fn run_loop(&mut self, block: &[u8], open: usize, base: usize) -> Result<usize, Error> {
        let body_start = open + 1;
        let close = match matching_close(&block[body_start..]) {
            Some(offset) => body_start + offset,
            None => {
                return Err(Error::UnmatchedBracket {
                    ip: base + open,
                    kind: BracketKind::Open,
                });
            }
        };
        let body = &block[body_start..close];

        // The continuation condition always reads the cell the pointer was on
        // when the loop was entered, even if the body moves the pointer. The
        // tape never shrinks, so the captured index stays valid.
        let entry = self.tape.position();
        while self.tape.cell(entry) != 0 {
            self.run_block(body, base + body_start)?;
        }

        Ok(close)
    }

    fn write_output(&mut self) {
        self.output.push(self.tape.current() as char);
    }

    fn read_input(&mut self, ip: usize) -> Result<(), Error> {
        match self.input.get(self.input_cursor).copied() {
            Some(byte) => {
                self.tape.set_current(byte);
                self.input_cursor += 1;
                Ok(())
            }
            None => Err(Error::OutOfInput {
                ip,
                consumed: self.input_cursor,
            }),
        }
    }
}

/// Position of the `]` closing the loop whose body starts at `block[0]`, or
/// `None` when the bracket is never closed.
///
/// Nested loops are matched by depth counting: each `[` raises the nesting
/// count, each `]` lowers it, and the first `]` seen at depth 0 is the match.
fn matching_close(block: &[u8]) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &byte) in block.iter().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Interpret `code` against `input` in one shot, returning the accumulated
/// output string.
///
/// # Example
/// ```
/// use bf_interp::interpret;
///
/// let output = interpret("++++++[>++++++++++<-]>+++++.", "").unwrap();
/// assert_eq!(output, "A");
/// ```
pub fn interpret(code: &str, input: &str) -> Result<String, Error> {
    Interpreter::new().interpret(code, input)
}
