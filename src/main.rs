use bf_interp::{Error, interpret};
use clap::Parser;
use std::env;
use std::io::{self, Write};

fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [--input TEXT] "<code>"   # Run Brainfuck code (args are concatenated)

Options:
  --input, -i TEXT  Bytes made available to ',' (consumed left to right; default empty)
  --help,  -h       Show this help

Notes:
- The program's output is printed to stdout, followed by a newline.
- A ',' with no input left aborts the run with an error.
- Characters outside of Brainfuck's ><+-.,[] are treated as comments.
- Pass flags before the code: anything after the first code argument is code.

Examples:
- Print "A":
    {0} "++++++[>++++++++++<-]>+++++."
- Echo three input bytes:
    {0} --input abc ",.,.,."
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}

#[derive(Parser, Debug)]
#[command(name = "bf", disable_help_flag = true)]
struct Cli {
    /// Bytes made available to ',' instructions
    #[arg(short = 'i', long = "input", default_value = "")]
    input: String,

    /// Concatenated Brainfuck code parts
    #[arg(
        value_name = "code",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    code: Vec<String>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    help: bool,
}

fn main() {
    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("bf"));

    let cli = Cli::parse();

    if cli.help {
        usage_and_exit(&program, 0);
    }
    if cli.code.is_empty() {
        usage_and_exit(&program, 2);
    }

    // Concatenate all code args without spaces to form the Brainfuck program
    let code = cli.code.join("");

    match interpret(&code, &cli.input) {
        Ok(output) => {
            // For readability, ensure output ends with a newline
            println!("{output}");
            let _ = io::stdout().flush();
        }
        Err(err) => {
            print_error(&program, &code, &err);
            std::process::exit(1);
        }
    }
}

/// Pretty-print a structured interpreter error with caret positioning.
fn print_error(program: &str, code: &str, err: &Error) {
    let (message, ip) = match err {
        Error::OutOfInput { ip, consumed } => (
            format!("{program}: Runtime error: out of input (consumed all {consumed} input bytes)"),
            *ip,
        ),
        Error::UnmatchedBracket { ip, kind } => (
            format!("{program}: Runtime error: unmatched bracket {kind}"),
            *ip,
        ),
    };
    print_error_with_context(&message, code.as_bytes(), ip);
}

/// Print a concise error with instruction position and a caret context
/// window. Positions are byte offsets into the program text.
fn print_error_with_context(prefix: &str, code: &[u8], pos: usize) {
    eprintln!("{prefix} at instruction {pos}");

    let (window, underline) = context_window(code, pos);
    eprintln!("  {}", window);
    eprintln!("  {}", underline);
    let _ = io::stderr().flush();
}

/// Build a short window of the program around `pos` and an underline with a
/// caret at the exact position. Bytes that would break caret alignment
/// (control bytes, pieces of multi-byte characters) are rendered as spaces.
fn context_window(code: &[u8], pos: usize) -> (String, String) {
    const WINDOW_BYTES: usize = 32;

    let start = pos.saturating_sub(WINDOW_BYTES);
    let end = (pos + WINDOW_BYTES + 1).min(code.len());

    let window: String = code[start..end]
        .iter()
        .map(|&byte| {
            if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                ' '
            }
        })
        .collect();

    let mut underline = String::new();
    for _ in 0..pos.saturating_sub(start) {
        underline.push(' ');
    }
    underline.push('^');

    (window, underline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_window_places_caret_under_position() {
        let (window, underline) = context_window(b"+++[>", 3);
        assert_eq!(window, "+++[>");
        assert_eq!(underline, "   ^");
    }

    #[test]
    fn context_window_clips_long_programs() {
        let code = "+".repeat(100);
        let (window, underline) = context_window(code.as_bytes(), 50);
        assert_eq!(window.len(), 65); // 32 before, the position, 32 after
        assert_eq!(underline, format!("{}^", " ".repeat(32)));
    }

    #[test]
    fn context_window_blanks_newlines() {
        let (window, _) = context_window(b"+\n,", 2);
        assert_eq!(window, "+ ,");
    }
}
