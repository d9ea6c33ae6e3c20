// Error-taxonomy tests driven through the library API.

use bf_interp::{BracketKind, Error, interpret};

#[test]
fn comma_on_empty_input_is_out_of_input() {
    let result = interpret(",", "");
    assert!(matches!(
        result,
        Err(Error::OutOfInput { ip: 0, consumed: 0 })
    ));
}

#[test]
fn comma_past_the_last_input_byte_is_out_of_input() {
    let result = interpret(",.,.", "A");
    assert!(matches!(
        result,
        Err(Error::OutOfInput { ip: 2, consumed: 1 })
    ));
}

#[test]
fn out_of_input_inside_a_loop_aborts_the_whole_run() {
    // the classic cat program has no EOF convention here: once "hi" is
    // consumed, the next ',' kills the run and the echoed output is discarded
    let result = interpret(",[.,]", "hi");
    assert!(matches!(
        result,
        Err(Error::OutOfInput { ip: 3, consumed: 2 })
    ));
}

#[test]
fn unterminated_loop_is_an_unmatched_open_bracket() {
    let result = interpret("[", "");
    assert!(matches!(
        result,
        Err(Error::UnmatchedBracket {
            ip: 0,
            kind: BracketKind::Open
        })
    ));

    let result = interpret("+++[>", "");
    assert!(matches!(
        result,
        Err(Error::UnmatchedBracket {
            ip: 3,
            kind: BracketKind::Open
        })
    ));
}

#[test]
fn open_bracket_is_unmatched_even_when_its_loop_would_not_run() {
    // the current cell is zero, but the body still has to be delimited
    let result = interpret("[+", "");
    assert!(matches!(
        result,
        Err(Error::UnmatchedBracket {
            ip: 0,
            kind: BracketKind::Open
        })
    ));
}

#[test]
fn balanced_inner_pair_does_not_rescue_an_open_bracket() {
    let result = interpret("[[]", "");
    assert!(matches!(
        result,
        Err(Error::UnmatchedBracket {
            ip: 0,
            kind: BracketKind::Open
        })
    ));
}

#[test]
fn stray_close_bracket_is_unmatched() {
    let result = interpret("]", "");
    assert!(matches!(
        result,
        Err(Error::UnmatchedBracket {
            ip: 0,
            kind: BracketKind::Close
        })
    ));

    let result = interpret("++]", "");
    assert!(matches!(
        result,
        Err(Error::UnmatchedBracket {
            ip: 2,
            kind: BracketKind::Close
        })
    ));
}

#[test]
fn close_bracket_after_a_skipped_loop_is_still_stray() {
    let result = interpret("[>]]", "");
    assert!(matches!(
        result,
        Err(Error::UnmatchedBracket {
            ip: 3,
            kind: BracketKind::Close
        })
    ));
}

#[test]
fn errors_render_with_instruction_positions() {
    let err = interpret(",", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Out of input at instruction 0 (consumed all 0 input bytes)"
    );

    let err = interpret("[", "").unwrap_err();
    assert_eq!(err.to_string(), "Unmatched bracket '[' at instruction 0");

    let err = interpret("]", "").unwrap_err();
    assert_eq!(err.to_string(), "Unmatched bracket ']' at instruction 0");
}
