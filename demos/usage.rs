use bf_interp::interpret;

fn main() {
    // Classic Brainfuck "Hello World!" program
    let code = "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.<<+++++++++++++++.>.+++.------.--------.>+.>.";

    match interpret(code, "") {
        Ok(output) => print!("{output}"),
        Err(err) => {
            eprintln!("Brainfuck interpreter error: {err}");
            std::process::exit(1);
        }
    }

    // Tip: to observe the ',' instruction, feed input bytes directly:
    // let echoed = bf_interp::interpret(",.,.,.", "abc");
    // assert_eq!(echoed.unwrap(), "abc");
}
