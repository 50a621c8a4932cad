use std::io::{self, BufRead, Write};

use crate::eval::Evaluator;
use crate::parser::{Parser, ParserError};
use crate::Engine;

const PROMPT: &str = ">> ";
const EXIT: &str = "exit";

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '~---~'
"#;

/// 读取-解析-输出循环，直到输入结束或`exit`
pub fn start<R: BufRead, W: Write>(
    mut reader: R,
    mut out: W,
    engine: Engine,
    trace: bool,
) -> io::Result<()> {
    let evaluator = Evaluator::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let mut input = String::new();

        let i = reader.read_line(&mut input)?;
        if i == 0 || input.trim() == EXIT {
            writeln!(out, "Bye!")?;
            return Ok(());
        }

        let mut parser = Parser::from(&input).with_trace(trace);
        let program = parser.parse_program();
        for line in parser.take_trace() {
            eprintln!("{}", line);
        }
        let errors = parser.errors();
        if !errors.is_empty() {
            print_parser_errors(&mut out, errors)?;
            continue;
        }
        match engine {
            Engine::Echo => writeln!(out, "{}", program)?,
            Engine::Eval => match evaluator.eval(&program) {
                Ok(Some(object)) => writeln!(out, "{}", object)?,
                Ok(None) => {}
                Err(err) => writeln!(out, "ERROR: {}", err)?,
            },
        }
    }
}

fn print_parser_errors<W: Write>(out: &mut W, errors: &[ParserError]) -> io::Result<()> {
    write!(out, "{}", MONKEY_FACE)?;
    writeln!(out, "Woops! We ran into some monkey business here!")?;
    writeln!(out, " parser errors:")?;
    for err in errors {
        writeln!(out, "\t{}", err)?;
    }
    Ok(())
}
