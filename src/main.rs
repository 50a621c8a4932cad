use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use monkey::eval::Evaluator;
use monkey::lexer::Lexer;
use monkey::{parser, repl, Engine};

/// Tokenizer, Pratt parser and tree-walking evaluator for the Monkey language.
///
/// Without a FILE or --expr an interactive prompt is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to evaluate.
    file: Option<PathBuf>,

    /// Evaluate a source string instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Print evaluated values in the prompt instead of the parsed program.
    #[arg(long)]
    eval: bool,

    /// Print the token stream instead of evaluating.
    #[arg(long)]
    tokens: bool,

    /// Trace every parse routine to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let source = match (&args.file, &args.expr) {
        (Some(path), _) => Some(
            fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("reading {} failed", path.display()))?,
        ),
        (None, Some(expr)) => Some(expr.clone()),
        (None, None) => None,
    };

    match source {
        None => {
            let engine = if args.eval { Engine::Eval } else { Engine::Echo };
            println!("Hello! This is the Monkey programming language in {}!", engine);
            println!("Feel free to type in commands");
            repl::start(io::stdin().lock(), io::stdout(), engine, args.trace).into_diagnostic()
        }
        Some(source) if args.tokens => {
            for token in Lexer::new(&source) {
                println!("{:<8} {:?}", token.kind(), token.literal());
            }
            println!("EOF");
            Ok(())
        }
        Some(source) => run(&source, args.trace),
    }
}

fn run(source: &str, trace: bool) -> miette::Result<()> {
    let mut parser = parser::Parser::from(source).with_trace(trace);
    let program = parser.parse_program();
    for line in parser.take_trace() {
        eprintln!("{}", line);
    }
    if !parser.errors().is_empty() {
        return Err(monkey::Error::Parser(parser.errors().to_vec())).into_diagnostic();
    }
    let value = Evaluator::new()
        .eval(&program)
        .into_diagnostic()
        .wrap_err("evaluation failed")?;
    if let Some(value) = value {
        println!("{}", value);
    }
    Ok(())
}
