use std::fmt;
use std::rc::Rc;

use crate::ast::Program;
use crate::eval::Evaluator;
use crate::object::{EvalError, Object};
use crate::parser::{Parser, ParserError};

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;

/// REPL的输出模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// 输出解析后的程序
    Echo,
    /// 输出求值结果
    Eval,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Engine::Echo => write!(f, "echo mode"),
            Engine::Eval => write!(f, "eval mode"),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("parser errors:\n{}", render_parser_errors(.0))]
    Parser(Vec<ParserError>),
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

fn render_parser_errors(errors: &[ParserError]) -> String {
    errors
        .iter()
        .map(|err| format!("\t{}", err))
        .collect::<Vec<String>>()
        .join("\n")
}

/// 解析源码，返回程序和全部错误；有错误时程序不可信
pub fn parse(input: &str) -> (Program, Vec<ParserError>) {
    let mut parser = Parser::from(input);
    let program = parser.parse_program();
    (program, parser.errors().to_vec())
}

/// 解析并求值，有解析错误则不求值
pub fn run(input: &str) -> Result<Option<Rc<Object>>, Error> {
    let (program, errors) = parse(input);
    if !errors.is_empty() {
        return Err(Error::Parser(errors));
    }
    Ok(Evaluator::new().eval(&program)?)
}
