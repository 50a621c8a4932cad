use thiserror::Error;

use crate::ast::Expression;
use crate::lexer::Lexer;
use crate::parser::trace::Tracer;
use crate::token::Token;

mod r#impl;
mod trace;

type ParseResult<T = Expression> = std::result::Result<T, ParserError>;
type PrefixParseFn = fn(&mut Parser) -> ParseResult;
type InfixParseFn = fn(&mut Parser, Expression) -> ParseResult;

/// Pratt解析器
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    token: Token,
    peek_token: Token,
    errors: Vec<ParserError>,
    // 尚未闭合的语句块层数
    block_depth: usize,
    tracer: Tracer,
}

/// 优先级
#[derive(PartialOrd, PartialEq, Ord, Eq, Debug, Clone, Copy)]
enum Precedence {
    Lowest,
    /// == or !=
    Equals,
    /// \> or <
    LessGreater,
    /// `+` or `-`
    Sum,
    /// `*` or `/`
    Product,
    /// -x or !x
    Prefix,
    /// my_fun(x)
    Call,
}

/// 解析错误类
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// expected, actual
    #[error("expected next token to be {}, got {} instead", .0.kind(), .1.kind())]
    Expected(Token, Token),

    #[error("no prefix parse function for {} found", .0.kind())]
    NoPrefixParseFn(Token),

    #[error("could not parse {0:?} as integer")]
    ParseInt(String),
}
