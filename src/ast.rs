use std::fmt::{Display, Formatter, Result};

/// 语法树根节点
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    // let ident = expr
    Let(String, Expression),
    // return expr
    Return(Expression),
    // expr
    Expression(Expression),
    // { statements }
    Block(BlockStatement),
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    // 标识符
    Identifier(String),
    // 整数字面量
    IntLiteral(i64),
    // 布尔值字面量
    BoolLiteral(bool),

    // 一元表达式
    Unary(UnaryOperator, Box<Expression>),
    // 二元表达式
    Binary(BinaryOperator, Box<Expression>, Box<Expression>),

    // if表达式, (条件, 结果, else分支)
    If(Box<Expression>, BlockStatement, Option<BlockStatement>),
    // 表达式位置上的语句块
    Block(BlockStatement),
    // 函数字面量, (参数, 函数体)
    FunctionLiteral(Vec<String>, BlockStatement),
    // 函数调用表达式, (函数, 参数)
    Call(Box<Expression>, Vec<Expression>),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Not,
    Neg,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mul,
    Div,

    Gt,
    Lt,
    Eq,
    NotEq,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{{")?;
        for statement in &self.statements {
            write!(f, " {} ", statement)?;
        }
        write!(f, "}}")
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Statement::Let(name, val) => write!(f, "let {} = {};", name, val),
            Statement::Return(val) => write!(f, "return {};", val),
            Statement::Expression(exp) => write!(f, "{}", exp),
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::IntLiteral(int) => write!(f, "{}", int),
            Expression::BoolLiteral(boolean) => write!(f, "{}", boolean),
            Expression::Identifier(id) => write!(f, "{}", id),
            Expression::Unary(op, expr) => write!(f, "({}{})", op, expr),
            Expression::Binary(op, left, right) => write!(f, "({} {} {})", left, op, right),
            Expression::If(condition, consequence, alternative) => {
                write!(f, "if {} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            Expression::Block(block) => write!(f, "{}", block),
            Expression::FunctionLiteral(params, body) => write!(
                f,
                "fn({params}) {body}",
                params = params.join(", "),
                body = body
            ),
            Expression::Call(function, args) => {
                let args = args
                    .iter()
                    .map(|arg| arg.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "{}({})", function, args)
            }
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            UnaryOperator::Not => write!(f, "!"),
            UnaryOperator::Neg => write!(f, "-"),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BinaryOperator::Plus => write!(f, "+"),
            BinaryOperator::Minus => write!(f, "-"),
            BinaryOperator::Mul => write!(f, "*"),
            BinaryOperator::Div => write!(f, "/"),
            BinaryOperator::Gt => write!(f, ">"),
            BinaryOperator::Lt => write!(f, "<"),
            BinaryOperator::Eq => write!(f, "=="),
            BinaryOperator::NotEq => write!(f, "!="),
        }
    }
}
