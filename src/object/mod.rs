use std::fmt::{Display, Formatter, Result};
use std::rc::Rc;

use thiserror::Error;

use crate::ast::{BinaryOperator, UnaryOperator};

/// 运行时值，Boolean和Null只由求值器的共享实例给出
#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    /// 携带return值向外传播，不是用户可见的值；None表示return了一个无值表达式
    Return(Option<Rc<Object>>),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::Null => "NULL",
            Object::Return(_) => "RETURN_VALUE",
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Object::Integer(int) => write!(f, "{}", int),
            Object::Boolean(bool) => write!(f, "{}", bool),
            Object::Null => write!(f, "null"),
            Object::Return(Some(obj)) => write!(f, "{}", obj),
            Object::Return(None) => Ok(()),
        }
    }
}

/// 求值错误，只用于宿主层面无法继续的整数运算
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero: {0} / 0")]
    DivisionByZero(i64),
    #[error("integer overflow: {left} {operator} {right}")]
    IntegerOverflow {
        operator: BinaryOperator,
        left: i64,
        right: i64,
    },
    #[error("integer overflow: {0}{1}")]
    NegationOverflow(UnaryOperator, i64),
}
