use std::rc::Rc;

use crate::object::{EvalError, Object};

mod evaluator;
mod test;

/// Ok(None)为无值，区别于语言中的null
pub type EvalResult<T = Option<Rc<Object>>> = Result<T, EvalError>;

/// 树遍历求值器，持有共享的true/false/null
#[derive(Debug)]
pub struct Evaluator {
    true_obj: Rc<Object>,
    false_obj: Rc<Object>,
    null_obj: Rc<Object>,
}
