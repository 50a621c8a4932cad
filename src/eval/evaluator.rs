use std::rc::Rc;

use crate::ast::{BinaryOperator, BlockStatement, Expression, Program, Statement, UnaryOperator};
use crate::eval::{EvalResult, Evaluator};
use crate::object::{EvalError, Object};

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            true_obj: Rc::new(Object::Boolean(true)),
            false_obj: Rc::new(Object::Boolean(false)),
            null_obj: Rc::new(Object::Null),
        }
    }

    /// 共享的null
    pub fn null(&self) -> Rc<Object> {
        Rc::clone(&self.null_obj)
    }

    /// 共享的true/false
    pub fn boolean(&self, value: bool) -> Rc<Object> {
        if value {
            Rc::clone(&self.true_obj)
        } else {
            Rc::clone(&self.false_obj)
        }
    }

    /// # 程序求值，遇到return立即结束并解包
    pub fn eval(&self, program: &Program) -> EvalResult {
        let mut result = None;
        for statement in &program.statements {
            result = self.eval_statement(statement)?;
            if let Some(Object::Return(value)) = result.as_deref() {
                return Ok(value.clone());
            }
        }
        Ok(result)
    }

    /// ## 单条语句求值
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult {
        match statement {
            Statement::Expression(expr) => self.eval_expression(expr),
            Statement::Block(block) => self.eval_block_statement(block),
            Statement::Return(expr) => {
                let value = self.eval_expression(expr)?;
                Ok(Some(Rc::new(Object::Return(value))))
            }
            Statement::Let(_, _) => Ok(None),
        }
    }

    /// ## 语句块求值，return值原样向外传播
    fn eval_block_statement(&self, block: &BlockStatement) -> EvalResult {
        let mut result = None;
        for statement in &block.statements {
            result = self.eval_statement(statement)?;
            if matches!(result.as_deref(), Some(Object::Return(_))) {
                return Ok(result);
            }
        }
        Ok(result)
    }

    /// # 表达式求值
    pub fn eval_expression(&self, expr: &Expression) -> EvalResult {
        match expr {
            Expression::IntLiteral(int) => Ok(Some(Rc::new(Object::Integer(*int)))),
            Expression::BoolLiteral(bool) => Ok(Some(self.boolean(*bool))),

            Expression::Unary(op, operand) => match self.eval_expression(operand)? {
                Some(operand) => self.eval_unary_expression(*op, operand).map(Some),
                // 无值也不是true/false/null
                None if *op == UnaryOperator::Not => Ok(Some(self.boolean(false))),
                None => Ok(None),
            },
            Expression::Binary(op, left, right) => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;
                match (left, right) {
                    (Some(left), Some(right)) => {
                        self.eval_binary_expression(*op, left, right).map(Some)
                    }
                    _ => Ok(None),
                }
            }

            Expression::If(cond, consequence, alternative) => {
                self.eval_if_expression(cond, consequence, alternative.as_ref())
            }
            Expression::Block(block) => self.eval_block_statement(block),

            Expression::Identifier(_)
            | Expression::FunctionLiteral(_, _)
            | Expression::Call(_, _) => Ok(None),
        }
    }

    /// ## if表达式求值
    fn eval_if_expression(
        &self,
        cond: &Expression,
        consequence: &BlockStatement,
        alternative: Option<&BlockStatement>,
    ) -> EvalResult {
        let condition = self.eval_expression(cond)?;
        if condition.map_or(true, |condition| self.is_truthy(&condition)) {
            self.eval_block_statement(consequence)
        } else if let Some(alternative) = alternative {
            self.eval_block_statement(alternative)
        } else {
            Ok(Some(self.null()))
        }
    }

    /// null和false以外的值都为真，包括0
    fn is_truthy(&self, object: &Rc<Object>) -> bool {
        !Rc::ptr_eq(object, &self.null_obj) && !Rc::ptr_eq(object, &self.false_obj)
    }

    /// # 一元表达式求值
    fn eval_unary_expression(
        &self,
        operator: UnaryOperator,
        operand: Rc<Object>,
    ) -> EvalResult<Rc<Object>> {
        match operator {
            UnaryOperator::Not => Ok(self.eval_not_operator_expression(&operand)),
            UnaryOperator::Neg => self.eval_neg_operator_expression(&operand),
        }
    }

    /// ## 取非
    fn eval_not_operator_expression(&self, operand: &Rc<Object>) -> Rc<Object> {
        if Rc::ptr_eq(operand, &self.true_obj) {
            self.boolean(false)
        } else if Rc::ptr_eq(operand, &self.false_obj) || Rc::ptr_eq(operand, &self.null_obj) {
            self.boolean(true)
        } else {
            self.boolean(false)
        }
    }

    /// ## 取反
    fn eval_neg_operator_expression(&self, operand: &Object) -> EvalResult<Rc<Object>> {
        match operand {
            Object::Integer(int) => int
                .checked_neg()
                .map(|neg| Rc::new(Object::Integer(neg)))
                .ok_or(EvalError::NegationOverflow(UnaryOperator::Neg, *int)),
            _ => Ok(self.null()),
        }
    }

    /// # 二元表达式求值，非整数的==/!=比较共享实例的地址
    fn eval_binary_expression(
        &self,
        operator: BinaryOperator,
        left: Rc<Object>,
        right: Rc<Object>,
    ) -> EvalResult<Rc<Object>> {
        if let (Object::Integer(l), Object::Integer(r)) = (left.as_ref(), right.as_ref()) {
            return self.eval_integer_binary_expression(operator, *l, *r);
        }
        match operator {
            BinaryOperator::Eq => Ok(self.boolean(Rc::ptr_eq(&left, &right))),
            BinaryOperator::NotEq => Ok(self.boolean(!Rc::ptr_eq(&left, &right))),
            _ => Ok(self.null()),
        }
    }

    /// ## 整数二元表达式求值
    fn eval_integer_binary_expression(
        &self,
        operator: BinaryOperator,
        left: i64,
        right: i64,
    ) -> EvalResult<Rc<Object>> {
        let overflow = EvalError::IntegerOverflow {
            operator,
            left,
            right,
        };
        let value = match operator {
            BinaryOperator::Plus => left.checked_add(right).ok_or(overflow)?,
            BinaryOperator::Minus => left.checked_sub(right).ok_or(overflow)?,
            BinaryOperator::Mul => left.checked_mul(right).ok_or(overflow)?,
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero(left));
                }
                left.checked_div(right).ok_or(overflow)?
            }
            BinaryOperator::Gt => return Ok(self.boolean(left > right)),
            BinaryOperator::Lt => return Ok(self.boolean(left < right)),
            BinaryOperator::Eq => return Ok(self.boolean(left == right)),
            BinaryOperator::NotEq => return Ok(self.boolean(left != right)),
        };
        Ok(Rc::new(Object::Integer(value)))
    }
}
