#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::ast::{BinaryOperator, Expression, Program, Statement, UnaryOperator};
    use crate::eval::{EvalResult, Evaluator};
    use crate::object::{EvalError, Object};
    use crate::parser::Parser;

    #[test]
    fn test_eval_integer_expression() {
        let inputs = [
            ("5", Object::Integer(5)),
            ("10", Object::Integer(10)),
            ("-5", Object::Integer(-5)),
            ("-10", Object::Integer(-10)),
            ("5+5+5+5-10", Object::Integer(10)),
            ("2*2*2*2*2", Object::Integer(32)),
            ("-50+100+-50", Object::Integer(0)),
            ("5*2+10", Object::Integer(20)),
            ("5+2*10", Object::Integer(25)),
            ("20+2*-10", Object::Integer(0)),
            ("50/2*2 +10", Object::Integer(60)),
            ("2*(5+10)", Object::Integer(30)),
            ("3*3*3 +10", Object::Integer(37)),
            ("3*(3*3) +10", Object::Integer(37)),
            ("(5+10*2+15/3)*2+-10", Object::Integer(50)),
            ("7 / 2", Object::Integer(3)),
            ("-7 / 2", Object::Integer(-3)),
        ];
        check_input(&inputs);
    }

    #[test]
    fn test_eval_bool_operator() {
        let tests = [
            ("true", Object::Boolean(true)),
            ("false", Object::Boolean(false)),
            ("!true", Object::Boolean(false)),
            ("!false", Object::Boolean(true)),
            ("!5", Object::Boolean(false)),
            ("!0", Object::Boolean(false)),
            ("!!5", Object::Boolean(true)),
            ("!!true", Object::Boolean(true)),
            ("!!false", Object::Boolean(false)),
            ("1<2", Object::Boolean(true)),
            ("1>2", Object::Boolean(false)),
            ("1<1", Object::Boolean(false)),
            ("1>1", Object::Boolean(false)),
            ("1==1", Object::Boolean(true)),
            ("1!=1", Object::Boolean(false)),
            ("1==2", Object::Boolean(false)),
            ("1!=2", Object::Boolean(true)),
            ("true == true", Object::Boolean(true)),
            ("false == false", Object::Boolean(true)),
            ("true == false", Object::Boolean(false)),
            ("true != false", Object::Boolean(true)),
            ("(1<2) == true", Object::Boolean(true)),
            ("(1<2)==false", Object::Boolean(false)),
            ("(1>2) ==true", Object::Boolean(false)),
            ("(1>2) == false", Object::Boolean(true)),
            ("5 == true", Object::Boolean(false)),
            ("5 != true", Object::Boolean(true)),
            ("if (false) { 1 } == if (false) { 2 }", Object::Boolean(true)),
        ];
        check_input(&tests)
    }

    #[test]
    fn test_unsupported_operands_are_null() {
        let inputs = [
            ("-true", Object::Null),
            ("5 + true", Object::Null),
            ("true + false", Object::Null),
            ("true < false", Object::Null),
            ("-if (false) { 1 }", Object::Null),
            ("!if (false) { 1 }", Object::Boolean(true)),
        ];
        check_input(&inputs);
    }

    #[test]
    fn test_if_else_expression() {
        let inputs = [
            ("if(true) {10}", Object::Integer(10)),
            ("if(false) {10}", Object::Null),
            ("if(1) { 10 }", Object::Integer(10)),
            ("if(0) { 10 }", Object::Integer(10)),
            ("if(1<2) { 10 }", Object::Integer(10)),
            ("if(1>2) { 10 }", Object::Null),
            ("if(1<2) { 10 } else { 20 }", Object::Integer(10)),
            ("if(1>2) { 10 } else { 20 }", Object::Integer(20)),
            ("if (if (false) { 1 }) { 10 } else { 20 }", Object::Integer(20)),
        ];
        check_input(&inputs);
    }

    #[test]
    fn test_return_statement() {
        let inputs = [
            ("return 10;", Object::Integer(10)),
            ("return 10;9;", Object::Integer(10)),
            ("return 2 * 5;9;", Object::Integer(10)),
            ("9;return 2 * 5;9;", Object::Integer(10)),
            (
                r"
            if (10 > 1) {
                if (10 > 1) {
                    return 10;
                }
                return 1;
            }
            ",
                Object::Integer(10),
            ),
            ("{ 1; return 2; 3 }; 4", Object::Integer(2)),
            ("let x = { return 7; }; 8", Object::Integer(8)),
        ];
        check_input(&inputs);
    }

    #[test]
    fn test_block_keeps_return_wrapped() {
        let evaluator = Evaluator::new();
        let program = parse("{ return 3; 4 }");
        let evaluated = evaluator.eval_statement(&program.statements[0]).unwrap();
        assert_eq!(
            evaluated.as_deref(),
            Some(&Object::Return(Some(Rc::new(Object::Integer(3)))))
        );
        let unwrapped = evaluator.eval(&program).unwrap();
        assert_eq!(unwrapped.as_deref(), Some(&Object::Integer(3)));
    }

    #[test]
    fn test_absent_results() {
        let inputs = [
            "",
            "let a = 5;",
            "foobar",
            "fn(x) { x }",
            "add(1, 2)",
            "-a",
            "1 + a",
            "{}",
            "if (true) {}",
            "return a; 5",
            "if (true) { return a; 5 }; 6",
            "{ return foobar; }; 7",
        ];
        for input in inputs {
            let evaluated = eval(input);
            assert_eq!(evaluated, Ok(None), "input: {}", input);
        }
        assert_eq!(
            eval("5; foobar").map(|obj| obj.is_some()),
            Ok(false),
            "last statement decides the result"
        );
        assert_eq!(
            eval("foobar; 5").unwrap().as_deref(),
            Some(&Object::Integer(5))
        );
    }

    #[test]
    fn test_absent_operand_of_not_and_if() {
        let inputs = [
            ("!a", Object::Boolean(false)),
            ("!!a", Object::Boolean(true)),
            ("!add(1, 2)", Object::Boolean(false)),
            ("if (a) { 1 }", Object::Integer(1)),
            ("if (a) { 1 } else { 2 }", Object::Integer(1)),
            ("if (fn(x) { x }) { 3 }", Object::Integer(3)),
            ("if (!a) { 1 } else { 2 }", Object::Integer(2)),
        ];
        check_input(&inputs);
    }

    #[test]
    fn test_shared_instances() {
        let evaluator = Evaluator::new();
        let t = evaluator.eval(&parse("1 < 2")).unwrap().unwrap();
        let f = evaluator.eval(&parse("!true")).unwrap().unwrap();
        let n = evaluator.eval(&parse("if (false) { 1 }")).unwrap().unwrap();
        assert!(Rc::ptr_eq(&t, &evaluator.boolean(true)));
        assert!(Rc::ptr_eq(&f, &evaluator.boolean(false)));
        assert!(Rc::ptr_eq(&n, &evaluator.null()));

        let one = evaluator.eval(&parse("1")).unwrap().unwrap();
        let other = evaluator.eval(&parse("1")).unwrap().unwrap();
        assert!(!Rc::ptr_eq(&one, &other));
    }

    #[test]
    fn test_eval_node_kinds_directly() {
        let evaluator = Evaluator::new();
        let expr = Expression::Unary(
            UnaryOperator::Neg,
            Box::new(Expression::Binary(
                BinaryOperator::Mul,
                Box::new(Expression::IntLiteral(6)),
                Box::new(Expression::IntLiteral(7)),
            )),
        );
        assert_eq!(
            evaluator.eval_expression(&expr).unwrap().as_deref(),
            Some(&Object::Integer(-42))
        );
        let statement = Statement::Return(Expression::BoolLiteral(false));
        assert_eq!(
            evaluator.eval_statement(&statement).unwrap().as_deref(),
            Some(&Object::Return(Some(Rc::new(Object::Boolean(false)))))
        );
        let statement = Statement::Return(Expression::Identifier("a".to_string()));
        assert_eq!(
            evaluator.eval_statement(&statement).unwrap().as_deref(),
            Some(&Object::Return(None))
        );
    }

    #[test]
    fn test_error_handling() {
        let inputs = [
            ("10 / 0", EvalError::DivisionByZero(10)),
            ("1; if (true) { 5 / (2 - 2) }; 3", EvalError::DivisionByZero(5)),
            (
                "9223372036854775807 + 1",
                EvalError::IntegerOverflow {
                    operator: BinaryOperator::Plus,
                    left: i64::MAX,
                    right: 1,
                },
            ),
            (
                "-9223372036854775807 - 2",
                EvalError::IntegerOverflow {
                    operator: BinaryOperator::Minus,
                    left: -i64::MAX,
                    right: 2,
                },
            ),
            (
                "4611686018427387904 * 2",
                EvalError::IntegerOverflow {
                    operator: BinaryOperator::Mul,
                    left: 4611686018427387904,
                    right: 2,
                },
            ),
            (
                "(-9223372036854775807 - 1) / -1",
                EvalError::IntegerOverflow {
                    operator: BinaryOperator::Div,
                    left: i64::MIN,
                    right: -1,
                },
            ),
            (
                "-(-9223372036854775807 - 1)",
                EvalError::NegationOverflow(UnaryOperator::Neg, i64::MIN),
            ),
        ];
        check_error(&inputs);
        assert_eq!(
            EvalError::DivisionByZero(10).to_string(),
            "division by zero: 10 / 0"
        );
    }

    #[test]
    fn test_display() {
        let tests = [
            ("5", "5"),
            ("-5", "-5"),
            ("true", "true"),
            ("if (false) { 1 }", "null"),
        ];
        for (input, expected) in tests {
            let evaluated = eval(input).unwrap().unwrap();
            assert_eq!(evaluated.to_string(), expected);
        }
        let ret = Object::Return(Some(Rc::new(Object::Integer(1))));
        assert_eq!(ret.to_string(), "1");
        assert_eq!(ret.type_name(), "RETURN_VALUE");
        assert_eq!(Object::Return(None).to_string(), "");
    }

    /*辅助函数*/
    fn check_input(inputs: &[(&str, Object)]) {
        for (i, (input, expected)) in inputs.iter().enumerate() {
            match eval(input) {
                Ok(Some(evaluated)) => {
                    assert_eq!(evaluated.as_ref(), expected, "Error at index[{}]", i)
                }
                Ok(None) => panic!("no value, input: {}", input),
                Err(err) => panic!("eval error: {} ,input: {}", err, input),
            }
        }
    }

    fn check_error(inputs: &[(&str, EvalError)]) {
        for (i, (input, expected)) in inputs.iter().enumerate() {
            match eval(input) {
                Err(err) => assert_eq!(&err, expected, "Error at index[{}]", i),
                Ok(evaluated) => panic!("unexpected: input: {}, evaluated: {:?}", input, evaluated),
            }
        }
    }

    fn parse(input: &str) -> Program {
        let mut parser = Parser::from(input);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "parser errors: {:?}", parser.errors());
        program
    }

    fn eval(input: &str) -> EvalResult {
        Evaluator::new().eval(&parse(input))
    }
}
