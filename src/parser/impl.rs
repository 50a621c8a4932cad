use crate::ast::{BinaryOperator, BlockStatement, Expression, Program, Statement, UnaryOperator};
use crate::lexer::Lexer;
use crate::parser::trace::Tracer;
use crate::parser::{InfixParseFn, ParseResult, Parser, ParserError, Precedence, PrefixParseFn};
use crate::token::Token;

impl Parser {
    // 从Lexer构建Parser
    pub fn new(lexer: Lexer) -> Parser {
        let mut parser = Parser {
            lexer,
            token: Token::Eof,
            peek_token: Token::Eof,
            errors: vec![],
            block_depth: 0,
            tracer: Tracer::default(),
        };
        parser.next_token();
        parser.next_token();
        parser
    }
    /// 从字符串构建Parser
    pub fn from(input: &str) -> Self {
        Parser::new(Lexer::new(input))
    }
    /// 开关解析过程跟踪
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.tracer = Tracer::new(enabled);
        self
    }
    /// 解析程序，出错后记录错误并跳过该语句继续
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];
        while self.has_next() {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
            self.next_token();
        }
        Program { statements }
    }
    /// 读取下一个Token
    fn next_token(&mut self) {
        self.token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }
    /// 跳到语句边界：同层的`;`，或闭合出错语句所在块的`}`
    fn synchronize(&mut self) {
        loop {
            match self.token {
                Token::Eof => break,
                Token::Semicolon if self.block_depth == 0 => break,
                Token::Lbrace => self.block_depth += 1,
                Token::Rbrace => {
                    self.block_depth = self.block_depth.saturating_sub(1);
                    if self.block_depth == 0 {
                        self.skip_semicolon();
                        break;
                    }
                }
                _ => {}
            }
            self.next_token();
        }
        self.block_depth = 0;
    }
    /// 解析语句
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.traced("parse_statement", |parser| match &parser.token {
            Token::Let => parser.parse_let_statement(),
            Token::Return => parser.parse_return_statement(),
            Token::Lbrace => {
                let block = parser.parse_block_statement()?;
                parser.skip_semicolon();
                Ok(Statement::Block(block))
            }
            _ => parser.parse_expression_statement(),
        })
    }
    /// 解析let语句
    ///
    /// let identifier = expression;
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        // cur_token is let
        let name = match &self.peek_token {
            Token::Ident(ident) => ident.clone(),
            token => {
                return Err(ParserError::Expected(
                    Token::Ident(String::new()),
                    token.clone(),
                ))
            }
        };
        self.next_token(); //eat let
        self.expect_peek(Token::Assign)?;
        self.next_token(); //eat =
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Statement::Let(name, expression))
    }
    /// 解析return语句
    ///
    /// return expr;
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token(); //eat return
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();
        Ok(Statement::Return(expression))
    }
    /// 解析表达式语句
    ///
    /// expr;
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        self.traced("parse_expression_statement", |parser| {
            let expression = parser.parse_expression(Precedence::Lowest)?;
            parser.skip_semicolon();
            Ok(Statement::Expression(expression))
        })
    }
    /// 解析语句块
    ///
    /// {
    ///   statement;
    ///   statement;
    /// }
    fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        self.block_depth += 1;
        self.next_token(); // eat {
        let mut statements = vec![];
        while self.token != Token::Rbrace {
            if !self.has_next() {
                return Err(ParserError::Expected(Token::Rbrace, Token::Eof));
            }
            statements.push(self.parse_statement()?);
            self.next_token();
        }
        self.block_depth -= 1;
        Ok(BlockStatement { statements })
    }
    /// 解析表达式
    fn parse_expression(&mut self, precedence: Precedence) -> ParseResult {
        self.traced("parse_expression", |parser| {
            let prefix = Parser::prefix_parse_fn(&parser.token)
                .ok_or_else(|| ParserError::NoPrefixParseFn(parser.token.clone()))?;
            let mut left_expr = prefix(parser)?;
            while parser.peek_token != Token::Semicolon {
                match Parser::infix_rule(&parser.peek_token) {
                    Some((peek_precedence, infix)) if precedence < peek_precedence => {
                        parser.next_token();
                        left_expr = infix(parser, left_expr)?;
                    }
                    _ => break,
                }
            }
            Ok(left_expr)
        })
    }
    ///解析分组表达式
    fn parse_grouped_expression(&mut self) -> ParseResult {
        self.next_token(); // eat (
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::Rparen)?;
        Ok(expr)
    }
    ///解析if表达式
    ///
    /// if (condition) { consequence } else { alternative }
    fn parse_if_expression(&mut self) -> ParseResult {
        self.expect_peek(Token::Lparen)?;
        self.next_token(); // eat (
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(Token::Rparen)?;
        self.expect_peek(Token::Lbrace)?;
        let consequence = self.parse_block_statement()?;

        let mut alternative = None;
        if self.peek_token == Token::Else {
            self.next_token(); // eat }
            self.expect_peek(Token::Lbrace)?;
            alternative = Some(self.parse_block_statement()?);
        }
        Ok(Expression::If(Box::new(condition), consequence, alternative))
    }
    /// 表达式位置上的语句块
    fn parse_block_expression(&mut self) -> ParseResult {
        self.parse_block_statement().map(Expression::Block)
    }
    /// 解析函数表达式
    ///
    /// fn(a, b) { blocks }
    fn parse_function_literal(&mut self) -> ParseResult {
        //cur token: fn
        self.expect_peek(Token::Lparen)?;
        let params = self.parse_function_parameters()?;
        self.expect_peek(Token::Lbrace)?;
        let body = self.parse_block_statement()?;
        Ok(Expression::FunctionLiteral(params, body))
    }
    /// 解析函数声明参数列表
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut params = vec![];
        if self.peek_token == Token::Rparen {
            self.next_token();
            return Ok(params);
        }
        self.next_token(); // eat (
        params.push(self.parse_identifier_string()?);
        while self.peek_token == Token::Comma {
            self.next_token(); // eat param
            self.next_token(); // eat ,
            params.push(self.parse_identifier_string()?);
        }
        self.expect_peek(Token::Rparen)?;
        Ok(params)
    }
    /// 解析函数调用表达式
    fn parse_call_expression(&mut self, function: Expression) -> ParseResult {
        let arguments = self.parse_call_arguments()?;
        Ok(Expression::Call(Box::new(function), arguments))
    }
    /// 解析函数调用参数列表
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = vec![];
        if self.peek_token == Token::Rparen {
            self.next_token();
            return Ok(arguments);
        }
        self.next_token(); // eat (
        arguments.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_token == Token::Comma {
            self.next_token(); // eat expr
            self.next_token(); // eat ,
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(Token::Rparen)?;
        Ok(arguments)
    }
    /*一元表达式相关*/
    /// 解析一元表达式
    fn parse_unary_expression(&mut self) -> ParseResult {
        self.traced("parse_unary_expression", |parser| {
            let operator = match parser.token {
                Token::Bang => UnaryOperator::Not,
                Token::Minus => UnaryOperator::Neg,
                _ => return Err(ParserError::NoPrefixParseFn(parser.token.clone())),
            };
            parser.next_token();
            let expr = parser.parse_expression(Precedence::Prefix)?;
            Ok(Expression::Unary(operator, Box::new(expr)))
        })
    }
    /// 前缀解析函数表
    fn prefix_parse_fn(token: &Token) -> Option<PrefixParseFn> {
        match token {
            Token::Ident(_) => Some(Parser::parse_identifier),
            Token::Int(_) => Some(Parser::parse_integer_literal),
            Token::True | Token::False => Some(Parser::parse_boolean),

            Token::Bang | Token::Minus => Some(Parser::parse_unary_expression),

            Token::Lparen => Some(Parser::parse_grouped_expression),
            Token::Lbrace => Some(Parser::parse_block_expression),
            Token::If => Some(Parser::parse_if_expression),
            Token::Function => Some(Parser::parse_function_literal),

            _ => None,
        }
    }

    /*二元表达式相关*/
    /// 解析二元表达式，右侧按同一优先级解析，因此左结合
    fn parse_binary_expression(&mut self, left: Expression) -> ParseResult {
        self.traced("parse_binary_expression", |parser| {
            let (precedence, operator) = match parser.token {
                Token::Eq => (Precedence::Equals, BinaryOperator::Eq),
                Token::NotEq => (Precedence::Equals, BinaryOperator::NotEq),
                Token::Lt => (Precedence::LessGreater, BinaryOperator::Lt),
                Token::Gt => (Precedence::LessGreater, BinaryOperator::Gt),
                Token::Plus => (Precedence::Sum, BinaryOperator::Plus),
                Token::Minus => (Precedence::Sum, BinaryOperator::Minus),
                Token::Asterisk => (Precedence::Product, BinaryOperator::Mul),
                Token::Slash => (Precedence::Product, BinaryOperator::Div),
                _ => return Err(ParserError::NoPrefixParseFn(parser.token.clone())),
            };
            parser.next_token(); //eat op
            let right = parser.parse_expression(precedence)?;
            Ok(Expression::Binary(operator, Box::new(left), Box::new(right)))
        })
    }
    /// 中缀规则表：优先级与解析函数放在一起
    fn infix_rule(token: &Token) -> Option<(Precedence, InfixParseFn)> {
        let binary: InfixParseFn = Parser::parse_binary_expression;
        let call: InfixParseFn = Parser::parse_call_expression;
        match token {
            Token::Eq | Token::NotEq => Some((Precedence::Equals, binary)),
            Token::Lt | Token::Gt => Some((Precedence::LessGreater, binary)),
            Token::Plus | Token::Minus => Some((Precedence::Sum, binary)),
            Token::Slash | Token::Asterisk => Some((Precedence::Product, binary)),
            Token::Lparen => Some((Precedence::Call, call)),
            _ => None,
        }
    }

    /*基本解析*/
    /// 解析标识符
    fn parse_identifier(&mut self) -> ParseResult {
        self.parse_identifier_string().map(Expression::Identifier)
    }
    /// 解析标识符字符串
    fn parse_identifier_string(&mut self) -> ParseResult<String> {
        if let Token::Ident(id) = &self.token {
            Ok(id.to_string())
        } else {
            Err(ParserError::Expected(
                Token::Ident(String::new()),
                self.token.clone(),
            ))
        }
    }
    /// 解析整型字面量
    fn parse_integer_literal(&mut self) -> ParseResult {
        self.traced("parse_integer_literal", |parser| match &parser.token {
            Token::Int(int) => int
                .parse()
                .map(Expression::IntLiteral)
                .map_err(|_| ParserError::ParseInt(int.to_string())),
            token => Err(ParserError::Expected(
                Token::Int(String::new()),
                token.clone(),
            )),
        })
    }
    ///解析布尔值
    fn parse_boolean(&mut self) -> ParseResult {
        match &self.token {
            Token::True => Ok(Expression::BoolLiteral(true)),
            Token::False => Ok(Expression::BoolLiteral(false)),
            tk => Err(ParserError::Expected(Token::True, tk.clone())),
        }
    }
    /*其他*/
    /// 断言下个Token为期待值，是则前进
    fn expect_peek(&mut self, expected: Token) -> ParseResult<()> {
        if self.peek_token == expected {
            self.next_token();
            Ok(())
        } else {
            Err(ParserError::Expected(expected, self.peek_token.clone()))
        }
    }
    fn skip_semicolon(&mut self) {
        if self.peek_token == Token::Semicolon {
            self.next_token(); //eat ;
        }
    }
    /// 判断是否还有Token
    fn has_next(&self) -> bool {
        self.token != Token::Eof
    }
    fn traced<T>(&mut self, name: &'static str, parse: impl FnOnce(&mut Self) -> T) -> T {
        let literal = self.token.literal();
        self.tracer.begin(name, &literal);
        let result = parse(self);
        self.tracer.end(name);
        result
    }
    /// 返回错误信息
    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }
    /// 错误信息文本
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|err| err.to_string()).collect()
    }
    /// 取出已记录的跟踪行
    pub fn take_trace(&mut self) -> Vec<String> {
        self.tracer.take()
    }
}
