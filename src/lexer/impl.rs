use crate::lexer::{is_digit, is_letter, Lexer};
use crate::token::{Token, EOF};

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            chars: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: EOF,
        };
        lexer.read_char();
        lexer
    }
    /// 读取Token，输入耗尽后始终返回Eof
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let token = match self.ch {
            '(' => Token::Lparen,
            ')' => Token::Rparen,
            '{' => Token::Lbrace,
            '}' => Token::Rbrace,

            ',' => Token::Comma,
            ';' => Token::Semicolon,

            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '<' => Token::Lt,
            '>' => Token::Gt,
            '!' => self.peek_is_eat_or('=', Token::NotEq, Token::Bang),
            '=' => self.peek_is_eat_or('=', Token::Eq, Token::Assign),
            EOF => Token::Eof,
            c => {
                // 标识符和数字已经读过了最后一个字符
                return if is_letter(c) {
                    let id = self.read_identifier();
                    Token::lookup_ident(&id)
                } else if is_digit(c) {
                    Token::Int(self.read_number())
                } else {
                    self.read_char();
                    Token::Illegal(c)
                };
            }
        };
        self.read_char();
        token
    }
    //读取标识符
    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        self.slice(position)
    }
    //读取数字
    fn read_number(&mut self) -> String {
        let position = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        self.slice(position)
    }
    fn slice(&self, start: usize) -> String {
        self.chars[start..self.position].iter().collect()
    }
    //忽略空格
    fn skip_whitespace(&mut self) {
        while self.ch == ' ' || self.ch == '\r' || self.ch == '\t' || self.ch == '\n' {
            self.read_char();
        }
    }
    //读取一个字符
    fn read_char(&mut self) {
        self.ch = self.chars.get(self.read_position).copied().unwrap_or(EOF);
        self.position = self.read_position;
        if self.read_position < self.chars.len() {
            self.read_position += 1;
        }
    }
    //查看字符
    fn peek_char(&self) -> char {
        self.chars.get(self.read_position).copied().unwrap_or(EOF)
    }
    //预检下个字符是否为期待字符，是则返回期待Token，并向后读取一个字符，否则返回默认Token
    fn peek_is_eat_or(&mut self, c: char, expect_token: Token, default_token: Token) -> Token {
        if self.peek_char() == c {
            self.read_char();
            expect_token
        } else {
            default_token
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}
