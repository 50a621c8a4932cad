mod r#impl;

/// 词法分析器，按需产出Token
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    /// 当前字符位置
    position: usize,
    /// 下一个读取位置
    read_position: usize,
    ch: char,
}

fn is_letter(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}
