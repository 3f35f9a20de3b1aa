use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, PartialEq)]
pub enum Token {
    Word(String),
    Empty,
}

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}
impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        self.chars.peek()?;

        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if is_separator(c) {
                break;
            }
            self.chars.next();
            if c.is_ascii_alphanumeric() {
                word.push(c.to_ascii_uppercase());
            }
        }
        if word.is_empty() {
            Some(Token::Empty)
        } else {
            Some(Token::Word(word))
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if is_separator(c) {
                self.chars.next();
            } else {
                break;
            }
        }
    }
}
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

// whitespace as C's isspace sees it; is_ascii_whitespace leaves out \v
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub fn tokenize(text: &str) -> Vec<String> {
    Lexer::new(text)
        .filter_map(|token| match token {
            Token::Word(word) => Some(word),
            Token::Empty => None,
        })
        .collect()
}
