use super::{token::*, Error, LineNumber};
use crate::error;

/// Splits a source line into its line number and tokens.
///
/// Lines that do not start with a digit are not program lines and
/// come back as `None`.
pub fn lex(s: &str) -> Result<Option<(LineNumber, Vec<Token>)>, Error> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Whitespace(s))
    }

    fn text(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if is_basic_whitespace(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        if let Some(word) = Word::from_string(&s) {
            return Some(Token::Word(word));
        }
        Some(Token::Text(s))
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = self.chars.peek()?;
        if is_basic_whitespace(*pk) {
            return self.whitespace();
        }
        self.text()
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Result<Option<(LineNumber, Vec<Token>)>, Error> {
        let ln = s.chars().take_while(|c| is_basic_digit(*c)).count();
        if ln == 0 {
            return Ok(None);
        }
        let line_number = match s[..ln].parse::<LineNumber>() {
            Ok(n) => n,
            Err(_) => {
                return Err(error!(Overflow, ..&(0..ln); "LINE NUMBER OVERFLOW"));
            }
        };
        let body = &s[ln..];
        if let Some((col, ch)) = body.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            let col = ln + col;
            return Err(error!(InvalidCharacter, line_number, ..&(col..col + 1);
                &format!("{:?} IS NOT ASCII", ch)));
        }
        let body = body.trim_start().to_ascii_uppercase();
        let mut tokens: Vec<Token> = BasicLexer {
            chars: body.chars().peekable(),
        }
        .collect();
        tokens.push(Token::Return);
        Ok(Some((line_number, tokens)))
    }
}
