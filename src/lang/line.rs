use super::lex::*;
use super::token::*;
use super::{Error, LineNumber};
use crate::error;

/// One numbered line of a BASIC listing.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
}

impl Line {
    /// `Ok(None)` when the text has no leading line number.
    pub fn new(s: &str) -> Result<Option<Line>, Error> {
        Ok(lex(s)?.map(|(number, tokens)| Line { number, tokens }))
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Body bytes as the ROM stores them, ending in CR.
    ///
    /// When the line opens with a keyword, the ROM supplies the
    /// blank after it on listing, so the first blank that follows
    /// is not stored.
    pub fn code(&self) -> Vec<u8> {
        let mut code = vec![];
        let mut elide_space = false;
        for (index, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Word(word) => {
                    if index == 0 {
                        elide_space = true;
                    }
                    code.push(word.code());
                }
                Token::Whitespace(s) | Token::Text(s) => {
                    for ch in s.bytes() {
                        if elide_space && index == 1 && ch == b' ' {
                            elide_space = false;
                            continue;
                        }
                        code.push(ch);
                    }
                }
                Token::Return => code.push(CR),
            }
        }
        code
    }

    /// `[number_hi, number_lo, length, code...]` where length
    /// counts the code bytes including the CR.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let code = self.code();
        if code.len() > u8::max_value() as usize {
            return Err(error!(LineBufferOverflow, self.number;
                &format!("{} BYTES", code.len())));
        }
        let mut bytes = Vec::with_capacity(code.len() + 3);
        bytes.extend_from_slice(&self.number.to_be_bytes());
        bytes.push(code.len() as u8);
        bytes.extend(code);
        Ok(bytes)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: String = self.tokens.iter().map(|s| s.to_string()).collect();
        write!(f, "{} {}", self.number, s)
    }
}
