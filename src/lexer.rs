use crate::error::Error;
use crate::options::Options;
use crate::symbols::Op;
use crate::token::{Lexeme, LexemeKind};

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    options: Options,
    /// Kind of the last emitted lexeme, to tell a sign from an operator
    previous: Option<LexemeKind>,
}

impl<'a> Lexer<'a> {
    /// A lexer over `source`, skipping or rejecting unknown characters
    /// depending on `options`
    pub fn new(source: &'a str, options: Options) -> Lexer<'a> {
        Lexer {
            source,
            position: 0,
            options,
            previous: None,
        }
    }

    /// Split the whole input into lexemes
    pub fn tokenize(&mut self) -> Result<Vec<Lexeme<'a>>, Error> {
        let mut output = Vec::new();
        while let Some(lexeme) = self.next_lexeme()? {
            output.push(lexeme);
        }
        log::trace!("lexemes for {:?}: {:?}", self.source, output);
        Ok(output)
    }

    fn next_lexeme(&mut self) -> Result<Option<Lexeme<'a>>, Error> {
        while let Some(c) = self.current() {
            let start = self.position;
            let kind = match c {
                c if c.is_whitespace() => {
                    self.position += c.len_utf8();
                    continue;
                }
                '+' | '-' if self.sign_allowed() && self.starts_number(start + 1) => {
                    self.scan_number()
                }
                c if c.is_ascii_digit() => self.scan_number(),
                '.' if self.starts_number(start) => self.scan_number(),
                c if c.is_ascii_alphabetic() => {
                    self.scan_identifier();
                    LexemeKind::Identifier
                }
                '(' => {
                    self.position += 1;
                    LexemeKind::LParen
                }
                ')' => {
                    self.position += 1;
                    LexemeKind::RParen
                }
                other => {
                    if let Some(op) = Op::from_symbol(other) {
                        self.position += 1;
                        LexemeKind::Operator(op)
                    } else if self.options.strict {
                        return Err(Error::UnexpectedCharacter {
                            character: other,
                            offset: start,
                        });
                    } else {
                        log::trace!("skipping {:?} at offset {}", other, start);
                        self.position += other.len_utf8();
                        continue;
                    }
                }
            };
            self.previous = Some(kind);
            let text = &self.source[start..self.position];
            return Ok(Some(Lexeme::new(kind, text, start)));
        }
        Ok(None)
    }

    fn current(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn byte_at(&self, index: usize) -> Option<u8> {
        self.source.as_bytes().get(index).copied()
    }

    fn digit_at(&self, index: usize) -> bool {
        self.byte_at(index).map_or(false, |b| b.is_ascii_digit())
    }

    /// A sign is part of a number only when no operand comes right before it
    fn sign_allowed(&self) -> bool {
        !self.previous.map_or(false, LexemeKind::ends_operand)
    }

    /// Check if a number without sign starts at `index`
    fn starts_number(&self, index: usize) -> bool {
        self.digit_at(index) || (self.byte_at(index) == Some(b'.') && self.digit_at(index + 1))
    }

    fn skip_digits(&mut self) {
        while self.digit_at(self.position) {
            self.position += 1;
        }
    }

    /// Scan `[-+]?digits[.digits]?([eE][-+]?digits)?`
    fn scan_number(&mut self) -> LexemeKind {
        if matches!(self.byte_at(self.position), Some(b'+' | b'-')) {
            self.position += 1;
        }
        self.skip_digits();
        if self.byte_at(self.position) == Some(b'.') && self.digit_at(self.position + 1) {
            self.position += 1;
            self.skip_digits();
        }
        if matches!(self.byte_at(self.position), Some(b'e' | b'E')) {
            let mut exponent = self.position + 1;
            if matches!(self.byte_at(exponent), Some(b'+' | b'-')) {
                exponent += 1;
            }
            // a bare `e` is the constant, as in `2e`
            if self.digit_at(exponent) {
                self.position = exponent;
                self.skip_digits();
            }
        }
        LexemeKind::Number
    }

    fn scan_identifier(&mut self) {
        while self
            .byte_at(self.position)
            .map_or(false, |b| b.is_ascii_alphanumeric())
        {
            self.position += 1;
        }
    }
}
