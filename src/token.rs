use crate::symbols::{Function, Op};
use std::fmt::{self, Display, Formatter};

/// Classification of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    /// A numeric literal, possibly signed: `-12.5`, `3e-2`, `.5`
    Number,
    /// A function, constant or variable name
    Identifier,
    /// One of `+ - * / ^`, or an inserted implicit multiplication
    Operator(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl LexemeKind {
    /// Check if a lexeme of this kind can be the last one of an operand,
    /// which means a sign directly after it is a binary operator.
    pub fn ends_operand(self) -> bool {
        matches!(self, Self::Number | Self::Identifier | Self::RParen)
    }
}

/// A classified slice of the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// What the lexeme denotes
    pub kind: LexemeKind,
    /// Source text of the lexeme
    pub text: &'a str,
    /// Byte offset of the lexeme in the input
    pub offset: usize,
}

impl<'a> Lexeme<'a> {
    /// Create a lexeme of `kind` for `text`, found at `offset`
    pub fn new(kind: LexemeKind, text: &'a str, offset: usize) -> Self {
        Lexeme { kind, text, offset }
    }

    /// A multiplication that was not written in the input, placed at
    /// `offset`.
    pub fn implicit_mul(offset: usize) -> Self {
        Lexeme {
            kind: LexemeKind::Operator(Op::ImplicitMul),
            text: Op::ImplicitMul.symbol(),
            offset,
        }
    }
}

impl<'a> Display for Lexeme<'a> {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.text)
    }
}

/// Tokens of an expression in reverse polish notation
#[derive(Debug, Clone, PartialEq)]
pub enum RpnToken {
    /// A literal value
    Number(f64),
    /// A variable or constant, resolved at evaluation
    Variable(String),
    /// A binary operator, applied to the two values before it
    Operator(Op),
    /// A unary function, applied to the value before it
    Function(Function),
}

impl Display for RpnToken {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Variable(ref name) => fmt.write_str(name),
            Self::Operator(op) => write!(fmt, "{}", op),
            Self::Function(function) => write!(fmt, "{}", function),
        }
    }
}
