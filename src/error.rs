use thiserror::Error;

/// Error type for the plotexpr crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An identifier is neither a constant nor bound in the scope
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    /// An operator or function ran out of values on the evaluation stack
    #[error("Insufficient operands")]
    InsufficientOperands,
    /// The evaluation did not end with exactly one value
    #[error("Invalid expression")]
    InvalidExpression,
    /// A character outside of the expression language, in strict mode
    #[error("Unexpected character '{character}' at offset {offset}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Byte offset of the character in the input
        offset: usize,
    },
    /// A parenthesis without its counterpart, in strict mode
    #[error("Unbalanced parenthesis at offset {offset}")]
    UnbalancedParenthesis {
        /// Byte offset of the parenthesis in the input
        offset: usize,
    },
    /// A number lexeme that `f64` parsing rejects. Lexemes built by
    /// [`Lexer`](crate::Lexer) always parse, overflowing literals become
    /// infinite; this only comes from hand-built lexemes given to
    /// [`to_rpn`](crate::to_rpn).
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    /// A grid holding more points than the sampling limit
    #[error("Grid has more than {limit} points")]
    GridTooLarge {
        /// Largest number of points accepted
        limit: usize,
    },
}
