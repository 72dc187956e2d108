use crate::symbols::{is_constant, is_function};
use crate::token::{Lexeme, LexemeKind};

/// Role of a lexeme when looking for juxtaposed operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Number,
    /// An identifier which is neither a function nor a constant
    Variable,
    Function,
    LParen,
    RParen,
    /// Constants and operators never take part in implicit multiplication
    Other,
}

fn role(lexeme: &Lexeme) -> Role {
    match lexeme.kind {
        LexemeKind::Number => Role::Number,
        LexemeKind::Identifier if is_function(lexeme.text) => Role::Function,
        LexemeKind::Identifier if is_constant(lexeme.text) => Role::Other,
        LexemeKind::Identifier => Role::Variable,
        LexemeKind::LParen => Role::LParen,
        LexemeKind::RParen => Role::RParen,
        LexemeKind::Operator(_) => Role::Other,
    }
}

/// Check if a multiplication is implied between `current` and `next`.
fn implies_mul(current: Role, next: Role) -> bool {
    matches!(
        (current, next),
        (Role::Number, Role::Variable)
            | (Role::Number, Role::Function)
            | (Role::Number, Role::LParen)
            | (Role::Variable, Role::Number)
            | (Role::Variable, Role::Function)
            | (Role::Variable, Role::LParen)
            | (Role::RParen, Role::Number)
            | (Role::RParen, Role::Variable)
            | (Role::RParen, Role::Function)
            | (Role::RParen, Role::LParen)
    )
}

/// Insert explicit multiplications between juxtaposed operands, so that `2x`
/// reads as `2 * x` and `(x + 1)(x - 1)` as `(x + 1) * (x - 1)`.
pub fn insert_implicit_mul<'a>(lexemes: &[Lexeme<'a>]) -> Vec<Lexeme<'a>> {
    let mut output = Vec::with_capacity(lexemes.len() * 2);
    for (i, lexeme) in lexemes.iter().enumerate() {
        output.push(*lexeme);
        if let Some(next) = lexemes.get(i + 1) {
            if implies_mul(role(lexeme), role(next)) {
                output.push(Lexeme::implicit_mul(next.offset));
            }
        }
    }
    output
}
