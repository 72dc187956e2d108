use crate::error::Error;
use crate::options::Options;
use crate::symbols::{Function, Op};
use crate::token::{Lexeme, LexemeKind, RpnToken};

/// Entries waiting on the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Op(Op),
    /// A function, emitted once its parenthesized argument is closed
    Function(Function),
    /// An opening parenthesis, with its offset for error reporting
    Paren(usize),
}

/// Convert a sequence of lexemes in infix order (with implicit
/// multiplications already inserted) into reverse polish notation, using the
/// shunting-yard algorithm.
pub fn to_rpn(lexemes: &[Lexeme], options: Options) -> Result<Vec<RpnToken>, Error> {
    let mut output = Vec::with_capacity(lexemes.len());
    let mut operators: Vec<Pending> = Vec::new();

    for lexeme in lexemes {
        match lexeme.kind {
            LexemeKind::Number => {
                let value = lexeme
                    .text
                    .parse()
                    .map_err(|_| Error::InvalidNumber(lexeme.text.into()))?;
                output.push(RpnToken::Number(value));
            }
            LexemeKind::Identifier => match Function::from_name(lexeme.text) {
                Some(function) => operators.push(Pending::Function(function)),
                // constants are resolved together with variables
                None => output.push(RpnToken::Variable(lexeme.text.into())),
            },
            LexemeKind::LParen => operators.push(Pending::Paren(lexeme.offset)),
            LexemeKind::RParen => {
                let mut matched = false;
                while let Some(pending) = operators.pop() {
                    match pending {
                        Pending::Paren(_) => {
                            matched = true;
                            break;
                        }
                        Pending::Op(op) => output.push(RpnToken::Operator(op)),
                        Pending::Function(function) => output.push(RpnToken::Function(function)),
                    }
                }
                if !matched {
                    if options.strict {
                        return Err(Error::UnbalancedParenthesis {
                            offset: lexeme.offset,
                        });
                    }
                    log::trace!("ignoring unmatched ')' at offset {}", lexeme.offset);
                    continue;
                }
                if let Some(&Pending::Function(function)) = operators.last() {
                    operators.pop();
                    output.push(RpnToken::Function(function));
                }
            }
            LexemeKind::Operator(o1) => {
                while let Some(&Pending::Op(o2)) = operators.last() {
                    let pop_me = o1.is_left_associative() && o1.precedence() <= o2.precedence();
                    let pop_me =
                        pop_me || o1.is_right_associative() && o1.precedence() < o2.precedence();
                    if !pop_me {
                        break;
                    }
                    operators.pop();
                    output.push(RpnToken::Operator(o2));
                }
                operators.push(Pending::Op(o1));
            }
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Op(op) => output.push(RpnToken::Operator(op)),
            Pending::Function(function) => output.push(RpnToken::Function(function)),
            Pending::Paren(offset) if options.strict => {
                return Err(Error::UnbalancedParenthesis { offset });
            }
            Pending::Paren(offset) => {
                log::trace!("ignoring unmatched '(' at offset {}", offset);
            }
        }
    }
    Ok(output)
}
