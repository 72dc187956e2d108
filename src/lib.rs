#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! plotexpr, a crate for evaluating arithmetic formulas over a plotting grid.
//!
//! The easiest way to use this crate is with the [`eval`](fn.eval.html)
//! function. Its second argument is a [`Scope`](trait.Scope.html) binding
//! variables to values, for instance a `HashMap` or an array of pairs:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut context: HashMap<String, f64> = HashMap::new();
//! context.insert("a".into(), 3.5);
//! assert_eq!(plotexpr::eval("2a + 1", &context), Ok(8.0));
//! assert_eq!(plotexpr::eval("x(y + 1)", &[("x", 2.0), ("y", 3.0)]), Ok(8.0));
//! ```
//!
//! Parsing can be separated from evaluation with the [`Expr`](struct.Expr.html)
//! type, and a whole surface sampled with [`Engine::plot`](struct.Engine.html#method.plot):
//!
//! ```
//! use plotexpr::{Engine, Grid};
//!
//! let points = Engine::new().plot("sin(x) * cos(y)", &Grid::default()).unwrap();
//! assert_eq!(points.len(), 21 * 21);
//! ```
//!
//! # Language definition
//!
//! - float literals: `12`, `-12.456`, `.5`, `+0.0045e78`. A sign belongs to
//!   the literal only where an operand is expected, so `2-3` is a subtraction;
//! - left and right parenthesis;
//! - binary operators `+`, `-`, `*`, `/` and `^` (exponentiation, right
//!   associative) with the usual precedence. There is no unary minus: `-x`
//!   is an error, write `-1x` or `0 - x`;
//! - calls of the unary functions `sin`, `cos`, `tan`, `sqrt`, `log`
//!   (natural logarithm), `abs`, `exp`, `ceil`, `floor` and `round`;
//! - the constants `pi` and `e`, which take priority over variables with the
//!   same name;
//! - variables: an ASCII letter followed by ASCII letters or digits.
//!
//! Juxtaposed operands are multiplied: `2x`, `2(x + 1)`, `x sin(y)`,
//! `(x + 1)(x - 1)`. Constants never take part in implicit multiplication,
//! so `2pi` has to be written `2 * pi`.
//!
//! Results carry the floating point semantics: `1 / 0` is infinite and
//! `sqrt(-1)` is `NaN`, neither is an error.
//!
//! # Technical details
//!
//! Expressions go through a hand-written scanner, an implicit multiplication
//! pass, and the shunting-yard algorithm which produces reverse polish
//! notation. The RPN is then evaluated with a single stack of `f64`.

#[macro_use]
extern crate lazy_static;

mod engine;
mod error;
mod expr;
mod implicit;
mod lexer;
mod options;
mod parser;
pub mod plot;
mod scope;
mod symbols;
mod token;

pub use engine::Engine;
pub use error::Error;
pub use expr::{eval, Expr};
pub use implicit::insert_implicit_mul;
pub use lexer::Lexer;
pub use options::Options;
pub use parser::to_rpn;
pub use plot::{Grid, Point};
pub use scope::Scope;
pub use symbols::{is_variable, Associativity, Constant, Function, Op};
pub use token::{Lexeme, LexemeKind, RpnToken};
