use crate::error::Error;
use crate::implicit::insert_implicit_mul;
use crate::lexer::Lexer;
use crate::options::Options;
use crate::parser::to_rpn;
use crate::scope::Scope;
use crate::symbols::{is_variable, Constant};
use crate::token::RpnToken;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// Evaluate a single expression from `input`, with the default (strict)
/// options.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use std::collections::HashMap;
/// # use plotexpr::eval;
///
/// let mut context: HashMap<String, f64> = HashMap::new();
/// assert_eq!(eval("45 - 2^3", &context), Ok(37.0));
///
/// context.insert("a".into(), -5.0);
/// assert_eq!(eval("3a", &context), Ok(-15.0));
/// ```
pub fn eval<S: Scope + ?Sized>(input: &str, scope: &S) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval(scope))
}

/// A parsed mathematical expression, stored in reverse polish notation.
///
/// Parsing once and evaluating many times is how a function gets sampled
/// over a grid.
///
/// # Examples
/// ```
/// # use plotexpr::Expr;
/// let expr = Expr::parse("x^2 + 2x + 1").unwrap();
/// assert_eq!(expr.eval(&[("x", 1.0)]), Ok(4.0));
/// assert_eq!(expr.eval(&[("x", 3.0)]), Ok(16.0));
/// assert_eq!(expr.to_string(), "x 2 ^ 2 x * + 1 +");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    rpn: Vec<RpnToken>,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`, with the
    /// default options.
    ///
    /// # Examples
    /// ```
    /// # use plotexpr::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3 + (5 * 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        Self::parse_with(expression, Options::default())
    }

    /// Parse the given mathematical `expression` into an `Expr`.
    pub fn parse_with(expression: &str, options: Options) -> Result<Self, Error> {
        let lexemes = Lexer::new(expression, options).tokenize()?;
        let lexemes = insert_implicit_mul(&lexemes);
        let rpn = to_rpn(&lexemes, options)?;
        log::trace!("rpn for {:?}: {:?}", expression, rpn);
        Ok(Self { rpn })
    }

    /// Build an expression directly from tokens in reverse polish notation.
    /// The tokens are not checked, a malformed sequence fails at evaluation.
    pub fn from_rpn(rpn: Vec<RpnToken>) -> Self {
        Self { rpn }
    }

    /// Evaluate the expression with the variables in `scope`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use plotexpr::{Error, Expr};
    /// # use std::collections::HashMap;
    /// let expr = Expr::parse("3 + a").unwrap();
    ///
    /// let mut context: HashMap<String, f64> = HashMap::new();
    /// context.insert("a".into(), -5.0);
    /// assert_eq!(expr.eval(&context), Ok(-2.0));
    /// context.insert("a".into(), 2.0);
    /// assert_eq!(expr.eval(&context), Ok(5.0));
    ///
    /// context.clear();
    /// assert_eq!(expr.eval(&context), Err(Error::UndefinedVariable("a".into())));
    /// ```
    pub fn eval<S: Scope + ?Sized>(&self, scope: &S) -> Result<f64, Error> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.rpn.len());
        for token in &self.rpn {
            match *token {
                RpnToken::Number(value) => stack.push(value),
                RpnToken::Variable(ref name) => stack.push(lookup(name, scope)?),
                RpnToken::Operator(op) => {
                    if stack.len() < 2 {
                        return Err(Error::InsufficientOperands);
                    }
                    let right = pop(&mut stack)?;
                    let left = pop(&mut stack)?;
                    stack.push(op.apply(left, right));
                }
                RpnToken::Function(function) => {
                    let argument = pop(&mut stack)?;
                    stack.push(function.apply(argument));
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(Error::InvalidExpression),
        }
    }

    /// Get the free variables of this expression, i.e. the names the scope
    /// has to provide.
    ///
    /// # Examples
    /// ```
    /// # use plotexpr::Expr;
    /// # use std::collections::BTreeSet;
    /// let expr = Expr::parse("3 + 5 * 2").unwrap();
    /// assert_eq!(expr.variables(), BTreeSet::new());
    ///
    /// let expr = Expr::parse("pi * r^2 + sin(t)").unwrap();
    /// assert_eq!(expr.variables(), BTreeSet::from(["r", "t"]));
    /// ```
    pub fn variables(&self) -> BTreeSet<&str> {
        self.rpn
            .iter()
            .filter_map(|token| match token {
                RpnToken::Variable(name) if is_variable(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Tokens of the expression, in reverse polish notation
    pub fn rpn(&self) -> &[RpnToken] {
        &self.rpn
    }
}

impl Display for Expr {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        for (i, token) in self.rpn.iter().enumerate() {
            if i > 0 {
                fmt.write_str(" ")?;
            }
            write!(fmt, "{}", token)?;
        }
        Ok(())
    }
}

/// Constants first, then the scope
fn lookup<S: Scope + ?Sized>(name: &str, scope: &S) -> Result<f64, Error> {
    if let Some(constant) = Constant::from_name(name) {
        return Ok(constant.value());
    }
    scope
        .get(name)
        .ok_or_else(|| Error::UndefinedVariable(name.into()))
}

fn pop(stack: &mut Vec<f64>) -> Result<f64, Error> {
    stack.pop().ok_or(Error::InsufficientOperands)
}
