/// Parsing options shared by [`Engine`](struct.Engine.html) and
/// [`Expr`](struct.Expr.html).
///
/// In strict mode (the default), characters outside of the expression
/// language and unbalanced parentheses are errors. Lenient mode skips unknown
/// characters and tolerates unmatched parentheses, the way the first plotting
/// backend did.
///
/// ```
/// # use plotexpr::{Engine, Error, Options};
/// let scope: [(&str, f64); 0] = [];
/// let strict = Engine::new();
/// assert_eq!(
///     strict.evaluate("2 # 3", &scope),
///     Err(Error::UnexpectedCharacter { character: '#', offset: 2 })
/// );
///
/// let lenient = Engine::with_options(Options::lenient());
/// assert_eq!(lenient.evaluate("(2 + 3", &scope), Ok(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Reject unknown characters and unbalanced parentheses
    pub strict: bool,
}

impl Options {
    /// Reject unknown characters and unbalanced parentheses
    pub fn strict() -> Self {
        Options { strict: true }
    }

    /// Skip unknown characters and tolerate unbalanced parentheses
    pub fn lenient() -> Self {
        Options { strict: false }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::strict()
    }
}
