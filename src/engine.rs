use crate::error::Error;
use crate::expr::Expr;
use crate::options::Options;
use crate::plot::{sample, Grid, Point};
use crate::scope::Scope;

/// Entry point for evaluating formulas.
///
/// The operator, function and constant tables are process-wide statics, so an
/// engine only carries its parsing [`Options`](struct.Options.html). It holds
/// no state between calls and can be shared between threads.
///
/// ```
/// # use plotexpr::Engine;
/// let engine = Engine::new();
/// assert_eq!(engine.evaluate("2^3^2", &[("x", 0.0)]), Ok(512.0));
/// assert_eq!(engine.evaluate("x(y+1)", &[("x", 2.0), ("y", 3.0)]), Ok(8.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    options: Options,
}

impl Engine {
    /// Create an engine with the default, strict, options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine parsing expressions with `options`
    pub fn with_options(options: Options) -> Self {
        Engine { options }
    }

    /// Options used when parsing expressions
    pub fn options(&self) -> Options {
        self.options
    }

    /// Parse `expression` once, to evaluate it later with different scopes
    pub fn compile(&self, expression: &str) -> Result<Expr, Error> {
        let expr = Expr::parse_with(expression, self.options)?;
        log::debug!("compiled {:?} to `{}`", expression, expr);
        Ok(expr)
    }

    /// Evaluate `expression` with the variables in `scope`
    pub fn evaluate<S: Scope + ?Sized>(&self, expression: &str, scope: &S) -> Result<f64, Error> {
        Expr::parse_with(expression, self.options)?.eval(scope)
    }

    /// Sample `expression` over every point of `grid`, binding `x` and `y`.
    /// The first failing point aborts the whole sampling, and grids above
    /// [`MAX_POINTS`](crate::plot::MAX_POINTS) are rejected.
    ///
    /// ```
    /// # use plotexpr::{Engine, Grid};
    /// let points = Engine::new().plot("x + y", &Grid::default()).unwrap();
    /// assert_eq!(points.len(), 441);
    /// assert_eq!((points[0].x, points[0].y, points[0].z), (-10, -10, -20.0));
    /// ```
    pub fn plot(&self, expression: &str, grid: &Grid) -> Result<Vec<Point>, Error> {
        let expr = self.compile(expression)?;
        sample(&expr, grid)
    }
}
