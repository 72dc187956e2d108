use crate::error::Error;
use crate::expr::Expr;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Largest number of points [`sample`] accepts in a grid.
pub const MAX_POINTS: usize = 1_000_000;

/// Integer points at which a formula is sampled, both bounds included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Values taken by `x`, the slowest varying coordinate
    pub x: RangeInclusive<i64>,
    /// Values taken by `y`
    pub y: RangeInclusive<i64>,
}

impl Grid {
    /// A grid spanning `x` and `y`
    pub fn new(x: RangeInclusive<i64>, y: RangeInclusive<i64>) -> Self {
        Grid { x, y }
    }

    /// The same range on both axes
    pub fn square(range: RangeInclusive<i64>) -> Self {
        Grid {
            x: range.clone(),
            y: range,
        }
    }

    /// Number of points in the grid, or `None` if it does not fit in a
    /// `usize`.
    pub fn len(&self) -> Option<usize> {
        axis_len(&self.x)?.checked_mul(axis_len(&self.y)?)
    }

    /// Check if the grid holds no point at all
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }
}

fn axis_len(range: &RangeInclusive<i64>) -> Option<usize> {
    if range.is_empty() {
        return Some(0);
    }
    let span = i128::from(*range.end()) - i128::from(*range.start()) + 1;
    usize::try_from(span).ok()
}

impl Default for Grid {
    /// `-10..=10` on both axes, 441 points
    fn default() -> Self {
        Self::square(-10..=10)
    }
}

/// A sampled point of a surface, serialized as `{"x": .., "y": .., "z": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Abscissa of the point
    pub x: i64,
    /// Ordinate of the point
    pub y: i64,
    /// Value of the formula; may be infinite or `NaN`, serialized as `null`
    pub z: f64,
}

/// Evaluate `expr` at every point of `grid`, `x` varying slowest.
///
/// Grids with more than [`MAX_POINTS`] points are rejected before any
/// evaluation.
pub fn sample(expr: &Expr, grid: &Grid) -> Result<Vec<Point>, Error> {
    let len = match grid.len() {
        Some(len) if len <= MAX_POINTS => len,
        _ => {
            return Err(Error::GridTooLarge { limit: MAX_POINTS });
        }
    };
    let mut points = Vec::with_capacity(len);
    for x in grid.x.clone() {
        for y in grid.y.clone() {
            // i64 grid coordinates are small enough to be exact in a f64
            #[allow(clippy::cast_precision_loss)]
            let scope = [("x", x as f64), ("y", y as f64)];
            let z = expr.eval(&scope).map_err(|err| {
                log::debug!("sampling `{}` failed at ({}, {}): {}", expr, x, y, err);
                err
            })?;
            points.push(Point { x, y, z });
        }
    }
    log::debug!("sampled {} points of `{}`", points.len(), expr);
    Ok(points)
}
