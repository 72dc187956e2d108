use std::collections::BTreeMap;
use std::hash::BuildHasher;

/// Variable bindings used while evaluating an expression.
///
/// Implemented for the usual maps from names to values, and for slices and
/// arrays of `(name, value)` pairs, which avoid building a map for each point
/// when sampling a grid:
///
/// ```
/// # use plotexpr::eval;
/// assert_eq!(eval("x * y", &[("x", 3.0), ("y", 4.0)]), Ok(12.0));
/// ```
pub trait Scope {
    /// Get the value bound to `name`, if any
    fn get(&self, name: &str) -> Option<f64>;
}

impl<S: BuildHasher> Scope for std::collections::HashMap<String, f64, S> {
    fn get(&self, name: &str) -> Option<f64> {
        std::collections::HashMap::get(self, name).copied()
    }
}

impl<S: BuildHasher> Scope for hashbrown::HashMap<String, f64, S> {
    fn get(&self, name: &str) -> Option<f64> {
        hashbrown::HashMap::get(self, name).copied()
    }
}

impl Scope for BTreeMap<String, f64> {
    fn get(&self, name: &str) -> Option<f64> {
        BTreeMap::get(self, name).copied()
    }
}

impl<'a> Scope for [(&'a str, f64)] {
    fn get(&self, name: &str) -> Option<f64> {
        self.iter()
            .find(|(variable, _)| *variable == name)
            .map(|&(_, value)| value)
    }
}

impl<'a, const N: usize> Scope for [(&'a str, f64); N] {
    fn get(&self, name: &str) -> Option<f64> {
        Scope::get(&self[..], name)
    }
}

impl<T: Scope + ?Sized> Scope for &T {
    fn get(&self, name: &str) -> Option<f64> {
        Scope::get(*self, name)
    }
}
