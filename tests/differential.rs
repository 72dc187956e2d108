//! Compare the engine against a tree-walking evaluator on generated
//! expressions.

use plotexpr::{Engine, Options};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Node {
    Number(f64),
    Variable(&'static str),
    Constant(&'static str, f64),
    Binary(char, Box<Node>, Box<Node>),
    Call(&'static str, Box<Node>),
}

const FUNCTIONS: [&str; 10] = [
    "sin", "cos", "tan", "sqrt", "log", "abs", "exp", "ceil", "floor", "round",
];

fn precedence(node: &Node) -> u8 {
    match node {
        Node::Binary('+' | '-', _, _) => 1,
        Node::Binary('*' | '/', _, _) => 2,
        Node::Binary(_, _, _) => 3,
        _ => 4,
    }
}

impl Node {
    /// Render with every binary operation between parentheses
    fn parenthesized(&self) -> String {
        match self {
            Node::Number(value) => format!("{}", value),
            Node::Variable(name) | Node::Constant(name, _) => name.to_string(),
            Node::Binary(op, left, right) => {
                format!("({} {} {})", left.parenthesized(), op, right.parenthesized())
            }
            Node::Call(name, arg) => format!("{}({})", name, arg.parenthesized()),
        }
    }

    /// Render with the fewest parentheses precedence and associativity allow
    fn minimal(&self) -> String {
        match self {
            Node::Number(value) => format!("{}", value),
            Node::Variable(name) | Node::Constant(name, _) => name.to_string(),
            Node::Binary(op, left, right) => {
                let own = precedence(self);
                let right_assoc = *op == '^';
                let left_parens =
                    precedence(left) < own || (precedence(left) == own && right_assoc);
                let right_parens =
                    precedence(right) < own || (precedence(right) == own && !right_assoc);
                let wrap = |node: &Node, parens: bool| {
                    if parens {
                        format!("({})", node.minimal())
                    } else {
                        node.minimal()
                    }
                };
                format!("{} {} {}", wrap(left, left_parens), op, wrap(right, right_parens))
            }
            Node::Call(name, arg) => format!("{}({})", name, arg.minimal()),
        }
    }

    /// Value computed with the std `f64` methods, with a bound on how far an
    /// evaluator using other math kernels may drift from it. `None` when that
    /// drift could cross a discontinuity (a rounding step, a pole, the sign
    /// of a negative base).
    fn reference(&self, x: f64, y: f64) -> Option<Approx> {
        let (value, error) = match self {
            Node::Number(value) => (*value, 0.0),
            Node::Variable("x") => (x, 0.0),
            Node::Variable(_) => (y, 0.0),
            Node::Constant(_, value) => (*value, 0.0),
            Node::Binary(op, left, right) => {
                let a = left.reference(x, y)?;
                let b = right.reference(x, y)?;
                binary(*op, a, b)?
            }
            Node::Call(name, arg) => call(name, arg.reference(x, y)?)?,
        };
        let error = if value.is_nan() { 0.0 } else { error };
        if !error.is_finite() || (value.is_infinite() && error > 0.0) {
            return None;
        }
        Some(Approx { value, error })
    }
}

#[derive(Debug, Clone, Copy)]
struct Approx {
    value: f64,
    /// Absolute error bound
    error: f64,
}

/// Relative error allowed between two implementations of a math kernel
const KERNEL: f64 = 1e-15;

fn kernel(value: f64) -> f64 {
    if value.is_finite() {
        value.abs() * KERNEL
    } else {
        0.0
    }
}

fn scaled(factor: f64, error: f64) -> f64 {
    if error == 0.0 {
        0.0
    } else {
        factor.abs() * error
    }
}

/// Check if `value` may sit on the other side of a step at `offset` plus an
/// integer
fn near_step(value: Approx, offset: f64) -> bool {
    let step = (value.value - offset).round() + offset;
    value.error > 0.0 && (value.value - step).abs() <= 2.0 * value.error
}

fn near_zero(value: Approx) -> bool {
    value.error > 0.0 && value.value.abs() <= 2.0 * value.error
}

fn binary(op: char, a: Approx, b: Approx) -> Option<(f64, f64)> {
    let exact = a.error == 0.0 && b.error == 0.0;
    Some(match op {
        '+' => (a.value + b.value, a.error + b.error),
        '-' => (a.value - b.value, a.error + b.error),
        '*' => (
            a.value * b.value,
            scaled(a.value, b.error) + scaled(b.value, a.error) + a.error * b.error,
        ),
        '/' => {
            if near_zero(b) {
                return None;
            }
            let value = a.value / b.value;
            if exact {
                (value, 0.0)
            } else {
                (value, (a.error + scaled(value, b.error)) / (b.value.abs() - b.error))
            }
        }
        _ => {
            let value = a.value.powf(b.value);
            if exact {
                (value, kernel(value))
            } else {
                if near_zero(a) || (a.value < 0.0 && near_step(b, 0.0)) {
                    return None;
                }
                let by_base = b.value * a.value.powf(b.value - 1.0);
                let by_exponent = value * a.value.abs().ln();
                let error = kernel(value) + scaled(by_base, a.error) + scaled(by_exponent, b.error);
                (value, error)
            }
        }
    })
}

fn call(name: &str, arg: Approx) -> Option<(f64, f64)> {
    let v = arg.value;
    let (value, slope) = match name {
        "sin" => (v.sin(), v.cos()),
        "cos" => (v.cos(), v.sin()),
        "tan" => {
            let t = v.tan();
            (t, 1.0 + t * t)
        }
        "sqrt" | "log" if near_zero(arg) => return None,
        "sqrt" => (v.sqrt(), 0.5 / v.sqrt()),
        "log" => (v.ln(), 1.0 / v),
        "exp" => (v.exp(), v.exp()),
        "abs" => return Some((v.abs(), arg.error)),
        "ceil" | "floor" if near_step(arg, 0.0) => return None,
        "round" if near_step(arg, 0.5) => return None,
        "ceil" => return Some((v.ceil(), 0.0)),
        "floor" => return Some((v.floor(), 0.0)),
        _ => return Some((round_half_up(v), 0.0)),
    };
    let known = arg.error == 0.0 && ((v == 0.0 && name != "log") || (v == 1.0 && name == "log"));
    let rounding = if known || name == "sqrt" { 0.0 } else { kernel(value) };
    Some((value, rounding + scaled(slope, arg.error)))
}

/// `round` with halves going up, the way the engine documents it
fn round_half_up(v: f64) -> f64 {
    // above 2^52 every float is an integer and `v + 0.5` may round away
    if v.abs() >= 4_503_599_627_370_496.0 {
        v
    } else {
        (v + 0.5).floor()
    }
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        (0u32..100).prop_map(|n| Node::Number(f64::from(n))),
        (0u32..1000).prop_map(|n| Node::Number(f64::from(n) / 8.0)),
        prop::sample::select(vec!["x", "y"]).prop_map(Node::Variable),
        prop::sample::select(vec![
            ("pi", std::f64::consts::PI),
            ("e", std::f64::consts::E)
        ])
        .prop_map(|(name, value)| Node::Constant(name, value)),
    ]
}

fn node() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (
                prop::sample::select(vec!['+', '-', '*', '/', '^']),
                inner.clone(),
                inner.clone()
            )
                .prop_map(|(op, left, right)| Node::Binary(op, Box::new(left), Box::new(right))),
            (prop::sample::select(FUNCTIONS.to_vec()), inner)
                .prop_map(|(name, arg)| Node::Call(name, Box::new(arg))),
        ]
    })
}

fn close(actual: f64, expected: Approx) -> bool {
    let Approx { value: expected, error } = expected;
    if actual.is_nan() || expected.is_nan() {
        return actual.is_nan() && expected.is_nan();
    }
    if actual == expected {
        return true;
    }
    if actual.is_infinite() || expected.is_infinite() {
        return false;
    }
    (actual - expected).abs() <= 1e-9 * actual.abs().max(expected.abs()) + 4.0 * error
}

#[test]
fn reference_tolerates_kernel_differences() {
    let number = |v: f64| Box::new(Node::Number(v));
    let round = Node::Call("round", number(-2.5));
    assert_eq!(round.reference(0.0, 0.0).unwrap().value, -2.0);

    // cancellation leaves only the last-bit difference between kernels
    let cancel = Node::Binary(
        '-',
        Box::new(Node::Call("exp", number(1.0))),
        Box::new(Node::Constant("e", std::f64::consts::E)),
    );
    let expected = cancel.reference(0.0, 0.0).unwrap();
    assert!(expected.error > 0.0);
    let actual = Engine::new().evaluate(&cancel.minimal(), &[("x", 0.0)]).unwrap();
    assert!(close(actual, expected), "{} != {:?}", actual, expected);

    let step = Node::Call("floor", Box::new(Node::Call("exp", number(0.5))));
    assert!(step.reference(0.0, 0.0).is_some());
    let one = Node::Binary(
        '*',
        Box::new(Node::Call("exp", number(0.5))),
        Box::new(Node::Call("exp", number(-0.5))),
    );
    let on_step = Node::Call("floor", Box::new(one));
    assert!(on_step.reference(0.0, 0.0).is_none());
}

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 4096,
        ..ProptestConfig::default()
    })]

    #[test]
    fn parenthesized_matches_reference(tree in node(), x in -10i32..=10, y in -10i32..=10) {
        let (x, y) = (f64::from(x), f64::from(y));
        let input = tree.parenthesized();
        let actual = Engine::new().evaluate(&input, &[("x", x), ("y", y)]);
        let expected = tree.reference(x, y);
        prop_assume!(expected.is_some());
        let expected = expected.unwrap();
        prop_assert!(actual.is_ok(), "{} failed: {:?}", input, actual);
        let actual = actual.unwrap();
        prop_assert!(close(actual, expected), "{}: {} != {:?}", input, actual, expected);
    }

    #[test]
    fn minimal_matches_reference(tree in node(), x in -10i32..=10, y in -10i32..=10) {
        let (x, y) = (f64::from(x), f64::from(y));
        let input = tree.minimal();
        let actual = Engine::new().evaluate(&input, &[("x", x), ("y", y)]);
        let expected = tree.reference(x, y);
        prop_assume!(expected.is_some());
        let expected = expected.unwrap();
        prop_assert!(actual.is_ok(), "{} failed: {:?}", input, actual);
        let actual = actual.unwrap();
        prop_assert!(close(actual, expected), "{}: {} != {:?}", input, actual, expected);
    }

    #[test]
    fn never_panics(input in ".*") {
        let scope = [("x", 1.0), ("y", 2.0)];
        let _ = Engine::new().evaluate(&input, &scope);
        let _ = Engine::with_options(Options::lenient()).evaluate(&input, &scope);
    }

    #[test]
    fn deterministic(tree in node()) {
        let input = tree.minimal();
        let scope = [("x", 3.0), ("y", -4.0)];
        let first = Engine::new().evaluate(&input, &scope);
        let second = Engine::new().evaluate(&input, &scope);
        prop_assert_eq!(first.map(f64::to_bits), second.map(f64::to_bits));
    }
}
