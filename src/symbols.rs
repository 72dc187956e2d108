use hashbrown::HashMap;
use std::fmt::{self, Display, Formatter};

/// Associativity of a binary operator, used to break ties between operators
/// of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`
    Right,
}

/// Binary operators known to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`, exponentiation
    Exp,
    /// Multiplication inserted between juxtaposed operands, as in `2x`.
    /// Behaves exactly like `Mul`.
    ImplicitMul,
}

impl Op {
    /// Operator for a single-character symbol, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }

    /// Symbol of the operator as it appears in an expression
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul | Self::ImplicitMul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::ImplicitMul | Self::Div => 2,
            Self::Exp => 3,
        }
    }

    /// How operators of the same precedence group together
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::ImplicitMul | Self::Div => {
                Associativity::Left
            }
            Self::Exp => Associativity::Right,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        self.associativity() == Associativity::Left
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Apply the operator to `left` and `right`. IEEE-754 semantics are kept
    /// as is: `1 / 0` is infinite and `(-8) ^ 0.5` is `NaN`.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Plus => left + right,
            Self::Minus => left - right,
            Self::Mul | Self::ImplicitMul => left * right,
            Self::Div => left / right,
            Self::Exp => libm::pow(left, right),
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.symbol())
    }
}

/// Unary functions callable as `name(argument)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine, in radians
    Sin,
    /// Cosine, in radians
    Cos,
    /// Tangent, in radians
    Tan,
    /// Square root, `NaN` for negative arguments
    Sqrt,
    /// Natural logarithm
    Log,
    /// Absolute value
    Abs,
    /// Exponential
    Exp,
    /// Smallest integer not below the argument
    Ceil,
    /// Largest integer not above the argument
    Floor,
    /// Nearest integer, halves going up: `round(-2.5)` is `-2`
    Round,
}

impl Function {
    /// All the functions, in no particular order
    pub const ALL: [Self; 10] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log,
        Self::Abs,
        Self::Exp,
        Self::Ceil,
        Self::Floor,
        Self::Round,
    ];

    /// Look up a function by name
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS.get(name).copied()
    }

    /// Name of the function in expressions
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Abs => "abs",
            Self::Exp => "exp",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
            Self::Round => "round",
        }
    }

    /// Apply the function to `argument`. Out of domain arguments give `NaN`
    /// or infinities rather than errors.
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Self::Sin => libm::sin(argument),
            Self::Cos => libm::cos(argument),
            Self::Tan => libm::tan(argument),
            Self::Sqrt => libm::sqrt(argument),
            Self::Log => libm::log(argument),
            Self::Abs => libm::fabs(argument),
            Self::Exp => libm::exp(argument),
            Self::Ceil => libm::ceil(argument),
            Self::Floor => libm::floor(argument),
            Self::Round => round_half_up(argument),
        }
    }
}

impl Display for Function {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

/// Round to the nearest integer, halves going toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = libm::floor(value);
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Named constants. They shadow scope variables with the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `pi`, the ratio of a circle's circumference to its diameter
    Pi,
    /// `e`, Euler's number
    E,
}

impl Constant {
    /// All the constants
    pub const ALL: [Self; 2] = [Self::Pi, Self::E];

    /// Look up a constant by name
    pub fn from_name(name: &str) -> Option<Self> {
        CONSTANTS.get(name).copied()
    }

    /// Name of the constant in expressions
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Numeric value of the constant
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

lazy_static! {
    static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::with_capacity(Function::ALL.len());
        for function in Function::ALL {
            map.insert(function.name(), function);
        }
        map
    };
    static ref CONSTANTS: HashMap<&'static str, Constant> = {
        let mut map = HashMap::with_capacity(Constant::ALL.len());
        for constant in Constant::ALL {
            map.insert(constant.name(), constant);
        }
        map
    };
}

/// Check if `name` is a known function name
pub fn is_function(name: &str) -> bool {
    FUNCTIONS.contains_key(name)
}

/// Check if `name` is a known constant name
pub fn is_constant(name: &str) -> bool {
    CONSTANTS.contains_key(name)
}

#[must_use]
/// Check if the identifier `name` denotes a free variable, i.e. is neither a
/// function nor a constant name.
///
/// # Examples
///
/// ```
/// # use plotexpr::is_variable;
/// assert!(is_variable("x"));
/// assert!(is_variable("y2"));
/// assert!(!is_variable("sin"));
/// assert!(!is_variable("pi"));
/// assert!(!is_variable("2x"));
/// ```
pub fn is_variable(name: &str) -> bool {
    let mut chars = name.chars();
    if !chars.next().map_or(false, |c| c.is_ascii_alphabetic()) {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    return !is_function(name) && !is_constant(name);
}
