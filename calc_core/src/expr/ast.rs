//! Expression tree, evaluation and printing.

use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{CalcError, CalcResult};

/// Named constants recognised by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }
}

/// Single-argument functions recognised by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Sqrt,
    Abs,
}

impl Func {
    pub const ALL: [Func; 14] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Exp,
        Func::Ln,
        Func::Log10,
        Func::Sqrt,
        Func::Abs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log10 => "log",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }

    pub fn from_name(name: &str) -> Option<Func> {
        Func::ALL.into_iter().find(|f| f.name() == name)
    }

    fn apply(self, x: f64) -> CalcResult<f64> {
        let undefined = |reason: &str| -> CalcResult<f64> {
            Err(CalcError::domain(format!("{}(x)", self.name()), reason))
        };
        match self {
            Func::Ln | Func::Log10 if x <= 0.0 => undefined("logarithm of a non-positive number"),
            Func::Sqrt if x < 0.0 => undefined("square root of a negative number"),
            Func::Asin | Func::Acos if !(-1.0..=1.0).contains(&x) => undefined("argument outside [-1, 1]"),
            Func::Sin => Ok(x.sin()),
            Func::Cos => Ok(x.cos()),
            Func::Tan => Ok(x.tan()),
            Func::Asin => Ok(x.asin()),
            Func::Acos => Ok(x.acos()),
            Func::Atan => Ok(x.atan()),
            Func::Sinh => Ok(x.sinh()),
            Func::Cosh => Ok(x.cosh()),
            Func::Tanh => Ok(x.tanh()),
            Func::Exp => Ok(x.exp()),
            Func::Ln => Ok(x.ln()),
            Func::Log10 => Ok(x.log10()),
            Func::Sqrt => Ok(x.sqrt()),
            Func::Abs => Ok(x.abs()),
        }
    }
}

/// A parsed math expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Const(Constant),
    Var(String),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Num(n) if *n == 0.0)
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Num(n) if *n == 1.0)
    }

    /// Names of all free variables, sorted
    pub fn variables(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_variables(&mut out);
        out
    }

    fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Num(_) | Expr::Const(_) => {}
            Expr::Var(name) => {
                out.insert(name.clone());
            }
            Expr::Neg(a) | Expr::Call(_, a) => a.collect_variables(out),
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) | Expr::Pow(a, b) => {
                a.collect_variables(out);
                b.collect_variables(out);
            }
        }
    }

    /// Whether `name` occurs anywhere in the expression
    pub fn depends_on(&self, name: &str) -> bool {
        match self {
            Expr::Num(_) | Expr::Const(_) => false,
            Expr::Var(v) => v == name,
            Expr::Neg(a) | Expr::Call(_, a) => a.depends_on(name),
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) | Expr::Pow(a, b) => {
                a.depends_on(name) || b.depends_on(name)
            }
        }
    }

    /// Evaluate with the given variable bindings.
    ///
    /// Any operation that is undefined for the bound values (division by
    /// zero, logarithm of a non-positive number, ...) yields a
    /// [`CalcError::DomainError`]; NaN and infinity are never returned.
    pub fn eval(&self, vars: &[(&str, f64)]) -> CalcResult<f64> {
        let value = match self {
            Expr::Num(n) => *n,
            Expr::Const(c) => c.value(),
            Expr::Var(name) => vars
                .iter()
                .find(|(v, _)| *v == name.as_str())
                .map(|(_, value)| *value)
                .ok_or_else(|| CalcError::invalid_input("expression", name.clone(), "Unknown variable"))?,
            Expr::Neg(a) => -a.eval(vars)?,
            Expr::Add(a, b) => a.eval(vars)? + b.eval(vars)?,
            Expr::Sub(a, b) => a.eval(vars)? - b.eval(vars)?,
            Expr::Mul(a, b) => a.eval(vars)? * b.eval(vars)?,
            Expr::Div(a, b) => {
                let numerator = a.eval(vars)?;
                let denominator = b.eval(vars)?;
                if denominator == 0.0 {
                    return Err(CalcError::domain("expression", "division by zero"));
                }
                numerator / denominator
            }
            Expr::Pow(a, b) => a.eval(vars)?.powf(b.eval(vars)?),
            Expr::Call(func, a) => func.apply(a.eval(vars)?)?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::domain("expression", format!("{} is undefined at this point", self)))
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(_) => 3,
            Expr::Num(n) if *n < 0.0 => 3,
            Expr::Pow(..) => 4,
            _ => 5,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, parens: bool) -> fmt::Result {
        if parens {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }

    fn fmt_binary(&self, f: &mut fmt::Formatter<'_>, a: &Expr, op: &str, b: &Expr) -> fmt::Result {
        let prec = self.precedence();
        // Sub, Div and Pow are not associative: only the side that
        // groups naturally may drop its parentheses at equal precedence.
        let (left_parens, right_parens) = match self {
            Expr::Pow(..) => (a.precedence() <= prec, b.precedence() < prec),
            Expr::Sub(..) | Expr::Div(..) => (a.precedence() < prec, b.precedence() <= prec),
            _ => (a.precedence() < prec, b.precedence() < prec),
        };
        a.fmt_child(f, left_parens)?;
        f.write_str(op)?;
        b.fmt_child(f, right_parens)
    }
}

/// Integers print plainly; very large or very small magnitudes use
/// scientific notation, which the parser reads back.
fn fmt_number(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude >= 1e15 || (magnitude != 0.0 && magnitude < 1e-6) {
        format!("{:e}", n)
    } else if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => f.write_str(&fmt_number(*n)),
            Expr::Const(c) => f.write_str(c.name()),
            Expr::Var(name) => f.write_str(name),
            Expr::Neg(a) => {
                f.write_str("-")?;
                a.fmt_child(f, a.precedence() < 4)
            }
            Expr::Add(a, b) => self.fmt_binary(f, a, " + ", b),
            Expr::Sub(a, b) => self.fmt_binary(f, a, " - ", b),
            Expr::Mul(a, b) => self.fmt_binary(f, a, "*", b),
            Expr::Div(a, b) => self.fmt_binary(f, a, "/", b),
            Expr::Pow(a, b) => self.fmt_binary(f, a, "^", b),
            Expr::Call(func, a) => write!(f, "{}({})", func.name(), a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Box<Expr> {
        Box::new(Expr::Num(n))
    }

    fn x() -> Box<Expr> {
        Box::new(Expr::var("x"))
    }

    #[test]
    fn test_eval_polynomial() {
        // x^2 + 3
        let e = Expr::Add(Box::new(Expr::Pow(x(), num(2.0))), num(3.0));
        assert_eq!(e.eval(&[("x", 2.0)]).unwrap(), 7.0);
    }

    #[test]
    fn test_division_by_zero_is_domain_error() {
        let e = Expr::Div(num(1.0), x());
        let err = e.eval(&[("x", 0.0)]).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_log_of_negative_is_domain_error() {
        let e = Expr::Call(Func::Ln, x());
        assert!(e.eval(&[("x", -1.0)]).is_err());
        assert!(e.eval(&[("x", 1.0)]).is_ok());
    }

    #[test]
    fn test_nan_power_is_domain_error() {
        let e = Expr::Pow(num(-8.0), num(0.5));
        assert!(e.eval(&[]).is_err());
    }

    #[test]
    fn test_unknown_variable() {
        let e = Expr::var("y");
        assert!(e.eval(&[("x", 1.0)]).is_err());
    }

    #[test]
    fn test_display_minimal_parentheses() {
        // (x + 1)*x
        let e = Expr::Mul(Box::new(Expr::Add(x(), num(1.0))), x());
        assert_eq!(e.to_string(), "(x + 1)*x");
        // x - (x - 1)
        let e = Expr::Sub(x(), Box::new(Expr::Sub(x(), num(1.0))));
        assert_eq!(e.to_string(), "x - (x - 1)");
        // -x^2
        let e = Expr::Neg(Box::new(Expr::Pow(x(), num(2.0))));
        assert_eq!(e.to_string(), "-x^2");
        // (-x)^2
        let e = Expr::Pow(Box::new(Expr::Neg(x())), num(2.0));
        assert_eq!(e.to_string(), "(-x)^2");
    }

    #[test]
    fn test_variables() {
        let e = Expr::Mul(Box::new(Expr::var("y")), Box::new(Expr::Call(Func::Sin, x())));
        let vars: Vec<_> = e.variables().into_iter().collect();
        assert_eq!(vars, vec!["x".to_string(), "y".to_string()]);
        assert!(e.depends_on("y"));
        assert!(!e.depends_on("z"));
    }

    #[test]
    fn test_display_extreme_numbers_in_scientific_notation() {
        let e = Expr::Mul(num(1e200), x());
        assert_eq!(e.to_string(), "1e200*x");
        assert_eq!(Expr::Num(2.5e-9).to_string(), "2.5e-9");
        assert_eq!(Expr::Num(123456.0).to_string(), "123456");
        assert_eq!(Expr::Num(0.25).to_string(), "0.25");
        assert_eq!(crate::expr::parse(&e.to_string()).unwrap(), e);
    }
}
