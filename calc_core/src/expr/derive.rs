//! Symbolic differentiation and algebraic simplification.

use super::ast::{Expr, Func};

fn b(e: Expr) -> Box<Expr> {
    Box::new(e)
}

fn num(n: f64) -> Expr {
    Expr::Num(n)
}

/// Partial derivative of `expr` with respect to `var`, simplified.
pub fn derivative(expr: &Expr, var: &str) -> Expr {
    simplify(&raw_derivative(expr, var))
}

fn raw_derivative(expr: &Expr, var: &str) -> Expr {
    if !expr.depends_on(var) {
        return num(0.0);
    }
    match expr {
        Expr::Num(_) | Expr::Const(_) => num(0.0),
        Expr::Var(name) => num(if name == var { 1.0 } else { 0.0 }),
        Expr::Neg(a) => Expr::Neg(b(raw_derivative(a, var))),
        Expr::Add(u, v) => Expr::Add(b(raw_derivative(u, var)), b(raw_derivative(v, var))),
        Expr::Sub(u, v) => Expr::Sub(b(raw_derivative(u, var)), b(raw_derivative(v, var))),
        // (uv)' = u'v + uv'
        Expr::Mul(u, v) => Expr::Add(
            b(Expr::Mul(b(raw_derivative(u, var)), v.clone())),
            b(Expr::Mul(u.clone(), b(raw_derivative(v, var)))),
        ),
        // (u/v)' = (u'v - uv') / v^2
        Expr::Div(u, v) => Expr::Div(
            b(Expr::Sub(
                b(Expr::Mul(b(raw_derivative(u, var)), v.clone())),
                b(Expr::Mul(u.clone(), b(raw_derivative(v, var)))),
            )),
            b(Expr::Pow(v.clone(), b(num(2.0)))),
        ),
        Expr::Pow(u, v) => {
            if !v.depends_on(var) {
                // (u^n)' = n u^(n-1) u'
                Expr::Mul(
                    b(Expr::Mul(v.clone(), b(Expr::Pow(u.clone(), b(Expr::Sub(v.clone(), b(num(1.0)))))))),
                    b(raw_derivative(u, var)),
                )
            } else if !u.depends_on(var) {
                // (a^v)' = a^v ln(a) v'
                Expr::Mul(
                    b(Expr::Mul(b(expr.clone()), b(Expr::Call(Func::Ln, u.clone())))),
                    b(raw_derivative(v, var)),
                )
            } else {
                // (u^v)' = u^v (v' ln(u) + v u'/u)
                Expr::Mul(
                    b(expr.clone()),
                    b(Expr::Add(
                        b(Expr::Mul(b(raw_derivative(v, var)), b(Expr::Call(Func::Ln, u.clone())))),
                        b(Expr::Div(b(Expr::Mul(v.clone(), b(raw_derivative(u, var)))), u.clone())),
                    )),
                )
            }
        }
        Expr::Call(func, u) => {
            let du = raw_derivative(u, var);
            let outer = match func {
                Func::Sin => Expr::Call(Func::Cos, u.clone()),
                Func::Cos => Expr::Neg(b(Expr::Call(Func::Sin, u.clone()))),
                Func::Tan => Expr::Div(b(num(1.0)), b(Expr::Pow(b(Expr::Call(Func::Cos, u.clone())), b(num(2.0))))),
                Func::Asin => Expr::Div(
                    b(num(1.0)),
                    b(Expr::Call(Func::Sqrt, b(Expr::Sub(b(num(1.0)), b(Expr::Pow(u.clone(), b(num(2.0)))))))),
                ),
                Func::Acos => Expr::Neg(b(Expr::Div(
                    b(num(1.0)),
                    b(Expr::Call(Func::Sqrt, b(Expr::Sub(b(num(1.0)), b(Expr::Pow(u.clone(), b(num(2.0)))))))),
                ))),
                Func::Atan => Expr::Div(b(num(1.0)), b(Expr::Add(b(num(1.0)), b(Expr::Pow(u.clone(), b(num(2.0))))))),
                Func::Sinh => Expr::Call(Func::Cosh, u.clone()),
                Func::Cosh => Expr::Call(Func::Sinh, u.clone()),
                Func::Tanh => Expr::Div(b(num(1.0)), b(Expr::Pow(b(Expr::Call(Func::Cosh, u.clone())), b(num(2.0))))),
                Func::Exp => Expr::Call(Func::Exp, u.clone()),
                Func::Ln => Expr::Div(b(num(1.0)), u.clone()),
                Func::Log10 => Expr::Div(b(num(1.0)), b(Expr::Mul(u.clone(), b(Expr::Call(Func::Ln, b(num(10.0))))))),
                Func::Sqrt => Expr::Div(b(num(1.0)), b(Expr::Mul(b(num(2.0)), b(Expr::Call(Func::Sqrt, u.clone()))))),
                Func::Abs => Expr::Div(u.clone(), b(Expr::Call(Func::Abs, u.clone()))),
            };
            Expr::Mul(b(outer), b(du))
        }
    }
}

/// Bottom-up algebraic cleanup: constant folding and identity removal.
pub fn simplify(expr: &Expr) -> Expr {
    match expr {
        Expr::Num(_) | Expr::Const(_) | Expr::Var(_) => expr.clone(),
        Expr::Neg(a) => match simplify(a) {
            Expr::Num(n) => num(-n),
            Expr::Neg(inner) => *inner,
            other => Expr::Neg(b(other)),
        },
        Expr::Add(l, r) => match (simplify(l), simplify(r)) {
            (Expr::Num(x), Expr::Num(y)) => num(x + y),
            (z, other) | (other, z) if z.is_zero() => other,
            (left, Expr::Neg(right)) => Expr::Sub(b(left), right),
            (left, right) => Expr::Add(b(left), b(right)),
        },
        Expr::Sub(l, r) => match (simplify(l), simplify(r)) {
            (Expr::Num(x), Expr::Num(y)) => num(x - y),
            (left, z) if z.is_zero() => left,
            (z, right) if z.is_zero() => Expr::Neg(b(right)),
            (left, right) if left == right => num(0.0),
            (left, Expr::Neg(right)) => Expr::Add(b(left), right),
            (left, right) => Expr::Sub(b(left), b(right)),
        },
        Expr::Mul(l, r) => mul(simplify(l), simplify(r)),
        Expr::Div(l, r) => match (simplify(l), simplify(r)) {
            (Expr::Num(x), Expr::Num(y)) if y != 0.0 => num(x / y),
            (z, right) if z.is_zero() && !right.is_zero() => num(0.0),
            (left, one) if one.is_one() => left,
            (left, right) if left == right && !right.is_zero() => num(1.0),
            (left, right) => Expr::Div(b(left), b(right)),
        },
        Expr::Pow(l, r) => match (simplify(l), simplify(r)) {
            (_, z) if z.is_zero() => num(1.0),
            (base, one) if one.is_one() => base,
            (Expr::Num(x), Expr::Num(y)) if x.powf(y).is_finite() && x >= 0.0 => num(x.powf(y)),
            (base, exponent) => Expr::Pow(b(base), b(exponent)),
        },
        Expr::Call(func, a) => Expr::Call(*func, b(simplify(a))),
    }
}

fn mul(left: Expr, right: Expr) -> Expr {
    match (left, right) {
        (Expr::Num(x), Expr::Num(y)) => num(x * y),
        (z, _) | (_, z) if z.is_zero() => num(0.0),
        (one, other) | (other, one) if one.is_one() => other,
        (Expr::Num(x), other) | (other, Expr::Num(x)) if x == -1.0 => Expr::Neg(b(other)),
        // Fold nested coefficients: 2*(3*x) -> 6*x
        (Expr::Num(x), Expr::Mul(inner_l, inner_r)) | (Expr::Mul(inner_l, inner_r), Expr::Num(x)) => match *inner_l {
            Expr::Num(y) => mul(num(x * y), *inner_r),
            inner_l => Expr::Mul(b(num(x)), b(Expr::Mul(b(inner_l), inner_r))),
        },
        // Keep numeric coefficients on the left: x*2 -> 2*x
        (other, Expr::Num(x)) => Expr::Mul(b(num(x)), b(other)),
        (Expr::Neg(a), Expr::Neg(c)) => Expr::Mul(a, c),
        (Expr::Neg(a), other) | (other, Expr::Neg(a)) => Expr::Neg(b(Expr::Mul(a, b(other)))),
        (left, right) => Expr::Mul(b(left), b(right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse;

    fn d(src: &str, var: &str) -> String {
        derivative(&parse(src).unwrap(), var).to_string()
    }

    fn d_at(src: &str, var: &str, vars: &[(&str, f64)]) -> f64 {
        derivative(&parse(src).unwrap(), var).eval(vars).unwrap()
    }

    #[test]
    fn test_polynomial_derivatives_print_cleanly() {
        assert_eq!(d("x^2", "x"), "2*x");
        assert_eq!(d("3x", "x"), "3");
        assert_eq!(d("5", "x"), "0");
        assert_eq!(d("x*y", "y"), "x");
        assert_eq!(d("x^3 + 2x", "x"), "3*x^2 + 2");
    }

    #[test]
    fn test_function_derivatives() {
        assert_eq!(d("sin(x)", "x"), "cos(x)");
        assert_eq!(d("cos(x)", "x"), "-sin(x)");
        assert_eq!(d("ln(x)", "x"), "1/x");
        assert_eq!(d("exp(2x)", "x"), "2*exp(2*x)");
    }

    #[test]
    fn test_derivatives_numerically() {
        // d/dx [x^x] at 2 = 2^2 (ln 2 + 1)
        let expected = 4.0 * (2f64.ln() + 1.0);
        assert!((d_at("x^x", "x", &[("x", 2.0)]) - expected).abs() < 1e-9);
        // d/dx [2^x] at 3 = 8 ln 2
        assert!((d_at("2^x", "x", &[("x", 3.0)]) - 8.0 * 2f64.ln()).abs() < 1e-9);
        // quotient rule: d/dx [x/(x+1)] at 1 = 1/4
        assert!((d_at("x/(x+1)", "x", &[("x", 1.0)]) - 0.25).abs() < 1e-12);
        // chain rule: d/dx sqrt(x^2 + 9) at 4 = 4/5
        assert!((d_at("sqrt(x^2 + 9)", "x", &[("x", 4.0)]) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_simplify_identities() {
        let s = |src: &str| simplify(&parse(src).unwrap()).to_string();
        assert_eq!(s("0 + x"), "x");
        assert_eq!(s("x*1"), "x");
        assert_eq!(s("x*0"), "0");
        assert_eq!(s("x^1"), "x");
        assert_eq!(s("x^0"), "1");
        assert_eq!(s("x - x"), "0");
        assert_eq!(s("--x"), "x");
        assert_eq!(s("x*3"), "3*x");
        assert_eq!(s("2*(3*x)"), "6*x");
        assert_eq!(s("x/x"), "1");
    }
}
