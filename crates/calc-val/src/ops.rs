//! Pure arithmetic on [`Num`] values.
//!
//! These functions have no state and no side effects; the stateful
//! `Calculator` in `calc-core` delegates to them so both surfaces compute
//! identically.

use crate::Num;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub fn symbol(&self) -> &str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// int => float when the other side is a float
fn try_promote(a: Num, b: Num) -> (Num, Num) {
    match (&a, &b) {
        (Num::Int(a), Num::Float(_)) => (Num::Float(*a as f64), b),
        (Num::Float(_), Num::Int(b)) => (a, Num::Float(*b as f64)),
        _ => (a, b),
    }
}

// Int arithmetic that outgrows i64 falls back to float, like `power` does.
pub fn add(a: Num, b: Num) -> Num {
    match try_promote(a, b) {
        (Num::Int(left), Num::Int(right)) => match left.checked_add(right) {
            Some(value) => Num::Int(value),
            None => Num::Float(left as f64 + right as f64),
        },
        (left, right) => Num::Float(left.as_float() + right.as_float()),
    }
}

pub fn subtract(a: Num, b: Num) -> Num {
    match try_promote(a, b) {
        (Num::Int(left), Num::Int(right)) => match left.checked_sub(right) {
            Some(value) => Num::Int(value),
            None => Num::Float(left as f64 - right as f64),
        },
        (left, right) => Num::Float(left.as_float() - right.as_float()),
    }
}

pub fn multiply(a: Num, b: Num) -> Num {
    match try_promote(a, b) {
        (Num::Int(left), Num::Int(right)) => match left.checked_mul(right) {
            Some(value) => Num::Int(value),
            None => Num::Float(left as f64 * right as f64),
        },
        (left, right) => Num::Float(left.as_float() * right.as_float()),
    }
}

/// True division. The result is always a float (`15 / 3 = 5.0`);
/// a zero divisor yields `None`.
pub fn divide(a: Num, b: Num) -> Option<Num> {
    if b.is_zero() {
        return None;
    }
    Some(Num::Float(a.as_float() / b.as_float()))
}

/// Raise `base` to `exponent`.
///
/// An int base with a non-negative int exponent stays integral, falling back
/// to a float on overflow. Anything else (float operands, negative exponent)
/// goes through `f64::powf`, so `power(2, -1) == 0.5`.
pub fn power(base: Num, exponent: Num) -> Num {
    match (base, exponent) {
        (Num::Int(b), Num::Int(e)) if e >= 0 => {
            match u32::try_from(e).ok().and_then(|e| b.checked_pow(e)) {
                Some(value) => Num::Int(value),
                None => Num::Float((b as f64).powf(e as f64)),
            }
        }
        (b, e) => Num::Float(b.as_float().powf(e.as_float())),
    }
}
