//! The stateful calculator with its operation history.

use crate::error::{CalcError, CalcResult};
use calc_val::ops;
use calc_val::{CalcStr, Num, Op};

/// A calculator that records every operation in a history log.
///
/// Each arithmetic call appends exactly one record, whether the operation
/// succeeds or takes the division-by-zero path, so the log is a complete
/// audit trail of calls since construction or the last
/// [`clear_history`](Calculator::clear_history).
pub struct Calculator {
    history: Vec<CalcStr>,
}

impl Calculator {
    pub fn new() -> Self {
        Self { history: Vec::new() }
    }

    pub fn add(&mut self, a: impl Into<Num>, b: impl Into<Num>) -> Num {
        let (a, b) = (a.into(), b.into());
        let result = ops::add(a, b);
        self.log(a, Op::Add, b, &result.to_string());
        result
    }

    /// Subtract `b` from `a`.
    pub fn subtract(&mut self, a: impl Into<Num>, b: impl Into<Num>) -> Num {
        let (a, b) = (a.into(), b.into());
        let result = ops::subtract(a, b);
        self.log(a, Op::Sub, b, &result.to_string());
        result
    }

    pub fn multiply(&mut self, a: impl Into<Num>, b: impl Into<Num>) -> Num {
        let (a, b) = (a.into(), b.into());
        let result = ops::multiply(a, b);
        self.log(a, Op::Mul, b, &result.to_string());
        result
    }

    /// Divide `a` by `b`. Returns `None` if `b` is zero; the failure is
    /// still recorded in the history.
    pub fn divide(&mut self, a: impl Into<Num>, b: impl Into<Num>) -> Option<Num> {
        let (a, b) = (a.into(), b.into());
        match ops::divide(a, b) {
            Some(result) => {
                self.log(a, Op::Div, b, &result.to_string());
                Some(result)
            }
            None => {
                self.log(a, Op::Div, b, &format!("Error: {}", CalcError::DivisionByZero));
                None
            }
        }
    }

    /// Like [`divide`](Calculator::divide), but returns a propagatable
    /// error instead of `None` for a zero divisor.
    pub fn try_divide(&mut self, a: impl Into<Num>, b: impl Into<Num>) -> CalcResult<Num> {
        self.divide(a, b).ok_or(CalcError::DivisionByZero)
    }

    /// Raise `base` to the power of `exponent`.
    pub fn power(&mut self, base: impl Into<Num>, exponent: impl Into<Num>) -> Num {
        let (base, exponent) = (base.into(), exponent.into());
        let result = ops::power(base, exponent);
        self.log(base, Op::Pow, exponent, &result.to_string());
        result
    }

    /// Get an owned copy of the calculation history, in call order.
    pub fn get_history(&self) -> Vec<CalcStr> {
        self.history.clone()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_history_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn log(&mut self, a: Num, op: Op, b: Num, outcome: &str) {
        self.history
            .push(format!("{} {} {} = {}", a, op.symbol(), b, outcome).into());
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
