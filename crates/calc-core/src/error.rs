//! Error types and diagnostics for the calculator
//!
//! The only runtime failure in the system is division by zero. It is an
//! expected, recoverable condition: arithmetic operations signal it through
//! their return channel (`Option`), while this module owns the error's
//! display text and its `miette` diagnostic metadata.

use miette::Diagnostic;
use thiserror::Error;

/// Runtime errors for calculator operations
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Division by zero
    #[error("Division by zero")]
    #[diagnostic(code(calc_runtime_E0301), help("Division by zero is undefined"))]
    DivisionByZero,
}

/// Alias for Result type with calculator errors
pub type CalcResult<T> = std::result::Result<T, CalcError>;
