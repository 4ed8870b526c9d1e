pub mod calculator;
pub mod error;

pub use crate::calculator::Calculator;
pub use crate::error::{CalcError, CalcResult};
