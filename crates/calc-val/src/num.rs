use std::fmt::{self, Display, Formatter};

/// A calculator number: either an integer or a float.
///
/// Operands keep the representation they were given; binary operations
/// promote an `Int` sitting beside a `Float` before computing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    pub fn neg(&self) -> Num {
        match self {
            // i64::MIN has no i64 negation; fall back to float
            Num::Int(value) => match value.checked_neg() {
                Some(n) => Num::Int(n),
                None => Num::Float(-(*value as f64)),
            },
            Num::Float(value) => Num::Float(-value),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Num::Int(value) => *value == 0,
            Num::Float(value) => *value == 0.0,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Num::Int(_))
    }

    pub fn as_int(&self) -> i64 {
        match self {
            Num::Int(value) => *value,
            Num::Float(value) => *value as i64,
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            Num::Int(value) => *value as f64,
            Num::Float(value) => *value,
        }
    }
}

impl From<i64> for Num {
    fn from(i: i64) -> Num {
        Num::Int(i)
    }
}

impl From<i32> for Num {
    fn from(i: i32) -> Num {
        Num::Int(i as i64)
    }
}

impl From<u32> for Num {
    fn from(u: u32) -> Num {
        Num::Int(u as i64)
    }
}

impl From<f64> for Num {
    fn from(f: f64) -> Num {
        Num::Float(f)
    }
}

impl From<f32> for Num {
    fn from(f: f32) -> Num {
        Num::Float(f as f64)
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Num::Int(value) => write!(f, "{}", value),
            // A whole float still shows its decimal point (`5.0`, not `5`),
            // so int and float results stay distinguishable in output.
            Num::Float(value) => {
                if value.is_finite() && value.fract() == 0.0 {
                    write!(f, "{:.1}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_display() {
        assert_eq!(Num::Int(8).to_string(), "8");
        assert_eq!(Num::Int(-5).to_string(), "-5");
        assert_eq!(Num::Int(0).to_string(), "0");
    }

    #[test]
    fn test_float_display() {
        assert_eq!(Num::Float(5.0).to_string(), "5.0");
        assert_eq!(Num::Float(256.0).to_string(), "256.0");
        assert_eq!(Num::Float(2.5).to_string(), "2.5");
        assert_eq!(Num::Float(0.5).to_string(), "0.5");
        assert_eq!(Num::Float(-3.0).to_string(), "-3.0");
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Num::from(5), Num::Int(5));
        assert_eq!(Num::from(5i64), Num::Int(5));
        assert_eq!(Num::from(2.5), Num::Float(2.5));
        assert_eq!(Num::from(1.5f32), Num::Float(1.5));
    }

    #[test]
    fn test_accessors() {
        assert!(Num::Int(5).is_int());
        assert!(!Num::Float(5.0).is_int());
        assert_eq!(Num::Float(2.9).as_int(), 2);
        assert_eq!(Num::Int(2).as_float(), 2.0);
    }

    #[test]
    fn test_neg() {
        assert_eq!(Num::Int(3).neg(), Num::Int(-3));
        assert_eq!(Num::Float(0.5).neg(), Num::Float(-0.5));
        assert_eq!(Num::Int(i64::MIN).neg(), Num::Float(-(i64::MIN as f64)));
    }

    #[test]
    fn test_is_zero() {
        assert!(Num::Int(0).is_zero());
        assert!(Num::Float(0.0).is_zero());
        assert!(!Num::Int(1).is_zero());
        assert!(!Num::Float(0.1).is_zero());
    }
}
