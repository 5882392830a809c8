use crate::error::{DataValueError, Result};
use std::{cmp::Ordering, fmt};

/// Binary operator of amount arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    fn overflow(self) -> DataValueError {
        match self {
            Self::Add => DataValueError::Overflow("integer addition"),
            Self::Subtract => DataValueError::Overflow("integer subtraction"),
        }
    }
}

/// Integer or floating point number.
///
/// Equality and ordering compare by value, so `Integer(1) == Real(1.0)`; the variant only
/// records whether the number was given as an integer.
#[derive(Copy, Clone, Debug)]
pub enum Numeric {
    Integer(i64),
    Real(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Real(value) => value,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }

    pub fn is_finite(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Real(value) => value.is_finite(),
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(value) => value == 0,
            Self::Real(value) => value == 0.0,
        }
    }

    /// Integers stay integers (failing on overflow); anything else is computed in floating point.
    pub fn checked_apply(self, op: Operator, rhs: Numeric) -> Result<Numeric> {
        match (self, rhs) {
            (Self::Integer(lhs), Self::Integer(rhs)) => match op {
                Operator::Add => lhs.checked_add(rhs),
                Operator::Subtract => lhs.checked_sub(rhs),
            }
            .map(Self::Integer)
            .ok_or_else(|| op.overflow()),
            (lhs, rhs) => Ok(Self::Real(op.apply(lhs.as_f64(), rhs.as_f64()))),
        }
    }

    pub fn checked_mul(self, rhs: Numeric) -> Result<Numeric> {
        match (self, rhs) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs
                .checked_mul(rhs)
                .map(Self::Integer)
                .ok_or(DataValueError::Overflow("integer multiplication")),
            (lhs, rhs) => Ok(Self::Real(lhs.as_f64() * rhs.as_f64())),
        }
    }

    /// `i64::MIN` has no integer negation.
    pub fn checked_neg(self) -> Result<Numeric> {
        match self {
            Self::Integer(value) => value
                .checked_neg()
                .map(Self::Integer)
                .ok_or(DataValueError::Overflow("integer negation")),
            Self::Real(value) => Ok(Self::Real(-value)),
        }
    }

    /// Total comparison of finite numbers; NaN is reported instead of silently ordered.
    pub fn try_cmp(self, other: Numeric) -> Result<Ordering> {
        self.partial_cmp(&other)
            .ok_or_else(|| DataValueError::invalid_value("magnitude", "NaN has no order"))
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs == rhs,
            (lhs, rhs) => lhs.as_f64() == rhs.as_f64(),
        }
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => Some(lhs.cmp(rhs)),
            (lhs, rhs) => lhs.as_f64().partial_cmp(&rhs.as_f64()),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}
