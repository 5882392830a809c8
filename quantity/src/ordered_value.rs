use crate::{
    amount::Amount,
    comparable::Comparable,
    count::Count,
    duration::Duration,
    error::{DataValueError, Result},
    numeric::Operator,
    ordered::Ordered,
    ordinal::Ordinal,
    proportion::Proportion,
    quantity::Quantity,
};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
};

/// Any ordered value. Ranges and reference ranges hold these, so one interval type serves every
/// kind of value while bounds of different kinds can still be told apart.
#[derive(Clone, Debug, PartialEq)]
pub enum OrderedValue {
    Count(Count),
    Quantity(Quantity),
    Proportion(Proportion),
    Duration(Duration),
    Ordinal(Ordinal),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            OrderedValue::Count($inner) => $body,
            OrderedValue::Quantity($inner) => $body,
            OrderedValue::Proportion($inner) => $body,
            OrderedValue::Duration($inner) => $body,
            OrderedValue::Ordinal($inner) => $body,
        }
    };
}

fn apply<A: Amount>(lhs: &A, rhs: &A, op: Operator) -> Result<A> {
    match op {
        Operator::Add => lhs.try_add(rhs),
        Operator::Subtract => lhs.try_sub(rhs),
    }
}

impl OrderedValue {
    pub fn is_normal(&self) -> Result<bool> {
        dispatch!(self, value => value.is_normal())
    }

    pub fn is_simple(&self) -> bool {
        dispatch!(self, value => value.is_simple())
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.arithmetic(other, Operator::Add)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.arithmetic(other, Operator::Subtract)
    }

    /// Ordinals have no arithmetic; other values only combine with their own kind.
    fn arithmetic(&self, other: &Self, op: Operator) -> Result<Self> {
        match (self, other) {
            (Self::Count(lhs), Self::Count(rhs)) => apply(lhs, rhs, op).map(Self::Count),
            (Self::Quantity(lhs), Self::Quantity(rhs)) => apply(lhs, rhs, op).map(Self::Quantity),
            (Self::Proportion(lhs), Self::Proportion(rhs)) => {
                apply(lhs, rhs, op).map(Self::Proportion)
            }
            (Self::Duration(lhs), Self::Duration(rhs)) => apply(lhs, rhs, op).map(Self::Duration),
            (Self::Ordinal(_), _) | (_, Self::Ordinal(_)) => Err(DataValueError::TypeMismatch {
                expected: "Amount",
                found: Ordinal::TYPE_NAME,
            }),
            (lhs, rhs) => Err(DataValueError::TypeMismatch {
                expected: lhs.type_name(),
                found: rhs.type_name(),
            }),
        }
    }
}

impl Comparable for OrderedValue {
    fn type_name(&self) -> &'static str {
        dispatch!(self, value => value.type_name())
    }

    fn describe(&self) -> String {
        dispatch!(self, value => value.describe())
    }

    /// Values of different kinds are never comparable.
    fn is_strictly_comparable_to(&self, other: &Self) -> Result<bool> {
        match (self, other) {
            (Self::Count(lhs), Self::Count(rhs)) => lhs.is_strictly_comparable_to(rhs),
            (Self::Quantity(lhs), Self::Quantity(rhs)) => lhs.is_strictly_comparable_to(rhs),
            (Self::Proportion(lhs), Self::Proportion(rhs)) => lhs.is_strictly_comparable_to(rhs),
            (Self::Duration(lhs), Self::Duration(rhs)) => lhs.is_strictly_comparable_to(rhs),
            (Self::Ordinal(lhs), Self::Ordinal(rhs)) => lhs.is_strictly_comparable_to(rhs),
            _ => Ok(false),
        }
    }

    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        dispatch!(self, value => value.cmp_value(other))
    }
}

/// Hashes what equality compares; `0.0` and `-0.0` hash alike and numbers hash by value.
fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}

impl Hash for OrderedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Count(count) => count.magnitude_value().hash(state),
            Self::Quantity(quantity) => {
                hash_f64(quantity.magnitude_value(), state);
                quantity.units().hash(state);
                quantity.precision().hash(state);
            }
            Self::Proportion(proportion) => {
                proportion.kind().hash(state);
                hash_f64(proportion.numerator().as_f64(), state);
                hash_f64(proportion.denominator().as_f64(), state);
                proportion.precision().hash(state);
            }
            Self::Duration(duration) => {
                let amount = duration.amount_attributes();
                hash_f64(duration.magnitude_seconds(), state);
                hash_f64(amount.accuracy(), state);
                amount.accuracy_is_percent().hash(state);
            }
            Self::Ordinal(ordinal) => {
                ordinal.symbol().defining_code().terminology_id().hash(state);
                ordinal.value().hash(state);
            }
        }
    }
}

impl From<Count> for OrderedValue {
    fn from(value: Count) -> Self {
        Self::Count(value)
    }
}

impl From<Quantity> for OrderedValue {
    fn from(value: Quantity) -> Self {
        Self::Quantity(value)
    }
}

impl From<Proportion> for OrderedValue {
    fn from(value: Proportion) -> Self {
        Self::Proportion(value)
    }
}

impl From<Duration> for OrderedValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<Ordinal> for OrderedValue {
    fn from(value: Ordinal) -> Self {
        Self::Ordinal(value)
    }
}

impl fmt::Display for OrderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, value => fmt::Display::fmt(value, f))
    }
}
