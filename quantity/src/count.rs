use crate::{
    amount::{Amount, AmountAttributes, AmountBuilder},
    comparable::Comparable,
    error::{DataValueError, Result},
    numeric::{Numeric, Operator},
    ordered::{type_mismatch, Ordered, OrderedAttributes},
    ordered_value::OrderedValue,
    quantified::{Quantified, RelationSymbol},
};
use std::{cmp::Ordering, fmt};

/// Countable amount, e.g. number of cigarettes smoked per day.
#[derive(Clone, Debug)]
pub struct Count {
    magnitude: i64,
    amount: AmountAttributes,
}

#[derive(Clone, Debug)]
pub struct CountSpec {
    magnitude: i64,
}

pub type CountBuilder = AmountBuilder<CountSpec>;

impl Count {
    pub const TYPE_NAME: &'static str = "Count";

    /// Count with unknown accuracy and no ranges.
    pub fn new(magnitude: i64) -> Self {
        Self {
            magnitude,
            amount: AmountAttributes::default(),
        }
    }

    pub fn builder(magnitude: i64) -> CountBuilder {
        AmountBuilder::new(CountSpec { magnitude })
    }

    /// Fails unless `magnitude` was given as an integer.
    pub fn from_numeric(magnitude: Numeric) -> Result<Self> {
        match magnitude {
            Numeric::Integer(magnitude) => Ok(Self::new(magnitude)),
            Numeric::Real(magnitude) => {
                tracing::debug!(magnitude, "rejected non-integer count");
                Err(DataValueError::invalid_value(
                    "magnitude",
                    format!("count magnitude {magnitude} is not an integer"),
                ))
            }
        }
    }

    pub fn magnitude_value(&self) -> i64 {
        self.magnitude
    }
}

impl AmountBuilder<CountSpec> {
    pub fn build(self) -> Result<Count> {
        let (spec, amount) = self.into_parts(Count::TYPE_NAME)?;
        Ok(Count {
            magnitude: spec.magnitude,
            amount,
        })
    }
}

impl Comparable for Count {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn is_strictly_comparable_to(&self, _other: &Self) -> Result<bool> {
        Ok(true)
    }

    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        Ok(self.cmp(other))
    }
}

impl Ordered for Count {
    fn ordered_attributes(&self) -> &OrderedAttributes {
        self.amount.ordered()
    }

    fn cmp_value(&self, other: &OrderedValue) -> Result<Ordering> {
        match other {
            OrderedValue::Count(other) => self.try_cmp(other),
            other => Err(type_mismatch(Self::TYPE_NAME, other)),
        }
    }
}

impl Quantified for Count {
    fn magnitude(&self) -> Numeric {
        Numeric::Integer(self.magnitude)
    }

    fn accuracy(&self) -> Option<f64> {
        Some(self.amount.accuracy())
    }

    fn magnitude_status(&self) -> Option<RelationSymbol> {
        self.amount.magnitude_status()
    }
}

impl Amount for Count {
    fn amount_attributes(&self) -> &AmountAttributes {
        &self.amount
    }

    fn combine(&self, other: &Self, op: Operator, amount: AmountAttributes) -> Result<Self> {
        let magnitude = match op {
            Operator::Add => self.magnitude.checked_add(other.magnitude),
            Operator::Subtract => self.magnitude.checked_sub(other.magnitude),
        }
        .ok_or(DataValueError::Overflow("count arithmetic"))?;
        Ok(Self { magnitude, amount })
    }

    fn negate(&self) -> Result<Self> {
        let magnitude = self
            .magnitude
            .checked_neg()
            .ok_or(DataValueError::Overflow("count negation"))?;
        Ok(Self {
            magnitude,
            amount: self.amount.clone(),
        })
    }
}

impl PartialEq for Count {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl Eq for Count {}

impl PartialOrd for Count {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Count {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude.cmp(&other.magnitude)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interval::Interval, quantity::Quantity};

    type Range = Interval<OrderedValue>;

    #[test]
    fn total_order() {
        let values = [i64::MIN, -7, -1, 0, 1, 3, 3, i64::MAX];
        for a in values {
            for b in values {
                let (lhs, rhs) = (Count::new(a), Count::new(b));
                let holds = [lhs < rhs, lhs == rhs, lhs > rhs];
                assert_eq!(holds.iter().filter(|holds| **holds).count(), 1, "{a} {b}");
                assert_eq!(lhs.try_cmp(&rhs), Ok(a.cmp(&b)));
            }
        }
    }

    #[test]
    fn arithmetic() {
        let sum = Count::new(5).try_add(&Count::new(7)).unwrap();
        assert_eq!(sum, Count::new(12));
        let difference = Count::new(5).try_sub(&Count::new(7)).unwrap();
        assert_eq!(difference.magnitude(), Numeric::Integer(-2));
        assert_eq!(Count::new(5).negate(), Ok(Count::new(-5)));
        assert_eq!(Count::new(i64::MAX).negate(), Ok(Count::new(i64::MIN + 1)));
    }

    #[test]
    fn overflow_is_an_error() {
        let error = Count::new(i64::MAX).try_add(&Count::new(1)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Overflow);
        assert!(Count::new(i64::MIN).try_sub(&Count::new(1)).is_err());

        let smallest = Count::new(i64::MIN);
        let error = smallest.negate().unwrap_err();
        assert_eq!(error, DataValueError::Overflow("count negation"));
        assert_eq!(error.kind(), ErrorKind::Overflow);
        let largest = Count::new(i64::MAX);
        let zero = largest.try_add(&largest.negate().unwrap()).unwrap();
        assert_eq!(zero.magnitude(), Numeric::Integer(0));
    }

    #[test]
    fn magnitude_must_be_an_integer() {
        assert_eq!(Count::from_numeric(Numeric::Integer(3)), Ok(Count::new(3)));
        let error = Count::from_numeric(Numeric::Real(2.5)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn ranges_must_hold_counts() {
        let grams = |magnitude: f64| Quantity::builder(magnitude).units("g").build().unwrap();
        let range = Range::closed(grams(1.0).into(), grams(5.0).into()).unwrap();
        let error = Count::builder(3).normal_range(range).build().unwrap_err();
        assert_eq!(
            error,
            DataValueError::TypeMismatch {
                expected: "Count",
                found: "Quantity"
            }
        );

        let range = Range::at_most(Count::new(10).into()).unwrap();
        let count = Count::builder(3).normal_range(range).build().unwrap();
        assert_eq!(count.is_normal(), Ok(true));
    }

    #[test]
    fn display() {
        assert_eq!(Count::new(-12).to_string(), "-12");
    }
}
