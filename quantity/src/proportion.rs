use crate::{
    amount::{Amount, AmountAttributes, AmountBuilder},
    comparable::{require_comparable, Comparable},
    error::{DataValueError, Result},
    numeric::{Numeric, Operator},
    ordered::{type_mismatch, Ordered, OrderedAttributes},
    ordered_value::OrderedValue,
    quantified::{Quantified, RelationSymbol},
};
use std::{cmp::Ordering, fmt};

/// Kind of a proportion, with the numeric codes of the proportion kind vocabulary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProportionKind {
    /// Numerator and denominator may both be any number
    Ratio = 0,
    /// Denominator is 1
    Unitary = 1,
    /// Denominator is 100
    Percent = 2,
    /// Integral numerator and denominator, shown as a fraction
    Fraction = 3,
    /// Integral numerator and denominator, shown as a whole part and a fraction
    IntegerFraction = 4,
}

impl ProportionKind {
    pub const fn code(self) -> i64 {
        self as i64
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ratio => "ratio",
            Self::Unitary => "unitary",
            Self::Percent => "percent",
            Self::Fraction => "fraction",
            Self::IntegerFraction => "integer_fraction",
        }
    }
}

impl TryFrom<i64> for ProportionKind {
    type Error = DataValueError;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::Ratio),
            1 => Ok(Self::Unitary),
            2 => Ok(Self::Percent),
            3 => Ok(Self::Fraction),
            4 => Ok(Self::IntegerFraction),
            _ => Err(DataValueError::InvalidProportion(format!(
                "{code} is not a proportion kind"
            ))),
        }
    }
}

impl fmt::Display for ProportionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ratio of two numbers, e.g. titers (1:128), concentrations (5%) or fractions (3/4).
#[derive(Clone, Debug)]
pub struct Proportion {
    numerator: Numeric,
    denominator: Numeric,
    kind: ProportionKind,
    precision: Option<u32>,
    amount: AmountAttributes,
}

#[derive(Clone, Debug)]
pub struct ProportionSpec {
    numerator: Numeric,
    denominator: Numeric,
    kind: ProportionKind,
    precision: Option<i32>,
}

pub type ProportionBuilder = AmountBuilder<ProportionSpec>;

impl Proportion {
    pub const TYPE_NAME: &'static str = "Proportion";

    pub fn builder(
        numerator: impl Into<Numeric>,
        denominator: impl Into<Numeric>,
        kind: ProportionKind,
    ) -> ProportionBuilder {
        AmountBuilder::new(ProportionSpec {
            numerator: numerator.into(),
            denominator: denominator.into(),
            kind,
            precision: None,
        })
    }

    pub fn numerator(&self) -> Numeric {
        self.numerator
    }

    pub fn denominator(&self) -> Numeric {
        self.denominator
    }

    pub fn kind(&self) -> ProportionKind {
        self.kind
    }

    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// True if numerator and denominator are both integers.
    pub fn is_integral(&self) -> bool {
        self.numerator.is_integer() && self.denominator.is_integer()
    }
}

impl AmountBuilder<ProportionSpec> {
    pub fn precision(mut self, precision: i32) -> Self {
        self.spec.precision = Some(precision);
        self
    }

    pub fn build(self) -> Result<Proportion> {
        let (spec, amount) = self.into_parts(Proportion::TYPE_NAME)?;
        let precision = spec
            .precision
            .map(|precision| {
                u32::try_from(precision).map_err(|_| {
                    DataValueError::invalid_value("precision", format!("{precision} is negative"))
                })
            })
            .transpose()?;
        validate(spec.numerator, spec.denominator, spec.kind, precision).map_err(|reason| {
            tracing::debug!(
                numerator = %spec.numerator,
                denominator = %spec.denominator,
                kind = %spec.kind,
                reason,
                "rejected proportion"
            );
            DataValueError::InvalidProportion(reason.to_string())
        })?;
        Ok(Proportion {
            numerator: spec.numerator,
            denominator: spec.denominator,
            kind: spec.kind,
            precision,
            amount,
        })
    }
}

fn validate(
    numerator: Numeric,
    denominator: Numeric,
    kind: ProportionKind,
    precision: Option<u32>,
) -> std::result::Result<(), &'static str> {
    if !numerator.is_finite() || !denominator.is_finite() {
        return Err("numerator and denominator must be finite");
    }
    if denominator.is_zero() {
        return Err("denominator must not be zero");
    }
    let integral = numerator.is_integer() && denominator.is_integer();
    match kind {
        ProportionKind::Unitary if denominator != Numeric::Integer(1) => {
            return Err("denominator of a unitary proportion must be 1")
        }
        ProportionKind::Percent if denominator != Numeric::Integer(100) => {
            return Err("denominator of a percent proportion must be 100")
        }
        ProportionKind::Fraction | ProportionKind::IntegerFraction if !integral => {
            return Err("numerator and denominator of a fraction must be integral")
        }
        _ => {}
    }
    match (integral, precision) {
        (true, Some(precision)) if precision != 0 => {
            Err("precision must be 0 or absent when numerator and denominator are integral")
        }
        (false, None | Some(0)) => {
            Err("a non-zero precision is required unless numerator and denominator are integral")
        }
        _ => Ok(()),
    }
}

impl Comparable for Proportion {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn describe(&self) -> String {
        format!("{}({})", Self::TYPE_NAME, self.kind)
    }

    /// Only proportions of the same kind are comparable.
    fn is_strictly_comparable_to(&self, other: &Self) -> Result<bool> {
        Ok(self.kind == other.kind)
    }

    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        require_comparable(self, other)?;
        self.magnitude().try_cmp(other.magnitude())
    }
}

impl Ordered for Proportion {
    fn ordered_attributes(&self) -> &OrderedAttributes {
        self.amount.ordered()
    }

    fn cmp_value(&self, other: &OrderedValue) -> Result<Ordering> {
        match other {
            OrderedValue::Proportion(other) => self.try_cmp(other),
            other => Err(type_mismatch(Self::TYPE_NAME, other)),
        }
    }
}

impl Quantified for Proportion {
    /// `numerator / denominator`
    fn magnitude(&self) -> Numeric {
        Numeric::Real(self.numerator.as_f64() / self.denominator.as_f64())
    }

    fn accuracy(&self) -> Option<f64> {
        Some(self.amount.accuracy())
    }

    fn magnitude_status(&self) -> Option<RelationSymbol> {
        self.amount.magnitude_status()
    }
}

impl Amount for Proportion {
    fn amount_attributes(&self) -> &AmountAttributes {
        &self.amount
    }

    /// Equal denominators are kept, otherwise both sides are brought to the product of the
    /// denominators.
    fn combine(&self, other: &Self, op: Operator, amount: AmountAttributes) -> Result<Self> {
        let (numerator, denominator) = if self.denominator == other.denominator {
            (
                self.numerator.checked_apply(op, other.numerator)?,
                self.denominator,
            )
        } else {
            let lhs = self.numerator.checked_mul(other.denominator)?;
            let rhs = other.numerator.checked_mul(self.denominator)?;
            (
                lhs.checked_apply(op, rhs)?,
                self.denominator.checked_mul(other.denominator)?,
            )
        };
        let precision = if numerator.is_integer() && denominator.is_integer() {
            self.precision
        } else {
            self.precision
                .filter(|precision| *precision != 0)
                .or(other.precision)
        };
        Ok(Self {
            numerator,
            denominator,
            kind: self.kind,
            precision,
            amount,
        })
    }

    fn negate(&self) -> Result<Self> {
        Ok(Self {
            numerator: self.numerator.checked_neg()?,
            ..self.clone()
        })
    }
}

/// Same kind, numerator, denominator and precision.
impl PartialEq for Proportion {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.numerator == other.numerator
            && self.denominator == other.denominator
            && self.precision == other.precision
    }
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProportionKind::Unitary => write!(f, "{}", self.numerator),
            ProportionKind::Percent => write!(f, "{}%", self.numerator),
            ProportionKind::Ratio => write!(f, "{}:{}", self.numerator, self.denominator),
            ProportionKind::Fraction | ProportionKind::IntegerFraction => {
                write!(f, "{}/{}", self.numerator, self.denominator)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn proportion(
        numerator: impl Into<Numeric>,
        denominator: impl Into<Numeric>,
        kind: ProportionKind,
    ) -> Result<Proportion> {
        Proportion::builder(numerator, denominator, kind).build()
    }

    #[test]
    fn percent_requires_denominator_100() {
        let error = proportion(1, 2, ProportionKind::Percent).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert!(matches!(error, DataValueError::InvalidProportion(_)));
        assert!(proportion(5, 100, ProportionKind::Percent).is_ok());
    }

    #[test]
    fn invariant_table() {
        use ProportionKind::*;

        assert!(proportion(3, 1, Unitary).is_ok());
        assert!(proportion(3, 2, Unitary).is_err());
        assert!(proportion(3, 4, Fraction).is_ok());
        assert!(proportion(3, 4, IntegerFraction).is_ok());
        assert!(Proportion::builder(1.5, 4, Fraction).precision(1).build().is_err());
        assert!(proportion(1, 0, Ratio).is_err());
        assert!(proportion(f64::NAN, 1, Ratio).is_err());

        // integral parts: precision 0 or absent
        assert!(Proportion::builder(1, 128, Ratio).precision(0).build().is_ok());
        assert!(Proportion::builder(1, 128, Ratio).precision(2).build().is_err());
        // non-integral parts: precision present and non-zero
        assert!(proportion(1.5, 2, Ratio).is_err());
        assert!(Proportion::builder(1.5, 2, Ratio).precision(0).build().is_err());
        assert!(Proportion::builder(1.5, 2, Ratio).precision(1).build().is_ok());
        assert!(Proportion::builder(1.5, 2, Ratio).precision(-1).build().is_err());
    }

    #[test]
    fn kind_codes() {
        for code in 0..=4_i64 {
            assert_eq!(ProportionKind::try_from(code).unwrap().code(), code);
        }
        assert!(ProportionKind::try_from(5_i64).is_err());
        assert_eq!(ProportionKind::IntegerFraction.to_string(), "integer_fraction");
    }

    #[test]
    fn magnitude_is_derived() {
        let p = proportion(3, 4, ProportionKind::Fraction).unwrap();
        assert_eq!(p.magnitude(), Numeric::Real(0.75));
        assert!(p.is_integral());
        assert_eq!(p.to_string(), "3/4");
    }

    #[test]
    fn comparable_only_within_kind() {
        let half = proportion(1, 2, ProportionKind::Fraction).unwrap();
        let three_quarters = proportion(3, 4, ProportionKind::Fraction).unwrap();
        assert_eq!(half.try_lt(&three_quarters), Ok(true));

        let ratio = proportion(1, 2, ProportionKind::Ratio).unwrap();
        assert_eq!(half.is_strictly_comparable_to(&ratio), Ok(false));
        assert_eq!(half.try_cmp(&ratio).unwrap_err().kind(), ErrorKind::NotComparable);
        assert!(half.try_add(&ratio).is_err());
    }

    #[test]
    fn addition_with_equal_denominators() {
        let a = proportion(5, 100, ProportionKind::Percent).unwrap();
        let b = proportion(20, 100, ProportionKind::Percent).unwrap();
        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.numerator(), Numeric::Integer(25));
        assert_eq!(sum.denominator(), Numeric::Integer(100));
        assert_eq!(sum.to_string(), "25%");
    }

    #[test]
    fn addition_with_different_denominators() {
        let a = proportion(1, 2, ProportionKind::Fraction).unwrap();
        let b = proportion(1, 3, ProportionKind::Fraction).unwrap();
        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.numerator(), Numeric::Integer(5));
        assert_eq!(sum.denominator(), Numeric::Integer(6));
        assert!(sum.numerator().is_integer());

        let difference = a.try_sub(&b).unwrap();
        assert_eq!(difference.numerator(), Numeric::Integer(1));
        assert_eq!(difference.denominator(), Numeric::Integer(6));
    }

    #[test]
    fn result_precision_stays_valid() {
        let integral = Proportion::builder(1, 4, ProportionKind::Ratio)
            .precision(0)
            .build()
            .unwrap();
        let real = Proportion::builder(0.5, 4, ProportionKind::Ratio)
            .precision(2)
            .build()
            .unwrap();
        let sum = integral.try_add(&real).unwrap();
        assert!(!sum.is_integral());
        assert_eq!(sum.precision(), Some(2));
        assert_eq!(sum.magnitude(), Numeric::Real(0.375));
    }

    #[test]
    fn integer_overflow_is_an_error() {
        let a = proportion(i64::MAX, 3, ProportionKind::Ratio).unwrap();
        let b = proportion(1, 2, ProportionKind::Ratio).unwrap();
        assert_eq!(a.try_add(&b).unwrap_err().kind(), ErrorKind::Overflow);

        let smallest = proportion(i64::MIN, 2, ProportionKind::Ratio).unwrap();
        assert_eq!(smallest.negate().unwrap_err().kind(), ErrorKind::Overflow);
        let negated = proportion(-3, 4, ProportionKind::Fraction).unwrap().negate().unwrap();
        assert_eq!(negated.numerator(), Numeric::Integer(3));
        assert_eq!(negated.to_string(), "3/4");
    }
}
