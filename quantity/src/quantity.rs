use crate::{
    amount::{Amount, AmountAttributes, AmountBuilder},
    comparable::{require_comparable, Comparable},
    error::{DataValueError, Result},
    numeric::{Numeric, Operator},
    ordered::{type_mismatch, Ordered, OrderedAttributes},
    ordered_value::OrderedValue,
    quantified::{Quantified, RelationSymbol},
};
use dt_support::MeasurementServices;
use std::{cmp::Ordering, fmt, ops::Neg};

/// Scientific quantity: a real magnitude in optional units, e.g. `5.2,mmol/l`.
#[derive(Clone, Debug)]
pub struct Quantity {
    magnitude: f64,
    units: Option<String>,
    precision: Option<u32>,
    amount: AmountAttributes,
}

#[derive(Clone, Debug)]
pub struct QuantitySpec {
    magnitude: Numeric,
    units: Option<String>,
    precision: Option<i32>,
}

pub type QuantityBuilder = AmountBuilder<QuantitySpec>;

impl Quantity {
    pub const TYPE_NAME: &'static str = "Quantity";

    /// Integers are converted to floating point.
    pub fn builder(magnitude: impl Into<Numeric>) -> QuantityBuilder {
        AmountBuilder::new(QuantitySpec {
            magnitude: magnitude.into(),
            units: None,
            precision: None,
        })
    }

    pub fn magnitude_value(&self) -> f64 {
        self.magnitude
    }

    pub fn units(&self) -> Option<&str> {
        self.units.as_deref()
    }

    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// True if the magnitude is meant to be shown without decimals.
    pub fn is_integral(&self) -> bool {
        self.precision == Some(0)
    }

    /// Units measure the same property according to `services`, e.g. `mg` and `kg`.
    pub fn units_equivalent_to(&self, other: &Self, services: &MeasurementServices) -> Result<bool> {
        match (self.units(), other.units()) {
            (Some(units), Some(other_units)) => Ok(services.units_equivalent(units, other_units)?),
            (None, None) => Ok(true),
            _ => Ok(false),
        }
    }
}

impl AmountBuilder<QuantitySpec> {
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.spec.units = Some(units.into());
        self
    }

    /// Number of decimal places; 0 means integral.
    pub fn precision(mut self, precision: i32) -> Self {
        self.spec.precision = Some(precision);
        self
    }

    pub fn build(self) -> Result<Quantity> {
        let (spec, amount) = self.into_parts(Quantity::TYPE_NAME)?;
        let magnitude = spec.magnitude.as_f64();
        if !magnitude.is_finite() {
            tracing::debug!(magnitude, "rejected quantity magnitude");
            return Err(DataValueError::invalid_value(
                "magnitude",
                format!("{magnitude} is not finite"),
            ));
        }
        if let Some(units) = &spec.units {
            if units.trim().is_empty() {
                return Err(DataValueError::invalid_value("units", "must not be blank"));
            }
        }
        let precision = spec
            .precision
            .map(|precision| {
                u32::try_from(precision).map_err(|_| {
                    tracing::debug!(precision, "rejected quantity precision");
                    DataValueError::invalid_value(
                        "precision",
                        format!("{precision} is negative"),
                    )
                })
            })
            .transpose()?;
        Ok(Quantity {
            magnitude,
            units: spec.units,
            precision,
            amount,
        })
    }
}

impl Comparable for Quantity {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn describe(&self) -> String {
        match self.units() {
            Some(units) => format!("{}({})", Self::TYPE_NAME, units),
            None => Self::TYPE_NAME.to_string(),
        }
    }

    /// Only quantities in the same units string are comparable.
    fn is_strictly_comparable_to(&self, other: &Self) -> Result<bool> {
        Ok(self.units == other.units)
    }

    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        require_comparable(self, other)?;
        Numeric::Real(self.magnitude).try_cmp(Numeric::Real(other.magnitude))
    }
}

impl Ordered for Quantity {
    fn ordered_attributes(&self) -> &OrderedAttributes {
        self.amount.ordered()
    }

    fn cmp_value(&self, other: &OrderedValue) -> Result<Ordering> {
        match other {
            OrderedValue::Quantity(other) => self.try_cmp(other),
            other => Err(type_mismatch(Self::TYPE_NAME, other)),
        }
    }
}

impl Quantified for Quantity {
    fn magnitude(&self) -> Numeric {
        Numeric::Real(self.magnitude)
    }

    fn accuracy(&self) -> Option<f64> {
        Some(self.amount.accuracy())
    }

    fn magnitude_status(&self) -> Option<RelationSymbol> {
        self.amount.magnitude_status()
    }
}

impl Amount for Quantity {
    fn amount_attributes(&self) -> &AmountAttributes {
        &self.amount
    }

    /// Units and precision are those of `self`.
    fn combine(&self, other: &Self, op: Operator, amount: AmountAttributes) -> Result<Self> {
        Ok(Self {
            magnitude: op.apply(self.magnitude, other.magnitude),
            units: self.units.clone(),
            precision: self.precision,
            amount,
        })
    }

    fn negate(&self) -> Result<Self> {
        Ok(-self)
    }
}

impl Neg for &Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity {
            magnitude: -self.magnitude,
            ..self.clone()
        }
    }
}

/// Equal units, magnitude and precision.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.units == other.units
            && self.magnitude == other.magnitude
            && self.precision == other.precision
    }
}

/// Without a precision the magnitude is written in full, so no digits are lost.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Some(precision) => write!(f, "{:.*}", precision as usize, self.magnitude)?,
            None => write!(f, "{}", self.magnitude)?,
        }
        if let Some(units) = &self.units {
            write!(f, ",{units}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interval::Interval};
    use dt_support::MeasurementService;

    fn quantity(magnitude: f64, units: &str) -> Quantity {
        Quantity::builder(magnitude).units(units).build().unwrap()
    }

    #[test]
    fn comparable_only_in_same_units() {
        let a = quantity(1.0, "mg");
        let b = quantity(2.0, "mg");
        assert_eq!(a.is_strictly_comparable_to(&b), Ok(true));
        assert_eq!(a.try_lt(&b), Ok(true));
        assert_eq!(b.try_gt(&a), Ok(true));

        let c = quantity(2.0, "kg");
        assert_eq!(a.is_strictly_comparable_to(&c), Ok(false));
        assert_eq!(a.try_cmp(&c).unwrap_err().kind(), ErrorKind::NotComparable);
    }

    #[test]
    fn equality_includes_precision() {
        let plain = quantity(1.5, "mg");
        assert_eq!(plain, quantity(1.5, "mg"));
        let precise = Quantity::builder(1.5).units("mg").precision(2).build().unwrap();
        assert_ne!(plain, precise);
        assert_eq!(plain.try_cmp(&precise), Ok(Ordering::Equal));
        assert_ne!(plain, quantity(1.5, "g"));
    }

    #[test]
    fn magnitude_is_coerced_to_real() {
        let q = Quantity::builder(3).units("mmHg").build().unwrap();
        assert_eq!(q.magnitude_value(), 3.0);
        assert!(!q.magnitude().is_integer());
    }

    #[test]
    fn invalid_fields() {
        let negative = Quantity::builder(1.0).precision(-1).build().unwrap_err();
        assert_eq!(negative.kind(), ErrorKind::Validation);
        assert!(Quantity::builder(f64::INFINITY).build().is_err());
        assert!(Quantity::builder(1.0).units(" ").build().is_err());
    }

    #[test]
    fn arithmetic_keeps_left_units_and_precision() {
        let a = Quantity::builder(1.25).units("ml").precision(2).build().unwrap();
        let b = Quantity::builder(2.5).units("ml").precision(1).build().unwrap();
        let sum = a.try_add(&b).unwrap();
        assert_eq!(sum.magnitude_value(), 3.75);
        assert_eq!(sum.units(), Some("ml"));
        assert_eq!(sum.precision(), Some(2));
        assert_eq!((-&sum).magnitude_value(), -3.75);
    }

    #[test]
    fn display() {
        let q = Quantity::builder(5.234).units("mmol/l").precision(1).build().unwrap();
        assert_eq!(q.to_string(), "5.2,mmol/l");
        let q = Quantity::builder(12.0).precision(0).build().unwrap();
        assert!(q.is_integral());
        assert_eq!(q.to_string(), "12");
        assert_eq!(quantity(0.5, "g").to_string(), "0.5,g");
    }

    #[test]
    fn normal_range() {
        let lower = quantity(2.0, "mmol/l").into();
        let upper = quantity(5.5, "mmol/l").into();
        let range = Interval::<OrderedValue>::closed(lower, upper).unwrap();
        let cholesterol = Quantity::builder(4.0)
            .units("mmol/l")
            .normal_range(range.clone())
            .build()
            .unwrap();
        assert_eq!(cholesterol.is_normal(), Ok(true));

        let other_units = Quantity::builder(4.0)
            .units("mg/dl")
            .normal_range(range)
            .build()
            .unwrap();
        assert_eq!(
            other_units.is_normal().unwrap_err().kind(),
            ErrorKind::NotComparable
        );
    }

    struct Metric;

    impl MeasurementService for Metric {
        fn is_valid_units_string(&self, units: &str) -> bool {
            ["mg", "g", "kg"].iter().any(|known| *known == units)
        }

        fn units_equivalent(&self, units1: &str, units2: &str) -> bool {
            self.is_valid_units_string(units1) && self.is_valid_units_string(units2)
        }
    }

    #[test]
    fn units_equivalence_uses_services() {
        let mut services = MeasurementServices::new();
        services.register(Metric);
        let mg = quantity(1.0, "mg");
        assert_eq!(mg.units_equivalent_to(&quantity(1.0, "kg"), &services), Ok(true));
        assert_eq!(mg.units_equivalent_to(&quantity(1.0, "ml"), &services), Ok(false));
        let unitless = Quantity::builder(1.0).build().unwrap();
        assert_eq!(mg.units_equivalent_to(&unitless, &services), Ok(false));
        assert_eq!(unitless.units_equivalent_to(&unitless, &services), Ok(true));
    }
}
