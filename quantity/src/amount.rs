use crate::{
    comparable::require_comparable,
    error::{DataValueError, Result},
    interval::Interval,
    numeric::Operator,
    ordered::OrderedAttributes,
    ordered_value::OrderedValue,
    quantified::{Quantified, RelationSymbol},
    reference_range::ReferenceRange,
};
use dt_support::CodePhrase;

/// Accuracy of an amount whose accuracy was never measured. Distinct from an accuracy of zero.
pub const UNKNOWN_ACCURACY: f64 = -1.0;

pub fn valid_percentage(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

/// Attributes every amount carries besides its magnitude.
#[derive(Clone, Debug, PartialEq)]
pub struct AmountAttributes {
    magnitude_status: Option<RelationSymbol>,
    accuracy: f64,
    accuracy_is_percent: bool,
    ordered: OrderedAttributes,
}

impl AmountAttributes {
    pub fn magnitude_status(&self) -> Option<RelationSymbol> {
        self.magnitude_status
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn accuracy_is_percent(&self) -> bool {
        self.accuracy_is_percent
    }

    pub fn accuracy_unknown(&self) -> bool {
        self.accuracy == UNKNOWN_ACCURACY
    }

    pub fn ordered(&self) -> &OrderedAttributes {
        &self.ordered
    }

    /// Attributes of `self op other`: ranges and status come from `self`, accuracy is
    /// propagated from both.
    pub(crate) fn combined_with(&self, other: &Self, op: Operator) -> Self {
        let (accuracy, accuracy_is_percent) = propagate_accuracy(self, other, op);
        Self {
            magnitude_status: self.magnitude_status,
            accuracy,
            accuracy_is_percent,
            ordered: self.ordered.clone(),
        }
    }
}

impl Default for AmountAttributes {
    fn default() -> Self {
        Self {
            magnitude_status: None,
            accuracy: UNKNOWN_ACCURACY,
            accuracy_is_percent: false,
            ordered: OrderedAttributes::default(),
        }
    }
}

/// Accuracy of `lhs op rhs`.
///
/// An unknown accuracy on either side makes the result unknown. Mixing a percent and an absolute
/// accuracy keeps the larger value together with its percent flag; on a tie the left operand
/// wins. Otherwise the accuracies are combined with `op` and stay percent only if both were.
fn propagate_accuracy(lhs: &AmountAttributes, rhs: &AmountAttributes, op: Operator) -> (f64, bool) {
    let result = if lhs.accuracy_unknown() || rhs.accuracy_unknown() {
        (UNKNOWN_ACCURACY, false)
    } else if lhs.accuracy_is_percent != rhs.accuracy_is_percent {
        if rhs.accuracy > lhs.accuracy {
            (rhs.accuracy, rhs.accuracy_is_percent)
        } else {
            (lhs.accuracy, lhs.accuracy_is_percent)
        }
    } else {
        (
            op.apply(lhs.accuracy, rhs.accuracy),
            lhs.accuracy_is_percent && rhs.accuracy_is_percent,
        )
    };
    tracing::trace!(
        lhs = lhs.accuracy,
        rhs = rhs.accuracy,
        op = %op.symbol(),
        accuracy = result.0,
        percent = result.1,
        "propagated accuracy"
    );
    result
}

/// A quantified value supporting addition, subtraction and negation.
pub trait Amount: Quantified + Sized {
    fn amount_attributes(&self) -> &AmountAttributes;

    /// Result of `self op other`, called once both are known to be strictly comparable.
    /// `attributes` already carries the propagated accuracy.
    fn combine(&self, other: &Self, op: Operator, attributes: AmountAttributes) -> Result<Self>;

    /// Negated magnitude; accuracy and its percent flag are unchanged. Fails with `Overflow` when
    /// an integer magnitude has no negation.
    fn negate(&self) -> Result<Self>;

    fn accuracy_is_percent(&self) -> bool {
        self.amount_attributes().accuracy_is_percent()
    }

    fn accuracy_unknown(&self) -> bool {
        self.amount_attributes().accuracy_unknown()
    }

    fn try_add(&self, other: &Self) -> Result<Self> {
        arithmetic(self, other, Operator::Add)
    }

    fn try_sub(&self, other: &Self) -> Result<Self> {
        arithmetic(self, other, Operator::Subtract)
    }
}

fn arithmetic<A: Amount>(lhs: &A, rhs: &A, op: Operator) -> Result<A> {
    require_comparable(lhs, rhs)?;
    let attributes = lhs
        .amount_attributes()
        .combined_with(rhs.amount_attributes(), op);
    lhs.combine(rhs, op, attributes)
}

/// Builder of an amount. `S` holds the inputs specific to the kind of amount being built.
#[derive(Clone, Debug)]
pub struct AmountBuilder<S> {
    pub(crate) spec: S,
    magnitude_status: Option<String>,
    accuracy: f64,
    accuracy_is_percent: bool,
    ordered: OrderedAttributes,
}

impl<S> AmountBuilder<S> {
    pub(crate) fn new(spec: S) -> Self {
        Self {
            spec,
            magnitude_status: None,
            accuracy: UNKNOWN_ACCURACY,
            accuracy_is_percent: false,
            ordered: OrderedAttributes::default(),
        }
    }

    /// Accepts a [`RelationSymbol`] or its symbol, checked on build.
    pub fn magnitude_status(mut self, status: impl ToString) -> Self {
        self.magnitude_status = Some(status.to_string());
        self
    }

    pub fn accuracy(mut self, accuracy: f64, is_percent: bool) -> Self {
        self.accuracy = accuracy;
        self.accuracy_is_percent = is_percent;
        self
    }

    pub fn normal_range(mut self, range: Interval<OrderedValue>) -> Self {
        self.ordered = std::mem::take(&mut self.ordered).with_normal_range(range);
        self
    }

    pub fn other_reference_ranges(mut self, ranges: Vec<ReferenceRange<OrderedValue>>) -> Self {
        self.ordered = std::mem::take(&mut self.ordered).with_other_reference_ranges(ranges);
        self
    }

    pub fn normal_status(mut self, status: CodePhrase) -> Self {
        self.ordered = std::mem::take(&mut self.ordered).with_normal_status(status);
        self
    }

    /// Replaces all ranges and the normal status at once.
    pub fn ordered(mut self, ordered: OrderedAttributes) -> Self {
        self.ordered = ordered;
        self
    }

    /// Validates the shared attributes for a value of type `type_name`.
    pub(crate) fn into_parts(self, type_name: &'static str) -> Result<(S, AmountAttributes)> {
        let magnitude_status = self
            .magnitude_status
            .as_deref()
            .map(str::parse::<RelationSymbol>)
            .transpose()?;
        validate_accuracy(self.accuracy, self.accuracy_is_percent)?;
        self.ordered.validate_for(type_name)?;
        Ok((
            self.spec,
            AmountAttributes {
                magnitude_status,
                accuracy: self.accuracy,
                accuracy_is_percent: self.accuracy_is_percent,
                ordered: self.ordered,
            },
        ))
    }
}

fn validate_accuracy(accuracy: f64, is_percent: bool) -> Result<()> {
    if accuracy == UNKNOWN_ACCURACY {
        return Ok(());
    }
    if !accuracy.is_finite() || accuracy < 0.0 {
        tracing::debug!(accuracy, "rejected accuracy");
        return Err(DataValueError::invalid_value(
            "accuracy",
            format!("{accuracy} is neither non-negative nor the unknown accuracy"),
        ));
    }
    if is_percent && !valid_percentage(accuracy) {
        tracing::debug!(accuracy, "rejected percent accuracy");
        return Err(DataValueError::invalid_value(
            "accuracy",
            format!("{accuracy}% is not within 0..=100"),
        ));
    }
    Ok(())
}
