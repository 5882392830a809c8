use crate::{
    comparable::Comparable,
    error::{DataValueError, Result},
    interval::Interval,
    ordered_value::OrderedValue,
    reference_range::ReferenceRange,
};
use dt_support::CodePhrase;
use std::cmp::Ordering;

/// Code string of the `normal` entry of the normal status vocabulary.
pub const NORMAL_STATUS_CODE: &str = "N";

/// Ranges and status shared by every ordered value.
///
/// Setters never fail; the attributes are checked against the owning value's type when that
/// value is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderedAttributes {
    normal_range: Option<Box<Interval<OrderedValue>>>,
    other_reference_ranges: Option<Vec<ReferenceRange<OrderedValue>>>,
    normal_status: Option<CodePhrase>,
}

impl OrderedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normal_range(mut self, range: Interval<OrderedValue>) -> Self {
        self.normal_range = Some(Box::new(range));
        self
    }

    pub fn with_other_reference_ranges(mut self, ranges: Vec<ReferenceRange<OrderedValue>>) -> Self {
        self.other_reference_ranges = Some(ranges);
        self
    }

    pub fn with_normal_status(mut self, status: CodePhrase) -> Self {
        self.normal_status = Some(status);
        self
    }

    pub fn normal_range(&self) -> Option<&Interval<OrderedValue>> {
        self.normal_range.as_deref()
    }

    pub fn other_reference_ranges(&self) -> Option<&[ReferenceRange<OrderedValue>]> {
        self.other_reference_ranges.as_deref()
    }

    pub fn normal_status(&self) -> Option<&CodePhrase> {
        self.normal_status.as_ref()
    }

    /// First other reference range with the given meaning.
    pub fn reference_range(&self, meaning: &str) -> Option<&ReferenceRange<OrderedValue>> {
        self.other_reference_ranges()?
            .iter()
            .find(|range| range.meaning().value() == meaning)
    }

    /// Checks that every attached range is over values of type `type_name`.
    pub(crate) fn validate_for(&self, type_name: &'static str) -> Result<()> {
        if let Some(ranges) = &self.other_reference_ranges {
            if ranges.is_empty() {
                tracing::debug!(type_name, "rejected empty other reference ranges");
                return Err(DataValueError::EmptyReferenceRanges);
            }
            for range in ranges {
                check_range_type(range.range(), type_name)?;
            }
        }
        if let Some(range) = &self.normal_range {
            check_range_type(range, type_name)?;
        }
        Ok(())
    }
}

fn check_range_type(range: &Interval<OrderedValue>, type_name: &'static str) -> Result<()> {
    match range.lower().value().or(range.upper().value()) {
        Some(bound) if bound.type_name() != type_name => {
            tracing::debug!(
                expected = type_name,
                found = bound.type_name(),
                "rejected range over another value type"
            );
            Err(DataValueError::TypeMismatch {
                expected: type_name,
                found: bound.type_name(),
            })
        }
        _ => Ok(()),
    }
}

/// A value with a strict order among strictly comparable peers, classifiable against a normal
/// range or a normal status.
pub trait Ordered: Comparable {
    fn ordered_attributes(&self) -> &OrderedAttributes;

    /// Orders `self` against a value held by one of its ranges.
    fn cmp_value(&self, _other: &OrderedValue) -> Result<Ordering> {
        Err(DataValueError::NotImplemented(self.type_name()))
    }

    fn normal_range(&self) -> Option<&Interval<OrderedValue>> {
        self.ordered_attributes().normal_range()
    }

    fn other_reference_ranges(&self) -> Option<&[ReferenceRange<OrderedValue>]> {
        self.ordered_attributes().other_reference_ranges()
    }

    fn normal_status(&self) -> Option<&CodePhrase> {
        self.ordered_attributes().normal_status()
    }

    /// True if no range of any kind is attached.
    fn is_simple(&self) -> bool {
        self.normal_range().is_none() && self.other_reference_ranges().is_none()
    }

    /// The normal range decides when present; the normal status is only consulted without one.
    fn is_normal(&self) -> Result<bool> {
        if let Some(range) = self.normal_range() {
            return range.contains_by(|bound| self.cmp_value(bound));
        }
        match self.normal_status() {
            Some(status) => Ok(status.code_string() == NORMAL_STATUS_CODE),
            None => Err(DataValueError::NoRangeDefined),
        }
    }

    /// Other reference ranges that contain `self`.
    fn matching_reference_ranges(&self) -> Result<Vec<&ReferenceRange<OrderedValue>>> {
        let mut matching = Vec::new();
        for range in self.other_reference_ranges().unwrap_or_default() {
            if range.range().contains_by(|bound| self.cmp_value(bound))? {
                matching.push(range);
            }
        }
        Ok(matching)
    }
}

pub(crate) fn type_mismatch(expected: &'static str, found: &OrderedValue) -> DataValueError {
    DataValueError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}
