use crate::{
    comparable::{require_comparable, Comparable},
    error::Result,
    ordered::{type_mismatch, Ordered, OrderedAttributes},
    ordered_value::OrderedValue,
    reference_range::{ReferenceRange, LIMITS_MEANING},
};
use dt_support::CodedText;
use std::{cmp::Ordering, fmt};

/// Rank in an ordered enumeration of coded symbols, e.g. `+`, `++`, `+++` for the severity of
/// a finding. Not an amount: ordinals have an order but no arithmetic.
#[derive(Clone, Debug)]
pub struct Ordinal {
    value: i64,
    symbol: CodedText,
    ordered: OrderedAttributes,
}

impl Ordinal {
    pub const TYPE_NAME: &'static str = "Ordinal";

    pub fn new(value: i64, symbol: CodedText) -> Self {
        Self {
            value,
            symbol,
            ordered: OrderedAttributes::default(),
        }
    }

    pub fn with_ordered(value: i64, symbol: CodedText, ordered: OrderedAttributes) -> Result<Self> {
        ordered.validate_for(Self::TYPE_NAME)?;
        Ok(Self {
            value,
            symbol,
            ordered,
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn symbol(&self) -> &CodedText {
        &self.symbol
    }

    /// The other reference range meaning `limits`, if any.
    pub fn limits(&self) -> Option<&ReferenceRange<OrderedValue>> {
        self.ordered.reference_range(LIMITS_MEANING)
    }
}

impl Comparable for Ordinal {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn describe(&self) -> String {
        format!(
            "{}({})",
            Self::TYPE_NAME,
            self.symbol.defining_code().terminology_id()
        )
    }

    /// Symbols must come from the same terminology.
    fn is_strictly_comparable_to(&self, other: &Self) -> Result<bool> {
        Ok(self.symbol.defining_code().terminology_id()
            == other.symbol.defining_code().terminology_id())
    }

    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        require_comparable(self, other)?;
        Ok(self.value.cmp(&other.value))
    }
}

impl Ordered for Ordinal {
    fn ordered_attributes(&self) -> &OrderedAttributes {
        &self.ordered
    }

    fn cmp_value(&self, other: &OrderedValue) -> Result<Ordering> {
        match other {
            OrderedValue::Ordinal(other) => self.try_cmp(other),
            other => Err(type_mismatch(Self::TYPE_NAME, other)),
        }
    }
}

impl PartialEq for Ordinal {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.is_strictly_comparable_to(other), Ok(true)) && self.value == other.value
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.value, self.symbol.value())
    }
}
