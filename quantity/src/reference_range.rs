use crate::{comparable::Comparable, error::Result, interval::Interval};
use dt_support::Text;
use std::fmt;

/// Meaning of the reference range of an ordinal that gives its valid limits.
pub const LIMITS_MEANING: &str = "limits";

/// A named interval used to classify whether a value is normal, e.g. the luteal phase range of
/// an estrogen result.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceRange<T> {
    meaning: Text,
    range: Interval<T>,
}

impl<T> ReferenceRange<T> {
    pub fn new(meaning: Text, range: Interval<T>) -> Self {
        Self { meaning, range }
    }

    pub fn meaning(&self) -> &Text {
        &self.meaning
    }

    pub fn range(&self) -> &Interval<T> {
        &self.range
    }
}

impl<T: Comparable> ReferenceRange<T> {
    pub fn is_in_range(&self, value: &T) -> Result<bool> {
        self.range.contains(value)
    }
}

impl<T: fmt::Display> fmt::Display for ReferenceRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.meaning, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_in_range() {
        let follicular = ReferenceRange::new(
            Text::from_literal("Follicular phase").unwrap(),
            Interval::closed(29, 525).unwrap(),
        );
        assert_eq!(follicular.is_in_range(&100), Ok(true));
        assert_eq!(follicular.is_in_range(&600), Ok(false));
        assert_eq!(follicular.meaning().value(), "Follicular phase");
        assert_eq!(follicular.to_string(), "Follicular phase: [29, 525]");
    }
}
