use crate::{
    bound::Bound,
    comparable::Comparable,
    error::{DataValueError, Result},
};
use std::{cmp::Ordering, fmt};

/// Range of comparable values, each edge either bounded (open or closed) or unbounded.
///
/// Equality and hashing are structural over the four fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: Bound<T>,
    upper: Bound<T>,
    lower_included: bool,
    upper_included: bool,
}

impl<T> Interval<T> {
    pub const fn unbounded() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
            lower_included: false,
            upper_included: false,
        }
    }

    pub fn lower(&self) -> &Bound<T> {
        &self.lower
    }

    pub fn upper(&self) -> &Bound<T> {
        &self.upper
    }

    pub fn lower_unbounded(&self) -> bool {
        self.lower.is_unbounded()
    }

    pub fn upper_unbounded(&self) -> bool {
        self.upper.is_unbounded()
    }

    pub fn lower_included(&self) -> bool {
        self.lower_included
    }

    pub fn upper_included(&self) -> bool {
        self.upper_included
    }

    /// Containment decided by `locate`, which orders the tested value against one bound.
    ///
    /// Lets callers test values that are not of type `T` themselves, e.g. a leaf value against
    /// an interval of wrapped values.
    pub fn contains_by<F>(&self, mut locate: F) -> Result<bool>
    where
        F: FnMut(&T) -> Result<Ordering>,
    {
        let below_upper = |ordering: Ordering| match ordering {
            Ordering::Less => true,
            Ordering::Equal => self.upper_included,
            Ordering::Greater => false,
        };
        let above_lower = |ordering: Ordering| match ordering {
            Ordering::Greater => true,
            Ordering::Equal => self.lower_included,
            Ordering::Less => false,
        };
        match (&self.lower, &self.upper) {
            (Bound::Unbounded, Bound::Unbounded) => Ok(true),
            (Bound::Unbounded, Bound::Bounded(upper)) => Ok(below_upper(locate(upper)?)),
            (Bound::Bounded(lower), Bound::Unbounded) => Ok(above_lower(locate(lower)?)),
            (Bound::Bounded(lower), Bound::Bounded(upper)) => {
                Ok(above_lower(locate(lower)?) && below_upper(locate(upper)?))
            }
        }
    }
}

impl<T: Comparable> Interval<T> {
    pub fn new(
        lower: Bound<T>,
        upper: Bound<T>,
        lower_included: bool,
        upper_included: bool,
    ) -> Result<Self> {
        if lower_included && lower.is_unbounded() {
            return Err(DataValueError::InvalidBounds(
                "an unbounded lower edge cannot be included".into(),
            ));
        }
        if upper_included && upper.is_unbounded() {
            return Err(DataValueError::InvalidBounds(
                "an unbounded upper edge cannot be included".into(),
            ));
        }
        if let (Bound::Bounded(lower), Bound::Bounded(upper)) = (&lower, &upper) {
            if lower.type_name() != upper.type_name() {
                return Err(DataValueError::TypeMismatch {
                    expected: lower.type_name(),
                    found: upper.type_name(),
                });
            }
        }
        if lower.as_lower_edge().try_cmp(&upper.as_upper_edge())? == Ordering::Greater {
            tracing::debug!("rejected interval with lower bound above upper bound");
            return Err(DataValueError::InvalidBounds(
                "lower bound must not be greater than upper bound".into(),
            ));
        }
        Ok(Self {
            lower,
            upper,
            lower_included,
            upper_included,
        })
    }

    /// `[lower, upper]`
    pub fn closed(lower: T, upper: T) -> Result<Self> {
        Self::new(Bound::Bounded(lower), Bound::Bounded(upper), true, true)
    }

    /// `(lower, upper)`
    pub fn open(lower: T, upper: T) -> Result<Self> {
        Self::new(Bound::Bounded(lower), Bound::Bounded(upper), false, false)
    }

    /// `[lower, ~)`
    pub fn at_least(lower: T) -> Result<Self> {
        Self::new(Bound::Bounded(lower), Bound::Unbounded, true, false)
    }

    /// `(-~, upper]`
    pub fn at_most(upper: T) -> Result<Self> {
        Self::new(Bound::Unbounded, Bound::Bounded(upper), false, true)
    }

    /// Fails with `TypeMismatch` when `value` is not of the bounds' concrete type.
    pub fn contains(&self, value: &T) -> Result<bool> {
        if let Some(bound) = self.lower.value().or(self.upper.value()) {
            if bound.type_name() != value.type_name() {
                return Err(DataValueError::TypeMismatch {
                    expected: bound.type_name(),
                    found: value.type_name(),
                });
            }
        }
        self.contains_by(|bound| value.try_cmp(bound))
    }
}

impl<T> Default for Interval<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.lower_included { '[' } else { '(' },
            self.lower.as_lower_edge(),
            self.upper.as_upper_edge(),
            if self.upper_included { ']' } else { ')' },
        )
    }
}
