use crate::error::{DataValueError, Result};
use std::cmp::Ordering;

/// Strict order restricted to peers that are strictly comparable.
///
/// Implementors either override both [`Comparable::is_strictly_comparable_to`] and
/// [`Comparable::try_cmp`] or neither; the defaults report [`DataValueError::NotImplemented`].
pub trait Comparable {
    /// Name of the concrete type, used for type-mismatch checks and messages.
    fn type_name(&self) -> &'static str;

    /// Short description used in `NotComparable` errors, e.g. `Quantity(mg)`.
    fn describe(&self) -> String {
        self.type_name().to_string()
    }

    fn is_strictly_comparable_to(&self, _other: &Self) -> Result<bool> {
        Err(DataValueError::NotImplemented(self.type_name()))
    }

    fn try_cmp(&self, _other: &Self) -> Result<Ordering> {
        Err(DataValueError::NotImplemented(self.type_name()))
    }

    fn try_lt(&self, other: &Self) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    fn try_gt(&self, other: &Self) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }
}

/// Fails with `NotComparable` unless `lhs` is strictly comparable to `rhs`.
pub(crate) fn require_comparable<T: Comparable + ?Sized>(lhs: &T, rhs: &T) -> Result<()> {
    if lhs.is_strictly_comparable_to(rhs)? {
        Ok(())
    } else {
        Err(DataValueError::NotComparable {
            lhs: lhs.describe(),
            rhs: rhs.describe(),
        })
    }
}

macro_rules! integer_comparable {
    ($($ty:ty),*) => {
        $(
            impl Comparable for $ty {
                fn type_name(&self) -> &'static str {
                    stringify!($ty)
                }

                fn is_strictly_comparable_to(&self, _other: &Self) -> Result<bool> {
                    Ok(true)
                }

                fn try_cmp(&self, other: &Self) -> Result<Ordering> {
                    Ok(self.cmp(other))
                }
            }
        )*
    };
}

integer_comparable!(i32, i64, u32);

impl Comparable for f64 {
    fn type_name(&self) -> &'static str {
        "f64"
    }

    fn is_strictly_comparable_to(&self, other: &Self) -> Result<bool> {
        Ok(!self.is_nan() && !other.is_nan())
    }

    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.partial_cmp(other)
            .ok_or_else(|| DataValueError::invalid_value("f64", "NaN has no order"))
    }
}
