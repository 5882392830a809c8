use crate::{comparable::Comparable, error::Result};
use std::{cmp::Ordering, fmt, ops::Neg};

/// Pseudo-values below and above every real value.
///
/// `Smallest` compares less than any value and than `Largest`; a sentinel only equals itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sentinel {
    Smallest,
    Largest,
}

impl Neg for Sentinel {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Smallest => Self::Largest,
            Self::Largest => Self::Smallest,
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Smallest => "-~",
            Self::Largest => "~",
        })
    }
}

/// One edge of an interval: a concrete value, or no limit on that side.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    Unbounded,
    Bounded(T),
}

impl<T> Bound<T> {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Unbounded => None,
            Self::Bounded(value) => Some(value),
        }
    }

    /// Sentinel-aware view of this bound used as a lower edge.
    pub fn as_lower_edge(&self) -> Edge<'_, T> {
        self.as_edge(Sentinel::Smallest)
    }

    pub fn as_upper_edge(&self) -> Edge<'_, T> {
        self.as_edge(Sentinel::Largest)
    }

    fn as_edge(&self, sentinel: Sentinel) -> Edge<'_, T> {
        match self {
            Self::Unbounded => Edge::Sentinel(sentinel),
            Self::Bounded(value) => Edge::Value(value),
        }
    }
}

impl<T> From<Option<T>> for Bound<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unbounded, Self::Bounded)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Edge<'a, T> {
    Sentinel(Sentinel),
    Value(&'a T),
}

impl<T: Comparable> Edge<'_, T> {
    pub fn try_cmp(&self, other: &Edge<'_, T>) -> Result<Ordering> {
        match (self, other) {
            (Edge::Sentinel(lhs), Edge::Sentinel(rhs)) => Ok(lhs.cmp(rhs)),
            (Edge::Sentinel(Sentinel::Smallest), Edge::Value(_)) => Ok(Ordering::Less),
            (Edge::Sentinel(Sentinel::Largest), Edge::Value(_)) => Ok(Ordering::Greater),
            (Edge::Value(_), Edge::Sentinel(Sentinel::Smallest)) => Ok(Ordering::Greater),
            (Edge::Value(_), Edge::Sentinel(Sentinel::Largest)) => Ok(Ordering::Less),
            (Edge::Value(lhs), Edge::Value(rhs)) => lhs.try_cmp(rhs),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Edge<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Sentinel(sentinel) => fmt::Display::fmt(sentinel, f),
            Edge::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}
