use crate::{
    error::{DataValueError, Result},
    numeric::Numeric,
    ordered::Ordered,
};
use std::{fmt, str::FromStr};

/// Relation of a stated magnitude to the true value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RelationSymbol {
    Equal,
    GreaterThan,
    LessThan,
    LessOrEqual,
    GreaterOrEqual,
    Approximate,
}

impl RelationSymbol {
    pub const ALL: [Self; 6] = [
        Self::Equal,
        Self::GreaterThan,
        Self::LessThan,
        Self::LessOrEqual,
        Self::GreaterOrEqual,
        Self::Approximate,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::GreaterOrEqual => ">=",
            Self::Approximate => "~",
        }
    }

    pub fn is_valid(symbol: &str) -> bool {
        symbol.parse::<Self>().is_ok()
    }
}

impl FromStr for RelationSymbol {
    type Err = DataValueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|relation| relation.symbol() == s)
            .ok_or_else(|| DataValueError::InvalidMagnitudeStatus(s.to_string()))
    }
}

impl fmt::Display for RelationSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An ordered value with a numeric magnitude.
pub trait Quantified: Ordered {
    fn magnitude(&self) -> Numeric;

    /// `None` if the type carries no accuracy at all.
    fn accuracy(&self) -> Option<f64>;

    fn magnitude_status(&self) -> Option<RelationSymbol>;

    /// True unless the magnitude is only a bound or an approximation of the true value.
    fn is_exact(&self) -> bool {
        matches!(
            self.magnitude_status(),
            None | Some(RelationSymbol::Equal)
        )
    }
}
