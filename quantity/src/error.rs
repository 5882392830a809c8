use thiserror::Error;

/// Coarse classification of a [`DataValueError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A field failed its type, range or format constraint at construction time.
    Validation,
    /// Two operands, or a value and an interval, do not share a concrete type.
    TypeMismatch,
    /// Same concrete type, but not strictly comparable (e.g. different units).
    NotComparable,
    NoRangeDefined,
    /// A strict order was requested from a type that never defines one.
    NotImplemented,
    InvalidBounds,
    EmptyReferenceRanges,
    Overflow,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum DataValueError {
    #[error("{0:?} is not a valid ISO 8601 duration")]
    InvalidDuration(String),
    #[error("invalid proportion: {0}")]
    InvalidProportion(String),
    #[error("{0:?} is not a valid magnitude status (expected one of =, >, <, <=, >=, ~)")]
    InvalidMagnitudeStatus(String),
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("invalid interval bounds: {0}")]
    InvalidBounds(String),
    #[error("other reference ranges must be absent or non-empty")]
    EmptyReferenceRanges,
    #[error("expected a value of type {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{lhs} is not strictly comparable to {rhs}")]
    NotComparable { lhs: String, rhs: String },
    #[error("neither a normal range nor a normal status is defined")]
    NoRangeDefined,
    #[error("{0} does not define a strict order")]
    NotImplemented(&'static str),
    #[error("{0} overflowed")]
    Overflow(&'static str),
    #[error(transparent)]
    Support(#[from] dt_support::Error),
}

impl DataValueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDuration(_)
            | Self::InvalidProportion(_)
            | Self::InvalidMagnitudeStatus(_)
            | Self::InvalidValue { .. }
            | Self::Support(_) => ErrorKind::Validation,
            Self::InvalidBounds(_) => ErrorKind::InvalidBounds,
            Self::EmptyReferenceRanges => ErrorKind::EmptyReferenceRanges,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::NotComparable { .. } => ErrorKind::NotComparable,
            Self::NoRangeDefined => ErrorKind::NoRangeDefined,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
            Self::Overflow(_) => ErrorKind::Overflow,
        }
    }

    pub(crate) fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataValueError>;
