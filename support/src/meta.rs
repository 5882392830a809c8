use std::borrow::Cow;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("text must not be empty")]
    EmptyText,
    #[error("text {0:?} must not contain carriage return or line feed characters")]
    LineBreakInText(String),
    #[error("{0:?} is not a valid terminology id")]
    InvalidTerminologyId(String),
    #[error("code string must not be empty")]
    EmptyCodeString,
    #[error("{0:?} is not a valid units string")]
    InvalidUnits(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Joins runs of whitespace into a single space and strips leading and trailing whitespace.
pub fn collapse_whitespace(value: &str) -> Cow<str> {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed == value {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_trims_and_joins() {
        let value = collapse_whitespace("  at0001 \t code ");
        assert_eq!(value, "at0001 code");
    }

    #[test]
    fn collapse_borrows_when_already_normal() {
        let value = collapse_whitespace("N");
        assert!(matches!(value, Cow::Borrowed("N")));
    }
}
