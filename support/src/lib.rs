pub mod measurement;
pub mod meta;
pub mod time_definitions;

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

pub use measurement::{MeasurementService, MeasurementServices};
pub use meta::Error;

lazy_static! {
    static ref TERMINOLOGY_ID: Regex = Regex::new(r"^([^()\s]+)(?:\(([^()\s][^()]*)\))?$").unwrap();
}

/// Plain text label, e.g. the meaning of a reference range.
///
/// Must contain at least one non-whitespace character and no line breaks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Text(String);

impl Text {
    pub fn from_literal(literal: &str) -> meta::Result<Self> {
        if literal.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        if literal.contains(['\n', '\r']) {
            return Err(Error::LineBreakInText(literal.to_string()));
        }
        Ok(Self(literal.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Terminology identifier of the form `name` or `name(version)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TerminologyId {
    name: String,
    version: Option<String>,
}

impl TerminologyId {
    pub fn from_literal(literal: &str) -> meta::Result<Self> {
        let captures = TERMINOLOGY_ID
            .captures(literal)
            .ok_or_else(|| Error::InvalidTerminologyId(literal.to_string()))?;
        Ok(Self {
            name: captures[1].to_string(),
            version: captures.get(2).map(|version| version.as_str().to_string()),
        })
    }

    pub fn with_version(name: &str, version: &str) -> meta::Result<Self> {
        Self::from_literal(&format!("{name}({version})"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl fmt::Display for TerminologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version.as_ref() {
            Some(version) => write!(f, "{}({})", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

/// A code from a terminology. Only `terminology_id` and `code_string` take part in equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodePhrase {
    terminology_id: TerminologyId,
    code_string: String,
}

impl CodePhrase {
    pub fn new(terminology_id: TerminologyId, code_string: &str) -> meta::Result<Self> {
        let code_string = meta::collapse_whitespace(code_string);
        if code_string.is_empty() {
            return Err(Error::EmptyCodeString);
        }
        Ok(Self {
            terminology_id,
            code_string: code_string.into_owned(),
        })
    }

    /// Shorthand for a code of the `openehr` terminology, where normal status codes live.
    pub fn openehr(code_string: &str) -> meta::Result<Self> {
        Self::new(TerminologyId::from_literal("openehr")?, code_string)
    }

    pub fn terminology_id(&self) -> &TerminologyId {
        &self.terminology_id
    }

    pub fn code_string(&self) -> &str {
        &self.code_string
    }
}

impl fmt::Display for CodePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.terminology_id, self.code_string)
    }
}

/// Text whose meaning is given by a code, e.g. the symbol of an ordinal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodedText {
    value: Text,
    defining_code: CodePhrase,
}

impl CodedText {
    pub fn new(value: &str, defining_code: CodePhrase) -> meta::Result<Self> {
        Ok(Self {
            value: Text::from_literal(value)?,
            defining_code,
        })
    }

    pub fn value(&self) -> &str {
        self.value.value()
    }

    pub fn defining_code(&self) -> &CodePhrase {
        &self.defining_code
    }
}

impl fmt::Display for CodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.value, self.defining_code)
    }
}
