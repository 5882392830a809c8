//! ISO 8601 durations: `[-]P[nY][nM][nW][nD][T[nH][nM][n[.f]S]]`.
//!
//! Every duration has a single magnitude in seconds, computed with nominal month and year
//! lengths. Arithmetic works on that magnitude and renormalizes the result, so `P10D` plus
//! `P1W1D` is `P2W4D`.

use crate::{
    amount::{Amount, AmountAttributes, AmountBuilder},
    comparable::Comparable,
    error::{DataValueError, Result},
    numeric::{Numeric, Operator},
    ordered::{type_mismatch, Ordered, OrderedAttributes},
    ordered_value::OrderedValue,
    quantified::{Quantified, RelationSymbol},
};
use dt_support::time_definitions::{
    valid_fractional_second, NOMINAL_SECONDS_IN_MONTH, NOMINAL_SECONDS_IN_YEAR, SECONDS_IN_DAY,
    SECONDS_IN_HOUR, SECONDS_IN_MINUTE, SECONDS_IN_WEEK,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    cmp::Ordering,
    fmt::{self, Write as _},
    ops::Neg,
    str::FromStr,
};

lazy_static! {
    static ref DURATION: Regex = Regex::new(concat!(
        r"^(-)?P(?:([0-9]+)Y)?(?:([0-9]+)M)?(?:([0-9]+)W)?(?:([0-9]+)D)?",
        r"(T(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)(?:[.,]([0-9]+))?S)?)?$"
    ))
    .unwrap();
}

/// Seconds per year, month, week, day, hour, minute and second.
const MULTIPLIERS: [u64; 7] = [
    NOMINAL_SECONDS_IN_YEAR,
    NOMINAL_SECONDS_IN_MONTH,
    SECONDS_IN_WEEK,
    SECONDS_IN_DAY,
    SECONDS_IN_HOUR,
    SECONDS_IN_MINUTE as u64,
    1,
];
const DATE_DESIGNATORS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_DESIGNATORS: [char; 3] = ['H', 'M', 'S'];
const NANOS_IN_SECOND: u64 = 1_000_000_000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn factor(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// Signed breakdown of a duration. Components are never negative; `sign` applies to all of them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DurationComponents {
    pub sign: Sign,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// In `[0, 1)`
    pub fractional_seconds: f64,
}

impl DurationComponents {
    fn from_parts(sign: Sign, parts: [u32; 7], fractional_seconds: f64) -> Self {
        let [years, months, weeks, days, hours, minutes, seconds] = parts;
        Self {
            sign,
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
            fractional_seconds,
        }
    }

    fn parts(&self) -> [u32; 7] {
        [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.parts().iter().all(|part| *part == 0) && self.nanos() == 0
    }

    /// Signed total in seconds.
    pub fn magnitude(&self) -> f64 {
        let whole: f64 = self
            .parts()
            .iter()
            .zip(MULTIPLIERS)
            .map(|(part, multiplier)| f64::from(*part) * multiplier as f64)
            .sum();
        self.sign.factor() * (whole + self.fractional_seconds)
    }

    fn whole_seconds(&self) -> Option<u64> {
        self.parts()
            .iter()
            .zip(MULTIPLIERS)
            .try_fold(0_u64, |total, (part, multiplier)| {
                total.checked_add(u64::from(*part).checked_mul(multiplier)?)
            })
    }

    fn nanos(&self) -> u64 {
        ((self.fractional_seconds * NANOS_IN_SECOND as f64).round() as u64).min(NANOS_IN_SECOND - 1)
    }
}

/// Writes the components in ISO 8601 form, omitting zero components.
impl fmt::Display for DurationComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        if self.sign == Sign::Negative {
            f.write_char('-')?;
        }
        f.write_char('P')?;
        let parts = self.parts();
        for (part, designator) in parts[..4].iter().zip(DATE_DESIGNATORS) {
            if *part != 0 {
                write!(f, "{part}{designator}")?;
            }
        }
        let nanos = self.nanos();
        if parts[4..].iter().all(|part| *part == 0) && nanos == 0 {
            return Ok(());
        }
        f.write_char('T')?;
        for (part, designator) in parts[4..6].iter().zip(TIME_DESIGNATORS) {
            if *part != 0 {
                write!(f, "{part}{designator}")?;
            }
        }
        if self.seconds != 0 || nanos != 0 {
            write!(f, "{}", self.seconds)?;
            if nanos != 0 {
                let digits = format!("{nanos:09}");
                write!(f, ".{}", digits.trim_end_matches('0'))?;
            }
            f.write_char(TIME_DESIGNATORS[2])?;
        }
        Ok(())
    }
}

/// Greedy largest-unit-first breakdown of `whole` seconds plus `nanos`.
fn normalize(sign: Sign, whole: u64, nanos: u64) -> Option<DurationComponents> {
    let mut remaining = whole.checked_add(nanos / NANOS_IN_SECOND)?;
    let nanos = nanos % NANOS_IN_SECOND;
    let mut parts = [0_u32; 7];
    for (part, multiplier) in parts.iter_mut().zip(MULTIPLIERS) {
        *part = u32::try_from(remaining / multiplier).ok()?;
        remaining %= multiplier;
    }
    tracing::trace!(whole, nanos, ?parts, "decomposed duration");
    // Zero has no sign.
    let sign = if nanos == 0 && parts.iter().all(|part| *part == 0) {
        Sign::Positive
    } else {
        sign
    };
    Some(DurationComponents::from_parts(
        sign,
        parts,
        nanos as f64 / NANOS_IN_SECOND as f64,
    ))
}

fn invalid(input: impl fmt::Display) -> DataValueError {
    let input = input.to_string();
    tracing::debug!(input, "rejected duration");
    DataValueError::InvalidDuration(input)
}

fn components_from_seconds(seconds: f64) -> Result<DurationComponents> {
    if !seconds.is_finite() || seconds.abs() >= u64::MAX as f64 {
        return Err(invalid(seconds));
    }
    let sign = if seconds < 0.0 {
        Sign::Negative
    } else {
        Sign::Positive
    };
    let total = seconds.abs();
    let whole = total.trunc();
    let nanos = ((total - whole) * NANOS_IN_SECOND as f64).round() as u64;
    normalize(sign, whole as u64, nanos).ok_or_else(|| invalid(seconds))
}

fn components_from_literal(literal: &str) -> Result<DurationComponents> {
    let captures = DURATION.captures(literal).ok_or_else(|| invalid(literal))?;
    let component_groups = [2, 3, 4, 5, 7, 8, 9];
    if component_groups.iter().all(|group| captures.get(*group).is_none()) {
        return Err(invalid(literal));
    }
    if captures.get(6).is_some() && (7..=9).all(|group| captures.get(group).is_none()) {
        return Err(invalid(literal));
    }
    let mut parts = [0_u32; 7];
    for (part, group) in parts.iter_mut().zip(component_groups) {
        if let Some(digits) = captures.get(group) {
            *part = digits.as_str().parse().map_err(|_| invalid(literal))?;
        }
    }
    let fractional_seconds = match captures.get(10) {
        Some(digits) => format!("0.{}", digits.as_str())
            .parse::<f64>()
            .map_err(|_| invalid(literal))?,
        None => 0.0,
    };
    let sign = if captures.get(1).is_some() {
        Sign::Negative
    } else {
        Sign::Positive
    };
    Ok(DurationComponents::from_parts(
        sign,
        parts,
        fractional_seconds,
    ))
}

/// The canonical form of `components`, which are kept as given.
fn normalized(components: &DurationComponents) -> Option<DurationComponents> {
    if !valid_fractional_second(components.fractional_seconds) {
        return None;
    }
    let nanos = (components.fractional_seconds * NANOS_IN_SECOND as f64).round() as u64;
    normalize(components.sign, components.whole_seconds()?, nanos)
}

/// Signed ISO 8601 duration with an optional accuracy.
#[derive(Clone, Debug)]
pub struct Duration {
    components: DurationComponents,
    normalized: DurationComponents,
    amount: AmountAttributes,
}

/// Input a duration is built from.
#[derive(Clone, Debug)]
pub enum DurationSpec {
    Literal(String),
    Seconds(f64),
    Components(DurationComponents),
}

impl From<&str> for DurationSpec {
    fn from(literal: &str) -> Self {
        Self::Literal(literal.to_string())
    }
}

impl From<f64> for DurationSpec {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<i64> for DurationSpec {
    fn from(seconds: i64) -> Self {
        Self::Seconds(seconds as f64)
    }
}

impl From<DurationComponents> for DurationSpec {
    fn from(components: DurationComponents) -> Self {
        Self::Components(components)
    }
}

pub type DurationBuilder = AmountBuilder<DurationSpec>;

impl Duration {
    pub const TYPE_NAME: &'static str = "Duration";

    pub fn builder(spec: impl Into<DurationSpec>) -> DurationBuilder {
        AmountBuilder::new(spec.into())
    }

    /// Empty literals, `P`, `PT` and a `T` without time components are rejected.
    pub fn parse(literal: &str) -> Result<Self> {
        Self::builder(literal).build()
    }

    pub fn from_seconds(seconds: f64) -> Result<Self> {
        Self::builder(seconds).build()
    }

    pub fn from_components(components: DurationComponents) -> Result<Self> {
        Self::builder(components).build()
    }

    pub fn sign(&self) -> Sign {
        self.normalized.sign
    }

    pub fn years(&self) -> u32 {
        self.normalized.years
    }

    pub fn months(&self) -> u32 {
        self.normalized.months
    }

    pub fn weeks(&self) -> u32 {
        self.normalized.weeks
    }

    pub fn days(&self) -> u32 {
        self.normalized.days
    }

    pub fn hours(&self) -> u32 {
        self.normalized.hours
    }

    pub fn minutes(&self) -> u32 {
        self.normalized.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.normalized.seconds
    }

    pub fn fractional_seconds(&self) -> f64 {
        self.normalized.fractional_seconds
    }

    /// Components as given when the duration was built. The accessors above read the normalized
    /// components, which agree with the string form.
    pub fn components(&self) -> &DurationComponents {
        &self.components
    }

    pub fn normalized(&self) -> &DurationComponents {
        &self.normalized
    }

    /// Signed total in seconds.
    pub fn magnitude_seconds(&self) -> f64 {
        self.components.magnitude()
    }

    /// Canonical ISO 8601 form, same as `to_string`.
    pub fn canonical(&self) -> String {
        self.normalized.to_string()
    }
}

impl AmountBuilder<DurationSpec> {
    pub fn build(self) -> Result<Duration> {
        let (spec, amount) = self.into_parts(Duration::TYPE_NAME)?;
        let (components, normalized) = match spec {
            DurationSpec::Literal(literal) => {
                let components = components_from_literal(&literal)?;
                let normalized = normalized(&components).ok_or_else(|| invalid(&literal))?;
                (components, normalized)
            }
            DurationSpec::Seconds(seconds) => {
                let components = components_from_seconds(seconds)?;
                (components, components)
            }
            DurationSpec::Components(components) => {
                let normalized = normalized(&components).ok_or_else(|| invalid(components))?;
                (components, normalized)
            }
        };
        Ok(Duration {
            components,
            normalized,
            amount,
        })
    }
}

impl FromStr for Duration {
    type Err = DataValueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Comparable for Duration {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    /// Any two durations are comparable.
    fn is_strictly_comparable_to(&self, _other: &Self) -> Result<bool> {
        Ok(true)
    }

    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.magnitude().try_cmp(other.magnitude())
    }
}

impl Ordered for Duration {
    fn ordered_attributes(&self) -> &OrderedAttributes {
        self.amount.ordered()
    }

    fn cmp_value(&self, other: &OrderedValue) -> Result<Ordering> {
        match other {
            OrderedValue::Duration(other) => self.try_cmp(other),
            other => Err(type_mismatch(Self::TYPE_NAME, other)),
        }
    }
}

impl Quantified for Duration {
    fn magnitude(&self) -> Numeric {
        Numeric::Real(self.magnitude_seconds())
    }

    fn accuracy(&self) -> Option<f64> {
        Some(self.amount.accuracy())
    }

    fn magnitude_status(&self) -> Option<RelationSymbol> {
        self.amount.magnitude_status()
    }
}

impl Amount for Duration {
    fn amount_attributes(&self) -> &AmountAttributes {
        &self.amount
    }

    /// Works on the magnitudes; the result is normalized.
    fn combine(&self, other: &Self, op: Operator, amount: AmountAttributes) -> Result<Self> {
        let seconds = op.apply(self.magnitude_seconds(), other.magnitude_seconds());
        let components = components_from_seconds(seconds)?;
        Ok(Self {
            components,
            normalized: components,
            amount,
        })
    }

    fn negate(&self) -> Result<Self> {
        Ok(-self)
    }
}

impl Neg for &Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        let flip = |components: DurationComponents| DurationComponents {
            sign: if components.is_zero() {
                components.sign
            } else {
                -components.sign
            },
            ..components
        };
        Duration {
            components: flip(self.components),
            normalized: flip(self.normalized),
            amount: self.amount.clone(),
        }
    }
}

/// Equal magnitudes and equal accuracies.
impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude_seconds() == other.magnitude_seconds()
            && self.amount.accuracy() == other.amount.accuracy()
            && self.amount.accuracy_is_percent() == other.amount.accuracy_is_percent()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.normalized, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, interval::Interval};

    fn components(parts: [u32; 7], fractional_seconds: f64) -> DurationComponents {
        DurationComponents::from_parts(Sign::Positive, parts, fractional_seconds)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    fn assert_parts(duration: &Duration, parts: [u32; 7], fractional_seconds: f64) {
        let given = duration.components();
        assert_eq!(given.parts(), parts, "{duration}");
        assert_close(given.fractional_seconds, fractional_seconds);
    }

    #[test]
    fn parse_components_as_given() {
        let data = [
            ("P0Y12M32W10DT9H8M7.898S", [0, 12, 32, 10, 9, 8, 7], 0.898),
            ("P10DT9H8M7S", [0, 0, 0, 10, 9, 8, 7], 0.0),
            ("P10D", [0, 0, 0, 10, 0, 0, 0], 0.0),
            ("PT9H", [0, 0, 0, 0, 9, 0, 0], 0.0),
            ("PT8M", [0, 0, 0, 0, 0, 8, 0], 0.0),
            ("PT7S", [0, 0, 0, 0, 0, 0, 7], 0.0),
            ("P10DT9H7S", [0, 0, 0, 10, 9, 0, 7], 0.0),
            ("PT9H0M8S", [0, 0, 0, 0, 9, 0, 8], 0.0),
            ("P1Y2M3W4D", [1, 2, 3, 4, 0, 0, 0], 0.0),
            ("P9Y6DT2.99S", [9, 0, 0, 6, 0, 0, 2], 0.99),
            ("P35WT45H", [0, 0, 35, 0, 45, 0, 0], 0.0),
            ("P20M33DT79M", [0, 20, 0, 33, 0, 79, 0], 0.0),
            ("PT0,19S", [0, 0, 0, 0, 0, 0, 0], 0.19),
            ("P0Y", [0; 7], 0.0),
            ("P0DT0S", [0; 7], 0.0),
            ("PT0H", [0; 7], 0.0),
        ];
        for (literal, parts, fractional_seconds) in data {
            let duration = Duration::parse(literal).unwrap();
            assert_eq!(duration.sign(), Sign::Positive, "{literal}");
            assert_parts(&duration, parts, fractional_seconds);
        }

        let negative = Duration::parse("-P1Y2M3W4DT5H6M7,8S").unwrap();
        assert_eq!(negative.components().sign, Sign::Negative);
        assert_parts(&negative, [1, 2, 3, 4, 5, 6, 7], 0.8);
        assert!(negative.magnitude_seconds() < 0.0);
    }

    #[test]
    fn parse_rejects_malformed() {
        let literals = [
            "",
            "P",
            "PT",
            "-P",
            "P0DT",
            "10",
            "T9H",
            "P10D11WT9H8M7S",
            "P10A8M7S",
            "P-1Y-4W",
            "-P0Y0DT-7H",
            "P1.5D",
            "PT1.S",
            "pt1s",
            "P99999999999Y",
        ];
        for literal in literals {
            let error = Duration::parse(literal).unwrap_err();
            assert_eq!(
                error,
                DataValueError::InvalidDuration(literal.to_string()),
                "{literal:?}"
            );
            assert_eq!(error.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn parse_rejects_durations_too_long_to_normalize() {
        assert!(Duration::parse("P4294967295Y4294967295M").is_err());
        assert!(Duration::parse("P4294967295Y").is_ok());
    }

    #[test]
    fn canonical_form() {
        let data = [
            ("PT36H", "P1DT12H"),
            ("P14D", "P2W"),
            ("PT0,19S", "PT0.19S"),
            ("-PT0H0M56S", "-PT56S"),
            ("P0Y", "PT0S"),
            ("-PT0S", "PT0S"),
            ("P1Y", "P1Y"),
            ("PT90M", "PT1H30M"),
            ("P1DT1S", "P1DT1S"),
            ("PT1.500S", "PT1.5S"),
        ];
        for (literal, canonical) in data {
            let duration: Duration = literal.parse().unwrap();
            assert_eq!(duration.canonical(), canonical, "{literal}");
            assert_eq!(duration.to_string(), canonical);
        }
    }

    #[test]
    fn canonical_form_is_idempotent() {
        let literals = [
            "P0Y12M32W10DT9H8M7.898S",
            "P9Y6DT2.99S",
            "P35WT45H",
            "P20M33DT79M",
            "-P1Y2M3W4DT5H6M7,8S",
            "PT0,19S",
            "P1Y2M3W4D",
        ];
        for literal in literals {
            let once = Duration::parse(literal).unwrap().canonical();
            let twice = Duration::parse(&once).unwrap().canonical();
            assert_eq!(once, twice, "{literal}");
            let before = Duration::parse(literal).unwrap().magnitude_seconds();
            let after = Duration::parse(&once).unwrap().magnitude_seconds();
            assert!((before - after).abs() < 1e-6, "{literal}");
        }
    }

    #[test]
    fn accessors_agree_with_string_form() {
        let duration = Duration::parse("PT36H").unwrap();
        assert_eq!(duration.components().hours, 36);
        assert_eq!((duration.days(), duration.hours()), (1, 12));

        for literal in ["PT36H", "P20M33DT79M", "-PT90M", "-PT0S", "P0Y12M32W10DT9H8M7.898S", "P14D"] {
            let duration = Duration::parse(literal).unwrap();
            let reparsed = Duration::parse(&duration.to_string()).unwrap();
            assert_eq!(reparsed.sign(), duration.sign(), "{literal}");
            assert_eq!(reparsed.years(), duration.years(), "{literal}");
            assert_eq!(reparsed.months(), duration.months(), "{literal}");
            assert_eq!(reparsed.weeks(), duration.weeks(), "{literal}");
            assert_eq!(reparsed.days(), duration.days(), "{literal}");
            assert_eq!(reparsed.hours(), duration.hours(), "{literal}");
            assert_eq!(reparsed.minutes(), duration.minutes(), "{literal}");
            assert_eq!(reparsed.seconds(), duration.seconds(), "{literal}");
            assert_close(reparsed.fractional_seconds(), duration.fractional_seconds());
        }
    }

    #[test]
    fn magnitude_uses_nominal_lengths() {
        let data = [
            ("P1Y", 31_556_736.0),
            ("P1M", 2_628_288.0),
            ("P1W", 604_800.0),
            ("P1DT1H1M1S", 90_061.0),
            ("-PT1.25S", -1.25),
        ];
        for (literal, seconds) in data {
            assert_close(Duration::parse(literal).unwrap().magnitude_seconds(), seconds);
        }
    }

    #[test]
    fn from_seconds() {
        let data = [
            (0.0, "PT0S"),
            (90_061.5, "P1DT1H1M1.5S"),
            (-60.0, "-PT1M"),
            (31_556_737.0, "P1YT1S"),
            (1_209_600.0, "P2W"),
            (0.000_000_000_4, "PT0S"),
            (59.999_999_999_9, "PT1M"),
        ];
        for (seconds, canonical) in data {
            assert_eq!(Duration::from_seconds(seconds).unwrap().to_string(), canonical);
        }
        for seconds in [f64::NAN, f64::INFINITY, 1e30] {
            assert!(Duration::from_seconds(seconds).is_err(), "{seconds}");
        }
        let duration = Duration::builder(3_600_i64).build().unwrap();
        assert_eq!(duration.hours(), 1);
    }

    #[test]
    fn from_components() {
        let duration = Duration::from_components(components([0, 10, 3, 1, 19, 8, 37], 0.857)).unwrap();
        assert_parts(&duration, [0, 10, 3, 1, 19, 8, 37], 0.857);

        let error = Duration::from_components(components([0, 0, 3, 1, 0, 8, 37], 1.857)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert!(Duration::from_components(components([0; 7], -0.5)).is_err());
        assert!(Duration::from_components(components([0; 7], f64::NAN)).is_err());
    }

    #[test]
    fn addition_renormalizes() {
        let one = Duration::from_components(components([0, 0, 0, 10, 20, 30, 40], 0.0)).unwrap();
        let two = Duration::from_components(components([0, 0, 1, 1, 2, 3, 4], 0.0)).unwrap();
        let sum = one.try_add(&two).unwrap();
        assert_parts(&sum, [0, 0, 2, 4, 22, 33, 44], 0.0);
        assert_eq!(sum.to_string(), "P2W4DT22H33M44S");

        let one = Duration::from_components(components([0, 0, 0, 10, 20, 30, 40], 0.5)).unwrap();
        let two = Duration::from_components(components([0, 0, 1, 1, 2, 3, 4], 0.05)).unwrap();
        let sum = one.try_add(&two).unwrap();
        assert_parts(&sum, [0, 0, 2, 4, 22, 33, 44], 0.55);
    }

    #[test]
    fn subtraction_renormalizes() {
        let one = Duration::from_components(components([0, 0, 0, 10, 20, 30, 40], 0.5)).unwrap();
        let two = Duration::from_components(components([0, 0, 1, 0, 2, 3, 4], 0.05)).unwrap();
        let difference = one.try_sub(&two).unwrap();
        assert_parts(&difference, [0, 0, 0, 3, 18, 27, 36], 0.45);

        let difference = difference.try_sub(&Duration::parse("P5D").unwrap()).unwrap();
        assert_eq!(difference.sign(), Sign::Negative);
        assert_parts(&difference, [0, 0, 0, 1, 5, 32, 23], 0.55);
        assert_eq!(difference.to_string(), "-P1DT5H32M23.55S");
    }

    #[test]
    fn negation_flips_sign_only() {
        let duration = Duration::parse("P1DT2H").unwrap();
        let negated = -&duration;
        assert_eq!(negated.sign(), Sign::Negative);
        assert_eq!(negated.days(), 1);
        assert_eq!(negated.hours(), 2);
        assert_eq!(negated.to_string(), "-P1DT2H");
        assert_eq!(negated.negate(), Ok(duration));

        let zero = Duration::parse("PT0S").unwrap();
        assert_eq!((-&zero).sign(), Sign::Positive);
        assert_eq!(Duration::parse("-PT0S").unwrap().sign(), Sign::Positive);
    }

    #[test]
    fn equality_includes_accuracy() {
        let a = Duration::parse("PT60M").unwrap();
        let b = Duration::parse("PT1H").unwrap();
        assert_eq!(a, b);

        let measured = Duration::builder("PT1H").accuracy(5.0, false).build().unwrap();
        assert_ne!(a, measured);
        let percent = Duration::builder("PT1H").accuracy(5.0, true).build().unwrap();
        assert_ne!(measured, percent);
        assert_eq!(a.try_cmp(&measured), Ok(Ordering::Equal));
    }

    #[test]
    fn every_duration_is_comparable() {
        let short = Duration::parse("PT59S").unwrap();
        let long = Duration::parse("P1M").unwrap();
        assert_eq!(short.is_strictly_comparable_to(&long), Ok(true));
        assert_eq!(short.try_lt(&long), Ok(true));
        assert_eq!((-&long).try_lt(&short), Ok(true));
        assert!(short.accuracy_unknown());
    }

    #[test]
    fn normal_range_of_durations() {
        let range = Interval::<OrderedValue>::closed(
            Duration::parse("PT8H").unwrap().into(),
            Duration::parse("PT10H").unwrap().into(),
        )
        .unwrap();
        let sleep = Duration::builder("PT540M")
            .magnitude_status("~")
            .normal_range(range)
            .build()
            .unwrap();
        assert_eq!(sleep.is_normal(), Ok(true));
        assert_eq!(sleep.magnitude_status(), Some(RelationSymbol::Approximate));
        assert!(!sleep.is_exact());
    }
}
