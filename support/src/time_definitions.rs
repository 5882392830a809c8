//! Nominal time constants.
//!
//! The nominal month and year lengths are not calendar-accurate; they only give every duration a
//! single magnitude in seconds.

pub const SECONDS_IN_MINUTE: u32 = 60;
pub const MINUTES_IN_HOUR: u32 = 60;
pub const HOURS_IN_DAY: u32 = 24;
pub const DAYS_IN_WEEK: u32 = 7;
pub const NOMINAL_DAYS_IN_MONTH: f64 = 30.42;
pub const NOMINAL_DAYS_IN_YEAR: f64 = 365.24;

pub const SECONDS_IN_HOUR: u64 = (SECONDS_IN_MINUTE * MINUTES_IN_HOUR) as u64;
pub const SECONDS_IN_DAY: u64 = SECONDS_IN_HOUR * HOURS_IN_DAY as u64;
pub const SECONDS_IN_WEEK: u64 = SECONDS_IN_DAY * DAYS_IN_WEEK as u64;
/// [`NOMINAL_DAYS_IN_MONTH`] in seconds
pub const NOMINAL_SECONDS_IN_MONTH: u64 = 2_628_288;
/// [`NOMINAL_DAYS_IN_YEAR`] in seconds
pub const NOMINAL_SECONDS_IN_YEAR: u64 = 31_556_736;

pub fn valid_fractional_second(fractional_second: f64) -> bool {
    (0.0..1.0).contains(&fractional_second)
}
