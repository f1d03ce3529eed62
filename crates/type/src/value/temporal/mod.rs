// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Date and time values whose lower precision components may be absent.
//!
//! A [`PartialDateTime`] written as `2015-02` has month precision, and is a different value from
//! `2015-02-01`. Components are always filled from the most significant one downwards, a day without a
//! month cannot be represented.

mod datetime;
pub mod parse;
mod time;

pub use datetime::{DateTimePrecision, PartialDateTime};
pub use time::{PartialTime, TimePrecision};

pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Offsets are bounded to what `chrono::FixedOffset` accepts.
pub(crate) const MAX_OFFSET_SECONDS: i32 = 86_399;

#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
	(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[inline]
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 => {
			if is_leap_year(year) {
				29
			} else {
				28
			}
		}
		_ => 0,
	}
}

/// Checks hour, minute, second and fraction ranges, returning the reason on failure.
pub(crate) fn check_time_components(
	hour: u32,
	minute: Option<u32>,
	second: Option<u32>,
	nanos: Option<u32>,
) -> Result<(), &'static str> {
	if hour > 23 {
		return Err("hour must be between 0 and 23");
	}
	if minute.is_some_and(|m| m > 59) {
		return Err("minute must be between 0 and 59");
	}
	if second.is_some_and(|s| s > 59) {
		return Err("second must be between 0 and 59");
	}
	if nanos.is_some_and(|n| n >= NANOS_PER_SECOND) {
		return Err("fraction must be less than one second");
	}
	if second.is_some() && minute.is_none() {
		return Err("second requires a minute");
	}
	if nanos.is_some() && second.is_none() {
		return Err("fraction requires a second");
	}
	Ok(())
}

/// Writes `:MM:SS.fff` for whichever of the components are present.
///
/// Fractions are written with at least millisecond digits and trailing zeros beyond that removed.
pub(crate) fn write_time_tail(
	f: &mut std::fmt::Formatter<'_>,
	minute: Option<u32>,
	second: Option<u32>,
	nanos: Option<u32>,
) -> std::fmt::Result {
	if let Some(minute) = minute {
		write!(f, ":{:02}", minute)?;
	}
	if let Some(second) = second {
		write!(f, ":{:02}", second)?;
	}
	if let Some(nanos) = nanos {
		let digits = format!("{:09}", nanos);
		let trimmed = digits.trim_end_matches('0');
		let len = trimmed.len().max(3);
		write!(f, ".{}", &digits[..len])?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_leap_years() {
		assert!(is_leap_year(2000));
		assert!(is_leap_year(2024));
		assert!(!is_leap_year(1900));
		assert!(!is_leap_year(2023));
	}

	#[test]
	fn test_days_in_month() {
		assert_eq!(days_in_month(2024, 2), 29);
		assert_eq!(days_in_month(2023, 2), 28);
		assert_eq!(days_in_month(2023, 4), 30);
		assert_eq!(days_in_month(2023, 13), 0);
	}

	#[test]
	fn test_check_time_components() {
		assert!(check_time_components(23, Some(59), Some(59), Some(999_999_999)).is_ok());
		assert!(check_time_components(24, None, None, None).is_err());
		assert!(check_time_components(1, None, Some(0), None).is_err());
		assert!(check_time_components(1, Some(0), None, Some(0)).is_err());
	}
}
