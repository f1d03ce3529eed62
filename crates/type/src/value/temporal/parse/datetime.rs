// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{parse_digits, parse_time_parts};
use crate::{Error, error::diagnostic::temporal::invalid_date_time, return_error, value::temporal::PartialDateTime};

/// Parses a date and time in the format `YYYY[-MM[-DD[THH[:MM[:SS[.fffffffff]]]]]][Z|(+|-)HH:MM]`.
pub fn parse_partial_date_time(text: &str) -> Result<PartialDateTime, Error> {
	let fail = |reason: &str| crate::error!(invalid_date_time(text, reason));

	let (date_part, time_part) = match text.split_once('T') {
		Some((date, time)) => (date, Some(time)),
		None => (text, None),
	};

	let date_parts: Vec<&str> = date_part.split('-').collect();
	if date_parts.len() > 3 {
		return_error!(invalid_date_time(text, "too many date components"));
	}

	let year = parse_digits(date_parts[0], 4).ok_or_else(|| fail("invalid year format"))? as i32;
	let month = match date_parts.get(1) {
		Some(part) => Some(parse_digits(part, 2).ok_or_else(|| fail("invalid month format"))?),
		None => None,
	};
	let day = match date_parts.get(2) {
		Some(part) => Some(parse_digits(part, 2).ok_or_else(|| fail("invalid day format"))?),
		None => None,
	};

	let Some(time_part) = time_part else {
		return PartialDateTime::new(year, month, day, None, None, None, None, None);
	};

	let (time_body, offset_seconds) = split_offset(time_part).map_err(fail)?;
	let (hour, minute, second, nanos) = parse_time_parts(time_body).map_err(fail)?;

	PartialDateTime::new(year, month, day, Some(hour), minute, second, nanos, offset_seconds)
}

/// Splits a trailing `Z` or `(+|-)HH:MM` from the time.
fn split_offset(time: &str) -> Result<(&str, Option<i32>), &'static str> {
	if let Some(body) = time.strip_suffix('Z') {
		return Ok((body, Some(0)));
	}

	let Some(pos) = time.rfind(['+', '-']) else {
		return Ok((time, None));
	};

	let (body, offset) = time.split_at(pos);
	let sign = if offset.starts_with('-') {
		-1
	} else {
		1
	};

	let (hours, minutes) = offset[1..].split_once(':').ok_or("invalid offset format")?;
	let hours = parse_digits(hours, 2).ok_or("invalid offset hour")?;
	let minutes = parse_digits(minutes, 2).ok_or("invalid offset minute")?;
	if hours > 23 || minutes > 59 {
		return Err("offset is out of range");
	}

	Ok((body, Some(sign * (hours * 3600 + minutes * 60) as i32)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::DateTimePrecision;

	#[test]
	fn test_year_only() {
		let value = parse_partial_date_time("2015").unwrap();
		assert_eq!(value.precision(), DateTimePrecision::Year);
		assert_eq!(value.get_year(), 2015);
	}

	#[test]
	fn test_date() {
		let value = parse_partial_date_time("2015-02-07").unwrap();
		assert_eq!(value.precision(), DateTimePrecision::Day);
		assert_eq!(value.get_day(), Some(7));
	}

	#[test]
	fn test_with_offset() {
		let value = parse_partial_date_time("2015-02-07T13:28:17-05:00").unwrap();
		assert_eq!(value.precision(), DateTimePrecision::Second);
		assert_eq!(value.offset_seconds(), Some(-18_000));
	}

	#[test]
	fn test_utc_offset_normalizes_to_z() {
		let value = parse_partial_date_time("2015-02-07T13:28:17+00:00").unwrap();
		assert_eq!(value.to_string(), "2015-02-07T13:28:17Z");
	}

	#[test]
	fn test_display_round_trip() {
		for text in [
			"2015",
			"2015-02",
			"2015-02-07",
			"2015-02-07T13",
			"2015-02-07T13:28",
			"2015-02-07T13:28:17",
			"2015-02-07T13:28:17.239+02:00",
			"2015-02-07T13:28:17.000Z",
		] {
			assert_eq!(parse_partial_date_time(text).unwrap().to_string(), text);
		}
	}

	#[test]
	fn test_invalid() {
		assert_eq!(parse_partial_date_time("15").unwrap_err().code(), "TEMPORAL_001");
		assert!(parse_partial_date_time("2015-2").is_err());
		assert!(parse_partial_date_time("2015-02-30").is_err());
		assert!(parse_partial_date_time("2015-02T10:00").is_err());
		assert!(parse_partial_date_time("2015-02-07T").is_err());
		assert!(parse_partial_date_time("2015-02-07T10:00+5").is_err());
		assert!(parse_partial_date_time("2015-02-07-01").is_err());
	}
}
