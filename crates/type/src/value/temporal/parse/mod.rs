// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod datetime;
mod time;

pub use datetime::parse_partial_date_time;
pub use time::parse_partial_time;

/// Parses a component of exactly `len` ASCII digits.
pub(crate) fn parse_digits(part: &str, len: usize) -> Option<u32> {
	if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	part.parse().ok()
}

/// Parses up to nine fractional second digits into nanoseconds.
pub(crate) fn parse_fraction(part: &str) -> Option<u32> {
	if part.is_empty() || part.len() > 9 || !part.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	format!("{:0<9}", part).parse().ok()
}

/// Time components as written: hour, then optional minute, second and fraction.
pub(crate) type TimeParts = (u32, Option<u32>, Option<u32>, Option<u32>);

/// Parses `HH[:MM[:SS[.f+]]]`, returning the reason on failure.
pub(crate) fn parse_time_parts(text: &str) -> Result<TimeParts, &'static str> {
	if text.is_empty() {
		return Err("empty time component");
	}

	let parts: Vec<&str> = text.split(':').collect();
	if parts.len() > 3 {
		return Err("too many time components");
	}

	let hour = parse_digits(parts[0], 2).ok_or("invalid hour format")?;

	let minute = match parts.get(1) {
		Some(part) => Some(parse_digits(part, 2).ok_or("invalid minute format")?),
		None => None,
	};

	let (second, nanos) = match parts.get(2) {
		Some(part) => {
			let (second, fraction) = match part.split_once('.') {
				Some((second, fraction)) => (second, Some(fraction)),
				None => (*part, None),
			};
			let second = parse_digits(second, 2).ok_or("invalid second format")?;
			let nanos = match fraction {
				Some(fraction) => Some(parse_fraction(fraction).ok_or("invalid fractional seconds")?),
				None => None,
			};
			(Some(second), nanos)
		}
		None => (None, None),
	};

	Ok((hour, minute, second, nanos))
}
