// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	str::FromStr,
};

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use super::{MAX_OFFSET_SECONDS, check_time_components, days_in_month, parse::parse_partial_date_time, write_time_tail};
use crate::{Error, Result, error::diagnostic::temporal::invalid_date_time, return_error};

/// The least significant component present in a [`PartialDateTime`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DateTimePrecision {
	Year,
	Month,
	Day,
	Hour,
	Minute,
	Second,
	Fraction,
}

/// A date and time value with possibly absent lower precision components and an optional UTC offset.
///
/// Two values are only equal when the same components are present and equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialDateTime {
	year: i32,
	month: Option<u32>,
	day: Option<u32>,
	hour: Option<u32>,
	minute: Option<u32>,
	second: Option<u32>,
	nanos: Option<u32>,
	// Offset east of UTC in seconds, only present together with a time
	offset_seconds: Option<i32>,
}

impl PartialDateTime {
	/// Builds a value from its components, checking that present components form a prefix and are in range.
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		year: i32,
		month: Option<u32>,
		day: Option<u32>,
		hour: Option<u32>,
		minute: Option<u32>,
		second: Option<u32>,
		nanos: Option<u32>,
		offset_seconds: Option<i32>,
	) -> Result<Self> {
		let result = Self {
			year,
			month,
			day,
			hour,
			minute,
			second,
			nanos,
			offset_seconds,
		};

		if let Err(reason) = result.check() {
			return_error!(invalid_date_time(&result.to_string(), reason));
		}

		Ok(result)
	}

	fn check(&self) -> std::result::Result<(), &'static str> {
		if !(0..=9999).contains(&self.year) {
			return Err("year must be between 0 and 9999");
		}
		if let Some(month) = self.month {
			if !(1..=12).contains(&month) {
				return Err("month must be between 1 and 12");
			}
		}
		match (self.month, self.day) {
			(None, Some(_)) => return Err("day requires a month"),
			(Some(month), Some(day)) if day < 1 || day > days_in_month(self.year, month) => {
				return Err("day is out of range for the month");
			}
			_ => {}
		}
		match self.hour {
			None => {
				if self.minute.is_some() || self.second.is_some() || self.nanos.is_some() {
					return Err("time components require an hour");
				}
				if self.offset_seconds.is_some() {
					return Err("an offset requires a time");
				}
			}
			Some(hour) => {
				if self.day.is_none() {
					return Err("a time requires a full date");
				}
				check_time_components(hour, self.minute, self.second, self.nanos)?;
			}
		}
		if let Some(offset) = self.offset_seconds {
			if offset.abs() > MAX_OFFSET_SECONDS {
				return Err("offset must be less than 24 hours");
			}
			if offset % 60 != 0 {
				return Err("offset must be a whole number of minutes");
			}
		}
		Ok(())
	}

	pub fn year(year: i32) -> Result<Self> {
		Self::new(year, None, None, None, None, None, None, None)
	}

	pub fn year_month(year: i32, month: u32) -> Result<Self> {
		Self::new(year, Some(month), None, None, None, None, None, None)
	}

	pub fn date(year: i32, month: u32, day: u32) -> Result<Self> {
		Self::new(year, Some(month), Some(day), None, None, None, None, None)
	}

	/// Builds a value with full precision from an absolute timestamp, keeping its offset.
	///
	/// Offsets are kept in whole minutes: the seconds of an offset are dropped and the local time is shifted so
	/// the instant stays the same. Fails when the year is outside `0..=9999`.
	pub fn from_date_time<Tz: TimeZone>(value: &chrono::DateTime<Tz>) -> Result<Self> {
		let offset = value.offset().fix();
		let whole_minutes = FixedOffset::east_opt(offset.local_minus_utc() / 60 * 60).unwrap_or(offset);
		let local = value.with_timezone(&whole_minutes).naive_local();
		Self::from_naive_parts(local, Some(whole_minutes.local_minus_utc()))
	}

	/// Builds a value with full precision from a timestamp without offset. No offset is invented.
	///
	/// Fails when the year is outside `0..=9999`.
	pub fn from_naive_date_time(value: &NaiveDateTime) -> Result<Self> {
		Self::from_naive_parts(*value, None)
	}

	fn from_naive_parts(value: NaiveDateTime, offset_seconds: Option<i32>) -> Result<Self> {
		// Leap seconds are reported by chrono as nanoseconds past one second
		let nanos = value.nanosecond().min(super::NANOS_PER_SECOND - 1);
		Self::new(
			value.year(),
			Some(value.month()),
			Some(value.day()),
			Some(value.hour()),
			Some(value.minute()),
			Some(value.second()),
			Some(nanos),
			offset_seconds,
		)
	}

	pub fn precision(&self) -> DateTimePrecision {
		if self.nanos.is_some() {
			DateTimePrecision::Fraction
		} else if self.second.is_some() {
			DateTimePrecision::Second
		} else if self.minute.is_some() {
			DateTimePrecision::Minute
		} else if self.hour.is_some() {
			DateTimePrecision::Hour
		} else if self.day.is_some() {
			DateTimePrecision::Day
		} else if self.month.is_some() {
			DateTimePrecision::Month
		} else {
			DateTimePrecision::Year
		}
	}

	pub fn get_year(&self) -> i32 {
		self.year
	}

	pub fn get_month(&self) -> Option<u32> {
		self.month
	}

	pub fn get_day(&self) -> Option<u32> {
		self.day
	}

	pub fn get_hour(&self) -> Option<u32> {
		self.hour
	}

	pub fn get_minute(&self) -> Option<u32> {
		self.minute
	}

	pub fn get_second(&self) -> Option<u32> {
		self.second
	}

	pub fn get_nanos(&self) -> Option<u32> {
		self.nanos
	}

	pub fn offset_seconds(&self) -> Option<i32> {
		self.offset_seconds
	}

	/// The local date and time, with absent time components taken as zero.
	///
	/// Returns `None` when the value has less than day precision.
	pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
		let date = NaiveDate::from_ymd_opt(self.year, self.month?, self.day?)?;
		let time = NaiveTime::from_hms_nano_opt(
			self.hour.unwrap_or(0),
			self.minute.unwrap_or(0),
			self.second.unwrap_or(0),
			self.nanos.unwrap_or(0),
		)?;
		Some(date.and_time(time))
	}

	fn components(&self) -> [Option<i64>; 7] {
		[
			Some(self.year as i64),
			self.month.map(i64::from),
			self.day.map(i64::from),
			self.hour.map(i64::from),
			self.minute.map(i64::from),
			self.second.map(i64::from),
			self.nanos.map(i64::from),
		]
	}
}

impl PartialOrd for PartialDateTime {
	/// Values are ordered only when they share precision and offset.
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		if self.precision() != other.precision() || self.offset_seconds != other.offset_seconds {
			return None;
		}
		self.components().partial_cmp(&other.components())
	}
}

impl Display for PartialDateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:04}", self.year)?;
		if let Some(month) = self.month {
			write!(f, "-{:02}", month)?;
		}
		if let Some(day) = self.day {
			write!(f, "-{:02}", day)?;
		}
		if let Some(hour) = self.hour {
			write!(f, "T{:02}", hour)?;
			write_time_tail(f, self.minute, self.second, self.nanos)?;
		}
		match self.offset_seconds {
			None => Ok(()),
			Some(0) => f.write_str("Z"),
			Some(offset) => {
				let sign = if offset < 0 {
					'-'
				} else {
					'+'
				};
				let minutes = offset.abs() / 60;
				write!(f, "{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
			}
		}
	}
}

impl FromStr for PartialDateTime {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_partial_date_time(s)
	}
}

impl TryFrom<NaiveDateTime> for PartialDateTime {
	type Error = Error;

	fn try_from(value: NaiveDateTime) -> Result<Self> {
		Self::from_naive_date_time(&value)
	}
}

impl<Tz: TimeZone> TryFrom<chrono::DateTime<Tz>> for PartialDateTime {
	type Error = Error;

	fn try_from(value: chrono::DateTime<Tz>) -> Result<Self> {
		Self::from_date_time(&value)
	}
}
