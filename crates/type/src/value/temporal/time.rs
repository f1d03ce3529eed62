// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	str::FromStr,
};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::{NANOS_PER_SECOND, check_time_components, parse::parse_partial_time, write_time_tail};
use crate::{Error, Result, error::diagnostic::temporal::invalid_time, return_error};

/// The least significant component present in a [`PartialTime`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimePrecision {
	Hour,
	Minute,
	Second,
	Fraction,
}

/// A time of day with possibly absent lower precision components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialTime {
	hour: u32,
	minute: Option<u32>,
	second: Option<u32>,
	nanos: Option<u32>,
}

impl PartialTime {
	pub fn new(hour: u32, minute: Option<u32>, second: Option<u32>, nanos: Option<u32>) -> Result<Self> {
		let result = Self {
			hour,
			minute,
			second,
			nanos,
		};

		if let Err(reason) = check_time_components(hour, minute, second, nanos) {
			return_error!(invalid_time(&result.to_string(), reason));
		}

		Ok(result)
	}

	pub fn from_h(hour: u32) -> Result<Self> {
		Self::new(hour, None, None, None)
	}

	pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
		Self::new(hour, Some(minute), None, None)
	}

	pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
		Self::new(hour, Some(minute), Some(second), None)
	}

	pub fn from_hms_nano(hour: u32, minute: u32, second: u32, nanos: u32) -> Result<Self> {
		Self::new(hour, Some(minute), Some(second), Some(nanos))
	}

	/// Builds a value with full precision.
	pub fn from_naive_time(time: NaiveTime) -> Self {
		Self {
			hour: time.hour(),
			minute: Some(time.minute()),
			second: Some(time.second()),
			nanos: Some(time.nanosecond().min(NANOS_PER_SECOND - 1)),
		}
	}

	pub fn precision(&self) -> TimePrecision {
		if self.nanos.is_some() {
			TimePrecision::Fraction
		} else if self.second.is_some() {
			TimePrecision::Second
		} else if self.minute.is_some() {
			TimePrecision::Minute
		} else {
			TimePrecision::Hour
		}
	}

	pub fn hour(&self) -> u32 {
		self.hour
	}

	pub fn minute(&self) -> Option<u32> {
		self.minute
	}

	pub fn second(&self) -> Option<u32> {
		self.second
	}

	pub fn nanos(&self) -> Option<u32> {
		self.nanos
	}

	/// The time of day with absent components taken as zero.
	pub fn to_naive_time(&self) -> Option<NaiveTime> {
		NaiveTime::from_hms_nano_opt(
			self.hour,
			self.minute.unwrap_or(0),
			self.second.unwrap_or(0),
			self.nanos.unwrap_or(0),
		)
	}
}

impl PartialOrd for PartialTime {
	/// Values are ordered only when they share precision.
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		if self.precision() != other.precision() {
			return None;
		}
		(self.hour, self.minute, self.second, self.nanos).partial_cmp(&(
			other.hour,
			other.minute,
			other.second,
			other.nanos,
		))
	}
}

impl Display for PartialTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02}", self.hour)?;
		write_time_tail(f, self.minute, self.second, self.nanos)
	}
}

impl FromStr for PartialTime {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_partial_time(s)
	}
}

impl From<NaiveTime> for PartialTime {
	fn from(time: NaiveTime) -> Self {
		Self::from_naive_time(time)
	}
}
