// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::parse_time_parts;
use crate::{Error, error::diagnostic::temporal::invalid_time, value::temporal::PartialTime};

/// Parses a time of day in the format `[T]HH[:MM[:SS[.fffffffff]]]`.
pub fn parse_partial_time(text: &str) -> Result<PartialTime, Error> {
	let body = text.strip_prefix('T').unwrap_or(text);

	let (hour, minute, second, nanos) =
		parse_time_parts(body).map_err(|reason| crate::error!(invalid_time(text, reason)))?;

	PartialTime::new(hour, minute, second, nanos)
}
