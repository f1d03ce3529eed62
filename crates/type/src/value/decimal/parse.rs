// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, str::FromStr};

use bigdecimal::BigDecimal as BigDecimalInner;

use crate::{Error, error::diagnostic::number::invalid_decimal_format, return_error, value::decimal::Decimal};

pub fn parse_decimal(text: &str) -> Result<Decimal, Error> {
	// Fast path: check if we need any string processing
	let needs_trimming = text.as_bytes().first().is_some_and(|b| b.is_ascii_whitespace())
		|| text.as_bytes().last().is_some_and(|b| b.is_ascii_whitespace());
	let has_underscores = text.as_bytes().contains(&b'_');

	let value = match (needs_trimming, has_underscores) {
		(false, false) => Cow::Borrowed(text),
		(true, false) => Cow::Borrowed(text.trim()),
		(false, true) => Cow::Owned(text.replace('_', "")),
		(true, true) => Cow::Owned(text.trim().replace('_', "")),
	};

	if value.is_empty() {
		return_error!(invalid_decimal_format(text));
	}

	let big_decimal = BigDecimalInner::from_str(&value).map_err(|_| crate::error!(invalid_decimal_format(text)))?;

	Ok(Decimal::new(big_decimal))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_decimal_integer() {
		let decimal = parse_decimal("123").unwrap();
		assert_eq!(decimal.to_string(), "123");
	}

	#[test]
	fn test_parse_decimal_with_fractional() {
		let decimal = parse_decimal("123.45").unwrap();
		assert_eq!(decimal.to_string(), "123.45");
	}

	#[test]
	fn test_parse_decimal_with_underscores() {
		let decimal = parse_decimal("1_234.56").unwrap();
		assert_eq!(decimal.to_string(), "1234.56");
	}

	#[test]
	fn test_parse_decimal_trims_whitespace() {
		let decimal = parse_decimal("  -0.5 ").unwrap();
		assert_eq!(decimal.to_string(), "-0.5");
	}

	#[test]
	fn test_parse_decimal_empty() {
		assert_eq!(parse_decimal("").unwrap_err().code(), "NUMBER_003");
	}

	#[test]
	fn test_parse_decimal_invalid() {
		assert!(parse_decimal("not_a_number").is_err());
	}

	#[test]
	fn test_parse_decimal_scientific_notation() {
		let decimal = parse_decimal("1.23e2").unwrap();
		assert_eq!(decimal.to_string(), "123");
	}
}
