// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal as BigDecimalInner;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::Error;

mod parse;

pub use parse::parse_decimal;

/// Significant decimal digits an `f32` reliably carries.
pub const F32_SIGNIFICANT_DIGITS: u64 = 7;
/// Significant decimal digits an `f64` reliably carries.
pub const F64_SIGNIFICANT_DIGITS: u64 = 15;

/// An arbitrary-precision decimal.
///
/// Equality, ordering and hashing are by numeric value, so `1.5` and `1.50` are equal. The scale is kept
/// for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Decimal(BigDecimalInner);

impl Decimal {
	pub fn new(value: BigDecimalInner) -> Self {
		Self(value)
	}

	/// Converts a binary float, rounding to the digits an `f32` can hold.
	///
	/// Returns `None` for NaN and infinities.
	pub fn from_f32(value: f32) -> Option<Self> {
		let exact = BigDecimalInner::from_f32(value)?;
		Some(Self(exact.with_prec(F32_SIGNIFICANT_DIGITS).normalized()))
	}

	/// Converts a binary float, rounding to the digits an `f64` can hold.
	///
	/// Returns `None` for NaN and infinities.
	pub fn from_f64(value: f64) -> Option<Self> {
		let exact = BigDecimalInner::from_f64(value)?;
		Some(Self(exact.with_prec(F64_SIGNIFICANT_DIGITS).normalized()))
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0.to_plain_string())
	}
}

impl FromStr for Decimal {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_decimal(s)
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Self(BigDecimalInner::from(value))
	}
}

impl From<BigDecimalInner> for Decimal {
	fn from(value: BigDecimalInner) -> Self {
		Self(value)
	}
}
