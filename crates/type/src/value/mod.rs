// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

pub mod decimal;
pub mod temporal;
mod r#type;

pub use decimal::Decimal;
pub use r#type::Type;
use temporal::{PartialDateTime, PartialTime};

/// A canonical value of the path expression language.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// A boolean: true or false.
	Boolean(bool),
	/// A UTF-8 encoded text.
	Utf8(String),
	/// An 8-byte signed integer
	Integer(i64),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
	/// A date and time value, possibly with missing lower precision components
	DateTime(PartialDateTime),
	/// A time of day, possibly with missing lower precision components
	Time(PartialTime),
}

impl Value {
	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn integer(v: impl Into<i64>) -> Self {
		Value::Integer(v.into())
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}

	pub fn datetime(v: impl Into<PartialDateTime>) -> Self {
		Value::DateTime(v.into())
	}

	pub fn time(v: impl Into<PartialTime>) -> Self {
		Value::Time(v.into())
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Boolean(_) => Type::Boolean,
			Value::Utf8(_) => Type::String,
			Value::Integer(_) => Type::Integer,
			Value::Decimal(_) => Type::Decimal,
			Value::DateTime(_) => Type::DateTime,
			Value::Time(_) => Type::Time,
		}
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Boolean(l), Value::Boolean(r)) => l.partial_cmp(r),
			(Value::Utf8(l), Value::Utf8(r)) => l.partial_cmp(r),
			(Value::Integer(l), Value::Integer(r)) => l.partial_cmp(r),
			(Value::Decimal(l), Value::Decimal(r)) => l.partial_cmp(r),
			(Value::Integer(l), Value::Decimal(r)) => Decimal::from(*l).partial_cmp(r),
			(Value::Decimal(l), Value::Integer(r)) => l.partial_cmp(&Decimal::from(*r)),
			(Value::DateTime(l), Value::DateTime(r)) => l.partial_cmp(r),
			(Value::Time(l), Value::Time(r)) => l.partial_cmp(r),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Integer(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::DateTime(value) => Display::fmt(value, f),
			Value::Time(value) => Display::fmt(value, f),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Integer(v)
	}
}

impl From<Decimal> for Value {
	fn from(v: Decimal) -> Self {
		Value::Decimal(v)
	}
}

impl From<PartialDateTime> for Value {
	fn from(v: PartialDateTime) -> Self {
		Value::DateTime(v)
	}
}

impl From<PartialTime> for Value {
	fn from(v: PartialTime) -> Self {
		Value::Time(v)
	}
}
