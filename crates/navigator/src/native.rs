// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use bigdecimal::BigDecimal;
use chrono::{FixedOffset, NaiveDateTime, Utc};
use pathval_type::{Decimal, PartialDateTime, PartialTime, Value};

/// A URI, kept exactly as it was written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
	pub fn new(text: impl Into<String>) -> Self {
		Self(text.into())
	}

	/// The text the URI was created from, without any re-serialization.
	pub fn original_string(&self) -> &str {
		&self.0
	}
}

impl Display for Uri {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// A value as the host hands it over, before it enters the canonical value domain.
///
/// Not every kind can be admitted, see [`to_path_value`](crate::to_path_value).
#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
	/// The host had no value
	Undefined,
	Boolean(bool),
	Utf8(String),
	Uri(Uri),
	Char(char),
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Int16(i128),
	Uint1(u8),
	Uint2(u16),
	Uint4(u32),
	Uint8(u64),
	Uint16(u128),
	Float4(f32),
	Float8(f64),
	Decimal(Decimal),
	/// A timestamp with its UTC offset
	DateTimeOffset(chrono::DateTime<FixedOffset>),
	DateTimeUtc(chrono::DateTime<Utc>),
	/// A timestamp without any offset
	DateTime(NaiveDateTime),
	PartialDateTime(PartialDateTime),
	PartialTime(PartialTime),
	Blob(Vec<u8>),
}

impl NativeValue {
	/// The name of the host type, as reported in diagnostics.
	pub fn type_name(&self) -> &'static str {
		match self {
			NativeValue::Undefined => "Undefined",
			NativeValue::Boolean(_) => "bool",
			NativeValue::Utf8(_) => "String",
			NativeValue::Uri(_) => "Uri",
			NativeValue::Char(_) => "char",
			NativeValue::Int1(_) => "i8",
			NativeValue::Int2(_) => "i16",
			NativeValue::Int4(_) => "i32",
			NativeValue::Int8(_) => "i64",
			NativeValue::Int16(_) => "i128",
			NativeValue::Uint1(_) => "u8",
			NativeValue::Uint2(_) => "u16",
			NativeValue::Uint4(_) => "u32",
			NativeValue::Uint8(_) => "u64",
			NativeValue::Uint16(_) => "u128",
			NativeValue::Float4(_) => "f32",
			NativeValue::Float8(_) => "f64",
			NativeValue::Decimal(_) => "Decimal",
			NativeValue::DateTimeOffset(_) => "DateTime<FixedOffset>",
			NativeValue::DateTimeUtc(_) => "DateTime<Utc>",
			NativeValue::DateTime(_) => "NaiveDateTime",
			NativeValue::PartialDateTime(_) => "PartialDateTime",
			NativeValue::PartialTime(_) => "PartialTime",
			NativeValue::Blob(_) => "Vec<u8>",
		}
	}
}

impl Display for NativeValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			NativeValue::Undefined => f.write_str("undefined"),
			NativeValue::Boolean(v) => Display::fmt(v, f),
			NativeValue::Utf8(v) => Display::fmt(v, f),
			NativeValue::Uri(v) => Display::fmt(v, f),
			NativeValue::Char(v) => Display::fmt(v, f),
			NativeValue::Int1(v) => Display::fmt(v, f),
			NativeValue::Int2(v) => Display::fmt(v, f),
			NativeValue::Int4(v) => Display::fmt(v, f),
			NativeValue::Int8(v) => Display::fmt(v, f),
			NativeValue::Int16(v) => Display::fmt(v, f),
			NativeValue::Uint1(v) => Display::fmt(v, f),
			NativeValue::Uint2(v) => Display::fmt(v, f),
			NativeValue::Uint4(v) => Display::fmt(v, f),
			NativeValue::Uint8(v) => Display::fmt(v, f),
			NativeValue::Uint16(v) => Display::fmt(v, f),
			NativeValue::Float4(v) => Display::fmt(v, f),
			NativeValue::Float8(v) => Display::fmt(v, f),
			NativeValue::Decimal(v) => Display::fmt(v, f),
			NativeValue::DateTimeOffset(v) => f.write_str(&v.to_rfc3339()),
			NativeValue::DateTimeUtc(v) => f.write_str(&v.to_rfc3339()),
			NativeValue::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%dT%H:%M:%S%.f")),
			NativeValue::PartialDateTime(v) => Display::fmt(v, f),
			NativeValue::PartialTime(v) => Display::fmt(v, f),
			NativeValue::Blob(bytes) => {
				f.write_str("0x")?;
				for byte in bytes {
					write!(f, "{:02x}", byte)?;
				}
				Ok(())
			}
		}
	}
}

macro_rules! impl_from_native {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for NativeValue {
				fn from(v: $ty) -> Self {
					NativeValue::$variant(v)
				}
			}
		)*
	};
}

impl_from_native!(
	bool => Boolean,
	String => Utf8,
	Uri => Uri,
	char => Char,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
	f32 => Float4,
	f64 => Float8,
	Decimal => Decimal,
	chrono::DateTime<FixedOffset> => DateTimeOffset,
	chrono::DateTime<Utc> => DateTimeUtc,
	NaiveDateTime => DateTime,
	PartialDateTime => PartialDateTime,
	PartialTime => PartialTime,
	Vec<u8> => Blob,
);

impl From<&str> for NativeValue {
	fn from(v: &str) -> Self {
		NativeValue::Utf8(v.to_string())
	}
}

impl From<BigDecimal> for NativeValue {
	fn from(v: BigDecimal) -> Self {
		NativeValue::Decimal(Decimal::new(v))
	}
}

impl<T: Into<NativeValue>> From<Option<T>> for NativeValue {
	fn from(v: Option<T>) -> Self {
		match v {
			Some(v) => v.into(),
			None => NativeValue::Undefined,
		}
	}
}

/// Lifts an already canonical value back to the boundary, so it coerces to itself.
impl From<Value> for NativeValue {
	fn from(v: Value) -> Self {
		match v {
			Value::Boolean(v) => NativeValue::Boolean(v),
			Value::Utf8(v) => NativeValue::Utf8(v),
			Value::Integer(v) => NativeValue::Int8(v),
			Value::Decimal(v) => NativeValue::Decimal(v),
			Value::DateTime(v) => NativeValue::PartialDateTime(v),
			Value::Time(v) => NativeValue::PartialTime(v),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_uri_keeps_original_text() {
		let uri = Uri::new("HTTP://Example.org/a/../b");
		assert_eq!(uri.original_string(), "HTTP://Example.org/a/../b");
	}

	#[test]
	fn test_type_names() {
		assert_eq!(NativeValue::from(true).type_name(), "bool");
		assert_eq!(NativeValue::from(7i16).type_name(), "i16");
		assert_eq!(NativeValue::from(vec![1u8, 2]).type_name(), "Vec<u8>");
		assert_eq!(NativeValue::from(None::<i32>).type_name(), "Undefined");
	}

	#[test]
	fn test_option_some_is_unwrapped() {
		assert_eq!(NativeValue::from(Some(5u32)), NativeValue::Uint4(5));
	}

	#[test]
	fn test_display_blob_as_hex() {
		assert_eq!(NativeValue::from(vec![0x01u8, 0xab]).to_string(), "0x01ab");
	}

	#[test]
	fn test_from_canonical_value() {
		assert_eq!(NativeValue::from(Value::Integer(3)), NativeValue::Int8(3));
		assert_eq!(NativeValue::from(Value::utf8("x")), NativeValue::Utf8("x".to_string()));
	}
}
