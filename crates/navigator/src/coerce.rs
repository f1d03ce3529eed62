// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use pathval_type::{
	Decimal, PartialDateTime, Result, Value,
	error::diagnostic::{
		constant::{invalid_input, unsupported_value_kind},
		number::{decimal_not_representable, integer_overflow},
	},
	return_error,
};
use tracing::instrument;

use crate::NativeValue;

/// Admits a host value into the canonical value domain.
///
/// | host | canonical |
/// |------|-----------|
/// | `bool` | `Boolean` |
/// | `String`, `Uri` (original text), `char` | `Utf8` |
/// | `i16`, `i32`, `i64`, `u16`, `u32`, `u64` | `Integer` |
/// | `f32`, `f64`, `Decimal` | `Decimal` |
/// | timestamps (years `0..=9999`), `PartialDateTime` | `DateTime` |
/// | `PartialTime` | `Time` |
///
/// Floats are rounded to the decimal digits they reliably carry (7 for `f32`, 15 for `f64`); any artifact
/// left after that is kept. A `u64` above `i64::MAX`, NaN and infinities are rejected rather than truncated.
/// Every other kind, and an undefined value, fails.
#[instrument(name = "navigator::coerce::to_path_value", level = "trace", skip_all, fields(native_type = value.type_name()))]
pub fn to_path_value(value: &NativeValue) -> Result<Value> {
	let result = match value {
		NativeValue::Boolean(v) => Value::Boolean(*v),
		NativeValue::Utf8(v) => Value::Utf8(v.clone()),
		NativeValue::Uri(v) => Value::Utf8(v.original_string().to_string()),
		NativeValue::Char(v) => Value::Utf8(v.to_string()),

		NativeValue::Int2(v) => Value::Integer(i64::from(*v)),
		NativeValue::Int4(v) => Value::Integer(i64::from(*v)),
		NativeValue::Int8(v) => Value::Integer(*v),
		NativeValue::Uint2(v) => Value::Integer(i64::from(*v)),
		NativeValue::Uint4(v) => Value::Integer(i64::from(*v)),
		NativeValue::Uint8(v) => match i64::try_from(*v) {
			Ok(v) => Value::Integer(v),
			Err(_) => return_error!(integer_overflow(value.type_name(), &value.to_string())),
		},

		NativeValue::Float4(v) => match Decimal::from_f32(*v) {
			Some(d) => Value::Decimal(d),
			None => return_error!(decimal_not_representable(value.type_name(), &value.to_string())),
		},
		NativeValue::Float8(v) => match Decimal::from_f64(*v) {
			Some(d) => Value::Decimal(d),
			None => return_error!(decimal_not_representable(value.type_name(), &value.to_string())),
		},
		NativeValue::Decimal(v) => Value::Decimal(v.clone()),

		NativeValue::DateTimeOffset(v) => Value::DateTime(PartialDateTime::from_date_time(v)?),
		NativeValue::DateTimeUtc(v) => Value::DateTime(PartialDateTime::from_date_time(v)?),
		NativeValue::DateTime(v) => Value::DateTime(PartialDateTime::from_naive_date_time(v)?),
		NativeValue::PartialDateTime(v) => Value::DateTime(*v),
		NativeValue::PartialTime(v) => Value::Time(*v),

		NativeValue::Undefined => return_error!(invalid_input(value.type_name())),

		NativeValue::Int1(_)
		| NativeValue::Int16(_)
		| NativeValue::Uint1(_)
		| NativeValue::Uint16(_)
		| NativeValue::Blob(_) => return_error!(unsupported_value_kind(value.type_name(), &value.to_string())),
	};

	Ok(result)
}

#[cfg(test)]
mod tests {
	use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
	use pathval_type::{DateTimePrecision, PartialTime};

	use super::*;
	use crate::Uri;

	fn coerce(value: impl Into<NativeValue>) -> Result<Value> {
		to_path_value(&value.into())
	}

	#[test]
	fn test_boolean() {
		assert_eq!(coerce(true).unwrap(), Value::Boolean(true));
		assert_eq!(coerce(false).unwrap(), Value::Boolean(false));
	}

	#[test]
	fn test_text() {
		assert_eq!(coerce("abc").unwrap(), Value::utf8("abc"));
		assert_eq!(coerce(String::new()).unwrap(), Value::utf8(""));
	}

	#[test]
	fn test_uri_uses_original_text() {
		let uri = Uri::new("http://example.org/fhir/../Patient");
		assert_eq!(coerce(uri).unwrap(), Value::utf8("http://example.org/fhir/../Patient"));
	}

	#[test]
	fn test_char_becomes_one_character_string() {
		assert_eq!(coerce('a').unwrap(), Value::utf8("a"));
		assert_eq!(coerce('é').unwrap(), Value::utf8("é"));
	}

	#[test]
	fn test_integers_widen() {
		assert_eq!(coerce(7i16).unwrap(), Value::Integer(7));
		assert_eq!(coerce(i16::MIN).unwrap(), Value::Integer(i16::MIN as i64));
		assert_eq!(coerce(-3i32).unwrap(), Value::Integer(-3));
		assert_eq!(coerce(i64::MAX).unwrap(), Value::Integer(i64::MAX));
		assert_eq!(coerce(u16::MAX).unwrap(), Value::Integer(65_535));
		assert_eq!(coerce(u32::MAX).unwrap(), Value::Integer(4_294_967_295));
		assert_eq!(coerce(i64::MAX as u64).unwrap(), Value::Integer(i64::MAX));
	}

	#[test]
	fn test_u64_above_i64_max_overflows() {
		let err = coerce(u64::MAX).unwrap_err();
		assert_eq!(err.code(), "NUMBER_001");
		assert!(err.message.contains("18446744073709551615"));
	}

	#[test]
	fn test_floats_become_decimals() {
		assert_eq!(coerce(1.5f32).unwrap(), Value::Decimal("1.5".parse().unwrap()));
		assert_eq!(coerce(0.1f64).unwrap(), Value::Decimal("0.1".parse().unwrap()));
		assert_eq!(coerce(-42.0f64).unwrap(), Value::Decimal(Decimal::from(-42)));
	}

	#[test]
	fn test_float_not_finite() {
		assert_eq!(coerce(f64::NAN).unwrap_err().code(), "NUMBER_002");
		assert_eq!(coerce(f32::INFINITY).unwrap_err().code(), "NUMBER_002");
	}

	#[test]
	fn test_decimal_passes_through() {
		let d: Decimal = "12.340".parse().unwrap();
		let Value::Decimal(result) = coerce(d.clone()).unwrap() else {
			panic!("expected a decimal");
		};
		assert_eq!(result.to_string(), "12.340");
	}

	#[test]
	fn test_timestamps() {
		let offset = FixedOffset::east_opt(3600).unwrap();
		let with_offset = offset.with_ymd_and_hms(2015, 2, 7, 13, 28, 17).unwrap();
		let Value::DateTime(dt) = coerce(with_offset).unwrap() else {
			panic!("expected a date time");
		};
		assert_eq!(dt.precision(), DateTimePrecision::Fraction);
		assert_eq!(dt.offset_seconds(), Some(3600));

		let utc = Utc.with_ymd_and_hms(2015, 2, 7, 12, 28, 17).unwrap();
		let Value::DateTime(dt) = coerce(utc).unwrap() else {
			panic!("expected a date time");
		};
		assert_eq!(dt.offset_seconds(), Some(0));

		let naive = NaiveDate::from_ymd_opt(2015, 2, 7).unwrap().and_hms_opt(13, 28, 17).unwrap();
		let Value::DateTime(dt) = coerce(naive).unwrap() else {
			panic!("expected a date time");
		};
		assert_eq!(dt.offset_seconds(), None);
		assert_eq!(dt.get_second(), Some(17));
	}

	#[test]
	fn test_timestamp_outside_year_range_fails() {
		let naive = NaiveDate::from_ymd_opt(12345, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
		let err = coerce(naive).unwrap_err();
		assert_eq!(err.code(), "TEMPORAL_001");
		assert!(err.message.contains("12345-01-01"));
	}

	#[test]
	fn test_timestamp_offset_in_whole_minutes() {
		let offset = FixedOffset::east_opt(3630).unwrap();
		let timestamp = offset.with_ymd_and_hms(2015, 2, 7, 13, 28, 17).unwrap();
		let Value::DateTime(dt) = coerce(timestamp).unwrap() else {
			panic!("expected a date time");
		};
		assert_eq!(dt.offset_seconds(), Some(3600));
		assert_eq!(dt.to_string().parse::<PartialDateTime>().unwrap(), dt);
	}

	#[test]
	fn test_partial_values_are_idempotent() {
		let dt = PartialDateTime::year_month(2015, 2).unwrap();
		assert_eq!(coerce(dt).unwrap(), Value::DateTime(dt));

		let time = PartialTime::from_hm(10, 30).unwrap();
		assert_eq!(coerce(time).unwrap(), Value::Time(time));
	}

	#[test]
	fn test_canonical_values_coerce_to_themselves() {
		let values = [
			Value::bool(true),
			Value::utf8("x"),
			Value::integer(i64::MIN),
			Value::decimal(Decimal::from(3)),
			Value::datetime(PartialDateTime::year(2001).unwrap()),
			Value::time(PartialTime::from_h(1).unwrap()),
		];
		for value in values {
			assert_eq!(coerce(value.clone()).unwrap(), value);
		}
	}

	#[test]
	fn test_unsupported_kinds() {
		for (native, type_name) in [
			(NativeValue::from(vec![1u8, 2, 3]), "Vec<u8>"),
			(NativeValue::from(1i8), "i8"),
			(NativeValue::from(1u8), "u8"),
			(NativeValue::from(1i128), "i128"),
			(NativeValue::from(1u128), "u128"),
		] {
			let err = to_path_value(&native).unwrap_err();
			assert_eq!(err.code(), "CONST_001");
			assert!(err.message.contains(type_name), "{} should name {}", err.message, type_name);
		}
	}

	#[test]
	fn test_unsupported_kind_renders_value() {
		let err = coerce(vec![0xde_u8, 0xad]).unwrap_err();
		assert!(err.message.contains("'0xdead'"));
	}

	#[test]
	fn test_undefined_is_invalid_input() {
		assert_eq!(coerce(None::<bool>).unwrap_err().code(), "CONST_002");
	}

	#[test]
	fn test_deterministic() {
		assert_eq!(coerce(2.75f64).unwrap(), coerce(2.75f64).unwrap());
		assert_eq!(coerce(9u32).unwrap(), coerce(9u32).unwrap());
	}
}
