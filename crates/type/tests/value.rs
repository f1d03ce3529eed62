// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use pathval_type::{DateTimePrecision, Decimal, PartialDateTime, PartialTime, TimePrecision, Type, Value};

#[test]
fn test_every_value_reports_a_registered_type() {
	let values = [
		Value::bool(true),
		Value::utf8("text"),
		Value::integer(-1),
		Value::decimal("3.14".parse::<Decimal>().unwrap()),
		Value::datetime("2015-02-07T13:28".parse::<PartialDateTime>().unwrap()),
		Value::time("T08".parse::<PartialTime>().unwrap()),
	];

	let names: Vec<&str> = values.iter().map(|v| Type::of(v).unwrap().name()).collect();
	assert_eq!(names, ["Boolean", "String", "Integer", "Decimal", "DateTime", "Time"]);
}

#[test]
fn test_partial_precision_from_text() {
	let dt: PartialDateTime = "2015-02-07T13".parse().unwrap();
	assert_eq!(dt.precision(), DateTimePrecision::Hour);
	assert_eq!(dt.get_minute(), None);

	let time: PartialTime = "13:28:17.5".parse().unwrap();
	assert_eq!(time.precision(), TimePrecision::Fraction);
	assert_eq!(time.to_string(), "13:28:17.500");
}

#[test]
fn test_equal_values_hash_alike() {
	use std::collections::HashSet;

	let mut set = HashSet::new();
	set.insert(Value::decimal("1.5".parse::<Decimal>().unwrap()));
	set.insert(Value::decimal("1.50".parse::<Decimal>().unwrap()));
	set.insert(Value::datetime(PartialDateTime::year(2015).unwrap()));
	set.insert(Value::datetime(PartialDateTime::year_month(2015, 1).unwrap()));
	assert_eq!(set.len(), 3);
}

#[test]
fn test_error_renders_diagnostic() {
	let err = "2015-13".parse::<PartialDateTime>().unwrap_err();
	let rendered = err.to_string();
	assert!(rendered.starts_with("error[TEMPORAL_001]: Invalid date/time '2015-13'"));
	assert!(rendered.contains("help: "));
}
