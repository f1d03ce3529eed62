// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Type, error::diagnostic::Diagnostic};

/// The integer does not fit into the canonical 64-bit signed integer
pub fn integer_overflow(type_name: &str, value: &str) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_001".to_string(),
		message: format!("Value {} of type {} is out of range for {}", value, type_name, Type::Integer),
		label: Some("integer overflow".to_string()),
		help: Some(format!("{} values must lie between {} and {}", Type::Integer, i64::MIN, i64::MAX)),
		notes: vec![],
		cause: None,
	}
}

/// The float has no decimal representation (NaN or infinite)
pub fn decimal_not_representable(type_name: &str, value: &str) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_002".to_string(),
		message: format!("Value {} of type {} cannot be represented as a {}", value, type_name, Type::Decimal),
		label: Some("not a finite number".to_string()),
		help: None,
		notes: vec!["NaN and infinities have no decimal representation".to_string()],
		cause: None,
	}
}

/// The text is not a valid decimal number
pub fn invalid_decimal_format(text: &str) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_003".to_string(),
		message: format!("Cannot parse '{}' as {}", text, Type::Decimal),
		label: Some("invalid decimal format".to_string()),
		help: Some("Use digits with an optional sign and fractional part, e.g. -12.50".to_string()),
		notes: vec![],
		cause: None,
	}
}
