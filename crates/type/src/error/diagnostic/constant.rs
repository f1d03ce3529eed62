// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// A host value of this runtime type has no counterpart in the canonical value domain
pub fn unsupported_value_kind(type_name: &str, value: &str) -> Diagnostic {
	Diagnostic {
		code: "CONST_001".to_string(),
		message: format!(
			"Don't know how to convert an instance of type {} (with value '{}') to a constant",
			type_name, value
		),
		label: Some(format!("unsupported value kind {}", type_name)),
		help: Some(
			"Convert the value to a boolean, text, URI, character, 16/32/64-bit integer, float, decimal or date/time first"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

/// The host passed an absent value where a constant was expected
pub fn invalid_input(type_name: &str) -> Diagnostic {
	Diagnostic {
		code: "CONST_002".to_string(),
		message: format!("Cannot create a constant from an absent value of type {}", type_name),
		label: Some("absent value".to_string()),
		help: Some("Represent absence as an empty collection instead of a constant".to_string()),
		notes: vec!["Constants always wrap exactly one value".to_string()],
		cause: None,
	}
}
