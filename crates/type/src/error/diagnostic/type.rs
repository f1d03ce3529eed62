// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn unknown_type_name(name: &str) -> Diagnostic {
	Diagnostic {
		code: "TYPE_001".to_string(),
		message: format!("Unknown type name '{}'", name),
		label: None,
		help: Some("Known types are Boolean, String, Integer, Decimal, DateTime and Time".to_string()),
		notes: vec!["Type names are case sensitive".to_string()],
		cause: None,
	}
}
