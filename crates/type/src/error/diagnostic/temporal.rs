// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn invalid_date_time(text: &str, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "TEMPORAL_001".to_string(),
		message: format!("Invalid date/time '{}': {}", text, reason),
		label: Some(reason.to_string()),
		help: Some(
			"Use the format YYYY[-MM[-DD[THH[:MM[:SS[.fff]]]]]] with an optional Z or +HH:MM offset"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_time(text: &str, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "TEMPORAL_002".to_string(),
		message: format!("Invalid time '{}': {}", text, reason),
		label: Some(reason.to_string()),
		help: Some("Use the format HH[:MM[:SS[.fff]]]".to_string()),
		notes: vec![],
		cause: None,
	}
}
