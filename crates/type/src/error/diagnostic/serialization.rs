// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn serde_serialize_error(reason: String) -> Diagnostic {
	Diagnostic {
		code: "SERDE_001".to_string(),
		message: format!("Serialization error: {}", reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn serde_deserialize_error(reason: String) -> Diagnostic {
	Diagnostic {
		code: "SERDE_002".to_string(),
		message: format!("Deserialization error: {}", reason),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
