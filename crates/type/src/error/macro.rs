// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a [`Diagnostic`](crate::Diagnostic) into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error::new($diagnostic)
	};
}

/// Returns early with an [`Error`](crate::Error) built from the given diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use crate::{Result, error::diagnostic::constant::invalid_input};

	fn fails() -> Result<()> {
		return_error!(invalid_input("Undefined"));
	}

	#[test]
	fn test_return_error_exits_early() {
		let err = fails().unwrap_err();
		assert_eq!(err.code(), "CONST_002");
	}
}
