// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{de, ser};

pub mod diagnostic;
mod r#macro;
pub mod render;

use diagnostic::{Diagnostic, serialization};
use render::DefaultRenderer;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn new(diagnostic: Diagnostic) -> Self {
		Self(Box::new(diagnostic))
	}

	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Self::new(diagnostic)
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl std::error::Error for Error {}

impl de::Error for Error {
	fn custom<T: Display>(msg: T) -> Self {
		crate::error!(serialization::serde_deserialize_error(msg.to_string()))
	}
}

impl ser::Error for Error {
	fn custom<T: Display>(msg: T) -> Self {
		crate::error!(serialization::serde_serialize_error(msg.to_string()))
	}
}
