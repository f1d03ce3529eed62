// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, Value, error::diagnostic::r#type::unknown_type_name, return_error};

/// The canonical types of the path expression language.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A UTF-8 encoded text.
	String,
	/// An 8-byte signed integer
	Integer,
	/// An arbitrary-precision decimal
	Decimal,
	/// A date and time with possibly missing lower precision components
	DateTime,
	/// A time of day with possibly missing lower precision components
	Time,
}

impl Type {
	pub const ALL: [Type; 6] = [Type::Boolean, Type::String, Type::Integer, Type::Decimal, Type::DateTime, Type::Time];

	/// The canonical name of the type, as used in type tests of expressions.
	pub fn name(&self) -> &'static str {
		match self {
			Type::Boolean => "Boolean",
			Type::String => "String",
			Type::Integer => "Integer",
			Type::Decimal => "Decimal",
			Type::DateTime => "DateTime",
			Type::Time => "Time",
		}
	}

	/// Derives the canonical type of an already coerced value.
	pub fn of(value: &Value) -> Result<Type> {
		Ok(match value {
			Value::Boolean(_) => Type::Boolean,
			Value::Utf8(_) => Type::String,
			Value::Integer(_) => Type::Integer,
			Value::Decimal(_) => Type::Decimal,
			Value::DateTime(_) => Type::DateTime,
			Value::Time(_) => Type::Time,
		})
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Type {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		for ty in Type::ALL {
			if ty.name() == s {
				return Ok(ty);
			}
		}
		return_error!(unknown_type_name(s))
	}
}
