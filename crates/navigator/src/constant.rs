// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

use pathval_type::{Result, Type, Value};
use tracing::{debug, instrument};

use crate::{ElementNavigator, NativeValue, render_navigator, to_path_value};

/// The name of every constant node. `@` never occurs in element names of navigated data.
pub const CONSTANT_VALUE_NAME: &str = "@constantvalue@";

/// The location of every constant node, they are not backed by any document.
pub const CONSTANT_VALUE_LOCATION: &str = "(constant value)";

/// A single value lifted into the navigation model as a leaf: no children, no siblings.
///
/// The node is immutable. Equality and hashing only look at the canonical value, the host value it was
/// created from is kept for diagnostics.
#[derive(Clone, Debug)]
pub struct ConstantValue {
	value: Value,
	original: NativeValue,
}

impl ConstantValue {
	#[instrument(name = "navigator::constant::new", level = "trace", skip_all)]
	pub fn new(original: impl Into<NativeValue>) -> Result<Self> {
		let original = original.into();
		let value = to_path_value(&original).inspect_err(|err| {
			debug!(native_type = original.type_name(), code = err.code(), "rejected constant value");
		})?;

		Ok(Self {
			value,
			original,
		})
	}

	/// Wraps a value that is already canonical. This cannot fail.
	pub fn from_value(value: Value) -> Self {
		Self {
			original: NativeValue::from(value.clone()),
			value,
		}
	}

	pub fn value(&self) -> &Value {
		&self.value
	}

	pub fn original(&self) -> &NativeValue {
		&self.original
	}

	pub fn get_type(&self) -> Type {
		self.value.get_type()
	}

	/// Whether `other` is a node holding a value equal to this one.
	pub fn equals(&self, other: Option<&dyn ElementNavigator>) -> bool {
		match other.and_then(|other| other.value()) {
			Some(value) => *value == self.value,
			None => false,
		}
	}
}

impl ElementNavigator for ConstantValue {
	fn name(&self) -> &str {
		CONSTANT_VALUE_NAME
	}

	fn value(&self) -> Option<&Value> {
		Some(&self.value)
	}

	fn type_name(&self) -> Result<&str> {
		Ok(Type::of(&self.value)?.name())
	}

	fn location(&self) -> &str {
		CONSTANT_VALUE_LOCATION
	}

	fn move_to_next(&mut self) -> bool {
		false
	}

	fn move_to_first_child(&mut self) -> bool {
		false
	}

	fn clone_navigator(&self) -> Box<dyn ElementNavigator> {
		Box::new(self.clone())
	}
}

impl Display for ConstantValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		render_navigator(self, f)
	}
}

impl PartialEq for ConstantValue {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl Eq for ConstantValue {}

impl PartialEq<dyn ElementNavigator> for ConstantValue {
	fn eq(&self, other: &dyn ElementNavigator) -> bool {
		self.equals(Some(other))
	}
}

impl Hash for ConstantValue {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

impl TryFrom<NativeValue> for ConstantValue {
	type Error = pathval_type::Error;

	fn try_from(value: NativeValue) -> Result<Self> {
		Self::new(value)
	}
}

impl From<Value> for ConstantValue {
	fn from(value: Value) -> Self {
		Self::from_value(value)
	}
}
