// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	collections::hash_map::DefaultHasher,
	fmt::{Debug, Formatter},
	hash::{Hash, Hasher},
};

use pathval_type::{Result, Value};

/// The capabilities every node of the navigated data exposes.
///
/// A navigator is a cursor: `move_to_next` and `move_to_first_child` reposition it and report whether a
/// node was there to move to. Use [`ElementNavigator::clone_navigator`] to keep the current position.
pub trait ElementNavigator: Debug + Send + Sync {
	/// The name of the current node.
	fn name(&self) -> &str;

	/// The primitive value of the current node, if it has one.
	fn value(&self) -> Option<&Value>;

	/// The name of the type of the current node.
	fn type_name(&self) -> Result<&str>;

	/// A human readable description of where the current node is.
	fn location(&self) -> &str;

	fn move_to_next(&mut self) -> bool;

	fn move_to_first_child(&mut self) -> bool;

	fn clone_navigator(&self) -> Box<dyn ElementNavigator>;
}

/// Renders a node the same way for every navigator: its value, or its name when it has none.
pub fn render_navigator(navigator: &dyn ElementNavigator, f: &mut Formatter<'_>) -> std::fmt::Result {
	match navigator.value() {
		Some(value) => std::fmt::Display::fmt(value, f),
		None => write!(f, "{{{}}}", navigator.name()),
	}
}

/// Hashes the value of a node. Nodes without a value hash to zero.
pub fn navigator_hash(navigator: &dyn ElementNavigator) -> u64 {
	match navigator.value() {
		Some(value) => {
			let mut hasher = DefaultHasher::new();
			value.hash(&mut hasher);
			hasher.finish()
		}
		None => 0,
	}
}
