// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Navigation over the data an expression is evaluated against.
//!
//! Evaluators walk nodes through [`ElementNavigator`] only. Literals written in an expression, or handed in
//! by the host, become [`ConstantValue`] nodes: childless leaves wrapping one canonical value.

mod coerce;
mod constant;
mod native;
mod navigator;

pub use coerce::to_path_value;
pub use constant::{CONSTANT_VALUE_LOCATION, CONSTANT_VALUE_NAME, ConstantValue};
pub use native::{NativeValue, Uri};
pub use navigator::{ElementNavigator, navigator_hash, render_navigator};
pub use pathval_type::{Error, Result, Type, Value};
