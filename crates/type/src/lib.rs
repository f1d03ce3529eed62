// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! The canonical value domain of path expressions.
//!
//! Everything an expression evaluates over is one of the six [`Value`] kinds defined here. Date and time
//! values may carry less than full precision, see [`PartialDateTime`] and [`PartialTime`].

pub mod error;
pub mod value;

pub use error::{Error, diagnostic::Diagnostic};
pub use value::{
	Decimal, Type, Value,
	temporal::{DateTimePrecision, PartialDateTime, PartialTime, TimePrecision},
};

pub type Result<T> = std::result::Result<T, Error>;
