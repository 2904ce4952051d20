/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The AS3 `Error` class hierarchy: the user-visible counterpart to
//! [`crate::error::ErrorKind`], carrying the fields AS3 code actually reads
//! (`errorID`, `name`, `message`, `getStackTrace()`).

use std::fmt::{self, Display, Formatter};
use std::sync::OnceLock;

use crate::error::ErrorKind;

/// Which built-in subclass an error instance belongs to. `name()` is what
/// `Error.prototype.toString()` reports; `Error` itself (the base class)
/// has no dedicated variant distinct from `ErrorKind::Internal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
	Error,
	EvalError,
	RangeError,
	ReferenceError,
	SecurityError,
	SyntaxError,
	TypeError,
	UriError,
}

impl ErrorClass {
	pub fn name(self) -> &'static str {
		match self {
			ErrorClass::Error => "Error",
			ErrorClass::EvalError => "EvalError",
			ErrorClass::RangeError => "RangeError",
			ErrorClass::ReferenceError => "ReferenceError",
			ErrorClass::SecurityError => "SecurityError",
			ErrorClass::SyntaxError => "SyntaxError",
			ErrorClass::TypeError => "TypeError",
			ErrorClass::UriError => "URIError",
		}
	}
}

impl From<ErrorKind> for ErrorClass {
	fn from(kind: ErrorKind) -> ErrorClass {
		match kind {
			ErrorKind::Type => ErrorClass::TypeError,
			ErrorKind::Range => ErrorClass::RangeError,
			ErrorKind::Reference => ErrorClass::ReferenceError,
			ErrorKind::Syntax => ErrorClass::SyntaxError,
			ErrorKind::Eval => ErrorClass::EvalError,
			ErrorKind::Uri => ErrorClass::UriError,
			ErrorKind::Security => ErrorClass::SecurityError,
			ErrorKind::Internal => ErrorClass::Error,
		}
	}
}

/// An instance of the `Error` class or one of its built-in subclasses.
/// `stack` is populated lazily: constructing an `As3Error` is cheap, the
/// (comparatively expensive) trace text is only built the first time
/// `getStackTrace()` is called.
#[derive(Clone, Debug)]
pub struct As3Error {
	class: ErrorClass,
	message: String,
	error_id: i32,
	stack: OnceLock<String>,
}

impl As3Error {
	pub fn new(class: ErrorClass, message: impl Into<String>, error_id: i32) -> As3Error {
		As3Error { class, message: message.into(), error_id, stack: OnceLock::new() }
	}

	pub fn name(&self) -> &'static str {
		self.class.name()
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn error_id(&self) -> i32 {
		self.error_id
	}

	pub fn class(&self) -> ErrorClass {
		self.class
	}

	/// Lazily captures a stack trace the first time it's asked for, then
	/// returns the same text on every subsequent call — the trace reflects
	/// the call stack at construction time, not at first access, so
	/// capture is deferred but the value itself is not recomputed.
	pub fn get_stack_trace(&self, frames: impl FnOnce() -> Vec<String>) -> &str {
		self.stack.get_or_init(|| {
			let frames = frames();
			if frames.is_empty() {
				format!("{}: {}", self.name(), self.message)
			} else {
				format!("{}: {}\n\tat {}", self.name(), self.message, frames.join("\n\tat "))
			}
		})
	}
}

impl Display for As3Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.message.is_empty() {
			f.write_str(self.name())
		} else {
			write!(f, "{}: {}", self.name(), self.message)
		}
	}
}

impl std::error::Error for As3Error {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_matches_as3_tostring() {
		let err = As3Error::new(ErrorClass::RangeError, "index out of bounds", 1125);
		assert_eq!(err.to_string(), "RangeError: index out of bounds");
	}

	#[test]
	fn stack_trace_is_captured_once() {
		let err = As3Error::new(ErrorClass::TypeError, "null receiver", 1009);
		let mut calls = 0;
		{
			let mut capture = || {
				calls += 1;
				vec!["a()".to_string(), "b()".to_string()]
			};
			err.get_stack_trace(&mut capture);
			err.get_stack_trace(&mut capture);
		}
		assert_eq!(calls, 1);
	}

	#[test]
	fn error_kind_maps_to_matching_class() {
		assert_eq!(ErrorClass::from(ErrorKind::Type), ErrorClass::TypeError);
		assert_eq!(ErrorClass::from(ErrorKind::Internal), ErrorClass::Error);
	}
}
