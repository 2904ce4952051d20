/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! `throw` carries an arbitrary AS3 value, not just an `Error` instance.
//! [`Exception`] is the vehicle for that: either a boxed [`crate::as3_error::As3Error`]
//! with its typed fields intact, or an opaque [`crate::value::Any`] for the
//! `throw "plain string"`/`throw 42` cases AS3 also permits.

use std::fmt::{self, Display, Formatter};

use crate::as3_error::As3Error;
use crate::value::Any;

/// A pending `throw`. Distinct from [`crate::error::Error`], which is purely
/// the Rust-level plumbing type used to report internal failures before
/// they've been translated into a thrown AS3 value.
#[derive(Clone, Debug)]
pub enum Exception {
	Error(As3Error),
	Value(Any),
}

impl Exception {
	pub fn from_error(error: As3Error) -> Exception {
		Exception::Error(error)
	}

	pub fn from_value(value: Any) -> Exception {
		Exception::Value(value)
	}

	/// The `Error` subclass if this exception wraps one, for callers that
	/// only care about `errorID`/`getStackTrace` and want to skip the
	/// `Any` indirection.
	pub fn as_error(&self) -> Option<&As3Error> {
		match self {
			Exception::Error(e) => Some(e),
			Exception::Value(_) => None,
		}
	}
}

impl Display for Exception {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Exception::Error(e) => Display::fmt(e, f),
			Exception::Value(v) => {
				if v.is_undefined() {
					f.write_str("undefined")
				} else if v.is_null() {
					f.write_str("null")
				} else {
					write!(f, "{:?}", v.value())
				}
			}
		}
	}
}

impl From<As3Error> for Exception {
	fn from(error: As3Error) -> Exception {
		Exception::Error(error)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::as3_error::ErrorClass;

	#[test]
	fn plain_value_throw_is_not_an_error() {
		let exc = Exception::from_value(Any::undefined());
		assert!(exc.as_error().is_none());
	}

	#[test]
	fn error_throw_round_trips() {
		let err = As3Error::new(ErrorClass::TypeError, "bad thing", 1009);
		let exc: Exception = err.clone().into();
		assert_eq!(exc.as_error().unwrap().error_id(), 1009);
	}
}
