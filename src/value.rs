/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The tri-state value that fills every slot, argument, and return in the
//! runtime: undefined, null, or a reference to an object.

use crate::error::{Error, ErrorKind, Result};
use crate::object::Object;

#[derive(Clone, Debug)]
enum State {
	Undefined,
	Null,
	Object(Object),
}

/// A tri-state value. Exactly one of `is_undefined`, `is_null`,
/// `has_object` holds for any `Any`.
#[derive(Clone, Debug)]
pub struct Any(State);

impl Any {
	pub fn undefined() -> Any {
		Any(State::Undefined)
	}

	pub fn null() -> Any {
		Any(State::Null)
	}

	pub fn object(obj: Object) -> Any {
		Any(State::Object(obj))
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self.0, State::Undefined)
	}

	pub fn is_null(&self) -> bool {
		matches!(self.0, State::Null)
	}

	pub fn is_undefined_or_null(&self) -> bool {
		self.is_undefined() || self.is_null()
	}

	pub fn has_object(&self) -> bool {
		matches!(self.0, State::Object(_))
	}

	pub fn value(&self) -> Option<&Object> {
		match &self.0 {
			State::Object(obj) => Some(obj),
			_ => None,
		}
	}

	pub fn into_value(self) -> Option<Object> {
		match self.0 {
			State::Object(obj) => Some(obj),
			_ => None,
		}
	}

	/// Every property-binding verb on `Any` forwards to the object's own
	/// method; reading through an undefined value is always a
	/// `ReferenceError`, never a silent `undefined`.
	pub fn require_object(&self) -> Result<&Object> {
		match &self.0 {
			State::Object(obj) => Ok(obj),
			State::Undefined => Err(Error::new("Cannot read property of undefined", ErrorKind::Reference)),
			State::Null => Err(Error::new("Cannot read property of null", ErrorKind::Reference)),
		}
	}

	/// Reference equality on the underlying object: `null == null` and
	/// `undefined == undefined` are true, `undefined != null`. This is
	/// distinct from `weak_eq`/`strict_eq` in [`crate::ops`], which compare
	/// by value according to the AS3 operator tables.
	pub fn ref_eq(&self, other: &Any) -> bool {
		match (&self.0, &other.0) {
			(State::Undefined, State::Undefined) => true,
			(State::Null, State::Null) => true,
			(State::Object(a), State::Object(b)) => Object::ptr_eq(a, b),
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tri_state_exclusivity() {
		let u = Any::undefined();
		assert!(u.is_undefined() && !u.is_null() && !u.has_object());
		let n = Any::null();
		assert!(!n.is_undefined() && n.is_null() && !n.has_object());
	}

	#[test]
	fn undefined_and_null_are_distinct() {
		assert!(!Any::undefined().ref_eq(&Any::null()));
		assert!(Any::undefined().ref_eq(&Any::undefined()));
		assert!(Any::null().ref_eq(&Any::null()));
	}

	#[test]
	fn reading_through_undefined_is_reference_error() {
		let err = Any::undefined().require_object().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Reference);
	}
}
