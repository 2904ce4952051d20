/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::sync::OnceLock;

use crate::classes::boolean_class;
use crate::object::{Object, Payload};

/// `true` and `false` are process-wide singletons; there is never more
/// than one boxed instance of each.
pub fn new_boolean(b: bool) -> Object {
	static TRUE: OnceLock<Object> = OnceLock::new();
	static FALSE: OnceLock<Object> = OnceLock::new();
	if b {
		TRUE.get_or_init(|| Object::new(boolean_class(), Payload::Boolean(true))).clone()
	} else {
		FALSE.get_or_init(|| Object::new(boolean_class(), Payload::Boolean(false))).clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn booleans_are_singletons() {
		assert!(Object::ptr_eq(&new_boolean(true), &new_boolean(true)));
		assert!(!Object::ptr_eq(&new_boolean(true), &new_boolean(false)));
	}
}
