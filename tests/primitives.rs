/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use avm2_object_model::primitives::{new_boolean, new_int, new_string, new_uint};
use avm2_object_model::{Limits, Object};

#[test]
fn cached_int_boxes_share_identity() {
	let limits = Limits::default();
	let a = new_int(5, &limits);
	let b = new_int(5, &limits);
	assert!(Object::ptr_eq(&a, &b));

	let c = new_int(10_000_000, &limits);
	let d = new_int(10_000_000, &limits);
	assert!(!Object::ptr_eq(&c, &d));
}

#[test]
fn cached_uint_boxes_share_identity() {
	let limits = Limits::default();
	let a = new_uint(5, &limits);
	let b = new_uint(5, &limits);
	assert!(Object::ptr_eq(&a, &b));

	let c = new_uint(10_000_000, &limits);
	let d = new_uint(10_000_000, &limits);
	assert!(!Object::ptr_eq(&c, &d));
}

#[test]
fn empty_and_ascii_string_boxes_are_cached() {
	let a = new_string("");
	let b = new_string("");
	assert!(Object::ptr_eq(&a, &b));

	let c = new_string("x");
	let d = new_string("x");
	assert!(Object::ptr_eq(&c, &d));

	let e = new_string("multi-char");
	let f = new_string("multi-char");
	assert!(!Object::ptr_eq(&e, &f));
}

#[test]
fn boolean_boxes_are_singletons() {
	let a = new_boolean(true);
	let b = new_boolean(true);
	assert!(Object::ptr_eq(&a, &b));

	let c = new_boolean(false);
	assert!(!Object::ptr_eq(&a, &c));
}
