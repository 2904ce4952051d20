/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use avm2_object_model::classes::boolean_class;
use avm2_object_model::ops;
use avm2_object_model::primitives::{new_int, new_number, new_string};
use avm2_object_model::{convert, Any, Limits, Object, Payload};

fn int(n: i32, limits: &Limits) -> Any {
	Any::object(new_int(n, limits))
}

fn num(n: f64) -> Any {
	Any::object(new_number(n))
}

fn string(s: &str) -> Any {
	Any::object(new_string(s))
}

fn boolean(b: bool) -> Any {
	Any::object(Object::new(boolean_class(), Payload::Boolean(b)))
}

#[test]
fn weak_vs_strict_equality() {
	let limits = Limits::default();

	assert!(ops::weak_eq(&Any::null(), &Any::undefined(), &limits));
	assert!(!ops::strict_eq(&Any::null(), &Any::undefined(), &limits));

	assert!(ops::weak_eq(&int(1, &limits), &string("1"), &limits));
	assert!(!ops::strict_eq(&int(1, &limits), &string("1"), &limits));

	let nan = num(f64::NAN);
	assert!(!ops::weak_eq(&nan, &nan, &limits));

	assert!(ops::weak_eq(&num(0.0), &num(-0.0), &limits));
}

#[test]
fn addition_is_type_directed() {
	let limits = Limits::default();

	let sum = ops::add(&int(1, &limits), &int(2, &limits), &limits).unwrap();
	assert_eq!(convert::to_number(&sum, &limits).unwrap(), 3.0);

	let concatenated = ops::add(&string("1"), &int(2, &limits), &limits).unwrap();
	match concatenated.value().unwrap().payload() {
		Payload::Str(s) => assert_eq!(&**s, "12"),
		_ => panic!("expected a boxed string"),
	}

	let bools = ops::add(&boolean(true), &boolean(false), &limits).unwrap();
	assert_eq!(convert::to_number(&bools, &limits).unwrap(), 1.0);
}
