/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use avm2_object_model::classes::object_class;
use avm2_object_model::primitives::new_int;
use avm2_object_model::{BindOptions, Limits, Object, Payload, QName, Status};

#[test]
fn dynamic_property_round_trip() {
	let limits = Limits::default();
	let o = Object::new(object_class(), Payload::Generic);
	let foo = QName::public("foo");
	let bar = QName::public("bar");

	let forty_two = avm2_object_model::Any::object(new_int(42, &limits));
	assert_eq!(o.set_property(&foo, forty_two, BindOptions::write()), Status::Success);

	let (status, value) = o.get_property(&foo, BindOptions::read(), &limits);
	assert_eq!(status, Status::Success);
	assert!(matches!(value.value().unwrap().payload(), Payload::Int(42)));

	assert!(!o.has_property(&bar, BindOptions::read(), &limits));

	assert!(o.delete_property(&foo));
	let (status, value) = o.get_property(&foo, BindOptions::read(), &limits);
	assert_eq!(status, Status::SoftSuccess);
	assert!(value.is_undefined());
}

#[test]
fn prototype_fallthrough() {
	let limits = Limits::default();
	let p = Object::new(object_class(), Payload::Generic);
	let x = QName::public("x");
	let hello = avm2_object_model::Any::object(avm2_object_model::primitives::new_string("hello"));
	p.set_property(&x, hello, BindOptions::write());

	let o = Object::new_with_proto(object_class(), Payload::Generic, Some(p));

	let (status, value) = o.get_property(&x, BindOptions::read(), &limits);
	assert_eq!(status, Status::Success);
	match value.value().unwrap().payload() {
		Payload::Str(s) => assert_eq!(&**s, "hello"),
		_ => panic!("expected a boxed string"),
	}

	let without_proto = BindOptions::read() & !BindOptions::SEARCH_PROTOTYPE;
	let (status, value) = o.get_property(&x, without_proto, &limits);
	assert_eq!(status, Status::SoftSuccess);
	assert!(value.is_undefined());
}

#[test]
fn for_in_over_dynamic_props_plus_prototype() {
	let limits = Limits::default();
	let proto = Object::new(object_class(), Payload::Generic);
	let one = avm2_object_model::Any::object(new_int(1, &limits));
	let two = avm2_object_model::Any::object(new_int(2, &limits));
	let three = avm2_object_model::Any::object(new_int(3, &limits));
	proto.set_property(&QName::public("c"), three, BindOptions::write());

	let o = Object::new_with_proto(object_class(), Payload::Generic, Some(proto));
	o.set_property(&QName::public("a"), one, BindOptions::write());
	o.set_property(&QName::public("b"), two, BindOptions::write());

	let mut names = Vec::new();
	let mut current = o.clone();
	let mut idx = 0;
	loop {
		let (has_next, obj, next_idx) = Object::has_next_2(&current, idx, &limits);
		if !has_next {
			break;
		}
		names.push(obj.name_at(next_idx).unwrap());
		current = obj;
		idx = next_idx;
	}
	assert_eq!(names, vec!["a", "b", "c"]);

	let (has_next, _, _) = Object::has_next_2(&current, idx, &limits);
	assert!(!has_next);
}
