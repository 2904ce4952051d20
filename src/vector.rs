/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! A minimal `Vector.<T>`-shaped element-access façade: `get`/`set`,
//! `length`, and the `fixed` flag that freezes length (not content)
//! mutation. Generic only over `Any` — there is no reified type-parameter
//! system here, `applyType` (§4.5) is the full extent of AS3 generics in
//! scope.

use std::sync::Mutex;

use crate::classes::vector_class;
use crate::error::{Error, ErrorKind, Result};
use crate::object::{Object, Payload};
use crate::value::Any;

/// The mutable state behind a `Vector` object: the element storage plus
/// the `fixed` flag. Lives inside the `Mutex` the object payload wraps, so
/// every accessor here takes `&mut` and is called through the lock guard.
#[derive(Debug)]
pub struct VectorState {
	items: Vec<Any>,
	fixed: bool,
}

impl VectorState {
	pub fn new(items: Vec<Any>, fixed: bool) -> VectorState {
		VectorState { items, fixed }
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Any> {
		self.items.get(index)
	}

	pub fn is_fixed(&self) -> bool {
		self.fixed
	}
}

pub fn new_vector(items: Vec<Any>, fixed: bool) -> Object {
	Object::new(vector_class(), Payload::Vector(Mutex::new(VectorState::new(items, fixed))))
}

fn state(obj: &Object) -> &Mutex<VectorState> {
	match obj.payload() {
		Payload::Vector(state) => state,
		_ => unreachable!("Vector facade applied to non-Vector payload"),
	}
}

pub fn length(obj: &Object) -> u32 {
	state(obj).lock().unwrap().len() as u32
}

pub fn is_fixed(obj: &Object) -> bool {
	state(obj).lock().unwrap().is_fixed()
}

pub fn set_fixed(obj: &Object, fixed: bool) {
	state(obj).lock().unwrap().fixed = fixed;
}

/// `vector[index]`. Reading out of bounds is a `RangeError`, matching
/// AS3's strict (non-sparse) `Vector` rather than `Array`'s `undefined`.
pub fn get(obj: &Object, index: u32) -> Result<Any> {
	let guard = state(obj).lock().unwrap();
	guard.get(index as usize).cloned().ok_or_else(|| Error::new(format!("Vector index {} out of bounds for length {}", index, guard.len()), ErrorKind::Range))
}

/// `vector[index] = value`. Writing at `index == length` on a non-fixed
/// vector grows it by one, matching AS3's push-via-assignment idiom;
/// any other out-of-bounds write, or any write at all to the length-growing
/// slot of a fixed vector, is a `RangeError`.
pub fn set(obj: &Object, index: u32, value: Any) -> Result<()> {
	let mut guard = state(obj).lock().unwrap();
	let index = index as usize;
	if index < guard.items.len() {
		guard.items[index] = value;
		return Ok(());
	}
	if index == guard.items.len() && !guard.fixed {
		guard.items.push(value);
		return Ok(());
	}
	Err(Error::new(format!("Vector index {} out of bounds for length {}", index, guard.items.len()), ErrorKind::Range))
}

/// `vector.length = n`. Growing pads with `undefined`; shrinking truncates.
/// Either direction on a fixed vector is a `RangeError`.
pub fn set_length(obj: &Object, new_len: u32) -> Result<()> {
	let mut guard = state(obj).lock().unwrap();
	if guard.fixed {
		return Err(Error::new("cannot change the length of a fixed Vector", ErrorKind::Range));
	}
	let new_len = new_len as usize;
	if new_len < guard.items.len() {
		guard.items.truncate(new_len);
	} else {
		guard.items.resize(new_len, Any::undefined());
	}
	Ok(())
}

pub fn push(obj: &Object, value: Any) -> Result<()> {
	let mut guard = state(obj).lock().unwrap();
	if guard.fixed {
		return Err(Error::new("cannot push onto a fixed Vector", ErrorKind::Range));
	}
	guard.items.push(value);
	Ok(())
}

pub fn pop(obj: &Object) -> Result<Any> {
	let mut guard = state(obj).lock().unwrap();
	if guard.fixed {
		return Err(Error::new("cannot pop from a fixed Vector", ErrorKind::Range));
	}
	guard.items.pop().ok_or_else(|| Error::new("pop from an empty Vector", ErrorKind::Range))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn get_set_round_trip() {
		let v = new_vector(vec![Any::null(), Any::undefined()], false);
		assert!(get(&v, 0).unwrap().is_null());
		set(&v, 1, Any::null()).unwrap();
		assert!(get(&v, 1).unwrap().is_null());
	}

	#[test]
	fn out_of_bounds_read_is_range_error() {
		let v = new_vector(vec![], false);
		assert_eq!(get(&v, 0).unwrap_err().kind(), ErrorKind::Range);
	}

	#[test]
	fn assignment_at_length_grows_non_fixed_vector() {
		let v = new_vector(vec![Any::null()], false);
		set(&v, 1, Any::null()).unwrap();
		assert_eq!(length(&v), 2);
	}

	#[test]
	fn fixed_vector_rejects_length_change() {
		let v = new_vector(vec![Any::null()], true);
		assert_eq!(set_length(&v, 5).unwrap_err().kind(), ErrorKind::Range);
		assert_eq!(set(&v, 1, Any::null()).unwrap_err().kind(), ErrorKind::Range);
	}
}
