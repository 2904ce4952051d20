/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::classes::int_class;
use crate::convert;
use crate::limits::Limits;
use crate::object::{Object, Payload};

pub const MAX_VALUE: i32 = i32::MAX;
pub const MIN_VALUE: i32 = i32::MIN;

fn fresh(i: i32) -> Object {
	Object::new(int_class(), Payload::Int(i))
}

/// Boxes `i`, sharing the cached instance when it falls within
/// `limits.int_cache_bound` (two boxings of the same cached value are
/// reference-equal; boxings outside the range need not be).
pub fn new_int(i: i32, limits: &Limits) -> Object {
	convert::box_int(i, limits, fresh)
}

fn value_of(obj: &Object) -> i32 {
	match obj.payload() {
		Payload::Int(i) => *i,
		_ => unreachable!("int box holding non-Int payload"),
	}
}

pub fn to_string_radix10(obj: &Object) -> String {
	let mut buf = itoa::Buffer::new();
	buf.format(value_of(obj)).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cached_range_shares_identity() {
		let limits = Limits::default();
		let a = new_int(5, &limits);
		let b = new_int(5, &limits);
		assert!(Object::ptr_eq(&a, &b));
	}

	#[test]
	fn out_of_range_need_not_share_identity() {
		let limits = Limits::default();
		let a = new_int(10_000_000, &limits);
		let b = new_int(10_000_000, &limits);
		assert!(!Object::ptr_eq(&a, &b));
	}

	#[test]
	fn base_10_formatting() {
		let limits = Limits::default();
		assert_eq!(to_string_radix10(&new_int(-42, &limits)), "-42");
	}
}
