/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::classes::uint_class;
use crate::convert;
use crate::limits::Limits;
use crate::object::{Object, Payload};

pub const MAX_VALUE: u32 = u32::MAX;
pub const MIN_VALUE: u32 = 0;

fn fresh(u: u32) -> Object {
	Object::new(uint_class(), Payload::Uint(u))
}

pub fn new_uint(u: u32, limits: &Limits) -> Object {
	convert::box_uint(u, limits, fresh)
}

fn value_of(obj: &Object) -> u32 {
	match obj.payload() {
		Payload::Uint(u) => *u,
		_ => unreachable!("uint box holding non-Uint payload"),
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
		let a = new_uint(10, &limits);
		let b = new_uint(10, &limits);
		assert!(Object::ptr_eq(&a, &b));
	}

	#[test]
	fn base_10_formatting() {
		let limits = Limits::default();
		assert_eq!(to_string_radix10(&new_uint(4_000_000_000, &limits)), "4000000000");
	}
}
