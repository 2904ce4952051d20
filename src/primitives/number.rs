/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::classes::number_class;
use crate::convert::format_number;
use crate::error::{Error, ErrorKind, Result};
use crate::object::{Object, Payload};

pub const MAX_VALUE: f64 = f64::MAX;
pub const MIN_VALUE: f64 = f64::MIN_POSITIVE;
pub const POSITIVE_INFINITY: f64 = f64::INFINITY;
pub const NEGATIVE_INFINITY: f64 = f64::NEG_INFINITY;

pub fn new_number(n: f64) -> Object {
	Object::new(number_class(), Payload::Number(n))
}

fn value_of(obj: &Object) -> f64 {
	match obj.payload() {
		Payload::Number(n) => *n,
		_ => unreachable!("Number box holding non-Number payload"),
	}
}

/// `toFixed(p)`: `p` in `[0, 20]`.
pub fn to_fixed(obj: &Object, digits: i32) -> Result<String> {
	if !(0..=20).contains(&digits) {
		return Err(Error::new("toFixed() argument must be between 0 and 20", ErrorKind::Range));
	}
	Ok(format!("{:.*}", digits as usize, value_of(obj)))
}

/// `toExponential(p)`: `p` in `[0, 20]`.
pub fn to_exponential(obj: &Object, digits: i32) -> Result<String> {
	if !(0..=20).contains(&digits) {
		return Err(Error::new("toExponential() argument must be between 0 and 20", ErrorKind::Range));
	}
	let n = value_of(obj);
	let formatted = format!("{:.*e}", digits as usize, n);
	Ok(rewrite_exponent(&formatted))
}

/// `toPrecision(p)`: `p` in `[1, 21]`.
pub fn to_precision(obj: &Object, precision: i32) -> Result<String> {
	if !(1..=21).contains(&precision) {
		return Err(Error::new("toPrecision() argument must be between 1 and 21", ErrorKind::Range));
	}
	let n = value_of(obj);
	let formatted = format!("{:.*e}", (precision - 1) as usize, n);
	Ok(rewrite_exponent(&formatted))
}

fn rewrite_exponent(rust_exp_format: &str) -> String {
	if let Some((mantissa, exp)) = rust_exp_format.split_once('e') {
		let exp: i32 = exp.parse().unwrap_or(0);
		format!("{mantissa}e{}{}", if exp >= 0 { "+" } else { "-" }, exp.abs())
	} else {
		rust_exp_format.to_string()
	}
}

/// `toString(radix)`: `radix` in `[2, 36]`.
pub fn to_string_radix(obj: &Object, radix: u32) -> Result<String> {
	if !(2..=36).contains(&radix) {
		return Err(Error::new("toString() radix must be between 2 and 36", ErrorKind::Range));
	}
	if radix == 10 {
		return Ok(format_number(value_of(obj)));
	}
	let n = value_of(obj);
	if !n.is_finite() {
		return Ok(format_number(n));
	}
	let negative = n < 0.0;
	let mut int_part = n.abs().trunc() as u64;
	let digits = b"0123456789abcdefghijklmnopqrstuvwxyz";
	let mut out = Vec::new();
	if int_part == 0 {
		out.push(b'0');
	}
	while int_part > 0 {
		out.push(digits[(int_part % radix as u64) as usize]);
		int_part /= radix as u64;
	}
	out.reverse();
	let mut result = String::from_utf8(out).unwrap();
	if negative {
		result.insert(0, '-');
	}
	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn to_fixed_rejects_out_of_range_precision() {
		let n = new_number(1.5);
		assert!(to_fixed(&n, -1).is_err());
		assert!(to_fixed(&n, 21).is_err());
		assert_eq!(to_fixed(&n, 2).unwrap(), "1.50");
	}

	#[test]
	fn to_string_radix_matches_hex() {
		let n = new_number(255.0);
		assert_eq!(to_string_radix(&n, 16).unwrap(), "ff");
	}
}
