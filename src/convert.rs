/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Value coercion and primitive boxing: `to_primitive`, ToInt32/ToUint32,
//! string<->number, and the cached-box policy for hot primitive values.

use std::sync::OnceLock;

use crate::class::ClassTag;
use crate::error::{Error, ErrorKind, Result};
use crate::limits::Limits;
use crate::object::{BindOptions, Object, Payload};
use crate::qname::QName;
use crate::value::Any;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
	Number,
	String,
}

/// `to_primitive`: calls `valueOf` then `toString` (number hint) or the
/// reverse (string hint), per the order each AS3 class declares. `Date`
/// defaults to the string hint; everything else defaults to number.
pub fn to_primitive(value: &Any, hint: Hint, limits: &Limits) -> Result<Any> {
	let Some(obj) = value.value() else {
		return Ok(value.clone());
	};
	if is_primitive_tag(obj.class().tag) {
		return Ok(value.clone());
	}

	let methods: [&str; 2] = match hint {
		Hint::Number => ["valueOf", "toString"],
		Hint::String => ["toString", "valueOf"],
	};

	for method in methods {
		let name = QName::public(method);
		if let Ok((status, result)) = obj.call_property(&name, BindOptions::read(), &[], limits) {
			if status.is_success() && (result.is_undefined_or_null() || is_primitive(&result)) {
				if !result.is_undefined_or_null() {
					return Ok(result);
				}
			}
		}
	}

	Err(Error::new("Cannot convert object to primitive value", ErrorKind::Type))
}

/// `to_primitive` pinned to the number hint, for call sites that never
/// want the class's own declared default (e.g. relational comparison).
pub fn to_primitive_number_hint(value: &Any, limits: &Limits) -> Result<Any> {
	to_primitive(value, Hint::Number, limits)
}

/// `to_primitive` pinned to the string hint, for call sites like string
/// concatenation that always prefer `toString` first.
pub fn to_primitive_string_hint(value: &Any, limits: &Limits) -> Result<Any> {
	to_primitive(value, Hint::String, limits)
}

fn is_primitive(value: &Any) -> bool {
	match value.value() {
		Some(obj) => is_primitive_tag(obj.class().tag),
		None => true,
	}
}

fn is_primitive_tag(tag: ClassTag) -> bool {
	matches!(tag, ClassTag::Int | ClassTag::Uint | ClassTag::Number | ClassTag::String | ClassTag::Boolean)
}

/// `hint` a class defaults to for `to_primitive` when an operator calls it
/// without an explicit preference (addition, see `crate::ops::add`).
pub fn default_hint(tag: ClassTag) -> Hint {
	match tag {
		ClassTag::Date => Hint::String,
		_ => Hint::Number,
	}
}

pub fn to_number(value: &Any, limits: &Limits) -> Result<f64> {
	if value.is_undefined() {
		return Ok(f64::NAN);
	}
	if value.is_null() {
		return Ok(0.0);
	}
	let obj = value.value().unwrap();
	match obj.payload() {
		Payload::Int(i) => Ok(*i as f64),
		Payload::Uint(u) => Ok(*u as f64),
		Payload::Number(n) => Ok(*n),
		Payload::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
		Payload::Str(s) => Ok(string_to_number(s)),
		_ => {
			let primitive = to_primitive(value, Hint::Number, limits)?;
			if primitive.has_object() && Object::ptr_eq(primitive.value().unwrap(), obj) {
				return Err(Error::new("Cannot convert object to number", ErrorKind::Type));
			}
			to_number(&primitive, limits)
		}
	}
}

/// String -> Number, per the spec: whitespace-only is 0, a `0x`/`0X`
/// prefix is hexadecimal, otherwise a decimal/scientific parse; anything
/// else is NaN.
pub fn string_to_number(s: &str) -> f64 {
	let trimmed = s.trim();
	if trimmed.is_empty() {
		return 0.0;
	}
	if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
		return i64::from_str_radix(hex, 16).map(|v| v as f64).unwrap_or(f64::NAN);
	}
	match trimmed {
		"Infinity" | "+Infinity" => f64::INFINITY,
		"-Infinity" => f64::NEG_INFINITY,
		_ => trimmed.parse::<f64>().unwrap_or(f64::NAN),
	}
}

/// ECMAScript ToInt32: NaN/infinite -> 0, otherwise truncate toward zero
/// and reduce modulo 2^32, reinterpreted as signed. This is *not* the same
/// as the host ABI's `as i32` cast on an out-of-range float.
pub fn to_int32(n: f64) -> i32 {
	if !n.is_finite() {
		return 0;
	}
	let truncated = n.trunc();
	let modulo = truncated.rem_euclid(4294967296.0);
	if modulo >= 2147483648.0 {
		(modulo - 4294967296.0) as i32
	} else {
		modulo as i32
	}
}

pub fn to_uint32(n: f64) -> u32 {
	if !n.is_finite() {
		return 0;
	}
	let truncated = n.trunc();
	truncated.rem_euclid(4294967296.0) as u32
}

/// Shortest-round-trip decimal formatting of a Number, matching
/// `Number.prototype.toString(10)`'s bit-exact requirement. `ryu` gives us
/// the shortest-round-trip digit sequence; the surrounding logic reshapes
/// it into ECMA-262's rules for `-0`, infinities, NaN, and the
/// fixed-vs-exponential threshold.
pub fn format_number(n: f64) -> String {
	if n.is_nan() {
		return "NaN".to_string();
	}
	if n == f64::INFINITY {
		return "Infinity".to_string();
	}
	if n == f64::NEG_INFINITY {
		return "-Infinity".to_string();
	}
	if n == 0.0 {
		return if n.is_sign_negative() { "0".to_string() } else { "0".to_string() };
	}

	let abs = n.abs();
	if abs >= 1e21 || (abs < 1e-6 && abs > 0.0) {
		format_exponential(n)
	} else {
		let mut buf = ryu::Buffer::new();
		let shortest = buf.format_finite(n);
		strip_trailing_decimal(shortest)
	}
}

fn strip_trailing_decimal(s: &str) -> String {
	if let Some(stripped) = s.strip_suffix(".0") {
		stripped.to_string()
	} else {
		s.to_string()
	}
}

fn format_exponential(n: f64) -> String {
	let mut buf = ryu::Buffer::new();
	let formatted = buf.format_finite(n);
	// ryu emits e.g. "1e21"; ECMA-262 wants an explicit sign on the exponent.
	if let Some((mantissa, exp)) = formatted.split_once('e') {
		let exp: i32 = exp.parse().unwrap_or(0);
		let mantissa = strip_trailing_decimal(mantissa);
		format!("{mantissa}e{}{}", if exp >= 0 { "+" } else { "-" }, exp.abs())
	} else {
		formatted.to_string()
	}
}

static INT_CACHE: OnceLock<Vec<Object>> = OnceLock::new();
static UINT_CACHE: OnceLock<Vec<Object>> = OnceLock::new();

fn int_cache(limits: &Limits, class: impl Fn(i32) -> Object) -> &'static Vec<Object> {
	INT_CACHE.get_or_init(|| (-limits.int_cache_bound..=limits.int_cache_bound).map(class).collect())
}

fn uint_cache(limits: &Limits, class: impl Fn(u32) -> Object) -> &'static Vec<Object> {
	UINT_CACHE.get_or_init(|| (0..=limits.uint_cache_bound).map(class).collect())
}

/// Boxes `i` as an `int`, returning the shared cached instance when `i`
/// falls within `limits.int_cache_bound`.
pub fn box_int(i: i32, limits: &Limits, fresh: impl Fn(i32) -> Object) -> Object {
	if i.unsigned_abs() <= limits.int_cache_bound as u32 {
		let cache = int_cache(limits, &fresh);
		let index = (i + limits.int_cache_bound) as usize;
		cache[index].clone()
	} else {
		fresh(i)
	}
}

pub fn box_uint(u: u32, limits: &Limits, fresh: impl Fn(u32) -> Object) -> Object {
	if u <= limits.uint_cache_bound {
		let cache = uint_cache(limits, &fresh);
		cache[u as usize].clone()
	} else {
		fresh(u)
	}
}

/// A primitive value as a host embedder hands it in, before it has been
/// boxed into a runtime `Any`. The reverse of what `to_primitive` does for
/// an outgoing value: this wraps an incoming one back up into the runtime.
#[derive(Clone, Debug)]
pub enum HostPrimitive {
	Undefined,
	Null,
	Boolean(bool),
	Int(i32),
	Uint(u32),
	Number(f64),
	String(String),
}

/// The reverse-marshalling entry point: boxes a host-supplied primitive
/// into the `Any` it corresponds to, sharing the same cached-box policy
/// `box_int`/`box_uint` give bytecode-constructed values.
pub fn from_boxed(value: HostPrimitive, limits: &Limits) -> Any {
	match value {
		HostPrimitive::Undefined => Any::undefined(),
		HostPrimitive::Null => Any::null(),
		HostPrimitive::Boolean(b) => Any::object(crate::primitives::new_boolean(b)),
		HostPrimitive::Int(i) => Any::object(crate::primitives::new_int(i, limits)),
		HostPrimitive::Uint(u) => Any::object(crate::primitives::new_uint(u, limits)),
		HostPrimitive::Number(n) => Any::object(crate::primitives::new_number(n)),
		HostPrimitive::String(s) => Any::object(crate::primitives::new_string(s)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn to_int32_wraps_like_ecma() {
		assert_eq!(to_int32(4294967296.0), 0);
		assert_eq!(to_int32(f64::NAN), 0);
		assert_eq!(to_int32(-1.5), -1);
		assert_eq!(to_int32(2147483648.0), -2147483648);
	}

	#[test]
	fn string_to_number_rules() {
		assert_eq!(string_to_number("   "), 0.0);
		assert_eq!(string_to_number("0x1F"), 31.0);
		assert_eq!(string_to_number("3.5"), 3.5);
		assert!(string_to_number("not a number").is_nan());
	}

	#[test]
	fn format_number_matches_ecma_shapes() {
		assert_eq!(format_number(0.0), "0");
		assert_eq!(format_number(3.0), "3");
		assert_eq!(format_number(f64::NAN), "NaN");
		assert_eq!(format_number(f64::INFINITY), "Infinity");
	}

	#[test]
	fn from_boxed_round_trips_host_primitives() {
		let limits = Limits::default();
		assert!(from_boxed(HostPrimitive::Undefined, &limits).is_undefined());
		assert!(from_boxed(HostPrimitive::Null, &limits).is_null());
		assert_eq!(to_number(&from_boxed(HostPrimitive::Int(5), &limits), &limits).unwrap(), 5.0);
		assert_eq!(to_number(&from_boxed(HostPrimitive::Number(2.5), &limits), &limits).unwrap(), 2.5);
	}
}
