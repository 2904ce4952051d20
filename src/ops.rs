/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Operator semantics: weak/strict equality, ordering, addition, `typeof`,
//! `instanceof`/`is`/`as`, and `applyType`.

use crate::class::{ClassTag, ClassTagSet};
use crate::convert::{self, Hint};
use crate::error::{Error, ErrorKind, Result};
use crate::limits::Limits;
use crate::object::{Object, Payload};
use crate::value::Any;

fn tag_of(value: &Any) -> Option<ClassTag> {
	value.value().map(|o| o.class().tag)
}

pub fn typeof_str(value: &Any) -> &'static str {
	if value.is_undefined() {
		return "undefined";
	}
	match tag_of(value) {
		Some(ClassTag::Number | ClassTag::Int | ClassTag::Uint) => "number",
		Some(ClassTag::Boolean) => "boolean",
		Some(ClassTag::String) => "string",
		Some(ClassTag::Function) => "function",
		Some(ClassTag::Xml | ClassTag::XmlList) => "xml",
		_ => "object",
	}
}

fn is_numeric_or_bool(value: &Any) -> bool {
	if value.is_null() {
		return true;
	}
	match tag_of(value) {
		Some(tag) => ClassTagSet::numeric_or_bool().contains_tag(tag),
		None => false,
	}
}

fn as_number(value: &Any, limits: &Limits) -> f64 {
	convert::to_number(value, limits).unwrap_or(f64::NAN)
}

fn string_value(value: &Any) -> Option<String> {
	match value.value()?.payload() {
		Payload::Str(s) => Some(s.to_string()),
		_ => None,
	}
}

/// Weak equality (`==`). XML/XMLList operands are not handled here (out of
/// scope); callers that may see XML values must check for that tag first
/// and delegate to their XML helper.
pub fn weak_eq(a: &Any, b: &Any, limits: &Limits) -> bool {
	if a.ref_eq(b) {
		return true;
	}
	if a.is_undefined_or_null() != b.is_undefined_or_null() {
		return false;
	}
	if a.is_undefined_or_null() && b.is_undefined_or_null() {
		return true;
	}

	if is_numeric_or_bool(a) && is_numeric_or_bool(b) {
		return as_number(a, limits) == as_number(b, limits);
	}

	if let (Some(sa), Some(sb)) = (string_value(a), string_value(b)) {
		return sa == sb;
	}

	// One side numeric-or-boolean, the other a String: coerce the string
	// through ToNumber rather than re-testing its tag against the same set.
	if is_numeric_or_bool(a) && string_value(b).is_some() {
		return as_number(a, limits) == as_number(b, limits);
	}
	if is_numeric_or_bool(b) && string_value(a).is_some() {
		return as_number(a, limits) == as_number(b, limits);
	}

	false
}

/// Strict equality (`===`): like weak equality but `undefined !== null`
/// and XML is treated as an ordinary reference type.
pub fn strict_eq(a: &Any, b: &Any, limits: &Limits) -> bool {
	match (a.is_undefined(), b.is_undefined(), a.is_null(), b.is_null()) {
		(true, true, _, _) => return true,
		(_, _, true, true) => return true,
		_ if a.is_undefined_or_null() || b.is_undefined_or_null() => return false,
		_ => {}
	}
	if is_numeric_or_bool(a) && is_numeric_or_bool(b) {
		return as_number(a, limits) == as_number(b, limits);
	}
	if let (Some(sa), Some(sb)) = (string_value(a), string_value(b)) {
		return sa == sb;
	}
	a.ref_eq(b)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ordering {
	Less,
	Equal,
	Greater,
	Unordered,
}

/// Orders `a` and `b`: ordinal string comparison when both are strings,
/// otherwise numeric comparison. A comparison touching `NaN` is
/// `Unordered`, which every relational operator treats as `false`.
pub fn compare(a: &Any, b: &Any, limits: &Limits) -> Ordering {
	if let (Some(sa), Some(sb)) = (string_value(a), string_value(b)) {
		return match sa.cmp(&sb) {
			std::cmp::Ordering::Less => Ordering::Less,
			std::cmp::Ordering::Equal => Ordering::Equal,
			std::cmp::Ordering::Greater => Ordering::Greater,
		};
	}
	let na = as_number(a, limits);
	let nb = as_number(b, limits);
	if na.is_nan() || nb.is_nan() {
		return Ordering::Unordered;
	}
	if na < nb {
		Ordering::Less
	} else if na > nb {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

pub fn less_than(a: &Any, b: &Any, limits: &Limits) -> bool {
	compare(a, b, limits) == Ordering::Less
}

pub fn less_eq(a: &Any, b: &Any, limits: &Limits) -> bool {
	matches!(compare(a, b, limits), Ordering::Less | Ordering::Equal)
}

/// Maps a value through `String()`-style conversion for the purposes of
/// addition: `null` -> `"null"`, `undefined` -> `"undefined"`.
fn convert_string(value: &Any, limits: &Limits) -> Result<String> {
	if value.is_undefined() {
		return Ok("undefined".to_string());
	}
	if value.is_null() {
		return Ok("null".to_string());
	}
	if let Some(s) = string_value(value) {
		return Ok(s);
	}
	let tag = tag_of(value);
	if let Some(ClassTag::Number | ClassTag::Int | ClassTag::Uint) = tag {
		return Ok(convert::format_number(as_number(value, limits)));
	}
	if let Some(ClassTag::Boolean) = tag {
		return Ok(as_number(value, limits).to_string());
	}
	let primitive = convert::to_primitive(value, Hint::String, limits)?;
	if primitive.ref_eq(value) {
		return Err(Error::new("Cannot convert value to string", ErrorKind::Type));
	}
	convert_string(&primitive, limits)
}

/// `+`. Numeric when both operands are numeric-or-boolean (with `null`
/// treated as an empty numeric slot); string concatenation when either
/// side is a string or date; otherwise falls back through `to_primitive`.
pub fn add(a: &Any, b: &Any, limits: &Limits) -> Result<Any> {
	if is_numeric_or_bool(a) && is_numeric_or_bool(b) {
		return Ok(number_any(as_number(a, limits) + as_number(b, limits)));
	}

	let a_is_string_like = matches!(tag_of(a), Some(ClassTag::String | ClassTag::Date)) || string_value(a).is_some();
	let b_is_string_like = matches!(tag_of(b), Some(ClassTag::String | ClassTag::Date)) || string_value(b).is_some();
	if a_is_string_like || b_is_string_like {
		return Ok(string_any(format!("{}{}", convert_string(a, limits)?, convert_string(b, limits)?)));
	}

	let pa = convert::to_primitive(a, Hint::Number, limits)?;
	let pb = convert::to_primitive(b, Hint::Number, limits)?;
	if is_numeric_or_bool(&pa) && is_numeric_or_bool(&pb) {
		return Ok(number_any(as_number(&pa, limits) + as_number(&pb, limits)));
	}
	Ok(string_any(format!("{}{}", convert_string(&pa, limits)?, convert_string(&pb, limits)?)))
}

fn number_any(n: f64) -> Any {
	Any::object(Object::new(crate::classes::number_class(), Payload::Number(n)))
}

fn string_any(s: String) -> Any {
	Any::object(Object::new(crate::classes::string_class(), Payload::Str(s.into())))
}

/// `instanceof`: walks `obj`'s prototype chain looking for `target`'s
/// prototype object by reference. Interfaces (which have no single
/// prototype object in this model) always report `false`.
pub fn instance_of(obj: &Object, target_prototype: &Object, limits: &Limits) -> bool {
	let mut current = obj.proto();
	let mut depth = 0;
	while let Some(proto) = current {
		if depth >= limits.max_prototype_depth {
			return false;
		}
		if Object::ptr_eq(&proto, target_prototype) {
			return true;
		}
		current = proto.proto();
		depth += 1;
	}
	false
}

/// `is`: class membership. For the numeric boxes, additionally requires
/// the value to round-trip exactly through that representation (`3.0 is
/// int` is true, `3.5 is int` is false).
pub fn is_type(value: &Any, target_tag: ClassTag) -> bool {
	let Some(tag) = tag_of(value) else { return false };
	if tag == target_tag {
		return true;
	}
	match target_tag {
		ClassTag::Int => matches!(value.value().unwrap().payload(), Payload::Number(n) if n.fract() == 0.0 && *n >= i32::MIN as f64 && *n <= i32::MAX as f64),
		ClassTag::Uint => matches!(value.value().unwrap().payload(), Payload::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64),
		ClassTag::Number => matches!(tag, ClassTag::Int | ClassTag::Uint),
		_ => false,
	}
}

pub fn as_type(value: Any, target_tag: ClassTag) -> Any {
	if is_type(&value, target_tag) {
		value
	} else {
		Any::null()
	}
}

/// `x.(predicate)`. Legal only on XML/XMLList; every other receiver is a
/// `TypeError`, even though no XML component exists here to actually
/// filter against.
pub fn check_filter(value: &Any) -> Result<()> {
	match tag_of(value) {
		Some(ClassTag::Xml | ClassTag::XmlList) => Ok(()),
		_ => Err(Error::new("The filter operator (..) is not supported on the type (Error #1123)", ErrorKind::Type)),
	}
}

/// `applyType(Vector, [T])`. `Vector.<T>` is the only generic surface in
/// scope; anything else is a `TypeError`.
pub fn apply_type(generic_tag: ClassTag, params: &[ClassTag]) -> Result<()> {
	if generic_tag != ClassTag::Vector {
		return Err(Error::new("Type is not generic", ErrorKind::Type));
	}
	if params.len() != 1 {
		return Err(Error::new("Wrong number of type parameters for Vector.<T>", ErrorKind::Type));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn num(n: f64) -> Any {
		number_any(n)
	}

	fn str_(s: &str) -> Any {
		string_any(s.to_string())
	}

	#[test]
	fn weak_vs_strict_null_undefined() {
		let limits = Limits::default();
		assert!(weak_eq(&Any::null(), &Any::undefined(), &limits));
		assert!(!strict_eq(&Any::null(), &Any::undefined(), &limits));
	}

	#[test]
	fn weak_eq_number_and_string() {
		let limits = Limits::default();
		assert!(weak_eq(&num(1.0), &str_("1"), &limits));
		assert!(!strict_eq(&num(1.0), &str_("1"), &limits));
	}

	#[test]
	fn nan_is_never_weakly_equal_to_itself() {
		let limits = Limits::default();
		let nan = num(f64::NAN);
		assert!(!weak_eq(&nan, &nan, &limits));
	}

	#[test]
	fn signed_zero_is_weakly_equal() {
		let limits = Limits::default();
		assert!(weak_eq(&num(0.0), &num(-0.0), &limits));
	}

	#[test]
	fn addition_is_type_directed() {
		let limits = Limits::default();
		let sum = add(&num(1.0), &num(2.0), &limits).unwrap();
		assert_eq!(string_value(&convert::to_primitive(&sum, Hint::String, &limits).unwrap()), None);
		assert_eq!(convert::to_number(&sum, &limits).unwrap(), 3.0);

		let concat = add(&str_("1"), &num(2.0), &limits).unwrap();
		assert_eq!(string_value(&concat).as_deref(), Some("12"));

		let bool_true = Any::object(Object::new(crate::classes::boolean_class(), Payload::Boolean(true)));
		let bool_false = Any::object(Object::new(crate::classes::boolean_class(), Payload::Boolean(false)));
		let bools = add(&bool_true, &bool_false, &limits).unwrap();
		assert_eq!(convert::to_number(&bools, &limits).unwrap(), 1.0);
	}

	#[test]
	fn check_filter_rejects_non_xml_receivers() {
		let err = check_filter(&num(1.0)).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Type);
	}

	#[test]
	fn is_int_requires_exact_round_trip() {
		let three = number_any(3.0);
		let three_point_five = number_any(3.5);
		assert!(is_type(&three, ClassTag::Int));
		assert!(!is_type(&three_point_five, ClassTag::Int));
	}
}
