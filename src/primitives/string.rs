/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The AS3 `String` box. AS3 strings are UTF-16; every index- or
//! length-taking method here operates on UTF-16 code units, matching the
//! teacher's `JS_GetStringCharAt`/`JS_GetStringLength` (which index the
//! host engine's native UTF-16 buffer) rather than Unicode scalar values.

use std::sync::OnceLock;

use regex::Regex;

use crate::classes::string_class;
use crate::object::{Object, Payload};

fn value_of(obj: &Object) -> &str {
	match obj.payload() {
		Payload::Str(s) => s,
		_ => unreachable!("String box holding non-Str payload"),
	}
}

fn units(obj: &Object) -> Vec<u16> {
	value_of(obj).encode_utf16().collect()
}

/// The empty string is a singleton; one-character strings below code
/// point 128 are cached the same way boxed integers are.
pub fn new_string(s: impl Into<String>) -> Object {
	let s = s.into();
	if s.is_empty() {
		return empty_string();
	}
	if s.len() == 1 {
		let byte = s.as_bytes()[0];
		if byte < 128 {
			return ascii_cache()[byte as usize].clone();
		}
	}
	fresh(s)
}

fn fresh(s: String) -> Object {
	Object::new(string_class(), Payload::Str(s.into()))
}

fn empty_string() -> Object {
	static EMPTY: OnceLock<Object> = OnceLock::new();
	EMPTY.get_or_init(|| fresh(String::new())).clone()
}

fn ascii_cache() -> &'static Vec<Object> {
	static CACHE: OnceLock<Vec<Object>> = OnceLock::new();
	CACHE.get_or_init(|| (0u8..128).map(|b| fresh((b as char).to_string())).collect())
}

/// `charAt(index)`: the UTF-16 code unit at `index`, decoded back to a
/// one-character string, or `""` if out of range.
pub fn char_at(obj: &Object, index: i32) -> String {
	if index < 0 {
		return String::new();
	}
	let units = units(obj);
	match units.get(index as usize) {
		Some(&unit) => char::decode_utf16([unit]).next().and_then(|r| r.ok()).map(String::from).unwrap_or_default(),
		None => String::new(),
	}
}

/// `charCodeAt(index)`: the raw UTF-16 code unit, or `NaN` if out of range.
pub fn char_code_at(obj: &Object, index: i32) -> f64 {
	if index < 0 {
		return f64::NAN;
	}
	units(obj).get(index as usize).map(|&u| u as f64).unwrap_or(f64::NAN)
}

/// `String.fromCharCode`: builds a string from a sequence of UTF-16 code
/// units, tolerating unpaired surrogates the way ECMA-262 does (lone
/// surrogates become the Unicode replacement character).
pub fn from_char_code(units: &[u16]) -> String {
	char::decode_utf16(units.iter().copied())
		.map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
		.collect()
}

pub fn concat(a: &Object, b: &Object) -> Object {
	new_string(format!("{}{}", value_of(a), value_of(b)))
}

/// `indexOf`: NaN start clamps to 0, per ECMA-262.
pub fn index_of(obj: &Object, needle: &str, start: f64) -> i32 {
	let haystack = value_of(obj);
	let start = if start.is_nan() { 0 } else { start.max(0.0) as usize };
	let byte_start = char_index_to_byte_offset(haystack, start);
	match haystack.get(byte_start..).and_then(|s| s.find(needle)) {
		Some(byte_offset) => byte_to_char_index(haystack, byte_start + byte_offset) as i32,
		None => -1,
	}
}

/// `lastIndexOf`: NaN start clamps to +infinity (search the whole string).
pub fn last_index_of(obj: &Object, needle: &str, start: f64) -> i32 {
	let haystack = value_of(obj);
	if start.is_nan() || start == f64::INFINITY {
		return match haystack.rfind(needle) {
			Some(byte_offset) => byte_to_char_index(haystack, byte_offset) as i32,
			None => -1,
		};
	}
	let limit = char_index_to_byte_offset(haystack, start.max(0.0) as usize);
	let window = &haystack[..limit.min(haystack.len())];
	match window.rfind(needle) {
		Some(byte_offset) => byte_to_char_index(haystack, byte_offset) as i32,
		None => -1,
	}
}

fn char_index_to_byte_offset(s: &str, char_index: usize) -> usize {
	s.char_indices().nth(char_index).map(|(b, _)| b).unwrap_or(s.len())
}

fn byte_to_char_index(s: &str, byte_offset: usize) -> usize {
	s[..byte_offset].chars().count()
}

/// `slice`/`substring`-style range extraction by character index.
pub fn slice(obj: &Object, start: usize, end: usize) -> Object {
	let s = value_of(obj);
	let len = s.chars().count();
	let start = start.min(len);
	let end = end.min(len).max(start);
	let byte_start = char_index_to_byte_offset(s, start);
	let byte_end = char_index_to_byte_offset(s, end);
	new_string(&s[byte_start..byte_end])
}

/// `replace` against a compiled pattern. Supports the placeholder grammar:
/// `$$` (literal `$`), `$&`/`$0` (whole match), `$1`-`$99` (numbered
/// group), `` $` `` (prefix), `$'` (suffix). Replaces only the first match
/// unless `global` is set.
pub fn replace(obj: &Object, pattern: &Regex, replacement: &str, global: bool) -> Object {
	let input = value_of(obj).to_string();
	let mut out = String::new();
	let mut last_end = 0;

	for caps in pattern.captures_iter(&input) {
		let whole = caps.get(0).unwrap();
		out.push_str(&input[last_end..whole.start()]);
		out.push_str(&expand_replacement(replacement, &caps, &input, whole.start(), whole.end()));
		last_end = whole.end();
		if !global {
			break;
		}
	}
	out.push_str(&input[last_end..]);
	new_string(out)
}

fn expand_replacement(template: &str, caps: &regex::Captures, input: &str, match_start: usize, match_end: usize) -> String {
	let mut out = String::new();
	let mut chars = template.chars().peekable();
	while let Some(c) = chars.next() {
		if c != '$' {
			out.push(c);
			continue;
		}
		match chars.peek() {
			Some('$') => {
				chars.next();
				out.push('$');
			}
			Some('&') => {
				chars.next();
				out.push_str(&input[match_start..match_end]);
			}
			Some('`') => {
				chars.next();
				out.push_str(&input[..match_start]);
			}
			Some('\'') => {
				chars.next();
				out.push_str(&input[match_end..]);
			}
			Some(d) if d.is_ascii_digit() => {
				let mut num = String::new();
				while let Some(d) = chars.peek() {
					if d.is_ascii_digit() && num.len() < 2 {
						num.push(*d);
						chars.next();
					} else {
						break;
					}
				}
				let group_index: usize = num.parse().unwrap_or(0);
				if let Some(m) = caps.get(group_index) {
					out.push_str(m.as_str());
				}
			}
			_ => out.push('$'),
		}
	}
	out
}

/// `split` against a compiled pattern. A pattern that matches empty at the
/// current scan position does not emit an empty slice there (the
/// ECMA-262 empty-match rule).
pub fn split(obj: &Object, pattern: &Regex) -> Vec<Object> {
	let input = value_of(obj).to_string();
	let mut parts = Vec::new();
	let mut last_end = 0;

	for m in pattern.find_iter(&input) {
		if m.start() == m.end() && m.start() == last_end {
			continue;
		}
		parts.push(new_string(&input[last_end..m.start()]));
		last_end = m.end();
	}
	parts.push(new_string(&input[last_end..]));
	parts
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_and_ascii_strings_are_cached() {
		assert!(Object::ptr_eq(&new_string(""), &new_string("")));
		assert!(Object::ptr_eq(&new_string("a"), &new_string("a")));
	}

	#[test]
	fn char_at_and_char_code_at() {
		let s = new_string("abc");
		assert_eq!(char_at(&s, 1), "b");
		assert_eq!(char_code_at(&s, 1), 98.0);
		assert!(char_code_at(&s, 10).is_nan());
	}

	#[test]
	fn index_of_nan_start_clamps_to_zero() {
		let s = new_string("banana");
		assert_eq!(index_of(&s, "a", f64::NAN), 1);
	}

	#[test]
	fn replace_with_named_and_numeric_groups() {
		let re = Regex::new(r"(a)(b)c").unwrap();
		let s = new_string("abcabc");
		let result = replace(&s, &re, "$1[$2]", true);
		assert_eq!(value_of(&result), "a[b]a[b]");
	}

	#[test]
	fn split_skips_empty_match_at_scan_position() {
		let re = Regex::new(r"(?=b)").unwrap();
		let s = new_string("abc");
		let parts = split(&s, &re);
		let strs: Vec<&str> = parts.iter().map(value_of).collect();
		assert_eq!(strs, vec!["a", "bc"]);
	}
}
