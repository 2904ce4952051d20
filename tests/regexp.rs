/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use regex::Regex;

use avm2_object_model::object::Payload;
use avm2_object_model::primitives::{new_string, replace, split};
use avm2_object_model::regexp::{RegExpFlags, RegExpState};

fn as_str(obj: &avm2_object_model::Object) -> String {
	match obj.payload() {
		Payload::Str(s) => s.to_string(),
		_ => panic!("expected a boxed string"),
	}
}

#[test]
fn replace_with_named_and_numeric_groups() {
	let pattern = Regex::new(r"(?P<x>a)(b)c").unwrap();
	let s = new_string("abcabc");
	let result = replace(&s, &pattern, "$1[$2]", true);
	assert_eq!(as_str(&result), "a[b]a[b]");
}

#[test]
fn split_skips_empty_match_at_scan_position() {
	let pattern = Regex::new(r"(?=b)").unwrap();
	let s = new_string("abc");
	let parts = split(&s, &pattern);
	let strs: Vec<String> = parts.iter().map(as_str).collect();
	assert_eq!(strs, vec!["a".to_string(), "bc".to_string()]);
}

#[test]
fn global_last_index_advances_then_resets_on_failure() {
	let mut re = RegExpState::new("a", RegExpFlags::GLOBAL).unwrap();
	// "banana" has three 'a's (at indices 1, 3, 5); the fourth scan exhausts them.
	assert!(re.test("banana"));
	let first = re.last_index;
	assert!(first > 0);
	assert!(re.test("banana"));
	assert!(re.last_index > first);
	assert!(re.test("banana"));

	assert!(!re.test("banana"));
	assert_eq!(re.last_index, 0);
}

#[test]
fn non_global_regexp_never_touches_last_index() {
	let mut re = RegExpState::new("a", RegExpFlags::empty()).unwrap();
	re.test("banana");
	assert_eq!(re.last_index, 0);
	re.test("banana");
	assert_eq!(re.last_index, 0);
}
