/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The per-instance dynamic property table: an insertion-ordered string
//! keyed map, as found on every object whose class is `dynamic`.

use indexmap::IndexMap;

use crate::value::Any;

#[derive(Clone, Debug)]
struct Entry {
	value: Any,
	enumerable: bool,
}

/// Insertion-ordered `string -> value` map. Indices are stable across
/// updates; deleting an entry leaves a tombstone rather than renumbering.
#[derive(Clone, Debug, Default)]
pub struct PropertyTable {
	entries: IndexMap<String, Entry>,
}

impl PropertyTable {
	pub fn new() -> PropertyTable {
		PropertyTable::default()
	}

	pub fn get_index(&self, key: &str) -> i32 {
		self.entries.get_index_of(key).map(|i| i as i32).unwrap_or(-1)
	}

	pub fn try_get_value(&self, key: &str) -> Option<Any> {
		self.entries.get(key).map(|e| e.value.clone())
	}

	/// Sets `key` to `value`. Updating an existing key preserves its
	/// insertion index; a new key defaults to enumerable.
	pub fn set(&mut self, key: impl Into<String>, value: Any) {
		let key = key.into();
		match self.entries.get_mut(&key) {
			Some(entry) => entry.value = value,
			None => {
				self.entries.insert(key, Entry { value, enumerable: true });
			}
		}
	}

	pub fn delete(&mut self, key: &str) -> bool {
		self.entries.shift_remove(key).is_some()
	}

	pub fn has(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn is_enumerable(&self, key: &str) -> bool {
		self.entries.get(key).map(|e| e.enumerable).unwrap_or(false)
	}

	pub fn set_enumerable(&mut self, key: &str, enumerable: bool) {
		if let Some(entry) = self.entries.get_mut(key) {
			entry.enumerable = enumerable;
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the one-based index of the next enumerable entry strictly
	/// after `after` (0 to start from the beginning), or 0 when exhausted —
	/// matching the `has_next_2`-style cursor contract used for `for-in`.
	pub fn next_enumerable_index_after(&self, after: i32) -> i32 {
		let start = if after < 0 { 0 } else { after as usize };
		for (i, (_, entry)) in self.entries.iter().enumerate().skip(start) {
			if entry.enumerable {
				return (i + 1) as i32;
			}
		}
		0
	}

	pub fn name_at(&self, one_based_index: i32) -> Option<&str> {
		if one_based_index <= 0 {
			return None;
		}
		self.entries.get_index((one_based_index - 1) as usize).map(|(k, _)| k.as_str())
	}

	pub fn value_at(&self, one_based_index: i32) -> Option<Any> {
		if one_based_index <= 0 {
			return None;
		}
		self.entries.get_index((one_based_index - 1) as usize).map(|(_, e)| e.value.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Any;

	#[test]
	fn insertion_order_preserved_across_update() {
		let mut table = PropertyTable::new();
		table.set("a", Any::undefined());
		table.set("b", Any::undefined());
		table.set("a", Any::null());
		assert_eq!(table.name_at(1), Some("a"));
		assert_eq!(table.name_at(2), Some("b"));
	}

	#[test]
	fn delete_does_not_renumber_preceding_entries() {
		let mut table = PropertyTable::new();
		table.set("a", Any::undefined());
		table.set("b", Any::undefined());
		table.set("c", Any::undefined());
		assert!(table.delete("b"));
		assert_eq!(table.name_at(1), Some("a"));
		assert_eq!(table.name_at(2), Some("c"));
	}

	#[test]
	fn enumeration_cursor_terminates() {
		let mut table = PropertyTable::new();
		table.set("a", Any::undefined());
		table.set("b", Any::undefined());
		let mut idx = 0;
		let mut seen = Vec::new();
		loop {
			idx = table.next_enumerable_index_after(idx);
			if idx == 0 {
				break;
			}
			seen.push(table.name_at(idx).unwrap().to_string());
		}
		assert_eq!(seen, vec!["a", "b"]);
	}
}
