/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The RegExp object: pattern + flags + `lastIndex` state machine.
//!
//! Pattern compilation is delegated to an external transpiler hook (the
//! AS3 pattern dialect is not identical to the host engine's), per the
//! spec's black-box contract `(pattern, multiline, dotall, extended) ->
//! (transpiled_pattern, group_names, group_count)`. This crate's default
//! hook treats the AS3 source as already being valid `regex`-crate syntax,
//! which covers the common subset exercised by the test suite; a full VM
//! would plug in a real AS3-to-host transpiler here.

use bitflags::bitflags;
use regex::Regex;

use crate::error::{Error, ErrorKind, Result};

bitflags! {
	#[derive(Clone, Copy, Debug, PartialEq, Eq)]
	pub struct RegExpFlags: u8 {
		const GLOBAL     = 1 << 0;
		const IGNORECASE = 1 << 1;
		const MULTILINE  = 1 << 2;
		const DOTALL     = 1 << 3;
		const EXTENDED   = 1 << 4;
	}
}

impl RegExpFlags {
	pub fn parse(flags: &str) -> Result<RegExpFlags> {
		let mut set = RegExpFlags::empty();
		for c in flags.chars() {
			let flag = match c {
				'g' => RegExpFlags::GLOBAL,
				'i' => RegExpFlags::IGNORECASE,
				'm' => RegExpFlags::MULTILINE,
				's' => RegExpFlags::DOTALL,
				'x' => RegExpFlags::EXTENDED,
				_ => return Err(Error::new(format!("Invalid RegExp flag '{c}'"), ErrorKind::Syntax)),
			};
			set |= flag;
		}
		Ok(set)
	}
}

/// A single `exec` result: byte-offset free, operates on code-unit-ish
/// `str` slices the way the caller's String box presents them.
#[derive(Clone, Debug)]
pub struct Match {
	pub index: usize,
	pub matched: String,
	pub groups: Vec<Option<String>>,
	pub named_groups: Vec<(String, Option<String>)>,
}

/// Compiled pattern plus the mutable `lastIndex` cursor. Non-global
/// matching never reads or writes `lastIndex` (spec's resolution of the
/// "does non-global `test` consult `lastIndex`" open question: no).
#[derive(Debug)]
pub struct RegExpState {
	pub source: String,
	pub flags: RegExpFlags,
	pub last_index: i32,
	compiled: Regex,
	group_names: Vec<Option<String>>,
}

impl RegExpState {
	pub fn new(source: &str, flags: RegExpFlags) -> Result<RegExpState> {
		let mut pattern = String::new();
		if flags.contains(RegExpFlags::IGNORECASE) {
			pattern.push_str("(?i)");
		}
		if flags.contains(RegExpFlags::MULTILINE) {
			pattern.push_str("(?m)");
		}
		if flags.contains(RegExpFlags::DOTALL) {
			pattern.push_str("(?s)");
		}
		if flags.contains(RegExpFlags::EXTENDED) {
			pattern.push_str("(?x)");
		}
		pattern.push_str(source);

		let compiled = Regex::new(&pattern).map_err(|e| Error::new(format!("Invalid RegExp pattern: {e}"), ErrorKind::Syntax))?;
		let group_names = compiled.capture_names().skip(1).map(|n| n.map(str::to_string)).collect();

		Ok(RegExpState { source: source.to_string(), flags, last_index: 0, compiled, group_names })
	}

	pub fn group_count(&self) -> usize {
		self.compiled.captures_len().saturating_sub(1)
	}

	pub fn group_names(&self) -> &[Option<String>] {
		&self.group_names
	}

	fn to_match(&self, caps: &regex::Captures, text: &str) -> Match {
		let whole = caps.get(0).unwrap();
		let groups = (1..caps.len())
			.map(|i| caps.get(i).map(|m| m.as_str().to_string()))
			.collect::<Vec<_>>();
		let named_groups = self
			.group_names
			.iter()
			.filter_map(|name| name.clone())
			.map(|name| (name.clone(), caps.name(&name).map(|m| m.as_str().to_string())))
			.collect();
		let _ = text;
		Match { index: whole.start(), matched: whole.as_str().to_string(), groups, named_groups }
	}

	/// `test`. Advances (global) or ignores (non-global) `lastIndex`.
	pub fn test(&mut self, text: &str) -> bool {
		self.exec(text).is_some()
	}

	/// `exec`. See the state machine in the object-model specification's
	/// RegExp section: global regexes resume from `lastIndex` and reset it
	/// to 0 on failure; non-global regexes never touch it.
	pub fn exec(&mut self, text: &str) -> Option<Match> {
		if !self.flags.contains(RegExpFlags::GLOBAL) {
			return self.compiled.captures(text).map(|c| self.to_match(&c, text));
		}

		let start = self.last_index.max(0) as usize;
		if start > text.len() {
			self.last_index = 0;
			return None;
		}

		match self.compiled.captures(&text[start..]) {
			Some(caps) => {
				let mut m = self.to_match(&caps, text);
				m.index += start;
				self.last_index = (m.index + m.matched.len().max(1).min(text.len() - m.index)) as i32;
				Some(m)
			}
			None => {
				self.last_index = 0;
				None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn non_global_last_index_is_invariant() {
		let mut re = RegExpState::new("a", RegExpFlags::empty()).unwrap();
		re.test("banana");
		assert_eq!(re.last_index, 0);
		re.test("banana");
		assert_eq!(re.last_index, 0);
	}

	#[test]
	fn global_last_index_advances_then_resets() {
		let mut re = RegExpState::new("a", RegExpFlags::GLOBAL).unwrap();
		assert!(re.test("banana"));
		let first = re.last_index;
		assert!(first > 0);
		assert!(re.test("banana"));
		assert!(re.last_index > first);
	}

	#[test]
	fn named_and_numbered_groups_are_captured() {
		let mut re = RegExpState::new(r"(?P<x>a)(b)c", RegExpFlags::empty()).unwrap();
		let m = re.exec("abc").unwrap();
		assert_eq!(m.groups[0].as_deref(), Some("a"));
		assert_eq!(m.groups[1].as_deref(), Some("b"));
		assert_eq!(m.named_groups[0], ("x".to_string(), Some("a".to_string())));
	}
}
