/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Tunable constants. Splits the knobs an embedder might reasonably want to
//! override away from the fixed algorithms in [`crate::object`] and
//! [`crate::convert`], the way the teacher splits per-call state from
//! shared configuration between `Context` and `ContextInner`.

#[derive(Clone, Copy, Debug)]
pub struct Limits {
	/// Integers in `[-int_cache_bound, int_cache_bound]` share a boxed instance.
	pub int_cache_bound: i32,
	/// Unsigned integers in `[0, uint_cache_bound]` share a boxed instance.
	pub uint_cache_bound: u32,
	/// Prototype-chain walks (lookup and `for-in`) stop after this many hops,
	/// guarding against a user-introduced cycle in `proto`.
	pub max_prototype_depth: u32,
}

impl Default for Limits {
	fn default() -> Limits {
		Limits { int_cache_bound: 128, uint_cache_bound: 256, max_prototype_depth: 1024 }
	}
}
