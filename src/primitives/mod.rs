/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Primitive box classes: `int`, `uint`, `Number`, `String`, `Boolean`.
//! Each wraps a [`crate::object::Object`] carrying the matching
//! [`crate::object::Payload`] variant and exposes the AS3 instance
//! methods the spec names in its primitive-box-surface section.

mod boolean;
mod int;
mod number;
mod string;
mod uint;

pub use boolean::new_boolean;
pub use int::new_int;
pub use number::new_number;
pub use string::new_string;
pub use uint::new_uint;

pub use string::{char_at, char_code_at, concat, replace, split};
