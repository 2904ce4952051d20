/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Process-wide singleton [`Class`] descriptors for the built-in, non-user
//! classes this crate constructs objects of. A full runtime's class
//! registry (out of scope here) would own these instead.

use std::sync::{Arc, OnceLock};

use crate::class::{Class, ClassTag, IndexPropertySet};
use crate::qname::QName;

macro_rules! builtin_class {
	($fn_name:ident, $name:literal, $tag:expr, $dynamic:expr) => {
		pub fn $fn_name() -> Arc<Class> {
			static CLASS: OnceLock<Arc<Class>> = OnceLock::new();
			CLASS.get_or_init(|| Arc::new(Class::new(QName::public($name), $tag, $dynamic))).clone()
		}
	};
}

builtin_class!(int_class, "int", ClassTag::Int, false);
builtin_class!(uint_class, "uint", ClassTag::Uint, false);
builtin_class!(number_class, "Number", ClassTag::Number, false);
builtin_class!(string_class, "String", ClassTag::String, false);
builtin_class!(boolean_class, "Boolean", ClassTag::Boolean, false);
builtin_class!(regexp_class, "RegExp", ClassTag::RegExp, false);
builtin_class!(object_class, "Object", ClassTag::Object, true);
builtin_class!(qname_class, "QName", ClassTag::QName, false);

/// Unlike the other builtins, `Array` and `Vector` declare an
/// index-property capability so the object-key binding forms' integer
/// fast path knows to route int/uint/number keys at them.
pub fn array_class() -> Arc<Class> {
	static CLASS: OnceLock<Arc<Class>> = OnceLock::new();
	CLASS.get_or_init(|| Arc::new(Class::new(QName::public("Array"), ClassTag::Array, true).with_class_specials(IndexPropertySet::all()))).clone()
}

pub fn vector_class() -> Arc<Class> {
	static CLASS: OnceLock<Arc<Class>> = OnceLock::new();
	CLASS.get_or_init(|| Arc::new(Class::new(QName::public("Vector"), ClassTag::Vector, false).with_class_specials(IndexPropertySet::all()))).clone()
}
