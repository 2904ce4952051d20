/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Class descriptors and the declared-trait lookup they expose.
//!
//! A [`Class`] is the static half of every object's identity; the dynamic
//! half (per-instance properties) lives in [`crate::props::PropertyTable`]
//! and is only reachable through [`crate::object::Object`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use bitflags::bitflags;

use crate::error::Result;
use crate::object::Object;
use crate::qname::{NamespaceSet, QName};
use crate::value::Any;

/// Outcome of a trait lookup or a binding-core operation. `NotFound` and
/// `Ambiguous` are expected, non-exceptional results that callers translate
/// into the appropriate user-visible error only when they choose to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
	NotFound,
	Success,
	/// A dynamic lookup through a table or prototype chain came up empty,
	/// but that is legal AS3 (the property is simply `undefined`).
	SoftSuccess,
	/// The same local name resolved in two or more namespaces of the set.
	Ambiguous,
	FailedNotFunction,
	FailedNotConstructor,
	FailedCreateDynamicNonPublic,
	FailedDescendantOp,
}

impl Status {
	pub fn is_success(self) -> bool {
		matches!(self, Status::Success | Status::SoftSuccess)
	}
}

/// Runtime tag identifying the concrete shape of an object, used to drive
/// operator dispatch (§4.5/§4.6) without a downcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassTag {
	Object,
	Int,
	Uint,
	Number,
	String,
	Boolean,
	Function,
	Array,
	Vector,
	RegExp,
	QName,
	Namespace,
	Xml,
	XmlList,
	Date,
	Error,
}

bitflags! {
	#[derive(Clone, Copy, Debug, PartialEq, Eq)]
	pub struct ClassTagSet: u32 {
		const OBJECT    = 1 << 0;
		const INT       = 1 << 1;
		const UINT      = 1 << 2;
		const NUMBER    = 1 << 3;
		const STRING    = 1 << 4;
		const BOOLEAN   = 1 << 5;
		const FUNCTION  = 1 << 6;
		const ARRAY     = 1 << 7;
		const VECTOR    = 1 << 8;
		const REGEXP    = 1 << 9;
		const QNAME     = 1 << 10;
		const NAMESPACE = 1 << 11;
		const XML       = 1 << 12;
		const XML_LIST  = 1 << 13;
		const DATE      = 1 << 14;
		const ERROR     = 1 << 15;
	}
}

impl ClassTagSet {
	pub fn of(tag: ClassTag) -> ClassTagSet {
		match tag {
			ClassTag::Object => ClassTagSet::OBJECT,
			ClassTag::Int => ClassTagSet::INT,
			ClassTag::Uint => ClassTagSet::UINT,
			ClassTag::Number => ClassTagSet::NUMBER,
			ClassTag::String => ClassTagSet::STRING,
			ClassTag::Boolean => ClassTagSet::BOOLEAN,
			ClassTag::Function => ClassTagSet::FUNCTION,
			ClassTag::Array => ClassTagSet::ARRAY,
			ClassTag::Vector => ClassTagSet::VECTOR,
			ClassTag::RegExp => ClassTagSet::REGEXP,
			ClassTag::QName => ClassTagSet::QNAME,
			ClassTag::Namespace => ClassTagSet::NAMESPACE,
			ClassTag::Xml => ClassTagSet::XML,
			ClassTag::XmlList => ClassTagSet::XML_LIST,
			ClassTag::Date => ClassTagSet::DATE,
			ClassTag::Error => ClassTagSet::ERROR,
		}
	}

	pub fn contains_tag(&self, tag: ClassTag) -> bool {
		self.contains(ClassTagSet::of(tag))
	}

	pub fn numeric() -> ClassTagSet {
		ClassTagSet::INT | ClassTagSet::UINT | ClassTagSet::NUMBER
	}

	pub fn numeric_or_bool() -> ClassTagSet {
		ClassTagSet::numeric() | ClassTagSet::BOOLEAN
	}

	pub fn primitive() -> ClassTagSet {
		ClassTagSet::numeric_or_bool() | ClassTagSet::STRING
	}

	pub fn string_or_date() -> ClassTagSet {
		ClassTagSet::STRING | ClassTagSet::DATE
	}

	pub fn xml_or_xml_list() -> ClassTagSet {
		ClassTagSet::XML | ClassTagSet::XML_LIST
	}

	pub fn array_like() -> ClassTagSet {
		ClassTagSet::ARRAY | ClassTagSet::VECTOR
	}

	pub fn integer() -> ClassTagSet {
		ClassTagSet::INT | ClassTagSet::UINT
	}

	pub fn is_single(&self, tag: ClassTag) -> bool {
		*self == ClassTagSet::of(tag)
	}
}

bitflags! {
	/// Which key tags a class's object-key binding forms (`get_obj` and
	/// friends) will route through the integer-index fast path instead of
	/// the string/QName dynamic-property path.
	#[derive(Clone, Copy, Debug, PartialEq, Eq)]
	pub struct IndexPropertySet: u32 {
		const INT    = 1 << 0;
		const UINT   = 1 << 1;
		const NUMBER = 1 << 2;
	}
}

impl IndexPropertySet {
	pub fn all() -> IndexPropertySet {
		IndexPropertySet::INT | IndexPropertySet::UINT | IndexPropertySet::NUMBER
	}
}

/// A declared class member. Implementors back slots, methods, and virtual
/// accessors; `Class::lookup_trait` hands the resolved instance to the
/// binding core, which never needs to know which kind it got.
pub trait TraitObject: fmt::Debug + Send + Sync {
	fn try_get(&self, receiver: &Object) -> (Status, Any);

	fn try_set(&self, receiver: &Object, value: Any) -> Status;

	fn try_invoke(&self, receiver: &Object, stored_receiver: Option<&Object>, args: &[Any]) -> Result<(Status, Any)>;

	fn try_construct(&self, receiver: &Object, args: &[Any]) -> Result<(Status, Any)>;
}

/// Static descriptor shared by every instance of a class. Cheap to clone
/// (an `Arc`); publication is a single release/acquire fence handled by
/// whichever registry owns class construction (out of scope here).
#[derive(Debug)]
pub struct Class {
	pub name: QName,
	pub tag: ClassTag,
	pub is_dynamic: bool,
	class_specials: Option<IndexPropertySet>,
	traits: HashMap<(String, String), Arc<dyn TraitObject>>,
	prototype: OnceLock<Object>,
}

impl Class {
	pub fn new(name: QName, tag: ClassTag, is_dynamic: bool) -> Class {
		Class { name, tag, is_dynamic, class_specials: None, traits: HashMap::new(), prototype: OnceLock::new() }
	}

	pub fn with_traits(mut self, traits: HashMap<(String, String), Arc<dyn TraitObject>>) -> Class {
		self.traits = traits;
		self
	}

	/// Declares the class's index-property capability: which key tags
	/// (int/uint/number) its instances accept on the integer-index fast
	/// path of the object-key binding forms.
	pub fn with_class_specials(mut self, specials: IndexPropertySet) -> Class {
		self.class_specials = Some(specials);
		self
	}

	pub fn class_specials(&self) -> Option<IndexPropertySet> {
		self.class_specials
	}

	pub fn define_trait(&mut self, namespace_uri: impl Into<String>, local_name: impl Into<String>, member: Arc<dyn TraitObject>) {
		self.traits.insert((namespace_uri.into(), local_name.into()), member);
	}

	/// Binds the class's prototype object. Must be called exactly once,
	/// after both the class and its prototype object have been allocated
	/// (the two reference each other, so neither can be built in one step).
	pub fn bind_prototype(&self, proto: Object) {
		let _ = self.prototype.set(proto);
	}

	pub fn prototype(&self) -> Option<&Object> {
		self.prototype.get()
	}

	/// Resolves `local_name` against every namespace in `namespaces`,
	/// honoring the spec's multi-namespace ambiguity rule: if two distinct
	/// namespaces in the set both resolve the name to *different* traits,
	/// the lookup is ambiguous rather than picking one arbitrarily.
	pub fn lookup_trait(&self, local_name: &str, namespaces: &NamespaceSet, attribute: bool) -> (Status, Option<Arc<dyn TraitObject>>) {
		if attribute || namespaces.is_empty() {
			return (Status::NotFound, None);
		}

		let mut found: Option<Arc<dyn TraitObject>> = None;
		for ns in namespaces.iter() {
			use crate::qname::NamespaceKind;
			if ns.kind == NamespaceKind::Any {
				continue;
			}
			if let Some(member) = self.traits.get(&(ns.uri.clone(), local_name.to_string())) {
				match &found {
					None => found = Some(member.clone()),
					Some(existing) if !Arc::ptr_eq(existing, member) => return (Status::Ambiguous, None),
					Some(_) => {}
				}
			}
		}

		match found {
			Some(member) => (Status::Success, Some(member)),
			None => (Status::NotFound, None),
		}
	}

	pub fn lookup_qname(&self, name: &QName, attribute: bool) -> (Status, Option<Arc<dyn TraitObject>>) {
		if attribute || matches!(name.namespace.kind, crate::qname::NamespaceKind::Any) {
			return (Status::NotFound, None);
		}
		match self.traits.get(&(name.namespace.uri.clone(), name.local_name.clone())) {
			Some(member) => (Status::Success, Some(member.clone())),
			None => (Status::NotFound, None),
		}
	}
}
