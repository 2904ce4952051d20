/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The base object and its binding core: the `has`/`get`/`set`/`call`/
//! `construct`/`delete`/`descendants` verb set, resolved over the class's
//! declared traits, the per-instance dynamic table, and the prototype
//! chain, per `BindOptions`.
//!
//! Unlike the teacher's `Object`, which wraps a raw `*mut JSObject` whose
//! class descriptor lives in a side table reachable only through the host
//! engine, every `Object` here is constructed with its `Class` already in
//! hand — there is no FFI boundary forcing that lookup to be deferred.
//! Only `proto` genuinely benefits from the spec's lazy-init treatment
//! (classes may still be mid-bootstrap when an instance is created), so
//! that is what the per-object `OnceLock` actually guards.

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::trace;

use crate::class::{Class, ClassTag, IndexPropertySet, Status};
use crate::convert;
use crate::error::Result;
use crate::limits::Limits;
use crate::props::PropertyTable;
use crate::qname::{NamespaceSet, QName};
use crate::regexp::RegExpState;
use crate::value::Any;
use crate::vector::VectorState;

bitflags::bitflags! {
	#[derive(Clone, Copy, Debug, PartialEq, Eq)]
	pub struct BindOptions: u32 {
		const SEARCH_TRAITS    = 1 << 0;
		const SEARCH_PROTOTYPE = 1 << 1;
		const SEARCH_DYNAMIC   = 1 << 2;
		const ATTRIBUTE        = 1 << 3;
		const RUNTIME_NAME     = 1 << 4;
		const NULL_RECEIVER    = 1 << 5;
	}
}

impl BindOptions {
	/// Default flags for `has`/`get`/`call`/`construct`/`descendants`.
	pub fn read() -> BindOptions {
		BindOptions::SEARCH_TRAITS | BindOptions::SEARCH_PROTOTYPE | BindOptions::SEARCH_DYNAMIC
	}

	/// Default flags for `set`/`delete`.
	pub fn write() -> BindOptions {
		BindOptions::SEARCH_TRAITS | BindOptions::SEARCH_DYNAMIC
	}
}

/// A native, callable backing for `Payload::Function`. `receiver` is
/// `None` when the call was made with `NULL_RECEIVER`.
pub trait NativeFunction: fmt::Debug + Send + Sync {
	fn call(&self, receiver: Option<&Object>, args: &[Any]) -> Result<Any>;
	fn construct(&self, args: &[Any]) -> Result<Any>;
}

/// The concrete shape backing an object, used by operator dispatch and by
/// the enumeration cursor to pick a data source without a downcast.
#[derive(Debug)]
pub enum Payload {
	Generic,
	Int(i32),
	Uint(u32),
	Number(f64),
	Str(Arc<str>),
	Boolean(bool),
	Array(Mutex<Vec<Any>>),
	Vector(Mutex<VectorState>),
	RegExp(Mutex<RegExpState>),
	Function(Arc<dyn NativeFunction>),
	QName(QName),
}

impl Payload {
	fn is_index_bearing(&self) -> bool {
		matches!(self, Payload::Array(_) | Payload::Vector(_))
	}
}

/// Where an object-key binding form's key resolves to, per `resolve_obj_key`.
enum ObjKey {
	Index(u32),
	QName(QName),
	Name(String),
}

struct ObjectCore {
	proto: Option<Object>,
	dyn_props: Option<Mutex<PropertyTable>>,
}

struct ObjectData {
	class: Arc<Class>,
	payload: Payload,
	core: OnceLock<ObjectCore>,
}

impl fmt::Debug for ObjectData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Object").field("class", &self.class.name).field("payload", &self.payload).finish()
	}
}

#[derive(Clone, Debug)]
pub struct Object(Arc<ObjectData>);

impl Object {
	pub fn new(class: Arc<Class>, payload: Payload) -> Object {
		Object(Arc::new(ObjectData { class, payload, core: OnceLock::new() }))
	}

	/// Constructs an object with an explicit prototype, bypassing the
	/// default "inherit the class's prototype" resolution. Used to wire up
	/// a user-assigned `__proto__` at construction time.
	pub fn new_with_proto(class: Arc<Class>, payload: Payload, proto: Option<Object>) -> Object {
		let obj = Object(Arc::new(ObjectData { class, payload, core: OnceLock::new() }));
		let dyn_props = obj.fresh_dyn_props();
		let _ = obj.0.core.set(ObjectCore { proto, dyn_props });
		obj
	}

	fn fresh_dyn_props(&self) -> Option<Mutex<PropertyTable>> {
		self.0.class.is_dynamic.then(|| Mutex::new(PropertyTable::new()))
	}

	fn core(&self) -> &ObjectCore {
		self.0.core.get_or_init(|| {
			let proto = self.0.class.prototype().cloned();
			let dyn_props = self.fresh_dyn_props();
			ObjectCore { proto, dyn_props }
		})
	}

	pub fn class(&self) -> &Arc<Class> {
		&self.0.class
	}

	pub fn payload(&self) -> &Payload {
		&self.0.payload
	}

	pub fn proto(&self) -> Option<Object> {
		self.core().proto.clone()
	}

	pub fn ptr_eq(a: &Object, b: &Object) -> bool {
		Arc::ptr_eq(&a.0, &b.0)
	}

	fn dyn_table_lookup(&self, key: &str) -> Option<Any> {
		self.core().dyn_props.as_ref().and_then(|t| t.lock().unwrap().try_get_value(key))
	}

	/// Walks `self`, then `self.proto`, `self.proto.proto`, ... looking for
	/// `key` in each object's dynamic table, skipping objects whose class
	/// isn't dynamic. Bounded by `limits.max_prototype_depth`.
	fn walk_dynamic_chain(&self, key: &str, include_self: bool, limits: &Limits) -> Option<Any> {
		let mut current = if include_self { Some(self.clone()) } else { self.proto() };
		let mut depth = 0;
		while let Some(obj) = current {
			if depth >= limits.max_prototype_depth {
				break;
			}
			if let Some(value) = obj.dyn_table_lookup(key) {
				return Some(value);
			}
			current = obj.proto();
			depth += 1;
		}
		None
	}

	/// GET, QName form. See the resolution algorithm in the object-model
	/// specification's binding-core section.
	pub fn get_property(&self, name: &QName, opts: BindOptions, limits: &Limits) -> (Status, Any) {
		if matches!(name.namespace.kind, crate::qname::NamespaceKind::Any) || opts.contains(BindOptions::ATTRIBUTE) {
			return (Status::NotFound, Any::undefined());
		}

		if opts.contains(BindOptions::SEARCH_TRAITS) {
			let (status, member) = self.0.class.lookup_qname(name, false);
			match status {
				Status::Success => {
					trace!(name = %name, "trait hit on get");
					return member.unwrap().try_get(self);
				}
				Status::Ambiguous => return (Status::Ambiguous, Any::undefined()),
				Status::NotFound => {}
				_ => unreachable!(),
			}
		}

		if name.is_public() {
			let has_dyn = self.core().dyn_props.is_some();
			if opts.contains(BindOptions::SEARCH_DYNAMIC) && has_dyn {
				let value = if opts.contains(BindOptions::SEARCH_PROTOTYPE) {
					self.walk_dynamic_chain(&name.local_name, true, limits)
				} else {
					self.dyn_table_lookup(&name.local_name)
				};
				return match value {
					Some(v) => (Status::Success, v),
					None => (Status::SoftSuccess, Any::undefined()),
				};
			} else if opts.contains(BindOptions::SEARCH_PROTOTYPE) {
				return match self.walk_dynamic_chain(&name.local_name, false, limits) {
					Some(v) => (Status::Success, v),
					None => (Status::NotFound, Any::undefined()),
				};
			}
		}

		(Status::NotFound, Any::undefined())
	}

	pub fn get_property_ns(&self, local_name: &str, namespaces: &NamespaceSet, opts: BindOptions, limits: &Limits) -> (Status, Any) {
		if opts.contains(BindOptions::ATTRIBUTE) {
			return (Status::NotFound, Any::undefined());
		}
		if opts.contains(BindOptions::SEARCH_TRAITS) {
			let (status, member) = self.0.class.lookup_trait(local_name, namespaces, false);
			match status {
				Status::Success => return member.unwrap().try_get(self),
				Status::Ambiguous => return (Status::Ambiguous, Any::undefined()),
				Status::NotFound => {}
				_ => unreachable!(),
			}
		}
		if namespaces.contains_public() {
			let qname = QName::public(local_name);
			return self.get_property(&qname, opts & !BindOptions::SEARCH_TRAITS, limits);
		}
		(Status::NotFound, Any::undefined())
	}

	pub fn has_property(&self, name: &QName, opts: BindOptions, limits: &Limits) -> bool {
		self.get_property(name, opts, limits).0.is_success()
	}

	/// SET, QName form. Mirrors `get_property`: creates a dynamic property
	/// when the public-namespace condition holds and `SEARCH_DYNAMIC` is
	/// set; reports `FailedCreateDynamicNonPublic` rather than `NotFound`
	/// when a dynamic create was attempted on a non-public name.
	pub fn set_property(&self, name: &QName, value: Any, opts: BindOptions) -> Status {
		if matches!(name.namespace.kind, crate::qname::NamespaceKind::Any) || opts.contains(BindOptions::ATTRIBUTE) {
			return Status::NotFound;
		}

		if opts.contains(BindOptions::SEARCH_TRAITS) {
			let (status, member) = self.0.class.lookup_qname(name, false);
			match status {
				Status::Success => return member.unwrap().try_set(self, value),
				Status::Ambiguous => return Status::Ambiguous,
				Status::NotFound => {}
				_ => unreachable!(),
			}
		}

		if opts.contains(BindOptions::SEARCH_DYNAMIC) {
			if !name.is_public() {
				return Status::FailedCreateDynamicNonPublic;
			}
			return match &self.core().dyn_props {
				Some(table) => {
					table.lock().unwrap().set(name.local_name.clone(), value);
					Status::Success
				}
				None => Status::NotFound,
			};
		}

		Status::NotFound
	}

	/// DELETE. Only dynamic properties can be removed; traits never are.
	pub fn delete_property(&self, name: &QName) -> bool {
		if !name.is_public() {
			return false;
		}
		match &self.core().dyn_props {
			Some(table) => table.lock().unwrap().delete(&name.local_name),
			None => false,
		}
	}

	fn is_callable(value: &Any) -> bool {
		matches!(value.value().map(|o| o.payload()), Some(Payload::Function(_)))
	}

	pub fn call_property(&self, name: &QName, opts: BindOptions, args: &[Any], limits: &Limits) -> Result<(Status, Any)> {
		let (status, value) = self.get_property(name, opts, limits);
		if status == Status::Ambiguous {
			return Ok((Status::Ambiguous, Any::undefined()));
		}
		if !status.is_success() {
			return Ok((Status::NotFound, Any::undefined()));
		}
		if !Object::is_callable(&value) {
			return Ok((Status::FailedNotFunction, Any::undefined()));
		}
		let func = value.value().unwrap();
		let Payload::Function(f) = func.payload() else { unreachable!() };
		let receiver = if opts.contains(BindOptions::NULL_RECEIVER) { None } else { Some(self) };
		let result = f.call(receiver, args)?;
		Ok((Status::Success, result))
	}

	pub fn construct_property(&self, name: &QName, opts: BindOptions, args: &[Any], limits: &Limits) -> Result<(Status, Any)> {
		let (status, value) = self.get_property(name, opts, limits);
		if status == Status::Ambiguous {
			return Ok((Status::Ambiguous, Any::undefined()));
		}
		if !status.is_success() {
			return Ok((Status::NotFound, Any::undefined()));
		}
		if !Object::is_callable(&value) {
			return Ok((Status::FailedNotConstructor, Any::undefined()));
		}
		let func = value.value().unwrap();
		let Payload::Function(f) = func.payload() else { unreachable!() };
		let result = f.construct(args)?;
		Ok((Status::Success, result))
	}

	/// No XML/XMLList component is in scope here; descendants access
	/// always fails on a plain object.
	pub fn descendants(&self, _name: &QName) -> Status {
		Status::FailedDescendantOp
	}

	fn index_get(&self, index: u32) -> Option<Any> {
		match &self.0.payload {
			Payload::Array(items) => items.lock().unwrap().get(index as usize).cloned(),
			Payload::Vector(_) => crate::vector::get(self, index).ok(),
			_ => None,
		}
	}

	fn index_set(&self, index: u32, value: Any) -> Status {
		match &self.0.payload {
			Payload::Array(items) => {
				let mut guard = items.lock().unwrap();
				if index as usize >= guard.len() {
					guard.resize(index as usize + 1, Any::undefined());
				}
				guard[index as usize] = value;
				Status::Success
			}
			Payload::Vector(_) => match crate::vector::set(self, index, value) {
				Ok(()) => Status::Success,
				Err(_) => Status::NotFound,
			},
			_ => Status::NotFound,
		}
	}

	fn index_delete(&self, index: u32) -> bool {
		match &self.0.payload {
			Payload::Array(items) => match items.lock().unwrap().get_mut(index as usize) {
				Some(slot) => {
					*slot = Any::undefined();
					true
				}
				None => false,
			},
			_ => false,
		}
	}

	/// `ToString`-style coercion of an object key that isn't routed through
	/// the index fast path or a boxed `QName`: the string/QName-form binding
	/// core only ever sees a local name, never the key's own class.
	fn coerce_key_to_string(key: &Any, limits: &Limits) -> String {
		if key.is_undefined() {
			return "undefined".to_string();
		}
		if key.is_null() {
			return "null".to_string();
		}
		let obj = key.value().unwrap();
		match obj.payload() {
			Payload::Str(s) => s.to_string(),
			Payload::Int(i) => i.to_string(),
			Payload::Uint(u) => u.to_string(),
			Payload::Number(n) => convert::format_number(*n),
			Payload::Boolean(b) => b.to_string(),
			_ => match convert::to_primitive(key, convert::Hint::String, limits) {
				Ok(primitive) if !primitive.ref_eq(key) => Object::coerce_key_to_string(&primitive, limits),
				_ => String::new(),
			},
		}
	}

	/// Resolves a value key into the object-key binding forms' dispatch
	/// path: the integer-index fast path when `SEARCH_DYNAMIC` is set,
	/// `ATTRIBUTE` is not, and this class declares index capability for
	/// the key's tag; else a `QName` unwrap; else a string-coerced name.
	fn resolve_obj_key(&self, key: &Any, opts: BindOptions, limits: &Limits) -> ObjKey {
		if opts.contains(BindOptions::SEARCH_DYNAMIC) && !opts.contains(BindOptions::ATTRIBUTE) {
			if let Some(specials) = self.0.class.class_specials() {
				if let Some(tag) = key.value().map(|o| o.class().tag) {
					let allowed = match tag {
						ClassTag::Int => specials.contains(IndexPropertySet::INT),
						ClassTag::Uint => specials.contains(IndexPropertySet::UINT),
						ClassTag::Number => specials.contains(IndexPropertySet::NUMBER),
						_ => false,
					};
					if allowed {
						if let Ok(n) = convert::to_number(key, limits) {
							return ObjKey::Index(convert::to_uint32(n));
						}
					}
				}
			}
		}
		if let Some(obj) = key.value() {
			if let Payload::QName(qn) = obj.payload() {
				return ObjKey::QName(qn.clone());
			}
		}
		ObjKey::Name(Object::coerce_key_to_string(key, limits))
	}

	/// GET, object-key form (§4.4): the public-namespace counterpart to
	/// `get_property` that accepts any value as the key.
	pub fn get_obj(&self, key: &Any, opts: BindOptions, limits: &Limits) -> (Status, Any) {
		match self.resolve_obj_key(key, opts, limits) {
			ObjKey::Index(index) => match self.index_get(index) {
				Some(value) => (Status::Success, value),
				None => (Status::SoftSuccess, Any::undefined()),
			},
			ObjKey::QName(qn) => self.get_property(&qn, opts, limits),
			ObjKey::Name(name) => self.get_property(&QName::public(name), opts, limits),
		}
	}

	/// GET, object-key form searched over an explicit `NamespaceSet`.
	pub fn get_obj_ns(&self, key: &Any, namespaces: &NamespaceSet, opts: BindOptions, limits: &Limits) -> (Status, Any) {
		match self.resolve_obj_key(key, opts, limits) {
			ObjKey::Index(index) => match self.index_get(index) {
				Some(value) => (Status::Success, value),
				None => (Status::SoftSuccess, Any::undefined()),
			},
			ObjKey::QName(qn) => self.get_property(&qn, opts, limits),
			ObjKey::Name(name) => self.get_property_ns(&name, namespaces, opts, limits),
		}
	}

	pub fn has_obj(&self, key: &Any, opts: BindOptions, limits: &Limits) -> bool {
		self.get_obj(key, opts, limits).0.is_success()
	}

	/// SET, object-key form.
	pub fn set_obj(&self, key: &Any, value: Any, opts: BindOptions, limits: &Limits) -> Status {
		match self.resolve_obj_key(key, opts, limits) {
			ObjKey::Index(index) => self.index_set(index, value),
			ObjKey::QName(qn) => self.set_property(&qn, value, opts),
			ObjKey::Name(name) => self.set_property(&QName::public(name), value, opts),
		}
	}

	/// DELETE, object-key form.
	pub fn delete_obj(&self, key: &Any, opts: BindOptions, limits: &Limits) -> bool {
		match self.resolve_obj_key(key, opts, limits) {
			ObjKey::Index(index) => self.index_delete(index),
			ObjKey::QName(qn) => self.delete_property(&qn),
			ObjKey::Name(name) => self.delete_property(&QName::public(name)),
		}
	}

	/// CALL, object-key form.
	pub fn call_obj(&self, key: &Any, opts: BindOptions, args: &[Any], limits: &Limits) -> Result<(Status, Any)> {
		match self.resolve_obj_key(key, opts, limits) {
			ObjKey::Index(index) => match self.index_get(index) {
				Some(value) if Object::is_callable(&value) => {
					let func = value.value().unwrap();
					let Payload::Function(f) = func.payload() else { unreachable!() };
					let receiver = if opts.contains(BindOptions::NULL_RECEIVER) { None } else { Some(self) };
					Ok((Status::Success, f.call(receiver, args)?))
				}
				Some(_) => Ok((Status::FailedNotFunction, Any::undefined())),
				None => Ok((Status::NotFound, Any::undefined())),
			},
			ObjKey::QName(qn) => self.call_property(&qn, opts, args, limits),
			ObjKey::Name(name) => self.call_property(&QName::public(name), opts, args, limits),
		}
	}

	/// CONSTRUCT, object-key form.
	pub fn construct_obj(&self, key: &Any, opts: BindOptions, args: &[Any], limits: &Limits) -> Result<(Status, Any)> {
		match self.resolve_obj_key(key, opts, limits) {
			ObjKey::Index(index) => match self.index_get(index) {
				Some(value) if Object::is_callable(&value) => {
					let func = value.value().unwrap();
					let Payload::Function(f) = func.payload() else { unreachable!() };
					Ok((Status::Success, f.construct(args)?))
				}
				Some(_) => Ok((Status::FailedNotConstructor, Any::undefined())),
				None => Ok((Status::NotFound, Any::undefined())),
			},
			ObjKey::QName(qn) => self.construct_property(&qn, opts, args, limits),
			ObjKey::Name(name) => self.construct_property(&QName::public(name), opts, args, limits),
		}
	}

	/// DESCENDANTS, object-key form. As with the QName form, always fails:
	/// no XML/XMLList component is in scope here.
	pub fn descendants_obj(&self, _key: &Any, _limits: &Limits) -> Status {
		Status::FailedDescendantOp
	}

	/// One-based cursor over this object's own enumerable entries: indices,
	/// for array-like payloads, or dynamic-table slots otherwise. Returns 0
	/// when this object's own entries are exhausted.
	pub fn next_index(&self, after: i32) -> i32 {
		let len = match &self.0.payload {
			Payload::Array(items) => Some(items.lock().unwrap().len()),
			Payload::Vector(state) => Some(state.lock().unwrap().len()),
			_ => None,
		};
		if let Some(len) = len {
			let next = if after < 0 { 0 } else { after as usize };
			return if next < len { (next + 1) as i32 } else { 0 };
		}
		self.core().dyn_props.as_ref().map(|t| t.lock().unwrap().next_enumerable_index_after(after)).unwrap_or(0)
	}

	pub fn name_at(&self, index: i32) -> Option<String> {
		match &self.0.payload {
			p if p.is_index_bearing() => Some((index - 1).to_string()),
			_ => self.core().dyn_props.as_ref().and_then(|t| t.lock().unwrap().name_at(index).map(str::to_string)),
		}
	}

	pub fn value_at(&self, index: i32) -> Option<Any> {
		match &self.0.payload {
			Payload::Array(items) => items.lock().unwrap().get((index - 1) as usize).cloned(),
			Payload::Vector(state) => state.lock().unwrap().get((index - 1) as usize).cloned(),
			_ => self.core().dyn_props.as_ref().and_then(|t| t.lock().unwrap().value_at(index)),
		}
	}

	/// Advances the composite `for-in` cursor: exhausting the current
	/// object's own entries moves on to its prototype. Returns `(has_next,
	/// object_to_resume_from, next_index)`.
	pub fn has_next_2(obj: &Object, index: i32, limits: &Limits) -> (bool, Object, i32) {
		Object::has_next_2_at_depth(obj, index, 0, limits)
	}

	fn has_next_2_at_depth(obj: &Object, index: i32, depth: u32, limits: &Limits) -> (bool, Object, i32) {
		if depth >= limits.max_prototype_depth {
			return (false, obj.clone(), 0);
		}
		let next = obj.next_index(index);
		if next != 0 {
			(true, obj.clone(), next)
		} else if let Some(proto) = obj.proto() {
			Object::has_next_2_at_depth(&proto, 0, depth + 1, limits)
		} else {
			(false, obj.clone(), 0)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::class::ClassTag;
	use crate::qname::{Namespace, NamespaceKind};

	fn dynamic_class(name: &str) -> Arc<Class> {
		Arc::new(Class::new(QName::public(name), ClassTag::Object, true))
	}

	#[test]
	fn dynamic_property_round_trip() {
		let obj = Object::new(dynamic_class("Test"), Payload::Generic);
		let limits = Limits::default();
		let foo = QName::public("foo");
		let bar = QName::public("bar");

		assert_eq!(obj.set_property(&foo, Any::undefined(), BindOptions::write()), Status::NotFound);
		let status = obj.set_property(&foo, Any::null(), BindOptions::write());
		assert_eq!(status, Status::Success);

		let (status, value) = obj.get_property(&foo, BindOptions::read(), &limits);
		assert_eq!(status, Status::Success);
		assert!(value.is_null());

		assert!(!obj.has_property(&bar, BindOptions::read(), &limits));
		assert!(obj.delete_property(&foo));
		let (status, value) = obj.get_property(&foo, BindOptions::read(), &limits);
		assert_eq!(status, Status::SoftSuccess);
		assert!(value.is_undefined());
	}

	#[test]
	fn prototype_fallthrough() {
		let limits = Limits::default();
		let proto = Object::new(dynamic_class("Proto"), Payload::Generic);
		proto.set_property(&QName::public("x"), Any::null(), BindOptions::write());

		let child_class = dynamic_class("Child");
		let child = Object::new_with_proto(child_class, Payload::Generic, Some(proto));

		let (status, value) = child.get_property(&QName::public("x"), BindOptions::read(), &limits);
		assert_eq!(status, Status::Success);
		assert!(value.is_null());

		let without_proto = BindOptions::read() & !BindOptions::SEARCH_PROTOTYPE;
		let (status, value) = child.get_property(&QName::public("x"), without_proto, &limits);
		assert_eq!(status, Status::SoftSuccess);
		assert!(value.is_undefined());
	}

	#[test]
	fn obj_form_routes_numeric_keys_through_index_fast_path() {
		let limits = Limits::default();
		let arr = Object::new(crate::classes::array_class(), Payload::Array(Mutex::new(vec![Any::null()])));

		let index_key = Any::object(Object::new(crate::classes::uint_class(), Payload::Uint(0)));
		let (status, value) = arr.get_obj(&index_key, BindOptions::read(), &limits);
		assert_eq!(status, Status::Success);
		assert!(value.is_null());

		assert_eq!(arr.set_obj(&index_key, Any::undefined(), BindOptions::write(), &limits), Status::Success);
		let (status, value) = arr.get_obj(&index_key, BindOptions::read(), &limits);
		assert_eq!(status, Status::Success);
		assert!(value.is_undefined());
	}

	#[test]
	fn obj_form_falls_back_to_string_coercion_on_plain_objects() {
		let limits = Limits::default();
		let obj = Object::new(dynamic_class("Test"), Payload::Generic);

		let key = Any::object(Object::new(crate::classes::int_class(), Payload::Int(3)));
		assert_eq!(obj.set_obj(&key, Any::null(), BindOptions::write(), &limits), Status::Success);

		let (status, value) = obj.get_property(&QName::public("3"), BindOptions::read(), &limits);
		assert_eq!(status, Status::Success);
		assert!(value.is_null());
	}

	#[test]
	fn obj_form_unwraps_qname_keys() {
		let limits = Limits::default();
		let obj = Object::new(dynamic_class("Test"), Payload::Generic);
		obj.set_property(&QName::public("x"), Any::null(), BindOptions::write());

		let key = Any::object(Object::new(crate::classes::qname_class(), Payload::QName(QName::public("x"))));
		let (status, value) = obj.get_obj(&key, BindOptions::read(), &limits);
		assert_eq!(status, Status::Success);
		assert!(value.is_null());
	}

	#[test]
	fn set_on_non_public_namespace_reports_distinct_failure() {
		let obj = Object::new(dynamic_class("Test"), Payload::Generic);
		let name = QName::new(Namespace::new(NamespaceKind::Explicit, "ns"), "x");
		assert_eq!(obj.set_property(&name, Any::undefined(), BindOptions::write()), Status::FailedCreateDynamicNonPublic);
	}

	#[test]
	fn for_in_enumerates_own_then_prototype() {
		let limits = Limits::default();
		let proto = Object::new(dynamic_class("Proto"), Payload::Generic);
		proto.set_property(&QName::public("c"), Any::null(), BindOptions::write());

		let child = Object::new_with_proto(dynamic_class("Child"), Payload::Generic, Some(proto));
		child.set_property(&QName::public("a"), Any::null(), BindOptions::write());
		child.set_property(&QName::public("b"), Any::null(), BindOptions::write());

		let mut names = Vec::new();
		let mut current = child.clone();
		let mut idx = 0;
		loop {
			let (has_next, obj, next_idx) = Object::has_next_2(&current, idx, &limits);
			if !has_next {
				break;
			}
			names.push(obj.name_at(next_idx).unwrap());
			current = obj;
			idx = next_idx;
		}
		assert_eq!(names, vec!["a", "b", "c"]);
	}
}
