/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Namespaces, qualified names, and the namespace sets used to resolve them.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamespaceKind {
	Public,
	Explicit,
	PackageInternal,
	Protected,
	StaticProtected,
	Private,
	/// Wildcard namespace. Never matches a trait lookup.
	Any,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace {
	pub kind: NamespaceKind,
	pub uri: String,
}

impl Namespace {
	pub fn public() -> Namespace {
		Namespace { kind: NamespaceKind::Public, uri: String::new() }
	}

	pub fn new(kind: NamespaceKind, uri: impl Into<String>) -> Namespace {
		Namespace { kind, uri: uri.into() }
	}

	pub fn any() -> Namespace {
		Namespace { kind: NamespaceKind::Any, uri: String::new() }
	}

	pub fn is_public(&self) -> bool {
		self.kind == NamespaceKind::Public
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QName {
	pub namespace: Namespace,
	pub local_name: String,
}

impl QName {
	pub fn new(namespace: Namespace, local_name: impl Into<String>) -> QName {
		QName { namespace, local_name: local_name.into() }
	}

	pub fn public(local_name: impl Into<String>) -> QName {
		QName { namespace: Namespace::public(), local_name: local_name.into() }
	}

	pub fn is_public(&self) -> bool {
		self.namespace.is_public()
	}
}

impl fmt::Display for QName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.namespace.is_public() {
			write!(f, "{}", self.local_name)
		} else {
			write!(f, "{}::{}", self.namespace.uri, self.local_name)
		}
	}
}

/// A small ordered set of namespaces searched together for a multiname lookup.
#[derive(Clone, Debug, Default)]
pub struct NamespaceSet {
	namespaces: Vec<Namespace>,
	contains_public: bool,
}

impl NamespaceSet {
	pub fn new(namespaces: Vec<Namespace>) -> NamespaceSet {
		let contains_public = namespaces.iter().any(Namespace::is_public);
		NamespaceSet { namespaces, contains_public }
	}

	pub fn single(namespace: Namespace) -> NamespaceSet {
		NamespaceSet::new(vec![namespace])
	}

	pub fn public() -> NamespaceSet {
		NamespaceSet::single(Namespace::public())
	}

	pub fn contains_public(&self) -> bool {
		self.contains_public
	}

	pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
		self.namespaces.iter()
	}

	pub fn is_empty(&self) -> bool {
		self.namespaces.is_empty()
	}
}
