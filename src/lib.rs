/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub use as3_error::{As3Error, ErrorClass};
pub use class::{Class, ClassTag, ClassTagSet, IndexPropertySet, Status, TraitObject};
pub use convert::{from_boxed, to_int32, to_number, to_primitive, to_primitive_number_hint, to_primitive_string_hint, to_uint32, HostPrimitive};
pub use error::{Error, ErrorKind};
pub use exception::Exception;
pub use limits::Limits;
pub use object::{BindOptions, NativeFunction, Object, Payload};
pub use props::PropertyTable;
pub use qname::{Namespace, NamespaceKind, NamespaceSet, QName};
pub use regexp::{RegExpFlags, RegExpState};
pub use value::Any;
pub use vector::VectorState;

pub mod as3_error;
pub mod class;
pub mod classes;
pub mod convert;
mod error;
pub mod exception;
pub mod limits;
pub mod math;
pub mod object;
pub mod ops;
pub mod primitives;
pub mod props;
pub mod qname;
pub mod regexp;
mod value;
pub mod vector;

pub type Result<T> = error::Result<T>;
pub type ResultExc<T> = std::result::Result<T, Exception>;
