/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Display, Formatter};

/// The category of an internal failure, mirrored onto an AS3 error class
/// by [`crate::as3_error::As3Error`] when it crosses into user-visible territory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	Type,
	Range,
	Reference,
	Syntax,
	Eval,
	Uri,
	Security,
	Internal,
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let name = match self {
			ErrorKind::Type => "TypeError",
			ErrorKind::Range => "RangeError",
			ErrorKind::Reference => "ReferenceError",
			ErrorKind::Syntax => "SyntaxError",
			ErrorKind::Eval => "EvalError",
			ErrorKind::Uri => "URIError",
			ErrorKind::Security => "SecurityError",
			ErrorKind::Internal => "Error",
		};
		f.write_str(name)
	}
}

/// The Rust-level plumbing error. Distinct from [`crate::exception::Exception`],
/// which is the vehicle that carries an arbitrary thrown AS3 value.
#[derive(Clone, Debug)]
pub struct Error {
	message: String,
	kind: ErrorKind,
}

impl Error {
	pub fn new(message: impl Into<String>, kind: ErrorKind) -> Error {
		Error { message: message.into(), kind }
	}

	/// A placeholder error with no useful message, for conversion sites that
	/// only have a bool/option to work with.
	pub fn none() -> Error {
		Error::new("", ErrorKind::Internal)
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn kind(&self) -> ErrorKind {
		self.kind
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.message.is_empty() {
			write!(f, "{}", self.kind)
		} else {
			write!(f, "{}: {}", self.kind, self.message)
		}
	}
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
