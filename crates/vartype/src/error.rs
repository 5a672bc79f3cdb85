//! Error types for dispatch and registration.

use thiserror::Error;

/// Errors produced by the nine dispatched operations.
///
/// All variants carry the name of the type whose operation failed, so the
/// external loader can aggregate them per field in its load report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VarTypeError {
	/// Malformed input text or line sequence. Recoverable at the level of one
	/// field; the loader decides whether to abort or collect.
	#[error("couldn't parse {type_name} value: {message}")]
	Parse {
		type_name: Box<str>,
		message: String,
	},
	/// A caller-supplied copy slot failed.
	#[error("couldn't copy {type_name} value: {message}")]
	Copy {
		type_name: Box<str>,
		message: String,
	},
	/// The scalar form was invoked on a line-only type, or vice versa. An
	/// integration bug in the caller, not a data problem.
	#[error("operation {op} not supported by type {type_name}")]
	Unsupported {
		type_name: Box<str>,
		op: &'static str,
	},
	/// A derived fallback (eq/copy) failed in an underlying encode or parse
	/// step. Tagged with the derivation chain that produced it.
	#[error("derived {op} failed for type {type_name}: {message}")]
	Derived {
		type_name: Box<str>,
		op: &'static str,
		message: String,
	},
	/// A named assignment was attempted against an unsettable field. Rejected
	/// before any parse function runs.
	#[error("variable {key} of type {type_name} cannot be set by name")]
	Unsettable { type_name: Box<str>, key: String },
}

impl VarTypeError {
	pub(crate) fn parse(type_name: &str, message: String) -> Self {
		Self::Parse {
			type_name: type_name.into(),
			message,
		}
	}

	pub(crate) fn unsupported(type_name: &str, op: &'static str) -> Self {
		Self::Unsupported {
			type_name: type_name.into(),
			op,
		}
	}

	pub(crate) fn derived(type_name: &str, op: &'static str, message: String) -> Self {
		Self::Derived {
			type_name: type_name.into(),
			op,
			message,
		}
	}
}

/// Startup-fatal registration failures.
///
/// Raised once, while the external engine builds its registry; none of these
/// are runtime-recoverable conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
	#[error("variable type name is empty")]
	EmptyName,
	#[error("variable type name {0:?} contains whitespace")]
	InvalidName(Box<str>),
	#[error("variable type {0} is already registered")]
	DuplicateName(Box<str>),
	#[error("variable type {0} supplies neither scalar nor line parse")]
	MissingParse(Box<str>),
	#[error("variable type {0} supplies neither scalar nor line encode")]
	MissingEncode(Box<str>),
	#[error("registry is sealed; can't register variable type {0}")]
	Sealed(Box<str>),
}
