//! The nine-slot function table a variable type may populate.

use std::any::Any;

use crate::line::ConfigLine;

/// Parses `text` into the value slot behind `target`.
///
/// On failure, returns a caller-owned message describing what was wrong with
/// the input. The target is not guaranteed untouched on failure, only not
/// guaranteed valid.
pub type ParseFn = fn(target: &mut dyn Any, text: &str, params: &dyn Any) -> Result<(), String>;

/// Parses the first record of `lines` into the value slot behind `target`.
///
/// Only the first record may be consumed, even when more are supplied;
/// downstream cumulative semantics depend on one call per line. Types for
/// which keys are significant (e.g. line lists recording their own keys)
/// should supply this slot rather than relying on the scalar fallback.
pub type LineParseFn =
	fn(target: &mut dyn Any, lines: &[ConfigLine], params: &dyn Any) -> Result<(), String>;

/// Encodes `value` as a single text string.
///
/// `None` means the value has no representation (empty/default); it is a
/// first-class success, never an error. Every string produced here must
/// parse back to an equal value.
pub type EncodeFn = fn(value: &dyn Any, params: &dyn Any) -> Option<String>;

/// Encodes `value` as a sequence of records.
///
/// `key` is used as the key of the emitted records unless the type encodes
/// its own keys. Unlike line parsing, this may emit multiple records for one
/// logical value. `None` means there are no lines to encode.
pub type LineEncodeFn = fn(key: &str, value: &dyn Any, params: &dyn Any) -> Option<Vec<ConfigLine>>;

/// Resets the value behind `target` to its default, releasing any storage it
/// owns.
pub type ClearFn = fn(target: &mut dyn Any, params: &dyn Any);

/// Returns true when `a` and `b` hold the same value.
pub type EqFn = fn(a: &dyn Any, b: &dyn Any, params: &dyn Any) -> bool;

/// Copies the value behind `value` into the slot behind `target`.
pub type CopyFn = fn(target: &mut dyn Any, value: &dyn Any, params: &dyn Any) -> Result<(), String>;

/// Returns true when `value` holds a valid value for this type.
pub type IsValidFn = fn(value: &dyn Any, params: &dyn Any) -> bool;

/// Marks `value` as fragile, so the next assignment replaces it instead of
/// extending it. Only meaningful for cumulative types.
pub type MarkFragileFn = fn(value: &mut dyn Any, params: &dyn Any);

/// Function table for one variable type.
///
/// Every slot is optional, but a registrable table must populate at least one
/// of `{parse, line_parse}` and at least one of `{encode, line_encode}`. The
/// remaining slots are derived by the engine in [`crate::effective`] when
/// absent.
///
/// All slots receive the `params` payload of the owning descriptor. Two types
/// may share a table and differ only in parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct VarTypeFns {
	pub parse: Option<ParseFn>,
	pub line_parse: Option<LineParseFn>,
	pub encode: Option<EncodeFn>,
	pub line_encode: Option<LineEncodeFn>,
	pub clear: Option<ClearFn>,
	pub eq: Option<EqFn>,
	pub copy: Option<CopyFn>,
	pub is_valid: Option<IsValidFn>,
	pub mark_fragile: Option<MarkFragileFn>,
}

impl VarTypeFns {
	/// True when at least one parse form is present.
	pub fn has_parse(&self) -> bool {
		self.parse.is_some() || self.line_parse.is_some()
	}

	/// True when at least one encode form is present.
	pub fn has_encode(&self) -> bool {
		self.encode.is_some() || self.line_encode.is_some()
	}
}
