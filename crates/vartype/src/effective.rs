//! The derivation engine: a complete operation set for every type.
//!
//! A registered function table may leave most of its nine slots empty. The
//! methods here expose all nine operations on [`VarTypeDef`] anyway, each one
//! consulting the type's own slot first and falling back to a fixed derived
//! behavior when the slot is absent:
//!
//! - `line_parse` falls back to scalar-parsing the first record's value.
//! - `line_encode` falls back to wrapping the scalar encoding in one record.
//! - The scalar forms have no fallback; invoking them on a line-only type is
//!   a [`VarTypeError::Unsupported`] integration error.
//! - `clear` and `mark_fragile` fall back to doing nothing.
//! - `eq` falls back to comparing the two values' encodings.
//! - `copy` falls back to an encode-then-parse chain through the line form.
//! - `is_valid` falls back to accepting everything.
//!
//! Dispatch sites therefore never need to know which slots a type supplied.

use std::any::Any;

use crate::def::VarTypeDef;
use crate::error::VarTypeError;
use crate::line::ConfigLine;

const OP_COPY: &str = "copy";
const OP_PARSE: &str = "scalar-parse";
const OP_ENCODE: &str = "scalar-encode";

/// Who is performing an assignment, for flag enforcement.
///
/// Only [`Named`](AssignOrigin::Named) assignments (config files, controller
/// commands) are subject to the `UNSETTABLE` flag; internal programmatic
/// assignment always goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOrigin {
	Named,
	Internal,
}

impl VarTypeDef {
	/// Parses `text` into `target` using the scalar form.
	///
	/// Fails with [`VarTypeError::Unsupported`] for types that only supply
	/// the line form.
	pub fn parse(&self, target: &mut dyn Any, text: &str) -> Result<(), VarTypeError> {
		match self.fns().parse {
			Some(f) => {
				f(target, text, self.params_ref()).map_err(|m| VarTypeError::parse(self.name(), m))
			}
			None => Err(VarTypeError::unsupported(self.name(), OP_PARSE)),
		}
	}

	/// Parses the first record of `lines` into `target`.
	///
	/// Later records are ignored in either path; feeding a multi-record
	/// sequence one call at a time is the caller's job, and cumulative
	/// semantics depend on it.
	pub fn line_parse(&self, target: &mut dyn Any, lines: &[ConfigLine]) -> Result<(), VarTypeError> {
		if let Some(f) = self.fns().line_parse {
			return f(target, lines, self.params_ref())
				.map_err(|m| VarTypeError::parse(self.name(), m));
		}
		let Some(first) = lines.first() else {
			return Err(VarTypeError::parse(
				self.name(),
				"empty line sequence".to_string(),
			));
		};
		self.parse(target, &first.value)
	}

	/// Encodes `value` as a single text string using the scalar form.
	///
	/// `Ok(None)` means the value has no representation; it is a success,
	/// distinct from an error. Fails with [`VarTypeError::Unsupported`] for
	/// types that only supply the line form.
	pub fn encode(&self, value: &dyn Any) -> Result<Option<String>, VarTypeError> {
		match self.fns().encode {
			Some(f) => Ok(f(value, self.params_ref())),
			None => Err(VarTypeError::unsupported(self.name(), OP_ENCODE)),
		}
	}

	/// Encodes `value` as a record sequence under `key`.
	///
	/// Types without a line encoder get their scalar encoding wrapped as
	/// exactly one record; an absent scalar encoding yields `Ok(None)`.
	pub fn line_encode(
		&self,
		key: &str,
		value: &dyn Any,
	) -> Result<Option<Vec<ConfigLine>>, VarTypeError> {
		if let Some(f) = self.fns().line_encode {
			return Ok(f(key, value, self.params_ref()));
		}
		Ok(self
			.encode(value)?
			.map(|text| vec![ConfigLine::new(key, text)]))
	}

	/// Resets `value` to its default.
	///
	/// Types without a clear slot get a no-op: the value is left completely
	/// untouched. Types whose values own heap storage must supply a real
	/// clear, or repeated clearing leaks that storage; the registry warns
	/// about the cumulative case at registration.
	pub fn clear(&self, value: &mut dyn Any) {
		if let Some(f) = self.fns().clear {
			f(value, self.params_ref());
		}
	}

	/// Returns true when `a` and `b` hold the same value.
	///
	/// Without an eq slot, the two values' effective encodings are compared
	/// for exact string equality; a pair with both encodings absent is equal,
	/// a pair with exactly one absent is not.
	pub fn eq(&self, a: &dyn Any, b: &dyn Any) -> bool {
		if let Some(f) = self.fns().eq {
			return f(a, b, self.params_ref());
		}
		match (self.cmp_encoding(a), self.cmp_encoding(b)) {
			(None, None) => true,
			(Some(enc_a), Some(enc_b)) => enc_a == enc_b,
			_ => false,
		}
	}

	/// Copies the value behind `value` into `target`.
	///
	/// Without a copy slot, the target is cleared, the source is encoded
	/// through the effective line form, and each resulting record is parsed
	/// back into the target, one call per record so cumulative values rebuild
	/// correctly. An absent encoding just clears the target. Afterward the
	/// target compares equal to the source; on failure it is not guaranteed
	/// untouched.
	pub fn copy(&self, target: &mut dyn Any, value: &dyn Any) -> Result<(), VarTypeError> {
		if let Some(f) = self.fns().copy {
			return f(target, value, self.params_ref()).map_err(|m| VarTypeError::Copy {
				type_name: self.name().into(),
				message: m,
			});
		}
		let lines = self
			.line_encode(self.name(), value)
			.map_err(|e| VarTypeError::derived(self.name(), OP_COPY, e.to_string()))?;
		// Copy replaces: without this, re-parsing would extend a non-empty
		// cumulative target.
		self.clear(target);
		let Some(lines) = lines else {
			return Ok(());
		};
		for line in &lines {
			self.line_parse(target, core::slice::from_ref(line))
				.map_err(|e| VarTypeError::derived(self.name(), OP_COPY, e.to_string()))?;
		}
		Ok(())
	}

	/// Returns true when `value` is valid for this type.
	///
	/// Types without a validity slot accept every value.
	pub fn is_valid(&self, value: &dyn Any) -> bool {
		match self.fns().is_valid {
			Some(f) => f(value, self.params_ref()),
			None => true,
		}
	}

	/// Marks `value` as fragile so the next assignment replaces instead of
	/// extending it.
	///
	/// Without a mark-fragile slot this does nothing, meaning the transition
	/// never occurs for the type. Cumulative types should supply the slot.
	pub fn mark_fragile(&self, value: &mut dyn Any) {
		if let Some(f) = self.fns().mark_fragile {
			f(value, self.params_ref());
		}
	}

	/// One externally observed assignment, with flag enforcement.
	///
	/// Rejects named assignments to `UNSETTABLE` types before any parse
	/// function runs. Non-cumulative types are cleared first (assignment
	/// replaces); cumulative types are extended, leaving replace-on-fragile
	/// to the type's own line parser.
	pub fn assign_line(
		&self,
		target: &mut dyn Any,
		lines: &[ConfigLine],
		origin: AssignOrigin,
	) -> Result<(), VarTypeError> {
		if origin == AssignOrigin::Named && self.is_unsettable() {
			let key = lines
				.first()
				.map(|line| line.key.clone())
				.unwrap_or_else(|| self.name().to_string());
			return Err(VarTypeError::Unsettable {
				type_name: self.name().into(),
				key,
			});
		}
		if !self.is_cumulative() {
			self.clear(target);
		}
		self.line_parse(target, lines)
	}

	/// The encoding used by the eq fallback: the scalar encoding when that
	/// slot exists, otherwise the line encoding reduced to its concatenated
	/// text. Keys are included because line-encoding types may emit their
	/// own.
	fn cmp_encoding(&self, value: &dyn Any) -> Option<String> {
		if self.fns().encode.is_some() {
			return self.encode(value).ok().flatten();
		}
		let lines = self.line_encode(self.name(), value).ok().flatten()?;
		let mut text = String::new();
		for line in &lines {
			text.push_str(&line.key);
			text.push(' ');
			text.push_str(&line.value);
			text.push('\n');
		}
		Some(text)
	}
}
