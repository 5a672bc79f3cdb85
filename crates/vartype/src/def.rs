//! Variable type descriptors and behavior flags.

use std::any::Any;

use bitflags::bitflags;

use crate::fns::VarTypeFns;

bitflags! {
	/// Behavior flags shared by all values of one type.
	///
	/// Consumed by the external config engine that owns field storage; this
	/// crate only enforces them on the assignment path
	/// ([`crate::VarTypeDef::assign_line`]).
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	pub struct VarTypeFlags: u32 {
		/// Values of this type can never be set directly by name. Internal
		/// programmatic assignment is still permitted.
		const UNSETTABLE = 1 << 0;
		/// Values of this type always live nested inside a parent aggregate
		/// and must be skipped by independent dump/copy/free passes.
		const CONTAINED = 1 << 1;
		/// Repeated assignment extends the value instead of replacing it,
		/// until the value is marked fragile. Such types should supply
		/// `mark_fragile`.
		const CUMULATIVE = 1 << 2;
	}
}

/// A named, immutable descriptor for one variable type.
///
/// Bundles the function table, the opaque parameters passed into every
/// operation of the type, and the behavior flags. Descriptors are created
/// during one-time startup registration and never mutated afterwards; they
/// are safe to share across threads.
///
/// All nine logical operations are exposed as methods (see
/// [`crate::effective`]), resolved through the derivation engine regardless
/// of which slots the type actually supplied.
pub struct VarTypeDef {
	name: Box<str>,
	fns: VarTypeFns,
	params: Option<Box<dyn Any + Send + Sync>>,
	flags: VarTypeFlags,
}

impl VarTypeDef {
	/// Creates a descriptor with no parameters and empty flags.
	pub fn new(name: impl Into<Box<str>>, fns: VarTypeFns) -> Self {
		Self {
			name: name.into(),
			fns,
			params: None,
			flags: VarTypeFlags::empty(),
		}
	}

	/// Sets the behavior flags.
	pub fn with_flags(mut self, flags: VarTypeFlags) -> Self {
		self.flags = flags;
		self
	}

	/// Sets the type-specific parameter payload.
	///
	/// The payload is owned by the descriptor, never interpreted by the
	/// engine, and passed by reference into every operation of this type.
	pub fn with_params(mut self, params: impl Any + Send + Sync) -> Self {
		self.params = Some(Box::new(params));
		self
	}

	/// The unique name of this type, as used for registry lookup, log
	/// messages, and error reports.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn flags(&self) -> VarTypeFlags {
		self.flags
	}

	pub fn is_unsettable(&self) -> bool {
		self.flags.contains(VarTypeFlags::UNSETTABLE)
	}

	pub fn is_contained(&self) -> bool {
		self.flags.contains(VarTypeFlags::CONTAINED)
	}

	pub fn is_cumulative(&self) -> bool {
		self.flags.contains(VarTypeFlags::CUMULATIVE)
	}

	pub(crate) fn fns(&self) -> &VarTypeFns {
		&self.fns
	}

	/// The params payload as passed into operation slots. Types registered
	/// without parameters see a unit value.
	pub(crate) fn params_ref(&self) -> &dyn Any {
		static NO_PARAMS: () = ();
		match &self.params {
			Some(params) => params.as_ref(),
			None => &NO_PARAMS,
		}
	}
}

impl core::fmt::Debug for VarTypeDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("VarTypeDef")
			.field("name", &self.name)
			.field("flags", &self.flags)
			.finish()
	}
}
