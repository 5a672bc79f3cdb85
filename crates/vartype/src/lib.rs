//! Pluggable variable-type definitions for configuration management.
//!
//! Each kind of configuration value (string, integer, list, ...) is described
//! once by a [`VarTypeDef`]: a named, immutable bundle of a nine-slot
//! function table ([`VarTypeFns`]), opaque type parameters, and behavior
//! flags ([`VarTypeFlags`]). Types supply only the operations they care
//! about; the derivation engine in [`effective`] fills in the rest with
//! fixed fallback rules, so callers dispatch all nine operations against any
//! registered type without knowing which slots were supplied.
//!
//! Descriptors live in a [`VarTypeRegistry`]: validated at registration,
//! write-once, and sealed on first lookup. Values themselves are opaque
//! caller-owned slots (`dyn Any`); this crate never allocates or frees them,
//! it only transforms their contents in place.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use vartype::{VarTypeDef, VarTypeFns, VarTypeRegistry};
//!
//! fn parse_flag(target: &mut dyn Any, text: &str, _params: &dyn Any) -> Result<(), String> {
//! 	let slot = target.downcast_mut::<bool>().ok_or("not a bool slot")?;
//! 	*slot = match text {
//! 		"0" => false,
//! 		"1" => true,
//! 		_ => return Err(format!("invalid flag: '{text}'")),
//! 	};
//! 	Ok(())
//! }
//!
//! fn encode_flag(value: &dyn Any, _params: &dyn Any) -> Option<String> {
//! 	let flag = value.downcast_ref::<bool>()?;
//! 	Some(if *flag { "1".into() } else { "0".into() })
//! }
//!
//! let registry = VarTypeRegistry::new();
//! registry
//! 	.register(VarTypeDef::new("flag", VarTypeFns {
//! 		parse: Some(parse_flag),
//! 		encode: Some(encode_flag),
//! 		..VarTypeFns::default()
//! 	}))
//! 	.unwrap();
//!
//! let def = registry.get("flag").unwrap();
//! let mut value = false;
//! def.parse(&mut value, "1").unwrap();
//! assert!(value);
//! assert_eq!(def.encode(&value).unwrap(), Some("1".to_string()));
//! ```

pub mod def;
pub mod effective;
pub mod error;
pub mod fns;
pub mod line;
pub mod registry;

#[cfg(test)]
mod tests;

pub use def::{VarTypeDef, VarTypeFlags};
pub use effective::AssignOrigin;
pub use error::{RegistrationError, VarTypeError};
pub use fns::{
	ClearFn, CopyFn, EncodeFn, EqFn, IsValidFn, LineEncodeFn, LineParseFn, MarkFragileFn,
	ParseFn, VarTypeFns,
};
pub use line::ConfigLine;
pub use registry::VarTypeRegistry;
