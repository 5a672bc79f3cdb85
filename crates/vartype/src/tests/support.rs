//! Concrete variable types used by the tests.
//!
//! These stay out of the library surface on purpose; the crate ships the
//! engine, not a type catalog.

use std::any::Any;

use crate::fns::VarTypeFns;
use crate::line::ConfigLine;

/// Scalar-only integer type over a plain `i64` slot.
pub fn int_fns() -> VarTypeFns {
	VarTypeFns {
		parse: Some(parse_int),
		encode: Some(encode_int),
		..VarTypeFns::default()
	}
}

fn parse_int(target: &mut dyn Any, text: &str, _params: &dyn Any) -> Result<(), String> {
	let slot = target.downcast_mut::<i64>().ok_or("not an i64 slot")?;
	*slot = text
		.parse::<i64>()
		.map_err(|_| format!("invalid integer: '{text}'"))?;
	Ok(())
}

fn encode_int(value: &dyn Any, _params: &dyn Any) -> Option<String> {
	value.downcast_ref::<i64>().map(i64::to_string)
}

/// Scalar integer type over an `Option<i64>` slot, where `None` encodes as
/// "no representation".
pub fn opt_int_fns() -> VarTypeFns {
	VarTypeFns {
		parse: Some(parse_opt_int),
		encode: Some(encode_opt_int),
		clear: Some(clear_opt_int),
		..VarTypeFns::default()
	}
}

fn parse_opt_int(target: &mut dyn Any, text: &str, _params: &dyn Any) -> Result<(), String> {
	let slot = target.downcast_mut::<Option<i64>>().ok_or("not an optional i64 slot")?;
	*slot = Some(
		text.parse::<i64>()
			.map_err(|_| format!("invalid integer: '{text}'"))?,
	);
	Ok(())
}

fn encode_opt_int(value: &dyn Any, _params: &dyn Any) -> Option<String> {
	value
		.downcast_ref::<Option<i64>>()
		.and_then(|slot| slot.as_ref())
		.map(i64::to_string)
}

fn clear_opt_int(target: &mut dyn Any, _params: &dyn Any) {
	if let Some(slot) = target.downcast_mut::<Option<i64>>() {
		*slot = None;
	}
}

/// Inclusive bounds passed as type parameters to the ranged integer type.
pub struct IntRange {
	pub min: i64,
	pub max: i64,
}

/// Integer type with a validity check driven by its parameter payload.
pub fn ranged_int_fns() -> VarTypeFns {
	VarTypeFns {
		is_valid: Some(ranged_int_ok),
		..int_fns()
	}
}

fn ranged_int_ok(value: &dyn Any, params: &dyn Any) -> bool {
	let Some(range) = params.downcast_ref::<IntRange>() else {
		return false;
	};
	value
		.downcast_ref::<i64>()
		.is_some_and(|v| (range.min..=range.max).contains(v))
}

/// Line-only cumulative list of integers.
///
/// One record extends the list per parse call; marking the value fragile
/// makes the next parse start over.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IntList {
	pub items: Vec<i64>,
	pub fragile: bool,
}

pub fn int_list_fns() -> VarTypeFns {
	VarTypeFns {
		line_parse: Some(line_parse_int_list),
		line_encode: Some(line_encode_int_list),
		clear: Some(clear_int_list),
		mark_fragile: Some(mark_int_list_fragile),
		..VarTypeFns::default()
	}
}

fn line_parse_int_list(
	target: &mut dyn Any,
	lines: &[ConfigLine],
	_params: &dyn Any,
) -> Result<(), String> {
	let list = target.downcast_mut::<IntList>().ok_or("not an int-list slot")?;
	let first = lines.first().ok_or("empty line sequence")?;
	let item = first
		.value
		.parse::<i64>()
		.map_err(|_| format!("invalid integer: '{}'", first.value))?;
	if list.fragile {
		list.items.clear();
		list.fragile = false;
	}
	list.items.push(item);
	Ok(())
}

fn line_encode_int_list(key: &str, value: &dyn Any, _params: &dyn Any) -> Option<Vec<ConfigLine>> {
	let list = value.downcast_ref::<IntList>()?;
	if list.items.is_empty() {
		return None;
	}
	Some(
		list.items
			.iter()
			.map(|item| ConfigLine::new(key, item.to_string()))
			.collect(),
	)
}

fn clear_int_list(target: &mut dyn Any, _params: &dyn Any) {
	if let Some(list) = target.downcast_mut::<IntList>() {
		list.items.clear();
		list.fragile = false;
	}
}

fn mark_int_list_fragile(value: &mut dyn Any, _params: &dyn Any) {
	if let Some(list) = value.downcast_mut::<IntList>() {
		list.fragile = true;
	}
}

/// Type whose encoding never parses back, for exercising derived-copy
/// failures.
pub fn broken_fns() -> VarTypeFns {
	VarTypeFns {
		parse: Some(parse_never),
		encode: Some(encode_bogus),
		..VarTypeFns::default()
	}
}

fn parse_never(_target: &mut dyn Any, text: &str, _params: &dyn Any) -> Result<(), String> {
	Err(format!("can't parse '{text}'"))
}

fn encode_bogus(_value: &dyn Any, _params: &dyn Any) -> Option<String> {
	Some("bogus".to_string())
}
