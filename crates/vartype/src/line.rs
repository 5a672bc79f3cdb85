//! Key/value records exchanged with the external line reader and writer.

/// One `{key, value}` record of a configuration line sequence.
///
/// Sequences are ordered; ordering among records with the same key is
/// significant. Line parsing consumes only the first record per call, while
/// line encoding may emit several records for one logical value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
	pub key: String,
	pub value: String,
}

impl ConfigLine {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

impl core::fmt::Display for ConfigLine {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{} {}", self.key, self.value)
	}
}
