//! Write-once, seal-on-first-lookup registry of variable type descriptors.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;

use crate::def::VarTypeDef;
use crate::error::RegistrationError;

/// Maximum edit distance for [`VarTypeRegistry::suggest`] matches.
const SUGGEST_DISTANCE: usize = 3;

#[derive(Default, Clone)]
struct Snapshot {
	by_name: FxHashMap<Box<str>, Arc<VarTypeDef>>,
	/// Registration order, for stable enumeration.
	order: Vec<Arc<VarTypeDef>>,
	/// Set once the registration phase has ended. Kept in the snapshot so
	/// the same compare-and-swap that publishes a registration observes it;
	/// a registration can never land after a lookup sealed the table.
	sealed: bool,
}

/// Name → descriptor table with an init-then-freeze lifecycle.
///
/// Registration validates every descriptor against the table invariants and
/// is only accepted while the registry is unsealed. The first lookup seals
/// the registry; from then on it is read-only and safe for unsynchronized
/// concurrent readers, and further registration attempts fail with
/// [`RegistrationError::Sealed`].
pub struct VarTypeRegistry {
	snap: ArcSwap<Snapshot>,
}

impl VarTypeRegistry {
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(Snapshot::default()),
		}
	}

	/// The process-wide registry instance.
	///
	/// Built lazily on first use; the external engine registers its types
	/// here during startup, before any configuration load begins.
	pub fn global() -> &'static VarTypeRegistry {
		static GLOBAL: LazyLock<VarTypeRegistry> = LazyLock::new(VarTypeRegistry::new);
		&GLOBAL
	}

	/// Validates and registers a descriptor.
	///
	/// The name must be non-empty, free of whitespace, and unused; the
	/// function table must supply at least one parse form and at least one
	/// encode form. Violations are startup-fatal for the caller.
	pub fn register(&self, def: VarTypeDef) -> Result<(), RegistrationError> {
		if self.snap.load().sealed {
			return Err(RegistrationError::Sealed(def.name().into()));
		}
		validate(&def)?;

		if def.is_cumulative() {
			if def.fns().mark_fragile.is_none() {
				tracing::warn!(
					name = def.name(),
					"cumulative type has no mark_fragile; its values will extend forever"
				);
			}
			if def.fns().clear.is_none() {
				tracing::warn!(
					name = def.name(),
					"cumulative type has no clear; replacing a value will leak its storage"
				);
			}
		}

		let def = Arc::new(def);
		loop {
			let cur = self.snap.load_full();
			if cur.sealed {
				return Err(RegistrationError::Sealed(def.name().into()));
			}
			if cur.by_name.contains_key(def.name()) {
				return Err(RegistrationError::DuplicateName(def.name().into()));
			}
			let mut next = (*cur).clone();
			next.by_name.insert(def.name().into(), def.clone());
			next.order.push(def.clone());

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				tracing::debug!(name = def.name(), flags = ?def.flags(), "registered variable type");
				return Ok(());
			}
		}
	}

	/// Looks up a descriptor by name, sealing the registry.
	pub fn get(&self, name: &str) -> Option<Arc<VarTypeDef>> {
		self.seal();
		self.snap.load().by_name.get(name).cloned()
	}

	/// Ends the registration phase explicitly.
	pub fn seal(&self) {
		loop {
			let cur = self.snap.load_full();
			if cur.sealed {
				return;
			}
			let mut next = (*cur).clone();
			next.sealed = true;

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				return;
			}
		}
	}

	pub fn is_sealed(&self) -> bool {
		self.snap.load().sealed
	}

	/// All registered descriptors, in registration order. Seals the registry.
	pub fn all(&self) -> Vec<Arc<VarTypeDef>> {
		self.seal();
		self.snap.load().order.clone()
	}

	pub fn len(&self) -> usize {
		self.snap.load().order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Suggests a registered name close to `name`, for loader error reports.
	pub fn suggest(&self, name: &str) -> Option<String> {
		let snap = self.snap.load();
		snap.order
			.iter()
			.map(|def| def.name().to_string())
			.min_by_key(|candidate| strsim::levenshtein(name, candidate))
			.filter(|candidate| strsim::levenshtein(name, candidate) <= SUGGEST_DISTANCE)
	}
}

impl Default for VarTypeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

fn validate(def: &VarTypeDef) -> Result<(), RegistrationError> {
	if def.name().is_empty() {
		return Err(RegistrationError::EmptyName);
	}
	if def.name().chars().any(char::is_whitespace) {
		return Err(RegistrationError::InvalidName(def.name().into()));
	}
	if !def.fns().has_parse() {
		return Err(RegistrationError::MissingParse(def.name().into()));
	}
	if !def.fns().has_encode() {
		return Err(RegistrationError::MissingEncode(def.name().into()));
	}
	Ok(())
}
