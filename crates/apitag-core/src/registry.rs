//! Link-time registry of tagged elements.
//!
//! Rust has no runtime reflection, so the tag macros record every
//! attachment as an [`ApiElement`] with `inventory::submit!`. This module
//! is the read side: tools query it to learn whether an element is tagged
//! and what the tag says.
//!
//! ## Architecture
//!
//! 1. Each `#[api(...)]`, `#[api_members]` or `api_module!` expansion
//!    generates one `inventory::submit!` per tagged element
//! 2. `inventory` gathers the submissions of every linked crate
//! 3. The free functions below scan them directly; [`Registry::collect`]
//!    builds an indexed snapshot and rejects duplicate registrations
//!
//! ## Example
//!
//! ```
//! use apitag_core::{ElementKind, Status, registry};
//!
//! let element = registry::find("apitag_core::tag::ApiTag", ElementKind::TagDefinition)
//! 	.expect("the schema tags its own record type");
//! assert_eq!(element.tag().status(), Status::Stable);
//! ```

use crate::element::ApiElement;
use crate::error::{Error, Result};
use crate::kind::ElementKind;
use crate::status::Status;
use crate::tag::ApiTag;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Iterates over every registered element, in link order.
pub fn iter() -> impl Iterator<Item = &'static ApiElement> {
	inventory::iter::<ApiElement>.into_iter()
}

/// Finds the element registered under `path` with the given kind.
pub fn find(path: &str, kind: ElementKind) -> Option<&'static ApiElement> {
	iter().find(|element| element.path() == path && element.kind() == kind)
}

/// Returns every element registered under `path`, whatever its kind.
///
/// A module and a function of the same name share a path, so more than one
/// element may come back.
pub fn find_all(path: &str) -> Vec<&'static ApiElement> {
	iter().filter(|element| element.path() == path).collect()
}

/// Returns the tag of the element at `path`, if it is tagged.
pub fn tag_of(path: &str, kind: ElementKind) -> Option<&'static ApiTag> {
	find(path, kind).map(ApiElement::tag)
}

/// Finds the registration of the type `T`.
///
/// Only non-generic types can be found this way; use [`find`] with the
/// type's path for generic ones.
pub fn of_type<T: ?Sized + 'static>() -> Option<&'static ApiElement> {
	iter().find(|element| element.is_type::<T>())
}

/// Number of registered elements.
pub fn count() -> usize {
	iter().count()
}

/// Indexed snapshot of the registry.
///
/// Elements are keyed by path, then kind, and iterate in that order, which
/// keeps generated documentation stable across builds.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	elements: BTreeMap<&'static str, BTreeMap<ElementKind, &'static ApiElement>>,
	len: usize,
}

impl Registry {
	/// Collects all registered elements into a snapshot.
	///
	/// # Errors
	///
	/// Returns [`Error::DuplicateElement`] if two registrations share a
	/// path and kind.
	pub fn collect() -> Result<Self> {
		Self::from_elements(iter())
	}

	/// Builds a snapshot from an explicit set of elements.
	pub fn from_elements<I>(elements: I) -> Result<Self>
	where
		I: IntoIterator<Item = &'static ApiElement>,
	{
		let mut registry = Self::default();
		for element in elements {
			registry.insert(element)?;
		}
		tracing::debug!("collected {} api elements", registry.len);
		Ok(registry)
	}

	fn insert(&mut self, element: &'static ApiElement) -> Result<()> {
		let kinds = self.elements.entry(element.path()).or_default();
		match kinds.entry(element.kind()) {
			Entry::Vacant(slot) => {
				tracing::trace!(
					path = element.path(),
					kind = %element.kind(),
					status = %element.tag().status(),
					"registered api element"
				);
				slot.insert(element);
				self.len += 1;
				Ok(())
			}
			Entry::Occupied(existing) => {
				tracing::warn!(
					"element '{}' ({}) is tagged at {}:{} and {}:{}",
					element.path(),
					element.kind(),
					existing.get().file(),
					existing.get().line(),
					element.file(),
					element.line()
				);
				Err(Error::DuplicateElement {
					path: element.path().to_string(),
					kind: element.kind(),
				})
			}
		}
	}

	pub fn get(&self, path: &str, kind: ElementKind) -> Option<&'static ApiElement> {
		self.elements.get(path)?.get(&kind).copied()
	}

	pub fn tag(&self, path: &str, kind: ElementKind) -> Option<&'static ApiTag> {
		self.get(path, kind).map(ApiElement::tag)
	}

	pub fn contains(&self, path: &str, kind: ElementKind) -> bool {
		self.get(path, kind).is_some()
	}

	/// Iterates over all elements in path order.
	pub fn iter(&self) -> impl Iterator<Item = &'static ApiElement> + '_ {
		self.elements.values().flat_map(|kinds| kinds.values().copied())
	}

	pub fn with_status(&self, status: Status) -> impl Iterator<Item = &'static ApiElement> + '_ {
		self.iter().filter(move |element| element.tag().status() == status)
	}

	pub fn of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &'static ApiElement> + '_ {
		self.iter().filter(move |element| element.kind() == kind)
	}

	/// Elements declared in `module` or any of its submodules.
	pub fn within<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'static ApiElement> + 'a {
		self.iter().filter(move |element| element.is_within(module))
	}

	/// Restricts the snapshot to elements declared in `module`.
	pub fn scoped(&self, module: &str) -> Self {
		let mut scoped = Self::default();
		for (path, kinds) in &self.elements {
			if kinds.values().any(|element| element.is_within(module)) {
				scoped.len += kinds.len();
				scoped.elements.insert(*path, kinds.clone());
			}
		}
		scoped
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for Registry {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter())
	}
}
