//! Registry entries linking a program element to its tag.

use crate::kind::ElementKind;
use crate::tag::ApiTag;
use std::any::TypeId;

/// A tagged program element as recorded in the link-time registry.
///
/// Instances are submitted by the `#[api]`, `#[api_members]` and
/// `api_module!` macros through `inventory::submit!`, and collected by
/// [`registry`](crate::registry).
///
/// # Fields
///
/// * `path` - Fully qualified path, e.g. `"my_crate::net::Client::connect"`
/// * `kind` - Which kind of element carries the tag
/// * `tag` - The declared tag, verbatim
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ApiElement {
	path: &'static str,
	kind: ElementKind,
	tag: ApiTag,
	#[cfg_attr(feature = "serde", serde(skip))]
	type_id: Option<fn() -> TypeId>,
	file: &'static str,
	line: u32,
}

impl ApiElement {
	pub const fn new(path: &'static str, kind: ElementKind, tag: ApiTag) -> Self {
		Self {
			path,
			kind,
			tag,
			type_id: None,
			file: "",
			line: 0,
		}
	}

	/// Attaches a `TypeId` accessor so the element can be found from a type.
	///
	/// Only non-generic types get one, since a generic type has no single
	/// `TypeId`.
	pub const fn with_type_id(mut self, type_id: fn() -> TypeId) -> Self {
		self.type_id = Some(type_id);
		self
	}

	/// Records where the tag was declared.
	pub const fn with_location(mut self, file: &'static str, line: u32) -> Self {
		self.file = file;
		self.line = line;
		self
	}

	pub const fn path(&self) -> &'static str {
		self.path
	}

	pub const fn kind(&self) -> ElementKind {
		self.kind
	}

	pub const fn tag(&self) -> &ApiTag {
		&self.tag
	}

	/// Source file of the declaration, or `""` when unknown.
	pub const fn file(&self) -> &'static str {
		self.file
	}

	/// Source line of the declaration, or `0` when unknown.
	pub const fn line(&self) -> u32 {
		self.line
	}

	/// Last path segment, e.g. `"connect"` for `"my_crate::net::Client::connect"`.
	pub fn name(&self) -> &'static str {
		self.path.rsplit("::").next().unwrap_or(self.path)
	}

	/// Returns true if this element describes the type `T`.
	pub fn is_type<T: ?Sized + 'static>(&self) -> bool {
		self.type_id.is_some_and(|type_id| type_id() == TypeId::of::<T>())
	}

	/// Returns true if the element sits in `module` or one of its submodules.
	///
	/// A module element is also considered to be within itself.
	pub fn is_within(&self, module: &str) -> bool {
		match self.path.strip_prefix(module) {
			Some("") => true,
			Some(rest) => rest.starts_with("::"),
			None => false,
		}
	}
}

// Collected by `registry`; submitted by the apitag macros.
inventory::collect!(ApiElement);
