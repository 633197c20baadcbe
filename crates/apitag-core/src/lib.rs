//! # apitag-core
//!
//! The stability tag schema: a required [`Status`], an optional `since`
//! version and an optional list of intended consumers, attachable to types,
//! fields, methods, constructors, modules and other tag definitions.
//!
//! Tags are declared with the macros from `apitag-macros` (re-exported by
//! the `apitag` crate) and read back through the [`registry`], the
//! link-time replacement for runtime reflection.
//!
//! ```
//! use apitag_core::{ApiTag, Status};
//!
//! const TAG: ApiTag = ApiTag::new(Status::Experimental).with_since("0.3");
//! assert_eq!(TAG.consumers(), &[] as &[&str]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize` impls for [`Status`], [`ElementKind`], [`ApiTag`],
//!   [`ApiElement`] and [`Registry`]

mod element;
mod error;
mod kind;
pub mod registry;
mod status;
mod tag;

pub use element::ApiElement;
pub use error::{Error, Result};
pub use kind::ElementKind;
pub use registry::Registry;
pub use status::Status;
pub use tag::{ApiTag, Tagged};

// Re-export inventory for the registrations generated by apitag-macros
pub use inventory;

const SCHEMA_TAG: ApiTag = ApiTag::new(Status::Stable).with_since(env!("CARGO_PKG_VERSION"));

// The schema's own types are tagged like any other element, with `ApiTag`
// registered as a tag definition.
impl Tagged for ApiTag {
	const API_TAG: ApiTag = SCHEMA_TAG;
}

impl Tagged for Status {
	const API_TAG: ApiTag = SCHEMA_TAG;
}

impl Tagged for ElementKind {
	const API_TAG: ApiTag = SCHEMA_TAG;
}

inventory::submit! {
	ApiElement::new(concat!(module_path!(), "::tag::ApiTag"), ElementKind::TagDefinition, SCHEMA_TAG)
		.with_type_id(std::any::TypeId::of::<ApiTag>)
		.with_location(file!(), line!())
}

inventory::submit! {
	ApiElement::new(concat!(module_path!(), "::status::Status"), ElementKind::Type, SCHEMA_TAG)
		.with_type_id(std::any::TypeId::of::<Status>)
		.with_location(file!(), line!())
}

inventory::submit! {
	ApiElement::new(concat!(module_path!(), "::kind::ElementKind"), ElementKind::Type, SCHEMA_TAG)
		.with_type_id(std::any::TypeId::of::<ElementKind>)
		.with_location(file!(), line!())
}
