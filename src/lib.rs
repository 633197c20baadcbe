//! # apitag
//!
//! Declare the stability of public API elements and read the declarations
//! back at runtime.
//!
//! A tag carries a required [`Status`], an optional `since` version and an
//! optional list of intended consumers. Tags attach to types, fields,
//! methods, constructors, modules and to other tag definitions. Each
//! attachment is recorded in a link-time [`registry`], so documentation
//! generators, lint passes and release tooling can ask whether an element
//! is tagged and with what.
//!
//! ## Quick Start
//!
//! ```
//! use apitag::{ApiTag, ElementKind, Status, Tagged, api, api_members, registry};
//!
//! #[api(status = Experimental, since = "0.4", consumers = ["cli", "web"])]
//! pub struct Session {
//!     #[api(status = Stable)]
//!     pub id: u64,
//! }
//!
//! #[api_members]
//! impl Session {
//!     #[api(status = Stable)]
//!     pub fn open() -> Self {
//!         Session { id: 1 }
//!     }
//!
//!     #[api(status = Deprecated, since = "0.3")]
//!     pub fn refresh(&mut self) {}
//! }
//!
//! # fn main() {
//! assert_eq!(Session::API_TAG.status(), Status::Experimental);
//! assert_eq!(Session::API_TAG.consumers(), &["cli", "web"]);
//!
//! let element = registry::of_type::<Session>().unwrap();
//! assert_eq!(element.kind(), ElementKind::Type);
//! assert_eq!(element.tag().since(), "0.4");
//!
//! let open = registry::find(concat!(module_path!(), "::Session::open"), ElementKind::Constructor).unwrap();
//! assert_eq!(open.tag().status(), Status::Stable);
//!
//! let id = registry::tag_of(concat!(module_path!(), "::Session::id"), ElementKind::Field).unwrap();
//! assert_eq!(id.since(), "");
//! # }
//! ```
//!
//! ## Statuses
//!
//! | Status         | Meaning                                                     |
//! |----------------|-------------------------------------------------------------|
//! | `Stable`       | Supported; changes follow the compatibility policy          |
//! | `Maintained`   | Kept working, no longer extended                            |
//! | `Experimental` | May change or disappear without notice                      |
//! | `Deprecated`   | Scheduled for removal                                       |
//! | `Internal`     | Public for technical reasons only; not for outside use      |
//!
//! The statuses are not ordered. Tooling decides what each one means.
//!
//! ## Attachment Targets
//!
//! - **Types**: structs, enums, unions, traits and type aliases take
//!   `#[api(...)]` directly.
//! - **Fields**: struct fields, enum variants and their fields, consts and
//!   statics. Members are tagged with nested `#[api(...)]` attributes,
//!   collected by the container's own tag or by `#[api_members]`.
//! - **Methods and constructors**: free functions take `#[api(...)]`
//!   directly; associated functions are tagged inside an impl block or
//!   trait carrying `#[api_members]`. A function without a receiver that
//!   returns `Self` (or the type by name, or `Option`/`Result` of it) is
//!   recorded as a constructor.
//! - **Modules**: `#[api(...)]` on an inline `mod`, or
//!   `api_module!(...)` inside a module file.
//! - **Tag definitions**: `#[tag_definition]` below `#[api(...)]` records a
//!   type that defines tags itself. [`ApiTag`] is registered this way.
//!
//! Each element carries at most one tag:
//!
//! ```compile_fail
//! use apitag::api;
//!
//! #[api(status = Stable)]
//! #[api(status = Internal)]
//! pub struct Twice;
//!
//! fn main() {}
//! ```
//!
//! A missing or unknown `status`, an item that is not an element (a `use`
//! declaration, an impl block) and a method or associated function tagged
//! outside an `#[api_members]` impl are all rejected at compile time.
//!
//! A field needs a tagged or `#[api_members]` container:
//!
//! ```compile_fail
//! use apitag::api;
//!
//! pub struct Reading {
//!     #[api(status = Stable)]
//!     pub value: u32,
//! }
//!
//! fn main() {}
//! ```
//!
//! A module is tagged once; a second `api_module!` in the same module
//! does not compile.
//!
//! ## Generated Documentation
//!
//! The attribute appends the tag to the element's rustdoc:
//!
//! > **API status:** `EXPERIMENTAL` since `0.4`
//! >
//! > **Intended consumers:** `cli`, `web`
//!
//! ## Feature Flags
//!
//! - `macros` (default) - `#[api]`, `#[api_members]` and `api_module!`
//! - `serde` (default) - `Serialize` impls for tags, elements and
//!   [`Registry`] snapshots

// Lets the macros resolve `::apitag` inside this crate's own tests
extern crate self as apitag;

pub use apitag_core::{
	ApiElement, ApiTag, ElementKind, Error, Registry, Result, Status, Tagged, inventory, registry,
};

#[cfg(feature = "macros")]
pub use apitag_macros::{api, api_members, api_module};
