//! Procedural macros for apitag
//!
//! This crate provides the `#[api(...)]` attribute, the `#[api_members]`
//! attribute for impl blocks and untagged containers, and the
//! `api_module!` macro for tagging a module from inside its file.
//!
//! The macros expand to paths in the `apitag` facade (or `apitag-core`),
//! resolved through `proc-macro-crate`. Use them through `apitag`.

use proc_macro::TokenStream;

mod api_attribute;
mod args;
mod codegen;
mod crate_paths;
mod members;
mod module_tag;

/// Attach a stability tag to a declaration
///
/// # Usage
///
/// ```rust,ignore
/// use apitag::api;
///
/// #[api(status = Experimental, since = "0.4", consumers = ["cli", "web"])]
/// pub struct Session {
///     #[api(status = Stable)]
///     pub id: u64,
/// }
///
/// #[api(status = Internal)]
/// pub fn reset_caches() {}
/// ```
///
/// # Arguments
///
/// - `status` (required): `Stable`, `Maintained`, `Experimental`,
///   `Deprecated` or `Internal`. Upper-case spellings are accepted.
/// - `since`: string literal naming the version the status took effect.
/// - `consumers`: array of string literals naming intended users.
///
/// # Targets
///
/// Structs, enums, unions, traits, type aliases, free functions, consts,
/// statics and inline modules. Fields, variants and trait items are tagged
/// with nested `#[api(...)]` attributes and collected by the enclosing tag.
///
/// Add `#[tag_definition]` below `#[api(...)]` to record a type that is
/// itself a tag schema.
///
/// # Limitations
///
/// The attribute cannot see whether it sits inside an impl block. Methods
/// and associated items mentioning `Self` are rejected with a pointer to
/// `#[api_members]`; an associated fn or const that mentions neither a
/// receiver nor `Self` fails later with a compiler error on the generated
/// registration instead.
///
/// Paths are built from `module_path!()`, so an item declared inside a
/// function body registers as if it were declared in the enclosing module.
/// Two such items with the same name and kind in one module are reported as
/// a duplicate by `Registry::collect`.
///
/// Members carrying `#[cfg(...)]` keep that condition on their registry
/// entry and are only registered when compiled in.
///
/// # Generated Code
///
/// - the item, with the tag appended to its documentation
/// - an `apitag::Tagged` impl for structs, enums and unions
/// - one registry entry per tagged element
#[proc_macro_attribute]
pub fn api(args: TokenStream, input: TokenStream) -> TokenStream {
	match api_attribute::api_impl(args.into(), input.into()) {
		Ok(tokens) => tokens.into(),
		Err(err) => err.to_compile_error().into(),
	}
}

/// Collect `#[api(...)]` tags on the members of an untagged item
///
/// Required on impl blocks, whose methods, constructors and associated
/// items cannot register themselves.
///
/// ```rust,ignore
/// #[api_members]
/// impl Session {
///     #[api(status = Stable)]
///     pub fn open() -> Self { .. }
///
///     #[api(status = Deprecated, since = "0.3")]
///     pub fn refresh(&mut self) { .. }
/// }
/// ```
///
/// Trait impls are rejected; tag the trait definition instead.
#[proc_macro_attribute]
pub fn api_members(args: TokenStream, input: TokenStream) -> TokenStream {
	match api_attribute::api_members_impl(args.into(), input.into()) {
		Ok(tokens) => tokens.into(),
		Err(err) => err.to_compile_error().into(),
	}
}

/// Tag the enclosing module.
///
/// Takes the same arguments as `#[api(...)]`. At most one module tag per
/// module.
#[proc_macro]
pub fn api_module(input: TokenStream) -> TokenStream {
	match module_tag::api_module_impl(input.into()) {
		Ok(tokens) => tokens.into(),
		Err(err) => err.to_compile_error().into(),
	}
}
