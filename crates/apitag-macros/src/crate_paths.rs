//! Helper functions for dynamic crate path resolution using proc_macro_crate

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream};
use quote::quote;

/// Crates that re-export the tag schema, in lookup order.
const SCHEMA_CRATES: [&str; 2] = ["apitag", "apitag-core"];

/// Resolves the path to the crate providing `ApiTag`, `ApiElement` and the
/// `inventory` re-export.
///
/// The `apitag` facade is preferred; a crate depending on `apitag-core`
/// and `apitag-macros` directly works as well, as do renamed dependencies.
/// Returns an error if neither crate is listed in Cargo.toml.
pub(crate) fn get_apitag_crate() -> syn::Result<TokenStream> {
	let mut failures = Vec::new();
	for candidate in SCHEMA_CRATES {
		match crate_name(candidate) {
			Ok(found) => return Ok(crate_path(candidate, found)),
			Err(e) => failures.push(format!("`{}`: {}", candidate, e)),
		}
	}

	Err(syn::Error::new(
		Span::call_site(),
		format!(
			"failed to resolve the apitag crate ({}). Ensure `apitag` is listed in Cargo.toml dependencies.",
			failures.join("; ")
		),
	))
}

/// Absolute path for a resolved crate. A crate referring to itself goes
/// through its library name; a dependency goes through the name it is
/// imported under, which differs from `candidate` when renamed.
fn crate_path(candidate: &str, found: FoundCrate) -> TokenStream {
	let name = match found {
		FoundCrate::Itself => candidate.replace('-', "_"),
		FoundCrate::Name(name) => name,
	};
	let ident = syn::Ident::new(&name, Span::call_site());
	quote!(::#ident)
}
