//! `api_module!` function-like macro implementation
//!
//! Tags the module the invocation appears in. Used from module files, where
//! an outer attribute on `mod name;` is not available.
//!
//! ```rust,ignore
//! // src/transport/mod.rs
//! apitag::api_module!(status = Internal, consumers = ["server"]);
//! ```

use crate::args::ApiArgs;
use crate::codegen::{Kind, Registration, registrations};
use crate::crate_paths::get_apitag_crate;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Result;

/// Named item that exists once per tagged module.
///
/// A second module tag in the same module fails with a duplicate
/// definition error.
pub(crate) fn module_guard() -> TokenStream {
	quote! {
		#[allow(dead_code, non_upper_case_globals)]
		#[doc(hidden)]
		const __apitag_module_tag: () = ();
	}
}

pub(crate) fn api_module_impl(input: TokenStream) -> Result<TokenStream> {
	let args = ApiArgs::parse(input, Span::call_site())?;
	let root = get_apitag_crate()?;

	let guard = module_guard();
	let registrations = registrations(&root, &[Registration::new("", Kind::Module, args)]);

	Ok(quote! {
		#guard
		#registrations
	})
}
