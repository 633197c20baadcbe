//! Code generation shared by the tag macros.

use crate::args::ApiArgs;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, Ident, Type};

/// Element kinds, mirroring `apitag::ElementKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
	Type,
	Field,
	Method,
	Constructor,
	Module,
	TagDefinition,
}

impl Kind {
	fn variant(self) -> Ident {
		let name = match self {
			Kind::Type => "Type",
			Kind::Field => "Field",
			Kind::Method => "Method",
			Kind::Constructor => "Constructor",
			Kind::Module => "Module",
			Kind::TagDefinition => "TagDefinition",
		};
		Ident::new(name, Span::call_site())
	}
}

/// One element to submit to the registry.
pub(crate) struct Registration {
	/// Path relative to the declaring module; empty for the module itself.
	pub(crate) path: String,
	pub(crate) kind: Kind,
	pub(crate) args: ApiArgs,
	/// Type whose `TypeId` identifies the element, for non-generic types.
	pub(crate) type_id_of: Option<Type>,
	/// `#[cfg]` attributes of the element and its containers.
	pub(crate) cfg: Vec<Attribute>,
}

impl Registration {
	pub(crate) fn new(path: impl Into<String>, kind: Kind, args: ApiArgs) -> Self {
		Self {
			path: path.into(),
			kind,
			args,
			type_id_of: None,
			cfg: Vec::new(),
		}
	}

	pub(crate) fn with_cfg(mut self, cfg: impl IntoIterator<Item = Attribute>) -> Self {
		self.cfg.extend(cfg);
		self
	}

	pub(crate) fn with_type_id(mut self, ty: Type) -> Self {
		self.type_id_of = Some(ty);
		self
	}
}

/// `#[cfg]` attributes among `attrs`.
///
/// Attribute macros run before members are configured out, so a member's
/// registration has to carry the member's conditions itself.
pub(crate) fn cfg_attrs(attrs: &[Attribute]) -> Vec<Attribute> {
	attrs
		.iter()
		.filter(|attr| attr.path().is_ident("cfg"))
		.cloned()
		.collect()
}

/// `ApiTag` constructor expression for the parsed arguments.
pub(crate) fn tag_expr(root: &TokenStream, args: &ApiArgs) -> TokenStream {
	let status = Ident::new(args.status.variant(), Span::call_site());
	let mut expr = quote!(#root::ApiTag::new(#root::Status::#status));
	if let Some(since) = &args.since {
		expr = quote!(#expr.with_since(#since));
	}
	if !args.consumers.is_empty() {
		let consumers = &args.consumers;
		expr = quote!(#expr.with_consumers(&[#(#consumers),*]));
	}
	expr
}

fn submit(root: &TokenStream, registration: &Registration) -> TokenStream {
	let path = if registration.path.is_empty() {
		quote!(::core::module_path!())
	} else {
		let relative = &registration.path;
		quote!(::core::concat!(::core::module_path!(), "::", #relative))
	};
	let kind = registration.kind.variant();
	let tag = tag_expr(root, &registration.args);
	let type_id = registration
		.type_id_of
		.as_ref()
		.map(|ty| quote!(.with_type_id(::core::any::TypeId::of::<#ty>)));
	let cfg = &registration.cfg;

	quote! {
		#(#cfg)*
		#root::inventory::submit! {
			#root::ApiElement::new(#path, #root::ElementKind::#kind, #tag)
				#type_id
				.with_location(::core::file!(), ::core::line!())
		}
	}
}

/// Wraps all registrations in an anonymous const block.
///
/// Returns nothing when there is nothing to register.
pub(crate) fn registrations(root: &TokenStream, registrations: &[Registration]) -> TokenStream {
	if registrations.is_empty() {
		return TokenStream::new();
	}
	let submissions = registrations.iter().map(|registration| submit(root, registration));

	// inventory::submit! uses #[link_section] internally
	quote! {
		#[allow(unsafe_attr_outside_unsafe)]
		const _: () = {
			#(#submissions)*
		};
	}
}

/// Documentation lines appended to a tagged element.
pub(crate) fn doc_attrs(args: &ApiArgs) -> Vec<Attribute> {
	let mut status_line = format!("**API status:** `{}`", args.status.label());
	if let Some(since) = &args.since
		&& !since.value().is_empty()
	{
		status_line.push_str(&format!(" since `{}`", since.value()));
	}

	let mut attrs: Vec<Attribute> = vec![
		syn::parse_quote!(#[doc = ""]),
		syn::parse_quote!(#[doc = #status_line]),
	];

	if !args.consumers.is_empty() {
		let consumers = args
			.consumers
			.iter()
			.map(|consumer| format!("`{}`", consumer.value()))
			.collect::<Vec<_>>()
			.join(", ");
		let consumers_line = format!("**Intended consumers:** {}", consumers);
		attrs.push(syn::parse_quote!(#[doc = ""]));
		attrs.push(syn::parse_quote!(#[doc = #consumers_line]));
	}

	attrs
}
