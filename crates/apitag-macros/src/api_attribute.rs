//! `#[api(...)]` and `#[api_members]` attribute macro implementation
//!
//! # Macro Syntax
//!
//! ```rust,ignore
//! #[api(status = Experimental, since = "0.4", consumers = ["cli"])]
//! pub struct Client {
//!     #[api(status = Stable)]
//!     pub timeout: Duration,
//! }
//!
//! #[api_members]
//! impl Client {
//!     #[api(status = Stable)]
//!     pub fn new() -> Self { .. }
//! }
//! ```
//!
//! # Generated Code
//!
//! The item is preserved, its documentation is extended with the tag, and
//! one registry entry per tagged element is submitted:
//!
//! ```rust,ignore
//! pub struct Client { .. }
//!
//! impl ::apitag::Tagged for Client {
//!     const API_TAG: ::apitag::ApiTag = ::apitag::ApiTag::new(::apitag::Status::Experimental)
//!         .with_since("0.4")
//!         .with_consumers(&["cli"]);
//! }
//!
//! const _: () = {
//!     ::apitag::inventory::submit! {
//!         ::apitag::ApiElement::new(concat!(module_path!(), "::", "Client"), ::apitag::ElementKind::Type, ..)
//!             .with_type_id(::core::any::TypeId::of::<Client>)
//!             .with_location(file!(), line!())
//!     }
//!     // ... one submission per tagged field
//! };
//! ```

use crate::args::ApiArgs;
use crate::codegen::{Kind, Registration, cfg_attrs, doc_attrs, registrations, tag_expr};
use crate::crate_paths::get_apitag_crate;
use crate::members;
use crate::module_tag::module_guard;
use proc_macro2::{Span, TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{Attribute, Error, Generics, Ident, Item, Result, Type};

const ALLOWED_TARGETS: &str = "struct, enum, union, trait, type alias, fn, const, static or inline mod";

/// Helper attribute marking a type as a tag definition.
const TAG_DEFINITION: &str = "tag_definition";

const ASSOCIATED_HINT: &str =
	"#[api] on an associated item requires #[api_members] on the enclosing impl or trait";

/// Implementation of the `#[api(...)]` attribute macro
///
/// # Errors
///
/// Returns an error if `status` is missing or malformed, if the item is not
/// an allowed attachment target, or if the element is tagged twice.
pub(crate) fn api_impl(args: TokenStream, input: TokenStream) -> Result<TokenStream> {
	let args = ApiArgs::parse(args, Span::call_site())?;
	let mut item: Item = syn::parse2(input)?;

	let mut regs = Vec::new();
	let mut tagged_type = None;

	match &mut item {
		Item::Struct(item) => {
			members::reject_duplicate(&item.attrs)?;
			let kind = type_kind(&mut item.attrs)?;
			regs.push(type_registration(&item.ident, &item.generics, kind, args.clone()));
			regs.extend(members::struct_members(item)?);
			tagged_type = Some((item.ident.clone(), item.generics.clone()));
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Enum(item) => {
			members::reject_duplicate(&item.attrs)?;
			let kind = type_kind(&mut item.attrs)?;
			regs.push(type_registration(&item.ident, &item.generics, kind, args.clone()));
			regs.extend(members::enum_members(item)?);
			tagged_type = Some((item.ident.clone(), item.generics.clone()));
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Union(item) => {
			members::reject_duplicate(&item.attrs)?;
			let kind = type_kind(&mut item.attrs)?;
			regs.push(type_registration(&item.ident, &item.generics, kind, args.clone()));
			regs.extend(members::union_members(item)?);
			tagged_type = Some((item.ident.clone(), item.generics.clone()));
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Trait(item) => {
			members::reject_duplicate(&item.attrs)?;
			let kind = type_kind(&mut item.attrs)?;
			regs.push(Registration::new(item.ident.to_string(), kind, args.clone()));
			regs.extend(members::trait_members(item)?);
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Type(item) => {
			members::reject_duplicate(&item.attrs)?;
			reject_tag_definition(&item.attrs)?;
			// An alias shares its target's TypeId, so it is found by path only
			regs.push(Registration::new(item.ident.to_string(), Kind::Type, args.clone()));
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Fn(item) => {
			members::reject_duplicate(&item.attrs)?;
			reject_tag_definition(&item.attrs)?;
			if let Some(receiver) = item.sig.receiver() {
				return Err(Error::new_spanned(
					receiver,
					"#[api] on a method requires #[api_members] on the enclosing impl or trait",
				));
			}
			if mentions_self(item.sig.to_token_stream()) {
				return Err(Error::new_spanned(&item.sig.ident, ASSOCIATED_HINT));
			}
			regs.push(Registration::new(item.sig.ident.to_string(), Kind::Method, args.clone()));
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Const(item) => {
			members::reject_duplicate(&item.attrs)?;
			reject_tag_definition(&item.attrs)?;
			if item.ident == "_" {
				return Err(Error::new_spanned(&item.ident, "#[api] requires a named const"));
			}
			if mentions_self(item.ty.to_token_stream()) {
				return Err(Error::new_spanned(&item.ident, ASSOCIATED_HINT));
			}
			regs.push(Registration::new(item.ident.to_string(), Kind::Field, args.clone()));
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Static(item) => {
			members::reject_duplicate(&item.attrs)?;
			reject_tag_definition(&item.attrs)?;
			regs.push(Registration::new(item.ident.to_string(), Kind::Field, args.clone()));
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Mod(item) => {
			members::reject_duplicate(&item.attrs)?;
			reject_tag_definition(&item.attrs)?;
			let Some((_, content)) = &mut item.content else {
				return Err(Error::new_spanned(
					&item.ident,
					"#[api] on an out-of-line module is not supported; call `api_module!(...)` inside the module instead",
				));
			};
			// Keeps `api_module!` from tagging the same module a second time
			let guard: Item = syn::parse2(module_guard())?;
			content.insert(0, guard);
			regs.push(Registration::new(item.ident.to_string(), Kind::Module, args.clone()));
			item.attrs.extend(doc_attrs(&args));
		}
		Item::Impl(item) => {
			return Err(Error::new_spanned(
				&item.self_ty,
				"#[api] cannot be attached to an impl block; use #[api_members] on the impl and tag its items",
			));
		}
		other => {
			let message = format!(
				"#[api] cannot be attached to {}; expected a {}",
				describe(other),
				ALLOWED_TARGETS
			);
			return Err(Error::new_spanned(other, message));
		}
	}

	let root = get_apitag_crate()?;
	let cfg = inherit_item_cfg(&item, &mut regs);
	let tagged_impl = tagged_type.map(|(ident, generics)| {
		let tagged = tagged(&root, &ident, &generics, &args);
		quote!(#(#cfg)* #tagged)
	});

	let registrations = registrations(&root, &regs);
	Ok(quote! {
		#item
		#tagged_impl
		#registrations
	})
}

/// Implementation of the `#[api_members]` attribute macro
///
/// Collects `#[api(...)]` tags on the members of an item that is not tagged
/// itself: an inherent impl block, or a struct, enum, union or trait.
pub(crate) fn api_members_impl(args: TokenStream, input: TokenStream) -> Result<TokenStream> {
	if !args.is_empty() {
		return Err(Error::new_spanned(args, "#[api_members] takes no arguments"));
	}
	let mut item: Item = syn::parse2(input)?;
	let root = get_apitag_crate()?;

	let mut regs = match &mut item {
		Item::Impl(item) => members::impl_members(item)?,
		Item::Struct(item) => members::struct_members(item)?,
		Item::Enum(item) => members::enum_members(item)?,
		Item::Union(item) => members::union_members(item)?,
		Item::Trait(item) => members::trait_members(item)?,
		other => {
			let message = format!(
				"#[api_members] cannot be attached to {}; expected an impl block, struct, enum, union or trait",
				describe(other)
			);
			return Err(Error::new_spanned(other, message));
		}
	};
	inherit_item_cfg(&item, &mut regs);

	let registrations = registrations(&root, &regs);
	Ok(quote! {
		#item
		#registrations
	})
}

/// Kind for a tagged type, consuming the `#[tag_definition]` helper.
fn type_kind(attrs: &mut Vec<Attribute>) -> Result<Kind> {
	let Some(position) = attrs.iter().position(|attr| attr.path().is_ident(TAG_DEFINITION)) else {
		return Ok(Kind::Type);
	};
	if !matches!(attrs[position].meta, syn::Meta::Path(_)) {
		return Err(Error::new_spanned(
			&attrs[position],
			"#[tag_definition] takes no arguments",
		));
	}
	attrs.remove(position);
	Ok(Kind::TagDefinition)
}

fn reject_tag_definition(attrs: &[Attribute]) -> Result<()> {
	match attrs.iter().find(|attr| attr.path().is_ident(TAG_DEFINITION)) {
		Some(attr) => Err(Error::new_spanned(
			attr,
			"#[tag_definition] applies to struct, enum, union or trait declarations only",
		)),
		None => Ok(()),
	}
}

fn type_registration(ident: &Ident, generics: &Generics, kind: Kind, args: ApiArgs) -> Registration {
	let registration = Registration::new(ident.to_string(), kind, args);
	if generics.params.is_empty() {
		let ty: Type = syn::parse_quote!(#ident);
		registration.with_type_id(ty)
	} else {
		registration
	}
}

fn tagged(root: &TokenStream, ident: &Ident, generics: &Generics, args: &ApiArgs) -> TokenStream {
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
	let tag = tag_expr(root, args);
	quote! {
		impl #impl_generics #root::Tagged for #ident #ty_generics #where_clause {
			const API_TAG: #root::ApiTag = #tag;
		}
	}
}

/// Prefixes every registration with the item's own `#[cfg]` conditions,
/// which are returned for the other generated code.
fn inherit_item_cfg(item: &Item, regs: &mut [Registration]) -> Vec<Attribute> {
	let cfg = cfg_attrs(item_attrs(item));
	for registration in regs.iter_mut() {
		let own = std::mem::take(&mut registration.cfg);
		registration.cfg = cfg.iter().cloned().chain(own).collect();
	}
	cfg
}

/// Attributes left on an item after the macro's own attribute is removed.
fn item_attrs(item: &Item) -> &[Attribute] {
	match item {
		Item::Struct(item) => &item.attrs,
		Item::Enum(item) => &item.attrs,
		Item::Union(item) => &item.attrs,
		Item::Trait(item) => &item.attrs,
		Item::Type(item) => &item.attrs,
		Item::Fn(item) => &item.attrs,
		Item::Const(item) => &item.attrs,
		Item::Static(item) => &item.attrs,
		Item::Mod(item) => &item.attrs,
		Item::Impl(item) => &item.attrs,
		_ => &[],
	}
}

/// `Self` can only appear in the signature of an associated item.
fn mentions_self(tokens: TokenStream) -> bool {
	tokens.into_iter().any(|tree| match tree {
		TokenTree::Ident(ident) => ident == "Self",
		TokenTree::Group(group) => mentions_self(group.stream()),
		_ => false,
	})
}

fn describe(item: &Item) -> &'static str {
	match item {
		Item::Use(_) => "a use declaration",
		Item::ExternCrate(_) => "an extern crate declaration",
		Item::ForeignMod(_) => "an extern block",
		Item::Macro(_) => "a macro invocation or definition",
		Item::TraitAlias(_) => "a trait alias",
		Item::Impl(_) => "an impl block",
		Item::Fn(_) => "a function",
		Item::Const(_) => "a const",
		Item::Static(_) => "a static",
		Item::Mod(_) => "a module",
		Item::Type(_) => "a type alias",
		_ => "this item",
	}
}
