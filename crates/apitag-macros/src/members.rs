//! Tags on members: fields, enum variants, associated items.
//!
//! Attribute macros cannot run on fields, and a registration cannot be
//! emitted inside an `impl` or `trait` body, so member tags are read and
//! stripped by the macro on the enclosing item instead. Registrations are
//! then emitted next to that item.

use crate::args::ApiArgs;
use crate::codegen::{Kind, Registration, cfg_attrs, doc_attrs};
use syn::{
	Attribute, Error, Fields, FnArg, GenericArgument, Ident, ImplItem, ItemEnum, ItemImpl,
	ItemStruct, ItemTrait, ItemUnion, PathArguments, Result, ReturnType, Signature, TraitItem,
	Type, spanned::Spanned,
};

/// Returns true if `attr` is an `#[api(...)]` attribute, however it is imported.
pub(crate) fn is_api_attr(attr: &Attribute) -> bool {
	attr.path()
		.segments
		.last()
		.is_some_and(|segment| segment.ident == "api")
}

/// Removes the `#[api(...)]` attribute from a member and returns its arguments.
///
/// The member's documentation is extended with the tag.
fn take_tag(attrs: &mut Vec<Attribute>) -> Result<Option<ApiArgs>> {
	let mut tagged = attrs.iter().filter(|attr| is_api_attr(attr));
	let Some(first) = tagged.next() else {
		return Ok(None);
	};
	if let Some(second) = tagged.next() {
		return Err(Error::new_spanned(
			second,
			"duplicate #[api] attribute; an element carries exactly one status",
		));
	}

	let args = match &first.meta {
		syn::Meta::List(list) => ApiArgs::parse(list.tokens.clone(), first.span())?,
		syn::Meta::Path(_) => ApiArgs::parse(proc_macro2::TokenStream::new(), first.span())?,
		syn::Meta::NameValue(nv) => {
			return Err(Error::new_spanned(nv, "expected `#[api(status = ...)]`"));
		}
	};

	attrs.retain(|attr| !is_api_attr(attr));
	attrs.extend(doc_attrs(&args));
	Ok(Some(args))
}

fn join(container: &str, member: impl std::fmt::Display) -> String {
	if container.is_empty() {
		member.to_string()
	} else {
		format!("{}::{}", container, member)
	}
}

/// Collects tagged fields; `outer_cfg` holds the conditions of an enclosing variant.
fn collect_fields(
	container: &str,
	fields: &mut Fields,
	outer_cfg: &[Attribute],
	out: &mut Vec<Registration>,
) -> Result<()> {
	for (index, field) in fields.iter_mut().enumerate() {
		if let Some(args) = take_tag(&mut field.attrs)? {
			let name = match &field.ident {
				Some(ident) => ident.to_string(),
				None => index.to_string(),
			};
			out.push(
				Registration::new(join(container, name), Kind::Field, args)
					.with_cfg(outer_cfg.iter().cloned())
					.with_cfg(cfg_attrs(&field.attrs)),
			);
		}
	}
	Ok(())
}

pub(crate) fn struct_members(item: &mut ItemStruct) -> Result<Vec<Registration>> {
	let mut out = Vec::new();
	collect_fields(&item.ident.to_string(), &mut item.fields, &[], &mut out)?;
	Ok(out)
}

pub(crate) fn union_members(item: &mut ItemUnion) -> Result<Vec<Registration>> {
	let mut out = Vec::new();
	let container = item.ident.to_string();
	for field in item.fields.named.iter_mut() {
		if let Some(args) = take_tag(&mut field.attrs)?
			&& let Some(ident) = &field.ident
		{
			out.push(
				Registration::new(join(&container, ident), Kind::Field, args)
					.with_cfg(cfg_attrs(&field.attrs)),
			);
		}
	}
	Ok(out)
}

/// Variants are tagged as fields; so are the fields inside a variant.
pub(crate) fn enum_members(item: &mut ItemEnum) -> Result<Vec<Registration>> {
	let mut out = Vec::new();
	let container = item.ident.to_string();
	for variant in item.variants.iter_mut() {
		let variant_path = join(&container, &variant.ident);
		let variant_cfg = cfg_attrs(&variant.attrs);
		if let Some(args) = take_tag(&mut variant.attrs)? {
			out.push(
				Registration::new(variant_path.clone(), Kind::Field, args).with_cfg(variant_cfg.clone()),
			);
		}
		collect_fields(&variant_path, &mut variant.fields, &variant_cfg, &mut out)?;
	}
	Ok(out)
}

pub(crate) fn trait_members(item: &mut ItemTrait) -> Result<Vec<Registration>> {
	let mut out = Vec::new();
	let container = item.ident.to_string();
	for trait_item in item.items.iter_mut() {
		match trait_item {
			TraitItem::Fn(method) => {
				if let Some(args) = take_tag(&mut method.attrs)? {
					let kind = fn_kind(&method.sig, None);
					out.push(
						Registration::new(join(&container, &method.sig.ident), kind, args)
							.with_cfg(cfg_attrs(&method.attrs)),
					);
				}
			}
			TraitItem::Const(constant) => {
				if let Some(args) = take_tag(&mut constant.attrs)? {
					out.push(
						Registration::new(join(&container, &constant.ident), Kind::Field, args)
							.with_cfg(cfg_attrs(&constant.attrs)),
					);
				}
			}
			TraitItem::Type(ty) => {
				if let Some(args) = take_tag(&mut ty.attrs)? {
					out.push(
						Registration::new(join(&container, &ty.ident), Kind::Type, args)
							.with_cfg(cfg_attrs(&ty.attrs)),
					);
				}
			}
			TraitItem::Macro(mac) => reject_tagged(&mac.attrs, "macro invocations")?,
			_ => {}
		}
	}
	Ok(out)
}

pub(crate) fn impl_members(item: &mut ItemImpl) -> Result<Vec<Registration>> {
	if let Some((_, trait_path, _)) = &item.trait_ {
		return Err(Error::new_spanned(
			trait_path,
			"#[api_members] cannot be used on trait implementations; tag the items of the trait definition instead",
		));
	}

	let self_ident = self_type_ident(&item.self_ty)?;
	let container = self_ident.to_string();
	let mut out = Vec::new();
	for impl_item in item.items.iter_mut() {
		match impl_item {
			ImplItem::Fn(method) => {
				if let Some(args) = take_tag(&mut method.attrs)? {
					let kind = fn_kind(&method.sig, Some(&self_ident));
					out.push(
						Registration::new(join(&container, &method.sig.ident), kind, args)
							.with_cfg(cfg_attrs(&method.attrs)),
					);
				}
			}
			ImplItem::Const(constant) => {
				if let Some(args) = take_tag(&mut constant.attrs)? {
					out.push(
						Registration::new(join(&container, &constant.ident), Kind::Field, args)
							.with_cfg(cfg_attrs(&constant.attrs)),
					);
				}
			}
			ImplItem::Type(ty) => {
				if let Some(args) = take_tag(&mut ty.attrs)? {
					out.push(
						Registration::new(join(&container, &ty.ident), Kind::Type, args)
							.with_cfg(cfg_attrs(&ty.attrs)),
					);
				}
			}
			ImplItem::Macro(mac) => reject_tagged(&mac.attrs, "macro invocations")?,
			_ => {}
		}
	}
	Ok(out)
}

fn reject_tagged(attrs: &[Attribute], what: &str) -> Result<()> {
	match attrs.iter().find(|attr| is_api_attr(attr)) {
		Some(attr) => Err(Error::new_spanned(
			attr,
			format!("#[api] cannot be attached to {}", what),
		)),
		None => Ok(()),
	}
}

fn self_type_ident(ty: &Type) -> Result<Ident> {
	if let Type::Path(type_path) = ty
		&& type_path.qself.is_none()
		&& let Some(segment) = type_path.path.segments.last()
	{
		return Ok(segment.ident.clone());
	}
	Err(Error::new_spanned(
		ty,
		"#[api_members] requires an impl block for a named type",
	))
}

/// Associated functions without a receiver that return `Self` are constructors.
pub(crate) fn fn_kind(sig: &Signature, self_ident: Option<&Ident>) -> Kind {
	let has_receiver = matches!(sig.inputs.first(), Some(FnArg::Receiver(_)));
	if !has_receiver
		&& let ReturnType::Type(_, ty) = &sig.output
		&& returns_self(ty, self_ident)
	{
		Kind::Constructor
	} else {
		Kind::Method
	}
}

/// Matches `Self`, the impl's type name, and either wrapped in `Result` or `Option`.
fn returns_self(ty: &Type, self_ident: Option<&Ident>) -> bool {
	let Type::Path(type_path) = ty else {
		return false;
	};
	if type_path.qself.is_some() {
		return false;
	}
	let Some(segment) = type_path.path.segments.last() else {
		return false;
	};

	if segment.ident == "Self" || self_ident.is_some_and(|ident| segment.ident == *ident) {
		return type_path.path.segments.len() == 1;
	}

	if (segment.ident == "Result" || segment.ident == "Option")
		&& let PathArguments::AngleBracketed(generics) = &segment.arguments
		&& let Some(GenericArgument::Type(inner)) = generics.args.first()
	{
		return returns_self(inner, self_ident);
	}

	false
}

/// Rejects a second `#[api]` left on an item whose first one is being expanded.
pub(crate) fn reject_duplicate(attrs: &[Attribute]) -> Result<()> {
	match attrs.iter().find(|attr| is_api_attr(attr)) {
		Some(attr) => Err(Error::new_spanned(
			attr,
			"duplicate #[api] attribute; an element carries exactly one status",
		)),
		None => Ok(()),
	}
}
