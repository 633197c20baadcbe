//! Parsing of `#[api(...)]` arguments.
//!
//! ```text
//! #[api(status = Experimental, since = "0.4", consumers = ["cli", "web"])]
//! ```
//!
//! `status` is required. `since` takes a string literal, `consumers` an
//! array of string literals or a single one.

use proc_macro2::{Span, TokenStream};
use syn::{
	Error, Expr, ExprLit, Lit, LitStr, Meta, Result, Token, parse::Parser, punctuated::Punctuated,
	spanned::Spanned,
};

const STATUS_HINT: &str = "expected `status = Stable | Maintained | Experimental | Deprecated | Internal`";

/// Status named in a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusName {
	Stable,
	Maintained,
	Experimental,
	Deprecated,
	Internal,
}

impl StatusName {
	const ALL: [StatusName; 5] = [
		StatusName::Stable,
		StatusName::Maintained,
		StatusName::Experimental,
		StatusName::Deprecated,
		StatusName::Internal,
	];

	/// Variant name of `apitag::Status`.
	pub(crate) fn variant(self) -> &'static str {
		match self {
			StatusName::Stable => "Stable",
			StatusName::Maintained => "Maintained",
			StatusName::Experimental => "Experimental",
			StatusName::Deprecated => "Deprecated",
			StatusName::Internal => "Internal",
		}
	}

	/// Upper-case spelling, as shown in generated docs.
	pub(crate) fn label(self) -> &'static str {
		match self {
			StatusName::Stable => "STABLE",
			StatusName::Maintained => "MAINTAINED",
			StatusName::Experimental => "EXPERIMENTAL",
			StatusName::Deprecated => "DEPRECATED",
			StatusName::Internal => "INTERNAL",
		}
	}

	fn from_ident(name: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|status| status.variant() == name || status.label() == name)
	}
}

/// Parsed arguments of one tag declaration.
#[derive(Debug, Clone)]
pub(crate) struct ApiArgs {
	pub(crate) status: StatusName,
	pub(crate) since: Option<LitStr>,
	pub(crate) consumers: Vec<LitStr>,
}

impl ApiArgs {
	/// Parses attribute arguments, reporting a missing `status` at `span`.
	pub(crate) fn parse(args: TokenStream, span: Span) -> Result<Self> {
		let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;

		let mut status = None;
		let mut since = None;
		let mut consumers = None;

		for meta in metas {
			let nv = match meta {
				Meta::NameValue(nv) => nv,
				other => {
					return Err(Error::new_spanned(
						&other,
						"expected `name = value` arguments, e.g. `status = Stable`",
					));
				}
			};

			let Some(key) = nv.path.get_ident().map(|ident| ident.to_string()) else {
				return Err(Error::new_spanned(&nv.path, "expected an argument name"));
			};

			match key.as_str() {
				"status" => {
					if status.is_some() {
						return Err(Error::new_spanned(&nv.path, "duplicate argument `status`"));
					}
					status = Some(parse_status(&nv.value)?);
				}
				"since" => {
					if since.is_some() {
						return Err(Error::new_spanned(&nv.path, "duplicate argument `since`"));
					}
					since = Some(parse_string(&nv.value, "since")?);
				}
				"consumers" => {
					if consumers.is_some() {
						return Err(Error::new_spanned(&nv.path, "duplicate argument `consumers`"));
					}
					consumers = Some(parse_consumers(&nv.value)?);
				}
				_ => {
					return Err(Error::new_spanned(
						&nv.path,
						format!(
							"unknown argument `{}`; expected one of `status`, `since`, `consumers`",
							key
						),
					));
				}
			}
		}

		let Some(status) = status else {
			return Err(Error::new(
				span,
				format!("missing required argument `status`; {}", STATUS_HINT),
			));
		};

		Ok(Self {
			status,
			since,
			consumers: consumers.unwrap_or_default(),
		})
	}
}

fn parse_status(value: &Expr) -> Result<StatusName> {
	let Expr::Path(expr_path) = value else {
		return Err(Error::new_spanned(value, STATUS_HINT));
	};

	let Some(segment) = expr_path.path.segments.last() else {
		return Err(Error::new_spanned(value, STATUS_HINT));
	};

	StatusName::from_ident(&segment.ident.to_string()).ok_or_else(|| {
		Error::new_spanned(
			&segment.ident,
			format!("unknown status `{}`; {}", segment.ident, STATUS_HINT),
		)
	})
}

fn parse_string(value: &Expr, name: &str) -> Result<LitStr> {
	match value {
		Expr::Lit(ExprLit {
			lit: Lit::Str(lit), ..
		}) => Ok(lit.clone()),
		_ => Err(Error::new_spanned(
			value,
			format!("`{}` expects a string literal", name),
		)),
	}
}

fn parse_consumers(value: &Expr) -> Result<Vec<LitStr>> {
	match value {
		Expr::Array(array) => array
			.elems
			.iter()
			.map(|elem| {
				parse_string(elem, "consumers").map_err(|_| {
					Error::new(elem.span(), "`consumers` entries must be string literals")
				})
			})
			.collect(),
		// A single literal is shorthand for a one-element list
		Expr::Lit(ExprLit {
			lit: Lit::Str(lit), ..
		}) => Ok(vec![lit.clone()]),
		_ => Err(Error::new_spanned(
			value,
			"`consumers` expects an array of string literals, e.g. `consumers = [\"cli\"]`",
		)),
	}
}
