//! Error types for reading stability tags at runtime.
//!
//! Declaration mistakes (a missing `status`, an unsupported target) are
//! rejected by the macros at compile time and never show up here. What
//! remains are failures a tool can hit while interpreting tag data.

use crate::kind::ElementKind;
use thiserror::Error;

/// Result type for apitag operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing tag values or building a registry snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
	/// A status name that is not one of the five known statuses.
	#[error("unknown API status '{0}' (expected one of STABLE, MAINTAINED, EXPERIMENTAL, DEPRECATED, INTERNAL)")]
	UnknownStatus(String),

	/// An element kind name that is not a known attachment target.
	#[error("unknown element kind '{0}'")]
	UnknownElementKind(String),

	/// Two registrations claim the same element.
	#[error("element '{path}' ({kind}) is tagged more than once")]
	DuplicateElement {
		/// Fully qualified element path.
		path: String,
		/// Kind of the duplicated element.
		kind: ElementKind,
	},
}
