//! The stability tag record.

use crate::status::Status;
use std::fmt;

/// Stability metadata attached to a program element.
///
/// A tag is built once, in a `const` context, and only read afterwards.
/// `since` and `consumers` are stored exactly as declared; an omitted
/// `since` reads back as `""` and omitted `consumers` as an empty slice.
///
/// Tags are normally produced by the `#[api(...)]` attribute, but they are
/// plain values and can be built by hand:
///
/// ```
/// use apitag_core::{ApiTag, Status};
///
/// const TAG: ApiTag = ApiTag::new(Status::Internal)
/// 	.with_since("2.1")
/// 	.with_consumers(&["billing", "reports"]);
///
/// assert_eq!(TAG.status(), Status::Internal);
/// assert_eq!(TAG.since(), "2.1");
/// assert_eq!(TAG.consumers(), ["billing", "reports"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ApiTag {
	status: Status,
	since: &'static str,
	consumers: &'static [&'static str],
}

impl ApiTag {
	/// Creates a tag with the given status, an empty `since` and no consumers.
	pub const fn new(status: Status) -> Self {
		Self {
			status,
			since: "",
			consumers: &[],
		}
	}

	/// Sets the version at which the element reached its status.
	pub const fn with_since(mut self, since: &'static str) -> Self {
		self.since = since;
		self
	}

	/// Sets the identifiers of the callers the element is meant for.
	pub const fn with_consumers(mut self, consumers: &'static [&'static str]) -> Self {
		self.consumers = consumers;
		self
	}

	pub const fn status(&self) -> Status {
		self.status
	}

	pub const fn since(&self) -> &'static str {
		self.since
	}

	pub const fn consumers(&self) -> &'static [&'static str] {
		self.consumers
	}
}

impl fmt::Display for ApiTag {
	/// Renders the tag the way it would be declared, omitting defaults.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "status = {}", self.status)?;
		if !self.since.is_empty() {
			write!(f, ", since = {:?}", self.since)?;
		}
		if !self.consumers.is_empty() {
			write!(f, ", consumers = {:?}", self.consumers)?;
		}
		Ok(())
	}
}

/// Types that carry a stability tag.
///
/// Implemented by `#[api(...)]` for every tagged `struct`, `enum` and
/// `union`, so a type's tag is readable without going through the
/// registry:
///
/// ```
/// use apitag_core::{ApiTag, Status, Tagged};
///
/// struct Gauge;
///
/// impl Tagged for Gauge {
/// 	const API_TAG: ApiTag = ApiTag::new(Status::Maintained);
/// }
///
/// assert_eq!(Gauge::API_TAG.status(), Status::Maintained);
/// ```
pub trait Tagged {
	const API_TAG: ApiTag;
}
