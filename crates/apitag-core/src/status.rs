//! The closed set of API statuses.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Maturity status of a tagged API element.
///
/// The five statuses form a flat classification. They carry no ordering,
/// which is why `Status` implements neither `PartialOrd` nor `Ord`.
///
/// # Examples
///
/// ```
/// use apitag_core::Status;
///
/// let status: Status = "experimental".parse().unwrap();
/// assert_eq!(status, Status::Experimental);
/// assert_eq!(status.to_string(), "EXPERIMENTAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Status {
	/// Intended for general use; no breaking changes within the current
	/// major version.
	Stable,
	/// Kept working but not extended; no breaking changes within the
	/// current minor version.
	Maintained,
	/// New and open to feedback; may change or disappear at any time.
	Experimental,
	/// Should no longer be used; scheduled for removal.
	Deprecated,
	/// Not meant for use outside the declaring code base.
	Internal,
}

impl Status {
	/// All statuses in declaration order.
	pub const ALL: [Status; 5] = [
		Status::Stable,
		Status::Maintained,
		Status::Experimental,
		Status::Deprecated,
		Status::Internal,
	];

	/// Canonical upper-case name (`"STABLE"`, `"INTERNAL"`, ...).
	pub const fn as_str(self) -> &'static str {
		match self {
			Status::Stable => "STABLE",
			Status::Maintained => "MAINTAINED",
			Status::Experimental => "EXPERIMENTAL",
			Status::Deprecated => "DEPRECATED",
			Status::Internal => "INTERNAL",
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Status {
	type Err = Error;

	/// Parses a status name, ignoring ASCII case.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Status::ALL
			.into_iter()
			.find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| Error::UnknownStatus(s.to_string()))
	}
}
