//! Program elements a stability tag can be attached to.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Kind of program element carrying a tag.
///
/// | Kind            | Rust declarations                                              |
/// |-----------------|----------------------------------------------------------------|
/// | `Type`          | `struct`, `enum`, `union`, `trait`, `type` alias, associated `type` |
/// | `Field`         | struct field, enum variant, variant field, `const`, `static`, associated `const` |
/// | `Method`        | free `fn`, associated `fn`                                     |
/// | `Constructor`   | associated `fn` without receiver that returns `Self`           |
/// | `Module`        | `mod` declarations                                             |
/// | `TagDefinition` | types describing metadata records, such as [`ApiTag`](crate::ApiTag) itself |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElementKind {
	Type,
	Field,
	Method,
	Constructor,
	Module,
	TagDefinition,
}

impl ElementKind {
	/// All element kinds.
	pub const ALL: [ElementKind; 6] = [
		ElementKind::Type,
		ElementKind::Field,
		ElementKind::Method,
		ElementKind::Constructor,
		ElementKind::Module,
		ElementKind::TagDefinition,
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			ElementKind::Type => "type",
			ElementKind::Field => "field",
			ElementKind::Method => "method",
			ElementKind::Constructor => "constructor",
			ElementKind::Module => "module",
			ElementKind::TagDefinition => "tag_definition",
		}
	}
}

impl fmt::Display for ElementKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ElementKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ElementKind::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| Error::UnknownElementKind(s.to_string()))
	}
}
