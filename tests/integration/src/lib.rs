//! Fixtures for apitag integration tests
//!
//! Every attachment target is tagged at least once here. The test binaries
//! link this crate, so they see its registrations the way a downstream tool
//! sees a dependency's.

use apitag::{api, api_members};

pub mod catalog;

/// Crate name as it appears at the start of every fixture path.
pub const CRATE: &str = module_path!();

/// Absolute registry path of a fixture element.
pub fn path(relative: &str) -> String {
	format!("{}::{}", CRATE, relative)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError;

/// A billing document.
#[api(status = Stable, since = "1.0", consumers = ["billing", "reports"])]
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
	#[api(status = Stable)]
	pub number: u64,
	#[api(status = Deprecated, since = "0.9")]
	pub legacy_code: String,
	pub notes: String,
}

#[api_members]
impl Invoice {
	#[api(status = Stable, since = "1.0")]
	pub const CURRENCY: &'static str = "EUR";

	#[api(status = Stable, since = "1.0")]
	pub fn new(number: u64) -> Self {
		Self {
			number,
			legacy_code: String::new(),
			notes: String::new(),
		}
	}

	#[api(status = Experimental)]
	pub fn parse(input: &str) -> Result<Self, ParseError> {
		input.trim().parse().map(Invoice::new).map_err(|_| ParseError)
	}

	#[api(status = Maintained, consumers = ["reports"])]
	pub fn total(&self) -> u64 {
		self.number
	}

	pub fn untagged(&self) -> bool {
		self.notes.is_empty()
	}
}

#[api(status = Maintained)]
#[derive(Debug, Clone, PartialEq)]
pub enum Channel {
	#[api(status = Stable)]
	Email,
	#[api(status = Experimental)]
	Webhook {
		#[api(status = Internal)]
		url: String,
	},
	Print,
}

#[api(status = Experimental, since = "0.5")]
pub trait Exporter {
	#[api(status = Internal)]
	type Output;

	#[api(status = Stable)]
	const FORMAT: &'static str;

	#[api(status = Experimental)]
	fn with_defaults() -> Self
	where
		Self: Sized;

	#[api(status = Stable)]
	fn export(&self) -> Self::Output;
}

impl Exporter for Invoice {
	type Output = String;

	const FORMAT: &'static str = "csv";

	fn with_defaults() -> Self {
		Invoice::new(0)
	}

	fn export(&self) -> String {
		format!("{},{}", self.number, Invoice::CURRENCY)
	}
}

/// Amount in minor units.
#[api(status = Stable, since = "1.0")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cents(#[api(status = Stable)] pub u64);

#[api(status = Internal)]
#[derive(Clone, Copy)]
pub union RawAmount {
	#[api(status = Internal)]
	pub signed: i64,
	pub unsigned: u64,
}

/// Generic types have no `TypeId` entry; they are found by path.
#[api(status = Experimental)]
#[derive(Debug, Default)]
pub struct Ledger<T> {
	#[api(status = Experimental)]
	pub entries: Vec<T>,
}

#[api(status = Deprecated, since = "0.8")]
pub type InvoiceList = Vec<Invoice>;

#[api(status = Maintained, since = "0.2")]
pub fn format_cents(amount: Cents) -> String {
	format!("{}.{:02}", amount.0 / 100, amount.0 % 100)
}

#[api(status = Internal)]
pub const MAX_LINES: usize = 500;

#[api(status = Internal, consumers = "diagnostics")]
pub static BUILD_LABEL: &str = "fixtures";

/// A tag schema of its own, recorded as a tag definition.
#[api(status = Experimental)]
#[tag_definition]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Audience {
	pub name: &'static str,
}

#[api(status = Maintained, since = "0.7", consumers = ["billing"])]
pub mod rounding {
	use apitag::api;

	#[api(status = Maintained)]
	pub fn half_even(value: f64) -> f64 {
		let rounded = value.round();
		if (value - value.trunc()).abs() == 0.5 && rounded % 2.0 != 0.0 {
			rounded - value.signum()
		} else {
			rounded
		}
	}
}

/// Members tagged without tagging the container.
#[api_members]
pub struct Address {
	#[api(status = Stable)]
	pub street: String,
	pub city: String,
}
