//! Conditional compilation integration tests
//!
//! Elements removed by `#[cfg]` must not reach the registry, and
//! alternative definitions of one element must register only the variant
//! that is compiled.

use apitag::{ElementKind, Registry, Status, api, api_members, registry};
use rstest::rstest;

#[api(status = Stable)]
pub struct Settings {
	#[api(status = Stable)]
	pub name: String,
	#[cfg(any())]
	#[api(status = Experimental)]
	pub ghost: u32,
}

#[api(status = Maintained)]
pub enum Backend {
	#[api(status = Stable)]
	Memory,
	#[cfg(any())]
	#[api(status = Experimental)]
	Remote {
		#[api(status = Internal)]
		url: String,
	},
}

pub struct Platform;

#[api_members]
impl Platform {
	#[cfg(unix)]
	#[api(status = Stable)]
	pub fn name() -> &'static str {
		"unix"
	}

	#[cfg(not(unix))]
	#[api(status = Experimental)]
	pub fn name() -> &'static str {
		"other"
	}
}

#[api_members]
#[cfg(any())]
impl Platform {
	#[api(status = Internal)]
	pub fn hidden() {}
}

#[api(status = Internal)]
#[cfg(any())]
pub struct Phantom {
	#[api(status = Internal)]
	pub value: u8,
}

fn path(relative: &str) -> String {
	format!("{}::{}", module_path!(), relative)
}

#[rstest]
#[case("Settings::ghost", ElementKind::Field)]
#[case("Backend::Remote", ElementKind::Field)]
#[case("Backend::Remote::url", ElementKind::Field)]
#[case("Platform::hidden", ElementKind::Method)]
#[case("Phantom", ElementKind::Type)]
#[case("Phantom::value", ElementKind::Field)]
fn test_configured_out_element_is_absent(#[case] relative: &str, #[case] kind: ElementKind) {
	assert!(registry::find(&path(relative), kind).is_none());
}

#[rstest]
#[case("Settings::name", ElementKind::Field)]
#[case("Backend::Memory", ElementKind::Field)]
fn test_compiled_sibling_is_present(#[case] relative: &str, #[case] kind: ElementKind) {
	assert!(registry::find(&path(relative), kind).is_some());
}

#[rstest]
fn test_alternative_definitions_register_once() {
	let found = registry::find_all(&path("Platform::name"));
	assert_eq!(found.len(), 1);

	let expected = if cfg!(unix) {
		Status::Stable
	} else {
		Status::Experimental
	};
	assert_eq!(found[0].tag().status(), expected);
	assert_eq!(found[0].kind(), ElementKind::Method);
	assert_eq!(Platform::name(), if cfg!(unix) { "unix" } else { "other" });
}

#[rstest]
fn test_snapshot_has_no_duplicates() {
	let snapshot = Registry::collect().unwrap();
	assert!(snapshot.contains(&path("Platform::name"), ElementKind::Method));
	assert!(!snapshot.contains(&path("Settings::ghost"), ElementKind::Field));
}
