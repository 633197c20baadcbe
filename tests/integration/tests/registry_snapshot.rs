//! Registry snapshot integration tests
//!
//! Builds `Registry` snapshots over everything linked into this binary:
//! the schema's own entries, the fixture crate and this file.

use apitag::{ApiElement, ApiTag, ElementKind, Error, Registry, Status, api, registry};
use apitag_integration_tests::{CRATE, path};
use rstest::{fixture, rstest};

#[api(status = Experimental, since = "0.1", consumers = ["snapshot"])]
pub mod local {
	use apitag::api;

	#[api(status = Internal)]
	pub fn helper() -> u8 {
		7
	}
}

#[fixture]
fn snapshot() -> Registry {
	Registry::collect().expect("no element is registered twice")
}

#[rstest]
fn test_collect_matches_raw_registry(snapshot: Registry) {
	assert_eq!(snapshot.len(), registry::count());
	assert!(!snapshot.is_empty());
	for element in registry::iter() {
		assert!(snapshot.contains(element.path(), element.kind()));
	}
}

#[rstest]
fn test_snapshot_iterates_in_path_order(snapshot: Registry) {
	let paths: Vec<_> = snapshot.iter().map(ApiElement::path).collect();
	let mut sorted = paths.clone();
	sorted.sort();
	assert_eq!(paths, sorted);
}

#[rstest]
fn test_scoped_to_fixture_crate(snapshot: Registry) {
	let fixtures = snapshot.scoped(CRATE);
	assert!(fixtures.iter().all(|element| element.path().starts_with(CRATE)));
	assert!(fixtures.contains(&path("Invoice"), ElementKind::Type));
	assert!(!fixtures.contains("apitag_core::tag::ApiTag", ElementKind::TagDefinition));
	assert!(!fixtures.contains(concat!(module_path!(), "::local"), ElementKind::Module));
	assert_eq!(fixtures.len(), snapshot.within(CRATE).count());
}

#[rstest]
fn test_filters(snapshot: Registry) {
	let fixtures = snapshot.scoped(CRATE);

	let modules: Vec<_> = fixtures
		.of_kind(ElementKind::Module)
		.map(|element| element.name())
		.collect();
	assert_eq!(modules, ["catalog", "rounding"]);

	let definitions: Vec<_> = fixtures
		.of_kind(ElementKind::TagDefinition)
		.map(|element| element.name())
		.collect();
	assert_eq!(definitions, ["Audience"]);

	let deprecated: Vec<_> = fixtures
		.with_status(Status::Deprecated)
		.map(|element| element.path())
		.collect();
	assert_eq!(deprecated, [path("Invoice::legacy_code"), path("InvoiceList")]);
}

#[rstest]
fn test_local_module_is_registered(snapshot: Registry) {
	let module = snapshot
		.get(concat!(module_path!(), "::local"), ElementKind::Module)
		.unwrap();
	assert_eq!(module.tag().consumers(), ["snapshot"]);

	let local: Vec<_> = snapshot.within(module.path()).map(ApiElement::name).collect();
	assert_eq!(local, ["local", "helper"]);
	assert_eq!(local::helper(), 7);
}

static FIRST: ApiElement = ApiElement::new("dup::Thing", ElementKind::Type, ApiTag::new(Status::Stable))
	.with_location("first.rs", 1);
static SECOND: ApiElement = ApiElement::new("dup::Thing", ElementKind::Type, ApiTag::new(Status::Internal))
	.with_location("second.rs", 2);
static OTHER_KIND: ApiElement = ApiElement::new("dup::Thing", ElementKind::Module, ApiTag::new(Status::Stable));

#[rstest]
fn test_duplicate_registration_is_reported() {
	let err = Registry::from_elements([&FIRST, &SECOND]).unwrap_err();
	assert_eq!(
		err,
		Error::DuplicateElement {
			path: "dup::Thing".to_string(),
			kind: ElementKind::Type,
		}
	);
	assert_eq!(err.to_string(), "element 'dup::Thing' (type) is tagged more than once");
}

#[rstest]
fn test_same_path_with_different_kinds_is_allowed() {
	let snapshot = Registry::from_elements([&FIRST, &OTHER_KIND]).unwrap();
	assert_eq!(snapshot.len(), 2);
	assert_eq!(registry_kinds(&snapshot), [ElementKind::Type, ElementKind::Module]);
}

fn registry_kinds(snapshot: &Registry) -> Vec<ElementKind> {
	snapshot.iter().map(ApiElement::kind).collect()
}

#[rstest]
fn test_snapshot_serializes_as_sequence() {
	let snapshot = Registry::from_elements([&FIRST]).unwrap();
	let json = serde_json::to_value(&snapshot).unwrap();
	assert_eq!(
		json,
		serde_json::json!([{
			"path": "dup::Thing",
			"kind": "type",
			"tag": { "status": "STABLE", "since": "", "consumers": [] },
			"file": "first.rs",
			"line": 1,
		}])
	);
}
