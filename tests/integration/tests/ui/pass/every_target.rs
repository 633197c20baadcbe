use apitag::{ElementKind, Status, Tagged, api, api_members, registry};

#[api(status = Stable, since = "1.0")]
pub struct Point {
	#[api(status = Stable)]
	pub x: i32,
	#[api(status = Experimental)]
	pub y: i32,
}

#[api_members]
impl Point {
	#[api(status = Stable)]
	pub const ORIGIN: Point = Point { x: 0, y: 0 };

	#[api(status = Stable)]
	pub fn new(x: i32, y: i32) -> Point {
		Point { x, y }
	}

	#[api(status = Maintained)]
	pub fn length_squared(&self) -> i32 {
		self.x * self.x + self.y * self.y
	}
}

#[api(status = Internal)]
pub enum Shape {
	#[api(status = Internal)]
	Dot(#[api(status = Internal)] Point),
}

#[api(status = Experimental)]
pub trait Draw {
	#[api(status = Experimental)]
	fn draw(&self) -> String;
}

#[api(status = Deprecated, since = "0.9")]
pub type Coordinates = (i32, i32);

#[api(status = Maintained)]
pub fn origin() -> Point {
	Point::ORIGIN
}

#[api(status = Internal)]
pub static SCALE: i32 = 2;

#[api(status = Stable)]
#[tag_definition]
pub struct Marker;

#[api(status = Internal)]
mod inner {
	pub fn answer() -> i32 {
		42
	}
}

mod file_like {
	apitag::api_module!(status = Maintained, consumers = ["tools"]);
}

fn main() {
	assert_eq!(Point::API_TAG.since(), "1.0");
	assert_eq!(Shape::API_TAG.status(), Status::Internal);
	assert_eq!(Marker::API_TAG.status(), Status::Stable);
	assert_eq!(Point::new(3, 4).length_squared(), 25);
	assert_eq!(origin().x, 0);
	assert_eq!(SCALE, 2);
	assert_eq!(inner::answer(), 42);

	let expected = [
		("Point", ElementKind::Type),
		("Point::x", ElementKind::Field),
		("Point::y", ElementKind::Field),
		("Point::ORIGIN", ElementKind::Field),
		("Point::new", ElementKind::Constructor),
		("Point::length_squared", ElementKind::Method),
		("Shape", ElementKind::Type),
		("Shape::Dot", ElementKind::Field),
		("Shape::Dot::0", ElementKind::Field),
		("Draw", ElementKind::Type),
		("Draw::draw", ElementKind::Method),
		("Coordinates", ElementKind::Type),
		("origin", ElementKind::Method),
		("SCALE", ElementKind::Field),
		("Marker", ElementKind::TagDefinition),
		("inner", ElementKind::Module),
		("file_like", ElementKind::Module),
	];
	for (relative, kind) in expected {
		let path = format!("{}::{}", module_path!(), relative);
		assert!(registry::find(&path, kind).is_some(), "{} ({}) missing", path, kind);
	}

	let module = registry::tag_of(concat!(module_path!(), "::file_like"), ElementKind::Module).unwrap();
	assert_eq!(module.consumers(), ["tools"]);
}
