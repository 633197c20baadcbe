//! Module tagged from inside its own file.

apitag::api_module!(status = Experimental, since = "0.6", consumers = ["storefront"]);


use apitag::api;

#[api(status = Experimental)]
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
	#[api(status = Stable)]
	pub sku: String,
}
