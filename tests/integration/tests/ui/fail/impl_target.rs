use apitag::api;

pub struct Meter;

#[api(status = Stable)]
impl Meter {}

fn main() {
    let _ = Meter;
}
