use apitag::api;

pub struct Meter;

impl Meter {
    #[api(status = Stable)]
    pub fn read(&self) -> u32 {
        0
    }
}

fn main() {
    let _ = Meter;
}
