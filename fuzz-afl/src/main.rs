#[macro_use]
extern crate afl;

fn main() {
    fuzz!(|data: &[u8]| {
        na_marshal_fuzz::test_decode(data);
        na_marshal_fuzz::test_serde(data);
    });
}
