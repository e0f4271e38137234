use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            na_marshal_fuzz::test_decode(data);
            na_marshal_fuzz::test_serde(data);
        });
    }
}
