#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    na_marshal_fuzz::test_decode(data);
    na_marshal_fuzz::test_serde(data);
});
