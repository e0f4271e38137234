#![cfg(feature = "shared")]

mod common;

use bytes::Bytes;
use common::{dict, int, s};
use na_marshal::{Decoder, Value, decode_shared};

#[test]
fn test_shared_decoding() {
    let mut data = dict(&[("id", int(11)), ("label", s("shared"))]);
    data.push(b'T');
    let bytes = Bytes::from(data);

    let values: Vec<Value> = decode_shared(bytes.clone())
        .collect::<na_marshal::Result<_>>()
        .unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["id"], Value::Int(11));
    assert_eq!(values[0]["label"].as_str().unwrap(), "shared");
    assert_eq!(values[1], Value::Bool(true));

    // The session owns its own handle; the caller's copy is untouched.
    assert_eq!(bytes.len(), 1 + 7 + 5 + 10 + 11 + 1 + 1);
}

#[test]
fn test_shared_sessions_are_independent() {
    let bytes = Bytes::from_static(b"TFi\x01\x00\x00\x00");
    let mut first = Decoder::from(bytes.clone());
    let mut second = Decoder::from(bytes.slice(1..));

    assert_eq!(first.decode_next().unwrap(), Some(Value::Bool(true)));
    assert_eq!(second.decode_next().unwrap(), Some(Value::Bool(false)));
    assert_eq!(second.decode_next().unwrap(), Some(Value::Int(1)));
    assert_eq!(first.position(), 1);
    assert_eq!(second.decode_next().unwrap(), None);
}

#[test]
fn test_sessions_on_threads() {
    let bytes = Bytes::from(dict(&[("k", int(5))]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let bytes = bytes.clone();
            std::thread::spawn(move || decode_shared(bytes).next().unwrap().unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap()["k"], Value::Int(5));
    }
}
