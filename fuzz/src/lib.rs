use bytes::Bytes;
use na_marshal::{DecodeConfig, Decoder, Error, Value, decode_all, decode_shared, from_slice};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Record {
    #[serde(default)]
    id: i32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    flag: Option<bool>,
    #[serde(default)]
    child: Option<Box<Record>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
enum Choice {
    Empty,
    Number(i32),
    Pair { a: i32, b: String },
}

fn check_value(value: &Value) {
    if let Some(dict) = value.as_dict() {
        for (key, value) in dict {
            let _ = key.decode();
            check_value(value);
        }
    }
}

pub fn test_decode(data: &[u8]) {
    let mut decoder = Decoder::new(data);
    let mut last = 0;
    loop {
        match decoder.decode_next() {
            Ok(Some(value)) => {
                assert!(decoder.position() > last);
                last = decoder.position();
                check_value(&value);
            }
            Ok(None) => break,
            Err(Error::UnsupportedTag { offset, .. }) => {
                assert!(offset < data.len());
                break;
            }
            Err(_) => break,
        }
    }
    assert!(decoder.position() <= data.len());

    let strict = DecodeConfig::default().strict_dicts(true).max_depth(16);
    let _ = Decoder::with_config(data, strict).count();

    let all = decode_all(data);
    let shared: Result<Vec<_>, _> = decode_shared(Bytes::copy_from_slice(data)).collect();
    match (all, shared) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(_), Err(_)) => {}
        _ => panic!("borrowed and shared decoding disagree"),
    }
}

pub fn test_serde(data: &[u8]) {
    let _ = from_slice::<Record>(data);
    let _ = from_slice::<Choice>(data);
    let _ = from_slice::<HashMap<String, Option<i32>>>(data);
    let _ = from_slice::<&str>(data);
    let _ = from_slice::<Option<bool>>(data);
}
