//! Test-only encoder producing the wire layout the decoder reads.

#![allow(dead_code)]

use na_marshal::{Tag, Value};

pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    encode_into(value, &mut out);
    out
}

pub fn encode_into(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Nil => out.push(Tag::Nil as u8),
        Value::Bool(true) => out.push(Tag::True as u8),
        Value::Bool(false) => out.push(Tag::False as u8),
        Value::Text(text) => out.extend(text_with(Tag::Unicode, text.as_bytes())),
        Value::Int(v) => out.extend(int(*v)),
        Value::Dict(dict) => {
            out.push(Tag::Dict as u8);
            for (key, value) in dict {
                out.extend(text_with(Tag::String, key.as_bytes()));
                encode_into(value, out);
            }
            out.push(Tag::Nil as u8);
        }
    }
}

pub fn text_with(tag: Tag, bytes: &[u8]) -> Vec<u8> {
    let mut out = vec![tag as u8];
    out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(bytes);
    out
}

pub fn s(text: &str) -> Vec<u8> {
    text_with(Tag::String, text.as_bytes())
}

pub fn u(text: &str) -> Vec<u8> {
    text_with(Tag::Unicode, text.as_bytes())
}

pub fn int(v: i32) -> Vec<u8> {
    let mut out = vec![Tag::Int as u8];
    out.extend_from_slice(&v.to_le_bytes());
    out
}

/// `{`, the given pre-encoded entries, then the nil terminator.
pub fn dict(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut out = vec![Tag::Dict as u8];
    for (key, value) in entries {
        out.extend(s(key));
        out.extend_from_slice(value);
    }
    out.push(Tag::Nil as u8);
    out
}

/// `depth` dictionaries, each holding the next under the key `"n"`.
pub fn nested(depth: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for _ in 0..depth {
        out.push(Tag::Dict as u8);
        out.extend(s("n"));
    }
    out.push(Tag::Nil as u8);
    for _ in 0..depth {
        out.push(Tag::Nil as u8);
    }
    out
}
