use std::collections::HashMap;
use std::hint::black_box;

use bytes::Bytes;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use mimalloc::MiMalloc;
use na_marshal::{Decoder, decode_all, decode_shared, from_slice};
use serde::Deserialize;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn text(tag: u8, value: &str, out: &mut Vec<u8>) {
    out.push(tag);
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value.as_bytes());
}

fn record(i: i32, out: &mut Vec<u8>) {
    out.push(b'{');
    text(b's', "id", out);
    out.push(b'i');
    out.extend_from_slice(&i.to_le_bytes());
    text(b's', "name", out);
    text(b'u', &format!("record number {i}"), out);
    text(b's', "active", out);
    out.push(if i % 2 == 0 { b'T' } else { b'F' });
    text(b's', "meta", out);
    out.push(b'{');
    text(b's', "owner", out);
    text(b'u', "bench", out);
    text(b's', "parent", out);
    out.push(b'0');
    out.push(b'0');
    out.push(b'0');
}

fn dataset(records: i32) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..records {
        record(i, &mut out);
    }
    out
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct Record<'a> {
    id: i32,
    name: &'a str,
    active: bool,
    #[serde(borrow)]
    meta: HashMap<&'a str, Option<&'a str>>,
}

fn bench_decode(c: &mut Criterion) {
    let data = dataset(10_000);
    let single = dataset(1);

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("decode_all", |b| {
        b.iter(|| decode_all(black_box(&data)).unwrap())
    });

    group.bench_function("iterate", |b| {
        b.iter(|| Decoder::new(black_box(&data[..])).count())
    });

    let shared = Bytes::from(data.clone());
    group.bench_function("shared", |b| {
        b.iter(|| decode_shared(black_box(shared.clone())).count())
    });

    group.finish();

    c.bench_function("serde_record", |b| {
        b.iter(|| from_slice::<Record>(black_box(&single)).unwrap().id)
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
