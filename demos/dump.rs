//! Example: Dumping marshal files from disk
//!
//! Reads a file, decompresses it when it carries a gzip or zlib header, and
//! prints every top-level value it contains.
//!
//! Run with: cargo run --example dump -- <path_to_file>
//! Set `RUST_LOG=na_marshal=trace` to see the decoder's log output.

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};

use flate2::read::{GzDecoder, ZlibDecoder};
use na_marshal::{Decoder, Value};

/// Pretty-print any value recursively
fn dump(value: &Value) -> String {
    dump_inner(value, 0)
}

fn dump_inner(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match value {
        Value::Nil => format!("{pad}Nil"),
        Value::Bool(v) => format!("{pad}Bool({v})"),
        Value::Int(v) => format!("{pad}Int({v})"),
        Value::Text(v) => format!("{pad}Text({:?})", v.decode()),
        Value::Dict(dict) => {
            let mut entries: Vec<_> = dict.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut out = format!("{pad}Dict[{}] {{\n", dict.len());
            for (key, val) in entries {
                let nested = dump_inner(val, indent + 1);
                out.push_str(&format!(
                    "{}  {:?}: {}\n",
                    pad,
                    key.decode(),
                    nested.trim_start()
                ));
            }
            out.push_str(&format!("{pad}}}"));
            out
        }
    }
}

/// Compression type detected from file header
#[derive(Debug, Clone, Copy)]
enum Compression {
    None,
    Gzip,
    Zlib,
}

/// Detect compression type from the first bytes of data
fn detect_compression(data: &[u8]) -> Compression {
    match data {
        [0x1f, 0x8b, ..] => Compression::Gzip,
        [0x78, 0x01 | 0x5e | 0x9c | 0xda, ..] => Compression::Zlib,
        _ => Compression::None,
    }
}

/// Read and decompress file data if needed
fn read_marshal_file(path: &str) -> na_marshal::Result<Vec<u8>> {
    let mut raw_data = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut raw_data)?;

    let compression = detect_compression(&raw_data);
    println!("Compression: {:?}", compression);

    let mut decompressed = Vec::new();
    match compression {
        Compression::None => return Ok(raw_data),
        Compression::Gzip => GzDecoder::new(&raw_data[..]).read_to_end(&mut decompressed)?,
        Compression::Zlib => ZlibDecoder::new(&raw_data[..]).read_to_end(&mut decompressed)?,
    };
    Ok(decompressed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: cargo run --example dump -- <path_to_file>");
        println!();
        println!("Supported formats:");
        println!("  - Uncompressed marshal data");
        println!("  - Gzip compressed marshal data");
        println!("  - Zlib compressed marshal data");
        return Ok(());
    }

    let path = &args[1];
    println!("Reading marshal file: {}", path);
    println!();

    let data = read_marshal_file(path)?;
    println!("Decompressed size: {} bytes", data.len());
    println!();

    let mut decoder = Decoder::new(&data[..]);
    let mut count = 0;
    loop {
        match decoder.decode_next() {
            Ok(Some(value)) => {
                println!("=== Value {count} ===");
                println!("{}", dump(&value));
                count += 1;
            }
            Ok(None) => break,
            Err(e) => {
                println!("Decoding stopped: {e}");
                break;
            }
        }
    }
    println!();
    println!("{count} values, {} bytes unread", decoder.remaining());

    Ok(())
}
