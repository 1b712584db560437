use lzstring_rs::{
    compress, compress_to_base64, compress_to_encoded_uri_component, compress_to_uint8_array,
    compress_to_utf16, decompress,
};
use std::env;
use std::fs;

/// Compresses a text file through every framing and verifies the roundtrip.
///
/// Usage: cargo run --example demo <filename>
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <filename>", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    let input = fs::read_to_string(filename).unwrap_or_else(|err| {
        eprintln!("Cannot read \"{}\": {}", filename, err);
        std::process::exit(1);
    });

    let raw = compress(input.as_str());
    let base64 = compress_to_base64(input.as_str());
    let uri = compress_to_encoded_uri_component(input.as_str());
    let utf16 = compress_to_utf16(input.as_str());
    let bytes = compress_to_uint8_array(input.as_str());

    // Verify by decompressing the raw stream
    match decompress(raw.as_slice()) {
        Ok(Some(restored)) if restored == input => {}
        Ok(restored) => {
            eprintln!("Roundtrip mismatch: got {:?}", restored.map(|s| s.len()));
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Roundtrip failed: {}", err);
            std::process::exit(1);
        }
    }

    let input_units = input.encode_utf16().count();

    println!("=== {} ===", filename);
    println!("Input:        {} code units", input_units);
    println!("Raw:          {} symbols (16 bits each)", raw.len());
    println!("Base64:       {} chars", base64.len());
    println!("URI-safe:     {} chars", uri.len());
    println!("UTF-16:       {} chars", utf16.chars().count());
    println!("Bytes:        {} bytes", bytes.len());
    println!(
        "Ratio (raw):  {:.2}%",
        (raw.len() as f64 / input_units.max(1) as f64) * 100.0
    );
}
