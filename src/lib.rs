//! # lzstring-rs - LZ-based String Compression
//!
//! A Rust implementation of the lz-string algorithm: an LZ78-family
//! dictionary compressor with escaped literals and a growing code width,
//! packed into an arbitrary-size output alphabet.
//!
//! The core is the symmetric [`compress_with`] / [`decompress_with`] pair;
//! both sides rebuild the same phrase dictionary and the same code-width
//! schedule from nothing but the stream itself. Framing adapters map the
//! abstract symbol stream onto Base64, URI-safe text, UTF-16 storage, or raw
//! bytes.
//!
//! ## Example
//!
//! ```
//! use lzstring_rs::{compress_to_base64, decompress_from_base64};
//!
//! let encoded = compress_to_base64("the quick brown fox, the quick brown fox");
//! let decoded = decompress_from_base64(encoded.as_str()).unwrap();
//!
//! assert_eq!(decoded.as_deref(), Some("the quick brown fox, the quick brown fox"));
//! ```
//!
//! ## Null, empty, and failure
//!
//! The JS original distinguishes `null` input, empty input, and corrupt
//! input. That tri-state maps onto Rust as:
//!
//! - compressing `None` yields an empty stream;
//! - decompressing an empty stream yields `Ok(None)`;
//! - decompressing corrupt or truncated data yields a
//!   [`DecompressError`], never a silently wrong string.

mod alphabet;
mod base64;
mod bit_reader;
mod bit_writer;
mod bytes;
mod compress;
mod decompress;
mod error;
mod uri;
mod utf16;


pub use base64::{compress_to_base64, decompress_from_base64};
pub use bytes::{compress_to_uint8_array, decompress_from_uint8_array};
pub use compress::{compress, compress_with};
pub use decompress::{decompress, decompress_with};
pub use error::DecompressError;
pub use uri::{compress_to_encoded_uri_component, decompress_from_encoded_uri_component};
pub use utf16::{compress_to_utf16, decompress_from_utf16};
