use thiserror::Error;

/// Failures reported by the decoder and its framing adapters.
///
/// Dictionary state is cumulative, so every variant is unrecoverable for the
/// current call: the decoder aborts instead of returning a partially
/// reconstructed string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressError {
    /// The stream ended before the end-of-stream marker was read.
    #[error("compressed stream truncated: needed symbol {index} but only {len} were supplied")]
    TruncatedInput { index: usize, len: usize },

    /// A decoded code neither resolves to a dictionary entry nor refers to
    /// the entry about to be created.
    #[error("code {code} does not resolve to a dictionary entry (next free index is {dict_size})")]
    CorruptCode { code: u32, dict_size: usize },

    /// An adapter supplied parameters inconsistent with the wire format.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A compressed symbol is not part of the expected alphabet.
    #[error("symbol {symbol:?} is not part of the alphabet")]
    UnknownSymbol { symbol: char },

    /// The reconstructed code units do not form valid UTF-16.
    ///
    /// Only reachable on corrupt input; well-formed streams produced by the
    /// paired encoder always decode to valid UTF-16.
    #[error("decompressed data is not valid UTF-16")]
    InvalidUtf16,
}
