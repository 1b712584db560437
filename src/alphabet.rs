use crate::error::DecompressError;
use ahash::AHashMap as HashMap;
use std::sync::OnceLock;

/// A fixed output alphabet with a lazily built reverse lookup.
///
/// The reverse table is pure cache: built at most once per alphabet on first
/// decode (the `OnceLock` makes concurrent first use safe) and read-only
/// afterwards.
pub(crate) struct Alphabet {
    symbols: &'static [u8],
    reverse: OnceLock<HashMap<char, u32>>,
}

/// Standard Base64 symbols; `=` sits at value 64 and is only ever produced
/// as padding, where its set bit falls outside the 6-bit mask walk.
pub(crate) static BASE64: Alphabet =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=");

/// URI-safe variant: `+/=` replaced by `+-$` so the output survives URL
/// encoding untouched.
pub(crate) static URI_SAFE: Alphabet =
    Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+-$");

impl Alphabet {
    const fn new(symbols: &'static [u8]) -> Self {
        Self {
            symbols,
            reverse: OnceLock::new(),
        }
    }

    pub(crate) fn symbol(&self, value: u32) -> char {
        self.symbols[value as usize] as char
    }

    pub(crate) fn value(&self, symbol: char) -> Result<u32, DecompressError> {
        let reverse = self.reverse.get_or_init(|| {
            self.symbols
                .iter()
                .enumerate()
                .map(|(i, &b)| (b as char, i as u32))
                .collect()
        });
        reverse
            .get(&symbol)
            .copied()
            .ok_or(DecompressError::UnknownSymbol { symbol })
    }
}
