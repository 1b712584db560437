use crate::bit_writer::BitWriter;
use ahash::{AHashMap as HashMap, AHashSet as HashSet};
use log::trace;

/// Core encoder state.
///
/// Builds the phrase dictionary while packing variable-width codes through a
/// [`BitWriter`]. Phrases are sequences of UTF-16 code units; codes 0 and 1
/// escape a raw 8- or 16-bit literal, code 2 marks the end of the stream, and
/// code 3 is the first assignable phrase code.
struct Compressor<S, F: FnMut(u32) -> S> {
    /// Phrase -> code, insertion order defines the codes.
    dictionary: HashMap<Vec<u16>, u32>,

    /// Code units registered but not yet emitted in literal escape form.
    pending: HashSet<u16>,

    /// Longest phrase matched so far against the dictionary.
    w: Vec<u16>,

    dict_size: u32,
    num_bits: u32,

    /// Codes left to emit before the width grows by one bit. Starts at 2 to
    /// compensate for the first entry, which does not count.
    enlarge_in: u32,

    writer: BitWriter<S, F>,
}

impl<S, F: FnMut(u32) -> S> Compressor<S, F> {
    fn new(bits_per_symbol: u32, symbol_of: F) -> Self {
        Self {
            dictionary: HashMap::new(),
            pending: HashSet::new(),
            w: Vec::new(),
            dict_size: 3,
            num_bits: 2,
            enlarge_in: 2,
            writer: BitWriter::new(bits_per_symbol, symbol_of),
        }
    }

    /// Counts one emitted code against the width schedule. Must mirror the
    /// decoder's bookkeeping exactly: the schedule is never transmitted.
    fn count_code(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1 << self.num_bits;
            self.num_bits += 1;
        }
    }

    fn step(&mut self, c: u16) {
        if !self.dictionary.contains_key(std::slice::from_ref(&c)) {
            self.dictionary.insert(vec![c], self.dict_size);
            self.dict_size += 1;
            self.pending.insert(c);
        }

        let mut wc = self.w.clone();
        wc.push(c);
        if self.dictionary.contains_key(&wc) {
            self.w = wc;
        } else {
            self.emit_w();
            self.count_code();
            self.dictionary.insert(wc, self.dict_size);
            self.dict_size += 1;
            self.w = vec![c];
        }
    }

    /// Emits the code for the current phrase `w`, in literal escape form if
    /// its code unit has not been escaped yet.
    fn emit_w(&mut self) {
        if self.w.len() == 1 && self.pending.remove(&self.w[0]) {
            let unit = u32::from(self.w[0]);
            if unit < 256 {
                self.writer.push_bits(0, self.num_bits);
                self.writer.push_bits(unit, 8);
            } else {
                self.writer.push_bits(1, self.num_bits);
                self.writer.push_bits(unit, 16);
            }
            // The escape also consumes a schedule slot of its own; the
            // caller's count covers the dictionary entry it creates.
            self.count_code();
        } else {
            let code = self.dictionary[&self.w];
            self.writer.push_bits(code, self.num_bits);
        }
    }

    fn finish(mut self) -> Vec<S> {
        if !self.w.is_empty() {
            self.emit_w();
            self.count_code();
        }

        // End-of-stream marker, packed like any dictionary code.
        self.writer.push_bits(2, self.num_bits);
        self.writer.finish()
    }
}

/// Compresses `input` into symbols of an arbitrary output alphabet.
///
/// `symbol_of` maps each packed value in `0..2^bits_per_symbol` to a concrete
/// symbol. An absent (`None`) input compresses to an empty stream; an empty
/// string still yields the flushed end-of-stream marker.
///
/// # Panics
///
/// Panics if `bits_per_symbol` is outside `1..=16`, the symbol widths the
/// wire format supports.
///
/// ```
/// let symbols = lzstring_rs::compress_with("ababab", 6, |v| v as u8);
/// assert!(!symbols.is_empty());
/// ```
pub fn compress_with<'a, S>(
    input: impl Into<Option<&'a str>>,
    bits_per_symbol: u32,
    symbol_of: impl FnMut(u32) -> S,
) -> Vec<S> {
    let Some(input) = input.into() else {
        return Vec::new();
    };

    let mut compressor = Compressor::new(bits_per_symbol, symbol_of);
    let mut units = 0usize;
    for c in input.encode_utf16() {
        compressor.step(c);
        units += 1;
    }

    let entries = compressor.dict_size - 3;
    let symbols = compressor.finish();
    trace!(
        "compressed {units} code units into {} symbols ({entries} dictionary entries)",
        symbols.len()
    );
    symbols
}

/// Compresses into the raw 16-bit alphabet, the widest supported packing.
///
/// The output code units are arbitrary and generally do not form valid
/// UTF-16; pair with [`decompress`](crate::decompress) or reframe through
/// [`compress_to_uint8_array`](crate::compress_to_uint8_array).
pub fn compress<'a>(input: impl Into<Option<&'a str>>) -> Vec<u16> {
    compress_with(input, 16, |v| v as u16)
}
