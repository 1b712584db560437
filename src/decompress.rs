use crate::bit_reader::BitReader;
use crate::error::DecompressError;
use log::trace;

/// Decompresses a symbol stream described by an arbitrary input alphabet.
///
/// `len` is the number of symbols, `reset_value` the mask for the high bit of
/// one symbol (`2^(bits_per_symbol - 1)`), and `value_at` resolves the symbol
/// at a position to its packed integer value.
///
/// Returns `Ok(None)` for an empty stream (`len == 0`), distinguishing it
/// from a stream that decodes to the empty string. A stream that runs out of
/// symbols exactly on a token boundary without an end marker yields
/// `Ok(Some(String::new()))`; every other malformed stream is an error.
pub fn decompress_with<F>(
    len: usize,
    reset_value: u32,
    value_at: F,
) -> Result<Option<String>, DecompressError>
where
    F: FnMut(usize) -> Result<u32, DecompressError>,
{
    if len == 0 {
        return Ok(None);
    }
    let mut reader = BitReader::new(len, reset_value, value_at)?;

    // Indices 0..=2 are reserved for the escape and end markers and are
    // never dereferenced.
    let mut dictionary: Vec<Vec<u16>> = vec![Vec::new(), Vec::new(), Vec::new()];

    // The first token is always a literal (or an immediate end marker), so
    // only the 2-bit escape needs reading here.
    let first: Vec<u16> = match reader.read_bits(2)? {
        0 => vec![reader.read_bits(8)? as u16],
        1 => vec![reader.read_bits(16)? as u16],
        2 => return Ok(Some(String::new())),
        other => {
            return Err(DecompressError::CorruptCode {
                code: other,
                dict_size: dictionary.len(),
            })
        }
    };
    dictionary.push(first.clone());
    let mut w = first.clone();
    let mut result = first;

    let mut dict_size: u32 = 4;
    let mut enlarge_in: u32 = 4;
    let mut num_bits: u32 = 3;

    loop {
        // Stream exhausted without an end marker: lz-string treats this as
        // an empty-string sentinel, not a truncation error.
        if reader.is_exhausted() {
            return Ok(Some(String::new()));
        }

        let code = match reader.read_bits(num_bits)? {
            escape @ (0 | 1) => {
                let width = if escape == 0 { 8 } else { 16 };
                let unit = reader.read_bits(width)? as u16;
                dictionary.push(vec![unit]);
                dict_size += 1;
                enlarge_in -= 1;
                // The fresh literal is the entry this token refers to.
                dict_size - 1
            }
            2 => {
                trace!(
                    "decompressed {} code units ({} dictionary entries)",
                    result.len(),
                    dictionary.len() - 3
                );
                return String::from_utf16(&result)
                    .map(Some)
                    .map_err(|_| DecompressError::InvalidUtf16);
            }
            code => code,
        };
        if enlarge_in == 0 {
            enlarge_in = 1 << num_bits;
            num_bits += 1;
        }

        let entry = match dictionary.get(code as usize) {
            Some(entry) => entry.clone(),
            // A code may refer to the entry about to be created: the LZ78
            // self-reference case. Anything past that is corruption.
            None if code == dict_size => {
                let mut entry = w.clone();
                entry.push(w[0]);
                entry
            }
            None => {
                return Err(DecompressError::CorruptCode {
                    code,
                    dict_size: dictionary.len(),
                })
            }
        };
        result.extend_from_slice(&entry);

        let mut created = w.clone();
        created.push(entry[0]);
        dictionary.push(created);
        dict_size += 1;
        enlarge_in -= 1;

        w = entry;
        if enlarge_in == 0 {
            enlarge_in = 1 << num_bits;
            num_bits += 1;
        }
    }
}

/// Decompresses a raw 16-bit symbol stream produced by
/// [`compress`](crate::compress).
///
/// An absent (`None`) input decompresses to the empty string; an empty slice
/// yields `Ok(None)`.
pub fn decompress<'a>(
    compressed: impl Into<Option<&'a [u16]>>,
) -> Result<Option<String>, DecompressError> {
    let Some(compressed) = compressed.into() else {
        return Ok(Some(String::new()));
    };
    decompress_with(compressed.len(), 32768, |i| Ok(u32::from(compressed[i])))
}
