use crate::compress::compress_with;
use crate::decompress::decompress_with;
use crate::error::DecompressError;

/// Compresses into "UTF-16-safe" text: 15 bits per symbol, offset by 32 so
/// every symbol is a scalar value in `32..32800`, well below the surrogate
/// range. A trailing space keeps some storage backends from stripping the
/// output.
pub fn compress_to_utf16<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(input) = input.into() else {
        return String::new();
    };
    let units: Vec<u16> = compress_with(input, 15, |v| (v + 32) as u16);
    let mut encoded =
        String::from_utf16(&units).expect("15-bit symbols offset by 32 are below the surrogates");
    encoded.push(' ');
    encoded
}

/// Decompresses a string produced by [`compress_to_utf16`].
pub fn decompress_from_utf16<'a>(
    input: impl Into<Option<&'a str>>,
) -> Result<Option<String>, DecompressError> {
    let Some(input) = input.into() else {
        return Ok(Some(String::new()));
    };
    if input.is_empty() {
        return Ok(None);
    }
    let units: Vec<u16> = input.encode_utf16().collect();
    decompress_with(units.len(), 16384, |i| {
        u32::from(units[i]).checked_sub(32).ok_or_else(|| {
            DecompressError::UnknownSymbol {
                symbol: char::from_u32(u32::from(units[i])).unwrap_or('\u{fffd}'),
            }
        })
    })
}
