use crate::alphabet::URI_SAFE;
use crate::compress::compress_with;
use crate::decompress::decompress_with;
use crate::error::DecompressError;

/// Compresses into a string safe to embed in a URI component without
/// percent-encoding: the alphabet avoids `/` and `=` and no padding is added.
pub fn compress_to_encoded_uri_component<'a>(input: impl Into<Option<&'a str>>) -> String {
    compress_with(input, 6, |v| URI_SAFE.symbol(v))
        .into_iter()
        .collect()
}

/// Decompresses a string produced by [`compress_to_encoded_uri_component`].
///
/// Spaces are mapped back to `+` first; URL decoding turns `+` into a space,
/// and streams that travelled through it should still decode.
pub fn decompress_from_encoded_uri_component<'a>(
    input: impl Into<Option<&'a str>>,
) -> Result<Option<String>, DecompressError> {
    let Some(input) = input.into() else {
        return Ok(Some(String::new()));
    };
    if input.is_empty() {
        return Ok(None);
    }
    let symbols: Vec<char> = input
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    decompress_with(symbols.len(), 32, |i| URI_SAFE.value(symbols[i]))
}
