use crate::compress::compress;
use crate::decompress::decompress;
use crate::error::DecompressError;

/// Compresses into a byte buffer: the raw 16-bit symbol stream serialized as
/// big-endian pairs.
pub fn compress_to_uint8_array<'a>(input: impl Into<Option<&'a str>>) -> Vec<u8> {
    let units = compress(input);
    let mut bytes = Vec::with_capacity(units.len() * 2);
    for unit in units {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

/// Decompresses a buffer produced by [`compress_to_uint8_array`].
pub fn decompress_from_uint8_array<'a>(
    input: impl Into<Option<&'a [u8]>>,
) -> Result<Option<String>, DecompressError> {
    let Some(input) = input.into() else {
        return Ok(Some(String::new()));
    };
    if input.len() % 2 != 0 {
        return Err(DecompressError::InvalidArgument(format!(
            "byte length {} is not a whole number of 16-bit symbols",
            input.len()
        )));
    }
    let units: Vec<u16> = input
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    decompress(units.as_slice())
}
