use crate::alphabet::BASE64;
use crate::compress::compress_with;
use crate::decompress::decompress_with;
use crate::error::DecompressError;

/// Compresses into a valid Base64 string (padded to a multiple of 4).
pub fn compress_to_base64<'a>(input: impl Into<Option<&'a str>>) -> String {
    let encoded: String = compress_with(input, 6, |v| BASE64.symbol(v))
        .into_iter()
        .collect();
    match encoded.len() % 4 {
        1 => encoded + "===",
        2 => encoded + "==",
        3 => encoded + "=",
        _ => encoded,
    }
}

/// Decompresses a string produced by [`compress_to_base64`].
///
/// Padding `=` characters need no stripping: they decode to value 64, whose
/// only set bit lies above the 6-bit mask walk and so contributes nothing.
pub fn decompress_from_base64<'a>(
    input: impl Into<Option<&'a str>>,
) -> Result<Option<String>, DecompressError> {
    let Some(input) = input.into() else {
        return Ok(Some(String::new()));
    };
    if input.is_empty() {
        return Ok(None);
    }
    let symbols: Vec<char> = input.chars().collect();
    decompress_with(symbols.len(), 32, |i| BASE64.value(symbols[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_golden() {
        assert_eq!(compress_to_base64("a"), "IZA=");
        assert_eq!(decompress_from_base64("IZA="), Ok(Some("a".to_string())));
    }

    #[test]
    fn test_output_is_padded_base64() {
        for input in ["", "a", "ab", "hello hello hello"] {
            let encoded = compress_to_base64(input);
            assert_eq!(encoded.len() % 4, 0, "unpadded output for {input:?}");
            assert!(encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')));
        }
    }

    #[test]
    fn test_tri_state() {
        assert_eq!(compress_to_base64(None), "");
        assert_eq!(decompress_from_base64(""), Ok(None));
        assert_eq!(decompress_from_base64(None), Ok(Some(String::new())));
    }

    #[test]
    fn test_foreign_symbol_rejected() {
        assert_eq!(
            decompress_from_base64("A!AA"),
            Err(DecompressError::UnknownSymbol { symbol: '!' })
        );
    }

    #[test]
    fn test_roundtrip() {
        let input = "The quick brown fox jumps over the lazy dog, twice. \
                     The quick brown fox jumps over the lazy dog, twice.";
        assert_eq!(
            decompress_from_base64(compress_to_base64(input).as_str()),
            Ok(Some(input.to_string()))
        );
    }
}
