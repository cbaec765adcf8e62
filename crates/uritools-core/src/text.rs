//! UTF-8 (narrow) <-> UTF-16 (wide) text conversion.

use crate::error::EncodingError;

/// Encodes `s` as UTF-16 code units.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Decodes UTF-16 code units, failing on the first unpaired surrogate.
pub fn to_narrow(wide: &[u16]) -> Result<String, EncodingError> {
    let mut out = String::with_capacity(wide.len());
    let mut index = 0;
    for decoded in char::decode_utf16(wide.iter().copied()) {
        match decoded {
            Ok(c) => {
                out.push(c);
                index += c.len_utf16();
            }
            Err(_) => return Err(EncodingError::UnpairedSurrogate { index }),
        }
    }
    Ok(out)
}

/// Decodes UTF-16 code units, replacing unpaired surrogates with U+FFFD.
pub fn to_narrow_lossy(wide: &[u16]) -> String {
    String::from_utf16_lossy(wide)
}

/// Validates raw bytes as UTF-8 text.
pub fn narrow_from_bytes(bytes: &[u8]) -> Result<String, EncodingError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| EncodingError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
}
