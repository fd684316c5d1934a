use tracing::warn;

const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decode a PDF text string into a Rust string.
///
/// Strings carrying a UTF-16BE byte order mark are decoded as UTF-16; every
/// other string is treated as UTF-8. Invalid sequences are replaced rather
/// than rejected so a single odd field name never aborts an enumeration.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(err) => {
            warn!("text string is not valid UTF-8 ({err}), decoding lossily");
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Render a name object the way it is written in a PDF: `/Off`, `/Btn`.
pub fn decode_name(bytes: &[u8]) -> String {
    format!("/{}", String::from_utf8_lossy(bytes))
}
