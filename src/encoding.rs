//! Character encoding detection and transcoding.
//!
//! Text exported from survey documents usually arrives as UTF-8, but older
//! toolchains emit UTF-16 with a byte-order mark or plain windows-1252.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Detect the character encoding of exported document text.
///
/// Checks in this order:
/// 1. A UTF-8 or UTF-16 byte-order mark
/// 2. Valid UTF-8
/// 3. Falls back to windows-1252
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    WINDOWS_1252
}

/// Transcode document bytes to a UTF-8 string.
///
/// Any byte-order mark is removed. Invalid sequences are replaced with �
/// rather than causing errors.
///
/// # Examples
///
/// ```
/// use survey_questions::encoding::transcode_to_utf8;
///
/// // "Não" in windows-1252
/// assert_eq!(transcode_to_utf8(b"N\xE3o"), "Não");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);

    // `decode` sniffs and strips the BOM itself.
    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_16LE;

    #[test]
    fn detect_plain_utf8() {
        assert_eq!(detect_encoding("Questão 1".as_bytes()), UTF_8);
    }

    #[test]
    fn detect_utf16_from_bom() {
        assert_eq!(detect_encoding(&[0xFF, 0xFE, b'1', 0x00]), UTF_16LE);
    }

    #[test]
    fn fallback_to_windows_1252() {
        assert_eq!(detect_encoding(b"Quest\xE3o"), WINDOWS_1252);
    }

    #[test]
    fn transcode_strips_utf8_bom() {
        assert_eq!(transcode_to_utf8(b"\xEF\xBB\xBF1 Nome?"), "1 Nome?");
    }

    #[test]
    fn transcode_windows_1252() {
        assert_eq!(transcode_to_utf8(b"Forma\xE7\xE3o"), "Formação");
    }

    #[test]
    fn transcode_utf16le() {
        let bytes = [0xFF, 0xFE, b'7', 0x00, b' ', 0x00, b'A', 0x00];
        assert_eq!(transcode_to_utf8(&bytes), "7 A");
    }
}
