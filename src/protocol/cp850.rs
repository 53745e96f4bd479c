//! # Code Page 850 Encoding
//!
//! Converts Unicode strings to CP850 (DOS Latin-1) single-byte encoding,
//! the default character table on most 58mm ESC/POS printers.
//!
//! ASCII (U+0000–U+007F) passes through unchanged. Characters not in CP850
//! are replaced with `?`; the number of replacements is reported back to
//! the caller so the loss stays observable.

use tracing::debug;

/// Placeholder byte written for characters with no CP850 representation.
pub const REPLACEMENT: u8 = b'?';

/// Encode a Unicode string as CP850 bytes.
///
/// - ASCII (U+0000–U+007F): passed through as-is
/// - CP850 upper half (128 mapped Unicode code points): single byte
/// - Unmapped characters: replaced with `?`
pub fn encode(s: &str) -> Vec<u8> {
    encode_counting(s).0
}

/// Encode a Unicode string as CP850 bytes, returning how many characters
/// had to be replaced.
pub fn encode_counting(s: &str) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(s.len());
    let mut replaced = 0;
    for ch in s.chars() {
        if (ch as u32) < 0x80 {
            out.push(ch as u8);
        } else if let Some(byte) = unicode_to_cp850(ch) {
            out.push(byte);
        } else {
            debug!(
                "cp850: unmapped character '{}' (U+{:04X}), replacing with '?'",
                ch, ch as u32
            );
            out.push(REPLACEMENT);
            replaced += 1;
        }
    }
    (out, replaced)
}

/// Map a Unicode code point to its CP850 byte value (0x80–0xFF).
///
/// Returns `None` if the character has no CP850 representation.
fn unicode_to_cp850(ch: char) -> Option<u8> {
    let byte = match ch {
        // 0x80–0x8F: Accented uppercase/lowercase
        'Ç' => 0x80,
        'ü' => 0x81,
        'é' => 0x82,
        'â' => 0x83,
        'ä' => 0x84,
        'à' => 0x85,
        'å' => 0x86,
        'ç' => 0x87,
        'ê' => 0x88,
        'ë' => 0x89,
        'è' => 0x8A,
        'ï' => 0x8B,
        'î' => 0x8C,
        'ì' => 0x8D,
        'Ä' => 0x8E,
        'Å' => 0x8F,

        // 0x90–0x9F: More accented, ø/Ø, ×, ƒ
        'É' => 0x90,
        'æ' => 0x91,
        'Æ' => 0x92,
        'ô' => 0x93,
        'ö' => 0x94,
        'ò' => 0x95,
        'û' => 0x96,
        'ù' => 0x97,
        'ÿ' => 0x98,
        'Ö' => 0x99,
        'Ü' => 0x9A,
        'ø' => 0x9B,
        '£' => 0x9C,
        'Ø' => 0x9D,
        '×' => 0x9E,
        'ƒ' => 0x9F,

        // 0xA0–0xAF: Spanish, fractions, punctuation
        'á' => 0xA0,
        'í' => 0xA1,
        'ó' => 0xA2,
        'ú' => 0xA3,
        'ñ' => 0xA4,
        'Ñ' => 0xA5,
        'ª' => 0xA6,
        'º' => 0xA7,
        '¿' => 0xA8,
        '®' => 0xA9,
        '¬' => 0xAA,
        '½' => 0xAB,
        '¼' => 0xAC,
        '¡' => 0xAD,
        '«' => 0xAE,
        '»' => 0xAF,

        // 0xB0–0xBF: Shades, box drawing, Latin capitals
        '░' => 0xB0,
        '▒' => 0xB1,
        '▓' => 0xB2,
        '│' => 0xB3,
        '┤' => 0xB4,
        'Á' => 0xB5,
        'Â' => 0xB6,
        'À' => 0xB7,
        '©' => 0xB8,
        '╣' => 0xB9,
        '║' => 0xBA,
        '╗' => 0xBB,
        '╝' => 0xBC,
        '¢' => 0xBD,
        '¥' => 0xBE,
        '┐' => 0xBF,

        // 0xC0–0xCF
        '└' => 0xC0,
        '┴' => 0xC1,
        '┬' => 0xC2,
        '├' => 0xC3,
        '─' => 0xC4,
        '┼' => 0xC5,
        'ã' => 0xC6,
        'Ã' => 0xC7,
        '╚' => 0xC8,
        '╔' => 0xC9,
        '╩' => 0xCA,
        '╦' => 0xCB,
        '╠' => 0xCC,
        '═' => 0xCD,
        '╬' => 0xCE,
        '¤' => 0xCF,

        // 0xD0–0xDF: Icelandic, dotless i, block elements
        'ð' => 0xD0,
        'Ð' => 0xD1,
        'Ê' => 0xD2,
        'Ë' => 0xD3,
        'È' => 0xD4,
        'ı' => 0xD5,
        'Í' => 0xD6,
        'Î' => 0xD7,
        'Ï' => 0xD8,
        '┘' => 0xD9,
        '┌' => 0xDA,
        '█' => 0xDB,
        '▄' => 0xDC,
        '¦' => 0xDD,
        'Ì' => 0xDE,
        '▀' => 0xDF,

        // 0xE0–0xEF
        'Ó' => 0xE0,
        'ß' => 0xE1,
        'Ô' => 0xE2,
        'Ò' => 0xE3,
        'õ' => 0xE4,
        'Õ' => 0xE5,
        'µ' => 0xE6,
        'þ' => 0xE7,
        'Þ' => 0xE8,
        'Ú' => 0xE9,
        'Û' => 0xEA,
        'Ù' => 0xEB,
        'ý' => 0xEC,
        'Ý' => 0xED,
        '¯' => 0xEE,
        '´' => 0xEF,

        // 0xF0–0xFF
        '\u{00AD}' => 0xF0, // soft hyphen
        '±' => 0xF1,
        '‗' => 0xF2,
        '¾' => 0xF3,
        '¶' => 0xF4,
        '§' => 0xF5,
        '÷' => 0xF6,
        '¸' => 0xF7,
        '°' => 0xF8,
        '¨' => 0xF9,
        '·' => 0xFA,
        '¹' => 0xFB,
        '³' => 0xFC,
        '²' => 0xFD,
        '■' => 0xFE,
        '\u{00A0}' => 0xFF, // non-breaking space

        _ => return None,
    };
    Some(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("Hello, world!"), b"Hello, world!");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_counting(""), (vec![], 0));
    }

    #[test]
    fn test_spanish_text() {
        // "Año" → A=0x41, ñ=0xA4, o=0x6F
        assert_eq!(encode("Año"), vec![0x41, 0xA4, 0x6F]);
        // "¿Qué?" → ¿=0xA8, Q, u, é=0x82, ?
        assert_eq!(encode("¿Qué?"), vec![0xA8, 0x51, 0x75, 0x82, 0x3F]);
    }

    #[test]
    fn test_latin_capitals_differ_from_cp437() {
        assert_eq!(encode("Á"), vec![0xB5]);
        assert_eq!(encode("Ó"), vec![0xE0]);
        assert_eq!(encode("ø"), vec![0x9B]);
    }

    #[test]
    fn test_block_elements() {
        assert_eq!(encode("█"), vec![0xDB]);
        assert_eq!(encode("▄"), vec![0xDC]);
        assert_eq!(encode("▀"), vec![0xDF]);
    }

    #[test]
    fn test_invisible_upper_half() {
        assert_eq!(encode_counting("\u{00AD}\u{00A0}"), (vec![0xF0, 0xFF], 0));
    }

    #[test]
    fn test_unmapped_char_becomes_question_mark() {
        assert_eq!(encode_counting("€"), (vec![REPLACEMENT], 1));
        assert_eq!(encode_counting("a★b✓"), (vec![b'a', b'?', b'b', b'?'], 2));
    }

    #[test]
    fn test_one_byte_per_char() {
        let s = "Café ñandú █▀▄";
        assert_eq!(encode(s).len(), s.chars().count());
    }
}
