//! # QR Block Raster
//!
//! Draws a QR matrix with CP850 block glyphs so it prints as ordinary text.
//! Each character cell holds two vertically stacked modules:
//!
//! | Top | Bottom | Glyph | CP850 |
//! |-----|--------|-------|-------|
//! | dark | dark | `█` | `0xDB` |
//! | dark | light | `▀` | `0xDF` |
//! | light | dark | `▄` | `0xDC` |
//! | light | light | ` ` | `0x20` |
//!
//! There is no quiet zone. A version 1 code (21×21) takes 11 rows of 21
//! cells and fits a 32-column ticket.

use qrcode::{Color, EcLevel, QrCode};

use crate::error::QrError;
use crate::layout::{Alignment, RowWriter, pad};
use crate::printer::LayoutConfig;

/// Build the glyph rows for `data`, before centering.
///
/// Uses the smallest version that fits at error correction level M.
pub fn qr_rows(data: &str) -> Result<Vec<String>, QrError> {
    let code = QrCode::with_error_correction_level(data, EcLevel::M)?;
    let width = code.width();
    let dark = |x: usize, y: usize| y < width && code[(x, y)] == Color::Dark;

    let rows: Vec<String> = (0..width)
        .step_by(2)
        .map(|y| {
            (0..width)
                .map(|x| match (dark(x, y), dark(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect::<String>()
        })
        .collect();
    Ok(rows)
}

/// Write raster rows centered in the ticket width. Rows wider than the
/// paper are written as they are.
pub(crate) fn write_raster(out: &mut RowWriter<'_>, rows: &[String]) {
    let width = out.width();
    for row in rows {
        out.raw_row(&pad(row, width, Alignment::Center));
    }
}

/// Encode `data` as a centered, LF-terminated block raster.
///
/// The module size is fixed at one half-cell; `_size` is accepted for
/// callers that pass one.
///
/// ```
/// use tiquetera::printer::LayoutConfig;
/// use tiquetera::ticket::generate_qr_code;
///
/// let bytes = generate_qr_code("hello", 1, &LayoutConfig::MM58)?;
/// // 21×21 modules → 11 rows of 32 cells plus LF
/// assert_eq!(bytes.len(), 11 * 33);
/// # Ok::<(), tiquetera::error::QrError>(())
/// ```
pub fn generate_qr_code(data: &str, _size: u32, config: &LayoutConfig) -> Result<Vec<u8>, QrError> {
    let rows = qr_rows(data)?;
    let mut out = RowWriter::new(config);
    write_raster(&mut out, &rows);
    Ok(out.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_one_dimensions() {
        let rows = qr_rows("hello").unwrap();
        assert_eq!(rows.len(), 11);
        assert!(rows.iter().all(|r| r.chars().count() == 21));
    }

    #[test]
    fn test_finder_pattern_top_row() {
        let rows = qr_rows("hello").unwrap();
        // Finder row 0 is solid, row 1 is dark only at its edges.
        assert!(rows[0].starts_with("█▀▀▀▀▀█ "));
        assert!(rows[0].ends_with(" █▀▀▀▀▀█"));
    }

    #[test]
    fn test_odd_last_row_has_no_lower_half() {
        let rows = qr_rows("hello").unwrap();
        assert!(rows[10].chars().all(|c| c == '▀' || c == ' '));
    }

    #[test]
    fn test_centered_and_encoded() {
        let bytes = generate_qr_code("hello", 1, &LayoutConfig::MM58).unwrap();
        let first: Vec<u8> = bytes.iter().take_while(|b| **b != b'\n').copied().collect();
        assert_eq!(first.len(), 32);
        assert_eq!(&first[..5], b"     ");
        assert_eq!(&first[5..12], &[0xDBu8, 0xDF, 0xDF, 0xDF, 0xDF, 0xDF, 0xDB]);
    }

    #[test]
    fn test_deterministic() {
        let config = LayoutConfig::MM58;
        let a = generate_qr_code("https://example.com/t/42", 1, &config).unwrap();
        let b = generate_qr_code("https://example.com/t/42", 5, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wider_than_paper_is_not_centered() {
        let config = LayoutConfig::new(10);
        let bytes = generate_qr_code("hello", 1, &config).unwrap();
        let first = bytes.split(|b| *b == b'\n').next().unwrap();
        assert_eq!(first.len(), 21);
    }

    #[test]
    fn test_payload_too_long() {
        let err = generate_qr_code(&"9".repeat(10_000), 1, &LayoutConfig::MM58).unwrap_err();
        assert!(matches!(err, QrError::Encode(_)));
    }
}
