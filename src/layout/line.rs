//! # Row Emission
//!
//! A [`RowWriter`] accumulates encoded rows for one render pass, the way a
//! compiler context accumulates ops. Every row it writes has the shape:
//!
//! ```text
//! [emphasis on] <exactly `chars_per_line` cells of CP850 text> [emphasis off] LF
//! ```
//!
//! Two ways in:
//!
//! | Method | Wraps | Use |
//! |--------|-------|-----|
//! | [`RowWriter::line`] | yes | Free text: ticket lines, paragraphs |
//! | [`RowWriter::row`] | no | Pre-composed rows: products, tables, separators |
//!
//! Lossy steps are tallied in a [`LossReport`] rather than failing.

use crate::printer::LayoutConfig;
use crate::protocol::commands::ROW_TERMINATOR;
use crate::protocol::cp850;
use crate::protocol::text::Emphasis;

use super::normalize::normalize;
use super::wrap::{pad, truncate, wrap};
use super::Alignment;

/// Tally of what a render pass could not carry through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LossReport {
    /// Scalars removed by normalization: accents, unmappable and control
    /// characters.
    pub dropped_marks: usize,
    /// Characters written as `?` by the code page encoder.
    pub replaced_chars: usize,
    /// Rows emitted.
    pub rows: usize,
}

impl LossReport {
    /// True when no text was altered.
    pub fn is_lossless(&self) -> bool {
        self.dropped_marks == 0 && self.replaced_chars == 0
    }
}

/// Byte buffer plus the layout it is being written for.
#[derive(Debug)]
pub struct RowWriter<'a> {
    buf: Vec<u8>,
    config: &'a LayoutConfig,
    report: LossReport,
}

impl<'a> RowWriter<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            buf: Vec::new(),
            config,
            report: LossReport::default(),
        }
    }

    /// Characters per row.
    pub fn width(&self) -> usize {
        self.config.chars_per_line
    }

    pub fn config(&self) -> &LayoutConfig {
        self.config
    }

    pub fn report(&self) -> LossReport {
        self.report
    }

    /// Normalize `text`, recording what was dropped.
    pub fn normalize(&mut self, text: &str) -> String {
        let normalized = normalize(text);
        self.report.dropped_marks += normalized.dropped;
        normalized.text
    }

    /// Wrap free text and emit one padded row per wrapped line.
    pub fn line(&mut self, text: &str, emphasis: Emphasis, align: Alignment) {
        let text = self.normalize(text);
        let width = self.width();
        for wrapped in wrap(&text, width) {
            let cells = pad(&wrapped, width, align);
            self.emit(&cells, emphasis);
        }
    }

    /// Emit exactly one row: truncated or padded to the width, never wrapped.
    pub fn row(&mut self, text: &str, emphasis: Emphasis, align: Alignment) {
        let text = self.normalize(text);
        let width = self.width();
        let cells = pad(&truncate(&text, width), width, align);
        self.emit(&cells, emphasis);
    }

    /// Full-width dash row.
    pub fn separator(&mut self) {
        let dashes = self.config.separator();
        self.emit(&dashes, Emphasis::NONE);
    }

    /// Emit `text` as-is: no normalization, no padding.
    ///
    /// Used for glyph art (QR blocks) whose characters must reach the code
    /// page encoder intact.
    pub fn raw_row(&mut self, text: &str) {
        self.emit(text, Emphasis::NONE);
    }

    fn emit(&mut self, cells: &str, emphasis: Emphasis) {
        let (prefix, suffix) = emphasis.brackets();
        let (encoded, replaced) = cp850::encode_counting(cells);
        self.report.replaced_chars += replaced;
        self.report.rows += 1;

        self.buf.extend(prefix);
        self.buf.extend(encoded);
        self.buf.extend(suffix);
        self.buf.extend_from_slice(ROW_TERMINATOR);
    }

    pub fn finish(self) -> (Vec<u8>, LossReport) {
        (self.buf, self.report)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Wrap `text` into fixed-width rows with optional emphasis.
///
/// ```
/// use tiquetera::layout::{Alignment, format_line};
/// use tiquetera::printer::LayoutConfig;
///
/// let bytes = format_line("hi", false, false, Alignment::Right, &LayoutConfig::new(5));
/// assert_eq!(bytes, b"   hi\n");
/// ```
pub fn format_line(
    text: &str,
    bold: bool,
    underline: bool,
    align: Alignment,
    config: &LayoutConfig,
) -> Vec<u8> {
    let mut writer = RowWriter::new(config);
    writer.line(text, Emphasis::new(bold, underline), align);
    writer.into_bytes()
}

/// Emit `text` as exactly one fixed-width row.
pub fn format_row(
    text: &str,
    bold: bool,
    underline: bool,
    align: Alignment,
    config: &LayoutConfig,
) -> Vec<u8> {
    let mut writer = RowWriter::new(config);
    writer.row(text, Emphasis::new(bold, underline), align);
    writer.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::{bold_off, bold_on, underline_off, underline_on};

    fn rows(bytes: &[u8]) -> Vec<&[u8]> {
        bytes
            .split_inclusive(|b| *b == b'\n')
            .collect::<Vec<_>>()
    }

    #[test]
    fn test_plain_line() {
        let config = LayoutConfig::new(8);
        assert_eq!(
            format_line("abc", false, false, Alignment::Left, &config),
            b"abc     \n"
        );
        assert_eq!(
            format_line("abc", false, false, Alignment::Center, &config),
            b"  abc   \n"
        );
    }

    #[test]
    fn test_every_row_has_fixed_length() {
        let text = "El veloz murciélago hindú comía feliz cardillo y kiwi";
        for width in 1..40 {
            let config = LayoutConfig::new(width);
            for (bold, underline) in [(false, false), (true, false), (false, true), (true, true)] {
                let control = Emphasis::new(bold, underline).control_len();
                let bytes = format_line(text, bold, underline, Alignment::Center, &config);
                assert_eq!(bytes.len() % (width + control + 1), 0);
                for row in rows(&bytes) {
                    assert_eq!(row.len(), width + control + 1);
                }
            }
        }
    }

    #[test]
    fn test_bold_underline_nesting() {
        let config = LayoutConfig::new(4);
        let bytes = format_line("ok", true, true, Alignment::Left, &config);
        let mut expected = bold_on();
        expected.extend(underline_on());
        expected.extend(b"ok  ");
        expected.extend(underline_off());
        expected.extend(bold_off());
        expected.push(b'\n');
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_empty_text_emits_nothing() {
        let config = LayoutConfig::new(10);
        assert!(format_line("", true, false, Alignment::Left, &config).is_empty());
        assert!(format_line("  \n ", false, false, Alignment::Left, &config).is_empty());
    }

    #[test]
    fn test_row_truncates_instead_of_wrapping() {
        let config = LayoutConfig::new(5);
        assert_eq!(
            format_row("abcdefgh", false, false, Alignment::Right, &config),
            b"abcde\n"
        );
        assert_eq!(
            format_row("", false, false, Alignment::Left, &config),
            b"     \n"
        );
    }

    #[test]
    fn test_row_keeps_inner_spacing() {
        let config = LayoutConfig::new(12);
        assert_eq!(
            format_row(" 2x Co  1.50", false, false, Alignment::Left, &config),
            b" 2x Co  1.50\n"
        );
    }

    #[test]
    fn test_report_counts_losses() {
        let config = LayoutConfig::new(10);
        let mut writer = RowWriter::new(&config);
        writer.line("café", Emphasis::NONE, Alignment::Left);
        writer.raw_row("€");
        writer.separator();
        let (bytes, report) = writer.finish();
        assert_eq!(report.dropped_marks, 1);
        assert_eq!(report.replaced_chars, 1);
        assert_eq!(report.rows, 3);
        assert!(!report.is_lossless());
        assert_eq!(rows(&bytes)[1], b"?\n");
    }

    #[test]
    fn test_escape_bytes_never_reach_the_printer() {
        let config = LayoutConfig::new(10);
        let mut writer = RowWriter::new(&config);
        writer.line("a\x1bbcdefghij", Emphasis::NONE, Alignment::Left);
        let (bytes, report) = writer.finish();
        assert_eq!(bytes, b"abcdefghij\n");
        assert_eq!(report.dropped_marks, 1);
        assert!(!bytes.contains(&0x1B));
    }

    #[test]
    fn test_separator_row() {
        let config = LayoutConfig::new(6);
        let mut writer = RowWriter::new(&config);
        writer.separator();
        assert_eq!(writer.report().rows, 1);
        assert_eq!(writer.into_bytes(), b"------\n");
    }
}
