//! # Section Renderers
//!
//! Each section kind knows how to write itself into a [`RowWriter`]:
//!
//! | Kind | Rows |
//! |------|------|
//! | `lines` | Wrapped text per item, with its own emphasis and alignment |
//! | `products` | Bold header, dashes, one row per product |
//! | `columns` | Header, dashes, one row per data row |
//! | `paragraph` | Wrapped text, centered |
//! | `two_columns` | One row per pair: left half, right half |
//! | `qr_code` | Block-glyph raster, two modules per row |
//!
//! [`format_ticket`] renders every section in order and closes each one with
//! a dash separator.
//!
//! ## Column Split
//!
//! Tables use a 10% / 60% / remainder split:
//!
//! ```text
//! width 32: [ 3 ][        19         ][   10   ]
//!           Cant.    Descripción        Total
//! ```

use tracing::{debug, warn};

use crate::layout::{Alignment, LossReport, RowWriter, pad, truncate};
use crate::printer::LayoutConfig;
use crate::protocol::text::Emphasis;

use super::types::{
    Cell, ColumnLayout, LineItem, ParagraphItem, ProductItem, QrCodeItem, TwoColumnItem,
};
use super::{Section, Ticket, qr};

/// Labels of the product table header.
pub const PRODUCT_HEADER: [&str; 3] = ["Cant.", "Descripción", "Total"];

/// Anything that writes rows.
pub trait Render {
    fn render(&self, out: &mut RowWriter<'_>);
}

/// Output of a full ticket render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    pub report: LossReport,
}

// ============================================================================
// TABLE HELPERS
// ============================================================================

/// Build one full-width row from up to three cells, each centered in its
/// column. Extra cells are ignored; missing cells leave their column blank.
fn table_row<'s>(out: &mut RowWriter<'_>, cells: impl IntoIterator<Item = &'s str>) -> String {
    let widths = out.config().table_columns();
    let mut cells = cells.into_iter();
    let mut row = String::with_capacity(out.width());
    for width in widths {
        let cell = cells.next().unwrap_or("");
        let text = out.normalize(cell);
        row.push_str(&pad(&truncate(&text, width), width, Alignment::Center));
    }
    row
}

fn product_header(out: &mut RowWriter<'_>) {
    let header = table_row(out, PRODUCT_HEADER);
    out.row(&header, Emphasis::BOLD, Alignment::Left);
}

// ============================================================================
// SECTION KINDS
// ============================================================================

impl Render for LineItem {
    fn render(&self, out: &mut RowWriter<'_>) {
        out.line(
            &self.text,
            Emphasis::new(self.bold, self.underline),
            self.align,
        );
    }
}

impl Render for ProductItem {
    fn render(&self, out: &mut RowWriter<'_>) {
        let quantity = format!("{:>2}x", self.quantity);
        let price = format!("{:.2}", self.price);
        let budget = out
            .width()
            .saturating_sub(quantity.chars().count() + price.chars().count() + 2);

        let description = out.normalize(&self.description);
        let description = pad(&truncate(&description, budget), budget, Alignment::Left);

        let row = format!("{} {} {}", quantity, description, price);
        // Quantity and price alone can overrun the paper; wrap so the amount survives.
        if row.chars().count() > out.width() {
            out.line(&row, Emphasis::NONE, self.align);
        } else {
            out.row(&row, Emphasis::NONE, self.align);
        }
    }
}

impl Render for ColumnLayout {
    fn render(&self, out: &mut RowWriter<'_>) {
        let header = table_row(out, self.columns.iter().map(String::as_str));
        out.row(&header, Emphasis::NONE, Alignment::Center);
        out.separator();

        for data in &self.data {
            let cells: Vec<String> = data.iter().map(Cell::to_string).collect();
            let row = table_row(out, cells.iter().map(String::as_str));
            out.row(&row, Emphasis::NONE, Alignment::Center);
        }
    }
}

impl Render for ParagraphItem {
    fn render(&self, out: &mut RowWriter<'_>) {
        out.line(&self.text, Emphasis::NONE, Alignment::Center);
    }
}

impl Render for TwoColumnItem {
    fn render(&self, out: &mut RowWriter<'_>) {
        let left_width = out.width() / 2;
        let right_width = out.width() - left_width;

        let left = out.normalize(&self.left);
        let right = out.normalize(&self.right);
        let mut row = pad(&truncate(&left, left_width), left_width, Alignment::Left);
        row.push_str(&pad(&truncate(&right, right_width), right_width, Alignment::Right));
        out.row(&row, Emphasis::NONE, Alignment::Left);
    }
}

// An oversized payload prints nothing rather than failing the ticket.
impl Render for QrCodeItem {
    fn render(&self, out: &mut RowWriter<'_>) {
        match qr::qr_rows(&self.data) {
            Ok(rows) => qr::write_raster(out, &rows),
            Err(e) => {
                warn!(error = %e, len = self.data.len(), "skipping QR code");
            }
        }
    }
}

impl Render for Section {
    fn render(&self, out: &mut RowWriter<'_>) {
        match self {
            Section::Lines(items) => items.iter().for_each(|item| item.render(out)),
            Section::Products(items) => {
                product_header(out);
                out.separator();
                items.iter().for_each(|item| item.render(out));
            }
            Section::Columns(layout) => layout.render(out),
            Section::Paragraph(paragraph) => paragraph.render(out),
            Section::TwoColumns(items) => items.iter().for_each(|item| item.render(out)),
            Section::QrCode(qr) => qr.render(out),
            Section::Unknown { kind } => {
                debug!(kind = %kind, "skipping unknown section kind");
            }
        }
    }
}

// ============================================================================
// BYTE-LEVEL ENTRY POINTS
// ============================================================================

fn render_one(item: &impl Render, config: &LayoutConfig) -> Vec<u8> {
    let mut out = RowWriter::new(config);
    item.render(&mut out);
    out.into_bytes()
}

/// Bold `Cant. / Descripción / Total` header row.
pub fn format_product_header(config: &LayoutConfig) -> Vec<u8> {
    let mut out = RowWriter::new(config);
    product_header(&mut out);
    out.into_bytes()
}

/// One product row: quantity, description, price.
///
/// ```
/// use tiquetera::printer::LayoutConfig;
/// use tiquetera::ticket::{ProductItem, format_product};
///
/// let row = format_product(&ProductItem::new(2, "Cola", 1.5), &LayoutConfig::new(20));
/// assert_eq!(row, b" 2x Cola        1.50\n");
/// ```
pub fn format_product(item: &ProductItem, config: &LayoutConfig) -> Vec<u8> {
    render_one(item, config)
}

/// Header, separator and data rows of a three-column table.
pub fn format_columns(layout: &ColumnLayout, config: &LayoutConfig) -> Vec<u8> {
    render_one(layout, config)
}

/// Wrapped, centered paragraph.
pub fn format_paragraph(paragraph: &ParagraphItem, config: &LayoutConfig) -> Vec<u8> {
    render_one(paragraph, config)
}

/// Left-justified label and right-justified value on one row.
pub fn format_two_columns(item: &TwoColumnItem, config: &LayoutConfig) -> Vec<u8> {
    render_one(item, config)
}

/// Render every section in order, each followed by a separator.
pub fn format_ticket(ticket: &Ticket, config: &LayoutConfig) -> Rendered {
    let mut out = RowWriter::new(config);
    for section in &ticket.sections {
        section.render(&mut out);
        out.separator();
    }

    let (bytes, report) = out.finish();
    if !report.is_lossless() {
        debug!(
            dropped_marks = report.dropped_marks,
            replaced_chars = report.replaced_chars,
            "ticket text was simplified for the printer"
        );
    }
    Rendered { bytes, report }
}

/// [`format_ticket`] without the loss report.
pub fn format_ticket_bytes(ticket: &Ticket, config: &LayoutConfig) -> Vec<u8> {
    format_ticket(ticket, config).bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::text::{bold_off, bold_on};

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn test_product_header_width_32() {
        let config = LayoutConfig::MM58;
        let bytes = format_product_header(&config);
        let mut expected = bold_on();
        // [3][19][10]
        expected.extend(b"Can    Descripcion      Total   ");
        expected.extend(bold_off());
        expected.push(b'\n');
        assert_eq!(text(&bytes), text(&expected));
    }

    #[test]
    fn test_product_row_width_32() {
        let row = format_product(&ProductItem::new(12, "Café molido", 4.25), &LayoutConfig::MM58);
        assert_eq!(text(&row), "12x Cafe molido             4.25\n");
    }

    #[test]
    fn test_product_description_is_truncated() {
        let row = format_product(
            &ProductItem::new(1, "Refresco de naranja grande", 10.0),
            &LayoutConfig::new(20),
        );
        assert_eq!(text(&row), " 1x Refresco d 10.00\n");
    }

    #[test]
    fn test_product_budget_underflow_keeps_price() {
        let bytes = format_product(&ProductItem::new(12, "Pan", 1234.5), &LayoutConfig::new(8));
        assert_eq!(text(&bytes), "12x     \n1234.50 \n");
    }

    #[test]
    fn test_product_overflow_rows_are_full_width() {
        let config = LayoutConfig::new(6);
        let bytes = format_product(&ProductItem::new(3, "Pan", 98765.25), &config);
        let text = text(&bytes);
        assert!(text.replace([' ', '\n'], "").contains("98765.25"));
        for row in text.lines() {
            assert_eq!(row.chars().count(), 6);
        }
    }

    #[test]
    fn test_columns_table() {
        let layout: ColumnLayout = serde_json::from_str(
            r#"{"columns": ["N", "Item", "Qty"], "data": [["1", "Cafe", 2], ["2"]]}"#,
        )
        .unwrap();
        let bytes = format_columns(&layout, &LayoutConfig::new(20));
        assert_eq!(
            text(&bytes),
            concat!(
                "N     Item     Qty  \n",
                "--------------------\n",
                "1     Cafe      2   \n",
                "2                   \n",
            )
        );
    }

    #[test]
    fn test_columns_ignore_extra_cells() {
        let layout: ColumnLayout = serde_json::from_str(
            r#"{"columns": ["A", "B", "C", "D"], "data": [[1, 2, 3, 4]]}"#,
        )
        .unwrap();
        let bytes = format_columns(&layout, &LayoutConfig::new(10));
        assert_eq!(
            text(&bytes),
            concat!("A  B    C \n", "----------\n", "1  2    3 \n")
        );
    }

    #[test]
    fn test_paragraph_is_centered() {
        let bytes = format_paragraph(
            &ParagraphItem {
                text: "uno dos tres".into(),
            },
            &LayoutConfig::new(8),
        );
        assert_eq!(text(&bytes), "uno dos \n  tres  \n");
    }

    #[test]
    fn test_two_columns() {
        let config = LayoutConfig::new(20);
        let bytes = format_two_columns(&TwoColumnItem::new("TOTAL", "3.00"), &config);
        assert_eq!(text(&bytes), "TOTAL           3.00\n");

        let bytes = format_two_columns(
            &TwoColumnItem::new("Subtotal sin impuestos", "123456789012"),
            &config,
        );
        assert_eq!(text(&bytes), "Subtotal s1234567890\n");
    }

    #[test]
    fn test_separator_after_every_section() {
        let ticket = Ticket::new("p")
            .section(Section::Unknown {
                kind: "logo".into(),
            })
            .section(Section::Lines(vec![]))
            .section(Section::Unknown {
                kind: "cut".into(),
            });
        let rendered = format_ticket(&ticket, &LayoutConfig::new(4));
        assert_eq!(rendered.bytes, b"----\n----\n----\n");
        assert_eq!(rendered.report.rows, 3);
    }

    #[test]
    fn test_unencodable_qr_payload_is_skipped() {
        let ticket = Ticket::new("p").section(Section::QrCode(QrCodeItem::new("x".repeat(8000))));
        let rendered = format_ticket(&ticket, &LayoutConfig::new(4));
        assert_eq!(rendered.bytes, b"----\n");
    }
}
