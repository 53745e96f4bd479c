//! # Tickets
//!
//! A ticket is a printer name, an optional requested width, and an ordered
//! list of typed sections.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "printer_name": "POS-58",
//!   "printer_width": 58,
//!   "sections": [
//!     {"type": "lines", "content": [{"text": "MI TIENDA", "bold": true}]},
//!     {"type": "products", "content": [{"quantity": 2, "description": "Cola", "price": 1.5}]},
//!     {"type": "two_columns", "content": [{"left": "TOTAL", "right": "3.00"}]},
//!     {"type": "qr_code", "content": {"data": "https://example.com/t/42"}}
//!   ]
//! }
//! ```
//!
//! Each section is checked against its `"type"` when the ticket is built.
//! A payload of the wrong shape is rejected with the section's index; an
//! unrecognised `"type"` is kept as [`Section::Unknown`] and renders as a
//! bare separator.
//!
//! ## Example
//!
//! ```
//! use tiquetera::printer::LayoutConfig;
//! use tiquetera::ticket::{LineItem, Section, Ticket, format_ticket};
//!
//! let ticket = Ticket::new("POS-58")
//!     .section(Section::Lines(vec![LineItem::new("Gracias por su compra")]));
//!
//! let rendered = format_ticket(&ticket, &LayoutConfig::MM58);
//! assert_eq!(rendered.report.rows, 2);
//! ```

pub mod qr;
pub mod render;
pub mod types;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{TicketError, TiqueteraError};

pub use qr::generate_qr_code;
pub use render::{
    Render, Rendered, format_columns, format_paragraph, format_product, format_product_header,
    format_ticket, format_ticket_bytes, format_two_columns,
};
pub use types::{Cell, ColumnLayout, LineItem, ParagraphItem, ProductItem, QrCodeItem, TwoColumnItem};

/// One typed block of a ticket.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Lines(Vec<LineItem>),
    Products(Vec<ProductItem>),
    Columns(ColumnLayout),
    Paragraph(ParagraphItem),
    TwoColumns(Vec<TwoColumnItem>),
    QrCode(QrCodeItem),
    /// A `"type"` this renderer does not know. Only its separator prints.
    Unknown { kind: String },
}

impl Section {
    /// The wire tag for this section.
    pub fn kind(&self) -> &str {
        match self {
            Section::Lines(_) => "lines",
            Section::Products(_) => "products",
            Section::Columns(_) => "columns",
            Section::Paragraph(_) => "paragraph",
            Section::TwoColumns(_) => "two_columns",
            Section::QrCode(_) => "qr_code",
            Section::Unknown { kind } => kind,
        }
    }

    /// Build a section from its raw JSON object.
    ///
    /// `index` is the section's position in the ticket, used in errors.
    pub fn from_value(index: usize, value: Value) -> Result<Self, TicketError> {
        let mut obj = match value {
            Value::Object(map) => map,
            other => {
                return Err(TicketError::MalformedSection {
                    index,
                    message: format!("expected object, got {}", other),
                });
            }
        };

        let kind = match obj.remove("type") {
            Some(Value::String(kind)) => kind,
            Some(other) => {
                return Err(TicketError::MalformedSection {
                    index,
                    message: format!("\"type\" must be a string, got {}", other),
                });
            }
            None => {
                return Err(TicketError::MalformedSection {
                    index,
                    message: "missing \"type\"".to_string(),
                });
            }
        };

        let content = obj.remove("content").unwrap_or(Value::Null);
        let invalid = |e: serde_json::Error| TicketError::InvalidContent {
            index,
            kind: kind.clone(),
            message: e.to_string(),
        };

        let section = match kind.as_str() {
            "lines" => Section::Lines(serde_json::from_value(content).map_err(invalid)?),
            "products" => Section::Products(serde_json::from_value(content).map_err(invalid)?),
            "columns" => Section::Columns(serde_json::from_value(content).map_err(invalid)?),
            "paragraph" => Section::Paragraph(serde_json::from_value(content).map_err(invalid)?),
            "two_columns" => {
                Section::TwoColumns(serde_json::from_value(content).map_err(invalid)?)
            }
            "qr_code" => {
                let item: QrCodeItem = serde_json::from_value(content).map_err(invalid)?;
                if item.size == 0 {
                    return Err(TicketError::InvalidQrSize { index });
                }
                Section::QrCode(item)
            }
            _ => Section::Unknown { kind: kind.clone() },
        };
        Ok(section)
    }
}

/// Wire shape of a ticket before its sections are checked.
#[derive(Debug, Deserialize)]
struct RawTicket {
    printer_name: String,
    #[serde(default)]
    printer_width: Option<u32>,
    sections: Vec<Value>,
}

/// A complete receipt to be printed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawTicket")]
pub struct Ticket {
    /// Which configured printer receives the bytes.
    pub printer_name: String,
    /// Requested paper width. Any value resolves to the supported grid.
    pub printer_width: Option<u32>,
    pub sections: Vec<Section>,
}

impl TryFrom<RawTicket> for Ticket {
    type Error = TicketError;

    fn try_from(raw: RawTicket) -> Result<Self, Self::Error> {
        let sections = raw
            .sections
            .into_iter()
            .enumerate()
            .map(|(i, v)| Section::from_value(i, v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Ticket {
            printer_name: raw.printer_name,
            printer_width: raw.printer_width,
            sections,
        })
    }
}

impl Ticket {
    pub fn new(printer_name: impl Into<String>) -> Self {
        Self {
            printer_name: printer_name.into(),
            printer_width: None,
            sections: Vec::new(),
        }
    }

    /// Set the requested paper width.
    pub fn width(mut self, printer_width: u32) -> Self {
        self.printer_width = Some(printer_width);
        self
    }

    /// Append a section.
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Parse a ticket, keeping section errors typed.
    pub fn from_json(json: &str) -> Result<Self, TiqueteraError> {
        let raw: RawTicket = serde_json::from_str(json)?;
        Ok(Ticket::try_from(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Alignment;

    #[test]
    fn test_parse_all_kinds() {
        let json = r#"{
            "printer_name": "POS-58",
            "printer_width": 58,
            "sections": [
                {"type": "lines", "content": [{"text": "Hola", "bold": true, "align": "left"}]},
                {"type": "products", "content": [{"quantity": 1, "description": "Pan", "price": 0.5}]},
                {"type": "columns", "content": {"columns": ["A", "B", "C"], "data": [["1", 2, 3.5]]}},
                {"type": "paragraph", "content": {"text": "Texto"}},
                {"type": "two_columns", "content": [{"left": "TOTAL", "right": "0.50"}]},
                {"type": "qr_code", "content": {"data": "abc", "size": 3}}
            ]
        }"#;
        let ticket = Ticket::from_json(json).unwrap();
        assert_eq!(ticket.printer_name, "POS-58");
        assert_eq!(ticket.printer_width, Some(58));
        let kinds: Vec<&str> = ticket.sections.iter().map(Section::kind).collect();
        assert_eq!(
            kinds,
            vec!["lines", "products", "columns", "paragraph", "two_columns", "qr_code"]
        );
        match &ticket.sections[0] {
            Section::Lines(items) => {
                assert!(items[0].bold);
                assert_eq!(items[0].align, Alignment::Left);
            }
            other => panic!("expected lines, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        let json = r#"{"printer_name": "p", "sections": [{"type": "barcode", "content": {"x": 1}}]}"#;
        let ticket = Ticket::from_json(json).unwrap();
        assert_eq!(
            ticket.sections,
            vec![Section::Unknown {
                kind: "barcode".into()
            }]
        );
        assert_eq!(ticket.printer_width, None);
    }

    #[test]
    fn test_mismatched_content_names_section() {
        let json = r#"{"printer_name": "p", "sections": [
            {"type": "lines", "content": []},
            {"type": "products", "content": {"text": "not a list"}}
        ]}"#;
        let err = Ticket::from_json(json).unwrap_err();
        match err {
            TiqueteraError::InvalidTicket(TicketError::InvalidContent { index, kind, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(kind, "products");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_type_is_malformed() {
        let err = Section::from_value(0, serde_json::json!({"content": []})).unwrap_err();
        assert!(matches!(err, TicketError::MalformedSection { index: 0, .. }));
        let err = Section::from_value(3, serde_json::json!("lines")).unwrap_err();
        assert!(matches!(err, TicketError::MalformedSection { index: 3, .. }));
    }

    #[test]
    fn test_bad_alignment_is_rejected() {
        let err = Section::from_value(
            0,
            serde_json::json!({"type": "lines", "content": [{"text": "x", "align": "middle"}]}),
        )
        .unwrap_err();
        assert!(matches!(err, TicketError::InvalidContent { .. }));
    }

    #[test]
    fn test_zero_qr_size_is_rejected() {
        let err = Section::from_value(
            4,
            serde_json::json!({"type": "qr_code", "content": {"data": "x", "size": 0}}),
        )
        .unwrap_err();
        assert_eq!(err, TicketError::InvalidQrSize { index: 4 });
    }

    #[test]
    fn test_serde_path_reports_section_error() {
        let json = r#"{"printer_name": "p", "sections": [{"type": "paragraph", "content": 5}]}"#;
        let err = serde_json::from_str::<Ticket>(json).unwrap_err();
        assert!(err.to_string().contains("sections[0]"));
    }

    #[test]
    fn test_builder() {
        let ticket = Ticket::new("caja")
            .width(80)
            .section(Section::Paragraph(ParagraphItem { text: "x".into() }));
        assert_eq!(ticket.printer_width, Some(80));
        assert_eq!(ticket.sections.len(), 1);
    }
}
