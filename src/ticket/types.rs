//! # Section Payload Types
//!
//! The JSON shapes that sit under a section's `"content"` key.
//!
//! | Kind | Content |
//! |------|---------|
//! | `lines` | `[LineItem]` |
//! | `products` | `[ProductItem]` |
//! | `columns` | `ColumnLayout` |
//! | `paragraph` | `ParagraphItem` |
//! | `two_columns` | `[TwoColumnItem]` |
//! | `qr_code` | `QrCodeItem` |

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::layout::Alignment;

fn default_center() -> Alignment {
    Alignment::Center
}

fn default_qr_size() -> u32 {
    1
}

/// One line of free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub underline: bool,
    /// Centered unless stated otherwise.
    #[serde(default = "default_center")]
    pub align: Alignment,
}

impl LineItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            underline: false,
            align: Alignment::Center,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// An itemized purchase: `" 2x Cola        1.50"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductItem {
    pub quantity: i64,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub align: Alignment,
}

impl ProductItem {
    pub fn new(quantity: i64, description: impl Into<String>, price: f64) -> Self {
        Self {
            quantity,
            description: description.into(),
            price,
            align: Alignment::Left,
        }
    }
}

/// A table cell: any JSON scalar, printed through its string form.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell(serde_json::Value);

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell(serde_json::Value::String(s.into()))
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::text(s)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell(serde_json::Value::from(n))
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell(serde_json::Value::from(n))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            serde_json::Value::Null => Ok(()),
            other => write!(f, "{}", other),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(
                serde::de::Error::custom(format!("expected a scalar cell, got {}", value)),
            ),
            scalar => Ok(Cell(scalar)),
        }
    }
}

/// A three-column table with a header row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnLayout {
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<Cell>>,
}

/// Free text, wrapped and centered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParagraphItem {
    pub text: String,
}

/// A label on the left, a value on the right.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TwoColumnItem {
    pub left: String,
    pub right: String,
}

impl TwoColumnItem {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// A QR payload.
///
/// `size` is accepted for compatibility and must be at least 1. The raster
/// is always one module per half-cell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QrCodeItem {
    pub data: String,
    #[serde(default = "default_qr_size")]
    pub size: u32,
}

impl QrCodeItem {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            size: 1,
        }
    }
}
