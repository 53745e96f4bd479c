//! # Fixed-Width Line Layout
//!
//! Everything between a user string and an encoded printer row.
//!
//! ```text
//! "Café con leche"          normalize      "Cafe con leche"
//!        │                     │                 │
//!        └────────────► wrap @ width ──► pad/align ──► brackets + cp850 + LF
//! ```
//!
//! ## Modules
//!
//! - [`normalize`]: NFKD decomposition down to plain ASCII
//! - [`wrap`]: Greedy word wrap, truncation and padding by character count
//! - [`line`]: Row writer that emits bracketed, encoded rows

pub mod line;
pub mod normalize;
pub mod wrap;

use std::str::FromStr;

use serde::Deserialize;

use crate::error::TicketError;

pub use line::{LossReport, RowWriter, format_line, format_row};
pub use normalize::{Normalized, normalize};
pub use wrap::{pad, truncate, wrap};

/// Horizontal placement of text inside a fixed-width row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Alignment {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(TicketError::InvalidAlignment(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_from_str() {
        assert_eq!("left".parse::<Alignment>().unwrap(), Alignment::Left);
        assert_eq!("center".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_eq!("right".parse::<Alignment>().unwrap(), Alignment::Right);
        assert_eq!(
            "justify".parse::<Alignment>(),
            Err(TicketError::InvalidAlignment("justify".into()))
        );
    }

    #[test]
    fn test_alignment_deserialize() {
        let a: Alignment = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(a, Alignment::Right);
        assert!(serde_json::from_str::<Alignment>("\"middle\"").is_err());
    }
}
