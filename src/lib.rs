//! # Tiquetera - Receipt Tickets for Narrow Thermal Printers
//!
//! Tiquetera turns a structured receipt description into the exact bytes a
//! 58mm ESC/POS printer expects: fixed-width rows of CP850 text, bold and
//! underline toggles, and QR codes drawn with block glyphs. It provides:
//!
//! - **Layout**: Accent stripping, word wrap, padding and alignment
//! - **Tickets**: Typed sections (lines, products, tables, paragraphs,
//!   two-column rows, QR codes) and the assembler that renders them
//! - **Transport**: Raw device and raw TCP printing
//! - **Server**: HTTP API that prints tickets on named printers
//!
//! ## Quick Start
//!
//! ```
//! use tiquetera::{
//!     printer::WidthPolicy,
//!     ticket::{LineItem, ProductItem, Section, Ticket, TwoColumnItem, format_ticket},
//! };
//!
//! let ticket = Ticket::new("caja")
//!     .width(58)
//!     .section(Section::Lines(vec![LineItem::new("CAFETERÍA CENTRAL").bold()]))
//!     .section(Section::Products(vec![ProductItem::new(2, "Café con leche", 1.8)]))
//!     .section(Section::TwoColumns(vec![TwoColumnItem::new("TOTAL", "3.60")]));
//!
//! let layout = WidthPolicy::default().resolve(ticket.printer_width);
//! let rendered = format_ticket(&ticket, &layout);
//!
//! // Every row is 32 cells plus emphasis codes and LF.
//! assert_eq!(rendered.report.rows, 8);
//! assert!(rendered.bytes.ends_with(b"--------------------------------\n"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS emphasis codes and the CP850 encoder |
//! | [`layout`] | Normalize, wrap, pad; row writer |
//! | [`ticket`] | Ticket model, section renderers, QR raster |
//! | [`printer`] | Character grid, width policy, printer registry |
//! | [`transport`] | Raw device and TCP backends |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod error;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod server;
pub mod ticket;
pub mod transport;

// Re-exports for convenience
pub use error::{TicketError, TiqueteraError};
pub use printer::{LayoutConfig, WidthPolicy};
pub use ticket::{Rendered, Section, Ticket, format_ticket, format_ticket_bytes};
