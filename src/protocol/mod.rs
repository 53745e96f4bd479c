//! # ESC/POS Protocol Subset
//!
//! Low-level byte builders for the small slice of ESC/POS the ticket engine
//! needs.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control byte constants and the row terminator
//! - [`text`]: Bold and underline toggles, row emphasis brackets
//! - [`cp850`]: Unicode → CP850 single-byte encoder
//!
//! ## Usage Example
//!
//! ```
//! use tiquetera::protocol::{commands, cp850, text};
//!
//! let mut data = Vec::new();
//! data.extend(text::bold_on());
//! data.extend(cp850::encode("TOTAL"));
//! data.extend(text::bold_off());
//! data.extend(commands::ROW_TERMINATOR);
//!
//! assert_eq!(data.last(), Some(&commands::LF));
//! ```

pub mod commands;
pub mod cp850;
pub mod text;
