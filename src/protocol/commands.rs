//! # ESC/POS Control Bytes
//!
//! Byte constants for the framing the ticket engine emits. Everything else
//! on a row is printable code-page text.
//!
//! ## Escape Sequence Structure
//!
//! - Single byte: `LF`
//! - Parameterised: `ESC E n`, `ESC - n` (see [`super::text`])
//!
//! The engine never emits alignment, size or cutter commands. Alignment is
//! done with spaces inside fixed-width rows, so the byte stream prints the
//! same on any firmware that honours plain text and emphasis toggles.

/// ESC (Escape) - Command prefix byte
///
/// Every emphasis toggle begins with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// Row terminator appended after every encoded row.
pub const ROW_TERMINATOR: &[u8] = &[LF];
