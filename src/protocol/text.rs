//! # ESC/POS Emphasis Commands
//!
//! The two text attributes the ticket engine toggles, and the bracketing
//! rule used to wrap a row in them.
//!
//! | Style | On | Off |
//! |-------|----|-----|
//! | Bold | `ESC E 1` | `ESC E 0` |
//! | Underline | `ESC - 1` | `ESC - 0` |
//!
//! ## Nesting
//!
//! ```text
//! ESC E 1 · ESC - 1 · <row text> · ESC - 0 · ESC E 0 · LF
//! └─ prefix (on, in order) ─┘        └─ suffix (off, reversed) ─┘
//! ```

use super::commands::ESC;

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Enable Bold/Emphasis (ESC E 1)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E 1 |
/// | Hex     | 1B 45 01 |
///
/// ## Example
///
/// ```
/// use tiquetera::protocol::text::{bold_on, bold_off};
///
/// assert_eq!(bold_on(), vec![0x1B, 0x45, 0x01]);
/// assert_eq!(bold_off(), vec![0x1B, 0x45, 0x00]);
/// ```
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E', 1]
}

/// # Disable Bold/Emphasis (ESC E 0)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'E', 0]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// # Set Underline Mode (ESC - n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
///
/// `n = 1` turns the one-dot underline on, `n = 0` turns it off.
/// Underline does not affect spaces on most firmware.
#[inline]
pub fn underline_on() -> Vec<u8> {
    vec![ESC, b'-', 1]
}

/// Disable underline
#[inline]
pub fn underline_off() -> Vec<u8> {
    vec![ESC, b'-', 0]
}

// ============================================================================
// ROW STYLE
// ============================================================================

/// Emphasis applied to a whole row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emphasis {
    pub bold: bool,
    pub underline: bool,
}

impl Emphasis {
    /// No emphasis at all.
    pub const NONE: Self = Self {
        bold: false,
        underline: false,
    };

    /// Bold only.
    pub const BOLD: Self = Self {
        bold: true,
        underline: false,
    };

    pub fn new(bold: bool, underline: bool) -> Self {
        Self { bold, underline }
    }

    /// Compute the `(prefix, suffix)` pair that brackets one row.
    ///
    /// The prefix is appended to and the suffix is prepended to, so the
    /// "off" codes always come out in the reverse order of the "on" codes.
    ///
    /// ```
    /// use tiquetera::protocol::text::Emphasis;
    ///
    /// let (pre, post) = Emphasis::new(true, true).brackets();
    /// assert_eq!(pre, vec![0x1B, 0x45, 0x01, 0x1B, 0x2D, 0x01]);
    /// assert_eq!(post, vec![0x1B, 0x2D, 0x00, 0x1B, 0x45, 0x00]);
    /// ```
    pub fn brackets(&self) -> (Vec<u8>, Vec<u8>) {
        let mut prefix = Vec::new();
        let mut suffix = Vec::new();

        if self.bold {
            prefix.extend(bold_on());
            suffix = [bold_off(), suffix].concat();
        }
        if self.underline {
            prefix.extend(underline_on());
            suffix = [underline_off(), suffix].concat();
        }

        (prefix, suffix)
    }

    /// Number of control bytes the brackets add to each row.
    pub fn control_len(&self) -> usize {
        let (prefix, suffix) = self.brackets();
        prefix.len() + suffix.len()
    }
}
