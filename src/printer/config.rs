//! # Printer Configuration
//!
//! Character-grid geometry for the supported paper width, and the
//! policy that maps requested widths onto it.
//!
//! ## Supported Paper
//!
//! | Paper | Print head | Font A cell | Columns |
//! |-------|------------|-------------|---------|
//! | 58mm | 48mm (384 dots) | 12 dots | 32 |
//!
//! ## Usage
//!
//! ```
//! use tiquetera::printer::{LayoutConfig, WidthPolicy};
//!
//! let mut policy = WidthPolicy::default();
//! assert_eq!(policy.update(Some(80)), 32);
//!
//! let config = policy.config();
//! assert_eq!(config.chars_per_line, 32);
//! assert_eq!(config.separator(), "-".repeat(32));
//! ```

/// Columns on 58mm paper with the default 12×24 font.
pub const CHARS_PER_LINE_58MM: usize = 32;

/// # Layout Configuration
///
/// The number of fixed-pitch character cells per printed row. Every
/// renderer takes one by reference; nothing reads a global width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub chars_per_line: usize,
}

impl LayoutConfig {
    /// 58mm paper, 32 columns.
    pub const MM58: Self = Self {
        chars_per_line: CHARS_PER_LINE_58MM,
    };

    /// Create a config with an explicit column count.
    ///
    /// Any width is accepted here so layout can be exercised on narrow
    /// grids; the [`WidthPolicy`] decides what a print request actually gets.
    pub fn new(chars_per_line: usize) -> Self {
        Self { chars_per_line }
    }

    /// A full-width row of dashes.
    pub fn separator(&self) -> String {
        "-".repeat(self.chars_per_line)
    }

    /// Proportional 10% / 60% / remainder column split used by tables.
    ///
    /// ```
    /// use tiquetera::printer::LayoutConfig;
    ///
    /// assert_eq!(LayoutConfig::new(32).table_columns(), [3, 19, 10]);
    /// assert_eq!(LayoutConfig::new(20).table_columns(), [2, 12, 6]);
    /// ```
    pub fn table_columns(&self) -> [usize; 3] {
        let w = self.chars_per_line;
        let qty = w / 10;
        let desc = w * 6 / 10;
        [qty, desc, w - qty - desc]
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::MM58
    }
}

// ============================================================================
// WIDTH POLICY
// ============================================================================

/// # Printer-Width Policy
///
/// Resolves a requested printer width onto the single supported grid.
///
/// Any requested value (58, 80, 999, ...) maps to 32 columns; an absent
/// request keeps the current width. The policy is a plain value: the server
/// keeps one as its default and resolves a copy per request, so two
/// requests never see each other's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthPolicy {
    current: usize,
}

impl WidthPolicy {
    /// Start from an explicit width (e.g. from the command line).
    pub fn new(chars_per_line: usize) -> Self {
        Self {
            current: chars_per_line.max(1),
        }
    }

    /// Width currently in effect.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Apply a width request and return the width now in effect.
    pub fn update(&mut self, requested: Option<u32>) -> usize {
        if requested.is_some() {
            // Only one paper grid is supported; every request lands on it.
            self.current = CHARS_PER_LINE_58MM;
        }
        self.current
    }

    /// Resolve a request into a layout config without mutating the policy.
    pub fn resolve(&self, requested: Option<u32>) -> LayoutConfig {
        let mut scratch = *self;
        LayoutConfig::new(scratch.update(requested))
    }

    /// Layout config for the current width.
    pub fn config(&self) -> LayoutConfig {
        LayoutConfig::new(self.current)
    }
}

impl Default for WidthPolicy {
    fn default() -> Self {
        Self::new(CHARS_PER_LINE_58MM)
    }
}
