//! Accent stripping.
//!
//! Text is decomposed with NFKD and every non-ASCII scalar is dropped, so
//! `"Descripción"` becomes `"Descripcion"` and `"ﬁ"` becomes `"fi"`.
//! Characters with no ASCII decomposition (`"€"`, `"日"`) vanish entirely,
//! as do control characters other than whitespace, so user text can never
//! carry printer commands.

use unicode_normalization::UnicodeNormalization;

/// Result of [`normalize`]: the ASCII text and how many scalars were lost.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Normalized {
    pub text: String,
    pub dropped: usize,
}

/// Decompose `text` and keep only its printable ASCII scalars and whitespace.
pub fn normalize(text: &str) -> Normalized {
    let mut out = String::with_capacity(text.len());
    let mut dropped = 0;
    for ch in text.nfkd() {
        if ch.is_ascii() && (!ch.is_ascii_control() || ch.is_whitespace()) {
            out.push(ch);
        } else {
            dropped += 1;
        }
    }
    Normalized { text: out, dropped }
}
