//! Word wrapping and fixed-width padding.
//!
//! All widths here are character counts. Callers normalize first, so one
//! character is one printer cell.

use std::borrow::Cow;

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

use super::Alignment;

/// Greedily wrap `text` into lines of at most `width` characters.
///
/// Whitespace characters (tab, CR, LF, VT, FF) count as plain spaces.
/// Words longer than `width` are broken. Empty or whitespace-only text
/// yields no lines at all.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let flattened: Cow<'_, str> = if text.chars().any(|c| c.is_whitespace() && c != ' ') {
        Cow::Owned(
            text.chars()
                .map(|c| if c.is_whitespace() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    };

    if width == 0 || flattened.trim().is_empty() {
        return Vec::new();
    }

    let options = Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(true);

    textwrap::wrap(&flattened, &options)
        .into_iter()
        .map(|line| truncate(&line, width))
        .collect()
}

/// Keep the first `width` characters of `s`.
pub fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Pad `s` with spaces to exactly `width` characters.
///
/// Strings already `width` long or longer come back unchanged. Centering
/// puts the odd space on the right.
pub fn pad(s: &str, width: usize, align: Alignment) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let gap = width - len;
    let (left, right) = match align {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };

    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', right));
    out
}
