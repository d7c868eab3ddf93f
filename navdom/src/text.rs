use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Columns `s` occupies on screen.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Clip `s` to at most `max_width` columns, ending in `…` if anything was cut.
///
/// Returns the clipped text with the columns it occupies. Wide characters are
/// never split.
pub fn fit_to_width(s: &str, max_width: usize) -> (String, usize) {
    let mut used = 0;
    // Longest prefix (byte end, columns) that still leaves room for the ellipsis.
    let mut cut = (max_width > 0).then_some((0, 0));

    for (offset, ch) in s.char_indices() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_width {
            return match cut {
                Some((end, columns)) => (format!("{}{ELLIPSIS}", &s[..end]), columns + 1),
                None => (String::new(), 0),
            };
        }
        used += width;
        if used < max_width {
            cut = Some((offset + ch.len_utf8(), used));
        }
    }

    (s.to_string(), used)
}
