use unicode_width::UnicodeWidthStr;

/// Center `s` in a field of `width` columns, splitting odd margins the way
/// Python's `str.center` does (the extra column goes left when `width` is odd).
pub(super) fn center(s: &str, width: usize) -> String {
    let len = s.width();
    if len >= width {
        return s.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

pub(super) fn ljust(s: &str, width: usize) -> String {
    let len = s.width();
    format!("{}{}", s, " ".repeat(width.saturating_sub(len)))
}

pub(super) fn rjust(s: &str, width: usize) -> String {
    let len = s.width();
    format!("{}{}", " ".repeat(width.saturating_sub(len)), s)
}
