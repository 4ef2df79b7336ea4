use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal columns
pub(super) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

/// Left padding that centers `content_width` columns in `width`
pub(super) fn center_pad(content_width: usize, width: usize) -> usize {
    width.saturating_sub(content_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_wide_chars() {
        assert_eq!(display_width("lock"), 4);
        assert_eq!(display_width("集中"), 4);
        assert_eq!(spans_width(&[Span::raw("ab"), Span::raw("\u{2022} c")]), 5);
    }

    #[test]
    fn center_pad_never_underflows() {
        assert_eq!(center_pad(4, 10), 3);
        assert_eq!(center_pad(12, 10), 0);
    }
}
