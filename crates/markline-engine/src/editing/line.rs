//! Line boundaries relative to an arbitrary byte offset.
//!
//! A line is the half-open range between two line breaks. The break itself
//! belongs to neither neighbour, so slicing a located span never yields `\n`.

/// A byte range `[start, end)` into the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Slice `text` with this span.
    pub fn slice(self, text: &str) -> &str {
        &text[self.range()]
    }
}

/// Locate the line containing `offset`.
///
/// The character immediately before `offset` is the look-back point, so an
/// offset sitting on a line break resolves to the line that ends there.
/// Offsets past the end of `text` are clamped.
pub fn locate(text: &str, offset: usize) -> Span {
    let offset = offset.min(text.len());
    let bytes = text.as_bytes();

    // `\n` never occurs inside a multi-byte sequence, so byte search is safe
    // and both ends of the span always land on char boundaries.
    let start = bytes[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |pos| pos + 1);
    let end = bytes[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(text.len(), |pos| offset + pos);

    Span { start, end }
}

/// Lines strictly before the line containing `line_start`, most recent first.
pub fn lines_before(text: &str, line_start: usize) -> impl Iterator<Item = &str> {
    let start = locate(text, line_start).start;
    // `start - 1` is the line break that ends the previous line
    let head = (start > 0).then(|| &text[..start - 1]);
    head.into_iter().flat_map(|head| head.rsplit('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, 0, 0)]
    #[case("abc", 0, 0, 3)]
    #[case("abc", 3, 0, 3)]
    #[case("abc\ndef", 2, 0, 3)]
    #[case("abc\ndef", 4, 4, 7)]
    #[case("abc\ndef", 7, 4, 7)]
    #[case("abc\n", 4, 4, 4)]
    #[case("\n\n", 1, 1, 1)]
    #[case("a\n\nb", 2, 2, 2)]
    fn test_locate(
        #[case] text: &str,
        #[case] offset: usize,
        #[case] start: usize,
        #[case] end: usize,
    ) {
        assert_eq!(locate(text, offset), Span { start, end });
    }

    #[test]
    fn test_offset_on_line_break_resolves_to_line_ending_there() {
        // offset 3 is the `\n` between "abc" and "def"
        let span = locate("abc\ndef", 3);
        assert_eq!(span, Span { start: 0, end: 3 });
        assert_eq!(span.slice("abc\ndef"), "abc");
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        assert_eq!(locate("ab\ncd", 99), Span { start: 3, end: 5 });
    }

    #[test]
    fn test_multibyte_text() {
        let text = "héllo\nwörld";
        let span = locate(text, text.len());
        assert_eq!(span.slice(text), "wörld");
    }

    #[test]
    fn test_lines_before_most_recent_first() {
        let text = "one\ntwo\nthree\nfour";
        let lines: Vec<_> = lines_before(text, 14).collect();
        assert_eq!(lines, vec!["three", "two", "one"]);
    }

    #[test]
    fn test_lines_before_first_line_is_empty() {
        assert_eq!(lines_before("one\ntwo", 0).count(), 0);
        assert_eq!(lines_before("one\ntwo", 2).count(), 0);
    }

    #[test]
    fn test_lines_before_includes_blank_lines() {
        let lines: Vec<_> = lines_before("\n\nx", 2).collect();
        assert_eq!(lines, vec!["", ""]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn located_line_contains_offset(text in "[a-c\n ]{0,40}", raw in 0..64usize) {
                let offset = raw.min(text.len());
                let span = locate(&text, offset);

                prop_assert!(span.start <= offset);
                prop_assert!(offset <= span.end);
                prop_assert!(span.start == 0 || text.as_bytes()[span.start - 1] == b'\n');
                prop_assert!(span.end == text.len() || text.as_bytes()[span.end] == b'\n');
                prop_assert!(!span.slice(&text).contains('\n'));
            }
        }
    }
}
