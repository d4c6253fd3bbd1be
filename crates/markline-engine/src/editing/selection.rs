use std::ops::Range;

use crate::editing::line::Span;

/// A selection as byte offsets into the document; `start == end` is a cursor.
///
/// Always ordered: constructing from a reversed pair swaps the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection at `at`.
    pub fn cursor(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_collapsed(self) -> bool {
        self.start == self.end
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether both ends are valid offsets into `text` (in range and on a
    /// char boundary).
    pub fn is_within(self, text: &str) -> bool {
        self.end <= text.len() && text.is_char_boundary(self.start) && text.is_char_boundary(self.end)
    }

    /// Clamp both ends to `[0, len]`.
    #[must_use]
    pub fn clamp_to(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Selection> for Range<usize> {
    fn from(selection: Selection) -> Self {
        selection.range()
    }
}

/// Selection after a line-rewriting command: the whole rewritten line.
pub fn select_line(line: Span, new_line: &str) -> Selection {
    Selection::new(line.start, line.start + new_line.len())
}

/// Selection after wrapping the selected text in `delimiter_len`-byte
/// delimiters on both sides: the original text, now between the delimiters.
/// For a cursor this places it between the opening and closing delimiter.
pub fn select_wrapped(selection: Selection, delimiter_len: usize) -> Selection {
    Selection::new(
        selection.start + delimiter_len,
        selection.end + delimiter_len,
    )
}

/// Map an offset in the old text through the replacement of `replaced` by
/// `inserted` bytes.
///
/// Offsets before the replacement are unchanged, offsets at or after its end
/// shift by the net length change, and offsets strictly inside it collapse to
/// its start. An empty `replaced` range therefore pushes an offset sitting
/// exactly on it to the right of the insertion.
pub fn map_offset(offset: usize, replaced: &Range<usize>, inserted: usize) -> usize {
    if offset < replaced.start {
        offset
    } else if offset >= replaced.end {
        offset - replaced.len() + inserted
    } else {
        replaced.start
    }
}

/// [`map_offset`] applied to both ends of a selection.
pub fn map_through(selection: Selection, replaced: &Range<usize>, inserted: usize) -> Selection {
    Selection::new(
        map_offset(selection.start, replaced, inserted),
        map_offset(selection.end, replaced, inserted),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_orders_ends() {
        let selection = Selection::new(9, 3);
        assert_eq!(selection.start(), 3);
        assert_eq!(selection.end(), 9);
        assert_eq!(selection.len(), 6);
        assert!(!selection.is_collapsed());
    }

    #[test]
    fn test_cursor_is_collapsed() {
        assert!(Selection::cursor(4).is_collapsed());
        assert_eq!(Selection::from(2..2), Selection::cursor(2));
    }

    #[rstest]
    #[case("abc", Selection::new(0, 3), true)]
    #[case("abc", Selection::cursor(3), true)]
    #[case("abc", Selection::cursor(4), false)]
    #[case("", Selection::cursor(0), true)]
    #[case("é", Selection::cursor(1), false)]
    #[case("é", Selection::new(0, 2), true)]
    fn test_is_within(#[case] text: &str, #[case] selection: Selection, #[case] expected: bool) {
        assert_eq!(selection.is_within(text), expected);
    }

    #[test]
    fn test_clamp_to() {
        assert_eq!(Selection::new(2, 10).clamp_to(5), Selection::new(2, 5));
        assert_eq!(Selection::new(7, 10).clamp_to(5), Selection::cursor(5));
    }

    #[test]
    fn test_select_line() {
        let line = Span { start: 4, end: 9 };
        assert_eq!(select_line(line, "## Title"), Selection::new(4, 12));
    }

    #[test]
    fn test_select_wrapped() {
        assert_eq!(select_wrapped(Selection::new(6, 11), 2), Selection::new(8, 13));
        assert_eq!(select_wrapped(Selection::cursor(0), 1), Selection::cursor(1));
    }

    // ============ Offset mapping tests ============

    #[rstest]
    #[case::before(1, 4..4, 2, 1)]
    #[case::at_insertion(4, 4..4, 2, 6)]
    #[case::after_insertion(7, 4..4, 2, 9)]
    #[case::inside_deletion(5, 4..6, 0, 4)]
    #[case::at_deletion_end(6, 4..6, 0, 4)]
    #[case::after_deletion(9, 4..6, 0, 7)]
    #[case::after_replacement(10, 2..5, 7, 14)]
    fn test_map_offset(
        #[case] offset: usize,
        #[case] replaced: Range<usize>,
        #[case] inserted: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(map_offset(offset, &replaced, inserted), expected);
    }

    #[test]
    fn test_map_through_keeps_order() {
        let mapped = map_through(Selection::new(3, 8), &(0..0), 2);
        assert_eq!(mapped, Selection::new(5, 10));
    }
}
