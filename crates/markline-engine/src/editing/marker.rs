use std::sync::OnceLock;

use regex::Regex;

/// Literal prefix of an unordered list item.
pub const BULLET: &str = "- ";

/// List marker found at the start of a line (after indentation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    None,
    Bullet,         // "- "
    Ordered(u64),   // "1. ", "2. ", etc.
}

/// A line split into indentation, list marker and the remaining content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePrefix<'a> {
    pub indentation: &'a str,
    pub marker: MarkerKind,
    pub content: &'a str,
}

impl LinePrefix<'_> {
    /// Indentation depth in bytes; lines of equal depth are list siblings.
    pub fn depth(&self) -> usize {
        self.indentation.len()
    }
}

/// Split a single line (without its line break) into a [`LinePrefix`].
///
/// Never fails: a line with no recognizable marker comes back as
/// [`MarkerKind::None`] with everything after the indentation as content.
pub fn parse(line: &str) -> LinePrefix<'_> {
    let (indentation, rest) = line.split_at(indentation_len(line));

    if let Some((n, content)) = strip_ordered(rest) {
        LinePrefix {
            indentation,
            marker: MarkerKind::Ordered(n),
            content,
        }
    } else if let Some(content) = rest.strip_prefix(BULLET) {
        LinePrefix {
            indentation,
            marker: MarkerKind::Bullet,
            content,
        }
    } else {
        LinePrefix {
            indentation,
            marker: MarkerKind::None,
            content: rest,
        }
    }
}

/// Length in bytes of the leading whitespace run. A `\r` left over from a
/// CRLF line break is content, never indentation.
pub fn indentation_len(line: &str) -> usize {
    line.len()
        - line
            .trim_start_matches(|c: char| c.is_whitespace() && c != '\r')
            .len()
}

fn strip_ordered(rest: &str) -> Option<(u64, &str)> {
    static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
    let ordered_regex =
        ORDERED_REGEX.get_or_init(|| Regex::new(r"^([0-9]+)\. ").expect("Invalid ordered regex"));

    let caps = ordered_regex.captures(rest)?;
    // too many digits for a u64 is plain text, not a marker
    let n = caps[1].parse().ok()?;
    Some((n, &rest[caps[0].len()..]))
}

/// Heading level requested from the toolbar; `Normal` means no heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeadingLevel {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Map a depth (0 = normal, 1..=6 = heading) to a level.
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(Self::Normal),
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    /// Number of `#` characters this level renders with.
    pub fn depth(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }

    /// The ATX prefix for this level, e.g. `"## "`; empty for `Normal`.
    pub fn prefix(self) -> String {
        match self {
            Self::Normal => String::new(),
            level => format!("{} ", "#".repeat(level.depth())),
        }
    }
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,6}) ").expect("Invalid heading regex"))
}

/// Strip a leading ATX heading prefix (1-6 `#` then exactly one space).
///
/// `"####### x"` and `"#x"` are not headings and come back unchanged.
pub fn strip_heading(line: &str) -> &str {
    match heading_regex().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Heading level of a line, `Normal` when it is not an ATX heading.
pub fn heading_level(line: &str) -> HeadingLevel {
    heading_regex()
        .captures(line)
        .and_then(|caps| HeadingLevel::from_depth(caps[1].len()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    // ============ List marker tests ============

    #[rstest]
    #[case("plain text", "", MarkerKind::None, "plain text")]
    #[case("- item", "", MarkerKind::Bullet, "item")]
    #[case("  - nested", "  ", MarkerKind::Bullet, "nested")]
    #[case("1. first", "", MarkerKind::Ordered(1), "first")]
    #[case("\t12. twelfth", "\t", MarkerKind::Ordered(12), "twelfth")]
    #[case("", "", MarkerKind::None, "")]
    #[case("   ", "   ", MarkerKind::None, "")]
    #[case("-item", "", MarkerKind::None, "-item")]
    #[case("1.item", "", MarkerKind::None, "1.item")]
    #[case("1) item", "", MarkerKind::None, "1) item")]
    #[case("* star", "", MarkerKind::None, "* star")]
    #[case("- 1. both", "", MarkerKind::Bullet, "1. both")]
    #[case("\r", "", MarkerKind::None, "\r")]
    #[case("  \r", "  ", MarkerKind::None, "\r")]
    #[case("2. b\r", "", MarkerKind::Ordered(2), "b\r")]
    fn test_parse(
        #[case] line: &str,
        #[case] indentation: &str,
        #[case] marker: MarkerKind,
        #[case] content: &str,
    ) {
        assert_eq!(
            parse(line),
            LinePrefix {
                indentation,
                marker,
                content
            }
        );
    }

    #[test]
    fn test_ordered_marker_overflow_is_plain_text() {
        let line = "99999999999999999999999. big";
        assert_eq!(parse(line).marker, MarkerKind::None);
        assert_eq!(parse(line).content, line);
    }

    #[test]
    fn test_non_ascii_digits_are_not_ordinals() {
        assert_eq!(parse("١. arabic").marker, MarkerKind::None);
    }

    #[test]
    fn test_depth_counts_indentation_bytes() {
        assert_eq!(parse("    - deep").depth(), 4);
        assert_eq!(parse("top").depth(), 0);
    }

    // ============ Heading tests ============

    #[rstest]
    #[case("# Title", "Title")]
    #[case("### Title", "Title")]
    #[case("###### Six", "Six")]
    #[case("####### Seven", "####### Seven")]
    #[case("#NoSpace", "#NoSpace")]
    #[case("#  Two spaces", " Two spaces")]
    #[case("Plain", "Plain")]
    #[case("  # Indented", "  # Indented")]
    #[case("", "")]
    fn test_strip_heading(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(strip_heading(line), expected);
    }

    #[rstest]
    #[case("# a", HeadingLevel::H1)]
    #[case("#### a", HeadingLevel::H4)]
    #[case("###### a", HeadingLevel::H6)]
    #[case("####### a", HeadingLevel::Normal)]
    #[case("#a", HeadingLevel::Normal)]
    #[case("text", HeadingLevel::Normal)]
    fn test_heading_level(#[case] line: &str, #[case] level: HeadingLevel) {
        assert_eq!(heading_level(line), level);
    }

    #[test]
    fn test_heading_level_depth_roundtrip() {
        for depth in 0..=6 {
            let level = HeadingLevel::from_depth(depth).unwrap();
            assert_eq!(level.depth(), depth);
        }
        assert_eq!(HeadingLevel::from_depth(7), None);
    }

    #[test]
    fn test_heading_prefix() {
        assert_eq!(HeadingLevel::Normal.prefix(), "");
        assert_eq!(HeadingLevel::H3.prefix(), "### ");
    }
}
