use std::ops::Range;
use std::str::FromStr;

use crate::editing::line::{self, Span};
use crate::editing::marker::{self, BULLET, HeadingLevel};
use crate::editing::ordinal::next_ordinal;
use crate::editing::selection::{
    Selection, map_offset, map_through, select_line, select_wrapped,
};

/// Kind of list marker to apply to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,  // "- "
    Ordered, // "1. ", "2. ", etc.
}

/// Inline emphasis wrapped around a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineStyle {
    Bold,
    Italic,
}

/// Formatting commands that can be applied to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    Indent,
    Outdent,
    ToggleHeading { level: HeadingLevel },
    ApplyList { kind: ListKind },
    WrapInline { style: InlineStyle },
}

/// Tunables for the formatting commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces inserted by `Indent` and removed by `Outdent`.
    pub indent_width: usize,
    pub bold_delimiter: String,
    pub italic_delimiter: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            bold_delimiter: "**".to_string(),
            italic_delimiter: "_".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn delimiter(&self, style: InlineStyle) -> &str {
        match style {
            InlineStyle::Bold => &self.bold_delimiter,
            InlineStyle::Italic => &self.italic_delimiter,
        }
    }
}

/// A single replacement of `range` in the old text by `text`, with the
/// selection to show afterwards (in new-text offsets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub text: String,
    pub selection: Selection,
}

impl Edit {
    /// Produce the new document text.
    pub fn apply_to(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() - self.range.len() + self.text.len());
        out.push_str(&text[..self.range.start]);
        out.push_str(&self.text);
        out.push_str(&text[self.range.end..]);
        out
    }
}

/// Compile a command into an edit of `text`.
///
/// Returns `None` when the command has nothing to do: the selection does not
/// fit the text (out of range or splitting a character), or the command has
/// no effect on this line.
pub fn compile_command(
    text: &str,
    selection: Selection,
    cmd: &Cmd,
    options: &FormatOptions,
) -> Option<Edit> {
    if !selection.is_within(text) {
        log::trace!(
            "ignoring {cmd:?}: selection {:?} outside document of {} bytes",
            selection.range(),
            text.len()
        );
        return None;
    }

    match cmd {
        Cmd::Indent => Some(indent(text, selection, options.indent_width)),
        Cmd::Outdent => outdent(text, selection, options.indent_width),
        Cmd::ToggleHeading { level } => Some(toggle_heading(text, selection, *level)),
        Cmd::ApplyList { kind } => Some(apply_list(text, selection, *kind)),
        Cmd::WrapInline { style } => {
            Some(wrap_inline(text, selection, options.delimiter(*style)))
        }
    }
}

/// Insert `width` spaces at the start of the line holding the cursor.
///
/// Only the line containing `selection.start` is indented, even when the
/// selection spans several lines.
pub fn indent(text: &str, selection: Selection, width: usize) -> Edit {
    let line = line::locate(text, selection.start());
    let at = line.start..line.start;
    Edit {
        selection: Selection::cursor(map_offset(selection.start(), &at, width)),
        range: at,
        text: " ".repeat(width),
    }
}

/// Remove up to `width` leading spaces from the line holding the cursor.
///
/// Unlike indent, the selection is kept as a range: both ends move left with
/// the removed spaces.
pub fn outdent(text: &str, selection: Selection, width: usize) -> Option<Edit> {
    let line = line::locate(text, selection.start());
    let removable = line
        .slice(text)
        .bytes()
        .take(width)
        .take_while(|&b| b == b' ')
        .count();
    if removable == 0 {
        return None;
    }

    let range = line.start..line.start + removable;
    Some(Edit {
        selection: map_through(selection, &range, 0),
        range,
        text: String::new(),
    })
}

/// Replace the selection with `delimiter + selected + delimiter`.
pub fn wrap_inline(text: &str, selection: Selection, delimiter: &str) -> Edit {
    let selected = &text[selection.range()];
    Edit {
        range: selection.range(),
        text: format!("{delimiter}{selected}{delimiter}"),
        selection: select_wrapped(selection, delimiter.len()),
    }
}

/// Rewrite the current line with a bullet or ordered marker, replacing any
/// marker it already carries.
pub fn apply_list(text: &str, selection: Selection, kind: ListKind) -> Edit {
    let line = line::locate(text, selection.start());
    let prefix = marker::parse(line.slice(text));

    let new_line = match kind {
        ListKind::Bullet => format!("{}{BULLET}{}", prefix.indentation, prefix.content),
        ListKind::Ordered => {
            let n = next_ordinal(text, line.start, prefix.indentation);
            format!("{}{n}. {}", prefix.indentation, prefix.content)
        }
    };

    replace_line(line, new_line)
}

/// Set the heading level of the current line, `Normal` removing it.
pub fn toggle_heading(text: &str, selection: Selection, level: HeadingLevel) -> Edit {
    let line = line::locate(text, selection.start());
    let clean = marker::strip_heading(line.slice(text));
    replace_line(line, format!("{}{clean}", level.prefix()))
}

fn replace_line(line: Span, new_line: String) -> Edit {
    Edit {
        range: line.range(),
        selection: select_line(line, &new_line),
        text: new_line,
    }
}

/// Error returned when a command name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command: {0}")]
pub struct ParseCmdError(String);

impl FromStr for Cmd {
    type Err = ParseCmdError;

    /// Parse a toolbar command name: `indent`, `outdent`, `bold`, `italic`,
    /// `list`, `numbered-list`, `normal`, or a heading level (`h1`..`h6`,
    /// `1`..`6`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let cmd = match name.as_str() {
            "indent" => Cmd::Indent,
            "outdent" => Cmd::Outdent,
            "bold" => Cmd::WrapInline {
                style: InlineStyle::Bold,
            },
            "italic" => Cmd::WrapInline {
                style: InlineStyle::Italic,
            },
            "list" => Cmd::ApplyList {
                kind: ListKind::Bullet,
            },
            "numbered-list" => Cmd::ApplyList {
                kind: ListKind::Ordered,
            },
            "normal" => Cmd::ToggleHeading {
                level: HeadingLevel::Normal,
            },
            other => {
                let digits = other.strip_prefix('h').unwrap_or(other);
                let level = digits
                    .parse::<usize>()
                    .ok()
                    .filter(|&depth| depth > 0)
                    .and_then(HeadingLevel::from_depth)
                    .ok_or_else(|| ParseCmdError(s.to_string()))?;
                Cmd::ToggleHeading { level }
            }
        };
        Ok(cmd)
    }
}
