use anyhow::Context;
use xi_rope::Rope;
use xi_rope::delta::Builder;

use crate::editing::commands::{Cmd, FormatOptions, compile_command};
use crate::editing::marker::{self, HeadingLevel};
use crate::editing::{Patch, Selection, line};

/// The buffer a formatting command runs against.
///
/// Holds the text in an `xi_rope::Rope`, the caller's current selection, and a
/// version counter. Commands never splice the buffer in place from the
/// caller's point of view: each one compiles to a single-replacement `Delta`
/// and the rope is swapped for the result.
///
/// ```rust
/// # use markline_engine::editing::{Cmd, Document, Selection};
/// let mut doc = Document::from_bytes(b"abc").unwrap();
/// doc.set_selection(Selection::cursor(0));
///
/// let patch = doc.apply(Cmd::Indent).unwrap();
/// assert_eq!(patch.text, "  abc");
/// assert_eq!(patch.new_selection, Selection::cursor(2));
/// ```
#[derive(Clone)]
pub struct Document {
    buffer: Rope,
    selection: Selection,
    version: u64,
    options: FormatOptions,
}

impl Document {
    /// Create a new document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes).context("document is not valid UTF-8")?;
        Ok(Self::from_text(text))
    }

    /// Create a document with the cursor at the end of `text`.
    pub fn from_text(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: Selection::cursor(len),
            version: 0,
            options: FormatOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the document's content as raw bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    /// Get the current text content
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Set the selection as reported by the editing surface. It is not
    /// validated here; `apply` ignores commands whose selection does not fit.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Heading level of the line holding `offset`, e.g. to show in a toolbar.
    pub fn heading_level_at(&self, offset: usize) -> HeadingLevel {
        let text = self.text();
        marker::heading_level(line::locate(&text, offset).slice(&text))
    }

    /// Apply a formatting command at the current selection.
    ///
    /// Returns `None` and leaves the document untouched when the command is a
    /// no-op (selection outside the text, nothing to outdent).
    pub fn apply(&mut self, cmd: Cmd) -> Option<Patch> {
        let text = self.text();
        let Some(edit) = compile_command(&text, self.selection, &cmd, &self.options) else {
            log::trace!("{cmd:?} is a no-op at {:?}", self.selection.range());
            return None;
        };

        let mut builder = Builder::new(self.buffer.len());
        builder.replace(edit.range.clone(), Rope::from(edit.text.as_str()));
        let delta = builder.build();
        self.buffer = delta.apply(&self.buffer);

        let changed = edit.range.start..edit.range.start + edit.text.len();
        self.selection = edit.selection.clamp_to(self.buffer.len());
        self.version += 1;

        log::debug!(
            "applied {cmd:?}: replaced {:?} with {} bytes, selection now {:?} (v{})",
            edit.range,
            edit.text.len(),
            self.selection.range(),
            self.version
        );

        Some(Patch {
            changed: vec![changed],
            new_selection: self.selection,
            version: self.version,
            text: self.text(),
        })
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("text", &self.text())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .finish()
    }
}
