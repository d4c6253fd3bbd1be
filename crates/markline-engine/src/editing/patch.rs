use crate::editing::Selection;

/// Result of applying a command; doubles as the change notification handed
/// to downstream consumers (e.g. a preview renderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges of the new text written by this edit
    pub changed: Vec<std::ops::Range<usize>>,
    pub new_selection: Selection,
    pub version: u64,
    /// Full document content after the edit
    pub text: String,
}
