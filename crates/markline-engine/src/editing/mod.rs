/*!
 * # Line-formatting core
 *
 * Computes what a markdown authoring surface should show after a formatting
 * command: the new text and the new selection. The surface itself (display,
 * keystrokes, preview rendering) lives outside this crate and only exchanges
 * plain values with it.
 *
 * ## Pipeline
 *
 * Every command runs the same steps over a `(text, selection)` pair:
 *
 * 1. **Locate** the line holding the cursor (`line::locate`)
 * 2. **Parse** its indentation and list marker (`marker::parse`), or its ATX
 *    heading prefix for heading commands
 * 3. **Number** ordered items by scanning back over sibling lines
 *    (`ordinal::next_ordinal`)
 * 4. **Rebuild** the line or wrap the selection into a single `Edit`
 * 5. **Map** the selection into the new text (`selection`)
 *
 * Steps 1-5 are pure functions of their inputs; nothing is remembered between
 * commands. `Document` is the thin adapter on top: it keeps the buffer in an
 * `xi_rope::Rope`, applies the edit as a `Delta`, and hands back a `Patch` that
 * carries the new text for whoever renders it.
 *
 * ## Module Structure
 *
 * - **`line`**: line boundaries around an offset, backward line iteration
 * - **`marker`**: list marker and ATX heading parsing
 * - **`ordinal`**: next number for an ordered list item
 * - **`commands`**: `Cmd` enum and the mutators that compile it to an `Edit`
 * - **`selection`**: `Selection` and the post-edit selection mapping
 * - **`document`**: rope-backed `Document` applying commands
 * - **`patch`**: change notification returned by `Document::apply`
 *
 * ## Usage Pattern
 *
 * ```rust
 * use markline_engine::editing::*;
 *
 * let mut doc = Document::from_bytes(b"1. a\n2. b\n").unwrap();
 * doc.set_selection(Selection::cursor(doc.len()));
 *
 * let patch = doc.apply(Cmd::ApplyList { kind: ListKind::Ordered }).unwrap();
 * assert_eq!(patch.text, "1. a\n2. b\n3. ");
 * assert_eq!(patch.new_selection, Selection::new(10, 13));
 * ```
 *
 * Commands whose selection does not fit the text are ignored (`None`), never
 * reported as errors.
 */

// Module exports
pub mod commands;
pub mod document;
pub mod line;
pub mod marker;
pub mod ordinal;
pub mod patch;
pub mod selection;

// Public API re-exports
pub use commands::{Cmd, Edit, FormatOptions, InlineStyle, ListKind, ParseCmdError};
pub use document::Document;
pub use line::Span;
pub use marker::{HeadingLevel, LinePrefix, MarkerKind};
pub use patch::Patch;
pub use selection::Selection;
