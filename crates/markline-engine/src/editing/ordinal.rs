//! Numbering for ordered list items.
//!
//! The next ordinal is found by walking backwards from the current line over
//! its siblings. Deeper lines are nested content and are skipped; a shallower
//! line closes the enclosing list; a same-depth line either continues the
//! numbering (ordered marker) or breaks the run (anything else).

use std::cmp::Ordering;
use std::ops::ControlFlow;

use crate::editing::line::lines_before;
use crate::editing::marker::{self, MarkerKind};

/// Transient state of one backward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListScanState {
    /// Indentation depth being matched.
    depth: usize,
    /// Ordinal to hand out if the scan stopped now.
    next: u64,
}

impl ListScanState {
    fn new(depth: usize) -> Self {
        Self { depth, next: 1 }
    }

    fn visit(&mut self, line: &str) -> ControlFlow<()> {
        let prefix = marker::parse(line);
        match prefix.depth().cmp(&self.depth) {
            Ordering::Greater => ControlFlow::Continue(()),
            Ordering::Less => ControlFlow::Break(()),
            Ordering::Equal => {
                if let MarkerKind::Ordered(n) = prefix.marker {
                    self.next = n.saturating_add(1);
                }
                ControlFlow::Break(())
            }
        }
    }
}

/// Ordinal for a numbered item on the line starting at `line_start` whose
/// indentation is `indentation`. Always at least 1.
pub fn next_ordinal(text: &str, line_start: usize, indentation: &str) -> u64 {
    let mut state = ListScanState::new(indentation.len());
    for line in lines_before(text, line_start) {
        if state.visit(line).is_break() {
            break;
        }
    }
    state.next
}
