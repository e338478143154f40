//! Clipboard export: selection -> text payload -> platform clipboard.

use std::cell::RefCell;
use std::rc::Rc;

use gridline_core::SelectionState;

use crate::input::CopyInput;

/// Read access to displayable cell text, provided by the grid.
pub trait CellValueSource {
    fn cell_text(&self, col: i32, row: i32) -> String;
}

/// A mime-type -> text surface, standing in for the platform clipboard
/// object (either the copy event's own, or a window-level legacy one).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardData {
    entries: Vec<(String, String)>,
}

impl ClipboardData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data(&mut self, mime: &str, text: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(m, _)| m == mime) {
            entry.1 = text.to_string();
        } else {
            self.entries.push((mime.to_string(), text.to_string()));
        }
    }

    pub fn get_data(&self, mime: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(m, _)| m == mime)
            .map(|(_, text)| text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes the current selection to tab/newline-delimited text.
#[derive(Debug, Default)]
pub struct ClipboardExporter;

impl ClipboardExporter {
    /// Build the copy payload: each range row-major, tabs between columns,
    /// newlines between rows and between ranges. `None` when nothing is
    /// selected — the sole gate for the whole copy path.
    pub fn export<V: CellValueSource + ?Sized>(
        &self,
        selection: &SelectionState,
        values: &V,
    ) -> Option<String> {
        if selection.ranges().is_empty() {
            return None;
        }

        let mut out = String::new();
        for (i, range) in selection.ranges().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let n = range.normalized();
            for row in n.start.row..=n.end.row {
                for col in n.start.col..=n.end.col {
                    if col > n.start.col {
                        out.push('\t');
                    }
                    out.push_str(&values.cell_text(col, row));
                }
                if row < n.end.row {
                    out.push('\n');
                }
            }
        }
        Some(out)
    }
}

/// Where an exported payload gets written. Picked once at controller
/// construction from the host's capability flags, not per event.
pub trait ClipboardWrite {
    fn write(&mut self, event: &mut CopyInput, payload: &str);
}

/// Standard path: `text/plain` onto the copy event's clipboard surface.
#[derive(Debug, Default)]
pub struct StandardClipboard;

impl ClipboardWrite for StandardClipboard {
    fn write(&mut self, event: &mut CopyInput, payload: &str) {
        event.clipboard.set_data("text/plain", payload);
    }
}

/// Legacy path: mime-less `Text` entry on a window-level clipboard,
/// ignoring the event's own surface.
pub struct LegacyClipboard {
    window_clipboard: Rc<RefCell<ClipboardData>>,
}

impl LegacyClipboard {
    pub fn new(window_clipboard: Rc<RefCell<ClipboardData>>) -> Self {
        Self { window_clipboard }
    }
}

impl ClipboardWrite for LegacyClipboard {
    fn write(&mut self, _event: &mut CopyInput, payload: &str) {
        self.window_clipboard.borrow_mut().set_data("Text", payload);
    }
}
