//! Edit-session state machine.
//!
//! Two states: idle, or one cell's editor is open and capturing input.
//! The session never holds an editor instance; it drives the grid's
//! editing capability and remembers which cell is live.

use gridline_core::CellPosition;

/// What an editing-capable grid must provide. A grid without editing
/// support simply never offers this capability (see
/// [`crate::controller::GridHost::editing`]); there is no downcasting.
pub trait EditingCapability {
    /// An eligible editor exists for this cell.
    fn has_editor(&self, col: i32, row: i32) -> bool;
    /// Open the cell's editor widget.
    fn open_editor(&mut self, col: i32, row: i32);
    /// Commit the open editor's value and tear it down.
    fn commit_editor(&mut self);
    /// Tear down the open editor without committing.
    fn discard_editor(&mut self);
}

/// Tracks whether a cell editor is open, and where.
#[derive(Debug, Default)]
pub struct EditSession {
    editing_cell: Option<CellPosition>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_cell.is_some()
    }

    /// The cell being edited, if any.
    pub fn editing_cell(&self) -> Option<CellPosition> {
        self.editing_cell
    }

    /// Try to open an editor at the cell. Only legal from idle; callers
    /// always complete-before-start. Returns false (and stays idle) when
    /// the cell has no eligible editor.
    pub fn start_edit_cell(&mut self, col: i32, row: i32, cap: &mut dyn EditingCapability) -> bool {
        debug_assert!(self.editing_cell.is_none(), "start_edit_cell while editing");
        if !cap.has_editor(col, row) {
            return false;
        }
        cap.open_editor(col, row);
        self.editing_cell = Some(CellPosition::new(col, row));
        true
    }

    /// Commit the current edit and return to idle. No-op when idle.
    pub fn complete_edit(&mut self, cap: &mut dyn EditingCapability) {
        if self.editing_cell.take().is_some() {
            cap.commit_editor();
        }
    }

    /// Discard the current edit and return to idle. No-op when idle.
    pub fn exit(&mut self, cap: &mut dyn EditingCapability) {
        if self.editing_cell.take().is_some() {
            cap.discard_editor();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Capability stub recording the calls it receives.
    #[derive(Default)]
    struct Recorder {
        editor_cells: Vec<(i32, i32)>,
        opened: Vec<(i32, i32)>,
        commits: usize,
        discards: usize,
    }

    impl EditingCapability for Recorder {
        fn has_editor(&self, col: i32, row: i32) -> bool {
            self.editor_cells.contains(&(col, row))
        }
        fn open_editor(&mut self, col: i32, row: i32) {
            self.opened.push((col, row));
        }
        fn commit_editor(&mut self) {
            self.commits += 1;
        }
        fn discard_editor(&mut self) {
            self.discards += 1;
        }
    }

    #[test]
    fn test_start_requires_eligible_editor() {
        let mut cap = Recorder::default();
        let mut session = EditSession::new();

        assert!(!session.start_edit_cell(1, 1, &mut cap));
        assert!(!session.is_editing());
        assert!(cap.opened.is_empty());

        cap.editor_cells.push((1, 1));
        assert!(session.start_edit_cell(1, 1, &mut cap));
        assert!(session.is_editing());
        assert_eq!(session.editing_cell(), Some(gridline_core::CellPosition::new(1, 1)));
        assert_eq!(cap.opened, vec![(1, 1)]);
    }

    #[test]
    fn test_complete_commits_and_idles() {
        let mut cap = Recorder { editor_cells: vec![(2, 3)], ..Default::default() };
        let mut session = EditSession::new();

        session.start_edit_cell(2, 3, &mut cap);
        session.complete_edit(&mut cap);
        assert!(!session.is_editing());
        assert_eq!(cap.commits, 1);
        assert_eq!(cap.discards, 0);

        // idle complete is a no-op
        session.complete_edit(&mut cap);
        assert_eq!(cap.commits, 1);
    }

    #[test]
    fn test_exit_discards_without_commit() {
        let mut cap = Recorder { editor_cells: vec![(0, 0)], ..Default::default() };
        let mut session = EditSession::new();

        session.start_edit_cell(0, 0, &mut cap);
        session.exit(&mut cap);
        assert!(!session.is_editing());
        assert_eq!(cap.discards, 1);
        assert_eq!(cap.commits, 0);

        session.exit(&mut cap);
        assert_eq!(cap.discards, 1);
    }
}
