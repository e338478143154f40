//! The interaction controller: raw input events in, grid state
//! transitions and notifications out.
//!
//! Each input source gets exactly one handler; classification inside the
//! keydown handler is mutually exclusive, so a single key press changes
//! state through at most one branch. Handlers return nothing — every
//! effect is a selection/edit mutation, a clipboard write, a
//! `prevent_default`, or a notification. State changes and
//! `prevent_default` always land before notifications fire, so a
//! panicking subscriber cannot roll anything back.

use gridline_core::SelectionState;

use crate::bus::NotificationBus;
use crate::clipboard::{CellValueSource, ClipboardExporter, ClipboardWrite};
use crate::edit::{EditSession, EditingCapability};
use crate::events::{CopyDataEvent, EventType, GridEvent, KeydownEvent};
use crate::input::{ContextMenuInput, CopyInput, InputEvent, KeyDownInput, WheelInput};
use crate::options::KeyboardOptions;

/// What the controller needs from the surrounding grid widget. Geometry
/// and canvas metrics are read-only; hover, focus and layout are the only
/// mutations it may request. A grid that cannot edit returns `None` from
/// [`GridHost::editing`] and the controller skips every edit branch.
pub trait GridHost: CellValueSource {
    fn row_count(&self) -> i32;
    fn col_count(&self) -> i32;

    /// Canvas bounding-rect width over layout width (device-pixel scale).
    fn scale_ratio(&self) -> f64;

    /// Drop any hover highlight (focus loss).
    fn clear_hover(&mut self);

    /// Give keyboard focus back to the grid's root element.
    fn focus_root(&mut self);

    /// Recompute the full layout after a container resize.
    fn resize(&mut self);

    /// The grid's editing capability, when it has one.
    fn editing(&mut self) -> Option<&mut dyn EditingCapability>;
}

/// The external scroll collaborator. Wheel deltas are interpreted and
/// applied entirely over there; the controller only forwards.
pub trait ScrollHandler {
    fn handle_wheel(&mut self, event: &WheelInput, selection: &mut SelectionState);
}

/// Orchestrates selection, edit sessions, clipboard export and
/// notifications for one grid instance. All collaborators arrive at
/// construction; there is no ambient grid reference.
pub struct InteractionController {
    selection: SelectionState,
    edit: EditSession,
    bus: NotificationBus,
    options: KeyboardOptions,
    exporter: ClipboardExporter,
    clipboard: Box<dyn ClipboardWrite>,
    scroll: Box<dyn ScrollHandler>,
}

impl InteractionController {
    pub fn new(
        selection: SelectionState,
        edit: EditSession,
        bus: NotificationBus,
        options: KeyboardOptions,
        clipboard: Box<dyn ClipboardWrite>,
        scroll: Box<dyn ScrollHandler>,
    ) -> Self {
        Self {
            selection,
            edit,
            bus,
            options,
            exporter: ClipboardExporter,
            clipboard,
            scroll,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Mouse-driven selection lives outside this subsystem; the grid's
    /// state manager mutates through here.
    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn bus_mut(&mut self) -> &mut NotificationBus {
        &mut self.bus
    }

    pub fn options(&self) -> KeyboardOptions {
        self.options
    }

    /// Route one host event to its single handler.
    pub fn dispatch(&mut self, event: &mut InputEvent, grid: &mut dyn GridHost) {
        match event {
            InputEvent::Blur => self.handle_blur(grid),
            InputEvent::Wheel(e) => self.handle_wheel(e),
            InputEvent::KeyDown(e) => self.handle_key_down(e, grid),
            InputEvent::Copy(e) => self.handle_copy(e, grid),
            InputEvent::ContextMenu(e) => self.handle_context_menu(e),
            InputEvent::Resize => self.handle_resize(grid),
        }
    }

    /// Focus loss clears hover only. Selection survives blur.
    pub fn handle_blur(&mut self, grid: &mut dyn GridHost) {
        grid.clear_hover();
    }

    pub fn handle_wheel(&mut self, event: &WheelInput) {
        self.scroll.handle_wheel(event, &mut self.selection);
    }

    pub fn handle_key_down(&mut self, event: &mut KeyDownInput, grid: &mut dyn GridHost) {
        // Owned copy: the classification below needs the key while it
        // flips the event's prevent-default latch.
        let key = event.key.clone();

        if key == "a" && (event.ctrl || event.meta) {
            if self.options.select_all_on_ctrl_a {
                event.prevent_default();
                self.selection.select_all(grid.col_count(), grid.row_count());
                log::trace!("select all ({}x{})", grid.col_count(), grid.row_count());
            }
        } else if self.selection.cell_pos().is_some()
            && matches!(key.as_str(), "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight")
        {
            event.prevent_default();
            let pos = self.selection.cell_pos();
            let max_row = grid.row_count() - 1;
            let max_col = grid.col_count() - 1;
            let (target_col, target_row) = match key.as_str() {
                "ArrowUp" => (pos.col, (pos.row - 1).clamp(0, max_row)),
                "ArrowDown" => (pos.col, (pos.row + 1).clamp(0, max_row)),
                "ArrowLeft" => ((pos.col - 1).clamp(0, max_col), pos.row),
                _ => ((pos.col + 1).clamp(0, max_col), pos.row),
            };
            self.selection.select_cell(target_col, target_row);
            log::trace!("arrow {} -> ({}, {})", key, target_col, target_row);

            if self.edit.is_editing() {
                // Never leave a stale editor behind: finish the old cell's
                // edit, then either follow the selection into the next
                // editor or hand focus back to the grid root.
                let started = match grid.editing() {
                    Some(cap) => {
                        self.edit.complete_edit(cap);
                        self.edit.start_edit_cell(target_col, target_row, cap)
                    }
                    None => false,
                };
                if !started {
                    grid.focus_root();
                }
            }
        } else if key == "Escape" {
            if self.edit.is_editing() {
                if let Some(cap) = grid.editing() {
                    self.edit.exit(cap);
                    log::trace!("edit discarded via escape");
                }
            }
        } else if key == "Enter" {
            if self.edit.is_editing() {
                if let Some(cap) = grid.editing() {
                    self.edit.complete_edit(cap);
                }
                grid.focus_root();
            } else if self.selection.is_single_cell() {
                // Only a lone single-cell range may open an editor here;
                // multi-cell and multi-range selections never do.
                let cell = self.selection.ranges()[0].start;
                if let Some(cap) = grid.editing() {
                    self.edit.start_edit_cell(cell.col, cell.row, cap);
                }
            }
        }

        // Independent of the branches above: anyone listening for keydown
        // gets notified. The payload (and the scale ratio inside it) is
        // only built when someone is.
        if self.bus.has_listeners(EventType::Keydown) {
            let payload = KeydownEvent {
                key_code: event.key_code,
                key,
                ctrl: event.ctrl,
                meta: event.meta,
                shift: event.shift,
                scale_ratio: grid.scale_ratio(),
            };
            self.bus.fire(&GridEvent::Keydown(payload));
        }
    }

    pub fn handle_copy(&mut self, event: &mut CopyInput, grid: &mut dyn GridHost) {
        if !self.options.copy_selected {
            return;
        }
        let Some(data) = self.exporter.export(&self.selection, &*grid) else {
            // Nothing copyable: let the host's native copy run untouched.
            return;
        };
        event.prevent_default();
        self.clipboard.write(event, &data);
        log::debug!("copied {} bytes from {} range(s)", data.len(), self.selection.ranges().len());
        self.bus.fire(&GridEvent::CopyData(CopyDataEvent {
            cell_ranges: self.selection.ranges().to_vec(),
            copy_data: data,
        }));
    }

    /// The widget draws its own context menu; the host's is always
    /// suppressed.
    pub fn handle_context_menu(&mut self, event: &mut ContextMenuInput) {
        event.prevent_default();
    }

    pub fn handle_resize(&mut self, grid: &mut dyn GridHost) {
        grid.resize();
    }
}
