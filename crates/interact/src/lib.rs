//! Interaction layer for the gridline canvas data grid.
//!
//! Translates raw host input (keyboard, wheel, blur, copy, context menu,
//! resize) into selection movement, edit-session transitions, clipboard
//! export and application-visible notifications. Rendering, layout and
//! scroll physics live elsewhere; this crate only talks to them through
//! the traits in [`controller`].

pub mod bus;
pub mod clipboard;
pub mod controller;
pub mod edit;
pub mod events;
pub mod input;
pub mod options;

pub use bus::{ListenerId, NotificationBus};
pub use clipboard::{
    CellValueSource, ClipboardData, ClipboardExporter, ClipboardWrite, LegacyClipboard,
    StandardClipboard,
};
pub use controller::{GridHost, InteractionController, ScrollHandler};
pub use edit::{EditSession, EditingCapability};
pub use events::{CopyDataEvent, EventType, GridEvent, KeydownEvent};
pub use input::{ContextMenuInput, CopyInput, InputEvent, KeyDownInput, WheelInput};
pub use options::KeyboardOptions;
