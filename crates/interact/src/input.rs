//! Raw input events as delivered by the host.
//!
//! These mirror the host's event objects closely: string key identifiers
//! (`"ArrowUp"`, `"Escape"`, `"a"`), modifier booleans, and a
//! `default_prevented` latch standing in for the host's `preventDefault`.
//! Setting the latch is the only cancellation primitive in this layer and
//! always happens synchronously inside the handler that received the event.

use crate::clipboard::ClipboardData;

/// A key press. `key` uses host key identifiers; `key_code` is the legacy
/// numeric code carried through to keydown notifications unchanged.
#[derive(Debug, Clone)]
pub struct KeyDownInput {
    pub key: String,
    pub key_code: u32,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    default_prevented: bool,
}

impl KeyDownInput {
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            key_code,
            ctrl: false,
            meta: false,
            shift: false,
            default_prevented: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A wheel tick. Deltas are opaque here; the scroll collaborator owns all
/// delta interpretation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
}

/// A copy event, carrying the event-scoped clipboard surface.
#[derive(Debug, Default)]
pub struct CopyInput {
    pub clipboard: ClipboardData,
    default_prevented: bool,
}

impl CopyInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A context-menu request.
#[derive(Debug, Default)]
pub struct ContextMenuInput {
    default_prevented: bool,
}

impl ContextMenuInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Every input source the controller binds to, one variant per source.
/// Dispatch routes each variant to exactly one handler.
#[derive(Debug)]
pub enum InputEvent {
    Blur,
    Wheel(WheelInput),
    KeyDown(KeyDownInput),
    Copy(CopyInput),
    ContextMenu(ContextMenuInput),
    Resize,
}
