//! Event types for grid interaction notifications.
//!
//! These are the application-visible events, distinct from the raw host
//! input that triggered them. They're also used by the test suite to verify
//! firing order and the listener-gating invariants.

use gridline_core::CellRange;
use serde::{Deserialize, Serialize};

/// Tag identifying an event kind, used for listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Keydown,
    CopyData,
}

/// Events fired to external subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// A keydown reached the grid, whether or not it changed grid state.
    Keydown(KeydownEvent),

    /// A selection was exported to the clipboard.
    CopyData(CopyDataEvent),
}

impl GridEvent {
    /// The tag this event fires under.
    pub fn event_type(&self) -> EventType {
        match self {
            GridEvent::Keydown(_) => EventType::Keydown,
            GridEvent::CopyData(_) => EventType::CopyData,
        }
    }
}

/// Payload for [`EventType::Keydown`].
///
/// Built lazily: when nothing subscribes to keydown, neither this struct
/// nor the scale ratio behind it is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeydownEvent {
    /// Legacy numeric key code, passed through from the host event.
    pub key_code: u32,
    /// Host key identifier ("ArrowUp", "Enter", ...).
    pub key: String,
    /// Modifier state snapshot from the raw input event.
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// Device-pixel scale of the canvas at the time of the event
    /// (bounding-rect width over layout width).
    pub scale_ratio: f64,
}

/// Payload for [`EventType::CopyData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyDataEvent {
    /// The ranges that were exported.
    pub cell_ranges: Vec<CellRange>,
    /// The exact text written to the clipboard.
    pub copy_data: String,
}

/// Simple event collector for testing.
#[derive(Default)]
pub struct EventCollector {
    events: Vec<GridEvent>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GridEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GridEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Filter to only keydown events.
    pub fn keydowns(&self) -> Vec<&KeydownEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GridEvent::Keydown(k) => Some(k),
                _ => None,
            })
            .collect()
    }

    /// Filter to only copy-data events.
    pub fn copies(&self) -> Vec<&CopyDataEvent> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GridEvent::CopyData(c) => Some(c),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_collector_filtering() {
        let mut collector = EventCollector::new();

        collector.push(GridEvent::Keydown(KeydownEvent {
            key_code: 13,
            key: "Enter".to_string(),
            ctrl: false,
            meta: false,
            shift: false,
            scale_ratio: 1.0,
        }));
        collector.push(GridEvent::CopyData(CopyDataEvent {
            cell_ranges: vec![CellRange::single(0, 0)],
            copy_data: "x".to_string(),
        }));

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.keydowns().len(), 1);
        assert_eq!(collector.copies().len(), 1);
        assert_eq!(collector.events()[0].event_type(), EventType::Keydown);
    }
}
