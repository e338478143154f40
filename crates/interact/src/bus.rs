//! Notification bus: event-type tag -> ordered subscriber callbacks.
//!
//! Firing is synchronous on the calling thread, in subscription order.
//! Subscriber panics are not caught here; the handlers that fire events
//! apply their state changes and `prevent_default` first, so a panicking
//! subscriber can never roll grid state back.

use std::collections::HashMap;

use crate::events::{EventType, GridEvent};

/// Callback type for receiving grid events.
pub type EventCallback = Box<dyn FnMut(&GridEvent)>;

/// Handle returned by [`NotificationBus::on`]; pass to
/// [`NotificationBus::off`] to detach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct NotificationBus {
    listeners: HashMap<EventType, Vec<(ListenerId, EventCallback)>>,
    next_id: u64,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to an event type. Listeners fire in subscription order.
    pub fn on(&mut self, event_type: EventType, callback: EventCallback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(event_type).or_default().push((id, callback));
        id
    }

    /// Detach a listener. Returns false if the handle was already detached.
    pub fn off(&mut self, id: ListenerId) -> bool {
        for subs in self.listeners.values_mut() {
            if let Some(idx) = subs.iter().position(|(sub_id, _)| *sub_id == id) {
                subs.remove(idx);
                return true;
            }
        }
        false
    }

    /// Cheap pre-check so callers can skip building payloads nobody wants.
    pub fn has_listeners(&self, event_type: EventType) -> bool {
        self.listeners.get(&event_type).is_some_and(|subs| !subs.is_empty())
    }

    /// Invoke every subscriber for the event's type, in subscription order.
    pub fn fire(&mut self, event: &GridEvent) {
        if let Some(subs) = self.listeners.get_mut(&event.event_type()) {
            for (_, callback) in subs.iter_mut() {
                callback(event);
            }
        }
    }
}
