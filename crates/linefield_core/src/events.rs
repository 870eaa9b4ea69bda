//! Field events and listener dispatch
//!
//! The host delivers a fixed set of lifecycle notifications to a field.
//! Each notification is a [`FieldEvent`]; listeners registered on an
//! [`EventDispatcher`] are invoked synchronously, in registration order,
//! for the event types they subscribed to.
//!
//! # Example
//!
//! ```rust
//! use linefield_core::events::{EventDispatcher, EventType, FieldEvent};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let edits = Rc::new(Cell::new(0));
//! let counter = edits.clone();
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.subscribe(EventType::EditingChanged, move |_| counter.set(counter.get() + 1));
//!
//! dispatcher.dispatch(&FieldEvent::EditingChanged);
//! dispatcher.dispatch(&FieldEvent::FocusGained);
//! assert_eq!(edits.get(), 1);
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::geometry::Rect;

new_key_type! {
    /// Handle returned by [`EventDispatcher::subscribe`]
    pub struct ListenerId;
}

/// Notifications a host delivers to a field
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEvent {
    /// Layout pass; the field's bounds may have changed
    LayoutChanged {
        /// Current bounds in the field's own coordinate space
        bounds: Rect,
    },
    /// The field became first responder
    FocusGained,
    /// The field resigned first responder
    FocusLost,
    /// The selected flag of the control changed
    SelectionChanged {
        /// New selected flag
        selected: bool,
    },
    /// Text content was edited
    EditingChanged,
    /// Rendered by a design-time layout tool
    DesignPreview,
}

impl FieldEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            FieldEvent::LayoutChanged { .. } => EventType::LayoutChanged,
            FieldEvent::FocusGained => EventType::FocusGained,
            FieldEvent::FocusLost => EventType::FocusLost,
            FieldEvent::SelectionChanged { .. } => EventType::SelectionChanged,
            FieldEvent::EditingChanged => EventType::EditingChanged,
            FieldEvent::DesignPreview => EventType::DesignPreview,
        }
    }
}

/// Discriminant of [`FieldEvent`], used to filter listeners
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    LayoutChanged,
    FocusGained,
    FocusLost,
    SelectionChanged,
    EditingChanged,
    DesignPreview,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::LayoutChanged,
        EventType::FocusGained,
        EventType::FocusLost,
        EventType::SelectionChanged,
        EventType::EditingChanged,
        EventType::DesignPreview,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventType::LayoutChanged => "layout-changed",
            EventType::FocusGained => "focus-gained",
            EventType::FocusLost => "focus-lost",
            EventType::SelectionChanged => "selection-changed",
            EventType::EditingChanged => "editing-changed",
            EventType::DesignPreview => "design-preview",
        }
    }
}

/// Listener callback. UI is single-threaded, so no `Send` bound.
pub type EventCallback = Box<dyn FnMut(&FieldEvent)>;

struct Listener {
    /// Empty means every event type
    types: SmallVec<[EventType; 2]>,
    callback: EventCallback,
}

impl Listener {
    fn accepts(&self, event_type: EventType) -> bool {
        self.types.is_empty() || self.types.contains(&event_type)
    }
}

/// Registry of event listeners
#[derive(Default)]
pub struct EventDispatcher {
    listeners: SlotMap<ListenerId, Listener>,
    /// Registration order; slotmap iteration order is not insertion order
    /// once slots are reused
    order: Vec<ListenerId>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for a single event type
    pub fn subscribe<F>(&mut self, event_type: EventType, callback: F) -> ListenerId
    where
        F: FnMut(&FieldEvent) + 'static,
    {
        self.insert(SmallVec::from_slice(&[event_type]), Box::new(callback))
    }

    /// Register a listener for every event type
    pub fn subscribe_all<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&FieldEvent) + 'static,
    {
        self.insert(SmallVec::new(), Box::new(callback))
    }

    fn insert(&mut self, types: SmallVec<[EventType; 2]>, callback: EventCallback) -> ListenerId {
        let id = self.listeners.insert(Listener { types, callback });
        self.order.push(id);
        id
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_some() {
            self.order.retain(|other| *other != id);
            true
        } else {
            false
        }
    }

    /// Whether a listener for `event_type` is registered
    pub fn has_listener(&self, event_type: EventType) -> bool {
        self.listeners.values().any(|l| l.accepts(event_type))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invoke every listener subscribed to the event's type
    pub fn dispatch(&mut self, event: &FieldEvent) -> usize {
        let event_type = event.event_type();
        let mut invoked = 0;
        for id in &self.order {
            if let Some(listener) = self.listeners.get_mut(*id) {
                if listener.accepts(event_type) {
                    (listener.callback)(event);
                    invoked += 1;
                }
            }
        }
        tracing::trace!("dispatched {} to {} listener(s)", event_type.name(), invoked);
        invoked
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_filters_by_type() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        let log = seen.clone();
        dispatcher.subscribe(EventType::FocusGained, move |e| {
            log.borrow_mut().push(e.event_type())
        });

        assert_eq!(dispatcher.dispatch(&FieldEvent::FocusLost), 0);
        assert_eq!(dispatcher.dispatch(&FieldEvent::FocusGained), 1);
        assert_eq!(*seen.borrow(), vec![EventType::FocusGained]);
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();

        let first = dispatcher.subscribe_all({
            let log = seen.clone();
            move |_| log.borrow_mut().push("first")
        });
        dispatcher.subscribe_all({
            let log = seen.clone();
            move |_| log.borrow_mut().push("second")
        });

        // Removing and re-adding reuses a slot but must still run last
        assert!(dispatcher.unsubscribe(first));
        dispatcher.subscribe_all({
            let log = seen.clone();
            move |_| log.borrow_mut().push("third")
        });

        assert_eq!(dispatcher.len(), 2);
        dispatcher.dispatch(&FieldEvent::EditingChanged);
        assert_eq!(*seen.borrow(), vec!["second", "third"]);
    }

    #[test]
    fn test_unsubscribe_twice() {
        let mut dispatcher = EventDispatcher::new();
        let id = dispatcher.subscribe(EventType::DesignPreview, |_| {});
        assert!(dispatcher.has_listener(EventType::DesignPreview));
        assert!(dispatcher.unsubscribe(id));
        assert!(!dispatcher.unsubscribe(id));
        assert!(dispatcher.is_empty());
    }

    #[test]
    fn test_event_type_names_are_unique() {
        let mut names: Vec<_> = EventType::ALL.iter().map(|t| t.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), EventType::ALL.len());
    }
}
