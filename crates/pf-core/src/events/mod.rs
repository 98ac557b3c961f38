//! System-wide event bus for pager lifecycle events

use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// Type-keyed event bus; observers subscribe per event type
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Pager lifecycle events
pub mod events {
    use super::Event;
    use crate::navigation::PagerId;

    /// A container was mounted with a fixed page set
    #[derive(Debug, Clone)]
    pub struct PagerMounted {
        pub pager: PagerId,
        pub page_count: usize,
    }

    /// A page change committed and its slide began
    #[derive(Debug, Clone)]
    pub struct PageChangeStarted {
        pub pager: PagerId,
        pub target: usize,
    }

    /// A transition ran its full duration and the lock released
    #[derive(Debug, Clone)]
    pub struct PageSettled {
        pub pager: PagerId,
        pub index: usize,
    }

    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(PagerMounted, PageChangeStarted, PageSettled);
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Publish an event to every handler subscribed to its type
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

#[cfg(test)]
mod tests {
    use super::events::{PageSettled, PagerMounted};
    use super::*;
    use crate::navigation::PagerId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_handlers_receive_their_event_type_only() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let handler_seen = seen.clone();
        bus.subscribe::<PageSettled>(handler_from_fn(move |event| {
            if let Some(settled) = event.as_any().downcast_ref::<PageSettled>() {
                handler_seen.store(settled.index, Ordering::SeqCst);
            }
        }));

        let pager = PagerId::new_v4();
        bus.publish(PagerMounted {
            pager,
            page_count: 4,
        });
        assert_eq!(seen.load(Ordering::SeqCst), 0);

        bus.publish(PageSettled { pager, index: 3 });
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }
}
