//! Minimal in-process publish/subscribe bus.
//!
//! Topics are plain strings; handlers run synchronously, in registration
//! order, on the thread that publishes. The bus is owned by the bootstrap
//! and fed from the main event loop, so no locking is involved.

use std::collections::HashMap;

/// Topic published exactly once per settled slide transition.
pub const TOPIC_SLIDE_END: &str = "slider.slide.end";

/// Message delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusMessage {
    pub topic: String,
    pub slider_id: String,
    pub slide_index: usize,
}

impl BusMessage {
    pub fn slide_end(slider_id: impl Into<String>, slide_index: usize) -> Self {
        Self {
            topic: TOPIC_SLIDE_END.to_string(),
            slider_id: slider_id.into(),
            slide_index,
        }
    }
}

type Handler = Box<dyn FnMut(&BusMessage)>;

/// Topic-keyed subscriber registry.
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<String, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a topic.
    pub fn subscribe<F>(&mut self, topic: impl Into<String>, handler: F)
    where
        F: FnMut(&BusMessage) + 'static,
    {
        self.subscribers
            .entry(topic.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Deliver a message to every subscriber of its topic. Returns the
    /// number of handlers invoked.
    pub fn publish(&mut self, msg: &BusMessage) -> usize {
        let Some(handlers) = self.subscribers.get_mut(&msg.topic) else {
            tracing::debug!(topic = %msg.topic, "publish with no subscribers");
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(msg);
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_publish_reaches_all_topic_subscribers() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = Rc::clone(&seen);
        bus.subscribe(TOPIC_SLIDE_END, move |msg: &BusMessage| {
            a.borrow_mut().push(format!("a:{}", msg.slide_index));
        });
        let b = Rc::clone(&seen);
        bus.subscribe(TOPIC_SLIDE_END, move |msg: &BusMessage| {
            b.borrow_mut().push(format!("b:{}", msg.slide_index));
        });

        let delivered = bus.publish(&BusMessage::slide_end("tour", 3));
        assert_eq!(delivered, 2);
        // Registration order is preserved.
        assert_eq!(*seen.borrow(), vec!["a:3".to_string(), "b:3".to_string()]);
    }

    #[test]
    fn test_unrelated_topic_not_delivered() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(0usize));

        let s = Rc::clone(&seen);
        bus.subscribe("other.topic", move |_msg: &BusMessage| {
            *s.borrow_mut() += 1;
        });

        assert_eq!(bus.publish(&BusMessage::slide_end("tour", 0)), 0);
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn test_publish_without_subscribers_is_harmless() {
        let mut bus = EventBus::new();
        assert_eq!(bus.publish(&BusMessage::slide_end("tour", 1)), 0);
    }
}
