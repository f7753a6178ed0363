//! Topic-keyed publish/subscribe bus.
//!
//! The bus is an injected capability, not a process-wide singleton: anything
//! that wants block notifications is handed an [`EventBus`] clone and
//! subscribes explicitly. Dispatch is synchronous and in publish order.
//!
//! Unsubscribe is race-free: the subscriber table lock is held for the whole
//! dispatch, so once `unsubscribe` returns the handler is never invoked
//! again. The flip side is that handlers must not call back into the same
//! bus; handlers should only forward the payload (e.g. into a channel).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chainview_types::BlockSummary;

/// Named notification topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A new block was attached to (or re-delivered at) the chain tip.
    NewBlock,
}

impl Topic {
    /// Wire name of the topic, as used by feeds and logs.
    pub fn name(self) -> &'static str {
        match self {
            Topic::NewBlock => "new-block",
        }
    }
}

/// Payload delivered to subscribers.
#[derive(Debug, Clone)]
pub enum BusEvent {
    Block(BlockSummary),
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn Fn(&BusEvent) + Send + Sync>;

#[derive(Default)]
struct Subscribers {
    by_topic: HashMap<Topic, Vec<(SubscriptionId, Handler)>>,
}

/// Process-local event bus. Cheap to clone; clones share the subscriber
/// table.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Subscribers>>,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for a topic. The handler runs inline on the
    /// publishing thread, in subscription order.
    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: Fn(&BusEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subs = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        subs.by_topic
            .entry(topic)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// Removes a subscription. After this returns, the handler is never
    /// invoked again, even if a publish was in flight on another thread.
    pub fn unsubscribe(&self, topic: Topic, id: SubscriptionId) {
        let mut subs = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(handlers) = subs.by_topic.get_mut(&topic) {
            handlers.retain(|(sub_id, _)| *sub_id != id);
        }
    }

    /// Delivers an event to every current subscriber of `topic`,
    /// synchronously and in subscription order.
    pub fn publish(&self, topic: Topic, event: &BusEvent) {
        let subs = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let Some(handlers) = subs.by_topic.get(&topic) else {
            tracing::trace!(topic = topic.name(), "publish with no subscribers");
            return;
        };
        for (_, handler) in handlers {
            handler(event);
        }
    }

    /// Number of live subscriptions for a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        let subs = self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        subs.by_topic.get(&topic).map_or(0, Vec::len)
    }
}
