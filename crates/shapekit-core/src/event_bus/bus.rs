//! Event Bus implementation.
//!
//! One bus is owned by each designer state; shells reach it through the
//! state's subscribe methods or a shared handle.

use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{EditorEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "sub-{}", &simple[..8])
    }
}

/// Which events a subscriber wants
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Every event.
    #[default]
    All,
    /// Events in any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Filter for a single category
    pub fn category(category: EventCategory) -> Self {
        EventFilter::Categories(vec![category])
    }

    pub fn matches(&self, event: &EditorEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type EventHandler = Box<dyn Fn(EditorEvent) + Send + Sync>;

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Capacity of the broadcast channel used by async receivers.
    pub channel_capacity: usize,
    /// Keep a bounded log of published events.
    pub enable_history: bool,
    /// Oldest events are dropped past this many.
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            enable_history: false,
            max_history_size: 500,
        }
    }
}

/// Error types for event bus operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventBusError {
    /// Neither a handler nor a receiver saw the event
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Who saw a published event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delivery {
    /// Synchronous handlers whose filter matched.
    pub handlers: usize,
    /// Broadcast receivers that will see the event.
    pub receivers: usize,
}

/// Event bus delivering editor events to the UI shell
///
/// Handlers run synchronously on the publishing thread, in no particular
/// order. Async shells can drain the same stream from [`EventBus::receiver`].
pub struct EventBus {
    sender: broadcast::Sender<EditorEvent>,
    handlers: RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>,
    history: Mutex<VecDeque<EditorEvent>>,
    published: AtomicU64,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            handlers: RwLock::new(HashMap::new()),
            history: Mutex::new(VecDeque::new()),
            published: AtomicU64::new(0),
            config,
        }
    }

    /// Publish an event to every matching handler and receiver
    ///
    /// Handlers must not subscribe or unsubscribe from inside the callback.
    pub fn publish(&self, event: EditorEvent) -> Result<Delivery, EventBusError> {
        tracing::trace!("Publishing {}", event.description());
        self.published.fetch_add(1, Ordering::Relaxed);

        if self.config.enable_history {
            self.record(&event);
        }

        let mut delivery = Delivery::default();
        {
            let handlers = self.handlers.read();
            for (filter, handler) in handlers.values() {
                if filter.matches(&event) {
                    handler(event.clone());
                    delivery.handlers += 1;
                }
            }
        }

        // A send error only means no receiver is alive.
        delivery.receivers = self.sender.send(event).unwrap_or(0);

        if delivery == Delivery::default() && self.subscriber_count() == 0 {
            return Err(EventBusError::NoSubscribers);
        }
        Ok(delivery)
    }

    /// Register a synchronous handler
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(EditorEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::generate();
        self.handlers.write().insert(id, (filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Receiver for shells that drain events from an async task
    pub fn receiver(&self) -> broadcast::Receiver<EditorEvent> {
        self.sender.subscribe()
    }

    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.handlers.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Number of registered synchronous handlers
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Total events published since creation
    pub fn published_count(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }

    /// Oldest first; empty unless history is enabled.
    pub fn history(&self) -> Vec<EditorEvent> {
        self.history.lock().iter().cloned().collect()
    }

    pub fn clear_history(&self) {
        self.history.lock().clear();
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, event: &EditorEvent) {
        let mut history = self.history.lock();
        if history.len() == self.config.max_history_size {
            history.pop_front();
        }
        if self.config.max_history_size > 0 {
            history.push_back(event.clone());
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("published", &self.published_count())
            .field("config", &self.config)
            .finish()
    }
}
