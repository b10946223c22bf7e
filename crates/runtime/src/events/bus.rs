//! Topic-based event bus implementation.

use std::sync::Arc;

use armory_core::ArmoryEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Inventory contents (common items, weapon slots, gear, drops)
    Inventory,
    /// Item in hand changes
    Hand,
    /// Attachment mount and unmount
    Attachment,
    /// Shots fired
    Combat,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Inventory, Topic::Hand, Topic::Attachment, Topic::Combat];

    pub fn of(event: &ArmoryEvent) -> Topic {
        match event {
            ArmoryEvent::CommonItemAdded { .. }
            | ArmoryEvent::CommonItemRemoved { .. }
            | ArmoryEvent::WeaponAddedToSlot { .. }
            | ArmoryEvent::WeaponRemovedFromSlot { .. }
            | ArmoryEvent::WeaponSlotsSwapped { .. }
            | ArmoryEvent::GearStored { .. }
            | ArmoryEvent::GearRemoved { .. }
            | ArmoryEvent::ItemDropped { .. }
            | ArmoryEvent::ItemConsumed { .. } => Topic::Inventory,
            ArmoryEvent::InHandChanged { .. } => Topic::Hand,
            ArmoryEvent::AttachmentMounted { .. } | ArmoryEvent::AttachmentUnmounted { .. } => {
                Topic::Attachment
            }
            ArmoryEvent::WeaponFired { .. } => Topic::Combat,
        }
    }
}

/// Armory event stamped with the frame that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub frame: u64,
    pub payload: ArmoryEvent,
}

impl Event {
    pub fn topic(&self) -> Topic {
        Topic::of(&self.payload)
    }
}

#[derive(Debug)]
struct Channels {
    inventory: broadcast::Sender<Event>,
    hand: broadcast::Sender<Event>,
    attachment: broadcast::Sender<Event>,
    combat: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing never blocks.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                inventory: broadcast::channel(capacity).0,
                hand: broadcast::channel(capacity).0,
                attachment: broadcast::channel(capacity).0,
                combat: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Inventory => &self.channels.inventory,
            Topic::Hand => &self.channels.hand,
            Topic::Attachment => &self.channels.attachment,
            Topic::Combat => &self.channels.combat,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains every event currently queued on a receiver without waiting.
///
/// Events lost to a lagging receiver are skipped with a warning.
pub fn drain(receiver: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event receiver lagged");
            }
            Err(broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed) => {
                break;
            }
        }
    }
    events
}
