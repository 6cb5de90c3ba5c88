//=========================================================================
// Message Bus
//=========================================================================
//
// Type-keyed queues for messages exchanged within a single tick.
//
// Architecture:
//   producers → push<M>() → HashMap<TypeId, Vec<M>>
//                                ↓
//   consumers ← read<M>() / take<M>()
//                                ↓
//   owner ────→ clear<M>() once every consumer has seen the tick
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::message_queue::MessageQueue;

//=== Public API ==========================================================

/// Marker trait for types that can travel through the [`MessageBus`].
///
/// Automatically implemented for all types that are Send + 'static.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=========================================================================

/// Per-type message queues for batched communication between systems.
///
/// Overlap events arrive here from the host, triggers answer with scene
/// load requests, and the scene manager drains those at the end of the
/// tick.
#[derive(Default)]
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    /// Creates a bus with no queues allocated.
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    //--- Message Operations -----------------------------------------------

    /// Appends a message to the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        self.queue_mut::<M>().push(msg);
    }

    /// Returns every queued message of type `M`, oldest first.
    ///
    /// Reading does not consume. Several systems may read the same
    /// messages within a tick before the owner calls [`clear`](Self::clear).
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue::<M>().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Removes and returns every queued message of type `M`.
    ///
    /// Messages pushed while the returned batch is being handled land in
    /// a fresh queue and are seen on the next take.
    pub fn take<M: Message>(&mut self) -> Vec<M> {
        match self.queues.get_mut(&TypeId::of::<M>()) {
            Some(queue) => queue
                .as_any_mut()
                .downcast_mut::<Vec<M>>()
                .map(std::mem::take)
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    //--- Query API --------------------------------------------------------

    /// Returns true if at least one message of type `M` is queued.
    pub fn has_messages<M: Message>(&self) -> bool {
        self.count::<M>() > 0
    }

    /// Returns the number of queued messages of type `M`.
    pub fn count<M: Message>(&self) -> usize {
        self.queue::<M>().map_or(0, Vec::len)
    }

    //--- Clearing ---------------------------------------------------------

    /// Drops all messages of type `M`, keeping the allocation.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    /// Drops every queued message of every type, keeping allocations.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn queue<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
    }

    fn queue_mut<M: Message>(&mut self) -> &mut Vec<M> {
        self.queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()))
            .as_any_mut()
            .downcast_mut::<Vec<M>>()
            .expect("MessageBus queue stored under the wrong TypeId")
    }
}

//=========================================================================
// Tests
//=========================================================================
