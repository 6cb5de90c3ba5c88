//=========================================================================
// Message Queue Trait
//=========================================================================
//
// Type-erased view over a `Vec<M>` so the bus can hold queues of
// different message types in one map.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Message;

//=========================================================================

/// Type-erased queue storage.
///
/// The bus only needs to clear queues and recover the concrete `Vec<M>`
/// through `Any` when a typed call arrives.
pub(super) trait MessageQueue: Send {
    /// Clears all messages while preserving allocated capacity.
    fn clear_queue(&mut self);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Message> MessageQueue for Vec<M> {
    fn clear_queue(&mut self) {
        self.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================
