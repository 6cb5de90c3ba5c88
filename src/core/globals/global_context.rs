//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for scenes and systems.
//
// Contains state data that scenes read/write:
// - message_bus: overlap events in, scene load requests out
// - tick: number of completed core ticks
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::message_bus::MessageBus;

//=== GlobalContext =======================================================

/// Shared context data accessible to scenes during updates.
///
/// Scenes receive `&GlobalContext` in lifecycle hooks and
/// `&mut GlobalContext` in `update`, where they may request loads through
/// the bus.
#[derive(Default)]
pub struct GlobalContext {
    /// Per-tick message queues.
    ///
    /// Implements [`SceneLoader`](crate::core::scene::SceneLoader), so it
    /// can be handed directly to triggers and scenes.
    pub message_bus: MessageBus,

    /// Completed ticks since the core thread started.
    pub tick: u64,
}

impl GlobalContext {
    /// Creates a new context with empty state.
    pub fn new() -> Self {
        Self {
            message_bus: MessageBus::new(),
            tick: 0,
        }
    }
}
