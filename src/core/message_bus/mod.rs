//=========================================================================
// Message Bus
//=========================================================================
//
// Typed per-tick queues shared between the trigger system, the scene
// manager and scenes.
//
// Message types in flight:
//   OverlapEvent        host → TriggerSystem
//   SceneLoadRequest<S> SceneTrigger / Scene → SceneManager
//
//=========================================================================

//=== Module Declarations =================================================

mod message_bus;
mod message_queue;

//=== Public API ==========================================================

pub use message_bus::{Message, MessageBus};
