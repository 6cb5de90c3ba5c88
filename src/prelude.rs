//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use scene_switch::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine runtime
pub use crate::engine::{Engine, EngineBuilder, EngineHandle};

// Configuration
pub use crate::config::{Config, ConfigError, EngineConfig, LevelData, TriggerPlacement};

// Global systems and context
pub use crate::core::globals::{GlobalContext, GlobalSystems};

// Host bridge
pub use crate::core::host_bridge::HostEvent;

// Scene system
pub use crate::core::scene::{
    LoadMode, Scene, SceneChange, SceneIndex, SceneKey, SceneLoadRequest, SceneLoader,
    SceneManager,
};

// Trigger system
pub use crate::core::trigger::{
    EntityCategory, EntityId, EntityRef, OverlapEvent, SceneTrigger, TriggerId, TriggerSystem,
};

// Message bus
pub use crate::core::message_bus::MessageBus;
