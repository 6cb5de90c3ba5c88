//=========================================================================
// Trigger System
//=========================================================================
//
// Trigger zones that react to entities entering them.
//
// Flow:
//   physics host ──OverlapEvent──> TriggerSystem::dispatch()
//                                     └─> SceneTrigger::on_overlap_begin()
//                                           └─> SceneLoader::load_scene()
//
//=========================================================================

//=== Module Declarations =================================================

mod entity;
mod overlap;
mod scene_trigger;
mod trigger_system;

//=== Public API ==========================================================

pub use entity::{EntityCategory, EntityId, EntityRef};
pub use overlap::{OverlapEvent, TriggerId};
pub use scene_trigger::SceneTrigger;
pub use trigger_system::TriggerSystem;
