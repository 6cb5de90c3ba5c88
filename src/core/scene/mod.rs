//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and stack-based scene switching.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene<S>>>
//     └─ stack: Vec<S>
//
// Flow:
//   SceneLoader::load_scene() → MessageBus<SceneLoadRequest>
//     → SceneManager::process_requests() → on_exit / on_enter
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;

//=== Module Declarations =================================================

mod load_request;
mod scene_key;
mod scene_manager;

//=== Public API ==========================================================

pub use load_request::{LoadMode, SceneLoadRequest, SceneLoader};
pub use scene_key::{SceneIndex, SceneKey};
pub use scene_manager::{SceneChange, SceneManager};

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks and update logic.
///
/// Scenes are registered in [`SceneManager`] once and keep their own
/// state between activations.
///
/// # Minimal Implementation
///
/// Only `update()` is required:
///
/// ```rust
/// # use scene_switch::prelude::*;
/// struct GameOver;
///
/// impl Scene<SceneIndex> for GameOver {
///     fn update(&mut self, _context: &mut GlobalContext) {}
/// }
/// ```
pub trait Scene<S: SceneKey>: Send {
    /// Called when the scene becomes loaded.
    fn on_enter(&mut self, _context: &GlobalContext) {}

    /// Called when the scene is unloaded, including when a single-mode
    /// load replaces it.
    fn on_exit(&mut self, _context: &GlobalContext) {}

    /// Called every tick while the scene is active.
    ///
    /// Scenes may request further loads through `context.message_bus`,
    /// which implements [`SceneLoader`].
    fn update(&mut self, context: &mut GlobalContext);

    /// Whether scenes below this one keep updating.
    ///
    /// Additively loaded overlays (HUDs, pause menus) are usually
    /// transparent. An opaque scene blocks updates to the stack below it.
    fn is_transparent(&self) -> bool {
        false
    }
}
