//=========================================================================
// Global Systems
//=========================================================================
//
// Container for engine-level systems with logic.
//
// Contains the trigger system and the scene manager. Systems operate on
// GlobalContext data.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::GlobalContext;
use crate::core::scene::{SceneKey, SceneManager};
use crate::core::trigger::TriggerSystem;

//=== GlobalSystems =======================================================

/// Container for engine-level logic systems.
///
/// # Available Systems
///
/// - `triggers`: Placed scene triggers and overlap routing
/// - `scene_manager`: Stack-based scene lifecycle manager
pub struct GlobalSystems<S: SceneKey> {
    /// Triggers placed in the current level.
    pub triggers: TriggerSystem<S>,

    /// Scene registration, loading and updates.
    pub scene_manager: SceneManager<S>,
}

impl<S: SceneKey> GlobalSystems<S> {
    pub fn new() -> Self {
        Self {
            triggers: TriggerSystem::new(),
            scene_manager: SceneManager::new(),
        }
    }

    //--- Startup ----------------------------------------------------------

    /// Enters the default scenes and places the triggers of their levels.
    pub fn start(&mut self, context: &GlobalContext) {
        self.scene_manager.start(context);
        self.sync_triggers();
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick over the shared context.
    ///
    /// # Processing Pipeline
    ///
    /// 1. **Triggers**: Queued overlap events become load requests
    /// 2. **Scene Update**: Active scenes update (and may request loads)
    /// 3. **Load Requests**: Queued requests are applied in order
    /// 4. **Trigger Sync**: Triggers of unloaded scenes are destroyed and
    ///    those of newly loaded levels placed
    pub fn update(&mut self, context: &mut GlobalContext) {
        self.triggers.process_overlaps(&mut context.message_bus);

        self.scene_manager.update(context);

        self.scene_manager.process_requests(context);

        self.sync_triggers();

        context.tick += 1;
    }

    fn sync_triggers(&mut self) {
        let changes = self.scene_manager.take_changes();
        self.triggers.apply_scene_changes(&changes);
    }
}

impl<S: SceneKey> Default for GlobalSystems<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
