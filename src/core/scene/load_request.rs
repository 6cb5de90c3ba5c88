//=========================================================================
// Scene Load Requests
//=========================================================================
//
// The contract between whatever wants a scene change (triggers, scenes)
// and the component that performs it.
//
// Requesters only see `dyn SceneLoader<S>`. In the running engine that
// is the MessageBus, which queues a `SceneLoadRequest` for the scene
// manager to apply at the tick boundary.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::SceneKey;
use crate::core::message_bus::MessageBus;

//=== LoadMode ============================================================

/// How a newly loaded scene relates to the scenes already loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadMode {
    /// The loaded scene replaces every currently loaded scene.
    #[default]
    Single,

    /// The loaded scene is stacked on top of the current ones.
    Additive,
}

//=== SceneLoadRequest ====================================================

/// A request to load `scene` in the given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLoadRequest<S: SceneKey> {
    pub scene: S,
    pub mode: LoadMode,
}

impl<S: SceneKey> SceneLoadRequest<S> {
    /// Request that replaces everything currently loaded with `scene`.
    pub fn single(scene: S) -> Self {
        Self { scene, mode: LoadMode::Single }
    }

    /// Request that stacks `scene` on top of the loaded scenes.
    pub fn additive(scene: S) -> Self {
        Self { scene, mode: LoadMode::Additive }
    }
}

//=== SceneLoader Trait ===================================================

/// Scene-management collaborator handed to anything that may request a
/// scene change.
///
/// Requests are fire-and-forget: the caller never observes whether the
/// load succeeded or when it completes.
pub trait SceneLoader<S: SceneKey> {
    fn load_scene(&mut self, scene: S, mode: LoadMode);
}

/// Queues the request for [`SceneManager::process_requests`].
///
/// [`SceneManager::process_requests`]: super::SceneManager::process_requests
impl<S: SceneKey> SceneLoader<S> for MessageBus {
    fn load_scene(&mut self, scene: S, mode: LoadMode) {
        self.push(SceneLoadRequest { scene, mode });
    }
}

/// Records requests in order. Handy for tools and tests that only need
/// to know what would have been loaded.
impl<S: SceneKey> SceneLoader<S> for Vec<SceneLoadRequest<S>> {
    fn load_scene(&mut self, scene: S, mode: LoadMode) {
        self.push(SceneLoadRequest { scene, mode });
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneIndex;

    #[test]
    fn default_mode_is_single() {
        assert_eq!(LoadMode::default(), LoadMode::Single);
    }

    #[test]
    fn bus_loader_queues_request() {
        let mut bus = MessageBus::new();
        let loader: &mut dyn SceneLoader<SceneIndex> = &mut bus;

        loader.load_scene(SceneIndex(2), LoadMode::Additive);

        assert_eq!(
            bus.read::<SceneLoadRequest<SceneIndex>>(),
            &[SceneLoadRequest::additive(SceneIndex(2))]
        );
    }

    #[test]
    fn vec_loader_records_in_order() {
        let mut recorded: Vec<SceneLoadRequest<SceneIndex>> = Vec::new();
        recorded.load_scene(SceneIndex(1), LoadMode::Single);
        recorded.load_scene(SceneIndex(1), LoadMode::Single);

        assert_eq!(recorded, vec![SceneLoadRequest::single(SceneIndex(1)); 2]);
    }
}
