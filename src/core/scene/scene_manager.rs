//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, the loaded-scene stack, and lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys. This allows scenes to maintain state between activations.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{LoadMode, Scene, SceneKey, SceneLoadRequest};
use crate::core::globals::GlobalContext;

//=== Scene Change ========================================================

/// A lifecycle change applied by the manager, in the order it happened.
///
/// Other systems read these after each tick to keep scene-bound state
/// (such as a level's triggers) in step with the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange<S: SceneKey> {
    Entered(S),
    Exited(S),
}

//=== Scene Manager =======================================================

/// Manages scene lifecycle and stack-based scene switching.
///
/// Scenes are registered once and referenced by key. The stack holds the
/// loaded scenes, bottom first. A single-mode load empties the stack
/// before pushing its target; an additive load pushes on top.
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    stack: Vec<S>,
    changes: Vec<SceneChange<S>>,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    /// Creates a new scene manager with an empty stack.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
            changes: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// Scenes must be registered before any load request can reach them.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use scene_switch::prelude::*;
    /// # struct Level;
    /// # impl Scene<SceneIndex> for Level {
    /// #     fn update(&mut self, _ctx: &mut GlobalContext) {}
    /// # }
    /// let mut manager = SceneManager::new();
    /// manager.register_scene(SceneIndex(1), Level);
    /// assert!(manager.is_registered(SceneIndex(1)));
    /// ```
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and puts it on the stack as the starting scene.
    ///
    /// Its `on_enter` runs when the manager is started.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack", key);
        } else {
            debug!("Registered scene {:?} as default and added to stack", key);
            self.stack.push(key);
        }
    }

    /// Calls `on_enter` on every scene placed by [`register_default`].
    ///
    /// [`register_default`]: Self::register_default
    pub fn start(&mut self, context: &GlobalContext) {
        for &key in &self.stack {
            debug!("Starting scene manager with scene {:?}", key);
            match self.scenes.get_mut(&key) {
                Some(scene) => {
                    scene.on_enter(context);
                    self.changes.push(SceneChange::Entered(key));
                }
                None => warn!("Initial scene {:?} not registered", key),
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Loaded scenes, bottom of the stack first.
    pub fn active_scenes(&self) -> &[S] {
        &self.stack
    }

    pub fn is_loaded(&self, key: S) -> bool {
        self.stack.contains(&key)
    }

    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    /// Returns and forgets the lifecycle changes applied since the last
    /// call.
    pub fn take_changes(&mut self) -> Vec<SceneChange<S>> {
        std::mem::take(&mut self.changes)
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates active scenes.
    ///
    /// Calls update on all transparent scenes and the topmost opaque scene.
    pub fn update(&mut self, context: &mut GlobalContext) {
        if self.stack.is_empty() {
            return;
        }

        let scenes_to_update = self.collect_active_scenes();

        for key in scenes_to_update {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.update(context);
            }
        }
    }

    //--- Request Processing -----------------------------------------------

    /// Applies every queued [`SceneLoadRequest`] in FIFO order.
    ///
    /// Called at the tick boundary after scene updates. Requests issued by
    /// `on_enter`/`on_exit` while this runs stay queued for the next tick.
    pub fn process_requests(&mut self, context: &mut GlobalContext) {
        let requests = context.message_bus.take::<SceneLoadRequest<S>>();

        for request in requests {
            self.load(request, context);
        }
    }

    /// Applies one load request immediately.
    pub fn load(&mut self, request: SceneLoadRequest<S>, context: &GlobalContext) {
        if !self.scenes.contains_key(&request.scene) {
            warn!("Attempted to load unregistered scene {:?}", request.scene);
            return;
        }

        match request.mode {
            LoadMode::Single => self.load_single(request.scene, context),
            LoadMode::Additive => self.load_additive(request.scene, context),
        }
    }

    /// Unloads a single scene from the stack, leaving the others in place.
    pub fn unload(&mut self, key: S, context: &GlobalContext) {
        if let Some(pos) = self.stack.iter().position(|&k| k == key) {
            debug!("Unloading scene {:?} at position {}", key, pos);
            self.stack.remove(pos);

            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.on_exit(context);
            }
            self.changes.push(SceneChange::Exited(key));
        } else {
            debug!("Scene {:?} not loaded, skipping unload", key);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn load_single(&mut self, key: S, context: &GlobalContext) {
        info!("Loading scene {:?} (single)", key);

        // Exit top-down so overlays leave before what they cover
        while let Some(old) = self.stack.pop() {
            if let Some(scene) = self.scenes.get_mut(&old) {
                scene.on_exit(context);
            }
            self.changes.push(SceneChange::Exited(old));
        }

        self.stack.push(key);
        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_enter(context);
        }
        self.changes.push(SceneChange::Entered(key));
    }

    fn load_additive(&mut self, key: S, context: &GlobalContext) {
        if self.stack.contains(&key) {
            warn!("Scene {:?} is already loaded, skipping additive load", key);
            return;
        }

        info!("Loading scene {:?} (additive)", key);
        self.stack.push(key);

        if let Some(scene) = self.scenes.get_mut(&key) {
            scene.on_enter(context);
        }
        self.changes.push(SceneChange::Entered(key));
    }

    fn collect_active_scenes(&self) -> Vec<S> {
        let mut active = Vec::new();

        // Iterate stack top-down, stop at first opaque scene
        for &key in self.stack.iter().rev() {
            active.push(key);

            if let Some(scene) = self.scenes.get(&key) {
                if !scene.is_transparent() {
                    break;
                }
            }
        }

        active.reverse();
        active
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{SceneIndex, SceneLoader};
    use std::sync::{Arc, Mutex};

    type Journal = Arc<Mutex<Vec<String>>>;

    struct Recording {
        name: &'static str,
        transparent: bool,
        journal: Journal,
    }

    impl Recording {
        fn new(name: &'static str, journal: &Journal) -> Self {
            Self { name, transparent: false, journal: Arc::clone(journal) }
        }

        fn transparent(mut self) -> Self {
            self.transparent = true;
            self
        }

        fn log(&self, what: &str) {
            self.journal.lock().unwrap().push(format!("{}:{}", self.name, what));
        }
    }

    impl Scene<SceneIndex> for Recording {
        fn on_enter(&mut self, _context: &GlobalContext) {
            self.log("enter");
        }

        fn on_exit(&mut self, _context: &GlobalContext) {
            self.log("exit");
        }

        fn update(&mut self, _context: &mut GlobalContext) {
            self.log("update");
        }

        fn is_transparent(&self) -> bool {
            self.transparent
        }
    }

    fn entries(journal: &Journal) -> Vec<String> {
        std::mem::take(&mut *journal.lock().unwrap())
    }

    fn manager_with_level_and_menu(journal: &Journal) -> SceneManager<SceneIndex> {
        let mut manager = SceneManager::new();
        manager.register_default(SceneIndex(0), Recording::new("level", journal));
        manager.register_scene(SceneIndex(1), Recording::new("hud", journal).transparent());
        manager.register_scene(SceneIndex(3), Recording::new("game_over", journal));
        manager
    }

    #[test]
    fn start_enters_default_scene() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);

        manager.start(&GlobalContext::new());

        assert_eq!(entries(&journal), vec!["level:enter"]);
        assert_eq!(manager.active_scenes(), &[SceneIndex(0)]);
    }

    #[test]
    fn single_load_replaces_every_loaded_scene() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let mut context = GlobalContext::new();
        manager.start(&context);
        manager.load(SceneLoadRequest::additive(SceneIndex(1)), &context);
        entries(&journal);

        context.message_bus.load_scene(SceneIndex(3), LoadMode::Single);
        manager.process_requests(&mut context);

        assert_eq!(entries(&journal), vec!["hud:exit", "level:exit", "game_over:enter"]);
        assert_eq!(manager.active_scenes(), &[SceneIndex(3)]);
        assert!(!context.message_bus.has_messages::<SceneLoadRequest<SceneIndex>>());
    }

    #[test]
    fn single_load_of_current_scene_reenters_it() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let context = GlobalContext::new();
        manager.start(&context);
        entries(&journal);

        manager.load(SceneLoadRequest::single(SceneIndex(0)), &context);

        assert_eq!(entries(&journal), vec!["level:exit", "level:enter"]);
        assert_eq!(manager.active_scenes(), &[SceneIndex(0)]);
    }

    #[test]
    fn additive_load_stacks_and_skips_duplicates() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let context = GlobalContext::new();
        manager.start(&context);

        manager.load(SceneLoadRequest::additive(SceneIndex(1)), &context);
        manager.load(SceneLoadRequest::additive(SceneIndex(1)), &context);

        assert_eq!(manager.active_scenes(), &[SceneIndex(0), SceneIndex(1)]);
        assert_eq!(entries(&journal), vec!["level:enter", "hud:enter"]);
    }

    #[test]
    fn unregistered_scene_leaves_stack_untouched() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let mut context = GlobalContext::new();
        manager.start(&context);
        entries(&journal);

        context.message_bus.load_scene(SceneIndex(42), LoadMode::Single);
        manager.process_requests(&mut context);

        assert!(entries(&journal).is_empty());
        assert_eq!(manager.active_scenes(), &[SceneIndex(0)]);
    }

    #[test]
    fn requests_apply_in_fifo_order() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let mut context = GlobalContext::new();
        manager.start(&context);

        context.message_bus.load_scene(SceneIndex(3), LoadMode::Single);
        context.message_bus.load_scene(SceneIndex(1), LoadMode::Additive);
        manager.process_requests(&mut context);

        assert_eq!(manager.active_scenes(), &[SceneIndex(3), SceneIndex(1)]);
    }

    #[test]
    fn update_stops_at_first_opaque_scene() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let mut context = GlobalContext::new();
        manager.start(&context);
        manager.load(SceneLoadRequest::additive(SceneIndex(1)), &context);
        entries(&journal);

        manager.update(&mut context);
        assert_eq!(entries(&journal), vec!["level:update", "hud:update"]);

        manager.load(SceneLoadRequest::additive(SceneIndex(3)), &context);
        entries(&journal);
        manager.update(&mut context);
        assert_eq!(entries(&journal), vec!["game_over:update"]);
    }

    #[test]
    fn unload_removes_only_that_scene() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let context = GlobalContext::new();
        manager.start(&context);
        manager.load(SceneLoadRequest::additive(SceneIndex(1)), &context);
        entries(&journal);

        manager.unload(SceneIndex(1), &context);
        manager.unload(SceneIndex(1), &context);

        assert_eq!(entries(&journal), vec!["hud:exit"]);
        assert_eq!(manager.active_scenes(), &[SceneIndex(0)]);
    }

    #[test]
    fn changes_record_lifecycle_in_order() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let context = GlobalContext::new();
        manager.start(&context);
        manager.load(SceneLoadRequest::additive(SceneIndex(1)), &context);
        manager.load(SceneLoadRequest::single(SceneIndex(3)), &context);

        assert_eq!(
            manager.take_changes(),
            vec![
                SceneChange::Entered(SceneIndex(0)),
                SceneChange::Entered(SceneIndex(1)),
                SceneChange::Exited(SceneIndex(1)),
                SceneChange::Exited(SceneIndex(0)),
                SceneChange::Entered(SceneIndex(3)),
            ]
        );
        assert!(manager.take_changes().is_empty());
    }

    #[test]
    fn rejected_loads_record_no_changes() {
        let journal = Journal::default();
        let mut manager = manager_with_level_and_menu(&journal);
        let context = GlobalContext::new();

        manager.load(SceneLoadRequest::single(SceneIndex(42)), &context);
        manager.unload(SceneIndex(3), &context);

        assert!(manager.take_changes().is_empty());
    }
}
