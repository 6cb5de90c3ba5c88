//=========================================================================
// Trigger System
//=========================================================================
//
// Owns the triggers placed in the current level and routes overlap
// events to them.
//
// Architecture:
//   TriggerSystem
//     ├─ triggers: HashMap<TriggerId, PlacedTrigger<S>>  (trigger + owning scene)
//     ├─ levels: HashMap<S, LevelData<S>>
//     └─ next_id: u64
//
// Each tick: take<OverlapEvent>() → dispatch() → SceneLoadRequest on bus
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{OverlapEvent, SceneTrigger, TriggerId};
use crate::config::LevelData;
use crate::core::message_bus::MessageBus;
use crate::core::scene::{SceneChange, SceneKey, SceneLoader};

//=== PlacedTrigger =======================================================

/// A trigger together with the scene whose lifetime bounds it.
struct PlacedTrigger<S: SceneKey> {
    trigger: SceneTrigger<S>,
    owner: Option<S>,
}

//=== TriggerSystem =======================================================

/// Registry of placed scene triggers.
///
/// Triggers placed with [`place_in`](Self::place_in) belong to a scene and
/// are destroyed when that scene unloads. Level data registered with
/// [`register_level`](Self::register_level) is placed again every time
/// its scene loads.
pub struct TriggerSystem<S: SceneKey> {
    triggers: HashMap<TriggerId, PlacedTrigger<S>>,
    levels: HashMap<S, LevelData<S>>,
    next_id: u64,
}

impl<S: SceneKey> TriggerSystem<S> {
    pub fn new() -> Self {
        Self {
            triggers: HashMap::new(),
            levels: HashMap::new(),
            next_id: 0,
        }
    }

    //--- Placement --------------------------------------------------------

    /// Places a trigger that outlives every scene change and returns the
    /// id the physics host should report in overlap events for its shape.
    pub fn place(&mut self, trigger: SceneTrigger<S>) -> TriggerId {
        self.insert(trigger, None)
    }

    /// Places a trigger owned by `scene`. It is removed when `scene`
    /// unloads, including when a single-mode load replaces it.
    pub fn place_in(&mut self, scene: S, trigger: SceneTrigger<S>) -> TriggerId {
        self.insert(trigger, Some(scene))
    }

    /// Removes a trigger. Later events addressed to it are ignored.
    pub fn remove(&mut self, id: TriggerId) -> Option<SceneTrigger<S>> {
        self.triggers.remove(&id).map(|placed| placed.trigger)
    }

    /// Removes every trigger owned by `scene` (level teardown).
    ///
    /// Ids are never reused, so stale events from the torn-down level
    /// cannot reach a trigger of the next one. Returns how many were
    /// removed.
    pub fn remove_scene(&mut self, scene: S) -> usize {
        let before = self.triggers.len();
        self.triggers.retain(|_, placed| placed.owner != Some(scene));

        let removed = before - self.triggers.len();
        if removed > 0 {
            debug!("Removed {} triggers owned by scene {:?}", removed, scene);
        }
        removed
    }

    /// Removes every placed trigger, owned or not.
    pub fn clear(&mut self) {
        self.triggers.clear();
    }

    /// Replaces all placed triggers with those in `level`.
    ///
    /// Returns the new ids in the order the placements appear.
    pub fn load_level(&mut self, level: &LevelData<S>) -> Vec<TriggerId> {
        info!("Loading {} triggers for level '{}'", level.triggers.len(), level.name);

        self.clear();
        level
            .triggers
            .iter()
            .map(|placement| self.place(placement.to_trigger()))
            .collect()
    }

    //--- Level Data -------------------------------------------------------

    /// Associates level data with `scene`.
    ///
    /// Its triggers are placed, owned by `scene`, whenever `scene` loads.
    pub fn register_level(&mut self, scene: S, level: LevelData<S>) {
        if self.levels.insert(scene, level).is_some() {
            warn!("Level data for scene {:?} was already registered and has been replaced", scene);
        }
    }

    /// Places the registered level's triggers for `scene`.
    ///
    /// Returns the new ids, or nothing if no level is registered.
    pub fn spawn_level(&mut self, scene: S) -> Vec<TriggerId> {
        let Some(level) = self.levels.get(&scene) else {
            return Vec::new();
        };

        info!("Placing {} triggers for level '{}'", level.triggers.len(), level.name);
        let triggers: Vec<SceneTrigger<S>> =
            level.triggers.iter().map(|placement| placement.to_trigger()).collect();

        triggers
            .into_iter()
            .map(|trigger| self.place_in(scene, trigger))
            .collect()
    }

    /// Keeps placed triggers in step with scene loads and unloads.
    pub fn apply_scene_changes(&mut self, changes: &[SceneChange<S>]) {
        for change in changes {
            match *change {
                SceneChange::Exited(scene) => {
                    self.remove_scene(scene);
                }
                SceneChange::Entered(scene) => {
                    self.spawn_level(scene);
                }
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn insert(&mut self, trigger: SceneTrigger<S>, owner: Option<S>) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;

        debug!("Placed {} targeting {:?} (owner {:?})", id, trigger.target(), owner);
        self.triggers.insert(id, PlacedTrigger { trigger, owner });
        id
    }

    //--- Queries ----------------------------------------------------------

    pub fn get(&self, id: TriggerId) -> Option<&SceneTrigger<S>> {
        self.triggers.get(&id).map(|placed| &placed.trigger)
    }

    /// The scene owning trigger `id`, if it is scene-bound.
    pub fn owner(&self, id: TriggerId) -> Option<S> {
        self.triggers.get(&id).and_then(|placed| placed.owner)
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    //--- Dispatch ---------------------------------------------------------

    /// Delivers one overlap event to its trigger.
    ///
    /// Returns whether the trigger issued a load request.
    pub fn dispatch(&self, event: &OverlapEvent, loader: &mut dyn SceneLoader<S>) -> bool {
        match self.triggers.get(&event.trigger) {
            Some(placed) => placed.trigger.on_overlap_begin(&event.other, loader),
            None => {
                warn!("Overlap for unknown {} ignored", event.trigger);
                false
            }
        }
    }

    /// Consumes every queued [`OverlapEvent`] and queues the resulting
    /// load requests back on the bus.
    ///
    /// Returns the number of requests issued.
    pub fn process_overlaps(&self, bus: &mut MessageBus) -> usize {
        let mut issued = 0;

        for event in bus.take::<OverlapEvent>() {
            if self.dispatch(&event, bus) {
                issued += 1;
            }
        }

        issued
    }
}

impl<S: SceneKey> Default for TriggerSystem<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TriggerPlacement;
    use crate::core::scene::{SceneIndex, SceneLoadRequest};
    use crate::core::trigger::{EntityCategory, EntityRef};

    #[test]
    fn place_assigns_increasing_ids() {
        let mut system = TriggerSystem::new();
        let a = system.place(SceneTrigger::new(SceneIndex(1)));
        let b = system.place(SceneTrigger::new(SceneIndex(2)));

        assert_ne!(a, b);
        assert_eq!(system.len(), 2);
        assert_eq!(system.get(b).map(SceneTrigger::target), Some(SceneIndex(2)));
    }

    #[test]
    fn dispatch_routes_to_addressed_trigger() {
        let mut system = TriggerSystem::new();
        let _exit = system.place(SceneTrigger::new(SceneIndex(1)));
        let pit = system.place(SceneTrigger::new(SceneIndex(3)));
        let mut requests: Vec<SceneLoadRequest<SceneIndex>> = Vec::new();

        let fired = system.dispatch(&OverlapEvent::new(pit, EntityRef::player(7)), &mut requests);

        assert!(fired);
        assert_eq!(requests, vec![SceneLoadRequest::single(SceneIndex(3))]);
    }

    #[test]
    fn unknown_trigger_is_ignored() {
        let mut system = TriggerSystem::new();
        let id = system.place(SceneTrigger::new(SceneIndex(1)));
        system.remove(id);
        let mut requests: Vec<SceneLoadRequest<SceneIndex>> = Vec::new();

        assert!(!system.dispatch(&OverlapEvent::new(id, EntityRef::player(1)), &mut requests));
        assert!(requests.is_empty());
    }

    #[test]
    fn process_overlaps_turns_events_into_requests() {
        let mut system = TriggerSystem::new();
        let id = system.place(SceneTrigger::new(SceneIndex(3)));
        let mut bus = MessageBus::new();
        bus.push(OverlapEvent::new(id, EntityRef::player(1)));
        bus.push(OverlapEvent::new(id, EntityRef::new(2, EntityCategory::Enemy)));
        bus.push(OverlapEvent::new(id, EntityRef::player(1)));

        let issued = system.process_overlaps(&mut bus);

        assert_eq!(issued, 2);
        assert!(!bus.has_messages::<OverlapEvent>());
        assert_eq!(
            bus.read::<SceneLoadRequest<SceneIndex>>(),
            &[SceneLoadRequest::single(SceneIndex(3)); 2]
        );
    }

    #[test]
    fn load_level_replaces_triggers_without_reusing_ids() {
        let mut system = TriggerSystem::new();
        let old = system.place(SceneTrigger::new(SceneIndex(9)));

        let level = LevelData {
            name: "caves".to_string(),
            triggers: vec![
                TriggerPlacement { target: SceneIndex(3), activator: EntityCategory::Player },
                TriggerPlacement { target: SceneIndex(4), activator: EntityCategory::Enemy },
            ],
        };
        let ids = system.load_level(&level);

        assert_eq!(ids.len(), 2);
        assert!(!ids.contains(&old));
        assert!(system.get(old).is_none());
        assert_eq!(system.get(ids[1]).map(SceneTrigger::activator), Some(EntityCategory::Enemy));
    }

    #[test]
    fn remove_scene_drops_only_that_scenes_triggers() {
        let mut system = TriggerSystem::new();
        let pit = system.place_in(SceneIndex(0), SceneTrigger::new(SceneIndex(3)));
        let door = system.place_in(SceneIndex(0), SceneTrigger::new(SceneIndex(5)));
        let hud = system.place_in(SceneIndex(1), SceneTrigger::new(SceneIndex(2)));
        let global = system.place(SceneTrigger::new(SceneIndex(4)));

        assert_eq!(system.remove_scene(SceneIndex(0)), 2);

        assert!(system.get(pit).is_none());
        assert!(system.get(door).is_none());
        assert_eq!(system.owner(hud), Some(SceneIndex(1)));
        assert_eq!(system.owner(global), None);
        assert!(system.get(global).is_some());
    }

    #[test]
    fn registered_level_follows_its_scene() {
        let mut system = TriggerSystem::new();
        system.register_level(
            SceneIndex(0),
            LevelData {
                name: "forest".to_string(),
                triggers: vec![TriggerPlacement { target: SceneIndex(3), activator: EntityCategory::Player }],
            },
        );

        system.apply_scene_changes(&[SceneChange::Entered(SceneIndex(0))]);
        assert_eq!(system.len(), 1);

        system.apply_scene_changes(&[SceneChange::Exited(SceneIndex(0))]);
        assert!(system.is_empty());

        // A reload places fresh triggers under new ids
        let first = system.spawn_level(SceneIndex(0));
        system.apply_scene_changes(&[
            SceneChange::Exited(SceneIndex(0)),
            SceneChange::Entered(SceneIndex(0)),
        ]);
        assert_eq!(system.len(), 1);
        assert!(system.get(first[0]).is_none());
    }

    #[test]
    fn spawn_level_without_registration_places_nothing() {
        let mut system = TriggerSystem::<SceneIndex>::new();
        assert!(system.spawn_level(SceneIndex(7)).is_empty());
        assert!(system.is_empty());
    }

    #[test]
    fn ids_are_64_bit() {
        let mut system = TriggerSystem::new();
        system.next_id = u64::from(u32::MAX);

        let a = system.place(SceneTrigger::new(SceneIndex(1)));
        let b = system.place(SceneTrigger::new(SceneIndex(1)));

        assert_eq!(a, TriggerId(u64::from(u32::MAX)));
        assert_eq!(b, TriggerId(u64::from(u32::MAX) + 1));
    }
}
