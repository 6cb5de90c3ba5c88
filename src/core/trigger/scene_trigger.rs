//=========================================================================
// Scene Trigger
//=========================================================================
//
// A trigger zone that requests a single-mode scene load whenever an
// entity of its activating category begins overlapping it.
//
// The trigger holds no runtime state. Every begin-overlap from a
// matching entity issues a fresh request, and the trigger never waits
// on or observes the load.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{EntityCategory, EntityRef};
use crate::core::scene::{LoadMode, SceneKey, SceneLoader};

//=== SceneTrigger ========================================================

/// Switches the active scene when the player enters the trigger.
///
/// # Example
///
/// ```rust
/// # use scene_switch::prelude::*;
/// let trigger = SceneTrigger::new(SceneIndex(3));
/// let mut requests: Vec<SceneLoadRequest<SceneIndex>> = Vec::new();
///
/// trigger.on_overlap_begin(&EntityRef::player(1), &mut requests);
/// trigger.on_overlap_begin(&EntityRef::new(2, EntityCategory::Enemy), &mut requests);
///
/// assert_eq!(requests, vec![SceneLoadRequest::single(SceneIndex(3))]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTrigger<S: SceneKey> {
    target: S,
    activator: EntityCategory,
}

impl<S: SceneKey> SceneTrigger<S> {
    /// Creates a trigger that loads `target` when the player enters.
    pub fn new(target: S) -> Self {
        Self {
            target,
            activator: EntityCategory::Player,
        }
    }

    /// Changes which entity category activates the trigger.
    pub fn with_activator(mut self, activator: EntityCategory) -> Self {
        self.activator = activator;
        self
    }

    pub fn target(&self) -> S {
        self.target
    }

    pub fn activator(&self) -> EntityCategory {
        self.activator
    }

    /// Whether `other` would activate this trigger.
    pub fn accepts(&self, other: &EntityRef) -> bool {
        other.category == self.activator
    }

    //--- Event Handling ---------------------------------------------------

    /// Reacts to `other` beginning to overlap the trigger.
    ///
    /// Issues exactly one single-mode load of the target when `other` is
    /// of the activating category, and nothing otherwise. The target is
    /// not validated; an unknown scene is the loader's problem.
    ///
    /// Returns whether a request was issued.
    pub fn on_overlap_begin(&self, other: &EntityRef, loader: &mut dyn SceneLoader<S>) -> bool {
        debug!("Trigger entered by {}", other);

        if !self.accepts(other) {
            return false;
        }

        info!("Switching scene to {:?}", self.target);
        loader.load_scene(self.target, LoadMode::Single);
        true
    }
}

//=========================================================================
// Tests
//=========================================================================
