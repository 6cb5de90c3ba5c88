//=========================================================================
// Overlap Events
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::EntityRef;

//=== TriggerId ===========================================================

/// Handle to a trigger placed in a [`TriggerSystem`](super::TriggerSystem).
///
/// The physics host tags each trigger shape with this id so overlap
/// events can be routed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(pub u64);

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trigger:{}", self.0)
    }
}

//=== OverlapEvent ========================================================

/// An entity began overlapping a trigger shape.
///
/// Produced by the physics host, consumed once by the trigger system and
/// not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapEvent {
    pub trigger: TriggerId,
    pub other: EntityRef,
}

impl OverlapEvent {
    pub fn new(trigger: TriggerId, other: EntityRef) -> Self {
        Self { trigger, other }
    }
}
