//=========================================================================
// Host Bridge Interface
//=========================================================================
//
// Host-to-core contract.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::trigger::OverlapEvent;

//=== HostEvent ===========================================================

/// Events sent from the host to the core thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// An entity began overlapping a trigger shape.
    Overlap(OverlapEvent),

    /// Stop the core thread after the current tick.
    Shutdown,
}

impl From<OverlapEvent> for HostEvent {
    fn from(event: OverlapEvent) -> Self {
        Self::Overlap(event)
    }
}
