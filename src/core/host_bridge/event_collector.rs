//=========================================================================
// Event Collector
//=========================================================================
//
// Host event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<HostEvent> → collect_frame() → overlaps → TickControl
//
// Bounded polling keeps a flooded channel from starving the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::HostEvent;
use crate::core::trigger::OverlapEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects host events for one tick.
pub(crate) struct EventCollector {
    receiver: Receiver<HostEvent>,
    overlaps: Vec<OverlapEvent>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 256;

    pub(crate) fn new(receiver: Receiver<HostEvent>) -> Self {
        Self {
            receiver,
            overlaps: Vec::with_capacity(8),
        }
    }

    /// Drains pending host events, up to a fixed bound per tick.
    ///
    /// Overlaps received before a shutdown are kept so the final tick
    /// still handles them.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.overlaps.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(HostEvent::Overlap(event)) => {
                    self.overlaps.push(event);
                    drained += 1;
                }
                Ok(HostEvent::Shutdown) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Host event backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Overlaps collected this tick, in arrival order.
    pub(crate) fn overlaps(&self) -> &[OverlapEvent] {
        &self.overlaps
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
