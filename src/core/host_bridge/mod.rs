//=========================================================================
// Host Bridge
//=========================================================================
//
// Bridges the host game (physics, world lifetime) with the core thread.
//
// The host owns collision detection and only reports results across a
// channel, so physics backends can be swapped without touching triggers.
//
// Components:
// - `interface`: the event type crossing the channel
// - `event_collector`: core-side collection and per-tick batching
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub use interface::HostEvent;
