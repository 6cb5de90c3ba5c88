//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the systems running on the core (logic)
// thread.
//
// Responsibilities:
// - Own the trigger system, the scene manager and their shared context
// - Receive host events over a crossbeam channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Hand the systems back to the caller when the thread stops
//
// Notes:
// The host never touches core state directly. It only reports overlap
// events through the channel, and every trigger reaction and scene load
// happens on the core thread.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::Receiver;
use log::info;

//=== Internal Modules ====================================================
use globals::{GlobalContext, GlobalSystems};
use host_bridge::{EventCollector, HostEvent, TickControl};
use scene::SceneKey;

pub mod globals;
pub mod host_bridge;
pub mod message_bus;
pub mod scene;
pub mod trigger;

//=== CoreSystemsOrchestrator =============================================
//
// Holds the systems and context until the core thread takes them over.
//
pub(crate) struct CoreSystemsOrchestrator<S: SceneKey> {
    systems: GlobalSystems<S>,
    context: GlobalContext,
}

impl<S: SceneKey> CoreSystemsOrchestrator<S> {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        Self {
            systems: GlobalSystems::new(),
            context: GlobalContext::new(),
        }
    }

    //--- init_systems() --------------------------------------------------
    //
    // Gives the caller one chance to register scenes and place triggers
    // before the thread starts.
    //
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems<S>),
    {
        init_fn(&mut self.systems);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the core thread responsible for ticking all systems at a
    // fixed update frequency (TPS - ticks per second).
    //
    // Each tick:
    //  1. Collects host events and queues overlaps on the bus
    //  2. Updates triggers and scenes, applies load requests
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits after the tick on which shutdown was received
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<HostEvent>,
        tps: f64,
    ) -> thread::JoinHandle<GlobalSystems<S>> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut systems = self.systems;
            let mut context = self.context;
            let mut collector = EventCollector::new(receiver);

            systems.start(&context);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather host events ----------------------------
                let control = collector.collect_frame();
                for &event in collector.overlaps() {
                    context.message_bus.push(event);
                }

                //--- Step 2: Update systems --------------------------------
                systems.update(&mut context);

                if control == TickControl::Exit {
                    info!("Core thread exiting after tick {}", context.tick);
                    break;
                }

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            systems
        })
    }
}
