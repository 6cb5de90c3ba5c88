//=========================================================================
// Scene Switch Engine
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  EngineHandle
//         │                          │                     │
//         ├─ with_tps()              └─ init()             ├─ report_overlap()
//         ├─ with_channel_capacity()                       └─ shutdown_and_join()
//         └─ from_config()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread::JoinHandle;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::config::{Config, ConfigError, EngineConfig};
use crate::core::globals::GlobalSystems;
use crate::core::host_bridge::HostEvent;
use crate::core::scene::SceneKey;
use crate::core::trigger::OverlapEvent;
use crate::core::CoreSystemsOrchestrator;

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (core ticks per second)
/// - **Channel capacity**: 128 events
///
/// # Examples
///
/// ```no_run
/// use scene_switch::prelude::*;
///
/// let handle = EngineBuilder::<SceneIndex>::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .build()
///     .run();
/// # handle.shutdown_and_join();
/// ```
pub struct EngineBuilder<S: SceneKey> {
    tps: f64,
    channel_capacity: usize,
    _phantom: std::marker::PhantomData<S>,
}

impl<S: SceneKey> EngineBuilder<S> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        let defaults = EngineConfig::default();

        Self {
            tps: defaults.tps,
            channel_capacity: defaults.channel_capacity,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Creates a builder from loaded settings.
    ///
    /// The settings are checked with [`Config::validate`] first, so a
    /// hand-built config gets the same checks as one read from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `tps` or `channel_capacity`
    /// is not positive.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self::new()
            .with_tps(config.tps)
            .with_channel_capacity(config.channel_capacity))
    }

    /// Sets the target ticks per second for the core thread.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the host → core channel.
    ///
    /// When the channel is full, [`EngineHandle::report_overlap`] drops
    /// the event instead of blocking the host.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine<S> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl<S: SceneKey> Default for EngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Scene switch runtime, configured but not yet running.
///
/// # Architecture
///
/// ```text
/// Host (physics, game loop)
///   │  HostEvent::Overlap
///   ▼
/// crossbeam channel
///   │
///   ▼
/// Core thread @ TPS
///   └─► TriggerSystem → MessageBus → SceneManager
/// ```
pub struct Engine<S: SceneKey> {
    orchestrator: CoreSystemsOrchestrator<S>,
    tps: f64,
    channel_capacity: usize,
}

impl<S: SceneKey> Engine<S> {
    //--- Initialization ---------------------------------------------------

    /// Registers scenes and places triggers before the engine runs.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use scene_switch::prelude::*;
    /// # struct Level;
    /// # impl Scene<SceneIndex> for Level {
    /// #     fn update(&mut self, _ctx: &mut GlobalContext) {}
    /// # }
    /// EngineBuilder::<SceneIndex>::new()
    ///     .build()
    ///     .init(|systems| {
    ///         systems.scene_manager.register_default(SceneIndex(0), Level);
    ///         systems.scene_manager.register_scene(SceneIndex(3), Level);
    ///         systems.triggers.place(SceneTrigger::new(SceneIndex(3)));
    ///     })
    ///     .run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut GlobalSystems<S>),
    {
        info!("Initializing engine systems");

        self.orchestrator.init_systems(init_fn);

        info!("Engine initialization complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the core thread and returns a handle for the host.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded host → core channel
    /// 2. Spawns the core thread running at the configured TPS
    /// 3. The thread stops after [`HostEvent::Shutdown`] or once every
    ///    sender is dropped
    pub fn run(self) -> EngineHandle<S> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        let (sender, receiver): (Sender<HostEvent>, Receiver<HostEvent>) =
            bounded(self.channel_capacity);

        let core = self.orchestrator.spawn_core_thread(receiver, self.tps);
        info!("Core thread spawned");

        EngineHandle { sender, core }
    }
}

//=== EngineHandle ========================================================

/// Host-side handle to a running engine.
pub struct EngineHandle<S: SceneKey> {
    sender: Sender<HostEvent>,
    core: JoinHandle<GlobalSystems<S>>,
}

impl<S: SceneKey> EngineHandle<S> {
    /// A sender the physics host can clone and keep.
    pub fn sender(&self) -> Sender<HostEvent> {
        self.sender.clone()
    }

    /// Reports an overlap without blocking.
    ///
    /// Returns false if the event was dropped because the channel is full
    /// or the core thread has stopped.
    pub fn report_overlap(&self, event: OverlapEvent) -> bool {
        match self.sender.try_send(HostEvent::Overlap(event)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!("Host channel full, dropped overlap on {}", event.trigger);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!("Core thread stopped, dropped overlap on {}", event.trigger);
                false
            }
        }
    }

    /// Stops the core thread and returns its systems.
    ///
    /// Overlaps already queued are handled on the final tick. Returns
    /// `None` if the core thread panicked.
    pub fn shutdown_and_join(self) -> Option<GlobalSystems<S>> {
        // Blocks while the channel is full; a dead core thread just errors
        if self.sender.send(HostEvent::Shutdown).is_err() {
            warn!("Core thread already stopped before shutdown");
        }

        match self.core.join() {
            Ok(systems) => {
                info!("Core thread terminated cleanly");
                Some(systems)
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
                None
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
