//=========================================================================
// Scene Switch - Library Root
//
// Scene transition triggers for 2D platformers.
//
// Responsibilities:
// - Expose trigger zones that request a scene change when the player
//   enters them (`SceneTrigger`)
// - Route overlap events from a physics collaborator to placed triggers
// - Apply scene load requests on a stack-based scene manager
// - Provide the fixed-rate runtime (`Engine`) that ties these together
//
// Typical usage:
// ```no_run
// use scene_switch::prelude::*;
//
// let handle = EngineBuilder::<SceneIndex>::new()
//     .build()
//     .init(|systems| {
//         systems.triggers.place(SceneTrigger::new(SceneIndex(3)));
//     })
//     .run();
//
// handle.shutdown_and_join();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the trigger, scene and message systems. It is exposed
// publicly for engine-level extensibility, but most application code
// only needs the prelude.
//
pub mod core;

// `config` loads engine settings and level trigger placements.
pub mod config;

// `logging` installs the default log backend.
pub mod logging;

pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the runtime entry point and the core thread handle.
//
mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineHandle};
