//=========================================================================
// Logging
//=========================================================================
//
// The crate logs through the `log` facade only. Hosts that already
// install a logger can skip this module.
//
//=========================================================================

/// Installs `env_logger` with a default filter of `info`.
///
/// Override with the `RUST_LOG` environment variable, e.g.
/// `RUST_LOG=scene_switch=debug` to see every trigger entry.
///
/// # Example
/// ```
/// scene_switch::logging::init();
/// log::info!("Engine started");
/// ```
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Like [`init`], but does nothing if a logger is already installed.
///
/// Safe to call from every test.
pub fn try_init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(true)
        .try_init();
}
