//! Sandbx Engine - falling-sand particle simulation in WASM
//!
//! Architecture:
//! - domain/      - particles, element properties, palette bundles
//! - spatial/     - canvas geometry and the sparse occupancy map
//! - systems/     - motion resolver and per-element behavior rules
//! - simulation/  - world orchestration, commands, perf, WASM facade

pub mod domain;
pub mod logging;
pub mod simulation;
pub mod spatial;
pub mod systems;

// Short paths used across the crate
pub use domain::elements;
pub use spatial::grid;
pub use systems::behaviors;
pub use systems::physics;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_logging(log::LevelFilter::Info);
    log::info!("Sandbx engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::content::Palette;
pub use elements::{BehaviorKind, Category, ElementId, Particle};
pub use simulation::{PerfStats, SimulationSettings, World, WorldCore};
pub use spatial::geometry::{CanvasGeometry, GridPos};
