//! Physics System - swept motion on the occupancy grid
//!
//! Particles carry sub-cell float velocities that are rounded to whole grid
//! steps each tick. A straight line is rasterized from the current cell to the
//! desired one and walked cell by cell, so a fast particle stops at the first
//! obstruction instead of tunneling through it.

#[path = "physics/perf.rs"]
mod perf;
#[path = "physics/sweep.rs"]
mod sweep;
#[path = "physics/types.rs"]
mod types;

pub use perf::{reset_physics_perf_counters, take_physics_perf_counters};
pub use sweep::{sweep_to_last_free, sweep_with_blocker};
pub use types::{Blocker, SweepResult};

/// Round a velocity component to a whole number of cells (half away from zero)
#[inline]
pub fn velocity_to_cells(v: f32) -> i32 {
    v.round() as i32
}
