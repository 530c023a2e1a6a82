use crate::behaviors::{StepCounters, UpdateContext};
use crate::elements::BehaviorKind;
use crate::physics::{reset_physics_perf_counters, take_physics_perf_counters};

use super::render_extract::export_colors;
use super::{PerfTimer, WorldCore};

/// One tick: snapshot occupied cells, run the rule of whatever currently sits
/// at each snapshot cell, then export colors.
///
/// The snapshot is taken before any mutation. A particle that moves onto a
/// cell later in the snapshot is updated again when that cell comes up.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        reset_physics_perf_counters();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let positions = world.grid.positions();
    let mut counters = StepCounters::default();

    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    for pos in positions {
        let Some(kind) = world.grid.get(pos).map(|p| p.behavior) else {
            continue;
        };

        let mut ctx = UpdateContext {
            grid: &mut world.grid,
            geometry: &world.geometry,
            rng: &mut world.rng,
            counters: &mut counters,
            pos,
            gravity: world.gravity,
        };
        world.behaviors.update(kind, &mut ctx);

        if perf_on {
            let stats = &mut world.perf_stats;
            stats.particles_processed += 1;
            match kind {
                BehaviorKind::Powder => stats.behavior_powder += 1,
                BehaviorKind::ScatterPowder => stats.behavior_scatter += 1,
                BehaviorKind::Liquid => stats.behavior_liquid += 1,
                BehaviorKind::None => stats.behavior_static += 1,
            }
        }
    }
    if let Some(t0) = t0 {
        world.perf_stats.behavior_ms = t0.elapsed_ms();
    }

    let t1 = if perf_on { Some(PerfTimer::start()) } else { None };
    let painted = export_colors(world);

    if perf_on {
        if let Some(t1) = t1 {
            world.perf_stats.render_ms = t1.elapsed_ms();
        }
        let (sweep_steps, sweep_collisions) = take_physics_perf_counters();
        let stats = &mut world.perf_stats;
        stats.particles_moved = counters.moved;
        stats.swaps = counters.swapped;
        stats.sweep_steps_total = sweep_steps.min(u32::MAX as u64) as u32;
        stats.sweep_collisions = sweep_collisions.min(u32::MAX as u64) as u32;
        stats.painted_cells = painted;
        stats.particle_count = world.grid.len() as u32;
        if let Some(start) = step_start {
            stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}
