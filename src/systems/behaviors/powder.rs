//! PowderBehavior - granular material (sand)
//!
//! Falls under gravity, sinks through liquids by swapping with them, slides
//! diagonally off piles and kicks sideways after a hard landing.

use super::common::{apply_gravity_or_friction, landing_impact, random_side};
use super::{Behavior, UpdateContext};
use crate::physics::velocity_to_cells;

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Falling state from the cell below; `None` after sinking into a
    /// liquid, which leaves the state as it was.
    fn probe_below(&self, ctx: &mut UpdateContext) -> Option<bool> {
        let below = ctx.pos.below();
        if ctx.geometry.is_out_of_bounds(below) {
            return Some(false);
        }
        match ctx.grid.get(below).map(|p| p.is_liquid()) {
            None => Some(true),
            Some(false) => Some(false),
            Some(true) => {
                ctx.sink_into(below);
                None
            }
        }
    }
}

impl Default for PowderBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(mut p) = ctx.particle() else { return };

        let last_y = p.y_velocity;
        apply_gravity_or_friction(&mut p, ctx.gravity);
        let was_falling = p.is_falling;

        if let Some(falling) = self.probe_below(ctx) {
            p.is_falling = falling;
        }

        let target = ctx.pos.offset(velocity_to_cells(p.x_velocity), velocity_to_cells(p.y_velocity));
        let blocked = ctx.is_blocked(target);
        let sweep = ctx.sweep(target);
        if p.is_falling {
            let into_liquid = sweep.blocker.map_or(false, |b| b.particle.is_liquid());
            if !into_liquid {
                ctx.move_to(sweep.stop);
            }
        }
        if blocked {
            p.stop();
        }

        let side = random_side(ctx.rng);
        if !p.is_falling {
            let lateral = ctx.pos.offset(side, 0);
            if ctx.is_free(lateral) && ctx.is_free(lateral.below()) {
                ctx.move_to(lateral);
            }
        }

        landing_impact(&mut p, was_falling, last_y, side, ctx.rng);
        ctx.store(p);
    }
}
