//! ScatterPowderBehavior - loose debris (metal scraps)
//!
//! Like powder, but a resting grain keeps jittering sideways by a random
//! amount from its element's powderity range, and it never sinks into liquids.

use super::common::{apply_gravity_or_friction, random_between, random_side};
use super::{Behavior, UpdateContext};
use crate::elements::Particle;
use crate::physics::velocity_to_cells;

/// Extra downward speed when a resting grain loses its support
const FALL_KICK: f32 = 2.0;

pub struct ScatterPowderBehavior;

impl ScatterPowderBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Nudge a resting grain towards a free side; `side` is tried first.
    fn jitter(&self, ctx: &mut UpdateContext, p: &mut Particle, side: i32) {
        let (min, max) = p.powderity_range().unwrap_or((0.0, 0.0));
        let amount = random_between(ctx.rng, min, max);
        let slow = p.x_velocity.abs() < 1.0;
        let open = |dir: i32| slow && !ctx.grid.is_occupied(ctx.pos.offset(dir, 0));

        let dir = if open(side) {
            side
        } else if open(-side) {
            -side
        } else {
            side
        };
        p.x_velocity += dir as f32 * amount;
    }
}

impl Default for ScatterPowderBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for ScatterPowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(mut p) = ctx.particle() else { return };

        apply_gravity_or_friction(&mut p, ctx.gravity);
        let side = random_side(ctx.rng);
        if !p.is_falling {
            self.jitter(ctx, &mut p, side);
        }

        let target = ctx.pos.offset(velocity_to_cells(p.x_velocity), velocity_to_cells(p.y_velocity));
        let stop = ctx.sweep(target).stop;

        if ctx.is_free(ctx.pos.below()) {
            if !p.is_falling {
                p.y_velocity += FALL_KICK;
            }
            p.is_falling = true;
        } else {
            p.is_falling = false;
        }
        if target.x != stop.x {
            p.x_velocity = 0.0;
        }
        if target.y != stop.y {
            p.y_velocity = 0.0;
        }

        ctx.move_to(stop);
        ctx.store(p);
    }
}
