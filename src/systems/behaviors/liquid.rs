//! LiquidBehavior - water and friends
//!
//! Falls while the cell below is free, reflects horizontal speed off whatever
//! stops it (scaled by `1 / energy_consumption`) and hands its momentum to the
//! particle it ran into. At rest it spreads into any free side cell.

use super::common::{apply_gravity_or_friction, landing_impact, random_side};
use super::{Behavior, UpdateContext};
use crate::physics::velocity_to_cells;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiquidBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let Some(mut p) = ctx.particle() else { return };

        let last_y = p.y_velocity;
        apply_gravity_or_friction(&mut p, ctx.gravity);
        let was_falling = p.is_falling;
        p.is_falling = ctx.is_free(ctx.pos.below());

        let target = ctx.pos.offset(velocity_to_cells(p.x_velocity), velocity_to_cells(p.y_velocity));
        let blocked = ctx.is_blocked(target);
        let sweep = ctx.sweep(target);
        if p.is_falling {
            ctx.move_to(sweep.stop);
        }
        if blocked {
            let (vx, vy) = (p.x_velocity, p.y_velocity);
            p.x_velocity = -vx / p.energy_consumption;
            // resting on something: leftover fall speed would only re-hit it next tick
            if !p.is_falling {
                p.y_velocity = 0.0;
            }
            if let Some(blocker) = sweep.blocker {
                ctx.transfer_momentum(blocker.pos, vx, vy);
            }
        }

        let side = random_side(ctx.rng);
        if !p.is_falling {
            let lateral = ctx.pos.offset(side, 0);
            if ctx.is_free(lateral) {
                ctx.move_to(lateral);
            }
        }

        landing_impact(&mut p, was_falling, last_y, side, ctx.rng);
        ctx.store(p);
    }
}
