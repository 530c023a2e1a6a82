//! Behaviors - per-element update rules
//!
//! Each rule reads the particle at `ctx.pos`, works on a copy, moves it through
//! the occupancy map and writes the copy back at wherever it ended up.

mod common;
mod liquid;
mod powder;
mod scatter;

pub use liquid::LiquidBehavior;
pub use powder::PowderBehavior;
pub use scatter::ScatterPowderBehavior;

use rand::rngs::StdRng;

use crate::elements::{BehaviorKind, Particle};
use crate::physics::{sweep_with_blocker, SweepResult};
use crate::spatial::geometry::{CanvasGeometry, GridPos};
use crate::spatial::grid::OccupancyMap;

/// Moves and swaps performed during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub moved: u32,
    pub swapped: u32,
}

/// Update context handed to a rule for one particle
pub struct UpdateContext<'a> {
    pub grid: &'a mut OccupancyMap,
    pub geometry: &'a CanvasGeometry,
    pub rng: &'a mut StdRng,
    pub counters: &'a mut StepCounters,
    /// Current cell of the particle being updated; follows moves and swaps
    pub pos: GridPos,
    pub gravity: f32,
}

impl<'a> UpdateContext<'a> {
    #[inline]
    pub fn particle(&self) -> Option<Particle> {
        self.grid.get(self.pos).copied()
    }

    /// Write the working copy back into the map at the current cell
    #[inline]
    pub fn store(&mut self, particle: Particle) {
        if let Some(slot) = self.grid.get_mut(self.pos) {
            *slot = particle;
        }
    }

    /// Inside the canvas and unoccupied
    #[inline]
    pub fn is_free(&self, pos: GridPos) -> bool {
        self.geometry.in_bounds(pos) && !self.grid.is_occupied(pos)
    }

    /// Desired target was off the canvas or held by another particle
    #[inline]
    pub fn is_blocked(&self, target: GridPos) -> bool {
        self.geometry.is_out_of_bounds(target) || self.grid.is_occupied_ignoring(target, self.pos)
    }

    #[inline]
    pub fn sweep(&self, target: GridPos) -> SweepResult {
        sweep_with_blocker(&*self.grid, self.geometry, self.pos, target)
    }

    #[inline]
    pub fn move_to(&mut self, to: GridPos) {
        if to == self.pos {
            return;
        }
        self.grid.move_particle(self.pos, to);
        self.pos = to;
        self.counters.moved += 1;
    }

    /// Trade places with the liquid at `below`. The displaced liquid starts
    /// falling again from rest.
    pub fn sink_into(&mut self, below: GridPos) {
        self.grid.swap(self.pos, below);
        if let Some(liquid) = self.grid.get_mut(self.pos) {
            liquid.is_falling = true;
            liquid.stop();
        }
        self.pos = below;
        self.counters.swapped += 1;
    }

    #[inline]
    pub fn transfer_momentum(&mut self, to: GridPos, dx: f32, dy: f32) {
        if let Some(target) = self.grid.get_mut(to) {
            target.receive_velocity(dx, dy);
        }
    }
}

/// Behavior trait - each rule implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by rule kind
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    scatter: ScatterPowderBehavior,
    liquid: LiquidBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            scatter: ScatterPowderBehavior::new(),
            liquid: LiquidBehavior::new(),
        }
    }

    pub fn update(&self, kind: BehaviorKind, ctx: &mut UpdateContext) {
        match kind {
            BehaviorKind::Powder => self.powder.update(ctx),
            BehaviorKind::ScatterPowder => self.scatter.update(ctx),
            BehaviorKind::Liquid => self.liquid.update(ctx),
            BehaviorKind::None => {} // static - no behavior
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
