use crate::elements::Particle;
use crate::spatial::geometry::GridPos;

/// Occupant found at the cell where a sweep stopped
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blocker {
    pub pos: GridPos,
    pub particle: Particle,
}

/// Result of sweeping a particle along a straight line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepResult {
    /// Furthest unobstructed cell (the start cell at worst)
    pub stop: GridPos,
    /// Did the walk end early on an occupant or the canvas edge?
    pub collided: bool,
    /// Occupant of the first obstructed cell; `None` for the canvas edge
    pub blocker: Option<Blocker>,
    /// Cells visited
    pub steps: u32,
}

impl SweepResult {
    #[inline]
    pub fn clear(stop: GridPos, steps: u32) -> Self {
        Self {
            stop,
            collided: false,
            blocker: None,
            steps,
        }
    }
}
