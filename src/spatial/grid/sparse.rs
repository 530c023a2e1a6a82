use super::*;

impl OccupancyMap {
    /// Occupied positions in slot order, materialized before any mutation
    pub fn positions(&self) -> Vec<GridPos> {
        self.slots.iter().flatten().map(|s| s.pos).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &Particle)> + '_ {
        self.slots.iter().flatten().map(|s| (s.pos, &s.particle))
    }
}
