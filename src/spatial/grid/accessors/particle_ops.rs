use super::super::*;

impl OccupancyMap {
    /// Insert `particle` at `pos`; returns false if the cell is taken
    pub fn place(&mut self, pos: GridPos, particle: Particle) -> bool {
        if self.is_occupied(pos) {
            return false;
        }
        self.insert_slot(pos, particle);
        true
    }

    pub fn remove(&mut self, pos: GridPos) -> Option<Particle> {
        let idx = self.index.remove(&pos)?;
        let slot = self.slots[idx].take();
        self.free.push(idx);
        slot.map(|s| s.particle)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.free.clear();
    }
}
