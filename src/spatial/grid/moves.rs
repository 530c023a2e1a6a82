use super::*;

impl OccupancyMap {
    /// Move the occupant of `from` to `to`.
    ///
    /// The slot is kept, only its key changes. Panics if `from` is empty or
    /// `to` is occupied by another particle: displacement must go through
    /// `swap`.
    pub fn move_particle(&mut self, from: GridPos, to: GridPos) {
        if from == to {
            assert!(self.is_occupied(from), "move_particle: nothing at {:?}", from);
            return;
        }
        assert!(
            !self.is_occupied(to),
            "move_particle: destination {:?} is occupied (from {:?})",
            to,
            from
        );
        let Some(idx) = self.index.remove(&from) else {
            panic!("move_particle: nothing at {:?}", from);
        };
        if let Some(slot) = self.slots[idx].as_mut() {
            slot.pos = to;
        }
        self.index.insert(to, idx);
    }

    /// Exchange the occupants of two cells. Both must be occupied.
    ///
    /// Slots stay keyed to their cells, so the two particles also trade
    /// places in the iteration order.
    pub fn swap(&mut self, a: GridPos, b: GridPos) {
        if a == b {
            return;
        }
        let (Some(&ia), Some(&ib)) = (self.index.get(&a), self.index.get(&b)) else {
            panic!("swap: both {:?} and {:?} must be occupied", a, b);
        };
        let (Some(sa), Some(sb)) = (self.slots[ia], self.slots[ib]) else {
            panic!("swap: stale index for {:?} / {:?}", a, b);
        };
        self.slots[ia] = Some(Slot { pos: a, particle: sb.particle });
        self.slots[ib] = Some(Slot { pos: b, particle: sa.particle });
    }
}
