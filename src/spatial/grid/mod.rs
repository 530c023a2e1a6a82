//! Occupancy Map - sparse authoritative `GridPos -> Particle` state
//!
//! Entries live in slots kept in insertion order; a removed key frees its
//! slot and the next insertion reuses the most recently freed one. The tick
//! driver iterates a position snapshot in slot order. `move_particle` keeps
//! the particle in its slot; `swap` leaves the slots on their cells and
//! trades the particles, so a swapped pair also trades processing order.
//!
//! Keys are unique: nothing may be moved onto an occupied cell except through
//! `swap`.

use std::collections::HashMap;

use crate::elements::Particle;
use crate::spatial::geometry::GridPos;

mod accessors {
    mod particle_ops;
}
mod moves;
mod sparse;

#[derive(Clone, Copy, Debug)]
struct Slot {
    pos: GridPos,
    particle: Particle,
}

#[derive(Clone, Debug, Default)]
pub struct OccupancyMap {
    slots: Vec<Option<Slot>>,
    index: HashMap<GridPos, usize>,
    free: Vec<usize>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.index.contains_key(&pos)
    }

    /// Occupancy test that treats `self_pos` as free
    #[inline]
    pub fn is_occupied_ignoring(&self, pos: GridPos, self_pos: GridPos) -> bool {
        if pos == self_pos {
            return false;
        }
        self.is_occupied(pos)
    }

    #[inline]
    pub fn get(&self, pos: GridPos) -> Option<&Particle> {
        let idx = *self.index.get(&pos)?;
        self.slots[idx].as_ref().map(|s| &s.particle)
    }

    #[inline]
    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut Particle> {
        let idx = *self.index.get(&pos)?;
        self.slots[idx].as_mut().map(|s| &mut s.particle)
    }

    fn insert_slot(&mut self, pos: GridPos, particle: Particle) {
        debug_assert!(!self.index.contains_key(&pos), "insert_slot: {:?} already occupied", pos);
        let slot = Some(Slot { pos, particle });
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };
        self.index.insert(pos, idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Palette;

    fn sand() -> Particle {
        Palette::builtin().instantiate(0).unwrap()
    }

    fn water() -> Particle {
        Palette::builtin().instantiate(2).unwrap()
    }

    #[test]
    fn place_rejects_occupied_cells() {
        let mut map = OccupancyMap::new();
        let p = GridPos::new(1, 1);
        assert!(map.place(p, sand()));
        assert!(!map.place(p, water()));
        assert_eq!(map.len(), 1);
        assert!(map.get(p).unwrap().is_powder());
    }

    #[test]
    fn ignore_self_only_ignores_the_given_cell() {
        let mut map = OccupancyMap::new();
        let a = GridPos::new(0, 0);
        let b = GridPos::new(0, 1);
        map.place(a, sand());
        map.place(b, sand());
        assert!(!map.is_occupied_ignoring(a, a));
        assert!(map.is_occupied_ignoring(b, a));
        assert!(!map.is_occupied_ignoring(GridPos::new(5, 5), a));
    }

    #[test]
    fn move_and_swap_conserve_count() {
        let mut map = OccupancyMap::new();
        let a = GridPos::new(0, 0);
        let b = GridPos::new(0, 1);
        let c = GridPos::new(3, 3);
        map.place(a, sand());
        map.place(b, water());

        map.move_particle(a, c);
        assert_eq!(map.len(), 2);
        assert!(!map.is_occupied(a));
        assert!(map.get(c).unwrap().is_powder());

        map.swap(c, b);
        assert_eq!(map.len(), 2);
        assert!(map.get(c).unwrap().is_liquid());
        assert!(map.get(b).unwrap().is_powder());
    }

    #[test]
    fn move_onto_itself_is_a_no_op() {
        let mut map = OccupancyMap::new();
        let a = GridPos::new(4, 4);
        map.place(a, sand());
        map.move_particle(a, a);
        assert_eq!(map.len(), 1);
        assert!(map.is_occupied(a));
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn move_onto_occupied_cell_fails_fast() {
        let mut map = OccupancyMap::new();
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);
        map.place(a, sand());
        map.place(b, sand());
        map.move_particle(a, b);
    }

    #[test]
    fn snapshot_keeps_slot_order_across_moves() {
        let mut map = OccupancyMap::new();
        let a = GridPos::new(0, 0);
        let b = GridPos::new(1, 0);
        let c = GridPos::new(2, 0);
        map.place(a, sand());
        map.place(b, sand());
        map.place(c, sand());

        // moved particle stays in its slot
        map.move_particle(a, GridPos::new(0, 5));
        assert_eq!(map.positions(), vec![GridPos::new(0, 5), b, c]);

        // freed slot is reused by the next insertion
        map.remove(b);
        map.place(GridPos::new(7, 7), water());
        assert_eq!(map.positions(), vec![GridPos::new(0, 5), GridPos::new(7, 7), c]);
    }

    #[test]
    fn swap_trades_particles_but_not_slots() {
        let mut map = OccupancyMap::new();
        let top = GridPos::new(0, 0);
        let bottom = GridPos::new(0, 1);
        map.place(top, sand());
        map.place(bottom, water());

        map.swap(top, bottom);

        // cells keep their slots, so the particles trade processing order
        assert_eq!(map.positions(), vec![top, bottom]);
        let order: Vec<bool> = map.iter().map(|(_, p)| p.is_liquid()).collect();
        assert_eq!(order, vec![true, false]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut map = OccupancyMap::new();
        map.place(GridPos::new(0, 0), sand());
        map.place(GridPos::new(1, 0), water());
        map.clear();
        assert!(map.is_empty());
        assert!(map.positions().is_empty());
        assert!(map.place(GridPos::new(0, 0), sand()));
    }
}
