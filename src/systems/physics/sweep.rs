use crate::spatial::geometry::{CanvasGeometry, GridPos};
use crate::spatial::grid::OccupancyMap;

use super::perf::record_sweep;
use super::types::{Blocker, SweepResult};

/// Furthest free cell on the line `start -> end`
#[inline]
pub fn sweep_to_last_free(
    grid: &OccupancyMap,
    geometry: &CanvasGeometry,
    start: GridPos,
    end: GridPos,
) -> GridPos {
    sweep_with_blocker(grid, geometry, start, end).stop
}

/// Line walk from `start` to `end` (inclusive), stopping before the first cell
/// that is occupied or off the canvas.
///
/// - Same column: walks `min(y)..=max(y)` one row at a time.
/// - Otherwise: steps one column at a time towards `end.x`, accumulating
///   `y += slope` and rounding half away from zero.
///
/// The start cell never counts as an obstruction. The blocker is reported
/// only when the stopping cell lies inside the canvas.
pub fn sweep_with_blocker(
    grid: &OccupancyMap,
    geometry: &CanvasGeometry,
    start: GridPos,
    end: GridPos,
) -> SweepResult {
    let mut last = start;
    let mut steps: u32 = 0;

    if start.x == end.x {
        for y in start.y.min(end.y)..=start.y.max(end.y) {
            let cell = GridPos::new(start.x, y);
            steps += 1;
            if let Some(blocker) = obstruction(grid, geometry, start, cell) {
                return finish(SweepResult {
                    stop: last,
                    collided: true,
                    blocker,
                    steps,
                });
            }
            last = cell;
        }
        return finish(SweepResult::clear(last, steps));
    }

    let dir: i32 = if end.x > start.x { 1 } else { -1 };
    let slope = (end.y as f64 - start.y as f64) / (end.x as f64 - start.x as f64);
    let step_y = slope * dir as f64;
    let mut current_y = start.y as f64;
    let mut x = start.x;

    loop {
        let cell = GridPos::new(x, current_y.round() as i32);
        steps += 1;
        if let Some(blocker) = obstruction(grid, geometry, start, cell) {
            return finish(SweepResult {
                stop: last,
                collided: true,
                blocker,
                steps,
            });
        }
        last = cell;

        if x == end.x {
            break;
        }
        x += dir;
        current_y += step_y;
    }

    finish(SweepResult::clear(last, steps))
}

/// `Some(blocker)` when `cell` stops the walk
#[inline]
fn obstruction(
    grid: &OccupancyMap,
    geometry: &CanvasGeometry,
    start: GridPos,
    cell: GridPos,
) -> Option<Option<Blocker>> {
    if geometry.is_out_of_bounds(cell) {
        return Some(None);
    }
    if grid.is_occupied_ignoring(cell, start) {
        let blocker = grid.get(cell).map(|p| Blocker { pos: cell, particle: *p });
        return Some(blocker);
    }
    None
}

#[inline]
fn finish(result: SweepResult) -> SweepResult {
    record_sweep(result.steps, result.collided);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Palette;

    fn world(w: u32, h: u32) -> (OccupancyMap, CanvasGeometry) {
        (OccupancyMap::new(), CanvasGeometry::new(w, h, 1))
    }

    fn sand() -> crate::elements::Particle {
        Palette::builtin().instantiate(0).unwrap()
    }

    #[test]
    fn vertical_sweep_stops_before_obstruction() {
        for d in [1, 2, 10] {
            let (mut grid, geo) = world(5, 40);
            let start = GridPos::new(2, 0);
            grid.place(start, sand());
            grid.place(GridPos::new(2, d), sand());

            let r = sweep_with_blocker(&grid, &geo, start, GridPos::new(2, 30));
            assert_eq!(r.stop, GridPos::new(2, d - 1), "distance {}", d);
            assert!(r.collided);
            assert_eq!(r.blocker.map(|b| b.pos), Some(GridPos::new(2, d)));
        }
    }

    #[test]
    fn diagonal_sweep_stops_before_obstruction() {
        for d in [1, 2, 10] {
            let (mut grid, geo) = world(40, 40);
            let start = GridPos::new(0, 0);
            grid.place(start, sand());
            grid.place(GridPos::new(d, d), sand());

            let stop = sweep_to_last_free(&grid, &geo, start, GridPos::new(20, 20));
            assert_eq!(stop, GridPos::new(d - 1, d - 1), "distance {}", d);
        }
    }

    #[test]
    fn leftward_sweep_walks_towards_smaller_x() {
        let (mut grid, geo) = world(40, 40);
        let start = GridPos::new(20, 0);
        grid.place(GridPos::new(15, 5), sand());

        let stop = sweep_to_last_free(&grid, &geo, start, GridPos::new(10, 10));
        assert_eq!(stop, GridPos::new(16, 4));
    }

    #[test]
    fn unobstructed_sweep_reaches_endpoint() {
        let (grid, geo) = world(20, 20);
        let r = sweep_with_blocker(&grid, &geo, GridPos::new(0, 0), GridPos::new(4, 2));
        assert_eq!(r.stop, GridPos::new(4, 2));
        assert!(!r.collided);
        assert!(r.blocker.is_none());
        assert_eq!(r.steps, 5);
    }

    #[test]
    fn canvas_edge_stops_without_blocker() {
        let (grid, geo) = world(10, 10);
        let r = sweep_with_blocker(&grid, &geo, GridPos::new(5, 7), GridPos::new(5, 30));
        assert_eq!(r.stop, GridPos::new(5, 9));
        assert!(r.collided);
        assert!(r.blocker.is_none());
    }

    #[test]
    fn start_cell_is_ignored() {
        let (mut grid, geo) = world(10, 10);
        let start = GridPos::new(3, 3);
        grid.place(start, sand());
        assert_eq!(sweep_to_last_free(&grid, &geo, start, start), start);
    }

    #[test]
    fn shallow_slope_rounds_half_away_from_zero() {
        // slope 0.5: y = 0, 0.5, 1.0 -> rows 0, 1, 1
        let (mut grid, geo) = world(10, 10);
        grid.place(GridPos::new(1, 0), sand());
        let r = sweep_with_blocker(&grid, &geo, GridPos::new(0, 0), GridPos::new(2, 1));
        assert_eq!(r.stop, GridPos::new(2, 1));
        assert!(!r.collided);

        grid.place(GridPos::new(1, 1), sand());
        let r = sweep_with_blocker(&grid, &geo, GridPos::new(0, 0), GridPos::new(2, 1));
        assert_eq!(r.stop, GridPos::new(0, 0));
        assert_eq!(r.blocker.map(|b| b.pos), Some(GridPos::new(1, 1)));
    }
}
