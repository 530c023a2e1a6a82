use crate::elements::ElementId;
use crate::spatial::geometry::GridPos;

use super::WorldCore;

pub(super) fn place_particle(world: &mut WorldCore, pos: GridPos, element: ElementId) -> bool {
    if world.geometry.is_out_of_bounds(pos) {
        return false;
    }

    let Some(particle) = world.palette.instantiate(element) else {
        return false;
    };

    world.grid.place(pos, particle)
}

pub(super) fn place_particle_at_pixel(world: &mut WorldCore, px: i32, py: i32, element: ElementId) -> bool {
    let pos = world.geometry.pixel_to_grid(px, py);
    place_particle(world, pos, element)
}

pub(super) fn place_particles_in_radius(
    world: &mut WorldCore,
    center: GridPos,
    radius: i32,
    element: ElementId,
) -> u32 {
    let mut placed = 0;
    for pos in disc(center, radius, world.geometry.cell_extent()) {
        if place_particle(world, pos, element) {
            placed += 1;
        }
    }
    placed
}

pub(super) fn remove_particle(world: &mut WorldCore, pos: GridPos) -> bool {
    world.grid.remove(pos).is_some()
}

pub(super) fn remove_particles_in_radius(world: &mut WorldCore, center: GridPos, radius: i32) -> u32 {
    let mut removed = 0;
    for pos in disc(center, radius, world.geometry.cell_extent()) {
        if remove_particle(world, pos) {
            removed += 1;
        }
    }
    removed
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.frame = 0;
    world.colors.fill(world.background);
}

/// Canvas cells within `radius` of `center`, row by row; empty for a
/// negative radius.
///
/// The bounding box is clipped to `extent` first, so a huge radius costs no
/// more than a full-canvas sweep. Distances are computed in `i64`.
fn disc(center: GridPos, radius: i32, extent: (u32, u32)) -> impl Iterator<Item = GridPos> {
    let r = i64::from(radius.max(-1));
    let r2 = r * r;
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let (cols, rows) = (i64::from(extent.0), i64::from(extent.1));

    let (x_lo, x_hi) = ((cx - r).max(0), (cx + r).min(cols - 1));
    let (y_lo, y_hi) = ((cy - r).max(0), (cy + r).min(rows - 1));

    (y_lo..=y_hi).flat_map(move |y| {
        (x_lo..=x_hi)
            .filter(move |&x| (x - cx) * (x - cx) + (y - cy) * (y - cy) <= r2)
            .map(move |x| GridPos::new(x as i32, y as i32))
    })
}
