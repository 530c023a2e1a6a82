use super::WorldCore;

/// Repaint the color buffer: background everywhere, then one write per
/// particle at `x + y * columns`. Cells of a partial last column/row are
/// valid map positions but have no slot in the buffer and are skipped.
///
/// Returns the number of cells painted with a particle color.
pub(super) fn export_colors(world: &mut WorldCore) -> u32 {
    let columns = world.geometry.columns() as usize;
    let rows = world.geometry.rows() as usize;

    world.colors.clear();
    world.colors.resize(columns * rows, world.background);

    let mut painted = 0u32;
    for (pos, particle) in world.grid.iter() {
        if pos.x < 0 || pos.y < 0 {
            continue;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= columns || y >= rows {
            continue;
        }
        world.colors[x + y * columns] = particle.color;
        painted += 1;
    }
    painted
}
