//! Grid Geometry - pixel/grid conversions and canvas bounds
//!
//! Every bounds decision scales the grid coordinate to pixels first, so when
//! the canvas is not a multiple of the cell size the partial last column/row
//! still counts as inside the canvas.

/// Grid position (column, row)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x.saturating_add(dx), y: self.y.saturating_add(dy) }
    }

    #[inline]
    pub const fn below(self) -> Self {
        self.offset(0, 1)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[inline]
pub fn to_grid_pos(pixel_x: i32, pixel_y: i32, cell_size: u32) -> GridPos {
    let cell = cell_size as i32;
    GridPos::new(pixel_x.div_euclid(cell), pixel_y.div_euclid(cell))
}

#[inline]
pub fn to_pixel_bounds(pos: GridPos, cell_size: u32) -> (i32, i32) {
    let cell = cell_size as i32;
    (pos.x.saturating_mul(cell), pos.y.saturating_mul(cell))
}

#[inline]
pub fn is_out_of_canvas(pixel_x: i32, pixel_y: i32, width: u32, height: u32) -> bool {
    pixel_x < 0 || pixel_x >= width as i32 || pixel_y < 0 || pixel_y >= height as i32
}

/// Canvas dimensions in pixels plus the cell size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    width: u32,
    height: u32,
    cell_size: u32,
}

impl CanvasGeometry {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be non-zero");
        Self { width, height, cell_size }
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn cell_size(&self) -> u32 { self.cell_size }

    /// Color buffer columns (`width / cell_size`)
    #[inline]
    pub fn columns(&self) -> u32 { self.width / self.cell_size }

    /// Color buffer rows (`height / cell_size`)
    #[inline]
    pub fn rows(&self) -> u32 { self.height / self.cell_size }

    /// Cells per axis that are inside the canvas, partial last column/row
    /// included
    #[inline]
    pub fn cell_extent(&self) -> (u32, u32) {
        (self.width.div_ceil(self.cell_size), self.height.div_ceil(self.cell_size))
    }

    #[inline]
    pub fn is_out_of_bounds(&self, pos: GridPos) -> bool {
        let (px, py) = to_pixel_bounds(pos, self.cell_size);
        is_out_of_canvas(px, py, self.width, self.height)
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        !self.is_out_of_bounds(pos)
    }

    #[inline]
    pub fn pixel_to_grid(&self, pixel_x: i32, pixel_y: i32) -> GridPos {
        to_grid_pos(pixel_x, pixel_y, self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_and_pixel_round_trip_on_cell_corners() {
        assert_eq!(to_grid_pos(0, 0, 5), GridPos::new(0, 0));
        assert_eq!(to_grid_pos(14, 9, 5), GridPos::new(2, 1));
        assert_eq!(to_pixel_bounds(GridPos::new(2, 1), 5), (10, 5));
    }

    #[test]
    fn negative_pixels_map_to_negative_cells() {
        assert_eq!(to_grid_pos(-1, -6, 5), GridPos::new(-1, -2));
    }

    #[test]
    fn out_of_canvas_is_half_open() {
        assert!(!is_out_of_canvas(0, 0, 10, 10));
        assert!(!is_out_of_canvas(9, 9, 10, 10));
        assert!(is_out_of_canvas(10, 0, 10, 10));
        assert!(is_out_of_canvas(0, 10, 10, 10));
        assert!(is_out_of_canvas(-1, 0, 10, 10));
    }

    #[test]
    fn partial_last_cell_counts_as_inside() {
        // 12px wide, 5px cells: columns 0..=2 start at 0, 5, 10 (all < 12)
        let geo = CanvasGeometry::new(12, 10, 5);
        assert_eq!(geo.columns(), 2);
        assert_eq!(geo.cell_extent(), (3, 2));
        assert!(geo.in_bounds(GridPos::new(2, 0)));
        assert!(geo.is_out_of_bounds(GridPos::new(3, 0)));
        assert!(geo.is_out_of_bounds(GridPos::new(0, 2)));
    }
}
