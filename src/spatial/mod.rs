pub mod geometry;
pub mod grid;
