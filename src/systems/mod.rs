pub mod behaviors;
pub mod physics;
