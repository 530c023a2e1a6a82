//! World - single-threaded falling-sand simulation
//!
//! `WorldCore` owns everything a tick touches: the palette, the canvas
//! geometry, the occupancy map, the seeded RNG and the exported color buffer.
//! The tick itself lives in `step/step.rs`; rules live in `systems/behaviors`.

use std::sync::Arc;

use rand::rngs::StdRng;

use crate::behaviors::BehaviorRegistry;
use crate::domain::content::Palette;
use crate::elements::{ElementId, Particle};
use crate::spatial::geometry::{CanvasGeometry, GridPos};
use crate::spatial::grid::OccupancyMap;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::SimulationSettings;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    palette: Arc<Palette>,
    geometry: CanvasGeometry,
    grid: OccupancyMap,
    behaviors: BehaviorRegistry,

    // Settings
    gravity: f32,
    background: u32,

    // State
    frame: u64,
    rng: StdRng,
    colors: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default settings and the given canvas (pixels).
    ///
    /// Panics if `cell_size` is zero; use `from_settings` for host input.
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        init::create_world_core(SimulationSettings {
            width,
            height,
            cell_size,
            ..SimulationSettings::default()
        })
    }

    pub fn from_settings(settings: SimulationSettings) -> Result<Self, String> {
        settings.validate()?;
        Ok(init::create_world_core(settings))
    }

    pub fn from_settings_json(json: &str) -> Result<Self, String> {
        Self::from_settings(SimulationSettings::from_json(json)?)
    }

    /// Swap in a new palette. Element ids change meaning, so the world is cleared.
    pub fn load_palette_json(&mut self, json: &str) -> Result<(), String> {
        let palette = Palette::from_bundle_json(json)?;
        log::info!("palette loaded: {} elements", palette.len());
        self.palette = Arc::new(palette);
        self.clear();
        Ok(())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_manifest_json(&self) -> String {
        self.palette.manifest_json()
    }

    pub fn width(&self) -> u32 { self.geometry.width() }

    pub fn height(&self) -> u32 { self.geometry.height() }

    pub fn cell_size(&self) -> u32 { self.geometry.cell_size() }

    pub fn geometry(&self) -> &CanvasGeometry { &self.geometry }

    pub fn particle_count(&self) -> u32 { self.grid.len() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn gravity(&self) -> f32 { self.gravity }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn background(&self) -> u32 { self.background }

    pub fn set_background(&mut self, color: u32) {
        settings::set_background(self, color);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn particle_at(&self, pos: GridPos) -> Option<&Particle> {
        self.grid.get(pos)
    }

    /// Occupied cells in processing order
    pub fn positions(&self) -> Vec<GridPos> {
        self.grid.positions()
    }

    pub fn grid(&self) -> &OccupancyMap {
        &self.grid
    }

    /// Place a fresh copy of prototype `element` at a grid cell
    pub fn place_particle(&mut self, pos: GridPos, element: ElementId) -> bool {
        commands::place_particle(self, pos, element)
    }

    /// Place by canvas pixel (floored to the containing cell)
    pub fn place_particle_at_pixel(&mut self, px: i32, py: i32, element: ElementId) -> bool {
        commands::place_particle_at_pixel(self, px, py, element)
    }

    /// Add particles in radius (brush), returns how many were placed
    pub fn place_particles_in_radius(&mut self, center: GridPos, radius: i32, element: ElementId) -> u32 {
        commands::place_particles_in_radius(self, center, radius, element)
    }

    pub fn remove_particle(&mut self, pos: GridPos) -> bool {
        commands::remove_particle(self, pos)
    }

    pub fn remove_particles_in_radius(&mut self, center: GridPos, radius: i32) -> u32 {
        commands::remove_particles_in_radius(self, center, radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    pub fn advance_tick(&mut self) {
        self.step();
    }

    /// Repaint the color buffer from the current map and return it
    pub fn export_color_buffer(&mut self) -> &[u32] {
        render_extract::export_colors(self);
        &self.colors
    }

    /// Color buffer as of the last tick or export
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.colors.len() * std::mem::size_of::<u32>()
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        init::create_world_core(SimulationSettings::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
