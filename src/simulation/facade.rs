use wasm_bindgen::prelude::*;

use crate::spatial::geometry::GridPos;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with a canvas of `width` x `height` pixels
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<World, JsValue> {
        let settings = super::SimulationSettings {
            width,
            height,
            cell_size,
            ..Default::default()
        };
        let core = WorldCore::from_settings(settings).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Create a world from a settings JSON object (camelCase keys, all optional)
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_settings_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.core.cell_size() }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.core.geometry().columns() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.geometry().rows() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn set_background(&mut self, color: u32) {
        self.core.set_background(color);
    }

    /// Add a particle at a grid cell
    pub fn add_particle(&mut self, x: i32, y: i32, element: u8) -> bool {
        self.core.place_particle(GridPos::new(x, y), element)
    }

    /// Add a particle under a canvas pixel (mouse position)
    pub fn add_particle_at_pixel(&mut self, px: i32, py: i32, element: u8) -> bool {
        self.core.place_particle_at_pixel(px, py, element)
    }

    /// Add particles in radius (brush)
    pub fn add_particles_in_radius(&mut self, cx: i32, cy: i32, radius: i32, element: u8) -> u32 {
        self.core.place_particles_in_radius(GridPos::new(cx, cy), radius, element)
    }

    pub fn remove_particle(&mut self, x: i32, y: i32) -> bool {
        self.core.remove_particle(GridPos::new(x, y))
    }

    pub fn remove_particles_in_radius(&mut self, cx: i32, cy: i32, radius: i32) -> u32 {
        self.core.remove_particles_in_radius(GridPos::new(cx, cy), radius)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn load_palette(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_palette_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_palette_manifest_json(&self) -> String {
        self.core.palette_manifest_json()
    }

    /// Palette id for an element key, if present
    pub fn element_id(&self, key: &str) -> Option<u8> {
        self.core.palette().id_by_key(key)
    }

    /// Step the simulation forward (also refreshes the color buffer)
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Repaint the color buffer without stepping (e.g. after painting while paused)
    pub fn export_colors(&mut self) {
        self.core.export_color_buffer();
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    /// Color buffer length in cells (`columns * rows`)
    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len_bytes()
    }
}
