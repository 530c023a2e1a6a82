use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) behavior_ms: f64,
    pub(super) render_ms: f64,
    pub(super) particles_processed: u32,
    pub(super) particles_moved: u32,
    pub(super) swaps: u32,
    pub(super) sweep_steps_total: u32,
    pub(super) sweep_collisions: u32,
    pub(super) behavior_powder: u32,
    pub(super) behavior_scatter: u32,
    pub(super) behavior_liquid: u32,
    pub(super) behavior_static: u32,
    pub(super) painted_cells: u32,
    pub(super) particle_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn behavior_ms(&self) -> f64 { self.behavior_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn swaps(&self) -> u32 { self.swaps }
    #[wasm_bindgen(getter)]
    pub fn sweep_steps_total(&self) -> u32 { self.sweep_steps_total }
    #[wasm_bindgen(getter)]
    pub fn sweep_collisions(&self) -> u32 { self.sweep_collisions }
    #[wasm_bindgen(getter)]
    pub fn behavior_powder(&self) -> u32 { self.behavior_powder }
    #[wasm_bindgen(getter)]
    pub fn behavior_scatter(&self) -> u32 { self.behavior_scatter }
    #[wasm_bindgen(getter)]
    pub fn behavior_liquid(&self) -> u32 { self.behavior_liquid }
    #[wasm_bindgen(getter)]
    pub fn behavior_static(&self) -> u32 { self.behavior_static }
    #[wasm_bindgen(getter)]
    pub fn painted_cells(&self) -> u32 { self.painted_cells }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
