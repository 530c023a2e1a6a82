use serde::Deserialize;

use crate::elements::rgb;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Upper bound on `columns * rows` (the color buffer length)
pub const MAX_CELLS: usize = 1 << 24;

/// Host-supplied world configuration.
///
/// Every field is optional in JSON; missing ones fall back to an 800x600
/// canvas with 5px cells and gravity 0.1 cells/tick^2.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pixels per grid cell
    pub cell_size: u32,
    pub gravity: f32,
    /// Packed color for empty cells in the exported buffer
    pub background: u32,
    pub seed: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 5,
            gravity: 0.1,
            background: rgb(0, 0, 0),
            seed: 12345,
        }
    }
}

impl SimulationSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: Self = serde_json::from_str(json).map_err(|e| format!("invalid settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cellSize must be non-zero".to_string());
        }
        if self.width == 0 || self.height == 0 {
            return Err(format!("canvas must be non-empty, got {}x{}", self.width, self.height));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(format!("canvas too large: {}x{}", self.width, self.height));
        }
        let columns = (self.width / self.cell_size) as usize;
        let rows = (self.height / self.cell_size) as usize;
        match columns.checked_mul(rows) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(format!(
                    "canvas too large: {}x{} cells (max {} cells)",
                    columns, rows, MAX_CELLS
                ))
            }
        }
        if !self.gravity.is_finite() {
            return Err(format!("gravity must be finite, got {}", self.gravity));
        }
        Ok(())
    }
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) {
    if gravity.is_finite() {
        world.gravity = gravity;
    } else {
        log::warn!("ignoring non-finite gravity {}", gravity);
    }
}

pub(super) fn set_background(world: &mut WorldCore, color: u32) {
    world.background = color;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_canvas() {
        let s = SimulationSettings::default();
        assert_eq!((s.width, s.height, s.cell_size), (800, 600, 5));
        assert_eq!(s.gravity, 0.1);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = SimulationSettings::from_json(r#"{ "width": 100, "cellSize": 2, "seed": 9 }"#).unwrap();
        assert_eq!(s.width, 100);
        assert_eq!(s.height, 600);
        assert_eq!(s.cell_size, 2);
        assert_eq!(s.seed, 9);
    }

    #[test]
    fn rejects_zero_cell_size_and_bad_json() {
        assert!(SimulationSettings::from_json(r#"{ "cellSize": 0 }"#)
            .unwrap_err()
            .contains("cellSize"));
        assert!(SimulationSettings::from_json(r#"{ "width": 0 }"#).is_err());
        assert!(SimulationSettings::from_json("{").unwrap_err().starts_with("invalid settings"));
    }

    #[test]
    fn rejects_canvas_with_too_many_cells() {
        let huge = SimulationSettings {
            width: i32::MAX as u32,
            height: i32::MAX as u32,
            cell_size: 1,
            ..SimulationSettings::default()
        };
        assert!(huge.validate().unwrap_err().contains("canvas too large"));
        assert!(WorldCore::from_settings(huge).is_err());

        // same pixels, coarse cells: 2047 x 2047 cells fits
        let coarse = SimulationSettings {
            width: i32::MAX as u32,
            height: i32::MAX as u32,
            cell_size: 1 << 20,
            ..SimulationSettings::default()
        };
        assert!(coarse.validate().is_ok());
    }
}
