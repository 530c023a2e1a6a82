use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::behaviors::BehaviorRegistry;
use crate::domain::content::Palette;
use crate::spatial::geometry::CanvasGeometry;
use crate::spatial::grid::OccupancyMap;

use super::perf_stats::PerfStats;
use super::settings::SimulationSettings;
use super::WorldCore;

pub(super) fn create_world_core(settings: SimulationSettings) -> WorldCore {
    let geometry = CanvasGeometry::new(settings.width, settings.height, settings.cell_size);
    let cells = geometry.columns() as usize * geometry.rows() as usize;
    log::debug!(
        "world {}x{} px, cell {} px, {}x{} cells, seed {}",
        settings.width,
        settings.height,
        settings.cell_size,
        geometry.columns(),
        geometry.rows(),
        settings.seed,
    );

    WorldCore {
        palette: Arc::new(Palette::builtin()),
        geometry,
        grid: OccupancyMap::new(),
        behaviors: BehaviorRegistry::new(),
        gravity: settings.gravity,
        background: settings.background,
        frame: 0,
        rng: StdRng::seed_from_u64(settings.seed),
        colors: vec![settings.background; cells],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
