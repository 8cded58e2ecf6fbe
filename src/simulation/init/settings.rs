use crate::domain::error::{ensure_finite, Result};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f32) -> Result<()> {
    world.validity().into_result()?;
    world.gravity = ensure_finite(gravity)?;
    Ok(())
}

pub(super) fn get_gravity(world: &WorldCore) -> f32 {
    world.gravity
}
