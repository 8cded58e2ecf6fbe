use crate::domain::settings::WorldSettings;
use crate::systems::rigid_body::{HandleTable, WorldId};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Build an empty world. Storage is reserved up front and never grows past
/// `settings.capacity`.
pub(super) fn create_world_core(settings: WorldSettings) -> WorldCore {
    let capacity = settings.capacity;
    let id = WorldId::next();
    WorldCore {
        id,
        gravity: settings.gravity,
        settings,
        bodies: Vec::with_capacity(capacity),
        slot_handles: Vec::with_capacity(capacity),
        handles: HandleTable::with_capacity(id, capacity),
        destroyed: false,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
