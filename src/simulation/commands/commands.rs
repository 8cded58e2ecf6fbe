use crate::domain::error::{PhysicsError, Result};

use super::WorldCore;

/// Outcome of a world validity check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldValidity {
    Valid,
    Null,
    /// Storage and handle bookkeeping disagree on the body count
    CorruptedCount,
    OverCapacity,
    Destroyed,
}

impl WorldValidity {
    pub fn is_valid(self) -> bool {
        self == WorldValidity::Valid
    }

    /// Map to the error every mutator reports
    pub fn into_result(self) -> Result<()> {
        match self {
            WorldValidity::Valid => Ok(()),
            WorldValidity::Null => Err(PhysicsError::NullWorld),
            WorldValidity::CorruptedCount | WorldValidity::OverCapacity => {
                Err(PhysicsError::WorldCorrupted)
            }
            WorldValidity::Destroyed => Err(PhysicsError::WorldDestroyed),
        }
    }
}

pub(super) fn validity(world: &WorldCore) -> WorldValidity {
    if world.destroyed {
        return WorldValidity::Destroyed;
    }
    let count = world.bodies.len();
    if count > world.settings.capacity {
        return WorldValidity::OverCapacity;
    }
    if world.slot_handles.len() != count || world.handles.live() != count {
        return WorldValidity::CorruptedCount;
    }
    WorldValidity::Valid
}

pub(super) fn clear(world: &mut WorldCore) -> Result<()> {
    world.validity().into_result()?;
    world.bodies.clear();
    world.slot_handles.clear();
    world.handles.release_all();
    Ok(())
}

pub(super) fn destroy(world: &mut WorldCore) {
    if world.destroyed {
        return;
    }
    world.bodies.clear();
    world.slot_handles.clear();
    world.handles.release_all();
    world.gravity = 0.0;
    world.destroyed = true;
    console_log!("[jubi] world {} destroyed", world.id.get());
}
