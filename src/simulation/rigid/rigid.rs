use crate::domain::error::{PhysicsError, Result};
use crate::systems::rigid_body::{Body, BodyHandle};

use super::WorldCore;

pub(super) fn add_body(world: &mut WorldCore, mut body: Body) -> Result<BodyHandle> {
    world.validity().into_result()?;
    if !body.position.is_finite() || !body.size.is_finite() || !body.velocity.is_finite() {
        return Err(PhysicsError::NullValue);
    }
    if world.is_full() {
        return Err(PhysicsError::WorldFull);
    }

    let slot = world.bodies.len();
    let handle = world.handles.allocate(slot).ok_or(PhysicsError::WorldFull)?;
    body.stamp(slot, world.id);
    body.refresh_bounds();

    world.bodies.push(body);
    world.slot_handles.push(handle);
    Ok(handle)
}

pub(super) fn remove_body(world: &mut WorldCore, handle: BodyHandle) -> Result<bool> {
    world.validity().into_result()?;
    if handle.is_null() {
        return Err(PhysicsError::NullBody);
    }
    let Some(slot) = world.handles.slot(handle) else {
        return Ok(false);
    };

    // Shift everything after `slot` down one and re-stamp it.
    world.bodies.remove(slot);
    world.slot_handles.remove(slot);
    for i in slot..world.bodies.len() {
        world.bodies[i].stamp(i, world.id);
        world.handles.relocate(world.slot_handles[i], i);
    }
    world.handles.release(handle);
    Ok(true)
}

pub(super) fn find_index(world: &WorldCore, handle: BodyHandle) -> Option<usize> {
    if world.destroyed || handle.is_null() {
        return None;
    }
    let slot = world.handles.slot(handle)?;
    // Guard against a handle table that disagrees with storage
    (world.slot_handles.get(slot) == Some(&handle)).then_some(slot)
}

/// Resolve a handle for a mutating body operation
pub(super) fn lookup_mut(world: &mut WorldCore, handle: BodyHandle) -> Result<&mut Body> {
    world.validity().into_result()?;
    if handle.is_null() {
        return Err(PhysicsError::NullBody);
    }
    let slot = find_index(world, handle).ok_or(PhysicsError::BodyNotInWorld)?;
    Ok(&mut world.bodies[slot])
}
