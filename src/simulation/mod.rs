//! World - fixed-capacity rigid body container
//!
//! The world owns every body it holds by value, in a dense array. Slot order
//! is insertion order and is also the integration order. Removal shifts later
//! bodies down one slot; handles stay valid across the shift.
//!
//! The world core only orchestrates:
//! - lifecycle (clear / destroy / validity) lives in commands/
//! - membership (add / remove / lookup) lives in rigid/
//! - the integrate-then-collide tick lives in step/
//!
//! Every mutator validates the world first, so a destroyed world is inert.

use crate::core::math::Vec2;
use crate::domain::error::Result;
use crate::domain::settings::WorldSettings;
use crate::systems::diagnostics::tracked;
use crate::systems::rigid_body::{Body, BodyHandle, BodyKind, HandleTable, WorldId};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use commands::WorldValidity;
pub use facade::{World, TRANSFORM_STRIDE};
pub use perf_stats::PerfStats;
pub use step::StepReport;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    id: WorldId,
    settings: WorldSettings,

    // Storage (dense, slot index == position)
    bodies: Vec<Body>,
    /// Handle of the body in each slot, parallel to `bodies`
    slot_handles: Vec<BodyHandle>,
    handles: HandleTable,

    // Settings
    gravity: f32,

    // State
    destroyed: bool,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world with default settings
    pub fn new() -> Self {
        init::create_world_core(WorldSettings::default())
    }

    /// Create an empty world from validated settings
    pub fn with_settings(settings: WorldSettings) -> std::result::Result<Self, String> {
        settings.validate()?;
        Ok(init::create_world_core(settings))
    }

    pub fn from_settings_json(json: &str) -> std::result::Result<Self, String> {
        let settings = WorldSettings::from_json(json)?;
        Ok(init::create_world_core(settings))
    }

    pub fn id(&self) -> WorldId { self.id }

    pub fn settings(&self) -> &WorldSettings { &self.settings }

    /// Live body count
    pub fn len(&self) -> usize { self.bodies.len() }

    pub fn is_empty(&self) -> bool { self.bodies.is_empty() }

    pub fn capacity(&self) -> usize { self.settings.capacity }

    pub fn is_full(&self) -> bool { self.bodies.len() >= self.settings.capacity }

    pub fn is_destroyed(&self) -> bool { self.destroyed }

    /// Completed steps
    pub fn frame(&self) -> u64 { self.frame }

    pub fn gravity(&self) -> f32 {
        settings::get_gravity(self)
    }

    /// Override gravity for this world only
    pub fn set_gravity(&mut self, gravity: f32) -> Result<()> {
        tracked("set_gravity", || settings::set_gravity(self, gravity))
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === LIFECYCLE ===

    pub fn validity(&self) -> WorldValidity {
        commands::validity(self)
    }

    /// Drop every body. Handles issued so far go stale.
    pub fn clear(&mut self) -> Result<()> {
        tracked("clear_world", || commands::clear(self))
    }

    /// Zero all storage and make the world permanently inert. Idempotent.
    pub fn destroy(&mut self) {
        commands::destroy(self)
    }

    // === MEMBERSHIP ===

    /// Copy `body` into the world. The returned handle is the only
    /// authoritative way to reach it afterwards.
    pub fn add_body(&mut self, body: Body) -> Result<BodyHandle> {
        tracked("add_body", || rigid::add_body(self, body))
    }

    /// Remove by handle. `Ok(false)` when the handle is stale or foreign.
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<bool> {
        tracked("remove_body", || rigid::remove_body(self, handle))
    }

    /// Current slot index of a body
    pub fn find_index(&self, handle: BodyHandle) -> Option<usize> {
        rigid::find_index(self, handle)
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.find_index(handle).is_some()
    }

    pub fn create_box(&mut self, position: Vec2, size: Vec2, kind: BodyKind, mass: f32) -> Result<BodyHandle> {
        tracked("create_box", || rigid::add_body(self, Body::new_box(position, size, kind, mass)))
    }

    pub fn create_circle(&mut self, position: Vec2, size: Vec2, kind: BodyKind, mass: f32) -> Result<BodyHandle> {
        tracked("create_circle", || rigid::add_body(self, Body::new_circle(position, size, kind, mass)))
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        let slot = self.find_index(handle)?;
        self.bodies.get(slot)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let slot = self.find_index(handle)?;
        self.bodies.get_mut(slot)
    }

    /// Bodies in slot order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn apply_force(&mut self, handle: BodyHandle, force: Vec2) -> Result<()> {
        tracked("apply_force", || rigid::lookup_mut(self, handle)?.apply_force(force))
    }

    pub fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec2) -> Result<()> {
        tracked("apply_impulse", || rigid::lookup_mut(self, handle)?.apply_impulse(impulse))
    }

    // === STEPPING ===

    /// Advance exactly one increment: integrate every body, then resolve all pairs.
    ///
    /// An invalid world or delta time aborts the whole step.
    pub fn step(&mut self, dt: f32) -> Result<StepReport> {
        tracked("step_world", || step::step(self, dt))
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Null-world check for hosts holding an optional world
pub fn world_validity(world: Option<&WorldCore>) -> WorldValidity {
    match world {
        Some(world) => world.validity(),
        None => WorldValidity::Null,
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
