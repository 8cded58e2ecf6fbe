use wasm_bindgen::prelude::*;

use crate::core::math::Vec2;
use crate::domain::error::{PhysicsError, Result as PhysicsResult, ERROR_CODE_NONE};
use crate::systems::diagnostics;
use crate::systems::rigid_body::{BodyHandle, BodyKind, ShapeKind};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Floats per body in `body_transforms`: x, y, size.x, size.y, shape
pub const TRANSFORM_STRIDE: usize = 5;

// 2^53 - 1, the largest handle bit pattern
const MAX_SAFE_HANDLE: f64 = 9_007_199_254_740_991.0;

/// JS-facing world.
///
/// Handles cross the boundary as their 53-bit patterns in an `f64`
/// (0 = no body), so they are always exact and carry the issuing world.
/// Failed calls return a sentinel; the reason is in `last_error_code`.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

fn error_code<T>(result: &PhysicsResult<T>) -> u8 {
    match result {
        Ok(_) => ERROR_CODE_NONE,
        Err(e) => e.code(),
    }
}

#[inline]
fn handle_from_js(bits: f64) -> BodyHandle {
    if bits > 0.0 && bits <= MAX_SAFE_HANDLE && bits.fract() == 0.0 {
        BodyHandle::from_bits(bits as u64)
    } else {
        BodyHandle::NULL
    }
}

#[inline]
fn handle_to_js(handle: BodyHandle) -> f64 {
    handle.to_bits() as f64
}

#[wasm_bindgen]
impl World {
    /// Create a new world with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_settings_json(json).map_err(|e| {
            console_warn!("[jubi] settings rejected: {}", e);
            JsValue::from_str(&e)
        })?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.len() as u32 }

    #[wasm_bindgen(getter)]
    pub fn capacity(&self) -> u32 { self.core.capacity() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 { self.core.gravity() }

    #[wasm_bindgen(getter)]
    pub fn destroyed(&self) -> bool { self.core.is_destroyed() }

    /// Returns false if the world is destroyed or gravity is not finite
    pub fn set_gravity(&mut self, gravity: f32) -> bool {
        self.core.set_gravity(gravity).is_ok()
    }

    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Error code of the world's validity check (0 = valid)
    pub fn validity_code(&self) -> u8 {
        error_code(&self.core.validity().into_result())
    }

    pub fn clear(&mut self) -> bool {
        self.core.clear().is_ok()
    }

    pub fn destroy(&mut self) {
        self.core.destroy();
    }

    // === BODY API ===

    /// Spawn a box centered at (x, y) with half-extents (hw, hh).
    /// Returns the body handle, or 0 on failure.
    pub fn create_box(&mut self, x: f32, y: f32, hw: f32, hh: f32, kind: u8, mass: f32) -> f64 {
        self.create(ShapeKind::Box, x, y, hw, hh, kind, mass)
    }

    /// Spawn a circle centered at (x, y) with the given diameter.
    /// Returns the body handle, or 0 on failure.
    pub fn create_circle(&mut self, x: f32, y: f32, diameter: f32, kind: u8, mass: f32) -> f64 {
        self.create(ShapeKind::Circle, x, y, diameter, diameter, kind, mass)
    }

    pub fn remove_body(&mut self, handle: f64) -> bool {
        self.core.remove_body(handle_from_js(handle)).unwrap_or(false)
    }

    pub fn contains(&self, handle: f64) -> bool {
        self.core.contains(handle_from_js(handle))
    }

    /// Current slot of a body, -1 if it is not in this world
    pub fn index_of(&self, handle: f64) -> i32 {
        self.core
            .find_index(handle_from_js(handle))
            .map_or(-1, |slot| slot as i32)
    }

    pub fn apply_force(&mut self, handle: f64, fx: f32, fy: f32) -> bool {
        self.core
            .apply_force(handle_from_js(handle), Vec2::new(fx, fy))
            .is_ok()
    }

    pub fn apply_impulse(&mut self, handle: f64, ix: f32, iy: f32) -> bool {
        self.core
            .apply_impulse(handle_from_js(handle), Vec2::new(ix, iy))
            .is_ok()
    }

    /// Flat per-body render data in slot order (see `TRANSFORM_STRIDE`)
    pub fn body_transforms(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.core.len() * TRANSFORM_STRIDE);
        for body in self.core.bodies() {
            out.push(body.position.x);
            out.push(body.position.y);
            out.push(body.size.x);
            out.push(body.size.y);
            out.push(body.shape().kind() as u8 as f32);
        }
        out
    }

    /// Advance one step. Returns false (and nothing moves) on failure.
    pub fn step(&mut self, dt: f32) -> bool {
        self.core.step(dt).is_ok()
    }

    // === DIAGNOSTICS ===

    pub fn last_error_code(&self) -> u8 {
        diagnostics::last_error_code()
    }

    pub fn last_error_json(&self) -> String {
        diagnostics::last_error_json()
    }

    pub fn error_tick(&self) -> u64 {
        diagnostics::current_tick()
    }

    pub fn clear_error(&self) {
        diagnostics::clear_error();
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl World {
    #[allow(clippy::too_many_arguments)]
    fn create(&mut self, shape: ShapeKind, x: f32, y: f32, sx: f32, sy: f32, kind: u8, mass: f32) -> f64 {
        let core = &mut self.core;
        let result = diagnostics::tracked("create_body", || {
            let kind = BodyKind::from_code(kind).ok_or(PhysicsError::InvalidValue)?;
            let position = Vec2::new(x, y);
            let size = Vec2::new(sx, sy);
            match shape {
                ShapeKind::Box => core.create_box(position, size, kind, mass),
                ShapeKind::Circle => core.create_circle(position, size, kind, mass),
            }
        });
        result.map_or(0.0, handle_to_js)
    }

    /// Rust-side access to the wrapped world
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
