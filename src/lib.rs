//! Jubi Engine - fixed-capacity 2D rigid body physics
//!
//! Boxes and circles in a world that integrates forces, detects overlaps and
//! pushes boxes apart. Runs natively or in the browser through WASM.
//!
//! Architecture:
//! - core/       - Vec2 math, console logging macros
//! - domain/     - error taxonomy, world settings
//! - systems/    - rigid bodies, collision, diagnostics channel
//! - simulation/ - world core, stepping, JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps short paths working)
pub use systems::collision;
pub use systems::diagnostics;
pub use systems::rigid_body;

#[doc(hidden)]
pub use web_sys as __web_sys;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Jubi physics engine initialized (v{})", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::Vec2;
pub use domain::error::{PhysicsError, Result};
pub use domain::settings::{WorldSettings, GRAVITY, MAX_BODIES};
pub use simulation::{world_validity, StepReport, World, WorldCore, WorldValidity};
pub use systems::collision::{aabb_vs_aabb, aabb_vs_circle, circle_vs_circle, Aabb, Circle};
pub use systems::rigid_body::{Body, BodyHandle, BodyKind, Shape, ShapeKind, WorldId};

// Export kind / shape codes for JS
#[wasm_bindgen]
pub fn kind_static() -> u8 { BodyKind::Static as u8 }
#[wasm_bindgen]
pub fn kind_dynamic() -> u8 { BodyKind::Dynamic as u8 }
#[wasm_bindgen]
pub fn shape_box() -> u8 { ShapeKind::Box as u8 }
#[wasm_bindgen]
pub fn shape_circle() -> u8 { ShapeKind::Circle as u8 }
#[wasm_bindgen]
pub fn max_bodies() -> u32 { MAX_BODIES as u32 }
