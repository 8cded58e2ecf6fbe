//! Core building blocks shared by every system
//!
//! - math/  - Vec2 and scalar helpers
//! - utils/ - console logging macros (must be declared first for macro export)

#[macro_use]
pub mod utils;
pub mod math;
