//! Collision - detection predicates and pair resolution
//!
//! Broad phase is the all-pairs cached-bounds scan in the step scheduler.
//! This module owns everything after that: shape tests and the response.

mod detect;
mod resolve;
mod shapes;

pub use detect::{aabb_vs_aabb, aabb_vs_circle, circle_vs_circle};
pub use resolve::{
    overlap, resolve_aabb_aabb, resolve_aabb_circle, resolve_circle_circle, resolve_pair, Axis,
    Contact, Resolution,
};
pub use shapes::{Aabb, Circle};
