//! RigidBody - a simulated box or circle
//!
//! Bodies are plain values until a world takes a copy of them. From then on
//! the world's copy is authoritative and is reached through a `BodyHandle`.

mod body;
mod handle;
mod integrate;

pub use body::{Body, BodyKind, Shape, ShapeKind};
pub use handle::{BodyHandle, WorldId};
pub(crate) use handle::HandleTable;
pub use integrate::{check_delta_time, IntegrationParams};
