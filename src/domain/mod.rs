pub mod error;
pub mod settings;

pub use error::{PhysicsError, Result};
pub use settings::WorldSettings;
