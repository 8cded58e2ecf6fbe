use serde::{Deserialize, Serialize};

/// Hard ceiling for bodies in one world
pub const MAX_BODIES: usize = 1024;

/// Default downward gravity (positive Y is down)
pub const GRAVITY: f32 = 9.81;

/// Fractional velocity decay applied once per integration step
pub const DEFAULT_DAMPING: f32 = 0.01;

pub const DEFAULT_MIN_DELTA_TIME: f32 = 1.0 / 240.0;
pub const DEFAULT_MAX_DELTA_TIME: f32 = 1.0 / 15.0;
pub const DEFAULT_MAX_VELOCITY: f32 = 1000.0;

/// Per-world configuration.
///
/// Every field is optional in JSON; missing fields take the defaults above.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldSettings {
    pub capacity: usize,
    pub gravity: f32,
    pub damping: f32,
    pub min_delta_time: f32,
    pub max_delta_time: f32,
    pub max_velocity: f32,
    /// Reject out-of-range dt and clamp velocities while stepping
    pub enforce_guards: bool,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            capacity: MAX_BODIES,
            gravity: GRAVITY,
            damping: DEFAULT_DAMPING,
            min_delta_time: DEFAULT_MIN_DELTA_TIME,
            max_delta_time: DEFAULT_MAX_DELTA_TIME,
            max_velocity: DEFAULT_MAX_VELOCITY,
            enforce_guards: false,
        }
    }
}

impl WorldSettings {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: WorldSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 || self.capacity > MAX_BODIES {
            return Err(format!("capacity must be in 1..={}, got {}", MAX_BODIES, self.capacity));
        }
        if !self.gravity.is_finite() {
            return Err("gravity must be finite".to_string());
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(format!("damping must be in [0, 1), got {}", self.damping));
        }
        if !(self.min_delta_time > 0.0 && self.min_delta_time <= self.max_delta_time) {
            return Err(format!(
                "delta time range is invalid: [{}, {}]",
                self.min_delta_time, self.max_delta_time
            ));
        }
        if !(self.max_velocity > 0.0) {
            return Err(format!("max velocity must be positive, got {}", self.max_velocity));
        }
        Ok(())
    }
}
