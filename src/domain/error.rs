//! Error taxonomy for every fallible engine operation.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Failure kinds reported by world, body and step operations.
///
/// Each kind has a stable non-zero code for the JS side; `0` means "no error".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[repr(u8)]
pub enum PhysicsError {
    #[error("{}", self.message())]
    NullWorld = 1,
    #[error("{}", self.message())]
    WorldCorrupted = 2,
    #[error("{}", self.message())]
    WorldDestroyed = 3,
    #[error("{}", self.message())]
    WorldFull = 4,
    #[error("{}", self.message())]
    NullBody = 5,
    #[error("{}", self.message())]
    BodyNotInWorld = 6,
    #[error("{}", self.message())]
    BodyNotValid = 7,
    #[error("{}", self.message())]
    InvalidValue = 8,
    #[error("{}", self.message())]
    NullValue = 9,
    #[error("{}", self.message())]
    Unknown = 10,
}

pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Code reported when nothing is latched
pub const ERROR_CODE_NONE: u8 = 0;

impl PhysicsError {
    pub const ALL: [PhysicsError; 10] = [
        PhysicsError::NullWorld,
        PhysicsError::WorldCorrupted,
        PhysicsError::WorldDestroyed,
        PhysicsError::WorldFull,
        PhysicsError::NullBody,
        PhysicsError::BodyNotInWorld,
        PhysicsError::BodyNotValid,
        PhysicsError::InvalidValue,
        PhysicsError::NullValue,
        PhysicsError::Unknown,
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.code() == code)
    }

    /// Fixed human-readable message for this kind
    pub fn message(self) -> &'static str {
        match self {
            PhysicsError::NullWorld => "world is null",
            PhysicsError::WorldCorrupted => "world body count is corrupted or exceeds capacity",
            PhysicsError::WorldDestroyed => "world has been destroyed",
            PhysicsError::WorldFull => "world is at body capacity",
            PhysicsError::NullBody => "body is null",
            PhysicsError::BodyNotInWorld => "body is not in this world",
            PhysicsError::BodyNotValid => "body cannot take this operation",
            PhysicsError::InvalidValue => "value is out of range",
            PhysicsError::NullValue => "value is not a finite number",
            PhysicsError::Unknown => "unknown error",
        }
    }

    /// Short stable name (used in JSON diagnostics)
    pub fn name(self) -> &'static str {
        match self {
            PhysicsError::NullWorld => "NullWorld",
            PhysicsError::WorldCorrupted => "WorldCorrupted",
            PhysicsError::WorldDestroyed => "WorldDestroyed",
            PhysicsError::WorldFull => "WorldFull",
            PhysicsError::NullBody => "NullBody",
            PhysicsError::BodyNotInWorld => "BodyNotInWorld",
            PhysicsError::BodyNotValid => "BodyNotValid",
            PhysicsError::InvalidValue => "InvalidValue",
            PhysicsError::NullValue => "NullValue",
            PhysicsError::Unknown => "Unknown",
        }
    }
}

impl Serialize for PhysicsError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Reject NaN / inf scalars
#[inline]
pub fn ensure_finite(value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::NullValue)
    }
}
