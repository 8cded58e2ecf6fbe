//! Diagnostics - last-error channel
//!
//! Every public fallible operation already returns `Result`. This channel is a
//! secondary aid for hosts that poll (e.g. a JS render loop): it remembers the
//! first error raised during the current tick.
//!
//! Key rules:
//! - One slot per thread, so worlds stepped on different threads never
//!   overwrite each other's diagnostics
//! - The tick advances once per outermost tracked operation
//! - First error wins within a tick; a later success never clears it

use std::cell::{Cell, RefCell};

use serde::Serialize;

use crate::domain::error::{PhysicsError, ERROR_CODE_NONE};

/// Snapshot of the latched error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub kind: PhysicsError,
    pub code: u8,
    pub operation: &'static str,
    pub message: &'static str,
    pub tick: u64,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<ErrorRecord>> = RefCell::new(None);
    static TICK: Cell<u64> = Cell::new(0);
    static DEPTH: Cell<u32> = Cell::new(0);
}

/// Advance the coalescing window. Returns the new tick.
pub fn increment_tick() -> u64 {
    TICK.with(|t| {
        let next = t.get().wrapping_add(1);
        t.set(next);
        next
    })
}

pub fn current_tick() -> u64 {
    TICK.with(|t| t.get())
}

/// Latch `kind` for `operation` unless this tick already has an error.
///
/// Returns true if the error was recorded.
pub fn set_error(kind: PhysicsError, operation: &'static str) -> bool {
    let tick = current_tick();
    let latched = LAST_ERROR.with(|slot| {
        let mut slot = slot.borrow_mut();
        if matches!(*slot, Some(rec) if rec.tick == tick) {
            return false;
        }
        *slot = Some(ErrorRecord {
            kind,
            code: kind.code(),
            operation,
            message: kind.message(),
            tick,
        });
        true
    });
    if latched {
        console_warn!("[jubi] {} failed: {} (tick {})", operation, kind.message(), tick);
    }
    latched
}

pub fn last_error() -> Option<ErrorRecord> {
    LAST_ERROR.with(|slot| *slot.borrow())
}

pub fn last_error_code() -> u8 {
    last_error().map(|rec| rec.code).unwrap_or(ERROR_CODE_NONE)
}

pub fn clear_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Last error as JSON (`null` when nothing is latched)
pub fn last_error_json() -> String {
    serde_json::to_string(&last_error()).unwrap_or_else(|_| "null".to_string())
}

struct DepthGuard;

impl DepthGuard {
    fn enter() -> (Self, bool) {
        let outermost = DEPTH.with(|d| {
            let depth = d.get();
            d.set(depth + 1);
            depth == 0
        });
        (DepthGuard, outermost)
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// Run a public operation inside the error channel.
///
/// The outermost call advances the tick; nested calls share it. Any error
/// leaving `f` is latched under `operation` and passed through unchanged.
pub fn tracked<T>(
    operation: &'static str,
    f: impl FnOnce() -> Result<T, PhysicsError>,
) -> Result<T, PhysicsError> {
    let (_guard, outermost) = DepthGuard::enter();
    if outermost {
        increment_tick();
    }
    let result = f();
    if let Err(kind) = result {
        set_error(kind, operation);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset() {
        clear_error();
    }

    #[test]
    fn first_error_in_tick_wins() {
        reset();
        increment_tick();
        assert!(set_error(PhysicsError::WorldFull, "add"));
        assert!(!set_error(PhysicsError::NullBody, "remove"));

        let rec = last_error().unwrap();
        assert_eq!(rec.kind, PhysicsError::WorldFull);
        assert_eq!(rec.operation, "add");
        assert_eq!(rec.message, PhysicsError::WorldFull.message());
        assert_eq!(rec.tick, current_tick());
    }

    #[test]
    fn later_tick_overwrites_but_success_does_not_clear() {
        reset();
        increment_tick();
        set_error(PhysicsError::WorldFull, "add");

        let ok: Result<(), PhysicsError> = tracked("noop", || Ok(()));
        assert!(ok.is_ok());
        assert_eq!(last_error_code(), PhysicsError::WorldFull.code());

        let _ = tracked::<()>("step", || Err(PhysicsError::InvalidValue));
        let rec = last_error().unwrap();
        assert_eq!(rec.kind, PhysicsError::InvalidValue);
        assert_eq!(rec.operation, "step");
    }

    #[test]
    fn nested_tracked_calls_share_one_tick() {
        reset();
        let before = current_tick();
        let result: Result<(), PhysicsError> = tracked("outer", || {
            tracked("inner", || Err(PhysicsError::BodyNotValid))
        });
        assert_eq!(result, Err(PhysicsError::BodyNotValid));
        assert_eq!(current_tick(), before + 1);

        let rec = last_error().unwrap();
        assert_eq!(rec.operation, "inner");
    }

    #[test]
    fn clear_error_resets_code() {
        increment_tick();
        set_error(PhysicsError::Unknown, "test");
        clear_error();
        assert_eq!(last_error_code(), ERROR_CODE_NONE);
        assert_eq!(last_error_json(), "null");
    }

    #[test]
    fn error_json_names_kind_and_operation() {
        reset();
        let _ = tracked::<()>("remove_body", || Err(PhysicsError::NullBody));
        let json = last_error_json();
        assert!(json.contains("\"kind\":\"NullBody\""));
        assert!(json.contains("\"operation\":\"remove_body\""));
    }
}
