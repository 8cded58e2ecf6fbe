//! Console logging macros
//!
//! On wasm32 these forward to the browser console through `web_sys`.
//! Native builds (tests, benches, desktop hosts) compile them away, but the
//! format arguments are still type-checked.
//!
//! Usage:
//! ```rust
//! use jubi_engine::{console_log, console_warn};
//!
//! let bodies = 3;
//! console_log!("world holds {} bodies", bodies);
//! console_warn!("step rejected: dt={}", -1.0);
//! ```

/// Log an informational line to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning line to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
