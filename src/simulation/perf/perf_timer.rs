/// Lap stopwatch for per-phase step timings.
///
/// wasm32 has no `Instant`, so the browser clock is used there.
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    last_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    last: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { last_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { last: std::time::Instant::now() }
        }
    }

    /// Milliseconds since `start` or the previous lap, then restart
    pub(crate) fn lap_ms(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            let now = js_sys::Date::now();
            let elapsed = now - self.last_ms;
            self.last_ms = now;
            elapsed
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let now = std::time::Instant::now();
            let elapsed = now.duration_since(self.last).as_secs_f64() * 1000.0;
            self.last = now;
            elapsed
        }
    }
}
