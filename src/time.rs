//! Display clock fed by `performance.now()`.
//!
//! `draw_web()` calls at ~60fps with variable delta. FrameClock turns those
//! raw timestamps into a monotonic millisecond clock that every tween and the
//! hover clear deadline are measured against, so animation logic can be driven
//! with plain numbers in tests.

pub struct FrameClock {
    /// Display time in milliseconds since the first frame.
    now_ms: f64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

/// Largest single-frame advance. A backgrounded tab resumes where it left off
/// instead of snapping every animation to its end.
const MAX_FRAME_DELTA_MS: f64 = 500.0;

impl FrameClock {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the display time to use for this frame.
    pub fn update(&mut self, timestamp_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(prev) => (timestamp_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0, // First frame: no delta
        };
        self.last_timestamp = Some(timestamp_ms);
        self.now_ms += delta;
        self.now_ms
    }

    /// Display time as of the last update.
    pub fn now(&self) -> f64 {
        self.now_ms
    }
}

/// Current wall-clock timestamp in milliseconds.
///
/// Prefers the high-resolution `performance.now()`; falls back to `Date.now()`
/// when the Performance API is unavailable.
pub fn timestamp_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
