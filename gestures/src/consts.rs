//! Default thresholds and timings shared by the recognizers.

// ── Tap / double-tap ────────────────────────────────────────────

/// Maximum gap between the two taps of a double-tap, in milliseconds.
pub const DOUBLE_TAP_DELAY_MS: f64 = 300.0;

/// Maximum distance between the two taps of a double-tap, in client pixels.
pub const DOUBLE_TAP_THRESHOLD_PX: f64 = 8.0;

/// Maximum contact duration for a tap, in milliseconds.
pub const TAP_DELAY_MS: f64 = 300.0;

/// Maximum pointer travel between down and up for a tap, in client pixels.
pub const TAP_THRESHOLD_PX: f64 = 8.0;

// ── Press ───────────────────────────────────────────────────────

/// Hold time before a press fires, in milliseconds.
pub const PRESS_DELAY_MS: f64 = 500.0;

/// Movement tolerated while holding before the press is abandoned.
pub const PRESS_THRESHOLD_PX: f64 = 8.0;

// ── Swipe ───────────────────────────────────────────────────────

/// Minimum travel for a swipe, in client pixels.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Minimum average speed for a swipe, in pixels per millisecond.
pub const SWIPE_VELOCITY: f64 = 0.3;

// ── Drag ────────────────────────────────────────────────────────

/// Travel required before a drag reports `Start`.
pub const DRAG_THRESHOLD_PX: f64 = 0.0;
