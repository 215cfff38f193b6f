//! Shared constants for the press-and-hold gesture.
//!
//! Distances are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Jitter tolerance in logical pixels.
///
/// A press that travels further than this from where it went down is no
/// longer a long press: the attempt is cancelled instead of activated.
/// 8.0 matches the common platform touch slop (Android uses ~8dp).
pub const TOUCH_SLOP: f32 = 8.0;

/// Time a stationary press must be held before activation, in milliseconds.
pub const ACTIVATION_DURATION_MS: u64 = 500;

/// How far the press target shrinks at full progress, in logical pixels.
///
/// The minimum scale is `(width - ACTIVATION_SCALE_INSET) / width`, so every
/// surface loses the same absolute amount regardless of its size.
pub const ACTIVATION_SCALE_INSET: f32 = 10.0;

/// Duration of the settle spring played when a gesture completes.
pub const SETTLE_SPRING_DURATION_MS: u64 = 500;

/// Damping of the settle spring. High enough to avoid a visible bounce.
pub const SETTLE_SPRING_DAMPING: f32 = 90.0;
