/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of die faces.
pub const FACE_COUNT: usize = 6;

/// Faces at or above this value count as favorable.
pub const FAVORABLE_FACE: u8 = 4;

/// Offset added inside the bias logarithm so `ln(0)` is never taken.
pub const LOG_EPSILON: f64 = 1e-6;

/// Upper clamp for the collapse bias. `1.0` is neutral.
pub const MAX_COLLAPSE_BIAS: f64 = 2.0;

/// Neutral collapse bias: a fair die.
pub const NEUTRAL_COLLAPSE_BIAS: f64 = 1.0;

/// Upper end of the manual mood/stress scale.
pub const MANUAL_SCALE_MAX: f64 = 10.0;
