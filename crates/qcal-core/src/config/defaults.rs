//! Default values for every configuration field.

pub const DEFAULT_K_SYMBIOSIS: f64 = 2.8;
pub const DEFAULT_N_TRIALS: usize = 1000;

pub const DEFAULT_OCEAN_THRESHOLD: f64 = 0.8;
pub const DEFAULT_TANK_THRESHOLD: f64 = 0.5;

pub const DEFAULT_DURATION_MINUTES: u32 = 5;
pub const DEFAULT_INTERVAL_SECONDS: u32 = 30;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
