use std::ops::RangeInclusive;

// Component weights (must sum to 1.0)
pub const WEIGHT_COURSE: f64 = 0.5;
pub const WEIGHT_RECENT: f64 = 0.3;
pub const WEIGHT_HISTORICAL: f64 = 0.2;
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
// Course-fit constants
pub const NARROW_HANDICAP_THRESHOLD: u32 = 5;
pub const DRIVE_DIVISOR: f64 = 350.0;
pub const BASELINE_PUTTS: f64 = 2.0;
// Synthetic profile ranges (yards, fraction, putts per hole)
pub const SYNTHETIC_DRIVING_DISTANCE: RangeInclusive<f64> = 280.0..=320.0;
pub const SYNTHETIC_FAIRWAY_ACCURACY: RangeInclusive<f64> = 0.55..=0.75;
pub const SYNTHETIC_PUTTING_AVG: RangeInclusive<f64> = 1.70..=1.85;
// Synthetic form estimators
pub const FORM_BUCKETS: u64 = 50;
pub const DEFAULT_SEED: u64 = 42;
// Default hole table column bindings
pub const DISTANCE_COLUMN: &str = "Hole Distance (Yards)";
pub const SCORE_COLUMN: &str = "Average Score (2016)";
pub const HANDICAP_COLUMN: &str = "Handicap (2016)";
