//! Physical constants of the table. Lengths are in millimetres, times in
//! seconds.

pub const BALL_RADIUS: f64 = 28.5;
pub const BALL_DIAMETER: f64 = 2. * BALL_RADIUS;
pub const HOLE_RADIUS: f64 = 2. * BALL_DIAMETER;

pub const TABLE_LENGTH: f64 = 2700.;
pub const TABLE_WIDTH: f64 = TABLE_LENGTH / 2.;

/// Fixed integration step of the segment driver
pub const SIM_RATE: f64 = 0.0001;
/// Speed (mm/s) under which a rolling ball is considered at rest
pub const VEL_EPSILON: f64 = 0.01;
/// Deceleration magnitude (mm/s²) opposing a rolling ball
pub const DRAG: f64 = 150.;
/// Ceiling on the simulated length of a single segment
pub const MAX_TIME: f64 = 600.;

/// 15 numbered balls, the cue ball, 4 cushions and 6 holes
pub const MAX_OBJECTS: usize = 26;

/// Number of ticks needed to reach [`MAX_TIME`]
pub(crate) const MAX_TICKS: u64 = 6_000_000;
