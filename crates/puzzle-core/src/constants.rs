/// Interaction and round tuning constants.
///
/// These constants express intended behavior (smoothing gains, win/lose
/// thresholds, fixed display strings) and keep magic numbers out of the
/// code, improving readability.
// Multiplier applied to `dt * drag_speed` when the drag chases the pointer
pub const DRAG_SMOOTHING_GAIN: f32 = 10.0;

// Piece configuration defaults
pub const DEFAULT_DRAG_SPEED: f32 = 1.0;
pub const DEFAULT_SNAP_TOLERANCE: f32 = 0.35;
pub const DEFAULT_PICK_RADIUS: f32 = 0.5;

// Round rules
pub const ROUND_DURATION_SECS: f32 = 90.0;
pub const WIN_SNAP_TALLY: u32 = 7;

// Fixed strings for the result text surface
pub const WIN_MESSAGE: &str = "You Won!";
pub const LOSS_MESSAGE: &str = "Time's Up!";
