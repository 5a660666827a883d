//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

// --- Ship kinematics ---

/// Minimum ship speed (world units per step). Ships never stop.
pub const MIN_SPEED: f64 = 3.0;

/// Maximum ship speed (world units per step).
pub const MAX_SPEED: f64 = 10.0;

/// Forward acceleration per step while thrust is held.
pub const THRUST_ACCEL: f64 = 0.3;

/// Deceleration per step while brake is held. Stronger than thrust.
pub const BRAKE_DECEL: f64 = 0.4;

// --- Pursuit AI ---

/// Acceleration per step while boosting toward the target.
pub const PURSUIT_BOOST_ACCEL: f64 = 0.3;

/// Maximum per-step deceleration when easing onto the target's speed.
pub const PURSUIT_EASE_DECEL: f64 = 0.2;

/// Range within which the pursuer stops boosting and matches speed.
pub const PURSUIT_MATCH_RANGE: f64 = 100.0;

/// Facing cone (degrees off the nose) required to match speed.
pub const PURSUIT_MATCH_CONE_DEG: f64 = 30.0;

/// Angular difference beyond which a close target counts as "behind".
pub const PURSUIT_EVADE_ANGLE_DEG: f64 = 120.0;

/// Range within which a target behind triggers the evasive weave.
pub const PURSUIT_EVADE_RANGE: f64 = 150.0;

/// Dead-band: no steering correction below this angular difference.
pub const PURSUIT_TURN_DEADBAND_DEG: f64 = 10.0;

// --- Breadcrumb trail ---

/// A breadcrumb is spawned for every ship each time this many steps pass.
pub const TRAIL_INTERVAL: u64 = 3;

/// Breadcrumb lifetime in steps (2 seconds).
pub const BREADCRUMB_LIFETIME: i32 = 2 * TICK_RATE as i32;

/// Breadcrumb color.
pub const BREADCRUMB_COLOR: &str = "white";

// --- Session setup ---

/// Player team id.
pub const PLAYER_TEAM: u32 = 0;

/// Enemy team id for the fixed session pursuer and skirmish extras.
pub const PURSUER_TEAM: u32 = 1;

/// Player spawn coordinate.
pub const PLAYER_SPAWN_X: f64 = 1000.0;
pub const PLAYER_SPAWN_Y: f64 = 1000.0;

/// Fixed enemy spawn coordinate.
pub const PURSUER_SPAWN_X: f64 = 1600.0;
pub const PURSUER_SPAWN_Y: f64 = 1400.0;

/// Visual size of a ship (render extent in world units).
pub const SHIP_SIZE: f64 = 8.0;

/// Player hull color.
pub const PLAYER_COLOR: &str = "#3FC380";

/// Pursuer hull color.
pub const PURSUER_COLOR: &str = "#CF000F";

/// Player turn rate (degrees per step). Out-turns the pursuers.
pub const PLAYER_TURN_RATE_DEG: f64 = 6.0;

/// Pursuer turn rate (degrees per step).
pub const PURSUER_TURN_RATE_DEG: f64 = 4.0;

/// Skirmish spawn ring around the player spawn (world units).
pub const SKIRMISH_MIN_RANGE: f64 = 400.0;
pub const SKIRMISH_MAX_RANGE: f64 = 900.0;

// --- Render ---

/// The surface is wiped to this color before each frame.
pub const CLEAR_COLOR: &str = "#000000";

/// Default viewport size when the host does not specify one.
pub const DEFAULT_VIEW_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEW_HEIGHT: f64 = 720.0;
