//! Simulation constants and tuning parameters.

// --- Viewport ---

/// Default viewport width in pixels.
pub const VIEWPORT_WIDTH: f32 = 1920.0;

/// Default viewport height in pixels.
pub const VIEWPORT_HEIGHT: f32 = 1080.0;

/// Entity footprint used by the bounce-and-clamp boundary policy.
/// Default-category entities are kept inside [0, extent - ENTITY_SPAN].
pub const ENTITY_SPAN: f32 = 15.0;

/// Player footprint used when clamping player-controlled movement.
pub const PLAYER_SPAN: f32 = 20.0;

/// Margin beyond the viewport on each side before a projectile is culled.
pub const OFFSCREEN_MARGIN: f32 = 10.0;

// --- Interaction thresholds ---

/// Player-vs-hostile contact distance (pixels).
pub const MELEE_RANGE: f32 = 30.0;

/// Projectile-vs-hostile hit distance (pixels).
pub const PROJECTILE_HIT_RANGE: f32 = 20.0;

// --- Player ---

/// Player movement speed (pixels per second).
pub const PLAYER_SPEED: f32 = 200.0;

/// Minimum seconds between player shots.
pub const FIRE_COOLDOWN_SECS: f32 = 0.2;

/// Damage carried by player projectiles.
pub const PLAYER_PROJECTILE_DAMAGE: i32 = 25;

/// Speed of player projectiles (pixels per second).
pub const PLAYER_PROJECTILE_SPEED: f32 = 80.0;

/// Default player hit points.
pub const PLAYER_MAX_HEALTH: i32 = 100;

// --- Hostiles ---

/// Contact damage dealt by a hostile reaching the player.
pub const HOSTILE_CONTACT_DAMAGE: i32 = 10;

/// Distance beyond the viewport edge at which hostiles spawn.
pub const SPAWN_EDGE_MARGIN: f32 = 50.0;

// --- Friction (stored on Physics, reserved for a future drag pass) ---

pub const PLAYER_FRICTION: f32 = 1.0;
pub const HOSTILE_FRICTION: f32 = 0.98;
pub const PROJECTILE_FRICTION: f32 = 1.0;

// --- Concurrency ---

/// Lower bound on worker threads per system pool.
pub const MIN_WORKER_THREADS: usize = 2;
