//! Shared numeric constants for the particles crate.

// ── Physics ─────────────────────────────────────────────────────

/// Velocity retained after each tick.
pub const DAMPING: f64 = 0.98;

/// Velocity retained (and inverted) on an edge bounce.
pub const BOUNCE_RESTITUTION: f64 = 0.9;

/// Peak pointer push per tick, applied at zero distance.
pub const REPULSION_STRENGTH: f64 = 0.5;

/// Scale of the random heading change relative to wander strength.
pub const WANDER_JITTER: f64 = 0.3;

/// Speed cap as a multiple of the configured base speed.
pub const MAX_SPEED_FACTOR: f64 = 2.0;

// ── Spawning ────────────────────────────────────────────────────

/// Smallest particle radius in pixels.
pub const MIN_RADIUS: f64 = 1.0;

/// Width of the radius range; radii fall in `[MIN_RADIUS, MIN_RADIUS + RADIUS_SPAN)`.
pub const RADIUS_SPAN: f64 = 2.0;

// ── Drawing ─────────────────────────────────────────────────────

/// Opacity of a connection between two coincident particles.
pub const CONNECTION_MAX_OPACITY: f64 = 0.5;

/// Stroke width of connection lines in pixels.
pub const CONNECTION_LINE_WIDTH: f64 = 1.0;

/// Fill style for particle discs.
pub const PARTICLE_FILL: &str = "rgba(255, 255, 255, 0.8)";
