//! Hex Bounce - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Simulation kernel (geometry, collision, rotating frame, tick)
//! - `config`: Startup configuration loaded from JSON
//! - `error`: Configuration errors
//!
//! Rendering, windowing, input polling and frame pacing live outside this crate.
//! They feed [`sim::TickInput`] in and read [`sim::Snapshot`] out.

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::ConfigError;

use glam::Vec2;

/// Default tuning values
pub mod consts {
    use std::f32::consts::FRAC_PI_6;

    /// Nominal simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Tick rate the drag coefficient is expressed against
    pub const DRAG_REFERENCE_RATE: f32 = 60.0;

    /// Surface the hexagon is centered in
    pub const VIEW_WIDTH: f32 = 900.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Hexagon defaults
    pub const HEX_RADIUS: f32 = 230.0; // center to vertex
    pub const HEX_ANGULAR_SPEED: f32 = FRAC_PI_6; // 30 deg/s

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_OFFSET: (f32, f32) = (40.0, -80.0); // from hexagon center
    pub const BALL_START_VEL: (f32, f32) = (120.0, 0.0);

    /// Gravity (pixels/s², +y is down)
    pub const GRAVITY: f32 = 900.0;
    /// Per-reference-tick velocity loss to air
    pub const AIR_DRAG: f32 = 0.0005;
    /// Fraction of speed kept after a wall bounce
    pub const BOUNCE_DAMPING: f32 = 0.92;
    /// Speed cap
    pub const MAX_SPEED: f32 = 2000.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
