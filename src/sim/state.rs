//! Simulation state and the per-tick snapshot handed to renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::frame::HexFrame;
use super::hexagon::{HEX_SIDES, HexGeometry};
use crate::config::SimConfig;
use crate::wrap_angle;

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Advancing every tick
    Running,
    /// Stop was requested; ticks are ignored
    Stopped,
}

/// The ball, in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// The hexagon's placement and spin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    pub center: Vec2,
    /// Accumulated rotation (radians, not wrapped)
    pub angle: f32,
    /// Radians per second, positive turns +x toward +y
    pub angular_speed: f32,
}

impl Hexagon {
    /// Transform for the current angle
    #[inline]
    pub fn frame(&self) -> HexFrame {
        HexFrame::new(self.center, self.angle)
    }

    pub fn advance(&mut self, dt: f32) {
        self.angle += self.angular_speed * dt;
    }
}

/// Everything one run owns
#[derive(Debug, Clone)]
pub struct SimState {
    pub config: SimConfig,
    /// Local boundary, fixed for the run
    pub geometry: HexGeometry,
    pub ball: Ball,
    pub hexagon: Hexagon,
    pub phase: SimPhase,
    /// Number of ticks that advanced the simulation
    pub time_ticks: u64,
}

impl SimState {
    /// Build the initial state from a configuration
    ///
    /// The configuration is taken as given; use [`SimConfig::validate`] (or
    /// load through [`SimConfig::load`]) to reject unusable values first.
    pub fn new(config: SimConfig) -> Self {
        let geometry = HexGeometry::new(config.hex_radius);
        let ball = Ball {
            pos: config.ball_start_pos,
            vel: config.ball_start_vel,
            radius: config.ball_radius,
        };
        let hexagon = Hexagon {
            center: config.hex_center,
            angle: config.hex_start_angle,
            angular_speed: config.hex_angular_speed,
        };

        Self {
            config,
            geometry,
            ball,
            hexagon,
            phase: SimPhase::Running,
            time_ticks: 0,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    /// Read-only view of the current tick
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            ball_pos: self.ball.pos,
            ball_vel: self.ball.vel,
            ball_radius: self.ball.radius,
            hex_center: self.hexagon.center,
            hex_angle: self.hexagon.angle,
            hex_radius: self.geometry.radius,
        }
    }
}

/// Per-tick output for drawing and debug display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub ball_radius: f32,
    pub hex_center: Vec2,
    pub hex_angle: f32,
    pub hex_radius: f32,
}

impl Snapshot {
    /// Hexagon rotation in degrees, wrapped to [0, 360)
    pub fn angle_degrees(&self) -> f32 {
        wrap_angle(self.hex_angle).to_degrees()
    }

    /// Rotated outline in world space
    pub fn hex_world_vertices(&self) -> [Vec2; HEX_SIDES] {
        HexGeometry::new(self.hex_radius)
            .world_vertices(&HexFrame::new(self.hex_center, self.hex_angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_from_defaults() {
        let state = SimState::new(SimConfig::default());
        assert_eq!(state.phase, SimPhase::Running);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.hexagon.center, Vec2::new(450.0, 300.0));
        assert_eq!(state.ball.pos, Vec2::new(490.0, 220.0));
        assert_eq!(state.ball.vel, Vec2::new(120.0, 0.0));
        assert_eq!(state.ball.radius, 10.0);
        assert_eq!(state.hexagon.angle, 0.0);
        assert_eq!(state.geometry.radius, 230.0);
    }

    #[test]
    fn test_hexagon_advance() {
        let mut hex = Hexagon {
            center: Vec2::ZERO,
            angle: 1.0,
            angular_speed: 0.5,
        };
        hex.advance(2.0);
        assert!((hex.angle - 2.0).abs() < 1e-6);
        hex.advance(0.0);
        assert!((hex.angle - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_snapshot_overlay_helpers() {
        let mut state = SimState::new(SimConfig::default());
        state.hexagon.angle = -std::f32::consts::FRAC_PI_2;
        let snap = state.snapshot();
        assert!((snap.angle_degrees() - 270.0).abs() < 1e-3);

        let verts = snap.hex_world_vertices();
        for v in verts {
            assert!(((v - snap.hex_center).length() - 230.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = SimState::new(SimConfig::default()).snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"ball_pos\":[490.0,220.0]"));
        assert!(json.contains("\"tick\":0"));
    }
}
