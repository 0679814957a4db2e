//! Startup configuration
//!
//! Every tunable of a run lives in [`SimConfig`], which is handed to
//! [`SimState::new`](crate::sim::SimState::new) and never changes afterwards.
//! JSON files may set any subset of fields; the rest keep their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::frame::HexFrame;
use crate::sim::hexagon::HexGeometry;

/// Run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Hexagon ===
    /// Center to vertex
    pub hex_radius: f32,
    /// World position of the hexagon center
    pub hex_center: Vec2,
    /// Radians per second
    pub hex_angular_speed: f32,
    /// Rotation at tick 0 (radians)
    pub hex_start_angle: f32,

    // === Forces ===
    /// Downward acceleration (+y)
    pub gravity: f32,
    /// Fraction of velocity lost per reference tick (0 = none)
    pub air_drag: f32,
    /// Fraction of velocity kept after a bounce (1 = elastic)
    pub bounce_damping: f32,
    pub max_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// World position at tick 0
    pub ball_start_pos: Vec2,
    pub ball_start_vel: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        let hex_center = Vec2::new(VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0);
        Self {
            hex_radius: HEX_RADIUS,
            hex_center,
            hex_angular_speed: HEX_ANGULAR_SPEED,
            hex_start_angle: 0.0,

            gravity: GRAVITY,
            air_drag: AIR_DRAG,
            bounce_damping: BOUNCE_DAMPING,
            max_speed: MAX_SPEED,

            ball_radius: BALL_RADIUS,
            ball_start_pos: hex_center + Vec2::from(BALL_START_OFFSET),
            ball_start_vel: Vec2::from(BALL_START_VEL),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// [`load`](Self::load), falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    ///
    /// The kernel would accept any of these without panicking; this only
    /// catches configurations that make no physical sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("hex_radius", self.hex_radius)?;
        positive("ball_radius", self.ball_radius)?;
        positive("max_speed", self.max_speed)?;
        finite("hex_angular_speed", self.hex_angular_speed)?;
        finite("hex_start_angle", self.hex_start_angle)?;
        finite("gravity", self.gravity)?;
        finite_vec("hex_center", self.hex_center)?;
        finite_vec("ball_start_pos", self.ball_start_pos)?;
        finite_vec("ball_start_vel", self.ball_start_vel)?;

        if !(0.0..1.0).contains(&self.air_drag) {
            return Err(invalid("air_drag", self.air_drag, "must be in [0, 1)"));
        }
        if !(0.0..=1.0).contains(&self.bounce_damping) {
            return Err(invalid(
                "bounce_damping",
                self.bounce_damping,
                "must be in [0, 1]",
            ));
        }

        let geometry = HexGeometry::new(self.hex_radius);
        let frame = HexFrame::new(self.hex_center, self.hex_start_angle);
        if !geometry.contains_disc(frame.to_local_point(self.ball_start_pos), self.ball_radius) {
            return Err(ConfigError::Invalid {
                field: "ball_start_pos",
                value: format!("{:?}", self.ball_start_pos),
                reason: "ball must start fully inside the hexagon",
            });
        }

        Ok(())
    }
}

fn invalid(field: &'static str, value: f32, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        field,
        value: value.to_string(),
        reason,
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite and > 0"))
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn finite_vec(field: &'static str, value: Vec2) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value: format!("{value:?}"),
            reason: "must be finite",
        })
    }
}
