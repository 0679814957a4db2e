//! World <-> hexagon-local coordinate transform
//!
//! Collision math runs in the hexagon's own frame, where the boundary never
//! moves. Positions are translated then rotated; velocities only rotated.

use glam::Vec2;

use super::geom::rotate_point;

/// The hexagon's placement in world space at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexFrame {
    pub center: Vec2,
    /// Rotation of the local axes relative to the world axes (radians)
    pub angle: f32,
}

impl HexFrame {
    pub fn new(center: Vec2, angle: f32) -> Self {
        Self { center, angle }
    }

    #[inline]
    pub fn to_local_point(&self, world: Vec2) -> Vec2 {
        rotate_point(world - self.center, -self.angle)
    }

    #[inline]
    pub fn to_local_vector(&self, world: Vec2) -> Vec2 {
        rotate_point(world, -self.angle)
    }

    #[inline]
    pub fn to_world_point(&self, local: Vec2) -> Vec2 {
        rotate_point(local, self.angle) + self.center
    }

    #[inline]
    pub fn to_world_vector(&self, local: Vec2) -> Vec2 {
        rotate_point(local, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_local_axes_follow_rotation() {
        // A quarter turn puts the local +x axis along world +y
        let frame = HexFrame::new(Vec2::new(100.0, 50.0), FRAC_PI_2);
        let world = frame.to_world_point(Vec2::new(10.0, 0.0));
        assert!((world - Vec2::new(100.0, 60.0)).length() < 1e-4);

        let local = frame.to_local_point(Vec2::new(100.0, 60.0));
        assert!((local - Vec2::new(10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_vectors_ignore_center() {
        let frame = HexFrame::new(Vec2::new(450.0, 300.0), 0.0);
        let v = Vec2::new(120.0, -7.0);
        assert_eq!(frame.to_local_vector(v), v);
        assert_eq!(frame.to_world_vector(v), v);
        assert_eq!(frame.to_local_point(Vec2::new(450.0, 300.0)), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn point_round_trip(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            angle in -50.0f32..50.0,
        ) {
            let frame = HexFrame::new(Vec2::new(cx, cy), angle);
            let p = Vec2::new(x, y);
            let back = frame.to_world_point(frame.to_local_point(p));
            prop_assert!((back - p).length() < 1e-2);
        }

        #[test]
        fn vector_transform_preserves_speed(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            angle in -50.0f32..50.0,
        ) {
            let frame = HexFrame::new(Vec2::ZERO, angle);
            let v = Vec2::new(x, y);
            prop_assert!((frame.to_local_vector(v).length() - v.length()).abs() < 1e-2);
        }
    }
}
