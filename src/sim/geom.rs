//! Small vector helpers shared by the collision and tick code
//!
//! All functions are total: zero-length inputs produce zero or the caller's
//! fallback, never a panic.

use glam::Vec2;

/// Normal used when every other way of picking one degenerates (points -y, "up" on screen)
pub const FALLBACK_NORMAL: Vec2 = Vec2::NEG_Y;

/// Added to the speed before dividing in [`clamp_speed`]
const SPEED_EPSILON: f32 = 1e-8;

/// Rotate a point counter-clockwise (in +x toward +y) about the origin
#[inline]
pub fn rotate_point(p: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Reflect a vector about a unit normal: v' = v - 2(v·n)n
///
/// `normal` must be unit length. A zero normal returns `v` unchanged, so
/// callers pick a fallback with [`normalize_or`] first.
#[inline]
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - 2.0 * dot(v, normal) * normal
}

#[inline]
pub fn length(v: Vec2) -> f32 {
    v.x.hypot(v.y)
}

/// Unit vector in the direction of `v`, or zero for the zero vector
///
/// Non-finite input is passed through rather than zeroed.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = length(v);
    if len == 0.0 { Vec2::ZERO } else { v / len }
}

/// [`normalize`], substituting `fallback` when `v` is the zero vector
#[inline]
pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let n = normalize(v);
    if n == Vec2::ZERO { fallback } else { n }
}

#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(v))
}

/// Rescale `vel` down to `max_speed` if it is faster, keeping its direction
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = length(vel);
    if speed > max_speed {
        vel * (max_speed / (speed + SPEED_EPSILON))
    } else {
        vel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_rotate_quarter_turn() {
        let p = rotate_point(Vec2::new(1.0, 0.0), PI / 2.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_off_floor() {
        // Falling onto a floor whose normal points up (-y)
        let v = reflect(Vec2::new(30.0, 100.0), Vec2::NEG_Y);
        assert!((v.x - 30.0).abs() < 1e-4);
        assert!((v.y + 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_reflect_zero_normal_is_identity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(reflect(v, Vec2::ZERO), v);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
        let n = normalize(Vec2::new(3.0, 4.0));
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_or_fallback() {
        assert_eq!(normalize_or(Vec2::ZERO, FALLBACK_NORMAL), Vec2::new(0.0, -1.0));
        assert_eq!(normalize_or(Vec2::new(0.0, 5.0), FALLBACK_NORMAL), Vec2::Y);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_clamp_speed() {
        let v = clamp_speed(Vec2::new(3000.0, 0.0), 2000.0);
        assert!((length(v) - 2000.0).abs() < 1e-2);
        assert!(v.y.abs() < 1e-6);
        assert!(v.x > 0.0);

        // Under the cap: untouched
        let slow = Vec2::new(300.0, -400.0);
        assert_eq!(clamp_speed(slow, 2000.0), slow);
    }

    proptest! {
        #[test]
        fn rotation_round_trip(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            angle in -20.0f32..20.0,
        ) {
            let p = Vec2::new(x, y);
            let back = rotate_point(rotate_point(p, angle), -angle);
            prop_assert!((back - p).length() < 5e-3);
        }

        #[test]
        fn rotation_preserves_length(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            angle in -20.0f32..20.0,
        ) {
            let p = Vec2::new(x, y);
            prop_assert!((length(rotate_point(p, angle)) - length(p)).abs() < 5e-3);
        }

        #[test]
        fn reflection_preserves_speed(
            vx in -2000.0f32..2000.0,
            vy in -2000.0f32..2000.0,
            theta in 0.0f32..std::f32::consts::TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let n = Vec2::new(theta.cos(), theta.sin());
            let r = reflect(v, n);
            prop_assert!((length(r) - length(v)).abs() < 1e-2);
        }
    }
}
