//! Ball vs. boundary segment
//!
//! Static overlap test between a disc and one edge, both in the hexagon's
//! local frame. Produces the push-out normal and the correction that leaves
//! the disc exactly tangent to the edge.

use glam::Vec2;

use super::geom::{FALLBACK_NORMAL, length, normalize_or};
use super::hexagon::Edge;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the disc overlaps the edge
    pub hit: bool,
    /// Unit normal from the edge toward the disc center (zero on a miss)
    pub normal: Vec2,
    /// Displacement to add to the disc center to separate it (zero on a miss)
    pub correction: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            correction: Vec2::ZERO,
        }
    }

    fn contact(normal: Vec2, depth: f32) -> Self {
        Self {
            hit: true,
            normal,
            correction: normal * depth,
        }
    }
}

/// Check a disc at `center` with `radius` against `edge`
///
/// Exactly touching (distance == radius) is not a hit. Fallback normals:
/// - zero-length edge with the center on its point: [`FALLBACK_NORMAL`]
/// - center lying on the edge: the edge's left-hand perpendicular
///
/// `_velocity` is unused by the static test; it keeps the signature ready
/// for a swept version.
pub fn ball_segment_collision(
    center: Vec2,
    _velocity: Vec2,
    radius: f32,
    edge: &Edge,
) -> CollisionResult {
    let ab = edge.direction();

    if ab.x * ab.x + ab.y * ab.y == 0.0 {
        // Degenerate edge: a single point
        let offset = center - edge.a;
        let dist = length(offset);
        if dist < radius {
            return CollisionResult::contact(normalize_or(offset, FALLBACK_NORMAL), radius - dist);
        }
        return CollisionResult::miss();
    }

    let closest = edge.closest_point(center);
    let offset = center - closest;
    let dist = length(offset);
    if dist >= radius {
        return CollisionResult::miss();
    }

    let perp = normalize_or(Vec2::new(-ab.y, ab.x), FALLBACK_NORMAL);
    CollisionResult::contact(normalize_or(offset, perp), radius - dist)
}
