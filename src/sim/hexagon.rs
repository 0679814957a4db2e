//! Regular hexagon boundary in its own (unrotated) frame
//!
//! Vertex `i` sits at angle `60°·i - 30°` from the local origin. Edges join
//! consecutive vertices and wrap, so the winding is counter-clockwise in
//! +x/+y terms and the origin is always to the left of every edge.

use glam::Vec2;

use super::frame::HexFrame;
use super::geom::{clamp, dot, length};
use crate::polar_to_cartesian;

pub const HEX_SIDES: usize = 6;

/// A boundary segment in the hexagon's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: Vec2,
    pub b: Vec2,
}

impl Edge {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    /// Point on the segment closest to `p`
    ///
    /// A zero-length edge collapses to its single point.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        let ab = self.direction();
        let len2 = dot(ab, ab);
        if len2 == 0.0 {
            return self.a;
        }
        let t = clamp(dot(p - self.a, ab) / len2, 0.0, 1.0);
        self.a + ab * t
    }

    /// Distance from `p` to the edge's line, positive on the interior (left) side
    ///
    /// A zero-length edge has no side; the plain distance to its point is returned.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        let ab = self.direction();
        let len = length(ab);
        if len == 0.0 {
            return length(p - self.a);
        }
        ab.perp_dot(p - self.a) / len
    }
}

/// Vertices of a regular hexagon with circumradius `radius`
pub fn hex_vertices(radius: f32) -> [Vec2; HEX_SIDES] {
    std::array::from_fn(|i| {
        let theta = (60.0 * i as f32 - 30.0).to_radians();
        polar_to_cartesian(radius, theta)
    })
}

/// Edge `i` runs from vertex `i` to vertex `(i + 1) % 6`
pub fn hex_edges(vertices: &[Vec2; HEX_SIDES]) -> [Edge; HEX_SIDES] {
    std::array::from_fn(|i| Edge::new(vertices[i], vertices[(i + 1) % HEX_SIDES]))
}

/// Fixed local geometry of the boundary, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct HexGeometry {
    /// Center to vertex
    pub radius: f32,
    pub vertices: [Vec2; HEX_SIDES],
    pub edges: [Edge; HEX_SIDES],
}

impl HexGeometry {
    pub fn new(radius: f32) -> Self {
        let vertices = hex_vertices(radius);
        let edges = hex_edges(&vertices);
        Self {
            radius,
            vertices,
            edges,
        }
    }

    /// Center to edge midpoint (apothem)
    #[inline]
    pub fn inradius(&self) -> f32 {
        self.radius * 3.0_f32.sqrt() / 2.0
    }

    /// Whether a disc centered at local point `p` fits inside without touching any edge
    pub fn contains_disc(&self, p: Vec2, radius: f32) -> bool {
        self.edges.iter().all(|e| e.signed_distance(p) > radius)
    }

    /// Vertices placed in world space for drawing
    pub fn world_vertices(&self, frame: &HexFrame) -> [Vec2; HEX_SIDES] {
        self.vertices.map(|v| frame.to_world_point(v))
    }
}
