//! Per-tick simulation step
//!
//! Order within a step: spin the hexagon, apply gravity and drag, cap the
//! speed, move the ball, then resolve it against the boundary in the
//! hexagon's local frame and write the result back to world space.

use glam::Vec2;

use super::collision::ball_segment_collision;
use super::geom::{FALLBACK_NORMAL, clamp_speed, normalize_or, reflect};
use super::hexagon::Edge;
use super::state::{SimPhase, SimState};
use crate::consts::DRAG_REFERENCE_RATE;

/// What the outside world supplies each tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Elapsed time (seconds)
    pub dt: f32,
    /// Stop the run; this and all later ticks do nothing
    pub stop_requested: bool,
}

/// A resolved boundary contact, in the hexagon's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Ball position after the summed corrections
    pub pos: Vec2,
    /// Reflected and damped velocity
    pub vel: Vec2,
    /// Combined unit normal the velocity was reflected about
    pub normal: Vec2,
    /// Sum of every edge's correction
    pub correction: Vec2,
    /// How many edges reported a hit
    pub edges_hit: usize,
}

/// Advance the simulation by one tick of external input
///
/// Returns the contact resolved this tick, if any.
pub fn tick(state: &mut SimState, input: &TickInput) -> Option<Contact> {
    if input.stop_requested && state.phase == SimPhase::Running {
        log::info!("Stop requested after {} ticks", state.time_ticks);
        state.phase = SimPhase::Stopped;
    }

    if state.phase == SimPhase::Stopped {
        return None;
    }

    if input.dt.is_nan() || input.dt < 0.0 {
        log::warn!("Ignoring tick with invalid dt {}", input.dt);
        return None;
    }

    state.time_ticks += 1;
    let contact = step(state, input.dt);

    if let Some(c) = &contact {
        log::trace!(
            "tick {}: {} edge(s) hit, normal ({:.3}, {:.3})",
            state.time_ticks,
            c.edges_hit,
            c.normal.x,
            c.normal.y
        );
    }

    contact
}

/// Run one physics step of `dt` seconds
///
/// No substepping: a large `dt` can carry the ball straight through an edge.
pub fn step(state: &mut SimState, dt: f32) -> Option<Contact> {
    let cfg = &state.config;

    state.hexagon.advance(dt);

    let ball = &mut state.ball;
    ball.vel = apply_gravity(ball.vel, cfg.gravity, dt);
    ball.vel = apply_drag(ball.vel, cfg.air_drag, dt);
    ball.vel = clamp_speed(ball.vel, cfg.max_speed);
    ball.pos += ball.vel * dt;

    let frame = state.hexagon.frame();
    let local_pos = frame.to_local_point(ball.pos);
    let local_vel = frame.to_local_vector(ball.vel);

    let contact = resolve_boundary(
        local_pos,
        local_vel,
        ball.radius,
        &state.geometry.edges,
        cfg.bounce_damping,
    )?;

    ball.pos = frame.to_world_point(contact.pos);
    ball.vel = frame.to_world_vector(contact.vel);
    Some(contact)
}

#[inline]
pub fn apply_gravity(vel: Vec2, gravity: f32, dt: f32) -> Vec2 {
    Vec2::new(vel.x, vel.y + gravity * dt)
}

/// Exponential drag, expressed per reference tick so the decay per second
/// does not depend on the actual tick rate
#[inline]
pub fn apply_drag(vel: Vec2, drag: f32, dt: f32) -> Vec2 {
    vel * (1.0 - drag).powf(dt * DRAG_REFERENCE_RATE)
}

/// Test the ball against every edge and resolve all hits at once
///
/// Corrections from every hit edge are summed, not capped, so a tight corner
/// can push the ball a little further than strictly needed. Normals are summed
/// and normalized; if they cancel, the direction from the hexagon center to
/// the ball is used, then [`FALLBACK_NORMAL`].
pub fn resolve_boundary(
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    edges: &[Edge],
    damping: f32,
) -> Option<Contact> {
    let mut correction = Vec2::ZERO;
    let mut normal_sum = Vec2::ZERO;
    let mut edges_hit = 0;

    for edge in edges {
        let hit = ball_segment_collision(pos, vel, radius, edge);
        if hit.hit {
            correction += hit.correction;
            normal_sum += hit.normal;
            edges_hit += 1;
        }
    }

    if edges_hit == 0 {
        return None;
    }

    let pos = pos + correction;
    let normal = normalize_or(normal_sum, normalize_or(pos, FALLBACK_NORMAL));
    let vel = reflect(vel, normal) * damping;

    Some(Contact {
        pos,
        vel,
        normal,
        correction,
        edges_hit,
    })
}
