//! Simulation kernel
//!
//! Pure and single-threaded: no timers, I/O or rendering. The caller owns the
//! clock and hands each tick a `dt`; everything else is plain value state.
//! - Collision math runs in the hexagon's local frame (see [`frame`])
//! - One combined resolution per tick, however many edges are touched

pub mod collision;
pub mod frame;
pub mod geom;
pub mod hexagon;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_segment_collision};
pub use frame::HexFrame;
pub use geom::{clamp, clamp_speed, dot, length, normalize, normalize_or, reflect, rotate_point};
pub use hexagon::{Edge, HEX_SIDES, HexGeometry, hex_edges, hex_vertices};
pub use state::{Ball, Hexagon, SimPhase, SimState, Snapshot};
pub use tick::{Contact, TickInput, resolve_boundary, step, tick};
