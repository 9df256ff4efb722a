//! Simulation module
//!
//! All physics lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Time only enters through the timestamps or deltas passed in
//! - Stable iteration order (edges in vertex order)

pub mod ball;
pub mod collision;
pub mod hexagon;
pub mod state;
pub mod step;

pub use ball::Ball;
pub use collision::{CollisionResult, ball_edge_collision, reflect_velocity, resolve_polygon};
pub use hexagon::{Hexagon, Vertices};
pub use state::{Circle, Clock, Frame, SimState, initialize};
pub use step::{advance, step};
