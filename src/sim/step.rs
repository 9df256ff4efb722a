//! Per-frame simulation step
//!
//! Order within a frame: rotate the hexagon, recompute its corners, move the
//! ball, then resolve the ball against the fresh corners. The step never
//! schedules itself; the host decides when to call it.

use super::ball::Ball;
use super::collision::resolve_polygon;
use super::hexagon::Hexagon;
use super::state::{Clock, Frame, SimState};

/// Advance the hexagon and ball by `dt` seconds
pub fn advance(hexagon: &mut Hexagon, ball: &mut Ball, dt: f32) -> Frame {
    hexagon.advance(dt);
    let vertices = hexagon.vertices();

    ball.integrate(dt);
    let hits = resolve_polygon(ball, &vertices);
    if hits > 0 {
        log::trace!("Ball hit {} wall(s) at ({:.1}, {:.1})", hits, ball.pos.x, ball.pos.y);
    }

    Frame::new(vertices, ball)
}

/// Advance one frame to host time `now` (seconds)
pub fn step(hexagon: &mut Hexagon, ball: &mut Ball, clock: &mut Clock, now: f64) -> Frame {
    let dt = clock.tick(now);
    advance(hexagon, ball, dt)
}

impl SimState {
    /// Advance one frame to host time `now` (seconds)
    pub fn step(&mut self, now: f64) -> Frame {
        self.frames += 1;
        step(&mut self.hexagon, &mut self.ball, &mut self.clock, now)
    }
}
