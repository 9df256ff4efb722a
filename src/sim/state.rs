//! Simulation state and renderable snapshot types

use glam::Vec2;
use serde::Serialize;

use super::ball::Ball;
use super::hexagon::{Hexagon, Vertices};
use crate::settings::Settings;

/// Frame timer: turns host timestamps into step lengths
#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    /// Timestamp of the previous step (seconds)
    pub last_timestamp: f64,
    /// Longest step handed to the simulation (seconds)
    pub max_dt: f32,
}

impl Clock {
    pub fn new(now: f64, max_dt: f32) -> Self {
        Self {
            last_timestamp: now,
            max_dt,
        }
    }

    /// Elapsed seconds since the previous call, clamped to `[0, max_dt]`
    ///
    /// A clock that runs backwards yields 0. A non-finite timestamp also
    /// yields 0 and is not kept, so the next good one measures from the last.
    pub fn tick(&mut self, now: f64) -> f32 {
        if !now.is_finite() {
            return 0.0;
        }
        let elapsed = (now - self.last_timestamp) as f32;
        self.last_timestamp = now;

        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0.0;
        }
        if elapsed > self.max_dt {
            log::debug!("Frame took {:.3}s, clamping to {:.3}s", elapsed, self.max_dt);
            return self.max_dt;
        }
        elapsed
    }
}

/// A circle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Hexagon outline, in edge order
    pub vertices: Vertices,
    pub ball: Circle,
}

impl Frame {
    pub fn new(vertices: Vertices, ball: &Ball) -> Self {
        Self {
            vertices,
            ball: Circle {
                center: ball.pos,
                radius: ball.radius,
            },
        }
    }
}

/// Create the hexagon, the ball at its center, and the clock
pub fn initialize(width: f32, height: f32, settings: &Settings, now: f64) -> (Hexagon, Ball, Clock) {
    let hexagon = Hexagon::fitted(width, height, settings.side_fraction, settings.angular_speed());
    let ball = Ball::from_settings(hexagon.center, settings);
    let clock = Clock::new(now, settings.max_frame_dt);
    (hexagon, ball, clock)
}

/// The whole simulation, owned by the host's frame loop
#[derive(Debug, Clone)]
pub struct SimState {
    pub hexagon: Hexagon,
    pub ball: Ball,
    pub clock: Clock,
    /// Hexagon side length as a fraction of the smaller viewport dimension
    pub side_fraction: f32,
    /// Number of steps taken
    pub frames: u64,
}

impl SimState {
    pub fn new(width: f32, height: f32, settings: &Settings, now: f64) -> Self {
        let (hexagon, ball, clock) = initialize(width, height, settings, now);
        log::info!(
            "Simulation initialized: {}x{} viewport, side {:.1}, ball at ({:.1}, {:.1})",
            width,
            height,
            hexagon.side_length,
            ball.pos.x,
            ball.pos.y
        );
        Self {
            hexagon,
            ball,
            clock,
            side_fraction: settings.side_fraction,
            frames: 0,
        }
    }

    /// Refit the hexagon to a new viewport. The ball keeps its position.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.hexagon.fit_viewport(width, height, self.side_fraction);
        log::debug!(
            "Resized to {}x{}: center ({:.1}, {:.1}), side {:.1}",
            width,
            height,
            self.hexagon.center.x,
            self.hexagon.center.y,
            self.hexagon.side_length
        );
    }

    /// Current geometry without advancing time
    pub fn frame(&self) -> Frame {
        Frame::new(self.hexagon.vertices(), &self.ball)
    }
}
