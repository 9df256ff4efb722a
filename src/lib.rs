//! Hex Bounce - a ball bouncing inside a spinning hexagon
//!
//! Core modules:
//! - `sim`: Simulation core (hexagon kinematics, ball dynamics, collisions)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Data-driven simulation tuning

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{FrictionMode, Settings};

use glam::Vec2;

/// Simulation configuration defaults
pub mod consts {
    /// Host tick interval in milliseconds (~50 frames per second)
    pub const FRAME_INTERVAL_MS: u32 = 20;
    /// Largest measured frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Initial viewport size
    pub const DEFAULT_WIDTH: u32 = 400;
    pub const DEFAULT_HEIGHT: u32 = 400;

    /// Hexagon side length as a fraction of the smaller viewport dimension
    pub const HEX_SIDE_FRACTION: f32 = 0.4;
    /// Hexagon rotation speed in degrees per second
    pub const HEX_ANGULAR_SPEED_DEG: f32 = 30.0;
    /// Number of hexagon vertices
    pub const HEX_VERTEX_COUNT: usize = 6;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_VEL: [f32; 2] = [150.0, 0.0];
    /// Gravity (pixels/s², positive y is down)
    pub const GRAVITY: f32 = 200.0;
    /// Velocity multiplier applied once per frame
    pub const FRICTION: f32 = 0.99;
}

/// Wrap an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-5);
        assert_eq!(wrap_angle(TAU), 0.0);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(2.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
    }
}
