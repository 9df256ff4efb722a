//! Ball dynamics
//!
//! Explicit Euler under gravity, followed by a friction multiplier.

use glam::Vec2;

use crate::settings::{FrictionMode, Settings};

/// The bouncing ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Acceleration added to `vel.y` (positive y is down)
    pub gravity: f32,
    /// Velocity multiplier in (0, 1]
    pub friction: f32,
    pub friction_mode: FrictionMode,
    /// Step length at which time-scaled friction equals `friction`
    pub reference_dt: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, gravity: f32, friction: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            gravity,
            friction,
            friction_mode: FrictionMode::PerFrame,
            reference_dt: crate::consts::FRAME_INTERVAL_MS as f32 / 1000.0,
        }
    }

    /// Ball at `pos` with launch velocity and physics taken from settings
    pub fn from_settings(pos: Vec2, settings: &Settings) -> Self {
        Self {
            friction_mode: settings.friction_mode,
            reference_dt: settings.frame_interval_secs(),
            ..Self::new(
                pos,
                settings.initial_velocity(),
                settings.ball_radius,
                settings.gravity,
                settings.friction,
            )
        }
    }

    /// Velocity multiplier for a step of length `dt`
    pub fn damping(&self, dt: f32) -> f32 {
        match self.friction_mode {
            FrictionMode::PerFrame => self.friction,
            FrictionMode::TimeScaled => self.friction.powf(dt / self.reference_dt),
        }
    }

    /// Advance one step: gravity, then position, then friction
    pub fn integrate(&mut self, dt: f32) {
        self.vel.y += self.gravity * dt;
        self.pos += self.vel * dt;
        // Friction scales velocity only; this step's displacement is already applied
        self.vel *= self.damping(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integrate_reference_frame() {
        let center = Vec2::new(200.0, 200.0);
        let mut ball = Ball::new(center, Vec2::new(150.0, 0.0), 10.0, 200.0, 0.99);
        ball.integrate(0.02);

        assert!((ball.vel.x - 148.5).abs() < 1e-3);
        assert!((ball.vel.y - 3.96).abs() < 1e-4);

        let moved = ball.pos - center;
        assert!((moved.x - 3.0).abs() < 1e-4);
        assert!((moved.y - 0.08).abs() < 1e-4);
    }

    #[test]
    fn test_per_frame_friction_ignores_dt() {
        let ball = Ball::new(Vec2::ZERO, Vec2::X, 10.0, 0.0, 0.9);
        assert_eq!(ball.damping(0.001), 0.9);
        assert_eq!(ball.damping(1.0), 0.9);
        assert_eq!(ball.damping(0.0), 0.9);
    }

    #[test]
    fn test_time_scaled_friction() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::X, 10.0, 0.0, 0.9);
        ball.friction_mode = FrictionMode::TimeScaled;
        ball.reference_dt = 0.02;

        assert!((ball.damping(0.02) - 0.9).abs() < 1e-6);
        assert!((ball.damping(0.04) - 0.81).abs() < 1e-5);
        assert_eq!(ball.damping(0.0), 1.0);

        // Two half steps damp the same as one full step
        let mut a = ball.clone();
        let mut b = ball.clone();
        a.integrate(0.02);
        b.integrate(0.01);
        b.integrate(0.01);
        assert!((a.vel.length() - b.vel.length()).abs() < 1e-5);
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        settings.friction_mode = FrictionMode::TimeScaled;
        settings.frame_interval_ms = 10;
        let ball = Ball::from_settings(Vec2::new(1.0, 2.0), &settings);
        assert_eq!(ball.pos, Vec2::new(1.0, 2.0));
        assert_eq!(ball.vel, Vec2::new(150.0, 0.0));
        assert_eq!(ball.radius, 10.0);
        assert_eq!(ball.friction_mode, FrictionMode::TimeScaled);
        assert!((ball.reference_dt - 0.01).abs() < 1e-7);
    }

    proptest! {
        #[test]
        fn friction_alone_scales_speed(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            friction in 0.01f32..=1.0,
            dt in 0.0f32..0.1,
        ) {
            let mut ball = Ball::new(Vec2::ZERO, Vec2::new(vx, vy), 10.0, 0.0, friction);
            let before = ball.vel.length();
            ball.integrate(dt);
            let expected = friction * before;
            prop_assert!((ball.vel.length() - expected).abs() <= expected * 1e-5 + 1e-5);
        }
    }
}
