//! Rotating regular hexagon
//!
//! The hexagon's circumradius equals its side length, so every vertex sits
//! `side_length` away from `center`. Vertices are produced in order of
//! increasing angle, which makes `(-e.y, e.x)` the inward normal of each edge.

use glam::Vec2;
use std::f32::consts::FRAC_PI_3;

use crate::consts::HEX_VERTEX_COUNT;
use crate::{polar_to_cartesian, wrap_angle};

/// The six hexagon corners, in edge order
pub type Vertices = [Vec2; HEX_VERTEX_COUNT];

/// A regular hexagon spinning about its center
#[derive(Debug, Clone, PartialEq)]
pub struct Hexagon {
    pub center: Vec2,
    pub side_length: f32,
    /// Current rotation (radians, always in [0, 2π))
    pub angle: f32,
    /// Rotation speed (radians/sec)
    pub angular_speed: f32,
}

impl Hexagon {
    pub fn new(center: Vec2, side_length: f32, angular_speed: f32) -> Self {
        Self {
            center,
            side_length,
            angle: 0.0,
            angular_speed,
        }
    }

    /// Hexagon centered in a viewport, sized to `side_fraction` of its smaller dimension
    pub fn fitted(width: f32, height: f32, side_fraction: f32, angular_speed: f32) -> Self {
        let mut hexagon = Self::new(Vec2::ZERO, 0.0, angular_speed);
        hexagon.fit_viewport(width, height, side_fraction);
        hexagon
    }

    /// Re-center and re-size for a new viewport
    pub fn fit_viewport(&mut self, width: f32, height: f32, side_fraction: f32) {
        self.center = Vec2::new(width / 2.0, height / 2.0);
        self.side_length = width.min(height) * side_fraction;
    }

    /// Rotate by `angular_speed * dt`
    pub fn advance(&mut self, dt: f32) {
        self.angle = wrap_angle(self.angle + self.angular_speed * dt);
    }

    /// Corner positions for the current angle
    pub fn vertices(&self) -> Vertices {
        std::array::from_fn(|i| {
            self.center + polar_to_cartesian(self.side_length, self.angle + i as f32 * FRAC_PI_3)
        })
    }

    /// Distance from center to each edge's midpoint
    pub fn apothem(&self) -> f32 {
        self.side_length * FRAC_PI_3.sin()
    }
}

/// Edges of a closed polygon as `(p1, p2)` pairs, vertex i to vertex i+1 mod n
pub fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_fit_viewport_uses_smaller_dimension() {
        let mut hexagon = Hexagon::fitted(400.0, 400.0, 0.4, 0.0);
        assert!((hexagon.side_length - 160.0).abs() < 1e-4);
        assert_eq!(hexagon.center, Vec2::new(200.0, 200.0));

        hexagon.fit_viewport(800.0, 400.0, 0.4);
        assert!((hexagon.side_length - 160.0).abs() < 1e-4);
        assert_eq!(hexagon.center, Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_vertices_at_zero_angle() {
        let hexagon = Hexagon::new(Vec2::new(10.0, 20.0), 100.0, 0.0);
        let v = hexagon.vertices();
        assert!((v[0] - Vec2::new(110.0, 20.0)).length() < 1e-4);
        assert!((v[3] - Vec2::new(-90.0, 20.0)).length() < 1e-3);
    }

    #[test]
    fn test_vertices_follow_angle() {
        let mut hexagon = Hexagon::new(Vec2::ZERO, 100.0, FRAC_PI_3);
        let before = hexagon.vertices();
        hexagon.advance(1.0);
        let after = hexagon.vertices();
        // One sixth of a turn maps each corner onto the next
        for i in 0..6 {
            assert!((after[i] - before[(i + 1) % 6]).length() < 1e-3);
        }
    }

    #[test]
    fn test_edges_wrap_around() {
        let hexagon = Hexagon::new(Vec2::ZERO, 50.0, 0.0);
        let v = hexagon.vertices();
        let edges: Vec<_> = edges(&v).collect();
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[5], (v[5], v[0]));
        for (p1, p2) in edges {
            assert!(((p2 - p1).length() - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_apothem() {
        let hexagon = Hexagon::new(Vec2::ZERO, 160.0, 0.0);
        assert!((hexagon.apothem() - 138.564).abs() < 1e-2);
    }

    proptest! {
        #[test]
        fn angle_stays_wrapped(
            speed in -20.0f32..20.0,
            dts in proptest::collection::vec(0.0f32..1.0, 1..200),
        ) {
            let mut hexagon = Hexagon::new(Vec2::ZERO, 100.0, speed);
            for dt in dts {
                hexagon.advance(dt);
                prop_assert!(hexagon.angle >= 0.0 && hexagon.angle < TAU);
            }
        }

        #[test]
        fn vertices_are_regular(
            cx in -1000.0f32..1000.0,
            cy in -1000.0f32..1000.0,
            side in 1.0f32..500.0,
            angle in 0.0f32..TAU,
        ) {
            let hexagon = Hexagon {
                center: Vec2::new(cx, cy),
                side_length: side,
                angle,
                angular_speed: 0.0,
            };
            let v = hexagon.vertices();
            for i in 0..6 {
                let a = v[i] - hexagon.center;
                let b = v[(i + 1) % 6] - hexagon.center;
                prop_assert!((a.length() - side).abs() <= side * 1e-3 + 1e-2);
                // cos(60°) between consecutive corners, counter-clockwise in (x, y)
                let cos = a.dot(b) / (a.length() * b.length());
                prop_assert!((cos - 0.5).abs() < 1e-3);
                prop_assert!(a.perp_dot(b) > 0.0);
            }
        }
    }
}
