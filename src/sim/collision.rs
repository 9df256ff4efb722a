//! Collision detection and response against the hexagon walls
//!
//! Each edge is treated as the infinite line through it: the ball collides
//! when its center is closer than `radius` to that line on the inner side,
//! wherever it sits along the edge. This is cheap and stable for a small ball
//! in a large convex polygon, and it shapes how bounces near corners look.

use glam::Vec2;

use super::ball::Ball;
use super::hexagon::edges;

/// Result of a ball-vs-edge check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the ball overlaps the edge's half-plane band
    pub hit: bool,
    /// Foot of the perpendicular from the ball center onto the edge line
    pub point: Vec2,
    /// Unit normal pointing into the polygon
    pub normal: Vec2,
    /// Signed distance from ball center to the edge line along `normal`
    pub distance: f32,
    /// How far the ball must move along `normal` to just touch the line
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            distance: f32::MAX,
            penetration: 0.0,
        }
    }
}

/// Inward unit normal of the edge `p1 -> p2`
///
/// Returns `None` for a zero-length edge. With vertices in increasing-angle
/// order the left-hand perpendicular points into the polygon.
#[inline]
pub fn edge_inward_normal(p1: Vec2, p2: Vec2) -> Option<Vec2> {
    let e = p2 - p1;
    Vec2::new(-e.y, e.x).try_normalize()
}

/// Check a ball against the line through one polygon edge
///
/// The comparison is strict: a ball exactly `radius` from the line does not
/// collide. Degenerate edges never collide.
pub fn ball_edge_collision(ball_pos: Vec2, ball_radius: f32, p1: Vec2, p2: Vec2) -> CollisionResult {
    let Some(normal) = edge_inward_normal(p1, p2) else {
        return CollisionResult::miss();
    };

    let distance = (ball_pos - p1).dot(normal);
    if distance < ball_radius {
        CollisionResult {
            hit: true,
            point: ball_pos - normal * distance,
            normal,
            distance,
            penetration: ball_radius - distance,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Bounce the ball off one edge if it overlaps it. Returns true on contact.
pub fn resolve_edge(ball: &mut Ball, p1: Vec2, p2: Vec2) -> bool {
    let result = ball_edge_collision(ball.pos, ball.radius, p1, p2);
    if !result.hit {
        return false;
    }

    ball.vel = reflect_velocity(ball.vel, result.normal);
    ball.pos += result.normal * result.penetration;
    log::trace!(
        "Wall contact at ({:.1}, {:.1}): depth {:.3}, normal ({:.3}, {:.3})",
        result.point.x,
        result.point.y,
        result.penetration,
        result.normal.x,
        result.normal.y
    );
    true
}

/// Resolve the ball against every edge of a closed polygon, in vertex order
///
/// Each edge sees the position and velocity left by the previous one; the
/// pass runs once, it is not iterated to convergence. Returns the number of
/// edges that were hit.
pub fn resolve_polygon(ball: &mut Ball, vertices: &[Vec2]) -> usize {
    let mut hits = 0;
    for (p1, p2) in edges(vertices) {
        if resolve_edge(ball, p1, p2) {
            hits += 1;
        }
    }
    hits
}
