//! Shape generation for 2D primitives
//!
//! All shapes are triangle lists in simulation (pixel) coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::Frame;
use crate::sim::hexagon::edges;

/// Segments used for the ball disc and its outline
pub const BALL_SEGMENTS: u32 = 32;
/// Hexagon outline width (pixels)
pub const HEXAGON_LINE_WIDTH: f32 = 2.0;
/// Ball outline width (pixels)
pub const BALL_OUTLINE_WIDTH: f32 = 1.0;
/// Vertices in one frame: hexagon quads, ball fan, ball outline ring
pub const FRAME_VERTEX_COUNT: usize =
    crate::consts::HEX_VERTEX_COUNT * 6 + BALL_SEGMENTS as usize * 3 + BALL_SEGMENTS as usize * 6;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        quad(&mut vertices, [inner1, outer1, inner2, outer2], color);
    }

    vertices
}

/// Generate vertices for a closed polygon outline
pub fn polygon_outline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 6);
    for (p1, p2) in edges(points) {
        push_line(&mut vertices, p1, p2, width, color);
    }
    vertices
}

/// Everything drawn for one simulation frame: hexagon outline, then the ball
pub fn frame_geometry(frame: &Frame) -> Vec<Vertex> {
    let ball = frame.ball;
    let mut vertices = polygon_outline(&frame.vertices, HEXAGON_LINE_WIDTH, colors::HEXAGON);
    vertices.extend(circle(ball.center, ball.radius, colors::BALL, BALL_SEGMENTS));
    vertices.extend(ring(
        ball.center,
        ball.radius - BALL_OUTLINE_WIDTH / 2.0,
        ball.radius + BALL_OUTLINE_WIDTH / 2.0,
        colors::BALL_OUTLINE,
        BALL_SEGMENTS,
    ));
    vertices
}

/// Thick segment as a quad, extended by half the width past both ends so
/// joined edges meet without a notch. Zero-length segments emit nothing.
fn push_line(vertices: &mut Vec<Vertex>, p1: Vec2, p2: Vec2, width: f32, color: [f32; 4]) {
    let dir = (p2 - p1).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let half = width / 2.0;
    let perp = dir.perp() * half;
    let a = p1 - dir * half;
    let b = p2 + dir * half;

    quad(vertices, [a + perp, a - perp, b + perp, b - perp], color);
}

/// Two triangles covering `[a0, a1, b0, b1]`, where a0/a1 and b0/b1 are opposite ends
fn quad(vertices: &mut Vec<Vertex>, [a0, a1, b0, b1]: [Vec2; 4], color: [f32; 4]) {
    vertices.push(Vertex::new(a0.x, a0.y, color));
    vertices.push(Vertex::new(a1.x, a1.y, color));
    vertices.push(Vertex::new(b0.x, b0.y, color));

    vertices.push(Vertex::new(b0.x, b0.y, color));
    vertices.push(Vertex::new(a1.x, a1.y, color));
    vertices.push(Vertex::new(b1.x, b1.y, color));
}
