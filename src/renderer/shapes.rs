//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::rotate_local;

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

/// A single filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a straight band of `width` from `from` to `to`
pub fn thick_line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let v1a = from + perp;
    let v1b = from - perp;
    let v2a = to + perp;
    let v2b = to - perp;

    // Two triangles
    vec![
        Vertex::new(v1a.x, v1a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2b.x, v2b.y, color),
    ]
}

/// Place a sprite-local mesh: scale, rotate about the origin, then move to `pos`
pub fn place(mesh: &[Vertex], pos: Vec2, rotation: f32, scale: f32, out: &mut Vec<Vertex>) {
    out.reserve(mesh.len());
    out.extend(mesh.iter().map(|v| {
        let local = Vec2::from(v.position) * scale;
        let world = rotate_local(local, rotation) + pos;
        Vertex::new(world.x, world.y, v.color)
    }));
}

/// Axis-aligned bounds of a mesh as (min, max)
pub fn bounds(mesh: &[Vertex]) -> Option<(Vec2, Vec2)> {
    let mut iter = mesh.iter().map(|v| Vec2::from(v.position));
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, WHITE, 12);
        assert_eq!(verts.len(), 36);
        let (lo, hi) = bounds(&verts).unwrap();
        assert!((hi.x - 10.0).abs() < 1e-4);
        assert!((lo.x + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_thick_line_width() {
        let verts = thick_line(Vec2::ZERO, Vec2::new(0.0, -100.0), 10.0, WHITE);
        assert_eq!(verts.len(), 6);
        let (lo, hi) = bounds(&verts).unwrap();
        assert!((hi.x - lo.x - 10.0).abs() < 1e-4);
        assert!((hi.y - lo.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(thick_line(Vec2::ONE, Vec2::ONE, 4.0, WHITE).is_empty());
    }

    #[test]
    fn test_place_rotates_then_translates() {
        let mesh = [Vertex::new(0.0, -10.0, WHITE)];
        let mut out = Vec::new();
        place(&mesh, Vec2::new(100.0, 50.0), FRAC_PI_2, 2.0, &mut out);
        // Nose rotated a quarter turn clockwise points along +x
        assert!((out[0].position[0] - 120.0).abs() < 1e-4);
        assert!((out[0].position[1] - 50.0).abs() < 1e-4);
    }
}
