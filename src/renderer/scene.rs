//! Scene assembly
//!
//! Turns a finished frame into one pixel-space triangle list, back to front:
//! clouds, heading guide, plane.

use super::shapes::{place, thick_line};
use super::vertex::{Vertex, colors};
use crate::assets::Assets;
use crate::consts::*;
use crate::driver::FrameView;
use crate::heading_vector;
use crate::settings::Settings;
use crate::sim::Viewport;

pub fn build_scene(
    frame: &FrameView<'_>,
    assets: &Assets,
    settings: &Settings,
    viewport: Viewport,
) -> Vec<Vertex> {
    let cloud_count = frame.trail.len();
    let mut vertices =
        Vec::with_capacity(cloud_count * assets.cloud.len() + assets.plane.len() + 6);

    for marker in frame.trail.iter() {
        place(&assets.cloud, marker.pos.as_vec2(), 0.0, CLOUD_SCALE, &mut vertices);
    }

    // Flight state is double precision; vertices are not
    let pos = frame.airplane.pos.as_vec2();
    let rotation = frame.airplane.rotation() as f32;
    if settings.guide_line {
        let dir = heading_vector(rotation);
        let from = pos + dir * GUIDE_START;
        let to = pos + dir * viewport.height as f32;
        vertices.extend(thick_line(from, to, GUIDE_WIDTH, colors::GUIDE));
    }

    place(&assets.plane, pos, rotation, 1.0, &mut vertices);
    vertices
}
