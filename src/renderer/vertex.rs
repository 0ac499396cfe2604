//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements, as sRGB-encoded channels (CSS byte / 255)
pub mod colors {
    /// LightSeaGreen, #20b2aa
    pub const SKY: [f32; 4] = [0.125, 0.698, 0.667, 1.0];
    pub const PLANE: [f32; 4] = [0.97, 0.97, 0.95, 1.0];
    pub const PLANE_FOLD: [f32; 4] = [0.78, 0.80, 0.82, 1.0];
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
    pub const GUIDE: [f32; 4] = [1.0, 1.0, 1.0, crate::consts::GUIDE_ALPHA];
}

/// Decode one sRGB-encoded channel to linear light
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A scene color as the target surface expects it.
///
/// sRGB surfaces encode on write, so they are fed linear values. Alpha is
/// never encoded.
pub fn surface_color(color: [f32; 4], srgb_surface: bool) -> [f32; 4] {
    if !srgb_surface {
        return color;
    }
    let [r, g, b, a] = color;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What an sRGB surface stores for a linear channel, as a byte
    fn encoded_byte(linear: f32) -> u8 {
        let c = if linear <= 0.003_130_8 {
            linear * 12.92
        } else {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        };
        (c * 255.0).round() as u8
    }

    #[test]
    fn test_sky_reaches_srgb_surface_as_light_sea_green() {
        let [r, g, b, a] = surface_color(colors::SKY, true);
        assert_eq!((encoded_byte(r), encoded_byte(g), encoded_byte(b)), (0x20, 0xb2, 0xaa));
        assert_eq!(a, 1.0);
        assert!((r - 0.01435).abs() < 1e-4);
    }

    #[test]
    fn test_unorm_surface_takes_colors_unchanged() {
        assert_eq!(surface_color(colors::SKY, false), colors::SKY);
        assert_eq!(surface_color(colors::GUIDE, false), colors::GUIDE);
    }

    #[test]
    fn test_alpha_is_not_decoded() {
        assert_eq!(surface_color(colors::GUIDE, true)[3], crate::consts::GUIDE_ALPHA);
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    }
}
