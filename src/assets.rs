//! Named sprite assets
//!
//! The plane and cloud are built procedurally as triangle meshes in
//! sprite-local pixels (origin at the sprite centre, nose toward -y).
//! They are resolved by name once, before the first frame.

use glam::Vec2;

use crate::error::AssetError;
use crate::renderer::shapes::{circle, triangle};
use crate::renderer::vertex::{Vertex, colors};
use crate::settings::QualityPreset;

pub const PLANE: &str = "plane";
pub const CLOUD: &str = "cloud";

/// Native width of the cloud asset in pixels, before trail scaling
pub const CLOUD_NATIVE_SIZE: f32 = 512.0;
/// Plane nose-to-tail length in pixels
pub const PLANE_LENGTH: f32 = 50.0;

/// Resolve a named asset into a mesh
pub fn resolve(name: &str, quality: QualityPreset) -> Result<Vec<Vertex>, AssetError> {
    let (label, mesh) = match name {
        PLANE => (PLANE, plane_mesh()),
        CLOUD => (CLOUD, cloud_mesh(quality.circle_segments())),
        other => return Err(AssetError::Unknown(other.to_string())),
    };
    if mesh.is_empty() {
        return Err(AssetError::Empty(label));
    }
    Ok(mesh)
}

/// Both sprites the scene needs
#[derive(Debug, Clone)]
pub struct Assets {
    pub plane: Vec<Vertex>,
    pub cloud: Vec<Vertex>,
}

impl Assets {
    pub fn load(quality: QualityPreset) -> Result<Self, AssetError> {
        let plane = resolve(PLANE, quality)?;
        let cloud = resolve(CLOUD, quality)?;
        log::info!(
            "Loaded assets: plane ({} verts), cloud ({} verts)",
            plane.len(),
            cloud.len()
        );
        Ok(Self { plane, cloud })
    }
}

/// Paper airplane seen from above: two wings split by a darker centre fold
fn plane_mesh() -> Vec<Vertex> {
    let half = PLANE_LENGTH / 2.0;
    let nose = Vec2::new(0.0, -half);
    let tail = Vec2::new(0.0, half * 0.6);
    let left_tip = Vec2::new(-half * 0.8, half);
    let right_tip = Vec2::new(half * 0.8, half);
    let fold = Vec2::new(0.0, half);

    let mut verts = triangle(nose, left_tip, tail, colors::PLANE);
    verts.extend(triangle(nose, tail, right_tip, colors::PLANE));
    let (fold_left, fold_right) = (Vec2::new(-2.0, fold.y), Vec2::new(2.0, fold.y));
    verts.extend(triangle(nose, fold_left, fold_right, colors::PLANE_FOLD));
    verts
}

/// Puffy cloud from overlapping circles, spanning CLOUD_NATIVE_SIZE
fn cloud_mesh(segments: u32) -> Vec<Vertex> {
    let r = CLOUD_NATIVE_SIZE / 4.0;
    let puffs = [
        (Vec2::new(-r, r * 0.25), r * 0.9),
        (Vec2::new(0.0, -r * 0.2), r * 1.1),
        (Vec2::new(r, r * 0.25), r * 0.9),
        (Vec2::new(0.0, r * 0.45), r * 0.8),
    ];
    puffs
        .iter()
        .flat_map(|&(center, radius)| circle(center, radius, colors::CLOUD, segments))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::shapes::bounds;

    #[test]
    fn test_load_resolves_both_assets() {
        let assets = Assets::load(QualityPreset::Medium).unwrap();
        assert!(!assets.plane.is_empty());
        assert!(!assets.cloud.is_empty());
        assert_eq!(assets.plane.len() % 3, 0);
        assert_eq!(assets.cloud.len() % 3, 0);
    }

    #[test]
    fn test_unknown_asset_fails() {
        assert_eq!(
            resolve("cloud2", QualityPreset::Low),
            Err(AssetError::Unknown("cloud2".to_string()))
        );
    }

    #[test]
    fn test_plane_nose_points_up() {
        let plane = resolve(PLANE, QualityPreset::Low).unwrap();
        let (lo, hi) = bounds(&plane).unwrap();
        assert_eq!(lo.y, -PLANE_LENGTH / 2.0);
        assert_eq!(hi.y, PLANE_LENGTH / 2.0);
    }

    #[test]
    fn test_cloud_detail_follows_quality() {
        let low = resolve(CLOUD, QualityPreset::Low).unwrap();
        let high = resolve(CLOUD, QualityPreset::High).unwrap();
        assert!(high.len() > low.len());
    }

    #[test]
    fn test_cloud_spans_native_size() {
        let cloud = resolve(CLOUD, QualityPreset::High).unwrap();
        let (lo, hi) = bounds(&cloud).unwrap();
        let width = hi.x - lo.x;
        assert!(width > CLOUD_NATIVE_SIZE * 0.8 && width < CLOUD_NATIVE_SIZE * 1.2);
    }
}
