use std::num::NonZeroU32;

use bevy::prelude::*;
use constants::layer_limits::{LAYER_WIDTH_MAX, MM_PER_WORLD_UNIT};

use crate::engine::mesh::line_lattice_mesh::LineOrientation;

/// Texel stride for recovering missing depth values in a line lattice.
///
/// The sampling stride follows the lines, so it is swapped with the orientation.
pub fn line_mesh_scalar(
    orientation: LineOrientation,
    line_density: NonZeroU32,
    texture_size: UVec2,
) -> Vec4 {
    let density = line_density.get() as f32;
    match orientation {
        LineOrientation::Horizontal => Vec4::new(texture_size.x as f32 / density, 0.0, 0.0, 0.0),
        LineOrientation::Vertical => {
            Vec4::new(0.0, texture_size.y as f32 * 0.5 / density, 0.0, 0.0)
        }
    }
}

/// Texel stride for a point lattice, sampled along both axes.
pub fn point_mesh_scalar(point_density: NonZeroU32, texture_size: UVec2) -> Vec4 {
    let density = point_density.get() as f32;
    Vec4::new(
        texture_size.x as f32 / density,
        texture_size.y as f32 * 0.5 / density,
        0.0,
        0.0,
    )
}

/// Apply the squared width curve and convert millimetres to world units.
///
/// Squaring the normalised width gives finer control at small widths.
pub fn curved_width(width_mm: f32) -> f32 {
    let normalised = width_mm / LAYER_WIDTH_MAX;
    normalised.powi(2) * LAYER_WIDTH_MAX / MM_PER_WORLD_UNIT
}

/// Line width scaled by the local scale axis across which the lines are spaced.
pub fn line_width(width_mm: f32, orientation: LineOrientation, local_scale: Vec3) -> f32 {
    let axis_scale = match orientation {
        LineOrientation::Horizontal => local_scale.y,
        LineOrientation::Vertical => local_scale.x,
    };
    curved_width(width_mm) * axis_scale
}

/// Point size scaled by the mean planar scale.
pub fn point_width(size_mm: f32, local_scale: Vec3) -> f32 {
    curved_width(size_mm) * (local_scale.x + local_scale.y) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn width_curve_squares_the_normalised_width() {
        // 6 / 50 = 0.12 -> 0.0144 -> 0.72 mm -> 0.00072 m
        assert!(approx(curved_width(6.0), 0.00072));
        assert!(approx(curved_width(0.0), 0.0));
        assert!(approx(curved_width(LAYER_WIDTH_MAX), 0.05));
    }

    #[test]
    fn line_width_follows_orientation_axis() {
        let scale = Vec3::new(2.0, 3.0, 4.0);

        assert!(approx(
            line_width(6.0, LineOrientation::Vertical, scale),
            0.00144
        ));
        assert!(approx(
            line_width(6.0, LineOrientation::Horizontal, scale),
            0.00216
        ));
    }

    #[test]
    fn line_stride_swaps_with_orientation() {
        let density = NonZeroU32::new(100).unwrap();
        let size = UVec2::new(1024, 2048);

        assert_eq!(
            line_mesh_scalar(LineOrientation::Horizontal, density, size),
            Vec4::new(10.24, 0.0, 0.0, 0.0)
        );
        assert_eq!(
            line_mesh_scalar(LineOrientation::Vertical, density, size),
            Vec4::new(0.0, 10.24, 0.0, 0.0)
        );
    }

    #[test]
    fn point_stride_uses_both_axes() {
        let stride = point_mesh_scalar(NonZeroU32::new(4).unwrap(), UVec2::new(512, 512));
        assert_eq!(stride, Vec4::new(128.0, 64.0, 0.0, 0.0));
    }

    #[test]
    fn point_width_uses_mean_planar_scale() {
        assert!(approx(point_width(6.0, Vec3::new(1.0, 3.0, 9.0)), 0.00144));
    }
}
