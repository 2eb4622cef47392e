use std::num::NonZeroU32;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use serde::{Deserialize, Serialize};

/// Direction the lines run across the capture surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineOrientation {
    /// Lines run along y, spaced across x.
    #[default]
    Vertical = 0,
    /// Lines run along x, spaced across y.
    Horizontal = 1,
}

impl LineOrientation {
    /// Numeric encoding passed to the shader as `_LineOrientation`.
    pub fn shader_value(self) -> f32 {
        self as u32 as f32
    }

    pub fn swapped(self) -> Self {
        match self {
            LineOrientation::Vertical => LineOrientation::Horizontal,
            LineOrientation::Horizontal => LineOrientation::Vertical,
        }
    }
}

/// Raw buffers of a line lattice, before they are handed to a `Mesh`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineLatticeBuffers {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl LineLatticeBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Build `line_count` strips of `line_density + 1` vertices each.
///
/// `uv.x` is 1.0 on the first and last vertex of every strip and 0.0 elsewhere;
/// the line shader treats 1.0 as "cull segment" so the edge joining two strips
/// is never drawn. With a density of 1 every vertex is a boundary vertex.
pub fn build_line_lattice(
    line_count: u32,
    line_density: NonZeroU32,
    orientation: LineOrientation,
) -> LineLatticeBuffers {
    let line_density = line_density.get();
    let segment_verts = line_density + 1;
    let num_verts = (segment_verts * line_count) as usize;

    let mut positions = Vec::with_capacity(num_verts);
    let mut uvs = Vec::with_capacity(num_verts);
    let mut indices = Vec::with_capacity(num_verts);

    let texture_step = Vec2::new(1.0 / line_density as f32, 1.0 / line_count as f32);

    for line in 0..line_count {
        for step in 0..segment_verts {
            let segment = Vec2::new(
                step as f32 * texture_step.x,
                line as f32 * texture_step.y,
            );

            let (x, y) = match orientation {
                LineOrientation::Vertical => (segment.y, segment.x),
                LineOrientation::Horizontal => (segment.x, segment.y),
            };

            let boundary = step == 0 || step == line_density;

            indices.push(positions.len() as u32);
            positions.push([x, y, 0.0]);
            uvs.push([if boundary { 1.0 } else { 0.0 }, 0.0]);
        }
    }

    LineLatticeBuffers {
        positions,
        uvs,
        indices,
    }
}

/// Create the line-strip mesh for a lattice. Indices are always 32-bit.
pub fn create_line_lattice_mesh(
    line_count: u32,
    line_density: NonZeroU32,
    orientation: LineOrientation,
) -> Mesh {
    let buffers = build_line_lattice(line_count, line_density, orientation);

    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, buffers.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, buffers.uvs);
    mesh.insert_indices(Indices::U32(buffers.indices));
    mesh
}
