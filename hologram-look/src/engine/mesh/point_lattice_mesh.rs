use std::num::NonZeroU32;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Create a `density × density` point list centred in each lattice cell.
/// `uv` carries the same normalised coordinate as the position.
pub fn create_point_lattice_mesh(point_density: NonZeroU32) -> Mesh {
    let density = point_density.get();
    let point_count = (density * density) as usize;
    let step = 1.0 / density as f32;

    let mut positions = Vec::with_capacity(point_count);
    let mut uvs = Vec::with_capacity(point_count);

    for row in 0..density {
        for column in 0..density {
            let x = (column as f32 + 0.5) * step;
            let y = (row as f32 + 0.5) * step;
            positions.push([x, y, 0.0]);
            uvs.push([x, y]);
        }
    }

    let indices: Vec<u32> = (0..point_count as u32).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn point_lattice_is_square_and_centred() {
        let mesh = create_point_lattice_mesh(NonZeroU32::new(4).unwrap());

        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::PointList);
        assert_eq!(mesh.count_vertices(), 16);

        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(VertexAttributeValues::as_float3)
            .unwrap();
        assert_eq!(positions[0], [0.125, 0.125, 0.0]);
        assert_eq!(positions[5], [0.375, 0.375, 0.0]);
        assert_eq!(positions[15], [0.875, 0.875, 0.0]);
    }

    #[test]
    fn single_point_sits_in_the_middle() {
        let mesh = create_point_lattice_mesh(NonZeroU32::MIN);

        assert!(matches!(mesh.indices(), Some(Indices::U32(indices)) if indices == &vec![0]));
        let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("missing uv attribute");
        };
        assert_eq!(uvs, &vec![[0.5, 0.5]]);
    }
}
