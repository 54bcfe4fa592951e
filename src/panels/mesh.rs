use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

/// Build the planar mesh for one panel row, facing +Z before tilt.
///
/// The quad is `width` by `height`, centered on the origin, subdivided into
/// `segments` columns along its width (one column per panel). UVs span the
/// full quad.
pub fn build_row_mesh(width: f32, height: f32, segments: u32) -> Mesh {
    let segments = segments.max(1);
    let half_width = width * 0.5;
    let half_height = height * 0.5;

    let column_count = (segments + 1) as usize;
    let mut positions = Vec::with_capacity(column_count * 2);
    let mut normals = Vec::with_capacity(column_count * 2);
    let mut uvs = Vec::with_capacity(column_count * 2);
    for column in 0..=segments {
        let u = column as f32 / segments as f32;
        let x = -half_width + u * width;
        for (y, v) in [(-half_height, 1.0), (half_height, 0.0)] {
            positions.push([x, y, 0.0]);
            normals.push([0.0, 0.0, 1.0]);
            uvs.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity(segments as usize * 6);
    for column in 0..segments {
        let bottom = column * 2;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        indices.extend_from_slice(&[bottom, next_bottom, top, top, next_bottom, next_top]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(bevy::mesh::Indices::U32(indices));
    mesh
}
