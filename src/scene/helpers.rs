use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

/// Build a square line grid on the ground plane, centered on the origin.
pub fn build_grid_mesh(size: f32, divisions: u32) -> Mesh {
    let divisions = divisions.max(1);
    let half = size * 0.5;
    let step = size / divisions as f32;

    let line_count = (divisions + 1) as usize;
    let mut positions = Vec::with_capacity(line_count * 4);
    for line in 0..=divisions {
        let offset = -half + line as f32 * step;
        // One line along X, one along Z.
        positions.push([-half, 0.0, offset]);
        positions.push([half, 0.0, offset]);
        positions.push([offset, 0.0, -half]);
        positions.push([offset, 0.0, half]);
    }

    let indices: Vec<u32> = (0..positions.len() as u32).collect();
    let mut mesh = Mesh::new(
        bevy::render::render_resource::PrimitiveTopology::LineList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(bevy::mesh::Indices::U32(indices));
    mesh
}

/// Build X/Y/Z axis lines from the origin, vertex-colored red/green/blue.
pub fn build_axes_mesh(length: f32) -> Mesh {
    let positions = vec![
        [0.0, 0.0, 0.0],
        [length, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, length, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, length],
    ];
    let colors = vec![
        [1.0, 0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
    ];
    let indices: Vec<u32> = (0..6).collect();

    let mut mesh = Mesh::new(
        bevy::render::render_resource::PrimitiveTopology::LineList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(bevy::mesh::Indices::U32(indices));
    mesh
}

/// Factory for the sun-helper billboard assets.
pub struct SunHelperVisual;

impl SunHelperVisual {
    /// Build a warm disc texture with a soft alpha falloff.
    pub fn build_texture(size: u32) -> Image {
        let mut data = vec![0u8; (size * size * 4) as usize];
        let center = (size as f32 - 1.0) * 0.5;
        let radius = size as f32 * 0.42;
        let feather = size as f32 * 0.06;
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                let dist = (dx * dx + dy * dy).sqrt();
                let t = ((radius - dist) / feather).clamp(0.0, 1.0);
                let alpha = (t * t * (3.0 - 2.0 * t) * 255.0) as u8;
                let idx = ((y * size + x) * 4) as usize;
                data[idx] = 255;
                data[idx + 1] = 214;
                data[idx + 2] = 90;
                data[idx + 3] = alpha;
            }
        }
        let extent = Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        };
        let mut image = Image::new_fill(
            extent,
            TextureDimension::D2,
            &[0, 0, 0, 0],
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::default(),
        );
        image.data = Some(data);
        image.sampler = ImageSampler::linear();
        image
    }

    /// Build a simple quad mesh facing `+Z`.
    pub fn build_quad(size: f32) -> Mesh {
        let half = size * 0.5;
        let positions = vec![
            [-half, -half, 0.0],
            [half, -half, 0.0],
            [half, half, 0.0],
            [-half, half, 0.0],
        ];
        let normals = vec![[0.0, 0.0, 1.0]; 4];
        let uvs = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let indices = vec![0u32, 1, 2, 0, 2, 3];
        let mut mesh = Mesh::new(
            bevy::render::render_resource::PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(bevy::mesh::Indices::U32(indices));
        mesh
    }
}

#[cfg(test)]
mod tests {
    use bevy::mesh::{Mesh, VertexAttributeValues};

    use super::{build_axes_mesh, build_grid_mesh};

    fn position_count(mesh: &Mesh) -> usize {
        match mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .expect("mesh has positions")
        {
            VertexAttributeValues::Float32x3(values) => values.len(),
            other => other.len(),
        }
    }

    /// Grid emits two lines (four vertices) per division line in each axis.
    #[test]
    fn grid_vertex_count_follows_divisions() {
        let mesh = build_grid_mesh(50.0, 10);
        assert_eq!(position_count(&mesh), 11 * 4);
    }

    /// Axes mesh is exactly three colored line segments.
    #[test]
    fn axes_mesh_has_three_segments() {
        let mesh = build_axes_mesh(25.0);
        assert_eq!(position_count(&mesh), 6);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
    }
}
