use wgpu::util::DeviceExt;

use crate::data_structures::model;

/**
 * Turns the position/texcoord/normal streams of a parsed OBJ into interleaved
 * vertex buffers plus an index buffer per mesh. Texcoords and normals are
 * optional in OBJ exports and default to zero when absent.
 */
pub fn load_meshes(
    models: &[tobj::Model],
    file_name: &str,
    device: &wgpu::Device,
) -> Vec<model::Mesh> {
    models
        .iter()
        .filter_map(|m| {
            if m.mesh.positions.is_empty() || m.mesh.indices.is_empty() {
                log::warn!(
                    "Skipping empty mesh {} in file {}. Check your .obj export settings.",
                    m.name,
                    file_name
                );
                return None;
            }

            let vertices = (0..m.mesh.positions.len() / 3)
                .map(|i| model::ModelVertex {
                    position: [
                        m.mesh.positions[i * 3],
                        m.mesh.positions[i * 3 + 1],
                        m.mesh.positions[i * 3 + 2],
                    ],
                    tex_coords: [
                        m.mesh.texcoords.get(i * 2).map_or(0.0, |f| *f),
                        1.0 - m.mesh.texcoords.get(i * 2 + 1).map_or(0.0, |f| *f),
                    ],
                    normal: [
                        m.mesh.normals.get(i * 3).map_or(0.0, |f| *f),
                        m.mesh.normals.get(i * 3 + 1).map_or(0.0, |f| *f),
                        m.mesh.normals.get(i * 3 + 2).map_or(0.0, |f| *f),
                    ],
                })
                .collect::<Vec<_>>();

            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Vertex Buffer", file_name)),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Index Buffer", file_name)),
                // One index stream for positions, texels and normals because
                // the loader runs with `single_index`
                contents: bytemuck::cast_slice(&m.mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

            Some(model::Mesh {
                name: file_name.to_string(),
                vertex_buffer,
                index_buffer,
                num_elements: m.mesh.indices.len() as u32,
                material: m.mesh.material_id.unwrap_or(0),
            })
        })
        .collect::<Vec<_>>()
}
