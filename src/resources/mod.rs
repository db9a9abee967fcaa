use crate::{
    data_structures::model,
    resources::texture::{diffuse_layout, load_materials},
};

/**
 * This module contains all logic for loading mesh/textures/etc. from external files.
 */
pub mod mesh;
pub mod texture;

/// Load an OBJ file with its materials into GPU buffers.
///
/// An OBJ without any usable material still gets a default white one so that
/// `Model::materials` is never empty.
pub async fn load_model_obj(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<model::Model> {
    let bind_group_layout = diffuse_layout(device);

    let (mut materials, models) =
        load_materials(file_name, queue, device, &bind_group_layout).await?;
    let meshes = mesh::load_meshes(&models, file_name, device);
    if meshes.is_empty() {
        anyhow::bail!("no drawable meshes in {file_name}");
    }

    if materials.is_empty() {
        materials.push(model::Material::new(
            device,
            &format!("{file_name} default material"),
            crate::data_structures::texture::Texture::create_default_diffuse(1, 1, device, queue),
            &bind_group_layout,
        ));
    }

    Ok(model::Model { meshes, materials })
}
