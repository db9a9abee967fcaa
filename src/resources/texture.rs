use std::io::{BufReader, Cursor};

use crate::data_structures::{model, texture};

/// Bind group layout for a material's diffuse texture and sampler (group 0).
pub fn diffuse_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("Material diffuse_bind_group_layout"),
    })
}

/// Read a text asset (OBJ, MTL or WGSL source) from the assets directory.
pub async fn load_string(file_name: &str) -> anyhow::Result<String> {
    // TODO: pass env for absolute path from lib caller
    let path = std::path::Path::new("./").join("assets").join(file_name);
    let txt = std::fs::read_to_string(path)?;

    Ok(txt)
}

/// Read a binary asset (texture image data) from the assets directory.
pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    // TODO: pass env for absolute path from lib caller
    let path = std::path::Path::new("./").join("assets").join(file_name);
    let data = std::fs::read(path)?;

    Ok(data)
}

pub async fn load_texture(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    format: Option<&str>,
) -> anyhow::Result<texture::Texture> {
    let data = load_binary(file_name).await?;
    texture::Texture::from_bytes(device, queue, &data, file_name, format)
}

/// Parse an OBJ file and build the materials its MTL references.
///
/// Materials without a diffuse texture get the default white one so every
/// mesh can run through the same pipeline.
pub async fn load_materials(
    file_name: &str,
    queue: &wgpu::Queue,
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
) -> anyhow::Result<(Vec<model::Material>, Vec<tobj::Model>)> {
    let obj_text: String = load_string(file_name).await?;
    let obj_cursor = Cursor::new(obj_text);
    let mut obj_reader = BufReader::new(obj_cursor);

    let (models, obj_materials) = tobj::load_obj_buf_async(
        &mut obj_reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |p| async move {
            match load_string(&p).await {
                Ok(mat_text) => tobj::load_mtl_buf(&mut BufReader::new(Cursor::new(mat_text))),
                Err(_) => Err(tobj::LoadError::OpenFileFailed),
            }
        },
    )
    .await?;

    let mut materials = Vec::new();
    for m in obj_materials? {
        let diffuse_texture = match &m.diffuse_texture {
            Some(m_diffuse_texture) => {
                load_texture(m_diffuse_texture, device, queue, None).await?
            }
            None => {
                log::warn!("Material {} references no diffuse texture.", m.name);
                texture::Texture::create_default_diffuse(1, 1, device, queue)
            }
        };
        materials.push(model::Material::new(device, &m.name, diffuse_texture, layout));
    }
    Ok((materials, models))
}
