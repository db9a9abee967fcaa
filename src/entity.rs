//! The renderable model entity.
//!
//! A [`ModelEntity`] couples a loaded OBJ model with a compiled shader, a
//! render pipeline and a [`Pose`]. Loading is fallible and returns a typed
//! [`LoadError`]; a successfully loaded entity can always be drawn. All GPU
//! resources are owned by the entity and released exactly once on drop.

use cgmath::Matrix4;
use thiserror::Error;
use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        model::{DrawModel, Model},
        pose::Pose,
    },
    pipelines::entity::{DEFAULT_SHADER, entity_uniform_layout, mk_entity_pipeline},
    resources::{self, texture::load_string},
};

/// Why an entity failed to load. Both kinds are terminal: no retry, no
/// half-loaded entity.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load mesh from {path}: {source}")]
    Mesh {
        path: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("shader compilation failed for {path}: {messages}")]
    ShaderCompile { path: String, messages: String },
}

/// Per-entity uniform as stored on the GPU: the combined world-view-projection
/// matrix, 64 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct EntityUniform {
    world_view_proj: [[f32; 4]; 4],
}

/// A posed, drawable model.
///
/// Constructed via [`load`](Self::load); the pose is public and freely
/// mutable between draws.
#[derive(Debug)]
pub struct ModelEntity {
    pub pose: Pose,
    model: Model,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

impl ModelEntity {
    /// Load an OBJ model and compile the built-in entity shader.
    ///
    /// Allocates all GPU-side resources the entity needs for drawing. Fails
    /// with [`LoadError::Mesh`] when the OBJ cannot be read or parsed and
    /// with [`LoadError::ShaderCompile`] when the shader does not compile.
    pub async fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        config: &wgpu::SurfaceConfiguration,
        obj_file: &str,
    ) -> Result<Self, LoadError> {
        Self::load_with_shader(device, queue, config, obj_file, None).await
    }

    /// Like [`load`](Self::load), with a caller-supplied WGSL file from the
    /// assets directory instead of the built-in shader.
    pub async fn load_with_shader(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        config: &wgpu::SurfaceConfiguration,
        obj_file: &str,
        shader_file: Option<&str>,
    ) -> Result<Self, LoadError> {
        let model = resources::load_model_obj(obj_file, device, queue)
            .await
            .map_err(|source| LoadError::Mesh {
                path: obj_file.to_string(),
                source,
            })?;

        let (shader_label, shader_src) = match shader_file {
            // A shader source that cannot be read never reaches the compiler;
            // report it through the same error kind.
            Some(file) => match load_string(file).await {
                Ok(src) => (file.to_string(), src),
                Err(e) => {
                    return Err(LoadError::ShaderCompile {
                        path: file.to_string(),
                        messages: e.to_string(),
                    });
                }
            },
            None => ("entity_shader.wgsl (built-in)".to_string(), DEFAULT_SHADER.to_string()),
        };
        let shader = compile_shader(device, &shader_label, &shader_src).await?;

        let pipeline = mk_entity_pipeline(device, config, &shader);

        let uniform = EntityUniform {
            world_view_proj: Matrix4::from_scale(1.0f32).into(),
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Entity Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &entity_uniform_layout(device),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("entity_uniform_bind_group"),
        });

        Ok(Self {
            pose: Pose::new(),
            model,
            pipeline,
            uniform_buffer,
            uniform_bind_group,
        })
    }

    /// Draw the entity with the given view and projection.
    ///
    /// Computes the world matrix from the pose, uploads the combined
    /// world-view-projection and issues the draw calls for every mesh of the
    /// model.
    pub fn draw<'a, 'pass>(
        &'a self,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'pass>,
        view: Matrix4<f32>,
        projection: Matrix4<f32>,
    ) where
        'a: 'pass,
    {
        let world = self.pose.to_matrix();
        let uniform = EntityUniform {
            world_view_proj: (projection * view * world).into(),
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.draw_model(&self.model, &self.uniform_bind_group);
    }

    /// Turn towards a point on the ground plane. See [`Pose::look_at_xz`].
    pub fn look_at_xz(&mut self, target_x: f32, target_z: f32) {
        self.pose.look_at_xz(target_x, target_z);
    }

    /// Advance along the current heading. See [`Pose::move_forwards`].
    pub fn move_forwards(&mut self, distance: f32) {
        self.pose.move_forwards(distance);
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

/// Compile a WGSL module, logging warnings and failing on errors.
///
/// wgpu reports compilation problems two ways: validation errors on the
/// device error scope and per-message diagnostics on the module. Warnings and
/// infos are logged and non-fatal; anything else aborts the load.
async fn compile_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, LoadError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let mut errors = Vec::new();
    let info = module.get_compilation_info().await;
    for message in &info.messages {
        let location = message
            .location
            .map(|loc| format!(" at line {}", loc.line_number))
            .unwrap_or_default();
        match message.message_type {
            wgpu::CompilationMessageType::Error => {
                errors.push(format!("{}{}", message.message, location));
            }
            wgpu::CompilationMessageType::Warning => {
                log::warn!("shader warning in {label}{location}: {}", message.message);
            }
            wgpu::CompilationMessageType::Info => {
                log::info!("shader note in {label}{location}: {}", message.message);
            }
        }
    }

    if let Some(error) = device.pop_error_scope().await {
        errors.push(error.to_string());
    }

    if errors.is_empty() {
        Ok(module)
    } else {
        Err(LoadError::ShaderCompile {
            path: label.to_string(),
            messages: errors.join("; "),
        })
    }
}
