#![cfg(feature = "integration-tests")]

use std::iter;

use cgmath::Deg;
use meshpose::{
    camera::{Camera, Projection},
    entity::{LoadError, ModelEntity},
};

use crate::common::test_utils;

mod common;

#[tokio::test]
async fn loads_cube_with_builtin_shader() {
    let (device, queue) = test_utils::headless().await.expect("no GPU adapter");
    let config = test_utils::test_surface_config();

    let entity = ModelEntity::load(&device, &queue, &config, "cube.obj")
        .await
        .expect("cube.obj should load");

    assert_eq!(entity.model().meshes.len(), 1);
    // 6 quad faces triangulate to 12 triangles.
    assert_eq!(entity.model().meshes[0].num_elements, 36);
    assert!(!entity.model().materials.is_empty());
    assert_eq!(entity.pose.position.z, 50.0);
}

#[tokio::test]
async fn loads_cube_with_custom_shader() {
    let (device, queue) = test_utils::headless().await.expect("no GPU adapter");
    let config = test_utils::test_surface_config();

    ModelEntity::load_with_shader(&device, &queue, &config, "cube.obj", Some("flat_shader.wgsl"))
        .await
        .expect("flat_shader.wgsl should compile");
}

#[tokio::test]
async fn missing_obj_is_a_mesh_error() {
    let (device, queue) = test_utils::headless().await.expect("no GPU adapter");
    let config = test_utils::test_surface_config();

    let result = ModelEntity::load(&device, &queue, &config, "does_not_exist.obj").await;
    assert!(matches!(result, Err(LoadError::Mesh { .. })));
}

#[tokio::test]
async fn broken_shader_is_a_compile_error() {
    let (device, queue) = test_utils::headless().await.expect("no GPU adapter");
    let config = test_utils::test_surface_config();

    let result = ModelEntity::load_with_shader(
        &device,
        &queue,
        &config,
        "cube.obj",
        Some("broken_shader.wgsl"),
    )
    .await;
    match result {
        Err(LoadError::ShaderCompile { path, messages }) => {
            assert_eq!(path, "broken_shader.wgsl");
            assert!(!messages.is_empty());
        }
        other => panic!("expected a shader compile error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_shader_file_is_a_compile_error() {
    let (device, queue) = test_utils::headless().await.expect("no GPU adapter");
    let config = test_utils::test_surface_config();

    let result = ModelEntity::load_with_shader(
        &device,
        &queue,
        &config,
        "cube.obj",
        Some("does_not_exist.wgsl"),
    )
    .await;
    assert!(matches!(result, Err(LoadError::ShaderCompile { .. })));
}

#[tokio::test]
async fn draws_offscreen_without_validation_errors() {
    let (device, queue) = test_utils::headless().await.expect("no GPU adapter");
    let config = test_utils::test_surface_config();

    let mut entity = ModelEntity::load(&device, &queue, &config, "cube.obj")
        .await
        .expect("cube.obj should load");
    entity.look_at_xz(0.0, 0.0);
    entity.move_forwards(-5.0);

    let camera = Camera::new((0.0, 2.0, 0.0), Deg(90.0), Deg(0.0));
    let projection = Projection::new(config.width, config.height, Deg(45.0), 0.1, 500.0);

    let (color, depth) = test_utils::test_render_target(&device);
    let color_view = color.create_view(&wgpu::TextureViewDescriptor::default());
    let depth_view = depth.create_view(&wgpu::TextureViewDescriptor::default());

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let mut encoder =
        device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
    {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Test Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        entity.draw(
            &queue,
            &mut render_pass,
            camera.calc_matrix(),
            projection.calc_matrix(),
        );
    }
    queue.submit(iter::once(encoder.finish()));

    let error = device.pop_error_scope().await;
    assert!(error.is_none(), "draw raised a validation error: {error:?}");
}
