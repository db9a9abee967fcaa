//! Minimal viewer: loads one entity and drives it with the keyboard.
//!
//! W/S move the entity along its heading, Q/E adjust the yaw directly and
//! space turns it towards the world origin.

use std::{iter, sync::Arc};

use meshpose::{context::Context, entity::ModelEntity};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

struct Viewer {
    ctx: Context,
    entity: ModelEntity,
    is_surface_configured: bool,
}

impl Viewer {
    fn render(&mut self) {
        self.ctx.window().request_redraw();
        if !self.is_surface_configured {
            return;
        }

        let output = match self.ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.ctx.window().inner_size();
                self.ctx.resize(size.width, size.height);
                return;
            }
            Err(e) => {
                log::error!("Unable to render {}", e);
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.entity.draw(
                &self.ctx.queue,
                &mut render_pass,
                self.ctx.camera.calc_matrix(),
                self.ctx.projection.calc_matrix(),
            );
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
    }
}

struct App {
    async_runtime: tokio::runtime::Runtime,
    viewer: Option<Viewer>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(Window::default_attributes())
                .expect("Failed to create a window"),
        );

        let init = self.async_runtime.block_on(async {
            let ctx = Context::new(window).await?;
            let entity = ModelEntity::load(&ctx.device, &ctx.queue, &ctx.config, "cube.obj")
                .await
                .map_err(anyhow::Error::from)?;
            anyhow::Ok(Viewer {
                ctx,
                entity,
                is_surface_configured: false,
            })
        });

        match init {
            Ok(viewer) => self.viewer = Some(viewer),
            Err(e) => {
                log::error!("Viewer initialization failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let viewer = match &mut self.viewer {
            Some(viewer) => viewer,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                viewer.ctx.resize(size.width, size.height);
                viewer.is_surface_configured = true;
            }
            WindowEvent::RedrawRequested => viewer.render(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match code {
                KeyCode::KeyW => viewer.entity.move_forwards(1.0),
                KeyCode::KeyS => viewer.entity.move_forwards(-1.0),
                KeyCode::KeyQ => viewer.entity.pose.rotation_deg.y -= 5.0,
                KeyCode::KeyE => viewer.entity.pose.rotation_deg.y += 5.0,
                KeyCode::Space => viewer.entity.look_at_xz(0.0, 0.0),
                KeyCode::Escape => event_loop.exit(),
                _ => (),
            },
            _ => (),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let mut app = App {
        async_runtime: tokio::runtime::Runtime::new()?,
        viewer: None,
    };
    event_loop.run_app(&mut app)?;

    Ok(())
}
