use std::sync::Arc;

use winit::window::Window;

use crate::{
    camera::{Camera, Projection},
    data_structures::texture,
};

/// Central GPU and window context.
///
/// Owns the device, queue and surface configuration that every entity needs
/// for loading and drawing. The device handle is passed to entities
/// explicitly; nothing in the crate reaches for globals.
#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: Camera,
    pub projection: Projection,
    pub clear_colour: wgpu::Color,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        // BackendBit::PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // The entity shader assumes an Srgb surface texture. Using a different
        // one will result in all the colors coming out darker.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        // Looking down the positive z axis towards the default entity spawn
        // point (z=50).
        let camera = Camera::new((0.0, 5.0, 0.0), cgmath::Deg(90.0), cgmath::Deg(-5.0));
        let projection =
            Projection::new(config.width.max(1), config.height.max(1), cgmath::Deg(45.0), 0.1, 500.0);

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            clear_colour: wgpu::Color::BLACK,
            window,
            depth_texture,
        })
    }

    /// Reconfigure the surface and rebuild the depth texture after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.projection.resize(width, height);
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = texture::Texture::create_depth_texture(
                &self.device,
                [self.config.width, self.config.height],
                "depth_texture",
            );
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

/// Request a device and queue without a window surface.
///
/// Used by integration tests and any headless tooling that loads entities
/// without presenting them.
pub async fn headless_device() -> anyhow::Result<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY,
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await?;
    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        })
        .await?;

    Ok((device, queue))
}
