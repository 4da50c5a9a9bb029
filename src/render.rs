use crate::core::{OrbitCamera, CUBE_COLOR, CUBE_SIZE, GRID_COLOR, GRID_DIVISIONS, GRID_SIZE};
use glam::Vec3;
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
pub mod mesh;

use mesh::{cube_wireframe, grid_lines, hex_to_surface_rgb, InstanceOffset};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    view_proj: [[f32; 4]; 4],
}

/// WebGPU state for the background scene: one line pipeline drawing the
/// grid once and the cube wireframe once per particle.
pub struct SceneRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,

    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    cube_vertices: wgpu::Buffer,
    cube_vertex_count: u32,
    grid_vertices: wgpu::Buffer,
    grid_vertex_count: u32,
    // single zero offset so the grid can share the instanced pipeline
    grid_instance: wgpu::Buffer,

    instances: wgpu::Buffer,
    instance_capacity: usize,
    instance_scratch: Vec<InstanceOffset>,

    width: u32,
    height: u32,
}

impl SceneRenderer {
    pub async fn new(canvas: &web::HtmlCanvasElement, max_instances: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas over the page background when the browser allows it
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera_uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let (camera_bgl, camera_bind_group) =
            helpers::create_uniform_bind_group(&device, "camera_bg", &camera_buffer);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&camera_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_line_pipeline(&device, &layout, &shader, format);

        let srgb_surface = format.is_srgb();
        log::info!("[render] surface format {:?} (srgb: {})", format, srgb_surface);
        let cube = cube_wireframe(CUBE_SIZE, hex_to_surface_rgb(CUBE_COLOR, srgb_surface));
        let cube_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vertices"),
            contents: bytemuck::cast_slice(&cube),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let grid = grid_lines(GRID_SIZE, GRID_DIVISIONS, hex_to_surface_rgb(GRID_COLOR, srgb_surface));
        let grid_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grid_vertices"),
            contents: bytemuck::cast_slice(&grid),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let grid_instance = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("grid_instance"),
            contents: bytemuck::bytes_of(&InstanceOffset::default()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_capacity = max_instances.max(1);
        let instances = create_instance_buffer(&device, instance_capacity);

        log::info!(
            "[render] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            camera_buffer,
            camera_bind_group,
            cube_vertices,
            cube_vertex_count: cube.len() as u32,
            grid_vertices,
            grid_vertex_count: grid.len() as u32,
            grid_instance,
            instances,
            instance_capacity,
            instance_scratch: Vec::with_capacity(instance_capacity),
            width,
            height,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure after the browser reports the surface lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        camera: &OrbitCamera,
        positions: impl Iterator<Item = Vec3>,
    ) -> Result<(), wgpu::SurfaceError> {
        self.instance_scratch.clear();
        self.instance_scratch
            .extend(positions.map(InstanceOffset::from_vec3));
        if self.instance_scratch.len() > self.instance_capacity {
            self.instance_capacity = self.instance_scratch.len();
            self.instances = create_instance_buffer(&self.device, self.instance_capacity);
        }
        let count = self.instance_scratch.len() as u32;
        if count > 0 {
            self.queue.write_buffer(
                &self.instances,
                0,
                bytemuck::cast_slice(&self.instance_scratch),
            );
        }
        let u = CameraUniforms {
            view_proj: camera.view_proj(self.aspect()).to_cols_array_2d(),
        };
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&u));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.camera_bind_group, &[]);

            rpass.set_vertex_buffer(0, self.grid_vertices.slice(..));
            rpass.set_vertex_buffer(1, self.grid_instance.slice(..));
            rpass.draw(0..self.grid_vertex_count, 0..1);

            if count > 0 {
                rpass.set_vertex_buffer(0, self.cube_vertices.slice(..));
                rpass.set_vertex_buffer(1, self.instances.slice(..));
                rpass.draw(0..self.cube_vertex_count, 0..count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particle_instances"),
        size: (capacity * std::mem::size_of::<InstanceOffset>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
