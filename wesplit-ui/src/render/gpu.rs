//! GPU Renderer implementation using wgpu

use wgpu::*;
use crate::core::context::Color;
use crate::layout::Rect;
use crate::render::{Primitive, RenderList, TextRenderer};
use crate::UiError;

/// Vertex for 2D rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBS: [VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2,  // position
        1 => Float32x4,  // color
        2 => Float32x2,  // uv
    ];

    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

const INITIAL_VERTEX_BYTES: BufferAddress = 4 * 1024 * 1024;
const INITIAL_INDEX_BYTES: BufferAddress = 1024 * 1024;

/// GPU state and resources
pub struct GpuRenderer {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub pipeline: RenderPipeline,
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    /// Physical size of the surface
    pub size: (u32, u32),
    /// Physical pixels per logical pixel
    pub scale: f32,
    pub clear_color: Color,
    text: TextRenderer,
}

impl GpuRenderer {
    pub async fn new(window: std::sync::Arc<winit::window::Window>) -> Result<Self, UiError> {
        let size = window.inner_size();
        let scale = window.scale_factor() as f32;

        // Create wgpu instance
        let instance = Instance::new(InstanceDescriptor {
            backends: Backends::all(),
            ..Default::default()
        });

        // Create surface
        let surface = instance.create_surface(window)?;

        // Request adapter
        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(UiError::NoAdapter)?;
        tracing::info!(adapter = ?adapter.get_info().name, "GPU adapter selected");

        // Request device
        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: Some("WeSplit UI Device"),
                    required_features: Features::empty(),
                    required_limits: Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        // Configure surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = pick_surface_format(&surface_caps.formats)?;

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes.first().copied().unwrap_or(CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Create shader
        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("WeSplit UI Shader"),
            source: ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        // Create pipeline
        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("WeSplit UI Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("WeSplit UI Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: config.format,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_buffer = create_buffer(&device, "Vertex Buffer", INITIAL_VERTEX_BYTES, BufferUsages::VERTEX);
        let index_buffer = create_buffer(&device, "Index Buffer", INITIAL_INDEX_BYTES, BufferUsages::INDEX);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            index_buffer,
            size: (size.width, size.height),
            scale,
            clear_color: Color::rgb(0, 0, 0),
            text: TextRenderer::new(),
        })
    }

    pub fn resize(&mut self, new_size: (u32, u32)) {
        if new_size.0 > 0 && new_size.1 > 0 {
            self.size = new_size;
            self.config.width = new_size.0;
            self.config.height = new_size.1;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(&mut self, render_list: &RenderList) -> Result<(), SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output.texture.create_view(&TextureViewDescriptor::default());

        // Build vertices from render list
        let mut geometry = Geometry::new(self.size, self.scale);
        for primitive in &render_list.primitives {
            geometry.push(primitive, &mut self.text);
        }
        let (vertices, indices) = (geometry.vertices, geometry.indices);

        self.ensure_capacity(&vertices, &indices);

        // Upload to GPU
        self.queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        self.queue.write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&indices));

        let mut encoder = self.device.create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: Operations {
                        load: LoadOp::Clear(wgpu::Color {
                            r: self.clear_color.r as f64,
                            g: self.clear_color.g as f64,
                            b: self.clear_color.b as f64,
                            a: self.clear_color.a as f64,
                        }),
                        store: StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !indices.is_empty() {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.set_index_buffer(self.index_buffer.slice(..), IndexFormat::Uint32);
                render_pass.draw_indexed(0..indices.len() as u32, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    // Buffers only ever grow; a frame never shrinks them.
    fn ensure_capacity(&mut self, vertices: &[Vertex], indices: &[u32]) {
        let vertex_bytes = std::mem::size_of_val(vertices) as BufferAddress;
        if vertex_bytes > self.vertex_buffer.size() {
            let size = vertex_bytes.next_power_of_two();
            tracing::debug!(size, "growing vertex buffer");
            self.vertex_buffer = create_buffer(&self.device, "Vertex Buffer", size, BufferUsages::VERTEX);
        }
        let index_bytes = std::mem::size_of_val(indices) as BufferAddress;
        if index_bytes > self.index_buffer.size() {
            let size = index_bytes.next_power_of_two();
            tracing::debug!(size, "growing index buffer");
            self.index_buffer = create_buffer(&self.device, "Index Buffer", size, BufferUsages::INDEX);
        }
    }
}

fn create_buffer(device: &Device, label: &str, size: BufferAddress, usage: BufferUsages) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some(label),
        size,
        usage: usage | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Triangle geometry for one frame, in normalised device coordinates
struct Geometry {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    width: f32,
    height: f32,
    scale: f32,
}

impl Geometry {
    fn new(size: (u32, u32), scale: f32) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            width: size.0.max(1) as f32,
            height: size.1.max(1) as f32,
            scale,
        }
    }

    fn push(&mut self, primitive: &Primitive, text: &mut TextRenderer) {
        match primitive {
            Primitive::Rect { x, y, width, height, color, clip } => {
                self.quad(Rect::new(*x, *y, *width, *height), *color, *clip);
            }
            Primitive::Line { x1, y1, x2, y2, color, width, clip } => {
                // Only axis-aligned lines are drawn; they become thin quads.
                let half = width / 2.0;
                let bounds = if y1 == y2 {
                    Rect::new(x1.min(*x2), y1 - half, (x2 - x1).abs(), *width)
                } else if x1 == x2 {
                    Rect::new(x1 - half, y1.min(*y2), *width, (y2 - y1).abs())
                } else {
                    return;
                };
                self.quad(bounds, *color, *clip);
            }
            Primitive::Text { x, y, text: content, size, color, clip } => {
                let scale = self.scale;
                let (ox, oy) = (*x, *y);
                let mut spans = Vec::new();
                text.rasterize(content, size * scale, *color, None, |span| spans.push(span));
                for span in spans {
                    let bounds = Rect::new(
                        ox + span.x as f32 / scale,
                        oy + span.y as f32 / scale,
                        span.width as f32 / scale,
                        span.height as f32 / scale,
                    );
                    self.quad(bounds, span.color, *clip);
                }
            }
        }
    }

    fn quad(&mut self, bounds: Rect, color: Color, clip: Option<Rect>) {
        let bounds = match clip {
            Some(clip) => match bounds.intersection(&clip) {
                Some(visible) => visible,
                None => return,
            },
            None => bounds,
        };
        let base = self.vertices.len() as u32;

        // Convert to NDC (-1 to 1)
        let x1 = (bounds.x * self.scale / self.width) * 2.0 - 1.0;
        let y1 = 1.0 - (bounds.y * self.scale / self.height) * 2.0;
        let x2 = ((bounds.x + bounds.width) * self.scale / self.width) * 2.0 - 1.0;
        let y2 = 1.0 - ((bounds.y + bounds.height) * self.scale / self.height) * 2.0;

        let c = color.to_array();

        self.vertices.extend_from_slice(&[
            Vertex { position: [x1, y1], color: c, uv: [0.0, 0.0] },
            Vertex { position: [x2, y1], color: c, uv: [1.0, 0.0] },
            Vertex { position: [x2, y2], color: c, uv: [1.0, 1.0] },
            Vertex { position: [x1, y2], color: c, uv: [0.0, 1.0] },
        ]);

        self.indices.extend_from_slice(&[
            base, base + 1, base + 2,
            base, base + 2, base + 3,
        ]);
    }
}

/// First sRGB format, else the first one offered
fn pick_surface_format(formats: &[TextureFormat]) -> Result<TextureFormat, UiError> {
    formats
        .iter()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first())
        .copied()
        .ok_or(UiError::NoSurfaceFormat)
}
