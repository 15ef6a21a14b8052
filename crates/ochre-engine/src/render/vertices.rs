use std::collections::HashMap;

use wgpu::util::DeviceExt;

use crate::geometry::{PrimitiveType, Vertex};
use crate::render::{BlendMode, RenderCtx, RenderStates, RenderTarget};

use super::common::{
    blend_state, logical_clip_to_scissor, viewport_ubo_min_binding_size, GpuVertex,
    ViewportUniform,
};

/// Renderer for tagged vertex sequences.
///
/// Vertices are provided in logical pixels and converted to NDC in the
/// vertex shader using a viewport uniform. Colors are expected to be linear
/// premultiplied RGBA (`paint::Color`).
///
/// Topology handling:
/// - `Points`, `Lines`, `LineStrip`, `Triangles`, `TriangleStrip` map
///   directly to device topologies
/// - `TriangleFan` and `Quads` have no device equivalent and are expanded
///   into triangle lists on the CPU (scratch buffer reused across calls)
///
/// Incomplete trailing primitives (e.g. three leftover vertices under
/// `Quads`) are dropped with a one-time debug message.
#[derive(Default)]
pub struct VertexRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    scratch: Vec<GpuVertex>,

    warned_incomplete: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct PipelineKey {
    topology: wgpu::PrimitiveTopology,
    blend: BlendMode,
}

impl VertexRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submits `vertices` grouped per `primitive` into `target`.
    ///
    /// The vertex data is borrowed for the duration of the call only; device
    /// errors surface through wgpu's error reporting, not here.
    pub fn draw_vertices(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        vertices: &[Vertex],
        primitive: PrimitiveType,
        states: &RenderStates,
    ) {
        if vertices.is_empty() {
            return;
        }

        let topology = self.fill_scratch(vertices, primitive);
        if self.scratch.is_empty() {
            return;
        }

        // Mutating methods must happen before borrowing pipelines/buffers immutably.
        self.invalidate_on_format_change(ctx);
        self.ensure_bindings(ctx);
        self.ensure_pipeline(ctx, PipelineKey { topology, blend: states.blend });
        self.write_viewport_uniform(ctx);

        // Per-call upload; the scratch buffer itself is reused across calls.
        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ochre vertices vbo"),
            contents: bytemuck::cast_slice(&self.scratch),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Now take immutable borrows.
        let key = PipelineKey { topology, blend: states.blend };
        let Some(pipeline) = self.pipelines.get(&key) else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let Some((sx, sy, sw, sh)) =
            logical_clip_to_scissor(states.clip_rect, ctx.viewport, ctx.scale_factor)
        else {
            return;
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ochre vertices pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_scissor_rect(sx, sy, sw, sh);
        rpass.draw(0..self.scratch.len() as u32, 0..1);
    }

    /// Converts `vertices` into the scratch upload buffer, expanding fans and
    /// quads, and returns the device topology to draw with.
    fn fill_scratch(
        &mut self,
        vertices: &[Vertex],
        primitive: PrimitiveType,
    ) -> wgpu::PrimitiveTopology {
        self.scratch.clear();

        match primitive {
            PrimitiveType::Points => {
                self.scratch.extend(vertices.iter().map(|&v| GpuVertex::from(v)));
                wgpu::PrimitiveTopology::PointList
            }
            PrimitiveType::Lines => {
                self.warn_incomplete(primitive, vertices.len() % 2);
                self.scratch.extend(vertices.iter().map(|&v| GpuVertex::from(v)));
                wgpu::PrimitiveTopology::LineList
            }
            PrimitiveType::LineStrip => {
                self.scratch.extend(vertices.iter().map(|&v| GpuVertex::from(v)));
                wgpu::PrimitiveTopology::LineStrip
            }
            PrimitiveType::Triangles => {
                self.warn_incomplete(primitive, vertices.len() % 3);
                self.scratch.extend(vertices.iter().map(|&v| GpuVertex::from(v)));
                wgpu::PrimitiveTopology::TriangleList
            }
            PrimitiveType::TriangleStrip => {
                self.scratch.extend(vertices.iter().map(|&v| GpuVertex::from(v)));
                wgpu::PrimitiveTopology::TriangleStrip
            }
            PrimitiveType::TriangleFan => {
                if vertices.len() < 3 {
                    self.warn_incomplete(primitive, vertices.len());
                    return wgpu::PrimitiveTopology::TriangleList;
                }
                let hub = GpuVertex::from(vertices[0]);
                for pair in vertices[1..].windows(2) {
                    self.scratch.push(hub);
                    self.scratch.push(GpuVertex::from(pair[0]));
                    self.scratch.push(GpuVertex::from(pair[1]));
                }
                wgpu::PrimitiveTopology::TriangleList
            }
            PrimitiveType::Quads => {
                self.warn_incomplete(primitive, vertices.len() % 4);
                for quad in vertices.chunks_exact(4) {
                    let [a, b, c, d] =
                        [quad[0], quad[1], quad[2], quad[3]].map(GpuVertex::from);
                    self.scratch.extend_from_slice(&[a, b, c, a, c, d]);
                }
                wgpu::PrimitiveTopology::TriangleList
            }
        }
    }

    fn warn_incomplete(&mut self, primitive: PrimitiveType, leftover: usize) {
        if leftover != 0 && !self.warned_incomplete {
            log::debug!(
                "VertexRenderer: {leftover} trailing vertices do not complete a {primitive:?} primitive; dropped"
            );
            self.warned_incomplete = true;
        }
    }

    fn invalidate_on_format_change(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format != Some(ctx.output_format) {
            self.pipelines.clear();
            self.pipeline_format = Some(ctx.output_format);
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, key: PipelineKey) {
        if self.pipelines.contains_key(&key) {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let shader_src = include_str!("shaders/vertices.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ochre vertices shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("ochre vertices pipeline layout"),
                bind_group_layouts: &[bgl],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ochre vertices pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GpuVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.output_format,
                    blend: Some(blend_state(key.blend)),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: key.topology,
                // Non-indexed draws only; strips need no restart format.
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipelines.insert(key, pipeline);
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }

        let bind_group_layout = self.bind_group_layout.get_or_insert_with(|| {
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("ochre vertices bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(viewport_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                })
        });

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ochre vertices viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ochre vertices bind group"),
            layout: bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform {
            viewport: [ctx.viewport.width.max(1.0), ctx.viewport.height.max(1.0)],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}
