use bytemuck::{Pod, Zeroable};
use sweepface_geometry::{
    ClockLayout, HAND_VERTEX_COUNT, Vertex, hand, marker_set, marker_set_vertex_count, ring,
    ring_vertex_count,
};
use sweepface_math::{Mat4, Vec3};
use sweepface_timebase::{ClockError, ClockSample, SweepAngles};

use crate::shader::create_shader_module;
use crate::shaders::CLOCK_SHADER;

// Camera and light are fixed for the session. The camera sits far back on
// +z so the 45-degree field of view frames the whole dial.
const FOV_Y_DEGREES: f32 = 45.0;
const NEAR_PLANE: f32 = 1.0;
const FAR_PLANE: f32 = 2000.0;
const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 1300.0);
const LIGHT_POS: [f32; 4] = [200.0, 200.0, 300.0, 1.0];
const LIGHT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.1,
    b: 0.2,
    a: 1.0,
};

// Flat shape colors, fed through the Phong model.
const FACE_COLOR: [f32; 4] = [0.8, 0.8, 0.9, 1.0];
const MARKER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const HAND_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
const SECOND_HAND_COLOR: [f32; 4] = [1.0, 0.1, 0.1, 1.0];
const HUB_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

/// Dynamic-offset stride for the material uniform slots. Matches the
/// default `min_uniform_buffer_offset_alignment`.
const MATERIAL_STRIDE: u64 = 256;

/// Material slot order; also the draw order within a frame.
const SLOT_FACE: u32 = 0;
const SLOT_MARKERS: u32 = 1;
const SLOT_HOUR: u32 = 2;
const SLOT_MINUTE: u32 = 3;
const SLOT_SECOND: u32 = 4;
const SLOT_HUB: u32 = 5;
const SLOT_COUNT: usize = 6;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct SceneUniforms {
    projection: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    view_pos: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct MaterialUniforms {
    color: [f32; 4],
}

/// A fixed slice of the shared vertex buffer reserved for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Region {
    offset: u64,
    capacity: usize,
}

impl Region {
    fn byte_len(&self) -> u64 {
        (self.capacity * std::mem::size_of::<Vertex>()) as u64
    }
}

/// Per-shape partitioning of the single GPU vertex buffer.
///
/// wgpu executes every `write_buffer` before the submitted pass runs, so
/// the original single-buffer-overwritten-per-draw scheme becomes one
/// buffer with a fixed worst-case region per shape. Memory stays bounded
/// and nothing is ever resized.
#[derive(Debug, Clone, Copy)]
struct VertexRegions {
    face: Region,
    markers: Region,
    hour: Region,
    minute: Region,
    second: Region,
    hub: Region,
    total_bytes: u64,
}

impl VertexRegions {
    fn for_layout(layout: &ClockLayout) -> Self {
        let vertex_size = std::mem::size_of::<Vertex>() as u64;
        let mut cursor = 0u64;
        let mut take = |capacity: usize| {
            let region = Region {
                offset: cursor,
                capacity,
            };
            cursor += capacity as u64 * vertex_size;
            region
        };

        let face = take(ring_vertex_count(layout.face_segments));
        let markers = take(marker_set_vertex_count());
        let hour = take(HAND_VERTEX_COUNT);
        let minute = take(HAND_VERTEX_COUNT);
        let second = take(HAND_VERTEX_COUNT);
        let hub = take(ring_vertex_count(layout.hub_segments));

        Self {
            face,
            markers,
            hour,
            minute,
            second,
            hub,
            total_bytes: cursor,
        }
    }
}

/// Worst case for the hand/marker scratch buffer across every shape that
/// uses it (the marker set dominates).
fn hand_family_capacity() -> usize {
    marker_set_vertex_count().max(HAND_VERTEX_COUNT)
}

/// Worst case for the ring scratch buffer (hub only; the face ring is
/// precomputed separately).
fn ring_family_capacity(layout: &ClockLayout) -> usize {
    ring_vertex_count(layout.hub_segments)
}

/// Owns all GPU-side render state and drives one frame at a time.
///
/// Created once at startup, rendered with every frame, dropped once at
/// shutdown; wgpu resources release with the struct.
pub struct ClockRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    scene_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    depth_view: wgpu::TextureView,
    regions: VertexRegions,
    layout: ClockLayout,
    aspect: f32,
    face_vertex_count: u32,
    // Host scratch, reserved to worst case once and reused every frame.
    ring_scratch: Vec<Vertex>,
    hand_scratch: Vec<Vertex>,
}

impl ClockRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        scale_factor: f32,
    ) -> Self {
        use wgpu::util::DeviceExt;

        let layout = ClockLayout::new(scale_factor);
        let regions = VertexRegions::for_layout(&layout);

        // The face ring is angle-independent: generate it once here and
        // never again.
        let mut face_vertices = Vec::with_capacity(regions.face.capacity);
        ring(
            &mut face_vertices,
            layout.face_radius,
            layout.face_inner_radius(),
            layout.face_segments,
        );
        let face_vertex_count = face_vertices.len() as u32;

        // Face region sits at offset zero, so the buffer can be filled
        // through the creation mapping.
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("clock_vertex_buffer"),
            size: regions.total_bytes,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: true,
        });
        vertex_buffer
            .slice(..regions.face.byte_len())
            .get_mapped_range_mut()
            .copy_from_slice(bytemuck::cast_slice(&face_vertices));
        vertex_buffer.unmap();

        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // One 256-byte slot per shape; colors are session constants, so
        // the whole buffer is written once at creation.
        let mut material_bytes = vec![0u8; SLOT_COUNT * MATERIAL_STRIDE as usize];
        for (slot, color) in [
            (SLOT_FACE, FACE_COLOR),
            (SLOT_MARKERS, MARKER_COLOR),
            (SLOT_HOUR, HAND_COLOR),
            (SLOT_MINUTE, HAND_COLOR),
            (SLOT_SECOND, SECOND_HAND_COLOR),
            (SLOT_HUB, HUB_COLOR),
        ] {
            let offset = slot as usize * MATERIAL_STRIDE as usize;
            let uniforms = MaterialUniforms { color };
            material_bytes[offset..offset + std::mem::size_of::<MaterialUniforms>()]
                .copy_from_slice(bytemuck::bytes_of(&uniforms));
        }
        let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("material_uniforms"),
            contents: &material_bytes,
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("clock_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("clock_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: scene_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &material_buffer,
                        offset: 0,
                        size: wgpu::BufferSize::new(
                            std::mem::size_of::<MaterialUniforms>() as u64
                        ),
                    }),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("clock_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = create_shader_module(device, "clock_shader", CLOCK_SHADER);

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("clock_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32x3,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Both hand faces are visible and lit; nothing is culled.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let depth_view = Self::create_depth_texture(device, width, height);

        Self {
            pipeline,
            bind_group,
            scene_buffer,
            vertex_buffer,
            depth_view,
            regions,
            layout,
            aspect: width as f32 / height.max(1) as f32,
            face_vertex_count,
            ring_scratch: Vec::with_capacity(ring_family_capacity(&layout)),
            hand_scratch: Vec::with_capacity(hand_family_capacity()),
        }
    }

    /// Recreates the depth target and projection aspect after a surface
    /// reconfigure.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_view = Self::create_depth_texture(device, width, height);
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Renders one frame into `target`.
    ///
    /// Samples the wall clock exactly once; a failed read is fatal for the
    /// caller since hand positions are undefined without it. Degenerate
    /// shapes become zero-vertex draws, not errors.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
    ) -> Result<(), ClockError> {
        let projection = Mat4::perspective(FOV_Y_DEGREES, self.aspect, NEAR_PLANE, FAR_PLANE);
        let view = Mat4::look_at(CAMERA_EYE, Vec3::ZERO, Vec3::Y);
        let scene = SceneUniforms {
            projection: projection.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: Mat4::identity().to_cols_array_2d(),
            light_pos: LIGHT_POS,
            light_color: LIGHT_COLOR,
            view_pos: [CAMERA_EYE.x, CAMERA_EYE.y, CAMERA_EYE.z, 1.0],
        };
        queue.write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&scene));

        let sample = ClockSample::now()?;
        let angles = SweepAngles::from_sample(&sample).mirrored();

        let layout = self.layout;

        // Markers and hands share one scratch buffer; each shape is copied
        // to its own region of the GPU buffer before the pass is encoded.
        marker_set(
            &mut self.hand_scratch,
            layout.face_radius,
            layout.marker_length,
            layout.marker_thickness,
        );
        let marker_count = upload(
            queue,
            &self.vertex_buffer,
            self.regions.markers,
            &self.hand_scratch,
        );

        hand(
            &mut self.hand_scratch,
            angles.hour,
            layout.hour_hand.length,
            layout.hour_hand.thickness,
        );
        let hour_count = upload(queue, &self.vertex_buffer, self.regions.hour, &self.hand_scratch);

        hand(
            &mut self.hand_scratch,
            angles.minute,
            layout.minute_hand.length,
            layout.minute_hand.thickness,
        );
        let minute_count = upload(
            queue,
            &self.vertex_buffer,
            self.regions.minute,
            &self.hand_scratch,
        );

        hand(
            &mut self.hand_scratch,
            angles.second,
            layout.second_hand.length,
            layout.second_hand.thickness,
        );
        let second_count = upload(
            queue,
            &self.vertex_buffer,
            self.regions.second,
            &self.hand_scratch,
        );

        ring(
            &mut self.ring_scratch,
            layout.hub_radius,
            layout.hub_inner_radius(),
            layout.hub_segments,
        );
        let hub_count = upload(queue, &self.vertex_buffer, self.regions.hub, &self.ring_scratch);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("clock_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clock_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);

            // Face, markers, hour, minute, second, hub: strict order.
            let draws = [
                (SLOT_FACE, self.regions.face, self.face_vertex_count),
                (SLOT_MARKERS, self.regions.markers, marker_count),
                (SLOT_HOUR, self.regions.hour, hour_count),
                (SLOT_MINUTE, self.regions.minute, minute_count),
                (SLOT_SECOND, self.regions.second, second_count),
                (SLOT_HUB, self.regions.hub, hub_count),
            ];
            for (slot, region, count) in draws {
                pass.set_bind_group(
                    0,
                    &self.bind_group,
                    &[slot * MATERIAL_STRIDE as u32],
                );
                pass.set_vertex_buffer(
                    0,
                    self.vertex_buffer
                        .slice(region.offset..region.offset + region.byte_len()),
                );
                pass.draw(0..count, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
        Ok(())
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("clock_depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

/// Copies one shape's vertices into its reserved region, returning the
/// draw count. Empty input is a valid zero-vertex draw.
fn upload(queue: &wgpu::Queue, buffer: &wgpu::Buffer, region: Region, vertices: &[Vertex]) -> u32 {
    debug_assert!(vertices.len() <= region.capacity);
    if !vertices.is_empty() {
        queue.write_buffer(buffer, region.offset, bytemuck::cast_slice(vertices));
    }
    vertices.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_structs_have_std140_compatible_sizes() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 3 * 64 + 3 * 16);
        assert_eq!(std::mem::size_of::<MaterialUniforms>(), 16);
    }

    #[test]
    fn regions_are_disjoint_and_ordered() {
        let layout = ClockLayout::new(2.0);
        let r = VertexRegions::for_layout(&layout);
        let seq = [r.face, r.markers, r.hour, r.minute, r.second, r.hub];
        let mut end = 0u64;
        for region in seq {
            assert_eq!(region.offset, end, "regions must pack without gaps");
            end = region.offset + region.byte_len();
        }
        assert_eq!(end, r.total_bytes);
    }

    #[test]
    fn region_capacities_cover_generated_shapes() {
        let layout = ClockLayout::new(1.0);
        let r = VertexRegions::for_layout(&layout);
        let mut out = Vec::new();

        ring(
            &mut out,
            layout.face_radius,
            layout.face_inner_radius(),
            layout.face_segments,
        );
        assert!(out.len() <= r.face.capacity);

        marker_set(
            &mut out,
            layout.face_radius,
            layout.marker_length,
            layout.marker_thickness,
        );
        assert!(out.len() <= r.markers.capacity);

        hand(&mut out, 123.0, layout.minute_hand.length, layout.minute_hand.thickness);
        assert!(out.len() <= r.minute.capacity);

        ring(
            &mut out,
            layout.hub_radius,
            layout.hub_inner_radius(),
            layout.hub_segments,
        );
        assert!(out.len() <= r.hub.capacity);
    }

    #[test]
    fn scratch_capacity_is_never_exceeded() {
        // The frame loop must never regrow a scratch buffer: every shape a
        // scratch is used for fits in the capacity reserved at startup.
        let layout = ClockLayout::new(3.0);

        let mut hands = Vec::with_capacity(hand_family_capacity());
        let expected = hands.capacity();
        marker_set(
            &mut hands,
            layout.face_radius,
            layout.marker_length,
            layout.marker_thickness,
        );
        assert_eq!(hands.capacity(), expected);
        for spec in [layout.hour_hand, layout.minute_hand, layout.second_hand] {
            hand(&mut hands, 359.0, spec.length, spec.thickness);
            assert_eq!(hands.capacity(), expected);
        }

        let mut rings = Vec::with_capacity(ring_family_capacity(&layout));
        let expected = rings.capacity();
        ring(
            &mut rings,
            layout.hub_radius,
            layout.hub_inner_radius(),
            layout.hub_segments,
        );
        assert_eq!(rings.capacity(), expected);
    }

    #[test]
    fn material_slots_fit_their_stride() {
        assert!(std::mem::size_of::<MaterialUniforms>() as u64 <= MATERIAL_STRIDE);
        assert_eq!(SLOT_HUB as usize + 1, SLOT_COUNT);
    }
}
