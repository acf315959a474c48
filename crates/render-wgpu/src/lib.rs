//! wgpu render backend for the clock.
//!
//! Owns every GPU-side resource (pipeline, uniform and vertex buffers,
//! depth texture) plus the host scratch buffers, and drives the strictly
//! ordered per-frame sequence: clear, camera and light uniforms, face
//! ring, markers, hands, hub, submit.
//!
//! # Invariants
//! - All resources are acquired once at construction and released once on
//!   drop; the frame loop never creates or resizes buffers.
//! - The face ring is the only precomputed geometry; hands, markers, and
//!   hub are regenerated every frame.
//! - Shader diagnostics are logged, never fatal; degenerate geometry is a
//!   zero-vertex draw, never an error.

mod renderer;
mod shader;
mod shaders;

pub use renderer::ClockRenderer;
pub use shader::{ShaderError, create_shader_module, validate_wgsl};
pub use shaders::CLOCK_SHADER;
