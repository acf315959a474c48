//! Minimal 3D math for the clock renderer.
//!
//! The renderer needs exactly three matrix constructors (identity,
//! perspective, look-at) and a handful of vector operations; this crate
//! builds them from first principles rather than re-exporting a
//! linear-algebra dependency.
//!
//! # Invariants
//! - All constructors are pure; no shared state, no allocation.
//! - Raw matrix indices never leave this crate.

mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;
