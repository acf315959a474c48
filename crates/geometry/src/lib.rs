//! Procedural geometry for the clock face.
//!
//! Three shape families, all pure functions from scalar parameters to
//! triangle lists: a flat ring (face outline and center hub), a set of 12
//! radial wedges (hour markers), and an oriented rectangular prism (one
//! hand). Callers own the output buffers; the generators clear and refill
//! them, so a buffer reserved once from the count functions never
//! reallocates in the frame loop.
//!
//! # Invariants
//! - Generators are deterministic and never allocate beyond the caller's
//!   buffer.
//! - Every triangle's vertices share the winding and normal sign of the
//!   face they belong to (front faces +z, back faces -z).
//! - Degenerate parameters (zero radius, length, or segment count) emit
//!   zero vertices; an empty buffer is a no-op draw, not an error.

mod layout;
mod shapes;
mod vertex;

pub use layout::{ClockLayout, HandSpec};
pub use shapes::{
    HAND_VERTEX_COUNT, MARKER_COUNT, hand, marker_set, marker_set_vertex_count, ring,
    ring_vertex_count,
};
pub use vertex::Vertex;
