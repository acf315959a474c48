use bytemuck::{Pod, Zeroable};

/// One vertex as uploaded to the GPU: world-space position plus the face
/// normal used by the lighting model.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    /// Distance from the z axis, ignoring depth. Used by tests to check
    /// radial placement.
    pub fn planar_distance(&self) -> f32 {
        let [x, y, _] = self.position;
        (x * x + y * y).sqrt()
    }
}
