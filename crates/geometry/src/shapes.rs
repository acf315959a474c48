use crate::Vertex;

/// Number of markers around the dial, one per hour position.
pub const MARKER_COUNT: u32 = 12;

/// A hand is a rectangle with a front and a back face: 4 triangles.
pub const HAND_VERTEX_COUNT: usize = 12;

/// Half-depth of a hand prism along z. Hands float in front of the face
/// plane so depth testing orders them over the ring.
const HAND_DEPTH: f32 = 2.0;

/// Half-depth of a marker wedge along z, slightly proud of the hands.
const MARKER_DEPTH: f32 = 3.0;

/// Vertices emitted by [`ring`] for a given segment count.
pub fn ring_vertex_count(segments: u32) -> usize {
    segments as usize * 6
}

/// Vertices emitted by [`marker_set`]: 12 vertices per marker.
pub fn marker_set_vertex_count() -> usize {
    (MARKER_COUNT as usize) * 12
}

/// Flat annulus between `inner_radius` and `radius`, facing +z.
///
/// Emits two triangles per angular step, all normals (0, 0, 1). Used for
/// the face outline and, with a near-degenerate inner radius, the center
/// hub. `segments == 0` or a non-positive radius emits nothing.
pub fn ring(out: &mut Vec<Vertex>, radius: f32, inner_radius: f32, segments: u32) {
    out.clear();
    if segments == 0 || radius <= 0.0 {
        return;
    }

    let normal = [0.0, 0.0, 1.0];
    let step = std::f32::consts::TAU / segments as f32;

    for i in 0..segments {
        let angle1 = i as f32 * step;
        let angle2 = (i + 1) as f32 * step;

        let (o1x, o1y) = (radius * angle1.cos(), radius * angle1.sin());
        let (o2x, o2y) = (radius * angle2.cos(), radius * angle2.sin());
        let (i1x, i1y) = (inner_radius * angle1.cos(), inner_radius * angle1.sin());
        let (i2x, i2y) = (inner_radius * angle2.cos(), inner_radius * angle2.sin());

        // Outer triangle
        out.push(Vertex::new([o1x, o1y, 0.0], normal));
        out.push(Vertex::new([o2x, o2y, 0.0], normal));
        out.push(Vertex::new([i1x, i1y, 0.0], normal));

        // Inner triangle
        out.push(Vertex::new([i1x, i1y, 0.0], normal));
        out.push(Vertex::new([o2x, o2y, 0.0], normal));
        out.push(Vertex::new([i2x, i2y, 0.0], normal));
    }
}

/// One clock hand: a rectangular prism from the dial center toward
/// `angle_degrees`, measured clockwise from 12 o'clock.
///
/// The direction is (-sin, cos) so that 0 degrees points straight up and
/// positive angles sweep clockwise under the mirrored-x convention the
/// whole dial uses. Front face at z = +2 (normal +z), back face at z = -2
/// (normal -z), so the hand is lit correctly from either side.
/// Non-positive length or thickness emits nothing.
pub fn hand(out: &mut Vec<Vertex>, angle_degrees: f64, length: f32, thickness: f32) {
    out.clear();
    if length <= 0.0 || thickness <= 0.0 {
        return;
    }

    let radians = angle_degrees.to_radians();
    let (sin_a, cos_a) = (radians.sin() as f32, radians.cos() as f32);

    let end_x = -length * sin_a;
    let end_y = length * cos_a;

    let half_thick = thickness * 0.5;
    let perp_x = cos_a * half_thick;
    let perp_y = sin_a * half_thick;

    let front = [0.0, 0.0, 1.0];
    let back = [0.0, 0.0, -1.0];
    let z = HAND_DEPTH;

    // Front face
    out.push(Vertex::new([-perp_x, -perp_y, z], front));
    out.push(Vertex::new([perp_x, perp_y, z], front));
    out.push(Vertex::new([end_x + perp_x, end_y + perp_y, z], front));

    out.push(Vertex::new([-perp_x, -perp_y, z], front));
    out.push(Vertex::new([end_x + perp_x, end_y + perp_y, z], front));
    out.push(Vertex::new([end_x - perp_x, end_y - perp_y, z], front));

    // Back face, winding reversed
    out.push(Vertex::new([perp_x, perp_y, -z], back));
    out.push(Vertex::new([-perp_x, -perp_y, -z], back));
    out.push(Vertex::new([end_x - perp_x, end_y - perp_y, -z], back));

    out.push(Vertex::new([perp_x, perp_y, -z], back));
    out.push(Vertex::new([end_x - perp_x, end_y - perp_y, -z], back));
    out.push(Vertex::new([end_x + perp_x, end_y + perp_y, -z], back));
}

/// Twelve radial wedges marking the hour positions, 30 degrees apart
/// starting at 12 o'clock.
///
/// Each wedge spans `[radius - marker_length, radius]` radially, offset by
/// half the thickness perpendicular to the radial direction, with a front
/// quad at z = +3 and a back quad at z = -3. Construction matches [`hand`]
/// but with the fixed 12-fold angular distribution. Non-positive radius or
/// marker length emits nothing.
pub fn marker_set(out: &mut Vec<Vertex>, radius: f32, marker_length: f32, marker_thickness: f32) {
    out.clear();
    if radius <= 0.0 || marker_length <= 0.0 || marker_thickness <= 0.0 {
        return;
    }

    let front = [0.0, 0.0, 1.0];
    let back = [0.0, 0.0, -1.0];
    let z = MARKER_DEPTH;

    for hour in 0..MARKER_COUNT {
        let angle = (hour as f64 * 30.0).to_radians();
        let (sin_a, cos_a) = (angle.sin() as f32, angle.cos() as f32);

        let inner_radius = radius - marker_length;
        let (ox, oy) = (-radius * sin_a, radius * cos_a);
        let (ix, iy) = (-inner_radius * sin_a, inner_radius * cos_a);

        let perp_x = -cos_a * marker_thickness * 0.5;
        let perp_y = -sin_a * marker_thickness * 0.5;

        // Front face
        out.push(Vertex::new([ix - perp_x, iy - perp_y, z], front));
        out.push(Vertex::new([ix + perp_x, iy + perp_y, z], front));
        out.push(Vertex::new([ox + perp_x, oy + perp_y, z], front));

        out.push(Vertex::new([ix - perp_x, iy - perp_y, z], front));
        out.push(Vertex::new([ox + perp_x, oy + perp_y, z], front));
        out.push(Vertex::new([ox - perp_x, oy - perp_y, z], front));

        // Back face, winding reversed
        out.push(Vertex::new([ix + perp_x, iy + perp_y, -z], back));
        out.push(Vertex::new([ix - perp_x, iy - perp_y, -z], back));
        out.push(Vertex::new([ox - perp_x, oy - perp_y, -z], back));

        out.push(Vertex::new([ix + perp_x, iy + perp_y, -z], back));
        out.push(Vertex::new([ox - perp_x, oy - perp_y, -z], back));
        out.push(Vertex::new([ox + perp_x, oy + perp_y, -z], back));
    }
}
