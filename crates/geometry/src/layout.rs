/// Length and thickness of one hand, in scaled world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSpec {
    pub length: f32,
    pub thickness: f32,
}

/// Immutable per-session layout constants for the dial.
///
/// Every length-valued constant is the logical design value multiplied by
/// the device scale factor, computed once at startup. The ring band depth
/// is a fixed 10 world units regardless of scale, matching the visual
/// weight of the outline against the perspective camera distance.
#[derive(Debug, Clone, Copy)]
pub struct ClockLayout {
    pub scale: f32,
    pub face_radius: f32,
    pub face_segments: u32,
    pub marker_length: f32,
    pub marker_thickness: f32,
    pub hour_hand: HandSpec,
    pub minute_hand: HandSpec,
    pub second_hand: HandSpec,
    pub hub_radius: f32,
    pub hub_segments: u32,
}

/// Logical face radius before device scaling.
pub const FACE_RADIUS: f32 = 250.0;

/// Radial depth of the face outline and hub rings.
const RING_BAND: f32 = 10.0;

impl ClockLayout {
    /// Builds the layout for a given device scale factor.
    pub fn new(scale: f32) -> Self {
        let face_radius = FACE_RADIUS * scale;
        Self {
            scale,
            face_radius,
            face_segments: 60,
            marker_length: face_radius / 12.0,
            marker_thickness: face_radius / 80.0,
            hour_hand: HandSpec {
                length: 120.0 * scale,
                thickness: 8.0 * scale,
            },
            minute_hand: HandSpec {
                length: 180.0 * scale,
                thickness: 6.0 * scale,
            },
            second_hand: HandSpec {
                length: 200.0 * scale,
                thickness: 3.0 * scale,
            },
            hub_radius: 12.0 * scale,
            hub_segments: 20,
        }
    }

    /// Inner radius of the face outline ring.
    pub fn face_inner_radius(&self) -> f32 {
        self.face_radius - RING_BAND
    }

    /// Inner radius of the center hub; degenerates to a filled disc at
    /// small scales.
    pub fn hub_inner_radius(&self) -> f32 {
        (self.hub_radius - RING_BAND).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_scale_matches_design_values() {
        let l = ClockLayout::new(1.0);
        assert_eq!(l.face_radius, 250.0);
        assert_eq!(l.marker_length, 250.0 / 12.0);
        assert_eq!(l.marker_thickness, 250.0 / 80.0);
        assert_eq!(l.hour_hand.length, 120.0);
        assert_eq!(l.minute_hand.length, 180.0);
        assert_eq!(l.second_hand.length, 200.0);
        assert_eq!(l.face_inner_radius(), 240.0);
    }

    #[test]
    fn scale_multiplies_every_length() {
        let base = ClockLayout::new(1.0);
        let hidpi = ClockLayout::new(2.0);
        assert_eq!(hidpi.face_radius, base.face_radius * 2.0);
        assert_eq!(hidpi.marker_length, base.marker_length * 2.0);
        assert_eq!(hidpi.hour_hand.thickness, base.hour_hand.thickness * 2.0);
        assert_eq!(hidpi.second_hand.length, base.second_hand.length * 2.0);
        assert_eq!(hidpi.hub_radius, base.hub_radius * 2.0);
        // Segment counts are density choices, not lengths.
        assert_eq!(hidpi.face_segments, base.face_segments);
        assert_eq!(hidpi.hub_segments, base.hub_segments);
    }

    #[test]
    fn hub_inner_radius_never_negative() {
        let tiny = ClockLayout::new(0.1);
        assert_eq!(tiny.hub_inner_radius(), 0.0);
    }
}
