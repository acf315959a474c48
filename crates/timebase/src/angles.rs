use crate::ClockSample;

/// Instantaneous rotation of each hand, in degrees clockwise from the
/// 12 o'clock position. Unbounded; consumers convert to radians at the
/// point of use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl SweepAngles {
    /// Derives the three sweep angles from one clock sample.
    ///
    /// Each hand is advanced continuously by the next-finer unit: the
    /// second hand by the sub-second fraction (6 degrees per second), the
    /// minute hand by seconds (0.1 degrees each), the hour hand by minutes
    /// (0.5 degrees each). This is what makes the hands creep instead of
    /// tick.
    pub fn from_sample(sample: &ClockSample) -> Self {
        Self {
            hour: f64::from(sample.hours) * 30.0 + f64::from(sample.minutes) * 0.5,
            minute: f64::from(sample.minutes) * 6.0 + f64::from(sample.seconds) * 0.1,
            second: (f64::from(sample.seconds) + sample.subsecond()) * 6.0,
        }
    }

    /// The same angles negated, for geometry generated in the mirrored-x
    /// 3D convention. Applied to all three hands uniformly so motion reads
    /// clockwise on screen.
    pub fn mirrored(self) -> Self {
        Self {
            hour: -self.hour,
            minute: -self.minute,
            second: -self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hours: u32, minutes: u32, seconds: u32, millis: u32) -> ClockSample {
        ClockSample {
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn three_oclock_sharp() {
        let a = SweepAngles::from_sample(&sample(3, 0, 0, 0));
        assert_close(a.hour, 90.0);
        assert_close(a.minute, 0.0);
        assert_close(a.second, 0.0);
    }

    #[test]
    fn six_thirty_and_change() {
        let a = SweepAngles::from_sample(&sample(6, 30, 45, 500));
        assert_close(a.hour, 195.0);
        assert_close(a.minute, 184.5);
        assert_close(a.second, 273.0);
    }

    #[test]
    fn twelve_wraps_to_zero() {
        let a = SweepAngles::from_sample(&sample(0, 0, 0, 0));
        assert_close(a.hour, 0.0);
        assert_close(a.minute, 0.0);
        assert_close(a.second, 0.0);
    }

    #[test]
    fn second_hand_is_continuous_across_rollover() {
        // 999 ms before the rollover vs. the rollover itself: the step must
        // not exceed one whole-second angular step (6 degrees).
        let before = SweepAngles::from_sample(&sample(3, 15, 41, 999));
        let after = SweepAngles::from_sample(&sample(3, 15, 42, 0));
        let step = after.second - before.second;
        assert!(step > 0.0 && step <= 6.0 / 1000.0 + 1e-9, "step {step}");
    }

    #[test]
    fn minute_hand_carries_from_seconds() {
        let before = SweepAngles::from_sample(&sample(3, 15, 59, 0));
        let after = SweepAngles::from_sample(&sample(3, 16, 0, 0));
        let step = after.minute - before.minute;
        assert_close(step, 0.1);
    }

    #[test]
    fn hour_hand_carries_from_minutes() {
        let before = SweepAngles::from_sample(&sample(3, 59, 0, 0));
        let after = SweepAngles::from_sample(&sample(4, 0, 0, 0));
        let step = after.hour - before.hour;
        assert_close(step, 0.5);
    }

    #[test]
    fn mirrored_negates_all_three() {
        let a = SweepAngles::from_sample(&sample(6, 30, 45, 500)).mirrored();
        assert_close(a.hour, -195.0);
        assert_close(a.minute, -184.5);
        assert_close(a.second, -273.0);
    }
}
