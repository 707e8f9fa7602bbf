use crate::geometry::Angle;

/// Linear map from the dial's value range onto its sweep.
///
/// Values outside `[min_value, max_value]` are not clamped; they extrapolate
/// past the end angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialScale {
    pub min_value: f64,
    pub max_value: f64,
    pub start_angle: Angle,
    pub end_angle: Angle,
}

impl DialScale {
    pub fn new(min_value: f64, max_value: f64, start_angle: Angle, end_angle: Angle) -> Self {
        Self {
            min_value,
            max_value,
            start_angle,
            end_angle,
        }
    }

    /// Rescale `value` so that `min_value` maps to 0 and `max_value` to 1.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min_value) / (self.max_value - self.min_value)
    }

    pub fn angle_for(&self, value: f64) -> Angle {
        self.start_angle.lerp(self.end_angle, self.normalize(value))
    }
}
