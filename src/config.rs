use bon::Builder;

use crate::error::{Error, Result};
use crate::geometry::Angle;
use crate::scale::DialScale;
use crate::ticks::{TickSet, MAX_TICKS};

/// Color representation for dial elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Everything that defines a dial. Fixed once the dial is built.
///
/// Size-dependent fields are fractions of the dial's side length, so the same
/// configuration renders at any window size.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct DialConfig {
    // Range and graduations
    #[builder(default = 0.0)]
    pub min_value: f64,
    #[builder(default = 60.0)]
    pub max_value: f64,
    #[builder(default = 10.0)]
    pub major_step: f64,
    #[builder(default = 4)]
    pub subdivisions: u32,

    // Sweep, in degrees; 0° points right, positive is clockwise
    #[builder(default = Angle::from_degrees(-220.0))]
    pub start_angle: Angle,
    #[builder(default = Angle::from_degrees(40.0))]
    pub end_angle: Angle,

    // Colors
    #[builder(default = Color::new(0x1c, 0x1c, 0x1e))]
    pub background_color: Color,
    #[builder(default = Color::WHITE)]
    pub text_color: Color,
    #[builder(default = Color::new(0xd0, 0xd0, 0xd0))]
    pub tick_color: Color,
    #[builder(default = Color::new(0xff, 0x3b, 0x30))]
    pub hand_color: Color,

    // Ticks
    #[builder(default = 0.08)]
    pub major_tick_length: f64,
    #[builder(default = 0.012)]
    pub major_tick_thickness: f64,
    #[builder(default = 0.04)]
    pub minor_tick_length: f64,
    #[builder(default = 0.006)]
    pub minor_tick_thickness: f64,

    // Labels, radius as a fraction of the dial radius
    #[builder(default = 0.75)]
    pub label_radius: f64,
    #[builder(default = 0.07)]
    pub label_font_size: f64,

    #[builder(default = 0.01)]
    pub border_width: f64,

    // Needle
    #[builder(default = 0.4)]
    pub needle_length: f64,
    #[builder(default = 0.02)]
    pub needle_width: f64,
    #[builder(default = 0.2)]
    pub pivot_position: f64,
    #[builder(default = 0.04)]
    pub knob_radius: f64,

    // Needle spring, seconds and damping ratio
    #[builder(default = 0.55)]
    pub spring_response: f64,
    #[builder(default = 0.825)]
    pub spring_damping_fraction: f64,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DialConfig {
    pub fn scale(&self) -> DialScale {
        DialScale::new(
            self.min_value,
            self.max_value,
            self.start_angle,
            self.end_angle,
        )
    }

    /// Reject configurations that would produce NaN or inverted geometry.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("min_value", self.min_value),
            ("max_value", self.max_value),
            ("major_step", self.major_step),
            ("start_angle", self.start_angle.degrees()),
            ("end_angle", self.end_angle.degrees()),
            ("major_tick_length", self.major_tick_length),
            ("major_tick_thickness", self.major_tick_thickness),
            ("minor_tick_length", self.minor_tick_length),
            ("minor_tick_thickness", self.minor_tick_thickness),
            ("label_radius", self.label_radius),
            ("label_font_size", self.label_font_size),
            ("border_width", self.border_width),
            ("needle_length", self.needle_length),
            ("needle_width", self.needle_width),
            ("pivot_position", self.pivot_position),
            ("knob_radius", self.knob_radius),
            ("spring_response", self.spring_response),
            ("spring_damping_fraction", self.spring_damping_fraction),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::NonFinite(name));
        }
        if self.max_value <= self.min_value {
            return Err(Error::EmptyRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.major_step <= 0.0 {
            return Err(Error::InvalidStep(self.major_step));
        }
        if !(0.0..=1.0).contains(&self.pivot_position) {
            return Err(Error::InvalidPivot(self.pivot_position));
        }
        if self.spring_response <= 0.0 || self.spring_damping_fraction < 0.0 {
            return Err(Error::InvalidSpring {
                response: self.spring_response,
                damping_fraction: self.spring_damping_fraction,
            });
        }
        let count = TickSet::planned_len(
            self.min_value,
            self.max_value,
            self.major_step,
            self.subdivisions,
        );
        if count > MAX_TICKS as f64 {
            return Err(Error::TooManyTicks {
                count,
                limit: MAX_TICKS,
            });
        }
        Ok(())
    }
}

/// Configuration for the application window
#[derive(Debug, Clone, Builder)]
pub struct WindowOptions {
    #[builder(default = "Speedometer".to_string(), into)]
    pub title: String,
    #[builder(default = 400)]
    pub size: u32,
    #[builder(default = 60.0)]
    pub max_framerate: f64,
    #[builder(into)]
    pub font_path: Option<std::path::PathBuf>,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
