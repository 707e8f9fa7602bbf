// ============================================================================
// DIAL ELEMENTS
// ============================================================================

use crate::config::DialConfig;
use crate::geometry::{polar_offset, Angle, Point};
use crate::scale::DialScale;
use crate::scene::{DrawCommand, Scene};
use crate::ticks::{TickKind, TickSet};

/// The square the dial occupies on the target surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub center: Point,
    pub side: f64,
}

impl Layout {
    /// Largest square centered in a `width` x `height` surface.
    pub fn fit(width: usize, height: usize) -> Self {
        Self {
            center: Point::new(width as f64 / 2.0, height as f64 / 2.0),
            side: width.min(height) as f64,
        }
    }

    pub fn radius(&self) -> f64 {
        self.side / 2.0
    }
}

/// Label text for a major tick: the nearest integer, with halves rounded
/// away from zero (`2.5` gives `3`, `-2.5` gives `-3`). No grouping separators.
pub fn format_label(value: f64) -> String {
    format!("{}", value.round() as i64)
}

pub fn add_background(scene: &mut Scene, layout: &Layout, config: &DialConfig) {
    scene.add_command(DrawCommand::Disc {
        center: layout.center,
        radius: layout.radius(),
        color: config.background_color,
    });
    scene.add_command(DrawCommand::Ring {
        center: layout.center,
        radius: layout.radius(),
        width: config.border_width * layout.side,
        color: config.tick_color,
    });
}

/// Graduation bars, pushed inward by half their length so they stay inside the dial.
pub fn add_ticks(
    scene: &mut Scene,
    layout: &Layout,
    config: &DialConfig,
    scale: &DialScale,
    ticks: &TickSet,
) {
    for tick in ticks.ticks() {
        let (length, thickness) = match tick.kind {
            TickKind::Major => (config.major_tick_length, config.major_tick_thickness),
            TickKind::Minor => (config.minor_tick_length, config.minor_tick_thickness),
        };
        let length = length * layout.side;
        let angle = scale.angle_for(tick.value);
        let radius = layout.radius() - length / 2.0;
        scene.add_command(DrawCommand::Tick {
            kind: tick.kind,
            value: tick.value,
            center: layout.center + polar_offset(radius, angle),
            angle,
            length,
            thickness: thickness * layout.side,
            color: config.tick_color,
        });
    }
}

pub fn add_labels(
    scene: &mut Scene,
    layout: &Layout,
    config: &DialConfig,
    scale: &DialScale,
    ticks: &TickSet,
) {
    let radius = layout.radius() * config.label_radius;
    for &value in &ticks.major {
        scene.add_command(DrawCommand::Label {
            center: layout.center + polar_offset(radius, scale.angle_for(value)),
            text: format_label(value),
            font_size: config.label_font_size * layout.side,
            color: config.text_color,
        });
    }
}

/// Needle rotated about a pivot `pivot_position` of the way along its length,
/// plus the knob covering the pivot.
pub fn add_needle(scene: &mut Scene, layout: &Layout, config: &DialConfig, angle: Angle) {
    let length = config.needle_length * layout.side;
    let behind = length * config.pivot_position;
    scene.add_command(DrawCommand::Needle {
        pivot: layout.center,
        angle,
        back: layout.center - polar_offset(behind, angle),
        tip: layout.center + polar_offset(length - behind, angle),
        width: config.needle_width * layout.side,
        color: config.hand_color,
    });
    scene.add_command(DrawCommand::Disc {
        center: layout.center,
        radius: config.knob_radius * layout.side,
        color: config.hand_color,
    });
}
