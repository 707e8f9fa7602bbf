// ============================================================================
// RETAINED MODE DRAW LIST
// ============================================================================

use crate::canvas::Canvas;
use crate::config::Color;
use crate::geometry::{polar_offset, Angle, Point};
use crate::ticks::TickKind;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Disc {
        center: Point,
        radius: f64,
        color: Color,
    },
    Ring {
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    },
    /// Radial bar centered on `center`, long axis along `angle`.
    Tick {
        kind: TickKind,
        value: f64,
        center: Point,
        angle: Angle,
        length: f64,
        thickness: f64,
        color: Color,
    },
    Label {
        center: Point,
        text: String,
        font_size: f64,
        color: Color,
    },
    /// Needle body from `back` through the pivot to `tip`.
    Needle {
        pivot: Point,
        angle: Angle,
        back: Point,
        tip: Point,
        width: f64,
        color: Color,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn ticks(&self, kind: TickKind) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::Tick { kind: k, .. } if *k == kind))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn needle_angle(&self) -> Option<Angle> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Needle { angle, .. } => Some(*angle),
            _ => None,
        })
    }

    pub fn render(&self, canvas: &mut Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Disc {
                    center,
                    radius,
                    color,
                } => canvas.fill_disc(*center, *radius, *color),
                DrawCommand::Ring {
                    center,
                    radius,
                    width,
                    color,
                } => canvas.stroke_ring(*center, *radius, *width, *color),
                DrawCommand::Tick {
                    center,
                    angle,
                    length,
                    thickness,
                    color,
                    ..
                } => {
                    let half = polar_offset(length / 2.0, *angle);
                    canvas.fill_bar(*center - half, *center + half, *thickness, *color);
                }
                DrawCommand::Label {
                    center,
                    text,
                    font_size,
                    color,
                } => canvas.draw_text(*center, text, *font_size, *color),
                DrawCommand::Needle {
                    back,
                    tip,
                    width,
                    color,
                    ..
                } => canvas.fill_bar(*back, *tip, *width, *color),
            }
        }
    }
}
