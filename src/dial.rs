use rusttype::Font;

use crate::binding::ValueWatcher;
use crate::canvas::Canvas;
use crate::config::DialConfig;
use crate::error::Result;
use crate::geometry::Angle;
use crate::needle::{NeedleAnimator, Spring};
use crate::render::{add_background, add_labels, add_needle, add_ticks, Layout};
use crate::scale::DialScale;
use crate::scene::{DrawCommand, Scene};
use crate::ticks::TickSet;

/// A speedometer dial: validated configuration plus the ticks derived from it.
///
/// Rendering is a pure function of the dial, the target size and the needle
/// angle; the caller decides when to redraw.
#[derive(Debug, Clone)]
pub struct Speedometer {
    config: DialConfig,
    scale: DialScale,
    ticks: TickSet,
}

impl Speedometer {
    pub fn new(config: DialConfig) -> Result<Self> {
        config.validate()?;
        let scale = config.scale();
        let ticks = TickSet::generate(
            config.min_value,
            config.max_value,
            config.major_step,
            config.subdivisions,
        );
        log::debug!(
            "Dial {}..{} with {} major and {} minor ticks",
            config.min_value,
            config.max_value,
            ticks.major.len(),
            ticks.minor.len()
        );
        Ok(Self {
            config,
            scale,
            ticks,
        })
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn scale(&self) -> &DialScale {
        &self.scale
    }

    pub fn ticks(&self) -> &TickSet {
        &self.ticks
    }

    pub fn needle_angle(&self, value: f64) -> Angle {
        self.scale.angle_for(value)
    }

    pub fn layout(&self, width: usize, height: usize) -> Layout {
        Layout::fit(width, height)
    }

    /// Needle animator resting on `value`, tuned by the configured spring.
    pub fn animator(&self, value: f64) -> NeedleAnimator {
        NeedleAnimator::new(
            Spring::from_response(
                self.config.spring_response,
                self.config.spring_damping_fraction,
            ),
            self.needle_angle(value),
        )
    }

    /// Retarget `needle` if the watched value changed since the last call.
    ///
    /// Non-finite values are logged and skipped, leaving the needle heading for
    /// the last good value. Returns whether the target moved.
    pub fn track(&self, watcher: &mut ValueWatcher, needle: &mut NeedleAnimator) -> bool {
        let Some(value) = watcher.changed() else {
            return false;
        };
        if !value.is_finite() {
            log::warn!("Ignoring non-finite value {}", value);
            return false;
        }
        log::debug!("Bound value changed to {}", value);
        needle.set_target(self.needle_angle(value));
        true
    }

    pub fn scene(&self, layout: &Layout, needle_angle: Angle) -> Scene {
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Clear(self.config.background_color));
        add_background(&mut scene, layout, &self.config);
        add_ticks(&mut scene, layout, &self.config, &self.scale, &self.ticks);
        add_labels(&mut scene, layout, &self.config, &self.scale, &self.ticks);
        add_needle(&mut scene, layout, &self.config, needle_angle);
        scene
    }

    /// Rasterise one frame into an RGBA8 buffer of `width` x `height` pixels.
    ///
    /// Outside the dial's square the frame is filled with the background color.
    pub fn render_frame(
        &self,
        frame: &mut [u8],
        width: usize,
        height: usize,
        needle_angle: Angle,
        font: Option<&Font<'static>>,
    ) {
        let layout = self.layout(width, height);
        let mut canvas = Canvas::new(frame, width, height).with_font(font);
        self.scene(&layout, needle_angle).render(&mut canvas);
    }
}
