use std::sync::Arc;
use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::binding::{BoundValue, ValueWatcher};
use crate::config::WindowOptions;
use crate::dial::Speedometer;
use crate::error::Result;
use crate::font::resolve_font;

impl Speedometer {
    /// Open a square window and display `value` until the window is closed.
    ///
    /// The needle is retargeted whenever the bound value changes and eased
    /// there by the spring; the dial redraws at most `max_framerate` times a second.
    pub fn show(&self, options: &WindowOptions, value: BoundValue) -> Result<()> {
        let font = resolve_font(options.font_path.as_deref())?;

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&options.title)
            .with_inner_size(LogicalSize::new(options.size as f64, options.size as f64))
            .with_resizable(false)
            .build(&event_loop)?;
        let window = Arc::new(window);

        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;
        log::info!(
            "Showing \"{}\" at {}x{} physical pixels",
            options.title,
            fb_width,
            fb_height
        );

        // rest on the minimum; the first frame picks up the bound value and sweeps to it
        let mut watcher = ValueWatcher::new(value);
        let mut needle = self.animator(self.config().min_value);

        let frame_duration = Duration::from_secs_f64(1.0 / options.max_framerate.max(1.0));
        let mut last_frame = Instant::now();
        let mut last_step = Instant::now();
        let window_clone = window.clone();

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::WaitUntil(last_frame + frame_duration));
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        fb_width = new_size.width as usize;
                        fb_height = new_size.height as usize;
                        if let Err(e) = pixels.resize_buffer(new_size.width, new_size.height) {
                            log::warn!("Failed to resize buffer: {}", e);
                        }
                        if let Err(e) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::warn!("Failed to resize surface: {}", e);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        self.track(&mut watcher, &mut needle);
                        needle.advance(last_step.elapsed());
                        last_step = Instant::now();

                        self.render_frame(
                            pixels.frame_mut(),
                            fb_width,
                            fb_height,
                            needle.angle(),
                            font.as_ref(),
                        );
                        if let Err(e) = pixels.render() {
                            log::error!("Render failed: {}", e);
                            window_target.exit();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}
