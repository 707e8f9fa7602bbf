//! Analog speedometer dial.
//!
//! A [`Speedometer`] turns a value range into tick marks, integer labels and a
//! needle. Ticks are derived once when the dial is built; the needle follows a
//! [`BoundValue`] owned by the caller. Rendering goes through a retained
//! [`Scene`] that is rasterised into an RGBA frame, either headless via
//! [`Speedometer::render_frame`] or in a window via [`Speedometer::show`].
//!
//! ```no_run
//! use speedometer::{BoundValue, DialConfig, Speedometer, WindowOptions};
//!
//! let dial = Speedometer::new(DialConfig::default())?;
//! let speed = BoundValue::new(0.0);
//! let feed = speed.clone();
//! std::thread::spawn(move || feed.set(42.0));
//! dial.show(&WindowOptions::default(), speed)?;
//! # Ok::<(), speedometer::Error>(())
//! ```

// ============================================================================
// MODULES
// ============================================================================

pub mod binding;
pub mod canvas;
pub mod config;
pub mod dial;
pub mod error;
pub mod font;
pub mod geometry;
pub mod needle;
pub mod render;
pub mod scale;
pub mod scene;
pub mod ticks;
mod window;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use binding::{BoundValue, ValueWatcher};
pub use canvas::Canvas;
pub use config::{Color, DialConfig, WindowOptions};
pub use dial::Speedometer;
pub use error::{Error, Result};
pub use geometry::{polar_offset, Angle, Point, Polar};
pub use needle::{NeedleAnimator, Spring};
pub use render::Layout;
pub use scale::DialScale;
pub use scene::{DrawCommand, Scene};
pub use ticks::{Tick, TickKind, TickSet};
