use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dial range is empty: max {max} must be greater than min {min}")]
    EmptyRange { min: f64, max: f64 },
    #[error("Major step must be positive, got {0}")]
    InvalidStep(f64),
    #[error("Configuration field `{0}` is not finite")]
    NonFinite(&'static str),
    #[error("Pivot position must lie in [0, 1], got {0}")]
    InvalidPivot(f64),
    #[error("Spring needs a positive response and non-negative damping, got {response}s and {damping_fraction}")]
    InvalidSpring { response: f64, damping_fraction: f64 },
    #[error("Dial would need {count} ticks, more than the limit of {limit}")]
    TooManyTicks { count: f64, limit: usize },
    #[error("Failed to read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse font {0}")]
    FontParse(PathBuf),
    #[error(transparent)]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error(transparent)]
    Window(#[from] winit::error::OsError),
    #[error(transparent)]
    Pixels(#[from] pixels::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
