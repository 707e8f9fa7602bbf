use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::Rng;
use speedometer::{BoundValue, DialConfig, Speedometer, WindowOptions};

#[derive(Parser, Debug)]
#[command(version, about = "Analog speedometer fed from stdin", long_about = None)]
struct Args {
    /// Window title
    #[arg(long, default_value = "Speedometer")]
    title: String,

    /// Window side length in logical pixels
    #[arg(long, default_value_t = 400)]
    size: u32,

    /// Redraw limit in frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Font for the labels (TTF/OTF); a system font is used when omitted
    #[arg(long)]
    font: Option<PathBuf>,

    /// Drive the needle with a random walk instead of reading stdin
    #[arg(long)]
    demo: bool,

    /// Value shown before the first update arrives
    #[arg(long, default_value_t = 0.0)]
    initial: f64,
}

/// One value per line; anything that does not parse is skipped.
fn feed_from_stdin(value: BoundValue) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read stdin: {}", e);
                break;
            }
        };
        match line.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => value.set(v),
            _ => log::warn!("Skipping input line {:?}", line),
        }
    }
    log::info!("Input closed; holding last value {}", value.get());
}

/// Ease toward a random target, picking a new one every so often.
fn feed_random_walk(value: BoundValue, min: f64, max: f64) {
    let mut rng = rand::rng();
    let mut current = value.get();
    let mut target = rng.random_range(min..max);
    loop {
        if rng.random_range(0.0..1.0) < 0.02 {
            target = rng.random_range(min..max);
        }
        current += (target - current) * 0.1;
        value.set(current);
        thread::sleep(Duration::from_millis(50));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let dial = Speedometer::new(DialConfig::default())?;
    let options = WindowOptions::builder()
        .title(args.title)
        .size(args.size)
        .max_framerate(args.fps)
        .maybe_font_path(args.font)
        .build();

    let value = BoundValue::new(args.initial);
    let feed = value.clone();
    if args.demo {
        let (min, max) = (dial.config().min_value, dial.config().max_value);
        thread::spawn(move || feed_random_walk(feed, min, max));
    } else {
        thread::spawn(move || feed_from_stdin(feed));
    }

    dial.show(&options, value)?;
    Ok(())
}
