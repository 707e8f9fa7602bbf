//! Major/minor graduation values.

/// Relative slack allowed when deciding whether the last major tick reaches `max_value`.
const RANGE_TOLERANCE: f64 = 1e-9;

/// Upper bound on major plus minor ticks for one dial.
pub const MAX_TICKS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub kind: TickKind,
}

/// Tick values for one dial, derived once from its range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickSet {
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
}

impl TickSet {
    /// Majors run from `min_value` in steps of `major_step` up to the last value
    /// not exceeding `max_value`. Each gap between consecutive majors gets
    /// `subdivisions - 1` evenly spaced minors.
    ///
    /// `major_step` must be positive, `max_value >= min_value` and the result
    /// no larger than [`MAX_TICKS`]; `DialConfig::validate` checks all three.
    pub fn generate(min_value: f64, max_value: f64, major_step: f64, subdivisions: u32) -> Self {
        let count = major_count(min_value, max_value, major_step) as usize;

        let major: Vec<f64> = (0..count)
            .map(|i| min_value + major_step * i as f64)
            .collect();

        let minor = if subdivisions <= 1 {
            Vec::new()
        } else {
            let minor_step = major_step / subdivisions as f64;
            major
                .iter()
                .take(count.saturating_sub(1))
                .flat_map(|&from| (1..subdivisions).map(move |j| from + minor_step * j as f64))
                .collect()
        };

        Self { major, minor }
    }

    /// Number of ticks [`TickSet::generate`] would produce, computed without
    /// allocating. Returned as `f64` so absurd ranges do not overflow.
    pub fn planned_len(min_value: f64, max_value: f64, major_step: f64, subdivisions: u32) -> f64 {
        let major = major_count(min_value, max_value, major_step);
        let per_gap = subdivisions.saturating_sub(1) as f64;
        major + (major - 1.0).max(0.0) * per_gap
    }

    /// Every tick, minors first so majors draw on top of them.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        let minor = self.minor.iter().map(|&value| Tick {
            value,
            kind: TickKind::Minor,
        });
        let major = self.major.iter().map(|&value| Tick {
            value,
            kind: TickKind::Major,
        });
        minor.chain(major)
    }

    pub fn len(&self) -> usize {
        self.major.len() + self.minor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.minor.is_empty()
    }
}

fn major_count(min_value: f64, max_value: f64, major_step: f64) -> f64 {
    let span = (max_value - min_value) / major_step;
    let last = (span + span.abs().max(1.0) * RANGE_TOLERANCE).floor();
    if last.is_finite() && last >= 0.0 {
        last + 1.0
    } else {
        0.0
    }
}
