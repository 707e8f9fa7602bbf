use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Externally owned value displayed by the dial.
///
/// Clones share one cell: the feed writes, the render loop reads. Only the
/// latest value matters, so relaxed ordering is enough.
#[derive(Debug, Clone)]
pub struct BoundValue {
    bits: Arc<AtomicU64>,
}

impl BoundValue {
    pub fn new(value: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(value.to_bits())),
        }
    }

    pub fn set(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Default for BoundValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Reader side that reports a value only when it differs from the last one seen.
#[derive(Debug)]
pub struct ValueWatcher {
    source: BoundValue,
    last: Option<u64>,
}

impl ValueWatcher {
    pub fn new(source: BoundValue) -> Self {
        Self { source, last: None }
    }

    /// `Some(value)` on the first call and after every change.
    pub fn changed(&mut self) -> Option<f64> {
        let bits = self.source.bits.load(Ordering::Relaxed);
        if self.last == Some(bits) {
            return None;
        }
        self.last = Some(bits);
        Some(f64::from_bits(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_value() {
        let value = BoundValue::new(12.5);
        let writer = value.clone();
        writer.set(42.0);
        assert_eq!(value.get(), 42.0);
    }

    #[test]
    fn test_watcher_reports_changes_once() {
        let value = BoundValue::new(5.0);
        let mut watcher = ValueWatcher::new(value.clone());
        assert_eq!(watcher.changed(), Some(5.0));
        assert_eq!(watcher.changed(), None);

        value.set(5.0);
        assert_eq!(watcher.changed(), None);

        value.set(7.5);
        assert_eq!(watcher.changed(), Some(7.5));
        assert_eq!(watcher.changed(), None);
    }

    #[test]
    fn test_write_from_other_thread() {
        let value = BoundValue::default();
        let writer = value.clone();
        thread::spawn(move || writer.set(33.0))
            .join()
            .unwrap();
        assert_eq!(value.get(), 33.0);
    }
}
