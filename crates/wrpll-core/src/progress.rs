//! Progress tracking for table verification.
//!
//! Each table entry costs one full divider search, so work is linear in the
//! number of entries. The tracker reports the completed fraction through a
//! callback, throttled to whole-percent steps plus the first and last entry.
//! It is safe to drive from several rayon workers at once.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Function type for reporting progress updates (0.0 to 1.0).
pub type ProgressReporter = Box<dyn Fn(f64) + Send + Sync>;

/// Counts completed entries and forwards throttled updates to a reporter.
pub struct ProgressTracker<'a> {
    reporter: Option<&'a ProgressReporter>,
    total: usize,
    done: AtomicUsize,
    last_percent: AtomicUsize,
}

impl<'a> ProgressTracker<'a> {
    /// Creates a tracker for `total` entries.
    pub fn new(reporter: Option<&'a ProgressReporter>, total: usize) -> Self {
        Self {
            reporter,
            total,
            done: AtomicUsize::new(0),
            last_percent: AtomicUsize::new(0),
        }
    }

    /// Records one completed entry.
    pub fn step(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        let Some(report) = self.reporter else {
            return;
        };
        if self.total == 0 {
            return;
        }

        let done = done.min(self.total);
        let percent = done * 100 / self.total;

        // Report if:
        // 1. It's the first entry
        // 2. It's the last entry
        // 3. Progress crossed a whole percent since the last report
        let is_start = done == 1;
        let is_end = done == self.total;
        let significant_change = self.last_percent.fetch_max(percent, Ordering::Relaxed) < percent;

        if is_start || is_end || significant_change {
            report(done as f64 / self.total as f64);
        }
    }

    /// Number of entries recorded so far.
    pub fn completed(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_reporter() -> (ProgressReporter, Arc<Mutex<Vec<f64>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let reporter: ProgressReporter = Box::new(move |p| seen_clone.lock().unwrap().push(p));
        (reporter, seen)
    }

    #[test]
    fn no_reporter_still_counts() {
        let tracker = ProgressTracker::new(None, 10);
        for _ in 0..10 {
            tracker.step();
        }
        assert_eq!(tracker.completed(), 10);
    }

    #[test]
    fn zero_total_never_reports() {
        let (reporter, seen) = recording_reporter();
        let tracker = ProgressTracker::new(Some(&reporter), 0);
        tracker.step();
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn progress_monotonicity_and_bounds() {
        let (reporter, seen) = recording_reporter();
        let total = 373;
        let tracker = ProgressTracker::new(Some(&reporter), total);

        for _ in 0..total {
            tracker.step();
        }

        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]), "Progress decreased");
        assert!(seen.iter().all(|p| (0.0..=1.0).contains(p)));
        assert_eq!(*seen.last().unwrap(), 1.0);
        // Throttled: at most one report per percent plus the first entry.
        assert!(seen.len() <= 101, "Too many reports: {}", seen.len());
        assert_eq!(tracker.completed(), total);
    }

    #[test]
    fn small_totals_report_every_step() {
        let (reporter, seen) = recording_reporter();
        let tracker = ProgressTracker::new(Some(&reporter), 4);
        for _ in 0..4 {
            tracker.step();
        }
        assert_eq!(*seen.lock().unwrap(), vec![0.25, 0.5, 0.75, 1.0]);
    }
}
