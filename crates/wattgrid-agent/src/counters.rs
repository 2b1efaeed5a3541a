//! Per-class request counters.
//!
//! One atomic counter per traffic class, incremented on the request
//! path and drained (read-and-reset) once per recomputation window.

use std::sync::atomic::{AtomicU64, Ordering};

use wattgrid_core::TrafficClass;
use wattgrid_scheduler::ClassRates;

/// Lock-free per-class request counters for the current window.
#[derive(Debug, Default)]
pub struct ClassCounters {
    sustained: AtomicU64,
    balanced: AtomicU64,
    performance: AtomicU64,
}

/// Raw counts drained from one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub sustained: u64,
    pub balanced: u64,
    pub performance: u64,
}

impl ClassCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified request.
    pub fn record(&self, class: TrafficClass) {
        self.slot(class).fetch_add(1, Ordering::Relaxed);
    }

    /// Atomically read and reset all three counters.
    ///
    /// A request recorded concurrently with the drain lands in either
    /// the ending window or the next one; both attributions are
    /// acceptable, so the three swaps need not be serialized as a unit.
    pub fn drain(&self) -> ClassCounts {
        ClassCounts {
            sustained: self.sustained.swap(0, Ordering::Relaxed),
            balanced: self.balanced.swap(0, Ordering::Relaxed),
            performance: self.performance.swap(0, Ordering::Relaxed),
        }
    }

    fn slot(&self, class: TrafficClass) -> &AtomicU64 {
        match class {
            TrafficClass::Sustained => &self.sustained,
            TrafficClass::Balanced => &self.balanced,
            TrafficClass::Performance => &self.performance,
        }
    }
}

impl ClassCounts {
    /// Normalize window counts to requests/second.
    pub fn rates(self, interval_secs: u64) -> ClassRates {
        let secs = interval_secs.max(1) as f64;
        ClassRates {
            sustained: self.sustained as f64 / secs,
            balanced: self.balanced as f64 / secs,
            performance: self.performance as f64 / secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn drain_resets_counters() {
        let counters = ClassCounters::new();
        counters.record(TrafficClass::Sustained);
        counters.record(TrafficClass::Sustained);
        counters.record(TrafficClass::Performance);

        let counts = counters.drain();
        assert_eq!(
            counts,
            ClassCounts {
                sustained: 2,
                balanced: 0,
                performance: 1
            }
        );

        assert_eq!(counters.drain(), ClassCounts::default());
    }

    #[test]
    fn rates_divide_by_interval() {
        let counts = ClassCounts {
            sustained: 30,
            balanced: 15,
            performance: 0,
        };
        let rates = counts.rates(30);
        assert_eq!(rates.sustained, 1.0);
        assert_eq!(rates.balanced, 0.5);
        assert_eq!(rates.performance, 0.0);
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let counters = Arc::new(ClassCounters::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let counters = Arc::clone(&counters);
            handles.push(std::thread::spawn(move || {
                for _ in 0..1000 {
                    counters.record(TrafficClass::Balanced);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.drain().balanced, 8000);
    }
}
