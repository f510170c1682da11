use std::sync::Mutex;

/// Point-in-time view of the pipeline counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub snapshots: usize,
    pub series_painted: usize,
    pub records_filtered: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_snapshot(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.snapshots += 1;
        }
    }

    pub fn record_series(&self, painted: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.series_painted += painted;
        }
    }

    pub fn record_filtered(&self, dropped: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.records_filtered += dropped;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
