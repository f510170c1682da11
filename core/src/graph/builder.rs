use crate::band::ChannelBoundaryPair;
use crate::graph::curve::{footprint, CurvePoint, POINTS_PER_SERIES};
use crate::graph::filter;
use crate::graph::surface::PlottingSurface;
use crate::model::{ScanSnapshot, SignalRecord};
use crate::telemetry::{LogManager, MetricsRecorder};
use std::collections::BTreeSet;

/// Series painted for one channel span of a snapshot.
#[derive(Debug, Clone)]
pub struct SpanReport {
    pub span: ChannelBoundaryPair,
    pub series: usize,
}

/// Turns scan snapshots into plotted series on a [`PlottingSurface`].
pub struct GraphDataBuilder {
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl GraphDataBuilder {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new("graph"),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Records belonging to one rendered graph segment, de-duplicated by
    /// identity.
    pub fn records_in_span(
        &self,
        records: &[SignalRecord],
        span: &ChannelBoundaryPair,
    ) -> BTreeSet<SignalRecord> {
        filter::select(records, span)
    }

    /// The five-point footprint curve for one record.
    pub fn curve_points(&self, record: &SignalRecord) -> [CurvePoint; POINTS_PER_SERIES] {
        footprint(record)
    }

    /// Creates or refreshes one series per record. Every series is currently
    /// plotted highlighted; the flag distinguishes primary networks later.
    pub fn paint_series(
        &self,
        surface: &mut dyn PlottingSurface,
        records: &BTreeSet<SignalRecord>,
    ) {
        for record in records {
            let points = footprint(record);
            if surface.is_new_series(record) {
                surface.add_series(record, &points, true);
            } else {
                surface.update_series(record, &points, true);
            }
        }
    }

    /// Walks every channel span of the snapshot's band, painting the in-span
    /// records onto the surface.
    pub fn process_snapshot(
        &self,
        surface: &mut dyn PlottingSurface,
        snapshot: &ScanSnapshot,
    ) -> Vec<SpanReport> {
        let mut reports = Vec::new();
        let mut painted = 0usize;

        for span in snapshot.band.channel_spans() {
            let records = self.records_in_span(&snapshot.records, &span);
            self.paint_series(surface, &records);
            painted += records.len();
            reports.push(SpanReport {
                span,
                series: records.len(),
            });
        }

        self.metrics.record_snapshot();
        self.metrics.record_series(painted);
        self.metrics
            .record_filtered(snapshot.records.len().saturating_sub(painted));
        self.logger.record(&format!(
            "snapshot t={:.1} band={} series={} of {}",
            snapshot.timestamp,
            snapshot.band,
            painted,
            snapshot.records.len()
        ));

        reports
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }
}

impl Default for GraphDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::WifiBand;
    use crate::model::{ChannelWidth, SignalDescriptor};

    /// Recording surface: keeps every call so tests can assert exact
    /// arguments and call counts.
    #[derive(Default)]
    struct RecordingSurface {
        existing: BTreeSet<SignalRecord>,
        added: Vec<(SignalRecord, Vec<CurvePoint>, bool)>,
        updated: Vec<(SignalRecord, Vec<CurvePoint>, bool)>,
    }

    impl PlottingSurface for RecordingSurface {
        fn is_new_series(&self, record: &SignalRecord) -> bool {
            !self.existing.contains(record)
        }

        fn add_series(&mut self, record: &SignalRecord, points: &[CurvePoint], highlight: bool) {
            self.added
                .push((record.clone(), points.to_vec(), highlight));
        }

        fn update_series(&mut self, record: &SignalRecord, points: &[CurvePoint], highlight: bool) {
            self.updated
                .push((record.clone(), points.to_vec(), highlight));
        }
    }

    fn record(ssid: &str, frequency: i32) -> SignalRecord {
        SignalRecord::new(
            ssid,
            "00:11:22:33:44:55",
            SignalDescriptor::new(frequency, frequency, ChannelWidth::Mhz20, -40),
        )
    }

    #[test]
    fn new_record_is_added_exactly_once() {
        let builder = GraphDataBuilder::new();
        let mut surface = RecordingSurface::default();
        let detail = record("AP1", 2455);
        let records: BTreeSet<SignalRecord> = [detail.clone()].into_iter().collect();

        builder.paint_series(&mut surface, &records);

        assert_eq!(surface.added.len(), 1);
        assert!(surface.updated.is_empty());
        let (added, points, highlight) = &surface.added[0];
        assert_eq!(added, &detail);
        assert_eq!(points.as_slice(), footprint(&detail).as_slice());
        assert!(*highlight);
    }

    #[test]
    fn existing_record_is_updated_exactly_once() {
        let builder = GraphDataBuilder::new();
        let detail = record("AP1", 2455);
        let mut surface = RecordingSurface {
            existing: [detail.clone()].into_iter().collect(),
            ..Default::default()
        };
        let records: BTreeSet<SignalRecord> = [detail.clone()].into_iter().collect();

        builder.paint_series(&mut surface, &records);

        assert_eq!(surface.updated.len(), 1);
        assert!(surface.added.is_empty());
        let (updated, points, highlight) = &surface.updated[0];
        assert_eq!(updated, &detail);
        assert_eq!(points.as_slice(), footprint(&detail).as_slice());
        assert!(*highlight);
    }

    #[test]
    fn absent_records_trigger_no_calls() {
        let builder = GraphDataBuilder::new();
        let mut surface = RecordingSurface::default();
        builder.paint_series(&mut surface, &BTreeSet::new());
        assert!(surface.added.is_empty());
        assert!(surface.updated.is_empty());
    }

    #[test]
    fn snapshot_walk_covers_every_span_and_counts() {
        let builder = GraphDataBuilder::new();
        let mut surface = RecordingSurface::default();
        let snapshot = ScanSnapshot::new(
            0.0,
            WifiBand::Ghz5,
            vec![
                record("AP1", 5180),
                record("AP2", 5600),
                record("AP3", 2437),
            ],
        );

        let reports = builder.process_snapshot(&mut surface, &snapshot);

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].series, 1);
        assert_eq!(reports[1].series, 1);
        assert_eq!(reports[2].series, 0);
        assert_eq!(surface.added.len(), 2);

        let metrics = builder.metrics().snapshot();
        assert_eq!(metrics.snapshots, 1);
        assert_eq!(metrics.series_painted, 2);
        assert_eq!(metrics.records_filtered, 1);
    }
}
